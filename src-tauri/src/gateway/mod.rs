//! Remote Data Gateway
//!
//! Read-only access to the backend `location` table.

mod traits;
mod config;
mod rest;

#[cfg(test)]
mod memory;
#[cfg(test)]
mod tests;

pub use config::BackendConfig;
#[cfg(test)]
pub use memory::MemoryPlaceGateway;
pub use rest::RestPlaceGateway;
pub use traits::PlaceGateway;
