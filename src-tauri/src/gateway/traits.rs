//! Gateway Layer - Core Trait
//!
//! Defines the abstract interface for remote place reads.
//! Implementations can use the REST backend, in-memory fixtures, etc.

use async_trait::async_trait;

use crate::domain::{DomainResult, Place};

/// Read-only gateway over the `location` collection
///
/// No retries and no timeout policy beyond the transport's defaults;
/// callers convert failures into user-facing alerts.
#[async_trait]
pub trait PlaceGateway: Send + Sync {
    /// All places, ordered by name ascending
    async fn fetch_all(&self) -> DomainResult<Vec<Place>>;

    /// Exactly one place by id; an unknown id is `DomainError::NotFound`,
    /// never a null success
    async fn fetch_by_id(&self, id: &str) -> DomainResult<Place>;
}
