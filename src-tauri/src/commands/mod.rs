//! Tauri Command Handlers

mod place_cmd;
mod link_cmd;
mod dialog_cmd;

pub use dialog_cmd::*;
pub use link_cmd::*;
pub use place_cmd::*;
