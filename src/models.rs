//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Place data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub image_url: String,
    pub phone: Option<String>,
}

impl Place {
    /// Phone number usable for the call action, if any
    pub fn phone_number(&self) -> Option<&str> {
        self.phone.as_deref().filter(|p| !p.is_empty())
    }

    /// Description text, or None when empty/absent
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}
