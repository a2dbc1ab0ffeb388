//! Place Entity
//!
//! One point-of-interest row from the backend `location` table. Read-only:
//! places are constructed from query responses and never mutated locally.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// A point of interest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Opaque identifier, unique within a fetch result
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Free-form grouping label; the filterable set is derived from data
    pub category: String,
    pub address: String,
    /// Coordinates feed outbound map links only; no range validation
    pub latitude: f64,
    pub longitude: f64,
    pub image_url: String,
    #[serde(default)]
    pub phone: Option<String>,
}

impl Entity for Place {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }
}
