//! In-Memory Gateway
//!
//! Fixture-backed implementation for tests.

use async_trait::async_trait;

use crate::domain::{DomainError, DomainResult, Entity, Place};

use super::traits::PlaceGateway;

/// Gateway over a fixed in-memory place list
pub struct MemoryPlaceGateway {
    places: Vec<Place>,
}

impl MemoryPlaceGateway {
    pub fn new(places: Vec<Place>) -> Self {
        Self { places }
    }
}

#[async_trait]
impl PlaceGateway for MemoryPlaceGateway {
    async fn fetch_all(&self) -> DomainResult<Vec<Place>> {
        let mut places = self.places.clone();
        places.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(places)
    }

    async fn fetch_by_id(&self, id: &str) -> DomainResult<Place> {
        self.places
            .iter()
            .find(|p| p.id().as_str() == id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(format!("place {}", id)))
    }
}
