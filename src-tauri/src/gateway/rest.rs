//! REST Gateway
//!
//! PostgREST-style reads against the backend `location` table. Two query
//! shapes only: select-all ordered by name, and select-one by id.

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::{DomainError, DomainResult, Place};

use super::config::BackendConfig;
use super::traits::PlaceGateway;

/// Gateway over the managed backend's REST interface
pub struct RestPlaceGateway {
    client: Client,
    config: BackendConfig,
}

impl RestPlaceGateway {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn location_url(&self) -> String {
        format!("{}/rest/v1/location", self.config.base_url)
    }

    /// Issue a GET with the backend's auth headers and decode the row set
    async fn query_rows(&self, query: &[(&str, &str)]) -> DomainResult<Vec<Place>> {
        let response = self
            .client
            .get(self.location_url())
            .query(query)
            .header("apikey", &self.config.anon_key)
            .header("Authorization", format!("Bearer {}", self.config.anon_key))
            .send()
            .await
            .map_err(|e| DomainError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::Transport(format!(
                "backend returned status {}",
                status
            )));
        }

        response
            .json::<Vec<Place>>()
            .await
            .map_err(|e| DomainError::Internal(e.to_string()))
    }
}

#[async_trait]
impl PlaceGateway for RestPlaceGateway {
    async fn fetch_all(&self) -> DomainResult<Vec<Place>> {
        let places = self
            .query_rows(&[("select", "*"), ("order", "name.asc")])
            .await?;
        log::info!("fetched {} places", places.len());
        Ok(places)
    }

    async fn fetch_by_id(&self, id: &str) -> DomainResult<Place> {
        let id_filter = format!("eq.{}", id);
        let rows = self
            .query_rows(&[("select", "*"), ("id", id_filter.as_str())])
            .await?;

        // Expect exactly one row; an empty set means the id is unknown
        rows.into_iter()
            .next()
            .ok_or_else(|| DomainError::NotFound(format!("place {}", id)))
    }
}
