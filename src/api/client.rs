//! Injectable nearby-places client
//!
//! The client is an explicit capability rather than a process-wide singleton
//! so tests and alternate transports can substitute their own implementation
//! of [`PlacesClient`].
//!
//! Failure semantics: absence of results is a valid, expected outcome.
//! Request construction failures, transport errors, error statuses, and
//! undecodable bodies all collapse to an empty list. They are logged, never
//! surfaced as an error to the caller.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::core::GeoPoint;
use crate::utils::config::{ConfigError, SearchConfig};
use crate::utils::units::meters_from_miles;
use crate::validation::validate_point;

use super::types::{NearbySearchResponse, Place};

/// Capability to fetch places near a geographic origin
#[async_trait]
pub trait PlacesClient: Send + Sync {
    /// Fetch places near `origin`; every failure mode yields an empty list
    async fn fetch_nearby(&self, origin: GeoPoint) -> Vec<Place>;
}

/// HTTP implementation of [`PlacesClient`] against the nearby-search service
pub struct HttpPlacesClient {
    http: reqwest::Client,
    config: SearchConfig,
}

impl HttpPlacesClient {
    /// Create a client with a validated configuration
    pub fn new(config: SearchConfig) -> Result<Self, ConfigError> {
        Self::with_http_client(reqwest::Client::new(), config)
    }

    /// Create a client reusing an existing `reqwest` client (connection pool)
    pub fn with_http_client(
        http: reqwest::Client,
        config: SearchConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

#[async_trait]
impl PlacesClient for HttpPlacesClient {
    async fn fetch_nearby(&self, origin: GeoPoint) -> Vec<Place> {
        if let Err(err) = validate_point(&origin) {
            warn!(origin = %origin, error = %err, "Rejecting nearby search for invalid origin");
            return Vec::new();
        }

        let radius_m = meters_from_miles(self.config.radius_miles);
        let query = [
            ("key", self.config.api_key.clone()),
            ("lat", origin.lat.to_string()),
            ("lon", origin.lon.to_string()),
            ("radius", radius_m.to_string()),
        ];

        let response = match self
            .http
            .get(&self.config.base_url)
            .query(&query)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "Nearby search request failed");
                return Vec::new();
            }
        };

        let response = match response.error_for_status() {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "Nearby search returned an error status");
                return Vec::new();
            }
        };

        let body: NearbySearchResponse = match response.json().await {
            Ok(body) => body,
            Err(err) => {
                warn!(error = %err, "Failed to decode nearby search response");
                return Vec::new();
            }
        };

        let places = body.places();
        debug!(count = places.len(), origin = %origin, "Nearby search completed");
        places
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SearchConfig {
        SearchConfig::new("test-key")
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        assert_eq!(
            HttpPlacesClient::new(SearchConfig::default()).err(),
            Some(ConfigError::MissingApiKey)
        );
        assert!(HttpPlacesClient::new(test_config()).is_ok());
    }

    #[tokio::test]
    async fn test_invalid_origin_yields_empty_list() {
        let client = HttpPlacesClient::new(test_config()).unwrap();
        // Rejected before any request is built; no network involved.
        assert!(client.fetch_nearby(GeoPoint::new(91.0, 0.0)).await.is_empty());
        assert!(
            client
                .fetch_nearby(GeoPoint::new(0.0, f64::NAN))
                .await
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_unbuildable_request_yields_empty_list() {
        let config = SearchConfig {
            base_url: "not a url".to_string(),
            ..test_config()
        };
        let client = HttpPlacesClient::new(config).unwrap();
        assert!(client.fetch_nearby(GeoPoint::new(0.0, 0.0)).await.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_service_yields_empty_list() {
        let config = SearchConfig {
            base_url: "http://127.0.0.1:1/search".to_string(),
            ..test_config()
        };
        let client = HttpPlacesClient::new(config).unwrap();
        assert!(client.fetch_nearby(GeoPoint::new(0.0, 0.0)).await.is_empty());
    }
}
