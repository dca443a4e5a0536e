//! Place-name resolution via the `OpenMeteo` geocoding API (no API key required).

use reqwest::Client;
use tracing::debug;

use crate::error::PulseError;
use crate::models::Location;

const GEOCODING_BASE_URL: &str = "https://geocoding-api.open-meteo.com/v1";

const SERVICE: &str = "Geocoding API";

/// Client for the `OpenMeteo` geocoding search endpoint.
pub struct GeocodingClient {
    client: Client,
    base_url: String,
}

impl GeocodingClient {
    pub fn new(client: Client) -> Self {
        Self::with_base_url(client, GEOCODING_BASE_URL.to_string())
    }

    /// Create a client against a custom base URL
    pub fn with_base_url(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Resolve a free-text place name to its single best match.
    ///
    /// Zero results is a [`PulseError::NotFound`]; there is no fallback for
    /// an unknown place. One attempt, no retries.
    pub async fn resolve(&self, city: &str) -> crate::Result<Location> {
        let url = format!(
            "{}/search?name={}&count=1&language=en&format=json",
            self.base_url,
            urlencoding::encode(city)
        );

        debug!("Geocoding request URL: {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(PulseError::upstream_status(SERVICE, response.status()));
        }

        let body: openmeteo::GeocodingResponse = response.json().await?;

        body.results
            .unwrap_or_default()
            .into_iter()
            .next()
            .map(Location::from)
            .ok_or_else(|| PulseError::NotFound(city.to_string()))
    }
}

/// `OpenMeteo` geocoding response structures
mod openmeteo {
    use serde::Deserialize;

    use crate::models::Location;

    #[derive(Debug, Deserialize)]
    pub struct GeocodingResponse {
        pub results: Option<Vec<GeocodingResult>>,
    }

    #[derive(Debug, Deserialize)]
    pub struct GeocodingResult {
        pub name: String,
        pub latitude: f64,
        pub longitude: f64,
        pub country: Option<String>,
    }

    impl From<GeocodingResult> for Location {
        fn from(result: GeocodingResult) -> Self {
            Location {
                latitude: result.latitude,
                longitude: result.longitude,
                name: result.name,
                country: result.country,
            }
        }
    }
}
