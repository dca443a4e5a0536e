//! Current US AQI from the `OpenMeteo` air-quality API.

use reqwest::Client;
use tracing::debug;

use crate::error::PulseError;
use crate::models::{AirQualityReading, AqiValue, Location};

const AIR_QUALITY_BASE_URL: &str = "https://air-quality-api.open-meteo.com/v1";

const SERVICE: &str = "Air Quality API";

/// Client for the `OpenMeteo` air-quality endpoint.
pub struct AirQualityClient {
    client: Client,
    base_url: String,
}

impl AirQualityClient {
    pub fn new(client: Client) -> Self {
        Self::with_base_url(client, AIR_QUALITY_BASE_URL.to_string())
    }

    /// Create a client against a custom base URL
    pub fn with_base_url(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Fetch the current US AQI for a location.
    ///
    /// Upstream reports `us_aqi: null` where its model has no value; that
    /// succeeds with [`AqiValue::NotAvailable`]. Absence of a pollution
    /// reading is a valid result, not an error.
    pub async fn fetch(&self, location: &Location) -> crate::Result<AirQualityReading> {
        let url = format!(
            "{}/air-quality?latitude={}&longitude={}&current=us_aqi&timezone=auto",
            self.base_url, location.latitude, location.longitude
        );

        debug!("Air quality request URL: {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(PulseError::upstream_status(SERVICE, response.status()));
        }

        let body: openmeteo::AirQualityResponse = response.json().await?;

        let aqi = match body.current.us_aqi {
            // as-casts saturate, so a (nonsensical) negative reading clamps to 0
            Some(value) => AqiValue::Index(value.round() as u32),
            None => AqiValue::NotAvailable,
        };

        Ok(AirQualityReading { aqi })
    }
}

/// `OpenMeteo` air-quality response structures
mod openmeteo {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct AirQualityResponse {
        pub current: CurrentData,
    }

    #[derive(Debug, Deserialize)]
    pub struct CurrentData {
        pub us_aqi: Option<f64>,
    }
}
