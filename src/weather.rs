//! Current weather and peak UV from the `OpenMeteo` forecast API.

use reqwest::Client;
use tracing::debug;

use crate::error::PulseError;
use crate::models::{Location, WeatherReading};

const WEATHER_BASE_URL: &str = "https://api.open-meteo.com/v1";

const SERVICE: &str = "Weather API";

/// Client for the `OpenMeteo` forecast endpoint.
pub struct WeatherClient {
    client: Client,
    base_url: String,
}

impl WeatherClient {
    pub fn new(client: Client) -> Self {
        Self::with_base_url(client, WEATHER_BASE_URL.to_string())
    }

    /// Create a client against a custom base URL
    pub fn with_base_url(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Fetch current temperature and humidity plus the day's maximum UV
    /// index, in the location's own timezone, over a 1-day window.
    ///
    /// A malformed payload fails deserialization and surfaces as a fetch
    /// failure like any other.
    pub async fn fetch(&self, location: &Location) -> crate::Result<WeatherReading> {
        let url = format!(
            "{}/forecast?latitude={}&longitude={}&current=temperature_2m,relative_humidity_2m&daily=uv_index_max&timezone=auto&forecast_days=1",
            self.base_url, location.latitude, location.longitude
        );

        debug!("Weather request URL: {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(PulseError::upstream_status(SERVICE, response.status()));
        }

        let body: openmeteo::ForecastResponse = response.json().await?;

        let uv_index_max = body
            .daily
            .uv_index_max
            .into_iter()
            .next()
            .ok_or_else(|| PulseError::upstream(SERVICE, "forecast carried no UV index values"))?;

        Ok(WeatherReading {
            temperature_c: body.current.temperature,
            humidity_pct: body.current.humidity,
            uv_index_max,
        })
    }
}

/// `OpenMeteo` forecast response structures
mod openmeteo {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub current: CurrentData,
        pub daily: DailyData,
    }

    #[derive(Debug, Deserialize)]
    pub struct CurrentData {
        #[serde(rename = "temperature_2m")]
        pub temperature: f64,
        #[serde(rename = "relative_humidity_2m")]
        pub humidity: f64,
    }

    #[derive(Debug, Deserialize)]
    pub struct DailyData {
        pub uv_index_max: Vec<f64>,
    }
}
