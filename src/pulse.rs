//! The aggregation pipeline: geocode, fetch the two data sources in
//! parallel, merge with graceful degradation, then optionally summarize.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::air_quality::AirQualityClient;
use crate::config::PulseConfig;
use crate::error::PulseError;
use crate::geocoding::GeocodingClient;
use crate::models::PulseResult;
use crate::summary::{GeminiSummarizer, SummaryProvider};
use crate::weather::WeatherClient;

/// Orchestrates one environmental-pulse query end to end.
pub struct PulseService {
    geocoding: GeocodingClient,
    weather: WeatherClient,
    air_quality: AirQualityClient,
    summary: Option<Arc<dyn SummaryProvider>>,
}

impl PulseService {
    pub fn new(
        geocoding: GeocodingClient,
        weather: WeatherClient,
        air_quality: AirQualityClient,
        summary: Option<Arc<dyn SummaryProvider>>,
    ) -> Self {
        Self {
            geocoding,
            weather,
            air_quality,
            summary,
        }
    }

    /// Build a service from configuration, with the Gemini summarizer
    /// attached unconditionally. A missing key then fails each query fast
    /// with a configuration error, which is what the HTTP surface wants.
    pub fn from_config(config: &PulseConfig) -> anyhow::Result<Self> {
        let client = config.http_client()?;
        let summarizer: Arc<dyn SummaryProvider> =
            Arc::new(GeminiSummarizer::new(client.clone(), config));
        Ok(Self::new(
            GeocodingClient::new(client.clone()),
            WeatherClient::new(client.clone()),
            AirQualityClient::new(client),
            Some(summarizer),
        ))
    }

    /// Build a service from configuration with an explicit summary
    /// capability. `None` turns the summary card into a placeholder.
    pub fn from_config_with_summary(
        config: &PulseConfig,
        summary: Option<Arc<dyn SummaryProvider>>,
    ) -> anyhow::Result<Self> {
        let client = config.http_client()?;
        Ok(Self::new(
            GeocodingClient::new(client.clone()),
            WeatherClient::new(client.clone()),
            AirQualityClient::new(client),
            summary,
        ))
    }

    /// Run one query.
    ///
    /// Geocoding failures are fatal; the weather/air-quality pair settles
    /// independently and either side may degrade to `None`. Only both
    /// failing fails the query.
    #[instrument(skip(self))]
    pub async fn check(&self, city: &str) -> crate::Result<PulseResult> {
        let city = city.trim();
        if city.is_empty() {
            return Err(PulseError::Validation("City is required.".to_string()));
        }

        // Surface a dead summary capability before spending upstream calls.
        if let Some(provider) = &self.summary {
            provider.ready()?;
        }

        let location = self.geocoding.resolve(city).await?;
        info!(
            "Resolved \"{}\" to {} ({:.4}, {:.4})",
            city,
            location.display_name(),
            location.latitude,
            location.longitude
        );

        // Settle-all: both branches always run to completion; one failing
        // neither cancels nor fails the other.
        let (weather, aqi) = tokio::join!(
            self.weather.fetch(&location),
            self.air_quality.fetch(&location)
        );

        let weather = match weather {
            Ok(reading) => Some(reading),
            Err(err) => {
                warn!("Weather fetch failed for {}: {}", location.name, err);
                None
            }
        };
        let aqi = match aqi {
            Ok(reading) => Some(reading),
            Err(err) => {
                warn!("Air quality fetch failed for {}: {}", location.name, err);
                None
            }
        };

        if weather.is_none() && aqi.is_none() {
            return Err(PulseError::AllSourcesFailed(city.to_string()));
        }

        let summary = match &self.summary {
            Some(provider) => Some(provider.summarize(weather.as_ref(), aqi.as_ref()).await),
            None => None,
        };

        Ok(PulseResult {
            location,
            weather,
            aqi,
            summary,
        })
    }
}
