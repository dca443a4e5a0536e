//! AI summaries of the aggregated readings.
//!
//! The summary is a nicety layered on top of real data: once weather or AQI
//! readings exist, a summarization failure must never fail the query. The
//! Gemini implementation therefore degrades to fixed fallback strings and
//! only ever reports one hard error, a missing API key, through [`ready`].
//!
//! [`ready`]: SummaryProvider::ready

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::config::PulseConfig;
use crate::error::PulseError;
use crate::models::{AirQualityReading, WeatherReading};

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Returned when the AI call fails outright.
pub const FALLBACK_UNREACHABLE: &str = "Failed to connect to AI.";

/// Returned when the AI answers successfully but without any text.
pub const FALLBACK_EMPTY: &str = "Could not generate AI summary.";

/// Capability interface for summary generation.
///
/// Whether a summary provider is attached at all is a configuration
/// decision made at startup; the aggregation pipeline is identical either
/// way.
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    /// Verify the provider is usable, before any upstream work happens.
    fn ready(&self) -> crate::Result<()>;

    /// Produce a short citizen-facing summary of the available readings.
    ///
    /// Never fails; degraded outcomes come back as fallback strings.
    async fn summarize(
        &self,
        weather: Option<&WeatherReading>,
        aqi: Option<&AirQualityReading>,
    ) -> String;
}

/// Google Gemini summary provider
pub struct GeminiSummarizer {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl GeminiSummarizer {
    pub fn new(client: Client, config: &PulseConfig) -> Self {
        Self::with_base_url(client, config, GEMINI_BASE_URL.to_string())
    }

    /// Create a summarizer against a custom base URL
    pub fn with_base_url(client: Client, config: &PulseConfig, base_url: String) -> Self {
        Self {
            client,
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
            base_url,
        }
    }

    fn build_prompt(
        weather: Option<&WeatherReading>,
        aqi: Option<&AirQualityReading>,
    ) -> String {
        let aqi_text = aqi.map_or_else(|| "N/A".to_string(), |reading| reading.aqi.to_string());
        let temperature = weather.map_or_else(|| "N/A".to_string(), |w| w.temperature_c.to_string());
        let uv = weather.map_or_else(|| "N/A".to_string(), |w| w.uv_index_max.to_string());

        format!(
            "Act as an environmental health analyst for \"PlanetPulse\".\n\
             Given this live data, write a 2-sentence summary for a citizen.\n\
             - Air Quality (AQI): {aqi_text} (Lower is better. >100 is unhealthy)\n\
             - Temperature: {temperature} °C\n\
             - UV Index: {uv} (Higher is more harmful)"
        )
    }

    /// One `generateContent` call. `Ok(None)` means the model answered
    /// without usable text.
    async fn call(&self, api_key: &str, prompt: &str) -> crate::Result<Option<String>> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, api_key
        );

        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            debug!("Gemini API error body: {}", error_body);
            return Err(PulseError::upstream_status("Gemini API", status));
        }

        let body: GeminiResponse = response.json().await?;

        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .filter(|text| !text.trim().is_empty());

        Ok(text)
    }
}

#[async_trait]
impl SummaryProvider for GeminiSummarizer {
    fn ready(&self) -> crate::Result<()> {
        if self.api_key.is_none() {
            return Err(PulseError::Config(
                "GEMINI_API_KEY is not set in environment".to_string(),
            ));
        }
        Ok(())
    }

    async fn summarize(
        &self,
        weather: Option<&WeatherReading>,
        aqi: Option<&AirQualityReading>,
    ) -> String {
        let Some(api_key) = self.api_key.clone() else {
            return FALLBACK_UNREACHABLE.to_string();
        };

        let prompt = Self::build_prompt(weather, aqi);
        debug!("Gemini prompt:\n{}", prompt);

        match self.call(&api_key, &prompt).await {
            Ok(Some(text)) => text,
            Ok(None) => FALLBACK_EMPTY.to_string(),
            Err(err) => {
                error!("Gemini API call failed: {}", err);
                FALLBACK_UNREACHABLE.to_string()
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}
