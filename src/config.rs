//! Configuration for the PlanetPulse application
//!
//! Everything comes from the process environment, read once at startup.
//! The Gemini key is the only secret; whether it is required depends on the
//! delivery surface (the server demands it per request, the CLI degrades to
//! a placeholder summary).

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;

/// Default Gemini model used for summaries.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

const USER_AGENT: &str = concat!("PlanetPulse/", env!("CARGO_PKG_VERSION"));

/// Runtime configuration, resolved from the environment.
#[derive(Debug, Clone)]
pub struct PulseConfig {
    /// Secret key for the generative-language API, if present.
    pub gemini_api_key: Option<String>,
    /// Gemini model name used for summaries.
    pub gemini_model: String,
    /// Bound on every outbound HTTP call.
    pub request_timeout: Duration,
}

impl PulseConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        let gemini_api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let gemini_model =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string());

        let request_timeout = match env::var("PLANETPULSE_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs: u64 = raw
                    .parse()
                    .with_context(|| format!("Invalid PLANETPULSE_TIMEOUT_SECS value: {raw}"))?;
                Duration::from_secs(secs)
            }
            Err(_) => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            gemini_api_key,
            gemini_model,
            request_timeout,
        })
    }

    /// Build the shared HTTP client used for every outbound call.
    ///
    /// A hung upstream must never hang a whole query, so the client always
    /// carries the configured timeout.
    pub fn http_client(&self) -> Result<Client> {
        Client::builder()
            .timeout(self.request_timeout)
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to create HTTP client")
    }
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PulseConfig::default();
        assert!(config.gemini_api_key.is_none());
        assert_eq!(config.gemini_model, DEFAULT_GEMINI_MODEL);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_http_client_builds() {
        let config = PulseConfig::default();
        assert!(config.http_client().is_ok());
    }
}
