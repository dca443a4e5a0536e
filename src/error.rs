//! Error types and handling for the PlanetPulse application

use thiserror::Error;

/// Main error type for the PlanetPulse application
#[derive(Error, Debug)]
pub enum PulseError {
    /// Input validation errors
    #[error("Invalid input: {0}")]
    Validation(String),

    /// The geocoder returned no match for the requested place
    #[error("Could not find location for \"{0}\"")]
    NotFound(String),

    /// A data source answered with a non-success HTTP status
    #[error("{service} error: {message}")]
    Upstream {
        service: &'static str,
        message: String,
    },

    /// Transport or payload failures talking to a data source
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Both the weather and the air-quality source failed
    #[error("All data sources (Open-Meteo) failed for \"{0}\"")]
    AllSourcesFailed(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PulseError {
    /// Create an upstream error from a non-success HTTP status
    pub fn upstream_status(service: &'static str, status: reqwest::StatusCode) -> Self {
        Self::Upstream {
            service,
            message: format!("request failed with status {status}"),
        }
    }

    /// Create an upstream error with a custom message
    pub fn upstream<S: Into<String>>(service: &'static str, message: S) -> Self {
        Self::Upstream {
            service,
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            PulseError::Validation(message) => format!("Invalid input: {message}"),
            PulseError::NotFound(city) => {
                format!("Could not find location for \"{city}\". Check the spelling and try again.")
            }
            PulseError::Upstream { .. } | PulseError::Network(_) => {
                "Unable to reach the weather services. Please check your internet connection."
                    .to_string()
            }
            PulseError::AllSourcesFailed(_) => {
                "All data sources failed. Please try again in a moment.".to_string()
            }
            PulseError::Config(message) => {
                format!("Server is not configured: {message}")
            }
        }
    }
}
