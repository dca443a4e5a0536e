//! PlanetPulse - city environmental pulse lookup
//!
//! This library resolves a city name to coordinates, fetches current
//! weather/UV and air-quality readings from the OpenMeteo APIs with
//! graceful degradation under partial failure, optionally asks Gemini for
//! a short citizen-facing summary, and renders the result as JSON, SVG
//! gauge, or a terminal report.

pub mod air_quality;
pub mod config;
pub mod error;
pub mod gauge;
pub mod geocoding;
pub mod models;
pub mod pulse;
pub mod summary;
pub mod tier;
pub mod view;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use air_quality::AirQualityClient;
pub use config::PulseConfig;
pub use error::PulseError;
pub use geocoding::GeocodingClient;
pub use models::{AirQualityReading, AqiValue, Location, PulseResult, WeatherReading};
pub use pulse::PulseService;
pub use summary::{GeminiSummarizer, SummaryProvider};
pub use tier::AqiTier;
pub use weather::WeatherClient;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, PulseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
