//! Terminal rendering of a pulse report.
//!
//! Uses the same labels and units as the browser data list, so the two
//! surfaces read identically.

use std::fmt::Write as _;

use crate::models::{AqiValue, PulseResult};
use crate::tier::AqiTier;

/// Shown in place of a summary when no AI provider is configured.
pub const SUMMARY_PLACEHOLDER: &str = "AI analysis coming soon.";

/// Format a `PulseResult` as a multi-line terminal report.
#[must_use]
pub fn render_report(result: &PulseResult) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Environmental pulse for {}",
        result.location.display_name()
    );

    if let Some(weather) = &result.weather {
        let _ = writeln!(out, "  Temperature: {} °C", weather.temperature_c);
        let _ = writeln!(out, "  Humidity: {} %", weather.humidity_pct);
        let _ = writeln!(out, "  Max UV Index: {}", weather.uv_index_max);
    } else {
        let _ = writeln!(out, "  Weather data unavailable");
    }

    match &result.aqi {
        Some(reading) => match reading.aqi {
            AqiValue::Index(value) => {
                let tier = AqiTier::for_value(value);
                let _ = writeln!(out, "  US AQI: {} ({})", value, tier.label());
            }
            AqiValue::NotAvailable => {
                let _ = writeln!(out, "  US AQI: N/A");
            }
        },
        None => {
            let _ = writeln!(out, "  Air quality data unavailable");
        }
    }

    let summary = result.summary.as_deref().unwrap_or(SUMMARY_PLACEHOLDER);
    let _ = writeln!(out, "\n{summary}");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AirQualityReading, Location, WeatherReading};

    fn paris_result() -> PulseResult {
        PulseResult {
            location: Location {
                latitude: 48.85,
                longitude: 2.35,
                name: "Paris".to_string(),
                country: Some("France".to_string()),
            },
            weather: Some(WeatherReading {
                temperature_c: 18.0,
                humidity_pct: 60.0,
                uv_index_max: 4.0,
            }),
            aqi: Some(AirQualityReading {
                aqi: AqiValue::Index(42),
            }),
            summary: Some("Air quality is good today.".to_string()),
        }
    }

    #[test]
    fn test_report_lists_all_readings() {
        let report = render_report(&paris_result());

        assert!(report.contains("Environmental pulse for Paris, France"));
        assert!(report.contains("Temperature: 18 °C"));
        assert!(report.contains("Humidity: 60 %"));
        assert!(report.contains("Max UV Index: 4"));
        assert!(report.contains("US AQI: 42 (Good)"));
        assert!(report.contains("Air quality is good today."));
    }

    #[test]
    fn test_report_marks_missing_sources() {
        let mut result = paris_result();
        result.weather = None;
        result.summary = None;

        let report = render_report(&result);
        assert!(report.contains("Weather data unavailable"));
        assert!(report.contains(SUMMARY_PLACEHOLDER));
    }

    #[test]
    fn test_report_shows_aqi_sentinel() {
        let mut result = paris_result();
        result.aqi = Some(AirQualityReading {
            aqi: AqiValue::NotAvailable,
        });

        let report = render_report(&result);
        assert!(report.contains("US AQI: N/A"));
    }
}
