//! Core data types shared across the fetch pipeline and both render surfaces.
//!
//! Everything here lives for exactly one query; nothing is cached or
//! persisted between searches.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A resolved place, taken from the best geocoding match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    pub country: Option<String>,
}

impl Location {
    /// Display name of the place, with the country when known.
    #[must_use]
    pub fn display_name(&self) -> String {
        match &self.country {
            Some(country) => format!("{}, {}", self.name, country),
            None => self.name.clone(),
        }
    }
}

/// Current weather readings plus the day's peak UV index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub uv_index_max: f64,
}

/// A US AQI value, or the explicit "unavailable" sentinel.
///
/// Upstream reports `null` where its model has no value for a location.
/// That is a valid result, not an error, and it crosses the wire as the
/// string `"N/A"` in place of the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AqiValue {
    Index(u32),
    NotAvailable,
}

impl AqiValue {
    #[must_use]
    pub fn as_index(self) -> Option<u32> {
        match self {
            Self::Index(value) => Some(value),
            Self::NotAvailable => None,
        }
    }
}

impl fmt::Display for AqiValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(value) => write!(f, "{value}"),
            Self::NotAvailable => f.write_str("N/A"),
        }
    }
}

impl Serialize for AqiValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Index(value) => serializer.serialize_u32(*value),
            Self::NotAvailable => serializer.serialize_str("N/A"),
        }
    }
}

impl<'de> Deserialize<'de> for AqiValue {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Index(u32),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Index(value) => Ok(Self::Index(value)),
            Raw::Text(text) if text == "N/A" => Ok(Self::NotAvailable),
            Raw::Text(text) => Err(serde::de::Error::custom(format!(
                "unexpected AQI value \"{text}\""
            ))),
        }
    }
}

/// Current air quality at a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirQualityReading {
    pub aqi: AqiValue,
}

/// The unit returned to the render surfaces for one query.
///
/// At least one of `weather`/`aqi` is always present; a query where both
/// sources failed never produces a `PulseResult`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PulseResult {
    pub location: Location,
    pub weather: Option<WeatherReading>,
    pub aqi: Option<AirQualityReading>,
    pub summary: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aqi_value_serializes_as_number_or_sentinel() {
        let index = serde_json::to_value(AqiValue::Index(42)).unwrap();
        assert_eq!(index, serde_json::json!(42));

        let missing = serde_json::to_value(AqiValue::NotAvailable).unwrap();
        assert_eq!(missing, serde_json::json!("N/A"));
    }

    #[test]
    fn test_aqi_value_deserializes_both_shapes() {
        let index: AqiValue = serde_json::from_str("42").unwrap();
        assert_eq!(index, AqiValue::Index(42));

        let missing: AqiValue = serde_json::from_str("\"N/A\"").unwrap();
        assert_eq!(missing, AqiValue::NotAvailable);

        let bad: Result<AqiValue, _> = serde_json::from_str("\"fine\"");
        assert!(bad.is_err());
    }

    #[test]
    fn test_aqi_value_display() {
        assert_eq!(AqiValue::Index(123).to_string(), "123");
        assert_eq!(AqiValue::NotAvailable.to_string(), "N/A");
    }

    #[test]
    fn test_location_display_name() {
        let paris = Location {
            latitude: 48.85,
            longitude: 2.35,
            name: "Paris".to_string(),
            country: Some("France".to_string()),
        };
        assert_eq!(paris.display_name(), "Paris, France");

        let unnamed = Location {
            latitude: 0.0,
            longitude: 0.0,
            name: "Null Island".to_string(),
            country: None,
        };
        assert_eq!(unnamed.display_name(), "Null Island");
    }

    #[test]
    fn test_pulse_result_wire_shape() {
        let result = PulseResult {
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
            summary: None,
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["weather"]["temperature_c"], serde_json::json!(18.0));
        assert_eq!(value["aqi"]["aqi"], serde_json::json!(42));
        assert_eq!(value["summary"], serde_json::Value::Null);
    }
}
