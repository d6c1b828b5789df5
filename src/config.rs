// Booking configuration, loadable from a JSON file

use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BookingConfig {
    // Longer host names are truncated to this many characters
    pub host_name_max_chars: usize,
    // Reject a booking when its template's room number is already booked
    pub enforce_room_availability: bool,
    // None re-prompts forever on invalid input
    pub max_prompt_attempts: Option<u32>,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            host_name_max_chars: 49,
            enforce_room_availability: false,
            max_prompt_attempts: None,
        }
    }
}

impl BookingConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host_name_max_chars == 0 {
            return Err(ConfigError::InvalidValue {
                field: "host_name_max_chars",
                reason: "must be at least 1".into(),
            });
        }

        if self.max_prompt_attempts == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "max_prompt_attempts",
                reason: "must be at least 1, or null for unbounded".into(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = BookingConfig::from_json("{}").unwrap();
        assert_eq!(config, BookingConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config =
            BookingConfig::from_json(r#"{ "max_prompt_attempts": 3, "enforce_room_availability": true }"#)
                .unwrap();

        assert_eq!(config.max_prompt_attempts, Some(3));
        assert!(config.enforce_room_availability);
        assert_eq!(config.host_name_max_chars, 49);
    }

    #[test]
    fn test_rejects_zero_limits() {
        let err = BookingConfig::from_json(r#"{ "host_name_max_chars": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "host_name_max_chars",
                ..
            }
        ));

        let err = BookingConfig::from_json(r#"{ "max_prompt_attempts": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "max_prompt_attempts",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_unknown_fields_and_bad_json() {
        assert!(matches!(
            BookingConfig::from_json(r#"{ "max_rooms": 4 }"#),
            Err(ConfigError::JsonParseError(_))
        ));
        assert!(matches!(
            BookingConfig::from_json("not json"),
            Err(ConfigError::JsonParseError(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = BookingConfig::load("/nonexistent/room_booking.json").unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
