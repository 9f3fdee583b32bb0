//! # Display Settings
//!
//! How results are rendered by a front end. Settings are plain JSON so they
//! can be kept next to a CLI invocation or shipped with a UI; every field has
//! a default, so a partial document is valid.
//!
//! ## Example
//!
//! ```rust
//! use geo_core::settings::DisplaySettings;
//!
//! let settings: DisplaySettings = serde_json::from_str(r#"{ "precision": 4 }"#).unwrap();
//! assert_eq!(settings.precision, 4);
//! assert_eq!(settings.invalid_marker, "Invalid input");
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{GeoError, GeoResult};

/// Default number of decimal places
pub const DEFAULT_PRECISION: usize = 2;

/// Largest precision accepted; beyond this f64 digits are noise
pub const MAX_PRECISION: usize = 15;

/// Result rendering options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Decimal places shown for each value
    pub precision: usize,

    /// Text shown in place of a non-finite value
    pub invalid_marker: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            precision: DEFAULT_PRECISION,
            invalid_marker: "Invalid input".to_string(),
        }
    }
}

impl DisplaySettings {
    /// Validate settings loaded from an external source.
    pub fn validate(&self) -> GeoResult<()> {
        if self.precision > MAX_PRECISION {
            return Err(GeoError::invalid_input(
                "precision",
                self.precision.to_string(),
                format!("Precision must be at most {}", MAX_PRECISION),
            ));
        }
        if self.invalid_marker.trim().is_empty() {
            return Err(GeoError::invalid_input(
                "invalid_marker",
                "",
                "Invalid marker must not be blank",
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON settings document
    pub fn from_json(json: &str) -> GeoResult<Self> {
        let settings: DisplaySettings = serde_json::from_str(json)
            .map_err(|e| GeoError::invalid_input("settings", json.trim(), e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = DisplaySettings::default();
        assert_eq!(settings.precision, 2);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        assert_eq!(DisplaySettings::from_json("{}").unwrap(), DisplaySettings::default());
    }

    #[test]
    fn test_rejects_excessive_precision() {
        let err = DisplaySettings::from_json(r#"{ "precision": 40 }"#).unwrap_err();
        assert_eq!(err.label(), Some("precision"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(DisplaySettings::from_json("precision = 2").is_err());
    }

    #[test]
    fn test_rejects_blank_marker() {
        assert!(DisplaySettings::from_json(r#"{ "invalid_marker": " " }"#).is_err());
    }
}
