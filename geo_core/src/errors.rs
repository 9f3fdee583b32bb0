//! # Error Types
//!
//! Structured error types for geo_core. Every failure a caller can see is a
//! variant here, carrying enough context (which label, which value) for a
//! front end to re-prompt for the offending field without parsing messages.
//!
//! ## Example
//!
//! ```rust
//! use geo_core::errors::{GeoError, GeoResult};
//!
//! fn validate_radius(radius: f64) -> GeoResult<()> {
//!     if radius <= 0.0 {
//!         return Err(GeoError::non_positive("Radius", radius.to_string()));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_radius(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for geo_core operations
pub type GeoResult<T> = Result<T, GeoError>;

/// Structured error type for catalog and calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum GeoError {
    /// A supplied value does not parse to a finite number
    #[error("Invalid number for '{label}': '{value}' - please enter a valid number")]
    InvalidNumber { label: String, value: String },

    /// A supplied measurement is zero or negative
    #[error("Invalid measurement for '{label}': {value} - all measurements must be greater than 0")]
    NonPositiveMeasurement { label: String, value: String },

    /// Shape name is not in the catalog
    #[error("Unknown shape: {name}")]
    UnknownShape { name: String },

    /// A measurement the shape needs was not supplied
    #[error("Missing required input: {label}")]
    MissingInput { label: String },

    /// A parsed value is outside the domain of its formula
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The shape does not support the requested calculation kind
    #[error("Unsupported calculation: {calculation} is not defined for {shape}")]
    UnsupportedCalculation { shape: String, calculation: String },

    /// A shape definition contradicts itself or the rest of the catalog
    #[error("Inconsistent catalog entry '{shape}': {reason}")]
    CatalogInconsistent { shape: String, reason: String },
}

impl GeoError {
    /// Create an InvalidNumber error
    pub fn invalid_number(label: impl Into<String>, value: impl Into<String>) -> Self {
        GeoError::InvalidNumber {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Create a NonPositiveMeasurement error
    pub fn non_positive(label: impl Into<String>, value: impl Into<String>) -> Self {
        GeoError::NonPositiveMeasurement {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Create an UnknownShape error
    pub fn unknown_shape(name: impl Into<String>) -> Self {
        GeoError::UnknownShape { name: name.into() }
    }

    /// Create a MissingInput error
    pub fn missing_input(label: impl Into<String>) -> Self {
        GeoError::MissingInput {
            label: label.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        GeoError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnsupportedCalculation error
    pub fn unsupported(shape: impl Into<String>, calculation: impl Into<String>) -> Self {
        GeoError::UnsupportedCalculation {
            shape: shape.into(),
            calculation: calculation.into(),
        }
    }

    /// Create a CatalogInconsistent error
    pub fn catalog_inconsistent(shape: impl Into<String>, reason: impl Into<String>) -> Self {
        GeoError::CatalogInconsistent {
            shape: shape.into(),
            reason: reason.into(),
        }
    }

    /// Check if the caller can recover by re-prompting for input
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, GeoError::CatalogInconsistent { .. })
    }

    /// The input label this error points at, if any
    pub fn label(&self) -> Option<&str> {
        match self {
            GeoError::InvalidNumber { label, .. }
            | GeoError::NonPositiveMeasurement { label, .. }
            | GeoError::MissingInput { label } => Some(label),
            GeoError::InvalidInput { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            GeoError::InvalidNumber { .. } => "INVALID_NUMBER",
            GeoError::NonPositiveMeasurement { .. } => "NON_POSITIVE_MEASUREMENT",
            GeoError::UnknownShape { .. } => "UNKNOWN_SHAPE",
            GeoError::MissingInput { .. } => "MISSING_INPUT",
            GeoError::InvalidInput { .. } => "INVALID_INPUT",
            GeoError::UnsupportedCalculation { .. } => "UNSUPPORTED_CALCULATION",
            GeoError::CatalogInconsistent { .. } => "CATALOG_INCONSISTENT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = GeoError::non_positive("Radius", "-5");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"NonPositiveMeasurement\""));
        let roundtrip: GeoError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(GeoError::invalid_number("Radius", "abc").error_code(), "INVALID_NUMBER");
        assert_eq!(GeoError::unknown_shape("Hexagon").error_code(), "UNKNOWN_SHAPE");
        assert_eq!(GeoError::missing_input("Height").error_code(), "MISSING_INPUT");
    }

    #[test]
    fn test_error_messages() {
        let err = GeoError::invalid_number("Side a", "abc");
        assert_eq!(
            err.to_string(),
            "Invalid number for 'Side a': 'abc' - please enter a valid number"
        );
        assert_eq!(err.label(), Some("Side a"));
        assert_eq!(GeoError::unknown_shape("Blob").label(), None);
    }

    #[test]
    fn test_recoverable() {
        assert!(GeoError::non_positive("Radius", "0").is_recoverable());
        assert!(!GeoError::catalog_inconsistent("Circle", "duplicate").is_recoverable());
    }
}
