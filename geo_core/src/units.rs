//! # Unit Labels
//!
//! Every calculation result carries one of four unit labels. Measurements are
//! dimensionless "units" chosen by the user, so results only record the
//! dimension of the quantity (length, area, volume) or that it is an angle.
//!
//! ## Example
//!
//! ```rust
//! use geo_core::units::Unit;
//!
//! assert_eq!(Unit::SquareUnits.as_str(), "square units");
//! assert_eq!(serde_json::to_string(&Unit::Degrees).unwrap(), "\"degrees\"");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unit attached to a calculation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    /// Length (perimeter, diagonal, side)
    #[serde(rename = "units")]
    Units,
    /// Area (area, surface area)
    #[serde(rename = "square units")]
    SquareUnits,
    /// Volume
    #[serde(rename = "cubic units")]
    CubicUnits,
    /// Angle in degrees
    #[serde(rename = "degrees")]
    Degrees,
}

impl Unit {
    /// Display string, identical to the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Units => "units",
            Unit::SquareUnits => "square units",
            Unit::CubicUnits => "cubic units",
            Unit::Degrees => "degrees",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
