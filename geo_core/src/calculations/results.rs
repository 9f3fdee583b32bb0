//! # Calculation Results
//!
//! Values produced by one dispatch, in calculation display order.
//!
//! ## JSON Example
//!
//! ```json
//! [
//!   { "label": "Area", "value": 12.566370614359172, "unit": "square units", "formula": "CircleArea" },
//!   { "label": "Circumference", "value": 12.566370614359172, "unit": "units", "formula": "CircleCircumference" }
//! ]
//! ```

use serde::{Deserialize, Deserializer, Serialize};

use crate::formulas::Formula;
use crate::settings::DisplaySettings;
use crate::units::Unit;

/// One computed value with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// May be `NaN` when the inputs are outside a formula's domain.
    /// serde_json writes non-finite values as `null`, read back as `NaN`.
    #[serde(deserialize_with = "null_as_nan")]
    pub value: f64,
    pub unit: Unit,
}

impl CalculationResult {
    pub fn new(value: f64, unit: Unit) -> Self {
        CalculationResult { value, unit }
    }

    pub fn is_valid(&self) -> bool {
        self.value.is_finite()
    }

    /// Format for display: fixed precision plus unit, or the invalid marker.
    ///
    /// ```rust
    /// use geo_core::calculations::CalculationResult;
    /// use geo_core::settings::DisplaySettings;
    /// use geo_core::units::Unit;
    ///
    /// let settings = DisplaySettings::default();
    /// assert_eq!(CalculationResult::new(6.0, Unit::SquareUnits).display(&settings), "6.00 square units");
    /// assert_eq!(CalculationResult::new(f64::NAN, Unit::Units).display(&settings), "Invalid input");
    /// ```
    pub fn display(&self, settings: &DisplaySettings) -> String {
        if self.is_valid() {
            format!("{:.*} {}", settings.precision, self.value, self.unit)
        } else {
            settings.invalid_marker.clone()
        }
    }
}

fn null_as_nan<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

/// A result tagged with its label and the formula that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedResult {
    /// Result label (e.g., "Area", "Inner Angle")
    pub label: String,

    #[serde(flatten)]
    pub result: CalculationResult,

    pub formula: Formula,

    /// Formula that derived an input this result depends on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub derived_from: Option<Formula>,
}

impl NamedResult {
    /// Create a result whose unit is taken from the formula's metadata
    pub fn new(label: impl Into<String>, value: f64, formula: Formula) -> Self {
        NamedResult {
            label: label.into(),
            result: CalculationResult::new(value, formula.unit()),
            formula,
            derived_from: None,
        }
    }

    /// Record the derivation behind one of this result's inputs
    pub fn with_derivation(mut self, derivation: Option<Formula>) -> Self {
        self.derived_from = derivation;
        self
    }
}

/// Ordered results of one dispatch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalculationResults {
    entries: Vec<NamedResult>,
}

impl CalculationResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: NamedResult) {
        self.entries.push(entry);
    }

    /// Look up a result by label
    pub fn get(&self, label: &str) -> Option<&CalculationResult> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| &e.result)
    }

    /// Shorthand for the value behind a label
    pub fn value(&self, label: &str) -> Option<f64> {
        self.get(label).map(|r| r.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedResult> {
        self.entries.iter()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }

    /// Formulas applied, deduplicated, in first-use order.
    ///
    /// A derivation is listed ahead of the formula that consumed it.
    pub fn formulas_used(&self) -> Vec<Formula> {
        let mut seen = std::collections::HashSet::new();
        self.entries
            .iter()
            .flat_map(|e| e.derived_from.into_iter().chain(std::iter::once(e.formula)))
            .filter(|f| seen.insert(*f))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Extend<NamedResult> for CalculationResults {
    fn extend<T: IntoIterator<Item = NamedResult>>(&mut self, iter: T) {
        self.entries.extend(iter);
    }
}

impl<'a> IntoIterator for &'a CalculationResults {
    type Item = &'a NamedResult;
    type IntoIter = std::slice::Iter<'a, NamedResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CalculationResults {
        let mut results = CalculationResults::new();
        results.push(NamedResult::new("Area", 12.0, Formula::RectangleArea));
        results.push(NamedResult::new("Perimeter", 14.0, Formula::RectanglePerimeter));
        results
    }

    #[test]
    fn test_lookup() {
        let results = sample();
        assert_eq!(results.value("Area"), Some(12.0));
        assert_eq!(results.get("Perimeter").unwrap().unit, Unit::Units);
        assert!(results.get("Volume").is_none());
        assert_eq!(results.labels(), vec!["Area", "Perimeter"]);
    }

    #[test]
    fn test_display_precision() {
        let settings = DisplaySettings { precision: 3, ..DisplaySettings::default() };
        let r = CalculationResult::new(std::f64::consts::PI, Unit::Units);
        assert_eq!(r.display(&settings), "3.142 units");
    }

    #[test]
    fn test_display_rounds_half_digits() {
        let r = CalculationResult::new(12.566370614359172, Unit::SquareUnits);
        assert_eq!(r.display(&DisplaySettings::default()), "12.57 square units");
    }

    #[test]
    fn test_infinite_is_invalid() {
        let r = CalculationResult::new(f64::INFINITY, Unit::Units);
        assert!(!r.is_valid());
        assert_eq!(r.display(&DisplaySettings::default()), "Invalid input");
    }

    #[test]
    fn test_serialization_shape() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains("\"label\":\"Area\",\"value\":12.0,\"unit\":\"square units\""));
        let roundtrip: CalculationResults = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, sample());
    }

    #[test]
    fn test_invalid_value_survives_json() {
        let mut results = sample();
        results.push(NamedResult::new("Area", f64::NAN, Formula::HeronArea));
        let json = serde_json::to_string(&results).unwrap();
        assert!(json.contains("\"value\":null"));

        let roundtrip: CalculationResults = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.len(), 3);
        let last = roundtrip.iter().last().unwrap();
        assert!(last.result.value.is_nan());
        assert_eq!(last.result.display(&DisplaySettings::default()), "Invalid input");
    }

    #[test]
    fn test_derivation_listed_first() {
        let mut results = CalculationResults::new();
        results.push(
            NamedResult::new("Area", 6.0, Formula::BaseHeightTriangleArea)
                .with_derivation(Some(Formula::RightTriangleLeg)),
        );
        results.push(NamedResult::new("Hypotenuse", 5.0, Formula::RightTriangleHypotenuse));
        assert_eq!(
            results.formulas_used(),
            vec![
                Formula::RightTriangleLeg,
                Formula::BaseHeightTriangleArea,
                Formula::RightTriangleHypotenuse
            ]
        );
        let json = serde_json::to_string(&results).unwrap();
        assert_eq!(json.matches("derived_from").count(), 1);
    }
}
