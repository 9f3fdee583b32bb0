//! # Measurement Parsing
//!
//! Turns the raw `label -> string` map a form collects into validated
//! numbers. Validation is all-or-nothing: the first failure aborts the whole
//! call and nothing is computed.
//!
//! Order is deterministic. Labels are visited in sorted order, and every
//! value is parsed before any sign check, so an unparsable value is always
//! reported ahead of a non-positive one.

use std::collections::BTreeMap;

use crate::errors::{GeoError, GeoResult};

/// Validated, strictly positive measurements keyed by input label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Measurements {
    values: BTreeMap<String, f64>,
}

impl Measurements {
    /// Parse and validate raw form values.
    ///
    /// Blank (whitespace-only) values are treated as not supplied.
    ///
    /// # Errors
    ///
    /// * `InvalidNumber` - a value is not a finite number
    /// * `NonPositiveMeasurement` - a value is zero or negative
    ///
    /// # Example
    ///
    /// ```rust
    /// use geo_core::calculations::Measurements;
    ///
    /// let m = Measurements::parse([("Radius", " 2.5 "), ("Height", "")]).unwrap();
    /// assert_eq!(m.get("Radius"), Some(2.5));
    /// assert_eq!(m.get("Height"), None);
    ///
    /// assert!(Measurements::parse([("Radius", "abc")]).is_err());
    /// assert!(Measurements::parse([("Radius", "-5")]).is_err());
    /// ```
    pub fn parse<I, K, V>(values: I) -> GeoResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let raw: BTreeMap<String, String> = values
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_string(), v.as_ref().trim().to_string()))
            .filter(|(_, v)| !v.is_empty())
            .collect();

        let mut parsed = BTreeMap::new();
        for (label, text) in &raw {
            let value = text
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| GeoError::invalid_number(label, text))?;
            parsed.insert(label.clone(), value);
        }

        if let Some(label) = parsed.iter().find(|(_, v)| **v <= 0.0).map(|(label, _)| label) {
            return Err(GeoError::non_positive(label, raw[label].as_str()));
        }

        Ok(Measurements { values: parsed })
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.values.get(label).copied()
    }

    /// A value the calculation cannot proceed without
    pub fn require(&self, label: &str) -> GeoResult<f64> {
        self.get(label).ok_or_else(|| GeoError::missing_input(label))
    }

    /// A polygon side count: a whole number of at least 3
    pub fn side_count(&self, label: &str) -> GeoResult<f64> {
        let n = self.require(label)?;
        if n.fract() != 0.0 || n < 3.0 {
            return Err(GeoError::invalid_input(
                label,
                n.to_string(),
                "Number of sides must be a whole number of at least 3",
            ));
        }
        Ok(n)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let m = Measurements::parse([("Length", "3"), ("Width", "4.5"), ("Height", "1e2")]).unwrap();
        assert_eq!(m.len(), 3);
        assert_eq!(m.get("Width"), Some(4.5));
        assert_eq!(m.get("Height"), Some(100.0));
    }

    #[test]
    fn test_invalid_number() {
        let err = Measurements::parse([("Radius", "abc")]).unwrap_err();
        assert_eq!(err, GeoError::invalid_number("Radius", "abc"));
    }

    #[test]
    fn test_non_finite_rejected() {
        for text in ["inf", "-inf", "NaN", "1e400"] {
            let err = Measurements::parse([("Radius", text)]).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_NUMBER", "{} should be rejected", text);
        }
    }

    #[test]
    fn test_non_positive() {
        for text in ["0", "-5", "-0.0001"] {
            let err = Measurements::parse([("Side length", text)]).unwrap_err();
            assert_eq!(err, GeoError::non_positive("Side length", text));
        }
    }

    #[test]
    fn test_invalid_number_reported_before_non_positive() {
        // "A" sorts first but is merely negative; "Z" is unparsable
        let err = Measurements::parse([("A", "-1"), ("Z", "x")]).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_NUMBER");
    }

    #[test]
    fn test_first_failure_in_label_order() {
        let err = Measurements::parse([("Side c", "q"), ("Side a", "p")]).unwrap_err();
        assert_eq!(err.label(), Some("Side a"));
    }

    #[test]
    fn test_blank_is_absent() {
        let m = Measurements::parse([("Height", "   "), ("Base", "2")]).unwrap();
        assert_eq!(m.get("Height"), None);
        assert_eq!(m.require("Height").unwrap_err().error_code(), "MISSING_INPUT");
    }

    #[test]
    fn test_side_count() {
        let m = Measurements::parse([("n", "6"), ("bad", "2.5"), ("two", "2")]).unwrap();
        assert_eq!(m.side_count("n").unwrap(), 6.0);
        assert_eq!(m.side_count("bad").unwrap_err().error_code(), "INVALID_INPUT");
        assert_eq!(m.side_count("two").unwrap_err().error_code(), "INVALID_INPUT");
    }
}
