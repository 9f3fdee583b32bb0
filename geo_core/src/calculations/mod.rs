//! # Shape Calculations
//!
//! The formula dispatcher. A calculation follows the pattern:
//!
//! - [`Measurements`] - raw form values parsed and validated
//! - [`ShapeInput`] - measurements bound to a shape's typed input struct
//! - [`CalculationResults`] - every result the shape declares, in order
//!
//! [`calculate`] runs all three steps for a shape name from the built-in
//! catalog.
//!
//! ## Example
//!
//! ```rust
//! use geo_core::calculations::calculate;
//!
//! let results = calculate("Rectangle", [("Length", "3"), ("Width", "4")]).unwrap();
//! assert_eq!(results.value("Area"), Some(12.0));
//! assert_eq!(results.value("Perimeter"), Some(14.0));
//! assert_eq!(results.value("Diagonal"), Some(5.0));
//! ```
//!
//! ## Available Shapes
//!
//! - [`plane`] - circle, ellipse, quadrilaterals, regular polygon, triangles
//! - [`solid`] - cube, box, sphere, cylinder, cone, regular prism and pyramid

pub mod measurements;
pub mod plane;
pub mod results;
pub mod solid;

use serde::{Deserialize, Serialize};

use crate::catalog::{self, CalculationKind, ShapeDefinition, ShapeKind};
use crate::errors::{GeoError, GeoResult};

pub use measurements::Measurements;
pub use plane::{
    CircleInput, EllipseInput, EquilateralTriangleInput, IsoscelesTriangleInput, ParallelogramInput,
    RectangleInput, RegularPolygonInput, RhombusInput, RightTriangleInput, ScaleneTriangleInput, SquareInput,
    TrapeziumInput,
};
pub use results::{CalculationResult, CalculationResults, NamedResult};
pub use solid::{BoxInput, CubeInput, RegularSolidInput, RoundSolidInput, SphereInput};

/// Bound inputs for any shape.
///
/// One variant per [`ShapeKind`], so adding a shape fails to compile until it
/// is handled here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape")]
pub enum ShapeInput {
    Circle(CircleInput),
    Ellipse(EllipseInput),
    Square(SquareInput),
    Rectangle(RectangleInput),
    Trapezium(TrapeziumInput),
    Parallelogram(ParallelogramInput),
    Rhombus(RhombusInput),
    RegularPolygon(RegularPolygonInput),
    EquilateralTriangle(EquilateralTriangleInput),
    IsoscelesTriangle(IsoscelesTriangleInput),
    ScaleneTriangle(ScaleneTriangleInput),
    RightTriangle(RightTriangleInput),
    Cube(CubeInput),
    #[serde(rename = "Box")]
    RectangularBox(BoxInput),
    Sphere(SphereInput),
    Cylinder(RoundSolidInput),
    Cone(RoundSolidInput),
    RegularPrism(RegularSolidInput),
    RegularPyramid(RegularSolidInput),
}

impl ShapeInput {
    /// Bind validated measurements to the typed inputs of `kind`.
    ///
    /// Labels not used by the shape are ignored.
    pub fn from_measurements(kind: ShapeKind, m: &Measurements) -> GeoResult<Self> {
        Ok(match kind {
            ShapeKind::Circle => ShapeInput::Circle(CircleInput::from_measurements(m)?),
            ShapeKind::Ellipse => ShapeInput::Ellipse(EllipseInput::from_measurements(m)?),
            ShapeKind::Square => ShapeInput::Square(SquareInput::from_measurements(m)?),
            ShapeKind::Rectangle => ShapeInput::Rectangle(RectangleInput::from_measurements(m)?),
            ShapeKind::Trapezium => ShapeInput::Trapezium(TrapeziumInput::from_measurements(m)?),
            ShapeKind::Parallelogram => ShapeInput::Parallelogram(ParallelogramInput::from_measurements(m)?),
            ShapeKind::Rhombus => ShapeInput::Rhombus(RhombusInput::from_measurements(m)?),
            ShapeKind::RegularPolygon => ShapeInput::RegularPolygon(RegularPolygonInput::from_measurements(m)?),
            ShapeKind::EquilateralTriangle => {
                ShapeInput::EquilateralTriangle(EquilateralTriangleInput::from_measurements(m)?)
            }
            ShapeKind::IsoscelesTriangle => {
                ShapeInput::IsoscelesTriangle(IsoscelesTriangleInput::from_measurements(m)?)
            }
            ShapeKind::ScaleneTriangle => ShapeInput::ScaleneTriangle(ScaleneTriangleInput::from_measurements(m)?),
            ShapeKind::RightTriangle => ShapeInput::RightTriangle(RightTriangleInput::from_measurements(m)?),
            ShapeKind::Cube => ShapeInput::Cube(CubeInput::from_measurements(m)?),
            ShapeKind::RectangularBox => ShapeInput::RectangularBox(BoxInput::from_measurements(m)?),
            ShapeKind::Sphere => ShapeInput::Sphere(SphereInput::from_measurements(m)?),
            ShapeKind::Cylinder => ShapeInput::Cylinder(RoundSolidInput::from_measurements(m)?),
            ShapeKind::Cone => ShapeInput::Cone(RoundSolidInput::from_measurements(m)?),
            ShapeKind::RegularPrism => ShapeInput::RegularPrism(RegularSolidInput::from_measurements(m)?),
            ShapeKind::RegularPyramid => ShapeInput::RegularPyramid(RegularSolidInput::from_measurements(m)?),
        })
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeInput::Circle(_) => ShapeKind::Circle,
            ShapeInput::Ellipse(_) => ShapeKind::Ellipse,
            ShapeInput::Square(_) => ShapeKind::Square,
            ShapeInput::Rectangle(_) => ShapeKind::Rectangle,
            ShapeInput::Trapezium(_) => ShapeKind::Trapezium,
            ShapeInput::Parallelogram(_) => ShapeKind::Parallelogram,
            ShapeInput::Rhombus(_) => ShapeKind::Rhombus,
            ShapeInput::RegularPolygon(_) => ShapeKind::RegularPolygon,
            ShapeInput::EquilateralTriangle(_) => ShapeKind::EquilateralTriangle,
            ShapeInput::IsoscelesTriangle(_) => ShapeKind::IsoscelesTriangle,
            ShapeInput::ScaleneTriangle(_) => ShapeKind::ScaleneTriangle,
            ShapeInput::RightTriangle(_) => ShapeKind::RightTriangle,
            ShapeInput::Cube(_) => ShapeKind::Cube,
            ShapeInput::RectangularBox(_) => ShapeKind::RectangularBox,
            ShapeInput::Sphere(_) => ShapeKind::Sphere,
            ShapeInput::Cylinder(_) => ShapeKind::Cylinder,
            ShapeInput::Cone(_) => ShapeKind::Cone,
            ShapeInput::RegularPrism(_) => ShapeKind::RegularPrism,
            ShapeInput::RegularPyramid(_) => ShapeKind::RegularPyramid,
        }
    }

    /// Results for one calculation kind, or `None` if the shape lacks it
    pub fn evaluate(&self, calc: CalculationKind) -> Option<Vec<NamedResult>> {
        match self {
            ShapeInput::Circle(i) => i.evaluate(calc),
            ShapeInput::Ellipse(i) => i.evaluate(calc),
            ShapeInput::Square(i) => i.evaluate(calc),
            ShapeInput::Rectangle(i) => i.evaluate(calc),
            ShapeInput::Trapezium(i) => i.evaluate(calc),
            ShapeInput::Parallelogram(i) => i.evaluate(calc),
            ShapeInput::Rhombus(i) => i.evaluate(calc),
            ShapeInput::RegularPolygon(i) => i.evaluate(calc),
            ShapeInput::EquilateralTriangle(i) => i.evaluate(calc),
            ShapeInput::IsoscelesTriangle(i) => i.evaluate(calc),
            ShapeInput::ScaleneTriangle(i) => i.evaluate(calc),
            ShapeInput::RightTriangle(i) => i.evaluate(calc),
            ShapeInput::Cube(i) => i.evaluate(calc),
            ShapeInput::RectangularBox(i) => i.evaluate(calc),
            ShapeInput::Sphere(i) => i.evaluate(calc),
            ShapeInput::Cylinder(i) => i.evaluate_cylinder(calc),
            ShapeInput::Cone(i) => i.evaluate_cone(calc),
            ShapeInput::RegularPrism(i) => i.evaluate_prism(calc),
            ShapeInput::RegularPyramid(i) => i.evaluate_pyramid(calc),
        }
    }

    /// Evaluate each calculation in order.
    ///
    /// # Errors
    ///
    /// `UnsupportedCalculation` if any kind has no formula for this shape.
    pub fn compute(&self, calculations: &[CalculationKind]) -> GeoResult<CalculationResults> {
        let mut results = CalculationResults::new();
        for &calc in calculations {
            let entries = self
                .evaluate(calc)
                .ok_or_else(|| GeoError::unsupported(self.kind().name(), calc.display_name()))?;
            for entry in &entries {
                if !entry.result.is_valid() {
                    tracing::warn!(
                        shape = %self.kind(),
                        result = %entry.label,
                        value = entry.result.value,
                        "non-finite result; inputs are outside the formula's domain"
                    );
                }
            }
            results.extend(entries);
        }
        Ok(results)
    }
}

impl ShapeKind {
    /// Every input label the shape's typed input struct reads
    pub fn accepted_labels(&self) -> &'static [&'static str] {
        match self {
            ShapeKind::Circle => CircleInput::LABELS,
            ShapeKind::Ellipse => EllipseInput::LABELS,
            ShapeKind::Square => SquareInput::LABELS,
            ShapeKind::Rectangle => RectangleInput::LABELS,
            ShapeKind::Trapezium => TrapeziumInput::LABELS,
            ShapeKind::Parallelogram => ParallelogramInput::LABELS,
            ShapeKind::Rhombus => RhombusInput::LABELS,
            ShapeKind::RegularPolygon => RegularPolygonInput::LABELS,
            ShapeKind::EquilateralTriangle => EquilateralTriangleInput::LABELS,
            ShapeKind::IsoscelesTriangle => IsoscelesTriangleInput::LABELS,
            ShapeKind::ScaleneTriangle => ScaleneTriangleInput::LABELS,
            ShapeKind::RightTriangle => RightTriangleInput::LABELS,
            ShapeKind::Cube => CubeInput::LABELS,
            ShapeKind::RectangularBox => BoxInput::LABELS,
            ShapeKind::Sphere => SphereInput::LABELS,
            ShapeKind::Cylinder | ShapeKind::Cone => RoundSolidInput::LABELS,
            ShapeKind::RegularPrism | ShapeKind::RegularPyramid => RegularSolidInput::LABELS,
        }
    }

    /// Calculations [`ShapeInput::evaluate`] has a formula for, in catalog order
    pub fn supported_calculations(&self) -> &'static [CalculationKind] {
        use CalculationKind::*;

        match self {
            ShapeKind::Circle => &[Area, Circumference],
            ShapeKind::Ellipse | ShapeKind::Trapezium => &[Area],
            ShapeKind::Square | ShapeKind::Rectangle => &[Area, Perimeter, Diagonal],
            ShapeKind::Parallelogram
            | ShapeKind::EquilateralTriangle
            | ShapeKind::IsoscelesTriangle
            | ShapeKind::ScaleneTriangle => &[Area, Perimeter],
            ShapeKind::Rhombus => &[Area, SideLength, Perimeter],
            ShapeKind::RegularPolygon => &[Area, Perimeter, Angles],
            ShapeKind::RightTriangle => &[Area, Perimeter, Hypotenuse],
            ShapeKind::Cube | ShapeKind::RectangularBox => &[Volume, SurfaceArea, Diagonal],
            ShapeKind::Sphere | ShapeKind::Cylinder | ShapeKind::Cone | ShapeKind::RegularPrism => {
                &[Volume, SurfaceArea]
            }
            ShapeKind::RegularPyramid => &[Volume],
        }
    }
}

/// Compute every result a built-in shape declares.
///
/// `values` maps input labels to the raw text a user entered.
///
/// # Errors
///
/// * `UnknownShape` - no built-in shape has this name
/// * `InvalidNumber` / `NonPositiveMeasurement` - a value failed validation
/// * `MissingInput` - a required label has no value
/// * `InvalidInput` - a side count that is not a whole number of at least 3
///
/// # Example
///
/// ```rust
/// use geo_core::calculations::calculate;
///
/// let results = calculate("Regular Polygon", [("Side length", "2"), ("Number of sides", "6")]).unwrap();
/// assert_eq!(results.value("Perimeter"), Some(12.0));
/// assert_eq!(results.labels(), vec!["Area", "Perimeter", "Inner Angle", "Outer Angle"]);
///
/// let err = calculate("Circle", [("Radius", "-5")]).unwrap_err();
/// assert_eq!(err.error_code(), "NON_POSITIVE_MEASUREMENT");
/// ```
pub fn calculate<I, K, V>(shape_name: &str, values: I) -> GeoResult<CalculationResults>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let shape = catalog::find_shape(shape_name)?;
    calculate_shape(shape, values)
}

/// Compute every result a shape definition declares.
///
/// Same as [`calculate`] for a definition already in hand, including ones from
/// a custom [`catalog::Catalog`].
pub fn calculate_shape<I, K, V>(shape: &ShapeDefinition, values: I) -> GeoResult<CalculationResults>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let measurements = Measurements::parse(values)?;
    tracing::debug!(shape = %shape.name, inputs = measurements.len(), "dispatching calculation");

    let input = ShapeInput::from_measurements(shape.kind, &measurements)?;
    let results = input.compute(&shape.calculations)?;

    tracing::debug!(shape = %shape.name, results = results.len(), "calculation complete");
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::DisplaySettings;
    use crate::units::Unit;

    fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() < tolerance
    }

    fn shown(results: &CalculationResults, label: &str) -> String {
        results.get(label).unwrap().display(&DisplaySettings::default())
    }

    #[test]
    fn test_rectangle_scenario() {
        let results = calculate("Rectangle", [("Length", "3"), ("Width", "4")]).unwrap();
        assert_eq!(results.labels(), vec!["Area", "Perimeter", "Diagonal"]);
        assert_eq!(shown(&results, "Area"), "12.00 square units");
        assert_eq!(shown(&results, "Perimeter"), "14.00 units");
        assert_eq!(shown(&results, "Diagonal"), "5.00 units");
    }

    #[test]
    fn test_regular_polygon_scenario() {
        let results = calculate("Regular Polygon", [("Side length", "2"), ("Number of sides", "6")]).unwrap();
        assert!(approx_eq(results.value("Perimeter").unwrap(), 12.0, 1e-12));
        assert!(approx_eq(results.value("Inner Angle").unwrap(), 120.0, 1e-9));
        assert!(approx_eq(results.value("Outer Angle").unwrap(), 60.0, 1e-9));
        assert_eq!(results.get("Inner Angle").unwrap().unit, Unit::Degrees);
        assert!(approx_eq(results.value("Area").unwrap(), 6.0 * 3.0_f64.sqrt(), 1e-9));
    }

    #[test]
    fn test_scalene_scenario() {
        let results = calculate("Scalene Triangle", [("Side a", "3"), ("Side b", "4"), ("Side c", "5")]).unwrap();
        assert_eq!(shown(&results, "Area"), "6.00 square units");
        assert_eq!(shown(&results, "Perimeter"), "12.00 units");
    }

    #[test]
    fn test_circle_radius_two() {
        let results = calculate("Circle", [("Radius", "2")]).unwrap();
        assert_eq!(shown(&results, "Area"), "12.57 square units");
        assert_eq!(shown(&results, "Circumference"), "12.57 units");
    }

    #[test]
    fn test_invalid_number_aborts() {
        let err = calculate("Circle", [("Radius", "abc")]).unwrap_err();
        assert_eq!(err, GeoError::invalid_number("Radius", "abc"));
    }

    #[test]
    fn test_non_positive_aborts() {
        for text in ["0", "-5"] {
            let err = calculate("Square", [("Side length", text)]).unwrap_err();
            assert_eq!(err, GeoError::non_positive("Side length", text));
        }
    }

    #[test]
    fn test_unknown_shape() {
        let err = calculate("Hexagram", [("Radius", "1")]).unwrap_err();
        assert_eq!(err, GeoError::unknown_shape("Hexagram"));
    }

    #[test]
    fn test_every_shape_dispatches() {
        for shape in catalog::list_shapes() {
            let inputs = catalog::unique_inputs_for(shape);
            let values: Vec<(String, String)> = inputs.iter().map(|i| (i.label.clone(), "3".to_string())).collect();
            let results = calculate(&shape.name, values)
                .unwrap_or_else(|e| panic!("{} failed: {}", shape.name, e));
            assert!(!results.is_empty(), "{} produced nothing", shape.name);
            for calc in &shape.calculations {
                assert!(input_kind_present(&results, *calc), "{} missing {}", shape.name, calc);
            }
        }
    }

    fn input_kind_present(results: &CalculationResults, calc: CalculationKind) -> bool {
        match calc {
            CalculationKind::Angles => results.get("Inner Angle").is_some() && results.get("Outer Angle").is_some(),
            other => results.get(other.display_name()).is_some(),
        }
    }

    /// Every unique input of a shape set to "3", except `label` set to `text`
    fn values_with(shape: &ShapeDefinition, label: &str, text: &'static str) -> Vec<(String, &'static str)> {
        catalog::unique_inputs_for(shape)
            .into_iter()
            .map(|i| {
                let value = if i.label == label { text } else { "3" };
                (i.label, value)
            })
            .collect()
    }

    #[test]
    fn test_any_input_rejects_non_numeric() {
        for shape in catalog::list_shapes() {
            for input in catalog::unique_inputs_for(shape) {
                let err = calculate(&shape.name, values_with(shape, &input.label, "abc")).unwrap_err();
                assert_eq!(err, GeoError::invalid_number(&input.label, "abc"), "{} / {}", shape.name, input.label);
            }
        }
    }

    #[test]
    fn test_any_input_rejects_non_positive() {
        for shape in catalog::list_shapes() {
            for input in catalog::unique_inputs_for(shape) {
                for text in ["0", "-5"] {
                    let err = calculate(&shape.name, values_with(shape, &input.label, text)).unwrap_err();
                    assert_eq!(
                        err,
                        GeoError::non_positive(&input.label, text),
                        "{} / {} = {}",
                        shape.name,
                        input.label,
                        text
                    );
                }
            }
        }
    }

    #[test]
    fn test_supported_calculations_match_evaluate() {
        for shape in catalog::list_shapes() {
            let values = values_with(shape, "", "3");
            let measurements = Measurements::parse(values).unwrap();
            let input = ShapeInput::from_measurements(shape.kind, &measurements).unwrap();
            for calc in CalculationKind::ALL {
                assert_eq!(
                    input.evaluate(calc).is_some(),
                    shape.kind.supported_calculations().contains(&calc),
                    "{} / {}",
                    shape.kind,
                    calc
                );
            }
        }
    }

    #[test]
    fn test_derivations_listed_in_formulas_used() {
        use crate::formulas::Formula;

        let by_side = calculate("Isosceles Triangle", [("Base", "6"), ("Equal side", "5")]).unwrap();
        assert_eq!(
            by_side.formulas_used(),
            vec![Formula::IsoscelesHeight, Formula::BaseHeightTriangleArea, Formula::IsoscelesTrianglePerimeter]
        );

        let by_height = calculate("Isosceles Triangle", [("Base", "6"), ("Height", "4")]).unwrap();
        assert!(by_height.formulas_used().contains(&Formula::IsoscelesEqualSide));

        let both = calculate("Isosceles Triangle", [("Base", "6"), ("Height", "4"), ("Equal side", "5")]).unwrap();
        assert!(both.iter().all(|r| r.derived_from.is_none()));

        let by_hyp = calculate("Right Triangle", [("Base", "3"), ("Hypotenuse", "5")]).unwrap();
        assert_eq!(by_hyp.formulas_used()[0], Formula::RightTriangleLeg);

        let by_legs = calculate("Right Triangle", [("Base", "3"), ("Height", "4")]).unwrap();
        assert!(!by_legs.formulas_used().contains(&Formula::RightTriangleLeg));
    }

    #[test]
    fn test_dropping_required_input_is_missing() {
        for shape in catalog::list_shapes() {
            let inputs = catalog::unique_inputs_for(shape);
            for dropped in inputs.iter().filter(|i| !i.optional) {
                let values: Vec<(&str, &str)> = inputs
                    .iter()
                    .filter(|i| i.label != dropped.label)
                    .map(|i| (i.label.as_str(), "3"))
                    .collect();
                let err = calculate(&shape.name, values).unwrap_err();
                assert_eq!(err.error_code(), "MISSING_INPUT", "{} without {}", shape.name, dropped.label);
            }
        }
    }

    #[test]
    fn test_blank_value_counts_as_missing() {
        let err = calculate("Rectangle", [("Length", "3"), ("Width", " ")]).unwrap_err();
        assert_eq!(err, GeoError::missing_input("Width"));
    }

    #[test]
    fn test_isosceles_derivation_agrees() {
        let by_height = calculate("Isosceles Triangle", [("Base", "6"), ("Height", "4")]).unwrap();
        let by_side = calculate("Isosceles Triangle", [("Base", "6"), ("Equal side", "5")]).unwrap();
        assert!(approx_eq(by_height.value("Area").unwrap(), by_side.value("Area").unwrap(), 1e-12));
        assert!(approx_eq(by_height.value("Perimeter").unwrap(), 16.0, 1e-12));
        assert!(approx_eq(by_side.value("Perimeter").unwrap(), 16.0, 1e-12));
    }

    #[test]
    fn test_right_triangle_modes() {
        let by_height = calculate("Right Triangle", [("Base", "3"), ("Height", "4")]).unwrap();
        assert_eq!(by_height.labels(), vec!["Area", "Perimeter", "Hypotenuse"]);
        assert!(approx_eq(by_height.value("Hypotenuse").unwrap(), 5.0, 1e-12));
        assert!(approx_eq(by_height.value("Perimeter").unwrap(), 12.0, 1e-12));

        let by_hyp = calculate("Right Triangle", [("Base", "3"), ("Hypotenuse", "5")]).unwrap();
        assert!(approx_eq(by_hyp.value("Area").unwrap(), 6.0, 1e-12));
    }

    #[test]
    fn test_impossible_triangle_displays_invalid() {
        let results = calculate("Scalene Triangle", [("Side a", "1"), ("Side b", "1"), ("Side c", "5")]).unwrap();
        assert!(results.value("Area").unwrap().is_nan());
        assert_eq!(shown(&results, "Area"), "Invalid input");
        assert_eq!(shown(&results, "Perimeter"), "7.00 units");
    }

    #[test]
    fn test_unsupported_calculation() {
        let input = ShapeInput::Circle(CircleInput { radius: 1.0 });
        let err = input.compute(&[CalculationKind::Volume]).unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_CALCULATION");
    }

    #[test]
    fn test_shape_input_serialization() {
        let input = ShapeInput::RectangularBox(BoxInput { length: 1.0, width: 2.0, height: 3.0 });
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"shape\":\"Box\""));
        let back: ShapeInput = serde_json::from_str(&json).unwrap();
        assert_eq!(back.kind(), ShapeKind::RectangularBox);
    }

    #[test]
    fn test_formulas_recorded() {
        let results = calculate("Cone", [("Radius", "3"), ("Height", "4")]).unwrap();
        assert!(approx_eq(results.value("Surface Area").unwrap(), 24.0 * std::f64::consts::PI, 1e-9));
        assert_eq!(
            results.formulas_used(),
            vec![crate::formulas::Formula::ConeVolume, crate::formulas::Formula::ConeSurfaceArea]
        );
    }
}
