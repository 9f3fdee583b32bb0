//! # Plane Figure Calculations
//!
//! Typed inputs for every 2D shape. Each `*Input` struct:
//!
//! - binds catalog labels to named fields in `from_measurements`
//! - lists the labels it accepts in `LABELS`
//! - evaluates one calculation kind at a time in `evaluate`, returning
//!   `None` for kinds the shape does not define
//!
//! Isosceles and right triangles accept alternate inputs: a missing height
//! (or equal side / hypotenuse) is derived from the sides that were given.

use serde::{Deserialize, Serialize};

use super::measurements::Measurements;
use super::results::NamedResult;
use crate::catalog::labels;
use crate::catalog::CalculationKind;
use crate::errors::{GeoError, GeoResult};
use crate::formulas::plane::*;
use crate::formulas::Formula;

/// One result labelled with the calculation's display name
pub(crate) fn single(calc: CalculationKind, value: f64, formula: Formula) -> Option<Vec<NamedResult>> {
    Some(vec![NamedResult::new(calc.display_name(), value, formula)])
}

// =============================================================================
// CIRCLE AND ELLIPSE
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleInput {
    pub radius: f64,
}

impl CircleInput {
    pub const LABELS: &'static [&'static str] = &[labels::RADIUS];

    pub fn from_measurements(m: &Measurements) -> GeoResult<Self> {
        Ok(CircleInput {
            radius: m.require(labels::RADIUS)?,
        })
    }

    pub fn evaluate(&self, calc: CalculationKind) -> Option<Vec<NamedResult>> {
        match calc {
            CalculationKind::Area => single(calc, circle_area(self.radius), Formula::CircleArea),
            CalculationKind::Circumference => {
                single(calc, circle_circumference(self.radius), Formula::CircleCircumference)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EllipseInput {
    pub semi_major_axis: f64,
    pub semi_minor_axis: f64,
}

impl EllipseInput {
    pub const LABELS: &'static [&'static str] = &[labels::SEMI_MAJOR_AXIS, labels::SEMI_MINOR_AXIS];

    pub fn from_measurements(m: &Measurements) -> GeoResult<Self> {
        Ok(EllipseInput {
            semi_major_axis: m.require(labels::SEMI_MAJOR_AXIS)?,
            semi_minor_axis: m.require(labels::SEMI_MINOR_AXIS)?,
        })
    }

    pub fn evaluate(&self, calc: CalculationKind) -> Option<Vec<NamedResult>> {
        match calc {
            CalculationKind::Area => single(
                calc,
                ellipse_area(self.semi_major_axis, self.semi_minor_axis),
                Formula::EllipseArea,
            ),
            _ => None,
        }
    }
}

// =============================================================================
// QUADRILATERALS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SquareInput {
    pub side: f64,
}

impl SquareInput {
    pub const LABELS: &'static [&'static str] = &[labels::SIDE_LENGTH];

    pub fn from_measurements(m: &Measurements) -> GeoResult<Self> {
        Ok(SquareInput {
            side: m.require(labels::SIDE_LENGTH)?,
        })
    }

    pub fn evaluate(&self, calc: CalculationKind) -> Option<Vec<NamedResult>> {
        match calc {
            CalculationKind::Area => single(calc, square_area(self.side), Formula::SquareArea),
            CalculationKind::Perimeter => single(calc, square_perimeter(self.side), Formula::SquarePerimeter),
            CalculationKind::Diagonal => single(calc, square_diagonal(self.side), Formula::SquareDiagonal),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectangleInput {
    pub length: f64,
    pub width: f64,
}

impl RectangleInput {
    pub const LABELS: &'static [&'static str] = &[labels::LENGTH, labels::WIDTH];

    pub fn from_measurements(m: &Measurements) -> GeoResult<Self> {
        Ok(RectangleInput {
            length: m.require(labels::LENGTH)?,
            width: m.require(labels::WIDTH)?,
        })
    }

    pub fn evaluate(&self, calc: CalculationKind) -> Option<Vec<NamedResult>> {
        let (l, w) = (self.length, self.width);
        match calc {
            CalculationKind::Area => single(calc, rectangle_area(l, w), Formula::RectangleArea),
            CalculationKind::Perimeter => single(calc, rectangle_perimeter(l, w), Formula::RectanglePerimeter),
            CalculationKind::Diagonal => single(calc, rectangle_diagonal(l, w), Formula::RectangleDiagonal),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrapeziumInput {
    pub base_1: f64,
    pub base_2: f64,
    pub height: f64,
}

impl TrapeziumInput {
    pub const LABELS: &'static [&'static str] = &[labels::BASE_1, labels::BASE_2, labels::HEIGHT];

    pub fn from_measurements(m: &Measurements) -> GeoResult<Self> {
        Ok(TrapeziumInput {
            base_1: m.require(labels::BASE_1)?,
            base_2: m.require(labels::BASE_2)?,
            height: m.require(labels::HEIGHT)?,
        })
    }

    pub fn evaluate(&self, calc: CalculationKind) -> Option<Vec<NamedResult>> {
        match calc {
            CalculationKind::Area => single(
                calc,
                trapezium_area(self.base_1, self.base_2, self.height),
                Formula::TrapeziumArea,
            ),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParallelogramInput {
    pub base: f64,
    pub height: f64,
    pub side: f64,
}

impl ParallelogramInput {
    pub const LABELS: &'static [&'static str] = &[labels::BASE, labels::HEIGHT, labels::SIDE];

    pub fn from_measurements(m: &Measurements) -> GeoResult<Self> {
        Ok(ParallelogramInput {
            base: m.require(labels::BASE)?,
            height: m.require(labels::HEIGHT)?,
            side: m.require(labels::SIDE)?,
        })
    }

    pub fn evaluate(&self, calc: CalculationKind) -> Option<Vec<NamedResult>> {
        match calc {
            CalculationKind::Area => single(calc, parallelogram_area(self.base, self.height), Formula::ParallelogramArea),
            CalculationKind::Perimeter => single(
                calc,
                parallelogram_perimeter(self.base, self.side),
                Formula::ParallelogramPerimeter,
            ),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RhombusInput {
    pub diagonal_1: f64,
    pub diagonal_2: f64,
}

impl RhombusInput {
    pub const LABELS: &'static [&'static str] = &[labels::DIAGONAL_1, labels::DIAGONAL_2];

    pub fn from_measurements(m: &Measurements) -> GeoResult<Self> {
        Ok(RhombusInput {
            diagonal_1: m.require(labels::DIAGONAL_1)?,
            diagonal_2: m.require(labels::DIAGONAL_2)?,
        })
    }

    pub fn evaluate(&self, calc: CalculationKind) -> Option<Vec<NamedResult>> {
        let (d1, d2) = (self.diagonal_1, self.diagonal_2);
        match calc {
            CalculationKind::Area => single(calc, rhombus_area(d1, d2), Formula::RhombusArea),
            CalculationKind::SideLength => single(calc, rhombus_side_length(d1, d2), Formula::RhombusSideLength),
            CalculationKind::Perimeter => single(calc, rhombus_perimeter(d1, d2), Formula::RhombusPerimeter),
            _ => None,
        }
    }
}

// =============================================================================
// REGULAR POLYGON
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegularPolygonInput {
    pub side: f64,
    /// Whole number, at least 3
    pub sides: f64,
}

impl RegularPolygonInput {
    pub const LABELS: &'static [&'static str] = &[labels::SIDE_LENGTH, labels::NUMBER_OF_SIDES];

    pub fn from_measurements(m: &Measurements) -> GeoResult<Self> {
        Ok(RegularPolygonInput {
            side: m.require(labels::SIDE_LENGTH)?,
            sides: m.side_count(labels::NUMBER_OF_SIDES)?,
        })
    }

    pub fn evaluate(&self, calc: CalculationKind) -> Option<Vec<NamedResult>> {
        let (s, n) = (self.side, self.sides);
        match calc {
            CalculationKind::Area => single(calc, regular_polygon_area(s, n), Formula::RegularPolygonArea),
            CalculationKind::Perimeter => {
                single(calc, regular_polygon_perimeter(s, n), Formula::RegularPolygonPerimeter)
            }
            CalculationKind::Angles => Some(vec![
                NamedResult::new("Inner Angle", regular_polygon_inner_angle(n), Formula::RegularPolygonInnerAngle),
                NamedResult::new("Outer Angle", regular_polygon_outer_angle(n), Formula::RegularPolygonOuterAngle),
            ]),
            _ => None,
        }
    }
}

// =============================================================================
// TRIANGLES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquilateralTriangleInput {
    pub side: f64,
}

impl EquilateralTriangleInput {
    pub const LABELS: &'static [&'static str] = &[labels::SIDE_LENGTH];

    pub fn from_measurements(m: &Measurements) -> GeoResult<Self> {
        Ok(EquilateralTriangleInput {
            side: m.require(labels::SIDE_LENGTH)?,
        })
    }

    pub fn evaluate(&self, calc: CalculationKind) -> Option<Vec<NamedResult>> {
        match calc {
            CalculationKind::Area => single(calc, equilateral_triangle_area(self.side), Formula::EquilateralTriangleArea),
            CalculationKind::Perimeter => single(
                calc,
                equilateral_triangle_perimeter(self.side),
                Formula::EquilateralTrianglePerimeter,
            ),
            _ => None,
        }
    }
}

/// Isosceles triangle with base, height and equal side all resolved.
///
/// At least one of height or equal side must be supplied; the other is
/// derived. When both are supplied they are used as given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IsoscelesTriangleInput {
    pub base: f64,
    pub height: f64,
    pub equal_side: f64,
    /// Set when height or equal side was derived rather than supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub derivation: Option<Formula>,
}

impl IsoscelesTriangleInput {
    pub const LABELS: &'static [&'static str] = &[labels::BASE, labels::HEIGHT, labels::EQUAL_SIDE];

    pub fn from_measurements(m: &Measurements) -> GeoResult<Self> {
        let base = m.require(labels::BASE)?;
        let (height, equal_side, derivation) = match (m.get(labels::HEIGHT), m.get(labels::EQUAL_SIDE)) {
            (Some(h), Some(e)) => (h, e, None),
            (Some(h), None) => {
                let e = isosceles_side_from_height(h, base);
                tracing::debug!(height = h, equal_side = e, "derived isosceles equal side");
                (h, e, Some(Formula::IsoscelesEqualSide))
            }
            (None, Some(e)) => {
                let h = isosceles_height_from_sides(e, base);
                tracing::debug!(height = h, equal_side = e, "derived isosceles height");
                (h, e, Some(Formula::IsoscelesHeight))
            }
            (None, None) => {
                return Err(GeoError::missing_input(format!(
                    "{} or {}",
                    labels::HEIGHT,
                    labels::EQUAL_SIDE
                )))
            }
        };
        Ok(IsoscelesTriangleInput {
            base,
            height,
            equal_side,
            derivation,
        })
    }

    pub fn evaluate(&self, calc: CalculationKind) -> Option<Vec<NamedResult>> {
        let (value, formula, uses) = match calc {
            CalculationKind::Area => (
                base_height_triangle_area(self.base, self.height),
                Formula::BaseHeightTriangleArea,
                Formula::IsoscelesHeight,
            ),
            CalculationKind::Perimeter => (
                isosceles_triangle_perimeter(self.base, self.equal_side),
                Formula::IsoscelesTrianglePerimeter,
                Formula::IsoscelesEqualSide,
            ),
            _ => return None,
        };
        let derivation = self.derivation.filter(|d| *d == uses);
        Some(vec![NamedResult::new(calc.display_name(), value, formula).with_derivation(derivation)])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleneTriangleInput {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl ScaleneTriangleInput {
    pub const LABELS: &'static [&'static str] = &[labels::SIDE_A, labels::SIDE_B, labels::SIDE_C];

    pub fn from_measurements(m: &Measurements) -> GeoResult<Self> {
        Ok(ScaleneTriangleInput {
            a: m.require(labels::SIDE_A)?,
            b: m.require(labels::SIDE_B)?,
            c: m.require(labels::SIDE_C)?,
        })
    }

    pub fn evaluate(&self, calc: CalculationKind) -> Option<Vec<NamedResult>> {
        let (a, b, c) = (self.a, self.b, self.c);
        match calc {
            CalculationKind::Area => single(calc, heron_area(a, b, c), Formula::HeronArea),
            CalculationKind::Perimeter => single(calc, triangle_perimeter(a, b, c), Formula::TrianglePerimeter),
            _ => None,
        }
    }
}

/// Right triangle with both legs and the hypotenuse resolved.
///
/// With a height, the hypotenuse is always derived from base and height (a
/// supplied hypotenuse that disagrees is logged and ignored). Without a
/// height, it is derived from base and the supplied hypotenuse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RightTriangleInput {
    pub base: f64,
    pub height: f64,
    pub hypotenuse: f64,
    /// `RightTriangleHypotenuse` or `RightTriangleLeg`, whichever side was derived
    pub derivation: Formula,
}

impl RightTriangleInput {
    pub const LABELS: &'static [&'static str] = &[labels::BASE, labels::HEIGHT, labels::HYPOTENUSE];

    pub fn from_measurements(m: &Measurements) -> GeoResult<Self> {
        let base = m.require(labels::BASE)?;
        let (height, hypotenuse, derivation) = match (m.get(labels::HEIGHT), m.get(labels::HYPOTENUSE)) {
            (Some(h), supplied) => {
                let c = right_triangle_hypotenuse(base, h);
                if let Some(given) = supplied {
                    if (given - c).abs() > 1e-9 * c.max(1.0) {
                        tracing::warn!(given, derived = c, "supplied hypotenuse ignored; derived from base and height");
                    }
                }
                (h, c, Formula::RightTriangleHypotenuse)
            }
            (None, Some(c)) => {
                let h = right_triangle_leg(c, base);
                tracing::debug!(height = h, hypotenuse = c, "derived right triangle height");
                (h, c, Formula::RightTriangleLeg)
            }
            (None, None) => {
                return Err(GeoError::missing_input(format!(
                    "{} or {}",
                    labels::HEIGHT,
                    labels::HYPOTENUSE
                )))
            }
        };
        Ok(RightTriangleInput {
            base,
            height,
            hypotenuse,
            derivation,
        })
    }

    pub fn evaluate(&self, calc: CalculationKind) -> Option<Vec<NamedResult>> {
        let height_derived = (self.derivation == Formula::RightTriangleLeg).then_some(self.derivation);
        let result = match calc {
            CalculationKind::Area => NamedResult::new(
                calc.display_name(),
                base_height_triangle_area(self.base, self.height),
                Formula::BaseHeightTriangleArea,
            )
            .with_derivation(height_derived),
            // Perimeter always consumes one derived side
            CalculationKind::Perimeter => NamedResult::new(
                calc.display_name(),
                right_triangle_perimeter(self.base, self.height, self.hypotenuse),
                Formula::RightTrianglePerimeter,
            )
            .with_derivation(Some(self.derivation)),
            CalculationKind::Hypotenuse => {
                NamedResult::new(calc.display_name(), self.hypotenuse, Formula::RightTriangleHypotenuse)
                    .with_derivation(height_derived)
            }
            _ => return None,
        };
        Some(vec![result])
    }
}
