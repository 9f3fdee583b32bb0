//! # Formula Registry
//!
//! Central registry of every formula the calculator can apply. Each formula
//! has metadata (plain-text formula, variables, result unit, source function)
//! so results can explain themselves and the reference document can be
//! generated from code.
//!
//! ## Usage
//!
//! ```rust
//! use geo_core::formulas::registry::Formula;
//! use geo_core::units::Unit;
//!
//! let meta = Formula::CircleArea.metadata();
//! assert_eq!(meta.formula_plain, "A = πr²");
//! assert_eq!(meta.unit, Unit::SquareUnits);
//! ```

use serde::{Deserialize, Serialize};

use crate::units::Unit;

// ============================================================================
// Formula Categories
// ============================================================================

/// Categories for grouping formulas in the reference document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormulaCategory {
    /// Circle and ellipse
    RoundFigures,
    /// Square, rectangle, trapezium, parallelogram, rhombus
    Quadrilaterals,
    /// Regular n-gons
    RegularPolygons,
    /// All triangle kinds
    Triangles,
    /// Cube, box, prism, pyramid
    PolyhedralSolids,
    /// Sphere, cylinder, cone
    RoundSolids,
}

impl FormulaCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            FormulaCategory::RoundFigures => "Circles and Ellipses",
            FormulaCategory::Quadrilaterals => "Quadrilaterals",
            FormulaCategory::RegularPolygons => "Regular Polygons",
            FormulaCategory::Triangles => "Triangles",
            FormulaCategory::PolyhedralSolids => "Boxes, Prisms and Pyramids",
            FormulaCategory::RoundSolids => "Spheres, Cylinders and Cones",
        }
    }

    /// Sort order for the reference document (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            FormulaCategory::RoundFigures => 1,
            FormulaCategory::Quadrilaterals => 2,
            FormulaCategory::RegularPolygons => 3,
            FormulaCategory::Triangles => 4,
            FormulaCategory::PolyhedralSolids => 5,
            FormulaCategory::RoundSolids => 6,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in a formula.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "r", "s", "n")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str) -> Self {
        Self { symbol, description }
    }
}

// ============================================================================
// Formula Metadata
// ============================================================================

/// Complete metadata for a geometric formula.
#[derive(Debug, Clone)]
pub struct FormulaMetadata {
    /// Human-readable name (e.g., "Circle Area")
    pub name: &'static str,
    /// Brief description of what this formula calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Unit of the value the formula produces
    pub unit: Unit,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Domain restrictions or derivation notes
    pub assumptions: Vec<&'static str>,
    /// Category for grouping
    pub category: FormulaCategory,
    /// Source module where the formula implementation lives
    pub source_module: &'static str,
    /// Function name implementing the formula
    pub source_function: &'static str,
}

// ============================================================================
// Formula Enum
// ============================================================================

const PLANE: &str = "formulas/plane.rs";
const SOLID: &str = "formulas/solid.rs";

/// All geometric formulas known to the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Formula {
    // -------------------------------------------------------------------------
    // Circles and Ellipses
    // -------------------------------------------------------------------------
    /// A = πr²
    CircleArea,
    /// C = 2πr
    CircleCircumference,
    /// A = πab
    EllipseArea,

    // -------------------------------------------------------------------------
    // Quadrilaterals
    // -------------------------------------------------------------------------
    SquareArea,
    SquarePerimeter,
    SquareDiagonal,
    RectangleArea,
    RectanglePerimeter,
    RectangleDiagonal,
    TrapeziumArea,
    ParallelogramArea,
    /// A = s1·s2·sin θ
    ParallelogramAreaFromAngle,
    ParallelogramPerimeter,
    RhombusArea,
    RhombusSideLength,
    RhombusPerimeter,

    // -------------------------------------------------------------------------
    // Regular Polygons
    // -------------------------------------------------------------------------
    RegularPolygonArea,
    RegularPolygonPerimeter,
    RegularPolygonInnerAngle,
    RegularPolygonOuterAngle,

    // -------------------------------------------------------------------------
    // Triangles
    // -------------------------------------------------------------------------
    EquilateralTriangleArea,
    EquilateralTrianglePerimeter,
    /// A = bh/2 (isosceles and right triangles)
    BaseHeightTriangleArea,
    IsoscelesTrianglePerimeter,
    /// h = √(e² − b²/4)
    IsoscelesHeight,
    /// e = √(h² + b²/4)
    IsoscelesEqualSide,
    /// Heron's formula
    HeronArea,
    TrianglePerimeter,
    RightTriangleHypotenuse,
    /// h = √(c² − b²)
    RightTriangleLeg,
    RightTrianglePerimeter,

    // -------------------------------------------------------------------------
    // Boxes, Prisms and Pyramids
    // -------------------------------------------------------------------------
    CubeVolume,
    CubeSurfaceArea,
    CubeDiagonal,
    BoxVolume,
    BoxSurfaceArea,
    BoxDiagonal,
    RegularPrismVolume,
    RegularPrismSurfaceArea,
    RegularPyramidVolume,

    // -------------------------------------------------------------------------
    // Spheres, Cylinders and Cones
    // -------------------------------------------------------------------------
    SphereVolume,
    SphereSurfaceArea,
    CylinderVolume,
    CylinderSurfaceArea,
    ConeVolume,
    ConeSurfaceArea,
}

impl Formula {
    /// Get the full metadata for this formula
    pub fn metadata(&self) -> FormulaMetadata {
        match self {
            // Circles and Ellipses
            Formula::CircleArea => FormulaMetadata {
                name: "Circle Area",
                description: "Area enclosed by a circle of radius r",
                formula_plain: "A = πr²",
                unit: Unit::SquareUnits,
                variables: vec![Variable::new("r", "Radius")],
                assumptions: vec![],
                category: FormulaCategory::RoundFigures,
                source_module: PLANE,
                source_function: "circle_area",
            },

            Formula::CircleCircumference => FormulaMetadata {
                name: "Circle Circumference",
                description: "Length of the boundary of a circle",
                formula_plain: "C = 2πr",
                unit: Unit::Units,
                variables: vec![Variable::new("r", "Radius")],
                assumptions: vec![],
                category: FormulaCategory::RoundFigures,
                source_module: PLANE,
                source_function: "circle_circumference",
            },

            Formula::EllipseArea => FormulaMetadata {
                name: "Ellipse Area",
                description: "Area enclosed by an ellipse with semi-axes a and b",
                formula_plain: "A = πab",
                unit: Unit::SquareUnits,
                variables: vec![
                    Variable::new("a", "Semi-major axis"),
                    Variable::new("b", "Semi-minor axis"),
                ],
                assumptions: vec![],
                category: FormulaCategory::RoundFigures,
                source_module: PLANE,
                source_function: "ellipse_area",
            },

            // Quadrilaterals
            Formula::SquareArea => FormulaMetadata {
                name: "Square Area",
                description: "Area of a square",
                formula_plain: "A = s²",
                unit: Unit::SquareUnits,
                variables: vec![Variable::new("s", "Side length")],
                assumptions: vec![],
                category: FormulaCategory::Quadrilaterals,
                source_module: PLANE,
                source_function: "square_area",
            },

            Formula::SquarePerimeter => FormulaMetadata {
                name: "Square Perimeter",
                description: "Perimeter of a square",
                formula_plain: "P = 4s",
                unit: Unit::Units,
                variables: vec![Variable::new("s", "Side length")],
                assumptions: vec![],
                category: FormulaCategory::Quadrilaterals,
                source_module: PLANE,
                source_function: "square_perimeter",
            },

            Formula::SquareDiagonal => FormulaMetadata {
                name: "Square Diagonal",
                description: "Corner-to-corner distance across a square",
                formula_plain: "d = s√2",
                unit: Unit::Units,
                variables: vec![Variable::new("s", "Side length")],
                assumptions: vec![],
                category: FormulaCategory::Quadrilaterals,
                source_module: PLANE,
                source_function: "square_diagonal",
            },

            Formula::RectangleArea => FormulaMetadata {
                name: "Rectangle Area",
                description: "Area of a rectangle",
                formula_plain: "A = lw",
                unit: Unit::SquareUnits,
                variables: vec![Variable::new("l", "Length"), Variable::new("w", "Width")],
                assumptions: vec![],
                category: FormulaCategory::Quadrilaterals,
                source_module: PLANE,
                source_function: "rectangle_area",
            },

            Formula::RectanglePerimeter => FormulaMetadata {
                name: "Rectangle Perimeter",
                description: "Perimeter of a rectangle",
                formula_plain: "P = 2(l + w)",
                unit: Unit::Units,
                variables: vec![Variable::new("l", "Length"), Variable::new("w", "Width")],
                assumptions: vec![],
                category: FormulaCategory::Quadrilaterals,
                source_module: PLANE,
                source_function: "rectangle_perimeter",
            },

            Formula::RectangleDiagonal => FormulaMetadata {
                name: "Rectangle Diagonal",
                description: "Corner-to-corner distance across a rectangle",
                formula_plain: "d = √(l² + w²)",
                unit: Unit::Units,
                variables: vec![Variable::new("l", "Length"), Variable::new("w", "Width")],
                assumptions: vec![],
                category: FormulaCategory::Quadrilaterals,
                source_module: PLANE,
                source_function: "rectangle_diagonal",
            },

            Formula::TrapeziumArea => FormulaMetadata {
                name: "Trapezium Area",
                description: "Area of a trapezium from its parallel sides and height",
                formula_plain: "A = ((b1 + b2) / 2)·h",
                unit: Unit::SquareUnits,
                variables: vec![
                    Variable::new("b1", "First parallel side"),
                    Variable::new("b2", "Second parallel side"),
                    Variable::new("h", "Perpendicular height"),
                ],
                assumptions: vec![],
                category: FormulaCategory::Quadrilaterals,
                source_module: PLANE,
                source_function: "trapezium_area",
            },

            Formula::ParallelogramArea => FormulaMetadata {
                name: "Parallelogram Area",
                description: "Area of a parallelogram from base and perpendicular height",
                formula_plain: "A = b·h",
                unit: Unit::SquareUnits,
                variables: vec![Variable::new("b", "Base"), Variable::new("h", "Perpendicular height")],
                assumptions: vec![],
                category: FormulaCategory::Quadrilaterals,
                source_module: PLANE,
                source_function: "parallelogram_area",
            },

            Formula::ParallelogramAreaFromAngle => FormulaMetadata {
                name: "Parallelogram Area (Sides and Angle)",
                description: "Area of a parallelogram from two adjacent sides and the included angle",
                formula_plain: "A = s1·s2·sin(θ)",
                unit: Unit::SquareUnits,
                variables: vec![
                    Variable::new("s1", "First side"),
                    Variable::new("s2", "Adjacent side"),
                    Variable::new("θ", "Included angle (degrees)"),
                ],
                assumptions: vec!["Angle is converted to radians before sin"],
                category: FormulaCategory::Quadrilaterals,
                source_module: PLANE,
                source_function: "parallelogram_area_from_angle",
            },

            Formula::ParallelogramPerimeter => FormulaMetadata {
                name: "Parallelogram Perimeter",
                description: "Perimeter of a parallelogram",
                formula_plain: "P = 2(b + s)",
                unit: Unit::Units,
                variables: vec![Variable::new("b", "Base"), Variable::new("s", "Side")],
                assumptions: vec![],
                category: FormulaCategory::Quadrilaterals,
                source_module: PLANE,
                source_function: "parallelogram_perimeter",
            },

            Formula::RhombusArea => FormulaMetadata {
                name: "Rhombus Area",
                description: "Area of a rhombus from its diagonals",
                formula_plain: "A = d1·d2 / 2",
                unit: Unit::SquareUnits,
                variables: vec![Variable::new("d1", "First diagonal"), Variable::new("d2", "Second diagonal")],
                assumptions: vec![],
                category: FormulaCategory::Quadrilaterals,
                source_module: PLANE,
                source_function: "rhombus_area",
            },

            Formula::RhombusSideLength => FormulaMetadata {
                name: "Rhombus Side Length",
                description: "Side of a rhombus from its diagonals",
                formula_plain: "s = √((d1² + d2²) / 4)",
                unit: Unit::Units,
                variables: vec![Variable::new("d1", "First diagonal"), Variable::new("d2", "Second diagonal")],
                assumptions: vec!["Diagonals bisect each other at right angles"],
                category: FormulaCategory::Quadrilaterals,
                source_module: PLANE,
                source_function: "rhombus_side_length",
            },

            Formula::RhombusPerimeter => FormulaMetadata {
                name: "Rhombus Perimeter",
                description: "Perimeter of a rhombus from its diagonals",
                formula_plain: "P = 4s",
                unit: Unit::Units,
                variables: vec![Variable::new("s", "Side length derived from the diagonals")],
                assumptions: vec![],
                category: FormulaCategory::Quadrilaterals,
                source_module: PLANE,
                source_function: "rhombus_perimeter",
            },

            // Regular Polygons
            Formula::RegularPolygonArea => FormulaMetadata {
                name: "Regular Polygon Area",
                description: "Area of a regular polygon with n equal sides",
                formula_plain: "A = n·s² / (4·tan(π/n))",
                unit: Unit::SquareUnits,
                variables: vec![Variable::new("s", "Side length"), Variable::new("n", "Number of sides")],
                assumptions: vec!["n is a whole number, at least 3"],
                category: FormulaCategory::RegularPolygons,
                source_module: PLANE,
                source_function: "regular_polygon_area",
            },

            Formula::RegularPolygonPerimeter => FormulaMetadata {
                name: "Regular Polygon Perimeter",
                description: "Perimeter of a regular polygon",
                formula_plain: "P = n·s",
                unit: Unit::Units,
                variables: vec![Variable::new("s", "Side length"), Variable::new("n", "Number of sides")],
                assumptions: vec![],
                category: FormulaCategory::RegularPolygons,
                source_module: PLANE,
                source_function: "regular_polygon_perimeter",
            },

            Formula::RegularPolygonInnerAngle => FormulaMetadata {
                name: "Regular Polygon Interior Angle",
                description: "Angle between two adjacent sides, inside the polygon",
                formula_plain: "α = (n - 2)·180 / n",
                unit: Unit::Degrees,
                variables: vec![Variable::new("n", "Number of sides")],
                assumptions: vec![],
                category: FormulaCategory::RegularPolygons,
                source_module: PLANE,
                source_function: "regular_polygon_inner_angle",
            },

            Formula::RegularPolygonOuterAngle => FormulaMetadata {
                name: "Regular Polygon Exterior Angle",
                description: "Turning angle at each vertex; supplementary to the interior angle",
                formula_plain: "β = 360 / n",
                unit: Unit::Degrees,
                variables: vec![Variable::new("n", "Number of sides")],
                assumptions: vec![],
                category: FormulaCategory::RegularPolygons,
                source_module: PLANE,
                source_function: "regular_polygon_outer_angle",
            },

            // Triangles
            Formula::EquilateralTriangleArea => FormulaMetadata {
                name: "Equilateral Triangle Area",
                description: "Area of a triangle with three equal sides",
                formula_plain: "A = (√3 / 4)·s²",
                unit: Unit::SquareUnits,
                variables: vec![Variable::new("s", "Side length")],
                assumptions: vec![],
                category: FormulaCategory::Triangles,
                source_module: PLANE,
                source_function: "equilateral_triangle_area",
            },

            Formula::EquilateralTrianglePerimeter => FormulaMetadata {
                name: "Equilateral Triangle Perimeter",
                description: "Perimeter of a triangle with three equal sides",
                formula_plain: "P = 3s",
                unit: Unit::Units,
                variables: vec![Variable::new("s", "Side length")],
                assumptions: vec![],
                category: FormulaCategory::Triangles,
                source_module: PLANE,
                source_function: "equilateral_triangle_perimeter",
            },

            Formula::BaseHeightTriangleArea => FormulaMetadata {
                name: "Triangle Area (Base and Height)",
                description: "Area of a triangle from its base and perpendicular height",
                formula_plain: "A = b·h / 2",
                unit: Unit::SquareUnits,
                variables: vec![Variable::new("b", "Base"), Variable::new("h", "Perpendicular height")],
                assumptions: vec![],
                category: FormulaCategory::Triangles,
                source_module: PLANE,
                source_function: "base_height_triangle_area",
            },

            Formula::IsoscelesTrianglePerimeter => FormulaMetadata {
                name: "Isosceles Triangle Perimeter",
                description: "Perimeter of a triangle with two equal sides",
                formula_plain: "P = b + 2e",
                unit: Unit::Units,
                variables: vec![Variable::new("b", "Base"), Variable::new("e", "Equal side")],
                assumptions: vec![],
                category: FormulaCategory::Triangles,
                source_module: PLANE,
                source_function: "isosceles_triangle_perimeter",
            },

            Formula::IsoscelesHeight => FormulaMetadata {
                name: "Isosceles Triangle Height",
                description: "Height of an isosceles triangle derived from its equal side and base",
                formula_plain: "h = √(e² − b²/4)",
                unit: Unit::Units,
                variables: vec![Variable::new("e", "Equal side"), Variable::new("b", "Base")],
                assumptions: vec!["Undefined (NaN) when e ≤ b/2"],
                category: FormulaCategory::Triangles,
                source_module: PLANE,
                source_function: "isosceles_height_from_sides",
            },

            Formula::IsoscelesEqualSide => FormulaMetadata {
                name: "Isosceles Triangle Equal Side",
                description: "Equal side of an isosceles triangle derived from its height and base",
                formula_plain: "e = √(h² + b²/4)",
                unit: Unit::Units,
                variables: vec![Variable::new("h", "Perpendicular height"), Variable::new("b", "Base")],
                assumptions: vec![],
                category: FormulaCategory::Triangles,
                source_module: PLANE,
                source_function: "isosceles_side_from_height",
            },

            Formula::HeronArea => FormulaMetadata {
                name: "Heron's Formula",
                description: "Area of a triangle from its three sides",
                formula_plain: "s = (a + b + c) / 2, A = √(s(s − a)(s − b)(s − c))",
                unit: Unit::SquareUnits,
                variables: vec![
                    Variable::new("a", "First side"),
                    Variable::new("b", "Second side"),
                    Variable::new("c", "Third side"),
                    Variable::new("s", "Semi-perimeter"),
                ],
                assumptions: vec!["Undefined (NaN) when the sides violate the triangle inequality"],
                category: FormulaCategory::Triangles,
                source_module: PLANE,
                source_function: "heron_area",
            },

            Formula::TrianglePerimeter => FormulaMetadata {
                name: "Triangle Perimeter",
                description: "Perimeter of a triangle from its three sides",
                formula_plain: "P = a + b + c",
                unit: Unit::Units,
                variables: vec![
                    Variable::new("a", "First side"),
                    Variable::new("b", "Second side"),
                    Variable::new("c", "Third side"),
                ],
                assumptions: vec![],
                category: FormulaCategory::Triangles,
                source_module: PLANE,
                source_function: "triangle_perimeter",
            },

            Formula::RightTriangleHypotenuse => FormulaMetadata {
                name: "Right Triangle Hypotenuse",
                description: "Side opposite the right angle (Pythagoras)",
                formula_plain: "c = √(b² + h²)",
                unit: Unit::Units,
                variables: vec![Variable::new("b", "Base"), Variable::new("h", "Height")],
                assumptions: vec![],
                category: FormulaCategory::Triangles,
                source_module: PLANE,
                source_function: "right_triangle_hypotenuse",
            },

            Formula::RightTriangleLeg => FormulaMetadata {
                name: "Right Triangle Leg",
                description: "Height of a right triangle derived from its hypotenuse and base",
                formula_plain: "h = √(c² − b²)",
                unit: Unit::Units,
                variables: vec![Variable::new("c", "Hypotenuse"), Variable::new("b", "Base")],
                assumptions: vec!["Undefined (NaN) when b ≥ c"],
                category: FormulaCategory::Triangles,
                source_module: PLANE,
                source_function: "right_triangle_leg",
            },

            Formula::RightTrianglePerimeter => FormulaMetadata {
                name: "Right Triangle Perimeter",
                description: "Perimeter of a right triangle",
                formula_plain: "P = b + h + c",
                unit: Unit::Units,
                variables: vec![
                    Variable::new("b", "Base"),
                    Variable::new("h", "Height"),
                    Variable::new("c", "Hypotenuse"),
                ],
                assumptions: vec!["c is derived before P is evaluated"],
                category: FormulaCategory::Triangles,
                source_module: PLANE,
                source_function: "right_triangle_perimeter",
            },

            // Boxes, Prisms and Pyramids
            Formula::CubeVolume => FormulaMetadata {
                name: "Cube Volume",
                description: "Volume of a cube",
                formula_plain: "V = s³",
                unit: Unit::CubicUnits,
                variables: vec![Variable::new("s", "Edge length")],
                assumptions: vec![],
                category: FormulaCategory::PolyhedralSolids,
                source_module: SOLID,
                source_function: "cube_volume",
            },

            Formula::CubeSurfaceArea => FormulaMetadata {
                name: "Cube Surface Area",
                description: "Total area of the six faces of a cube",
                formula_plain: "S = 6s²",
                unit: Unit::SquareUnits,
                variables: vec![Variable::new("s", "Edge length")],
                assumptions: vec![],
                category: FormulaCategory::PolyhedralSolids,
                source_module: SOLID,
                source_function: "cube_surface_area",
            },

            Formula::CubeDiagonal => FormulaMetadata {
                name: "Cube Space Diagonal",
                description: "Distance between opposite corners of a cube",
                formula_plain: "d = s√3",
                unit: Unit::Units,
                variables: vec![Variable::new("s", "Edge length")],
                assumptions: vec![],
                category: FormulaCategory::PolyhedralSolids,
                source_module: SOLID,
                source_function: "cube_diagonal",
            },

            Formula::BoxVolume => FormulaMetadata {
                name: "Box Volume",
                description: "Volume of a rectangular box",
                formula_plain: "V = lwh",
                unit: Unit::CubicUnits,
                variables: vec![
                    Variable::new("l", "Length"),
                    Variable::new("w", "Width"),
                    Variable::new("h", "Height"),
                ],
                assumptions: vec![],
                category: FormulaCategory::PolyhedralSolids,
                source_module: SOLID,
                source_function: "box_volume",
            },

            Formula::BoxSurfaceArea => FormulaMetadata {
                name: "Box Surface Area",
                description: "Total area of the six faces of a rectangular box",
                formula_plain: "S = 2(lw + wh + hl)",
                unit: Unit::SquareUnits,
                variables: vec![
                    Variable::new("l", "Length"),
                    Variable::new("w", "Width"),
                    Variable::new("h", "Height"),
                ],
                assumptions: vec![],
                category: FormulaCategory::PolyhedralSolids,
                source_module: SOLID,
                source_function: "box_surface_area",
            },

            Formula::BoxDiagonal => FormulaMetadata {
                name: "Box Space Diagonal",
                description: "Distance between opposite corners of a rectangular box",
                formula_plain: "d = √(l² + w² + h²)",
                unit: Unit::Units,
                variables: vec![
                    Variable::new("l", "Length"),
                    Variable::new("w", "Width"),
                    Variable::new("h", "Height"),
                ],
                assumptions: vec![],
                category: FormulaCategory::PolyhedralSolids,
                source_module: SOLID,
                source_function: "box_diagonal",
            },

            Formula::RegularPrismVolume => FormulaMetadata {
                name: "Regular Prism Volume",
                description: "Volume of a right prism with a regular polygon base",
                formula_plain: "V = A_base·h",
                unit: Unit::CubicUnits,
                variables: vec![
                    Variable::new("A_base", "Regular polygon area from s and n"),
                    Variable::new("h", "Height"),
                ],
                assumptions: vec!["n is a whole number, at least 3"],
                category: FormulaCategory::PolyhedralSolids,
                source_module: SOLID,
                source_function: "regular_prism_volume",
            },

            Formula::RegularPrismSurfaceArea => FormulaMetadata {
                name: "Regular Prism Surface Area",
                description: "Two polygon caps plus the rectangular side faces",
                formula_plain: "S = 2·A_base + P_base·h",
                unit: Unit::SquareUnits,
                variables: vec![
                    Variable::new("A_base", "Regular polygon area from s and n"),
                    Variable::new("P_base", "Regular polygon perimeter n·s"),
                    Variable::new("h", "Height"),
                ],
                assumptions: vec!["n is a whole number, at least 3"],
                category: FormulaCategory::PolyhedralSolids,
                source_module: SOLID,
                source_function: "regular_prism_surface_area",
            },

            Formula::RegularPyramidVolume => FormulaMetadata {
                name: "Regular Pyramid Volume",
                description: "Volume of a right pyramid with a regular polygon base",
                formula_plain: "V = A_base·h / 3",
                unit: Unit::CubicUnits,
                variables: vec![
                    Variable::new("A_base", "Regular polygon area from s and n"),
                    Variable::new("h", "Height"),
                ],
                assumptions: vec!["n is a whole number, at least 3"],
                category: FormulaCategory::PolyhedralSolids,
                source_module: SOLID,
                source_function: "regular_pyramid_volume",
            },

            // Spheres, Cylinders and Cones
            Formula::SphereVolume => FormulaMetadata {
                name: "Sphere Volume",
                description: "Volume of a sphere",
                formula_plain: "V = (4/3)πr³",
                unit: Unit::CubicUnits,
                variables: vec![Variable::new("r", "Radius")],
                assumptions: vec![],
                category: FormulaCategory::RoundSolids,
                source_module: SOLID,
                source_function: "sphere_volume",
            },

            Formula::SphereSurfaceArea => FormulaMetadata {
                name: "Sphere Surface Area",
                description: "Area of the surface of a sphere",
                formula_plain: "S = 4πr²",
                unit: Unit::SquareUnits,
                variables: vec![Variable::new("r", "Radius")],
                assumptions: vec![],
                category: FormulaCategory::RoundSolids,
                source_module: SOLID,
                source_function: "sphere_surface_area",
            },

            Formula::CylinderVolume => FormulaMetadata {
                name: "Cylinder Volume",
                description: "Volume of a right circular cylinder",
                formula_plain: "V = πr²h",
                unit: Unit::CubicUnits,
                variables: vec![Variable::new("r", "Radius"), Variable::new("h", "Height")],
                assumptions: vec![],
                category: FormulaCategory::RoundSolids,
                source_module: SOLID,
                source_function: "cylinder_volume",
            },

            Formula::CylinderSurfaceArea => FormulaMetadata {
                name: "Cylinder Surface Area",
                description: "Side surface plus both circular caps",
                formula_plain: "S = 2πrh + 2πr²",
                unit: Unit::SquareUnits,
                variables: vec![Variable::new("r", "Radius"), Variable::new("h", "Height")],
                assumptions: vec!["Closed cylinder"],
                category: FormulaCategory::RoundSolids,
                source_module: SOLID,
                source_function: "cylinder_surface_area",
            },

            Formula::ConeVolume => FormulaMetadata {
                name: "Cone Volume",
                description: "Volume of a right circular cone",
                formula_plain: "V = (1/3)πr²h",
                unit: Unit::CubicUnits,
                variables: vec![Variable::new("r", "Radius"), Variable::new("h", "Height")],
                assumptions: vec![],
                category: FormulaCategory::RoundSolids,
                source_module: SOLID,
                source_function: "cone_volume",
            },

            Formula::ConeSurfaceArea => FormulaMetadata {
                name: "Cone Surface Area",
                description: "Lateral surface plus the circular base",
                formula_plain: "S = πr(r + √(r² + h²))",
                unit: Unit::SquareUnits,
                variables: vec![Variable::new("r", "Radius"), Variable::new("h", "Height")],
                assumptions: vec!["√(r² + h²) is the slant height"],
                category: FormulaCategory::RoundSolids,
                source_module: SOLID,
                source_function: "cone_surface_area",
            },
        }
    }

    /// Unit of the value this formula produces
    pub fn unit(&self) -> Unit {
        self.metadata().unit
    }

    /// Get all categories in sort order
    pub fn all_categories() -> Vec<FormulaCategory> {
        let mut categories: Vec<FormulaCategory> = Vec::new();
        for formula in ALL_FORMULAS {
            let category = formula.metadata().category;
            if !categories.contains(&category) {
                categories.push(category);
            }
        }
        categories.sort_by_key(|c| c.sort_order());
        categories
    }

    /// All formulas in a category, in registry order
    pub fn in_category(category: FormulaCategory) -> Vec<Formula> {
        ALL_FORMULAS
            .iter()
            .copied()
            .filter(|f| f.metadata().category == category)
            .collect()
    }
}

/// Every registered formula.
pub const ALL_FORMULAS: &[Formula] = &[
    // Circles and ellipses
    Formula::CircleArea,
    Formula::CircleCircumference,
    Formula::EllipseArea,
    // Quadrilaterals
    Formula::SquareArea,
    Formula::SquarePerimeter,
    Formula::SquareDiagonal,
    Formula::RectangleArea,
    Formula::RectanglePerimeter,
    Formula::RectangleDiagonal,
    Formula::TrapeziumArea,
    Formula::ParallelogramArea,
    Formula::ParallelogramAreaFromAngle,
    Formula::ParallelogramPerimeter,
    Formula::RhombusArea,
    Formula::RhombusSideLength,
    Formula::RhombusPerimeter,
    // Regular polygons
    Formula::RegularPolygonArea,
    Formula::RegularPolygonPerimeter,
    Formula::RegularPolygonInnerAngle,
    Formula::RegularPolygonOuterAngle,
    // Triangles
    Formula::EquilateralTriangleArea,
    Formula::EquilateralTrianglePerimeter,
    Formula::BaseHeightTriangleArea,
    Formula::IsoscelesTrianglePerimeter,
    Formula::IsoscelesHeight,
    Formula::IsoscelesEqualSide,
    Formula::HeronArea,
    Formula::TrianglePerimeter,
    Formula::RightTriangleHypotenuse,
    Formula::RightTriangleLeg,
    Formula::RightTrianglePerimeter,
    // Boxes, prisms and pyramids
    Formula::CubeVolume,
    Formula::CubeSurfaceArea,
    Formula::CubeDiagonal,
    Formula::BoxVolume,
    Formula::BoxSurfaceArea,
    Formula::BoxDiagonal,
    Formula::RegularPrismVolume,
    Formula::RegularPrismSurfaceArea,
    Formula::RegularPyramidVolume,
    // Spheres, cylinders and cones
    Formula::SphereVolume,
    Formula::SphereSurfaceArea,
    Formula::CylinderVolume,
    Formula::CylinderSurfaceArea,
    Formula::ConeVolume,
    Formula::ConeSurfaceArea,
];

// ============================================================================
// Markdown Generation for FORMULAS.md
// ============================================================================

/// Generate a complete FORMULAS.md reference.
///
/// # Example
///
/// ```rust
/// use geo_core::formulas::registry::generate_formulas_markdown;
///
/// let markdown = generate_formulas_markdown();
/// assert!(markdown.contains("# Geocalc Formula Reference"));
/// assert!(markdown.contains("Heron's Formula"));
/// ```
pub fn generate_formulas_markdown() -> String {
    let mut output = String::with_capacity(16_000);

    output.push_str(
        r#"# Geocalc Formula Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-formulas`

Every formula the calculator applies, grouped by figure family. Lengths are in
the caller's units; angles are reported in degrees.

---

"#,
    );

    let categories = Formula::all_categories();

    for category in &categories {
        output.push_str(&format!("## {}\n\n", category.display_name()));

        for formula in Formula::in_category(*category) {
            let meta = formula.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}` ({})\n\n", meta.formula_plain, meta.unit));

            if !meta.variables.is_empty() {
                output.push_str("| Symbol | Description |\n");
                output.push_str("|--------|-------------|\n");
                for var in &meta.variables {
                    output.push_str(&format!("| {} | {} |\n", var.symbol, var.description));
                }
                output.push('\n');
            }

            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Notes:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Formulas:** {}\n- **Categories:** {}\n",
        ALL_FORMULAS.len(),
        categories.len()
    ));

    output
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_formulas_have_metadata() {
        assert_eq!(ALL_FORMULAS.len(), 46);

        for formula in ALL_FORMULAS {
            let meta = formula.metadata();
            assert!(!meta.name.is_empty(), "Formula {:?} has no name", formula);
            assert!(!meta.formula_plain.is_empty(), "Formula {:?} has no formula", formula);
            assert!(!meta.variables.is_empty(), "Formula {:?} has no variables", formula);
            assert!(!meta.source_function.is_empty(), "Formula {:?} has no source", formula);
        }
    }

    #[test]
    fn test_names_unique() {
        let mut names: Vec<&str> = ALL_FORMULAS.iter().map(|f| f.metadata().name).collect();
        names.sort_unstable();
        let before = names.len();
        names.dedup();
        assert_eq!(before, names.len(), "Duplicate formula names");
    }

    #[test]
    fn test_units() {
        assert_eq!(Formula::CubeVolume.metadata().unit, Unit::CubicUnits);
        assert_eq!(Formula::RegularPolygonInnerAngle.metadata().unit, Unit::Degrees);
        assert_eq!(Formula::ConeSurfaceArea.metadata().unit, Unit::SquareUnits);
        assert_eq!(Formula::RhombusSideLength.metadata().unit, Unit::Units);
    }

    #[test]
    fn test_categories_sorted() {
        let cats = Formula::all_categories();
        assert_eq!(cats.len(), 6);
        let orders: Vec<u8> = cats.iter().map(|c| c.sort_order()).collect();
        let mut sorted = orders.clone();
        sorted.sort();
        assert_eq!(orders, sorted, "Categories should be sorted by sort_order");
    }

    #[test]
    fn test_in_category_partitions_registry() {
        let total: usize = Formula::all_categories()
            .into_iter()
            .map(|c| Formula::in_category(c).len())
            .sum();
        assert_eq!(total, ALL_FORMULAS.len());
    }

    #[test]
    fn test_generate_formulas_markdown() {
        let markdown = generate_formulas_markdown();

        assert!(markdown.contains("Auto-generated from source code"));
        assert!(markdown.contains("## Circles and Ellipses"));
        assert!(markdown.contains("## Spheres, Cylinders and Cones"));
        assert!(markdown.contains("### Circle Area"));
        assert!(markdown.contains("`A = πr²` (square units)"));
        assert!(markdown.contains("formulas/solid.rs"));
        assert!(markdown.contains("**Total Formulas:** 46"));
        assert!(markdown.contains("**Categories:** 6"));
    }
}
