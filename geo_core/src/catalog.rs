//! # Shape Catalog
//!
//! The static table of supported shapes. Each [`ShapeDefinition`] lists the
//! calculations the shape supports, in display order, and the named inputs
//! each calculation needs.
//!
//! Input labels double as display names and as lookup keys for user-entered
//! values. They are defined once in [`labels`] and shared with the typed
//! input structs in [`crate::calculations`], so the binding between a form
//! field and a formula parameter has a single source.
//!
//! ## Example
//!
//! ```rust
//! use geo_core::catalog::{self, Category};
//!
//! let circle = catalog::find_shape("Circle").unwrap();
//! assert_eq!(circle.category, Category::TwoD);
//!
//! let fields: Vec<_> = catalog::unique_inputs_for(circle)
//!     .into_iter()
//!     .map(|i| i.label)
//!     .collect();
//! assert_eq!(fields, vec!["Radius"]);
//! ```

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{GeoError, GeoResult};

// ============================================================================
// Input Labels
// ============================================================================

/// Input labels shared by the catalog and the calculation bindings.
pub mod labels {
    pub const RADIUS: &str = "Radius";
    pub const SEMI_MAJOR_AXIS: &str = "Semi-major axis (a)";
    pub const SEMI_MINOR_AXIS: &str = "Semi-minor axis (b)";
    pub const SIDE_LENGTH: &str = "Side length";
    pub const LENGTH: &str = "Length";
    pub const WIDTH: &str = "Width";
    pub const HEIGHT: &str = "Height";
    pub const BASE: &str = "Base";
    pub const BASE_1: &str = "Base 1";
    pub const BASE_2: &str = "Base 2";
    pub const SIDE: &str = "Side";
    pub const DIAGONAL_1: &str = "Diagonal 1";
    pub const DIAGONAL_2: &str = "Diagonal 2";
    pub const NUMBER_OF_SIDES: &str = "Number of sides";
    pub const EQUAL_SIDE: &str = "Equal side";
    pub const SIDE_A: &str = "Side a";
    pub const SIDE_B: &str = "Side b";
    pub const SIDE_C: &str = "Side c";
    pub const HYPOTENUSE: &str = "Hypotenuse";
}

// ============================================================================
// Enums
// ============================================================================

/// Whether a shape is a plane figure or a solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "2D")]
    TwoD,
    #[serde(rename = "3D")]
    ThreeD,
}

impl Category {
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::TwoD => "2D",
            Category::ThreeD => "3D",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Every shape the calculator knows how to evaluate.
///
/// This is a closed set: adding a shape means adding a variant here, a typed
/// input struct in [`crate::calculations`], and a catalog entry. The compiler
/// flags every `match` that needs updating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Circle,
    Ellipse,
    Square,
    Rectangle,
    Trapezium,
    Parallelogram,
    Rhombus,
    RegularPolygon,
    EquilateralTriangle,
    IsoscelesTriangle,
    ScaleneTriangle,
    RightTriangle,
    Cube,
    RectangularBox,
    Sphere,
    Cylinder,
    Cone,
    RegularPrism,
    RegularPyramid,
}

impl ShapeKind {
    /// All shape kinds in catalog order
    pub const ALL: [ShapeKind; 19] = [
        ShapeKind::Circle,
        ShapeKind::Ellipse,
        ShapeKind::Square,
        ShapeKind::Rectangle,
        ShapeKind::Trapezium,
        ShapeKind::Parallelogram,
        ShapeKind::Rhombus,
        ShapeKind::RegularPolygon,
        ShapeKind::EquilateralTriangle,
        ShapeKind::IsoscelesTriangle,
        ShapeKind::ScaleneTriangle,
        ShapeKind::RightTriangle,
        ShapeKind::Cube,
        ShapeKind::RectangularBox,
        ShapeKind::Sphere,
        ShapeKind::Cylinder,
        ShapeKind::Cone,
        ShapeKind::RegularPrism,
        ShapeKind::RegularPyramid,
    ];

    /// Display name, also the catalog key
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Ellipse => "Ellipse",
            ShapeKind::Square => "Square",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Trapezium => "Trapezium",
            ShapeKind::Parallelogram => "Parallelogram",
            ShapeKind::Rhombus => "Rhombus",
            ShapeKind::RegularPolygon => "Regular Polygon",
            ShapeKind::EquilateralTriangle => "Equilateral Triangle",
            ShapeKind::IsoscelesTriangle => "Isosceles Triangle",
            ShapeKind::ScaleneTriangle => "Scalene Triangle",
            ShapeKind::RightTriangle => "Right Triangle",
            ShapeKind::Cube => "Cube",
            ShapeKind::RectangularBox => "Box",
            ShapeKind::Sphere => "Sphere",
            ShapeKind::Cylinder => "Cylinder",
            ShapeKind::Cone => "Cone",
            ShapeKind::RegularPrism => "Regular Prism",
            ShapeKind::RegularPyramid => "Regular Pyramid",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            ShapeKind::Circle
            | ShapeKind::Ellipse
            | ShapeKind::Square
            | ShapeKind::Rectangle
            | ShapeKind::Trapezium
            | ShapeKind::Parallelogram
            | ShapeKind::Rhombus
            | ShapeKind::RegularPolygon
            | ShapeKind::EquilateralTriangle
            | ShapeKind::IsoscelesTriangle
            | ShapeKind::ScaleneTriangle
            | ShapeKind::RightTriangle => Category::TwoD,
            ShapeKind::Cube
            | ShapeKind::RectangularBox
            | ShapeKind::Sphere
            | ShapeKind::Cylinder
            | ShapeKind::Cone
            | ShapeKind::RegularPrism
            | ShapeKind::RegularPyramid => Category::ThreeD,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named property computable for a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CalculationKind {
    Area,
    Perimeter,
    Circumference,
    Diagonal,
    SideLength,
    /// Yields both "Inner Angle" and "Outer Angle"
    Angles,
    Hypotenuse,
    Volume,
    SurfaceArea,
}

impl CalculationKind {
    pub const ALL: [CalculationKind; 9] = [
        CalculationKind::Area,
        CalculationKind::Perimeter,
        CalculationKind::Circumference,
        CalculationKind::Diagonal,
        CalculationKind::SideLength,
        CalculationKind::Angles,
        CalculationKind::Hypotenuse,
        CalculationKind::Volume,
        CalculationKind::SurfaceArea,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            CalculationKind::Area => "Area",
            CalculationKind::Perimeter => "Perimeter",
            CalculationKind::Circumference => "Circumference",
            CalculationKind::Diagonal => "Diagonal",
            CalculationKind::SideLength => "Side Length",
            CalculationKind::Angles => "Inner/Outer Angles",
            CalculationKind::Hypotenuse => "Hypotenuse",
            CalculationKind::Volume => "Volume",
            CalculationKind::SurfaceArea => "Surface Area",
        }
    }
}

impl fmt::Display for CalculationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Kind of value an input accepts. Only numbers are in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    #[default]
    Number,
}

// ============================================================================
// Definitions
// ============================================================================

/// One named measurement a calculation needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSpec {
    /// Field name and lookup key (e.g., "Radius")
    pub label: String,

    /// Accepted value kind
    #[serde(default)]
    pub value_kind: ValueKind,

    /// Display hint for an empty field
    pub placeholder: String,

    /// May be left blank; the value is then derived from other inputs
    #[serde(default)]
    pub optional: bool,
}

impl InputSpec {
    /// Create a required numeric input
    pub fn required(label: impl Into<String>, placeholder: impl Into<String>) -> Self {
        InputSpec {
            label: label.into(),
            value_kind: ValueKind::Number,
            placeholder: placeholder.into(),
            optional: false,
        }
    }

    /// Create an optional numeric input
    pub fn optional(label: impl Into<String>, placeholder: impl Into<String>) -> Self {
        InputSpec {
            optional: true,
            ..InputSpec::required(label, placeholder)
        }
    }
}

/// Static description of one shape.
///
/// ## JSON Example
///
/// ```json
/// {
///   "name": "Circle",
///   "kind": "Circle",
///   "category": "2D",
///   "calculations": ["Area", "Circumference"],
///   "required_inputs": {
///     "Area": [{ "label": "Radius", "value_kind": "number", "placeholder": "Enter radius", "optional": false }],
///     "Circumference": [{ "label": "Radius", "value_kind": "number", "placeholder": "Enter radius", "optional": false }]
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeDefinition {
    /// Unique display name
    pub name: String,

    /// Which typed input struct evaluates this shape
    pub kind: ShapeKind,

    pub category: Category,

    /// Supported calculations in display order
    pub calculations: Vec<CalculationKind>,

    /// Inputs per calculation, in form order
    pub required_inputs: BTreeMap<CalculationKind, Vec<InputSpec>>,
}

impl ShapeDefinition {
    /// Build a definition whose name and category come from `kind`
    pub fn new(kind: ShapeKind, calculations: Vec<(CalculationKind, Vec<InputSpec>)>) -> Self {
        let order = calculations.iter().map(|(calc, _)| *calc).collect();
        ShapeDefinition {
            name: kind.name().to_string(),
            kind,
            category: kind.category(),
            calculations: order,
            required_inputs: calculations.into_iter().collect(),
        }
    }

    /// Inputs declared for one calculation
    pub fn inputs_for(&self, calculation: CalculationKind) -> &[InputSpec] {
        self.required_inputs
            .get(&calculation)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Per-calculation view of the inputs, in calculation order
    pub fn grouped_inputs(&self) -> Vec<(CalculationKind, &[InputSpec])> {
        self.calculations
            .iter()
            .map(|calc| (*calc, self.inputs_for(*calc)))
            .collect()
    }

    /// Distinct inputs across all calculations, in first-seen order.
    ///
    /// When a label recurs, the first occurrence's metadata wins.
    pub fn unique_inputs(&self) -> Vec<InputSpec> {
        let mut seen = HashSet::new();
        self.calculations
            .iter()
            .flat_map(|calc| self.inputs_for(*calc))
            .filter(|input| seen.insert(input.label.as_str()))
            .cloned()
            .collect()
    }

    pub fn supports(&self, calculation: CalculationKind) -> bool {
        self.calculations.contains(&calculation)
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// A validated, immutable list of shape definitions.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    shapes: Vec<ShapeDefinition>,
}

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    Catalog::new(builtin_definitions()).expect("built-in shape catalog must be self-consistent")
});

impl Catalog {
    /// Validate and wrap a list of definitions.
    ///
    /// Rejects duplicate names or kinds, a category that disagrees with the
    /// kind, calculations without inputs (or inputs without a calculation),
    /// duplicate labels within one calculation, labels the kind cannot bind,
    /// and a label reused within a shape with different metadata.
    pub fn new(shapes: Vec<ShapeDefinition>) -> GeoResult<Self> {
        let mut names = HashSet::new();
        let mut kinds = HashSet::new();

        for shape in &shapes {
            if !names.insert(shape.name.as_str()) {
                return Err(GeoError::catalog_inconsistent(&shape.name, "duplicate shape name"));
            }
            if !kinds.insert(shape.kind) {
                return Err(GeoError::catalog_inconsistent(
                    &shape.name,
                    format!("shape kind {:?} is defined twice", shape.kind),
                ));
            }
            validate_shape(shape)?;
        }

        Ok(Catalog { shapes })
    }

    /// The catalog of built-in shapes
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn shapes(&self) -> &[ShapeDefinition] {
        &self.shapes
    }

    /// Exact, case-sensitive lookup by name
    pub fn find(&self, name: &str) -> GeoResult<&ShapeDefinition> {
        self.shapes
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| GeoError::unknown_shape(name))
    }

    pub fn find_kind(&self, kind: ShapeKind) -> Option<&ShapeDefinition> {
        self.shapes.iter().find(|s| s.kind == kind)
    }
}

fn validate_shape(shape: &ShapeDefinition) -> GeoResult<()> {
    if shape.category != shape.kind.category() {
        return Err(GeoError::catalog_inconsistent(
            &shape.name,
            format!("category {} does not match kind {:?}", shape.category, shape.kind),
        ));
    }

    let mut calcs = HashSet::new();
    for calc in &shape.calculations {
        if !calcs.insert(*calc) {
            return Err(GeoError::catalog_inconsistent(
                &shape.name,
                format!("calculation '{}' listed twice", calc),
            ));
        }
        if !shape.kind.supported_calculations().contains(calc) {
            return Err(GeoError::catalog_inconsistent(
                &shape.name,
                format!("{} has no formula for '{}'", shape.kind, calc),
            ));
        }
        if !shape.required_inputs.contains_key(calc) {
            return Err(GeoError::catalog_inconsistent(
                &shape.name,
                format!("calculation '{}' has no input list", calc),
            ));
        }
    }
    for calc in shape.required_inputs.keys() {
        if !calcs.contains(calc) {
            return Err(GeoError::catalog_inconsistent(
                &shape.name,
                format!("inputs declared for unsupported calculation '{}'", calc),
            ));
        }
    }

    let accepted = shape.kind.accepted_labels();
    let mut first_seen: BTreeMap<&str, &InputSpec> = BTreeMap::new();
    for calc in &shape.calculations {
        let mut in_calc = HashSet::new();
        for input in shape.inputs_for(*calc) {
            if !in_calc.insert(input.label.as_str()) {
                return Err(GeoError::catalog_inconsistent(
                    &shape.name,
                    format!("label '{}' repeated in '{}'", input.label, calc),
                ));
            }
            if !accepted.contains(&input.label.as_str()) {
                return Err(GeoError::catalog_inconsistent(
                    &shape.name,
                    format!("label '{}' is not a parameter of {}", input.label, shape.kind),
                ));
            }
            if let Some(previous) = first_seen.insert(input.label.as_str(), input) {
                if previous != input {
                    return Err(GeoError::catalog_inconsistent(
                        &shape.name,
                        format!("label '{}' reused with different metadata in '{}'", input.label, calc),
                    ));
                }
            }
        }
    }

    Ok(())
}

// ============================================================================
// Catalog Operations
// ============================================================================

/// All built-in shapes, in catalog order
pub fn list_shapes() -> &'static [ShapeDefinition] {
    Catalog::builtin().shapes()
}

/// Look up a built-in shape by exact name
pub fn find_shape(name: &str) -> GeoResult<&'static ShapeDefinition> {
    Catalog::builtin().find(name)
}

/// Distinct inputs across a shape's calculations, in first-seen order
pub fn unique_inputs_for(shape: &ShapeDefinition) -> Vec<InputSpec> {
    shape.unique_inputs()
}

/// Case-insensitive substring match on shape name.
///
/// An empty query returns every shape; no match returns an empty list.
///
/// ```rust
/// use geo_core::catalog::{filter_by_name_substring, list_shapes};
///
/// let hits = filter_by_name_substring(list_shapes(), "TRI");
/// assert_eq!(hits.len(), 4);
/// assert!(filter_by_name_substring(list_shapes(), "zzz").is_empty());
/// ```
pub fn filter_by_name_substring<'a>(shapes: &'a [ShapeDefinition], query: &str) -> Vec<&'a ShapeDefinition> {
    let needle = query.to_lowercase();
    shapes
        .iter()
        .filter(|s| s.name.to_lowercase().contains(&needle))
        .collect()
}

/// Shapes of one category, preserving order
pub fn filter_by_category<'a, I>(shapes: I, category: Category) -> Vec<&'a ShapeDefinition>
where
    I: IntoIterator<Item = &'a ShapeDefinition>,
{
    shapes.into_iter().filter(|s| s.category == category).collect()
}

// ============================================================================
// Built-in Definitions
// ============================================================================

fn placeholder_for(label: &str) -> String {
    match label {
        labels::SEMI_MAJOR_AXIS => "Enter a".to_string(),
        labels::SEMI_MINOR_AXIS => "Enter b".to_string(),
        labels::BASE_1 => "Enter first base".to_string(),
        labels::BASE_2 => "Enter second base".to_string(),
        labels::SIDE | labels::EQUAL_SIDE => format!("Enter {} length", label.to_lowercase()),
        labels::DIAGONAL_1 => "Enter first diagonal".to_string(),
        labels::DIAGONAL_2 => "Enter second diagonal".to_string(),
        labels::SIDE_A => "Enter first side".to_string(),
        labels::SIDE_B => "Enter second side".to_string(),
        labels::SIDE_C => "Enter third side".to_string(),
        other => format!("Enter {}", other.to_lowercase()),
    }
}

fn req(label: &str) -> InputSpec {
    InputSpec::required(label, placeholder_for(label))
}

fn opt(label: &str) -> InputSpec {
    InputSpec::optional(label, format!("{} (or leave blank to derive)", placeholder_for(label)))
}

/// The shipped shape table.
pub fn builtin_definitions() -> Vec<ShapeDefinition> {
    use labels::*;
    use CalculationKind::*;

    let side = || vec![req(SIDE_LENGTH)];
    let length_width = || vec![req(LENGTH), req(WIDTH)];
    let diagonals = || vec![req(DIAGONAL_1), req(DIAGONAL_2)];
    let polygon = || vec![req(SIDE_LENGTH), req(NUMBER_OF_SIDES)];
    let sides_abc = || vec![req(SIDE_A), req(SIDE_B), req(SIDE_C)];
    let box_dims = || vec![req(LENGTH), req(WIDTH), req(HEIGHT)];
    let radius = || vec![req(RADIUS)];
    let radius_height = || vec![req(RADIUS), req(HEIGHT)];
    let prism = || vec![req(SIDE_LENGTH), req(NUMBER_OF_SIDES), req(HEIGHT)];

    vec![
        // 2D shapes
        ShapeDefinition::new(ShapeKind::Circle, vec![(Area, radius()), (Circumference, radius())]),
        ShapeDefinition::new(
            ShapeKind::Ellipse,
            vec![(Area, vec![req(SEMI_MAJOR_AXIS), req(SEMI_MINOR_AXIS)])],
        ),
        ShapeDefinition::new(
            ShapeKind::Square,
            vec![(Area, side()), (Perimeter, side()), (Diagonal, side())],
        ),
        ShapeDefinition::new(
            ShapeKind::Rectangle,
            vec![(Area, length_width()), (Perimeter, length_width()), (Diagonal, length_width())],
        ),
        ShapeDefinition::new(
            ShapeKind::Trapezium,
            vec![(Area, vec![req(BASE_1), req(BASE_2), req(HEIGHT)])],
        ),
        ShapeDefinition::new(
            ShapeKind::Parallelogram,
            vec![
                (Area, vec![req(BASE), req(HEIGHT)]),
                (Perimeter, vec![req(BASE), req(SIDE)]),
            ],
        ),
        ShapeDefinition::new(
            ShapeKind::Rhombus,
            vec![(Area, diagonals()), (SideLength, diagonals()), (Perimeter, diagonals())],
        ),
        ShapeDefinition::new(
            ShapeKind::RegularPolygon,
            vec![(Area, polygon()), (Perimeter, polygon()), (Angles, vec![req(NUMBER_OF_SIDES)])],
        ),
        ShapeDefinition::new(
            ShapeKind::EquilateralTriangle,
            vec![(Area, side()), (Perimeter, side())],
        ),
        ShapeDefinition::new(
            ShapeKind::IsoscelesTriangle,
            vec![
                (Area, vec![req(BASE), opt(HEIGHT), opt(EQUAL_SIDE)]),
                (Perimeter, vec![req(BASE), opt(EQUAL_SIDE), opt(HEIGHT)]),
            ],
        ),
        ShapeDefinition::new(
            ShapeKind::ScaleneTriangle,
            vec![(Area, sides_abc()), (Perimeter, sides_abc())],
        ),
        ShapeDefinition::new(
            ShapeKind::RightTriangle,
            vec![
                (Area, vec![req(BASE), opt(HEIGHT), opt(HYPOTENUSE)]),
                (Perimeter, vec![req(BASE), opt(HEIGHT), opt(HYPOTENUSE)]),
                (Hypotenuse, vec![req(BASE), opt(HEIGHT)]),
            ],
        ),
        // 3D shapes
        ShapeDefinition::new(
            ShapeKind::Cube,
            vec![(Volume, side()), (SurfaceArea, side()), (Diagonal, side())],
        ),
        ShapeDefinition::new(
            ShapeKind::RectangularBox,
            vec![(Volume, box_dims()), (SurfaceArea, box_dims()), (Diagonal, box_dims())],
        ),
        ShapeDefinition::new(ShapeKind::Sphere, vec![(Volume, radius()), (SurfaceArea, radius())]),
        ShapeDefinition::new(
            ShapeKind::Cylinder,
            vec![(Volume, radius_height()), (SurfaceArea, radius_height())],
        ),
        ShapeDefinition::new(
            ShapeKind::Cone,
            vec![(Volume, radius_height()), (SurfaceArea, radius_height())],
        ),
        ShapeDefinition::new(
            ShapeKind::RegularPrism,
            vec![(Volume, prism()), (SurfaceArea, prism())],
        ),
        ShapeDefinition::new(ShapeKind::RegularPyramid, vec![(Volume, prism())]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_consistent() {
        assert!(Catalog::new(builtin_definitions()).is_ok());
        assert_eq!(list_shapes().len(), ShapeKind::ALL.len());
    }

    #[test]
    fn test_every_kind_cataloged_in_order() {
        let kinds: Vec<ShapeKind> = list_shapes().iter().map(|s| s.kind).collect();
        assert_eq!(kinds, ShapeKind::ALL.to_vec());
    }

    #[test]
    fn test_category_split() {
        assert_eq!(filter_by_category(list_shapes(), Category::TwoD).len(), 12);
        assert_eq!(filter_by_category(list_shapes(), Category::ThreeD).len(), 7);
    }

    #[test]
    fn test_unique_inputs_each_label_once() {
        for shape in list_shapes() {
            let unique = unique_inputs_for(shape);
            let mut declared: Vec<&str> = shape
                .required_inputs
                .values()
                .flatten()
                .map(|i| i.label.as_str())
                .collect();
            declared.sort_unstable();
            declared.dedup();

            let mut labels: Vec<&str> = unique.iter().map(|i| i.label.as_str()).collect();
            assert_eq!(labels.len(), declared.len(), "{} has duplicate labels", shape.name);
            labels.sort_unstable();
            assert_eq!(labels, declared, "{} label sets differ", shape.name);
        }
    }

    #[test]
    fn test_unique_inputs_first_seen_order() {
        let shape = find_shape("Right Triangle").unwrap();
        let labels: Vec<String> = unique_inputs_for(shape).into_iter().map(|i| i.label).collect();
        assert_eq!(labels, vec!["Base", "Height", "Hypotenuse"]);

        let shape = find_shape("Regular Polygon").unwrap();
        let labels: Vec<String> = unique_inputs_for(shape).into_iter().map(|i| i.label).collect();
        assert_eq!(labels, vec!["Side length", "Number of sides"]);
    }

    #[test]
    fn test_unique_inputs_first_metadata_wins() {
        let mut shape = ShapeDefinition::new(
            ShapeKind::Circle,
            vec![
                (CalculationKind::Area, vec![InputSpec::required("Radius", "first")]),
                (CalculationKind::Circumference, vec![InputSpec::required("Radius", "second")]),
            ],
        );
        assert_eq!(shape.unique_inputs()[0].placeholder, "first");

        shape.calculations.reverse();
        assert_eq!(shape.unique_inputs()[0].placeholder, "second");
    }

    #[test]
    fn test_grouped_inputs() {
        let shape = find_shape("Parallelogram").unwrap();
        let grouped = shape.grouped_inputs();
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].0, CalculationKind::Area);
        assert_eq!(grouped[1].1[1].label, "Side");
    }

    #[test]
    fn test_filter_by_name_substring() {
        let shapes = list_shapes();
        assert_eq!(filter_by_name_substring(shapes, "").len(), shapes.len());

        let names: Vec<&str> = filter_by_name_substring(shapes, "regular")
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["Regular Polygon", "Regular Prism", "Regular Pyramid"]);

        assert_eq!(filter_by_name_substring(shapes, "CiRcLe")[0].name, "Circle");
        assert!(filter_by_name_substring(shapes, "dodecahedron").is_empty());
    }

    #[test]
    fn test_find_shape() {
        assert_eq!(find_shape("Box").unwrap().kind, ShapeKind::RectangularBox);
        let err = find_shape("circle").unwrap_err();
        assert_eq!(err, GeoError::unknown_shape("circle"));
    }

    #[test]
    fn test_rejects_reused_label_with_different_placeholder() {
        let shape = ShapeDefinition::new(
            ShapeKind::Circle,
            vec![
                (CalculationKind::Area, vec![InputSpec::required("Radius", "Enter radius")]),
                (CalculationKind::Circumference, vec![InputSpec::required("Radius", "Radius?")]),
            ],
        );
        let err = Catalog::new(vec![shape]).unwrap_err();
        assert_eq!(err.error_code(), "CATALOG_INCONSISTENT");
    }

    #[test]
    fn test_rejects_unbindable_label() {
        let shape = ShapeDefinition::new(
            ShapeKind::Circle,
            vec![(CalculationKind::Area, vec![InputSpec::required("Diameter", "Enter diameter")])],
        );
        assert!(Catalog::new(vec![shape]).is_err());
    }

    #[test]
    fn test_rejects_unsupported_calculation() {
        let shape = ShapeDefinition::new(
            ShapeKind::Circle,
            vec![(CalculationKind::Volume, vec![InputSpec::required("Radius", "Enter radius")])],
        );
        let err = Catalog::new(vec![shape]).unwrap_err();
        assert_eq!(err, GeoError::catalog_inconsistent("Circle", "Circle has no formula for 'Volume'"));
    }

    #[test]
    fn test_builtin_declares_only_supported_calculations() {
        for shape in list_shapes() {
            assert_eq!(
                shape.calculations.as_slice(),
                shape.kind.supported_calculations(),
                "{} should declare every calculation it can evaluate",
                shape.name
            );
        }
    }

    #[test]
    fn test_rejects_duplicate_shape() {
        let circle = || {
            ShapeDefinition::new(
                ShapeKind::Circle,
                vec![(CalculationKind::Area, vec![InputSpec::required("Radius", "Enter radius")])],
            )
        };
        assert!(Catalog::new(vec![circle(), circle()]).is_err());
    }

    #[test]
    fn test_rejects_missing_input_list() {
        let mut shape = ShapeDefinition::new(
            ShapeKind::Circle,
            vec![(CalculationKind::Area, vec![InputSpec::required("Radius", "Enter radius")])],
        );
        shape.calculations.push(CalculationKind::Circumference);
        assert!(Catalog::new(vec![shape]).is_err());
    }

    #[test]
    fn test_rejects_wrong_category() {
        let mut shape = ShapeDefinition::new(
            ShapeKind::Sphere,
            vec![(CalculationKind::Volume, vec![InputSpec::required("Radius", "Enter radius")])],
        );
        shape.category = Category::TwoD;
        assert!(Catalog::new(vec![shape]).is_err());
    }

    #[test]
    fn test_definition_json_roundtrip() {
        let shape = find_shape("Isosceles Triangle").unwrap();
        let json = serde_json::to_string(shape).unwrap();
        assert!(json.contains("\"category\":\"2D\""));
        let roundtrip: ShapeDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(&roundtrip, shape);
    }
}
