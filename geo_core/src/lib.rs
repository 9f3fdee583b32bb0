//! # geo_core - Geometry Calculation Engine
//!
//! `geo_core` is the computational heart of Geocalc: a catalog of 2D and 3D
//! shapes and a dispatcher that turns raw form values into areas, perimeters,
//! volumes and angles. All inputs and outputs are JSON-serializable, so any
//! front end (terminal, web, or a script) can drive it.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Typed Inputs**: Each shape binds its labels to a dedicated struct
//!
//! ## Quick Start
//!
//! ```rust
//! use geo_core::{calculate, find_shape, unique_inputs_for, DisplaySettings};
//!
//! let circle = find_shape("Circle").unwrap();
//! let labels: Vec<String> = unique_inputs_for(circle).into_iter().map(|i| i.label).collect();
//! assert_eq!(labels, vec!["Radius"]);
//!
//! let results = calculate("Circle", [("Radius", "2")]).unwrap();
//! let area = results.get("Area").unwrap();
//! assert_eq!(area.display(&DisplaySettings::default()), "12.57 square units");
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Shape definitions and picker queries
//! - [`calculations`] - Input validation and the formula dispatcher
//! - [`formulas`] - Pure formula functions and their registry
//! - [`settings`] - Result display options
//! - [`units`] - Result units
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod catalog;
pub mod errors;
pub mod formulas;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, calculate_shape, CalculationResult, CalculationResults, NamedResult};
pub use catalog::{
    filter_by_category, filter_by_name_substring, find_shape, list_shapes, unique_inputs_for, CalculationKind,
    Catalog, Category, InputSpec, ShapeDefinition, ShapeKind,
};
pub use errors::{GeoError, GeoResult};
pub use settings::DisplaySettings;
pub use units::Unit;
