//! # Geometric Formulas
//!
//! All closed-form formulas used by the calculator live here, as plain `f64`
//! functions with no validation. Keeping them separate from the dispatcher
//! means each one can be checked against a reference table in isolation.
//!
//! ## Modules
//!
//! - [`plane`] - 2D figures (area, perimeter, diagonals, angles)
//! - [`solid`] - 3D figures (volume, surface area, space diagonals)
//! - [`registry`] - Formula metadata and the FORMULAS.md generator
//!
//! ## Domain
//!
//! Formulas assume positive, finite inputs. Outside that domain they follow
//! IEEE-754 (e.g. Heron's formula returns `NaN` for sides that cannot form a
//! triangle); rejecting bad input is the dispatcher's job.

pub mod plane;
pub mod registry;
pub mod solid;

pub use registry::{
    Formula,
    FormulaCategory,
    FormulaMetadata,
    Variable,
    ALL_FORMULAS,
    generate_formulas_markdown,
};
