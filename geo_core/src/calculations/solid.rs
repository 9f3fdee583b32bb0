//! # Solid Calculations
//!
//! Typed inputs for every 3D shape, mirroring [`super::plane`].

use serde::{Deserialize, Serialize};

use super::measurements::Measurements;
use super::plane::single;
use super::results::NamedResult;
use crate::catalog::labels;
use crate::catalog::CalculationKind;
use crate::errors::GeoResult;
use crate::formulas::solid::*;
use crate::formulas::Formula;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubeInput {
    pub side: f64,
}

impl CubeInput {
    pub const LABELS: &'static [&'static str] = &[labels::SIDE_LENGTH];

    pub fn from_measurements(m: &Measurements) -> GeoResult<Self> {
        Ok(CubeInput {
            side: m.require(labels::SIDE_LENGTH)?,
        })
    }

    pub fn evaluate(&self, calc: CalculationKind) -> Option<Vec<NamedResult>> {
        match calc {
            CalculationKind::Volume => single(calc, cube_volume(self.side), Formula::CubeVolume),
            CalculationKind::SurfaceArea => single(calc, cube_surface_area(self.side), Formula::CubeSurfaceArea),
            CalculationKind::Diagonal => single(calc, cube_diagonal(self.side), Formula::CubeDiagonal),
            _ => None,
        }
    }
}

/// Rectangular box (cuboid)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxInput {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl BoxInput {
    pub const LABELS: &'static [&'static str] = &[labels::LENGTH, labels::WIDTH, labels::HEIGHT];

    pub fn from_measurements(m: &Measurements) -> GeoResult<Self> {
        Ok(BoxInput {
            length: m.require(labels::LENGTH)?,
            width: m.require(labels::WIDTH)?,
            height: m.require(labels::HEIGHT)?,
        })
    }

    pub fn evaluate(&self, calc: CalculationKind) -> Option<Vec<NamedResult>> {
        let (l, w, h) = (self.length, self.width, self.height);
        match calc {
            CalculationKind::Volume => single(calc, box_volume(l, w, h), Formula::BoxVolume),
            CalculationKind::SurfaceArea => single(calc, box_surface_area(l, w, h), Formula::BoxSurfaceArea),
            CalculationKind::Diagonal => single(calc, box_diagonal(l, w, h), Formula::BoxDiagonal),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphereInput {
    pub radius: f64,
}

impl SphereInput {
    pub const LABELS: &'static [&'static str] = &[labels::RADIUS];

    pub fn from_measurements(m: &Measurements) -> GeoResult<Self> {
        Ok(SphereInput {
            radius: m.require(labels::RADIUS)?,
        })
    }

    pub fn evaluate(&self, calc: CalculationKind) -> Option<Vec<NamedResult>> {
        match calc {
            CalculationKind::Volume => single(calc, sphere_volume(self.radius), Formula::SphereVolume),
            CalculationKind::SurfaceArea => {
                single(calc, sphere_surface_area(self.radius), Formula::SphereSurfaceArea)
            }
            _ => None,
        }
    }
}

/// Radius and height, shared by the cylinder and the cone
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundSolidInput {
    pub radius: f64,
    pub height: f64,
}

impl RoundSolidInput {
    pub const LABELS: &'static [&'static str] = &[labels::RADIUS, labels::HEIGHT];

    pub fn from_measurements(m: &Measurements) -> GeoResult<Self> {
        Ok(RoundSolidInput {
            radius: m.require(labels::RADIUS)?,
            height: m.require(labels::HEIGHT)?,
        })
    }

    pub fn evaluate_cylinder(&self, calc: CalculationKind) -> Option<Vec<NamedResult>> {
        let (r, h) = (self.radius, self.height);
        match calc {
            CalculationKind::Volume => single(calc, cylinder_volume(r, h), Formula::CylinderVolume),
            CalculationKind::SurfaceArea => single(calc, cylinder_surface_area(r, h), Formula::CylinderSurfaceArea),
            _ => None,
        }
    }

    pub fn evaluate_cone(&self, calc: CalculationKind) -> Option<Vec<NamedResult>> {
        let (r, h) = (self.radius, self.height);
        match calc {
            CalculationKind::Volume => single(calc, cone_volume(r, h), Formula::ConeVolume),
            CalculationKind::SurfaceArea => single(calc, cone_surface_area(r, h), Formula::ConeSurfaceArea),
            _ => None,
        }
    }
}

/// Regular polygon base extruded (prism) or raised to an apex (pyramid)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegularSolidInput {
    pub side: f64,
    pub sides: f64,
    pub height: f64,
}

impl RegularSolidInput {
    pub const LABELS: &'static [&'static str] =
        &[labels::SIDE_LENGTH, labels::NUMBER_OF_SIDES, labels::HEIGHT];

    pub fn from_measurements(m: &Measurements) -> GeoResult<Self> {
        Ok(RegularSolidInput {
            side: m.require(labels::SIDE_LENGTH)?,
            sides: m.side_count(labels::NUMBER_OF_SIDES)?,
            height: m.require(labels::HEIGHT)?,
        })
    }

    pub fn evaluate_prism(&self, calc: CalculationKind) -> Option<Vec<NamedResult>> {
        let (s, n, h) = (self.side, self.sides, self.height);
        match calc {
            CalculationKind::Volume => single(calc, regular_prism_volume(s, n, h), Formula::RegularPrismVolume),
            CalculationKind::SurfaceArea => single(
                calc,
                regular_prism_surface_area(s, n, h),
                Formula::RegularPrismSurfaceArea,
            ),
            _ => None,
        }
    }

    pub fn evaluate_pyramid(&self, calc: CalculationKind) -> Option<Vec<NamedResult>> {
        match calc {
            CalculationKind::Volume => single(
                calc,
                regular_pyramid_volume(self.side, self.sides, self.height),
                Formula::RegularPyramidVolume,
            ),
            _ => None,
        }
    }
}
