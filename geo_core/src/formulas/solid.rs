//! # Solid Figure Formulas
//!
//! Volume, surface area and space-diagonal formulas for 3D shapes.
//! Prism and pyramid formulas build on the regular polygon base from
//! [`super::plane`].
//!
//! ## Notation
//!
//! - `s` = Edge length
//! - `l`, `w`, `h` = Length, width, height
//! - `r` = Radius
//! - `n` = Number of sides of the base polygon

use std::f64::consts::PI;

use super::plane::{regular_polygon_area, regular_polygon_perimeter};

// =============================================================================
// CUBE AND BOX
// =============================================================================

/// Volume of a cube
#[inline]
pub fn cube_volume(s: f64) -> f64 {
    s * s * s
}

/// Surface area of a cube
///
/// # Formula
/// S = 6s²
#[inline]
pub fn cube_surface_area(s: f64) -> f64 {
    6.0 * s * s
}

/// Space diagonal of a cube
///
/// # Formula
/// d = s√3
#[inline]
pub fn cube_diagonal(s: f64) -> f64 {
    s * 3.0_f64.sqrt()
}

/// Volume of a rectangular box
#[inline]
pub fn box_volume(l: f64, w: f64, h: f64) -> f64 {
    l * w * h
}

/// Surface area of a rectangular box
///
/// # Formula
/// S = 2(lw + wh + hl)
#[inline]
pub fn box_surface_area(l: f64, w: f64, h: f64) -> f64 {
    2.0 * (l * w + w * h + h * l)
}

/// Space diagonal of a rectangular box
///
/// # Formula
/// d = √(l² + w² + h²)
///
/// # Example
/// ```rust
/// use geo_core::formulas::solid::box_diagonal;
///
/// // 2 x 3 x 6 box has a diagonal of exactly 7
/// assert!((box_diagonal(2.0, 3.0, 6.0) - 7.0).abs() < 1e-12);
/// ```
#[inline]
pub fn box_diagonal(l: f64, w: f64, h: f64) -> f64 {
    (l * l + w * w + h * h).sqrt()
}

// =============================================================================
// ROUND SOLIDS
// =============================================================================

/// Volume of a sphere
///
/// # Formula
/// V = (4/3)πr³
#[inline]
pub fn sphere_volume(r: f64) -> f64 {
    (4.0 / 3.0) * PI * r * r * r
}

/// Surface area of a sphere
///
/// # Formula
/// S = 4πr²
#[inline]
pub fn sphere_surface_area(r: f64) -> f64 {
    4.0 * PI * r * r
}

/// Volume of a right circular cylinder
///
/// # Formula
/// V = πr²h
#[inline]
pub fn cylinder_volume(r: f64, h: f64) -> f64 {
    PI * r * r * h
}

/// Total surface area of a closed cylinder (two caps plus the side)
///
/// # Formula
/// S = 2πrh + 2πr²
#[inline]
pub fn cylinder_surface_area(r: f64, h: f64) -> f64 {
    2.0 * PI * r * h + 2.0 * PI * r * r
}

/// Volume of a right circular cone
///
/// # Formula
/// V = (1/3)πr²h
#[inline]
pub fn cone_volume(r: f64, h: f64) -> f64 {
    (1.0 / 3.0) * PI * r * r * h
}

/// Total surface area of a cone (base plus lateral surface)
///
/// ```text
///        /\
///       /  \  ℓ = √(r² + h²)
///    h /    \
///     /______\
///        r
/// ```
///
/// # Formula
/// S = πr(r + ℓ)
///
/// # Example
/// ```rust
/// use geo_core::formulas::solid::cone_surface_area;
/// use std::f64::consts::PI;
///
/// // r = 3, h = 4 gives slant height 5: S = π·3·8
/// assert!((cone_surface_area(3.0, 4.0) - 24.0 * PI).abs() < 1e-9);
/// ```
#[inline]
pub fn cone_surface_area(r: f64, h: f64) -> f64 {
    let slant_height = r.hypot(h);
    PI * r * (r + slant_height)
}

// =============================================================================
// PRISM AND PYRAMID (REGULAR POLYGON BASE)
// =============================================================================

/// Volume of a right prism with a regular polygon base
///
/// # Formula
/// V = A_base · h
#[inline]
pub fn regular_prism_volume(s: f64, n: f64, h: f64) -> f64 {
    regular_polygon_area(s, n) * h
}

/// Total surface area of a right prism with a regular polygon base
///
/// # Formula
/// S = 2·A_base + P_base · h
#[inline]
pub fn regular_prism_surface_area(s: f64, n: f64, h: f64) -> f64 {
    2.0 * regular_polygon_area(s, n) + regular_polygon_perimeter(s, n) * h
}

/// Volume of a right pyramid with a regular polygon base
///
/// # Formula
/// V = A_base · h / 3
#[inline]
pub fn regular_pyramid_volume(s: f64, n: f64, h: f64) -> f64 {
    regular_polygon_area(s, n) * h / 3.0
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON || (a - b).abs() / b.abs().max(1.0) < 1e-12
    }

    #[test]
    fn test_cube_matches_box() {
        let s = 1.7;
        assert!(approx_eq(cube_volume(s), box_volume(s, s, s)));
        assert!(approx_eq(cube_surface_area(s), box_surface_area(s, s, s)));
        assert!(approx_eq(cube_diagonal(s), box_diagonal(s, s, s)));
    }

    #[test]
    fn test_box() {
        assert!(approx_eq(box_volume(2.0, 3.0, 4.0), 24.0));
        // 2(6 + 12 + 8) = 52
        assert!(approx_eq(box_surface_area(2.0, 3.0, 4.0), 52.0));
    }

    #[test]
    fn test_sphere() {
        assert!(approx_eq(sphere_volume(3.0), 36.0 * PI));
        assert!(approx_eq(sphere_surface_area(3.0), 36.0 * PI));
    }

    #[test]
    fn test_cylinder_and_cone_volume_ratio() {
        let (r, h) = (2.0, 5.0);
        assert!(approx_eq(cylinder_volume(r, h), 3.0 * cone_volume(r, h)));
        // 2π·2·5 + 2π·4 = 28π
        assert!(approx_eq(cylinder_surface_area(r, h), 28.0 * PI));
    }

    #[test]
    fn test_square_prism_is_box() {
        let (s, h) = (2.0, 3.0);
        assert!((regular_prism_volume(s, 4.0, h) - box_volume(s, s, h)).abs() < 1e-9);
        assert!((regular_prism_surface_area(s, 4.0, h) - box_surface_area(s, s, h)).abs() < 1e-9);
    }

    #[test]
    fn test_pyramid_is_third_of_prism() {
        let (s, n, h) = (1.5, 5.0, 4.0);
        assert!(approx_eq(3.0 * regular_pyramid_volume(s, n, h), regular_prism_volume(s, n, h)));
    }
}
