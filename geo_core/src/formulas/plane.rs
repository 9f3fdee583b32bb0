//! # Plane Figure Formulas
//!
//! Closed-form area, perimeter and length formulas for 2D shapes.
//!
//! ## Notation
//!
//! - `r` = Radius
//! - `s` = Side length
//! - `n` = Number of sides of a regular polygon
//! - `b`, `h` = Base and perpendicular height
//! - `d1`, `d2` = Diagonals
//!
//! Trigonometric primitives take radians; angles returned to callers are in
//! degrees.
//!
//! ## References
//!
//! - CRC Standard Mathematical Tables and Formulae, 33rd Edition, Section 4.5
//! - Heron of Alexandria, *Metrica* I.8 (triangle area from three sides)

use std::f64::consts::PI;

// =============================================================================
// CIRCLE AND ELLIPSE
// =============================================================================

/// Area of a circle
///
/// # Formula
/// A = πr²
///
/// # Example
/// ```rust
/// use geo_core::formulas::plane::circle_area;
///
/// let a = circle_area(2.0);
/// assert!((a - 12.566).abs() < 0.001);
/// ```
#[inline]
pub fn circle_area(r: f64) -> f64 {
    PI * r * r
}

/// Circumference of a circle
///
/// # Formula
/// C = 2πr
#[inline]
pub fn circle_circumference(r: f64) -> f64 {
    2.0 * PI * r
}

/// Area of an ellipse with semi-axes `a` and `b`
///
/// ```text
///        b
///    .---┼---.
///   /    │    \
///  (─────┼─────) a
///   \    │    /
///    '---┴---'
/// ```
///
/// # Formula
/// A = πab
#[inline]
pub fn ellipse_area(a: f64, b: f64) -> f64 {
    PI * a * b
}

// =============================================================================
// QUADRILATERALS
// =============================================================================

/// Area of a square
#[inline]
pub fn square_area(s: f64) -> f64 {
    s * s
}

/// Perimeter of a square
#[inline]
pub fn square_perimeter(s: f64) -> f64 {
    4.0 * s
}

/// Diagonal of a square
///
/// # Formula
/// d = s√2
#[inline]
pub fn square_diagonal(s: f64) -> f64 {
    s * 2.0_f64.sqrt()
}

/// Area of a rectangle
#[inline]
pub fn rectangle_area(length: f64, width: f64) -> f64 {
    length * width
}

/// Perimeter of a rectangle
///
/// # Formula
/// P = 2(l + w)
#[inline]
pub fn rectangle_perimeter(length: f64, width: f64) -> f64 {
    2.0 * (length + width)
}

/// Diagonal of a rectangle
///
/// # Formula
/// d = √(l² + w²)
///
/// # Example
/// ```rust
/// use geo_core::formulas::plane::rectangle_diagonal;
///
/// assert!((rectangle_diagonal(3.0, 4.0) - 5.0).abs() < 1e-12);
/// ```
#[inline]
pub fn rectangle_diagonal(length: f64, width: f64) -> f64 {
    length.hypot(width)
}

/// Area of a trapezium with parallel sides `b1`, `b2` and height `h`
///
/// ```text
///       b1
///    ┌──────┐
///   /   │h   \
///  └────┴─────┘
///       b2
/// ```
///
/// # Formula
/// A = ((b1 + b2) / 2) · h
#[inline]
pub fn trapezium_area(b1: f64, b2: f64, h: f64) -> f64 {
    ((b1 + b2) / 2.0) * h
}

/// Area of a parallelogram from base and perpendicular height
///
/// # Formula
/// A = b · h
#[inline]
pub fn parallelogram_area(base: f64, height: f64) -> f64 {
    base * height
}

/// Area of a parallelogram from two adjacent sides and the included angle
///
/// # Formula
/// A = s1 · s2 · sin(θ)
///
/// # Arguments
/// * `side1`, `side2` - Adjacent side lengths
/// * `angle_deg` - Included angle in degrees
///
/// # Example
/// ```rust
/// use geo_core::formulas::plane::{parallelogram_area, parallelogram_area_from_angle};
///
/// // A 90° parallelogram is a rectangle
/// let a = parallelogram_area_from_angle(3.0, 4.0, 90.0);
/// assert!((a - parallelogram_area(3.0, 4.0)).abs() < 1e-9);
/// ```
#[inline]
pub fn parallelogram_area_from_angle(side1: f64, side2: f64, angle_deg: f64) -> f64 {
    side1 * side2 * angle_deg.to_radians().sin()
}

/// Perimeter of a parallelogram
///
/// # Formula
/// P = 2(b + s)
#[inline]
pub fn parallelogram_perimeter(base: f64, side: f64) -> f64 {
    2.0 * (base + side)
}

/// Area of a rhombus from its diagonals
///
/// # Formula
/// A = d1 · d2 / 2
#[inline]
pub fn rhombus_area(d1: f64, d2: f64) -> f64 {
    d1 * d2 / 2.0
}

/// Side length of a rhombus from its diagonals
///
/// The diagonals bisect each other at right angles, so each side is the
/// hypotenuse of a right triangle with legs d1/2 and d2/2.
///
/// # Formula
/// s = √((d1² + d2²) / 4)
///
/// # Example
/// ```rust
/// use geo_core::formulas::plane::rhombus_side_length;
///
/// assert!((rhombus_side_length(6.0, 8.0) - 5.0).abs() < 1e-12);
/// ```
#[inline]
pub fn rhombus_side_length(d1: f64, d2: f64) -> f64 {
    ((d1 * d1 + d2 * d2) / 4.0).sqrt()
}

/// Perimeter of a rhombus from its diagonals
///
/// # Formula
/// P = 4s, s = √((d1² + d2²) / 4)
#[inline]
pub fn rhombus_perimeter(d1: f64, d2: f64) -> f64 {
    4.0 * rhombus_side_length(d1, d2)
}

// =============================================================================
// REGULAR POLYGON
// =============================================================================

/// Area of a regular polygon with `n` sides of length `s`
///
/// # Formula
/// A = n·s² / (4·tan(π/n))
///
/// # Example
/// ```rust
/// use geo_core::formulas::plane::{regular_polygon_area, square_area};
///
/// // A regular 4-gon is a square
/// assert!((regular_polygon_area(2.0, 4.0) - square_area(2.0)).abs() < 1e-9);
/// ```
#[inline]
pub fn regular_polygon_area(s: f64, n: f64) -> f64 {
    (n * s * s) / (4.0 * (PI / n).tan())
}

/// Perimeter of a regular polygon
#[inline]
pub fn regular_polygon_perimeter(s: f64, n: f64) -> f64 {
    n * s
}

/// Interior angle of a regular polygon, in degrees
///
/// # Formula
/// α = (n - 2) · 180 / n
#[inline]
pub fn regular_polygon_inner_angle(n: f64) -> f64 {
    ((n - 2.0) * 180.0) / n
}

/// Exterior angle of a regular polygon, in degrees
///
/// # Formula
/// β = 360 / n
#[inline]
pub fn regular_polygon_outer_angle(n: f64) -> f64 {
    360.0 / n
}

// =============================================================================
// TRIANGLES
// =============================================================================

/// Area of an equilateral triangle
///
/// # Formula
/// A = (√3 / 4) · s²
#[inline]
pub fn equilateral_triangle_area(s: f64) -> f64 {
    (3.0_f64.sqrt() / 4.0) * s * s
}

/// Perimeter of an equilateral triangle
#[inline]
pub fn equilateral_triangle_perimeter(s: f64) -> f64 {
    3.0 * s
}

/// Area of a triangle from base and perpendicular height
///
/// Used for both isosceles and right triangles.
///
/// # Formula
/// A = b · h / 2
#[inline]
pub fn base_height_triangle_area(base: f64, height: f64) -> f64 {
    base * height / 2.0
}

/// Perimeter of an isosceles triangle
///
/// # Formula
/// P = b + 2e
#[inline]
pub fn isosceles_triangle_perimeter(base: f64, equal_side: f64) -> f64 {
    base + 2.0 * equal_side
}

/// Height of an isosceles triangle from its equal side and base
///
/// Returns `NaN` when `equal_side <= base / 2` (the sides cannot close).
///
/// # Formula
/// h = √(e² − b²/4)
///
/// # Example
/// ```rust
/// use geo_core::formulas::plane::isosceles_height_from_sides;
///
/// assert!((isosceles_height_from_sides(5.0, 6.0) - 4.0).abs() < 1e-12);
/// assert!(isosceles_height_from_sides(1.0, 6.0).is_nan());
/// ```
#[inline]
pub fn isosceles_height_from_sides(equal_side: f64, base: f64) -> f64 {
    (equal_side * equal_side - base * base / 4.0).sqrt()
}

/// Equal side of an isosceles triangle from its height and base
///
/// # Formula
/// e = √(h² + b²/4)
#[inline]
pub fn isosceles_side_from_height(height: f64, base: f64) -> f64 {
    (height * height + base * base / 4.0).sqrt()
}

/// Area of a triangle from three sides (Heron's formula)
///
/// Symmetric in its arguments. Returns `NaN` when the sides violate the
/// triangle inequality.
///
/// # Formula
/// s = (a + b + c) / 2,
/// A = √(s(s − a)(s − b)(s − c))
///
/// # Example
/// ```rust
/// use geo_core::formulas::plane::heron_area;
///
/// assert!((heron_area(3.0, 4.0, 5.0) - 6.0).abs() < 1e-12);
/// assert!(heron_area(1.0, 1.0, 5.0).is_nan());
/// ```
#[inline]
pub fn heron_area(a: f64, b: f64, c: f64) -> f64 {
    let s = (a + b + c) / 2.0;
    (s * (s - a) * (s - b) * (s - c)).sqrt()
}

/// Perimeter of a triangle from three sides
#[inline]
pub fn triangle_perimeter(a: f64, b: f64, c: f64) -> f64 {
    a + b + c
}

/// Hypotenuse of a right triangle
///
/// # Formula
/// c = √(b² + h²)
#[inline]
pub fn right_triangle_hypotenuse(base: f64, height: f64) -> f64 {
    base.hypot(height)
}

/// Remaining leg of a right triangle from the hypotenuse and one leg
///
/// Returns `NaN` when `leg >= hypotenuse`.
///
/// # Formula
/// h = √(c² − b²)
#[inline]
pub fn right_triangle_leg(hypotenuse: f64, leg: f64) -> f64 {
    (hypotenuse * hypotenuse - leg * leg).sqrt()
}

/// Perimeter of a right triangle from both legs and the hypotenuse
#[inline]
pub fn right_triangle_perimeter(base: f64, height: f64, hypotenuse: f64) -> f64 {
    base + height + hypotenuse
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
    fn test_circle() {
        for r in [0.5, 1.0, 2.0, 7.25, 1000.0] {
            assert!(approx_eq(circle_area(r), PI * r * r), "area r = {}", r);
            assert!(approx_eq(circle_circumference(r), 2.0 * PI * r), "circ r = {}", r);
        }
    }

    #[test]
    fn test_ellipse_degenerates_to_circle() {
        assert!(approx_eq(ellipse_area(3.0, 3.0), circle_area(3.0)));
    }

    #[test]
    fn test_rectangle() {
        assert!(approx_eq(rectangle_area(3.0, 4.0), 12.0));
        assert!(approx_eq(rectangle_perimeter(3.0, 4.0), 14.0));
        assert!(approx_eq(rectangle_diagonal(3.0, 4.0), 5.0));
    }

    #[test]
    fn test_square_matches_rectangle() {
        let s = 2.5;
        assert!(approx_eq(square_area(s), rectangle_area(s, s)));
        assert!(approx_eq(square_perimeter(s), rectangle_perimeter(s, s)));
        assert!(approx_eq(square_diagonal(s), rectangle_diagonal(s, s)));
    }

    #[test]
    fn test_trapezium() {
        // ((3 + 5) / 2) * 4 = 16
        assert!(approx_eq(trapezium_area(3.0, 5.0, 4.0), 16.0));
    }

    #[test]
    fn test_parallelogram() {
        assert!(approx_eq(parallelogram_area(6.0, 2.0), 12.0));
        assert!(approx_eq(parallelogram_perimeter(6.0, 3.0), 18.0));
        // sin(30°) = 0.5
        assert!((parallelogram_area_from_angle(4.0, 5.0, 30.0) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_rhombus_perimeter_is_four_sides() {
        for (d1, d2) in [(1.0, 1.0), (6.0, 8.0), (0.3, 12.0), (100.0, 2.5)] {
            assert!(approx_eq(rhombus_perimeter(d1, d2), 4.0 * rhombus_side_length(d1, d2)));
        }
        assert!(approx_eq(rhombus_area(6.0, 8.0), 24.0));
    }

    #[test]
    fn test_regular_polygon_hexagon() {
        let area = regular_polygon_area(2.0, 6.0);
        // 3√3/2 · s² = 10.392
        assert!((area - 1.5 * 3.0_f64.sqrt() * 4.0).abs() < 1e-9, "A = {}", area);
        assert!(approx_eq(regular_polygon_perimeter(2.0, 6.0), 12.0));
        assert!(approx_eq(regular_polygon_inner_angle(6.0), 120.0));
        assert!(approx_eq(regular_polygon_outer_angle(6.0), 60.0));
    }

    #[test]
    fn test_polygon_angles_supplementary() {
        for n in 3..=64 {
            let n = f64::from(n);
            let sum = regular_polygon_inner_angle(n) + regular_polygon_outer_angle(n);
            assert!(approx_eq(sum, 180.0), "n = {}: sum = {}", n, sum);
        }
    }

    #[test]
    fn test_equilateral_matches_heron() {
        let s = 3.0;
        assert!(approx_eq(equilateral_triangle_area(s), heron_area(s, s, s)));
        assert!(approx_eq(equilateral_triangle_perimeter(s), 9.0));
    }

    #[test]
    fn test_heron_symmetric() {
        let (a, b, c) = (4.0, 7.0, 9.5);
        let reference = heron_area(a, b, c);
        for (x, y, z) in [(a, c, b), (b, a, c), (b, c, a), (c, a, b), (c, b, a)] {
            assert!(approx_eq(heron_area(x, y, z), reference));
        }
        assert!(approx_eq(triangle_perimeter(3.0, 4.0, 5.0), 12.0));
    }

    #[test]
    fn test_isosceles_derivations_agree() {
        let (base, equal_side) = (6.0, 5.0);
        let h = isosceles_height_from_sides(equal_side, base);
        assert!(approx_eq(h, 4.0));
        assert!(approx_eq(isosceles_side_from_height(h, base), equal_side));
        assert!(approx_eq(base_height_triangle_area(base, h), heron_area(base, equal_side, equal_side)));
        assert!(approx_eq(isosceles_triangle_perimeter(base, equal_side), 16.0));
    }

    #[test]
    fn test_right_triangle() {
        let hyp = right_triangle_hypotenuse(3.0, 4.0);
        assert!(approx_eq(hyp, 5.0));
        assert!(approx_eq(right_triangle_perimeter(3.0, 4.0, hyp), 12.0));
        assert!(approx_eq(right_triangle_leg(5.0, 3.0), 4.0));
        assert!(right_triangle_leg(3.0, 5.0).is_nan());
    }
}
