//! Angle conversion, rotation about the origin, and rounding helpers.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::{DVec2, Point2, Vector2};

pub const DEG_TO_RAD: f64 = PI / 180.0;
pub const RAD_TO_DEG: f64 = 180.0 / PI;

/// Rotate `p` about the origin by `degrees`, counterclockwise for positive angles.
///
/// Exactly `0` and `360` return `p` untouched, so callers can rely on the
/// result being bit-identical to the input.
pub fn rotate(p: Point2, degrees: f64) -> Point2 {
    if degrees == 0.0 || degrees == 360.0 {
        return p;
    }
    DVec2::from_angle(degrees * DEG_TO_RAD).rotate(p)
}

/// Round `value` to `places` decimal places, halves away from zero.
///
/// Values too large to scale are already coarser than the requested
/// precision and come back unchanged.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Direction of `v` in radians from the positive x-axis.
///
/// Computed as `atan(dy/dx)` and turned by π when `v` points left, so the
/// result lies in `(-π/2, 3π/2)`. The zero vector yields `0`.
pub fn heading(v: Vector2) -> f64 {
    if v.x == 0.0 {
        return if v.y == 0.0 { 0.0 } else { FRAC_PI_2.copysign(v.y) };
    }
    let angle = (v.y / v.x).atan();
    if v.x < 0.0 {
        angle + PI
    } else {
        angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use glam::dvec2;

    #[test]
    fn test_rotate_quarter_turn() {
        let p = rotate(dvec2(1.0, 0.0), 90.0);
        assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotate_exact_short_circuit() {
        let p = dvec2(0.1 + 0.2, -7.3);
        assert_eq!(rotate(p, 0.0), p);
        assert_eq!(rotate(p, 360.0), p);
    }

    #[test]
    fn test_rotate_round_trip() {
        let p = dvec2(3.5, -2.25);
        for i in -12..=12 {
            let theta = i as f64 * 37.5;
            let back = rotate(rotate(p, theta), -theta);
            assert_abs_diff_eq!(back.x, p.x, epsilon = 1e-9);
            assert_abs_diff_eq!(back.y, p.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.234_567_891_2, 8), 1.234_567_89);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_eq!(round_to(1e-12, 8), 0.0);
    }

    #[test]
    fn test_round_to_huge_values_pass_through() {
        assert_eq!(round_to(1e305, 8), 1e305);
        assert_eq!(round_to(-f64::MAX, 8), -f64::MAX);
        assert!(round_to(f64::NAN, 8).is_nan());
    }

    #[test]
    fn test_heading_quadrants() {
        assert_abs_diff_eq!(heading(dvec2(1.0, 1.0)), PI / 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(heading(dvec2(-1.0, 1.0)), 3.0 * PI / 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(heading(dvec2(-1.0, -1.0)), 5.0 * PI / 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(heading(dvec2(0.0, -2.0)), -FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(heading(dvec2(-0.0, 2.0)), FRAC_PI_2, epsilon = 1e-12);
        assert_eq!(heading(DVec2::ZERO), 0.0);
    }

    #[test]
    fn test_degree_constants() {
        assert_abs_diff_eq!(180.0 * DEG_TO_RAD, PI, epsilon = 1e-15);
        assert_abs_diff_eq!(PI * RAD_TO_DEG, 180.0, epsilon = 1e-12);
    }
}
