use crate::{angle::rotate, dvec2, Point2, DEG_TO_RAD};
use serde::{Deserialize, Serialize};
use tweenpath_core::traits::ensure_finite;
use tweenpath_core::{Result, Validate};

/// Vertical sense of a curve family's local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalAxis {
    /// y grows downwards, as in screen space (Bézier points, circles, ellipses).
    Down,
    /// y grows upwards, as in a plotted function (sine waves).
    Up,
}

/// Placement of a curve's local frame in output space.
///
/// Local points are rotated about the curve origin, mirrored in y when the
/// local axis disagrees with `invert`, then translated by `(x, y)`.
/// `invert = true` asks for y-down output, so y-down families pass through
/// unmirrored and y-up families are flipped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transform2 {
    pub x: f64,
    pub y: f64,
    /// Rotation in degrees, counterclockwise in the local frame.
    pub angle: f64,
    pub invert: bool,
}

impl Transform2 {
    pub fn offset(&self) -> Point2 {
        dvec2(self.x, self.y)
    }

    pub fn angle_radians(&self) -> f64 {
        self.angle * DEG_TO_RAD
    }

    /// Whether points in `axis` coordinates get their y negated.
    pub fn mirrors(&self, axis: LocalAxis) -> bool {
        match axis {
            LocalAxis::Down => !self.invert,
            LocalAxis::Up => self.invert,
        }
    }

    pub fn transform_point(&self, local: Point2, axis: LocalAxis) -> Point2 {
        let p = rotate(local, self.angle);
        let y = if self.mirrors(axis) { -p.y } else { p.y };
        dvec2(self.x + p.x, self.y + y)
    }

    /// Carry a local heading into output space: rotate, then mirror.
    ///
    /// The result is the direction of travel of the transformed points.
    pub fn transform_heading(&self, heading: f64, axis: LocalAxis) -> f64 {
        let turned = heading + self.angle_radians();
        if self.mirrors(axis) {
            -turned
        } else {
            turned
        }
    }

    /// Mirror a local heading, then subtract the rotation.
    ///
    /// Ellipses have always been placed this way. It agrees with
    /// [`transform_heading`](Self::transform_heading) only when the frame is
    /// mirrored or unrotated.
    pub fn transform_heading_counter(&self, heading: f64, axis: LocalAxis) -> f64 {
        let mirrored = if self.mirrors(axis) { -heading } else { heading };
        mirrored - self.angle_radians()
    }
}

impl Default for Transform2 {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            angle: 0.0,
            invert: true,
        }
    }
}

impl Validate for Transform2 {
    fn validate(&self) -> Result<()> {
        ensure_finite("x", self.x)?;
        ensure_finite("y", self.y)?;
        ensure_finite("angle", self.angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    fn placed(x: f64, y: f64, angle: f64, invert: bool) -> Transform2 {
        Transform2 {
            x,
            y,
            angle,
            invert,
        }
    }

    #[test]
    fn test_default_keeps_screen_coordinates() {
        let t = Transform2 {
            x: 10.0,
            y: 20.0,
            ..Transform2::default()
        };
        assert_eq!(t.transform_point(dvec2(1.0, 2.0), LocalAxis::Down), dvec2(11.0, 22.0));
        assert_eq!(t.transform_heading(0.5, LocalAxis::Down), 0.5);
    }

    #[test]
    fn test_default_flips_plotted_coordinates() {
        let t = Transform2 {
            x: 10.0,
            y: 20.0,
            ..Transform2::default()
        };
        assert_eq!(t.transform_point(dvec2(1.0, 2.0), LocalAxis::Up), dvec2(11.0, 18.0));
        assert_eq!(t.transform_heading(0.5, LocalAxis::Up), -0.5);
    }

    #[test]
    fn test_invert_false_swaps_the_roles() {
        let t = placed(0.0, 0.0, 0.0, false);
        assert!(t.mirrors(LocalAxis::Down));
        assert!(!t.mirrors(LocalAxis::Up));
        assert_eq!(t.transform_point(dvec2(1.0, 2.0), LocalAxis::Down), dvec2(1.0, -2.0));
        assert_eq!(t.transform_point(dvec2(1.0, 2.0), LocalAxis::Up), dvec2(1.0, 2.0));
    }

    #[test]
    fn test_rotation_before_mirror() {
        // (1, 0) turns to (0, 1), then y flips.
        let t = placed(0.0, 0.0, 90.0, true);
        let result = t.transform_point(dvec2(1.0, 0.0), LocalAxis::Up);
        assert_abs_diff_eq!(result.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.y, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_heading_follows_points() {
        let local_dir = dvec2(3.0, 1.0);
        let heading = local_dir.y.atan2(local_dir.x);
        for &invert in &[true, false] {
            for &axis in &[LocalAxis::Down, LocalAxis::Up] {
                let t = placed(5.0, -2.0, 35.0, invert);
                let d = t.transform_point(local_dir, axis) - t.offset();
                assert_abs_diff_eq!(
                    t.transform_heading(heading, axis),
                    d.y.atan2(d.x),
                    epsilon = 1e-12
                );
            }
        }
    }

    #[test]
    fn test_counter_heading_subtracts_rotation() {
        let t = placed(0.0, 0.0, 90.0, true);
        assert_abs_diff_eq!(
            t.transform_heading_counter(0.25, LocalAxis::Down),
            0.25 - FRAC_PI_2,
            epsilon = 1e-12
        );
        let mirrored = placed(0.0, 0.0, 90.0, false);
        assert_abs_diff_eq!(
            mirrored.transform_heading_counter(0.25, LocalAxis::Down),
            mirrored.transform_heading(0.25, LocalAxis::Down),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_validate() {
        assert!(Transform2::default().validate().is_ok());
        let bad = Transform2 {
            angle: f64::INFINITY,
            ..Transform2::default()
        };
        assert!(bad.validate().is_err());
    }
}
