//! Curve trait and per-family evaluators.

mod bezier;
mod circle;
mod ellipse;
mod sine;

use std::f64::consts::PI;

use tweenpath_core::Result;
use tweenpath_math::Point2;

use crate::sample::Sample;

pub use bezier::{bezier_tangent, BezierConfig, BezierSegment};
pub use circle::CircleConfig;
pub use ellipse::EllipseConfig;
pub use sine::SineConfig;

/// A parametric 2D curve evaluated at animation progress `t`.
///
/// Progress is nominally in `[0, 1]` but is never clamped.
pub trait Curve: Send + Sync {
    /// Evaluate position and tangent angle at `t`.
    fn sample(&self, t: f64) -> Result<Sample>;

    /// Evaluate the position only, skipping tangent work where possible.
    fn position_at(&self, t: f64) -> Result<Point2> {
        self.sample(t).map(|s| s.position())
    }
}

impl<C: Curve + ?Sized> Curve for &C {
    fn sample(&self, t: f64) -> Result<Sample> {
        (**self).sample(t)
    }

    fn position_at(&self, t: f64) -> Result<Point2> {
        (**self).position_at(t)
    }
}

/// Whether `alpha` lies strictly inside the second or third quadrant.
///
/// Decided by the sign of `cos α` so that it agrees with the sign of the
/// evaluated `cos α` term at the quadrant boundaries.
pub(crate) fn in_lower_half(alpha: f64) -> bool {
    alpha.cos() < 0.0
}

/// Turn a heading around when the curve is traversed backwards.
pub(crate) fn oriented(heading: f64, rate: f64) -> f64 {
    if rate < 0.0 {
        heading + PI
    } else {
        heading
    }
}

/// Place an optional local heading; degenerate geometry (`None`) reads as `0`.
pub(crate) fn placed_heading(
    local: Option<f64>,
    rate: f64,
    place: impl FnOnce(f64) -> f64,
) -> f64 {
    local.map_or(0.0, |h| place(oriented(h, rate)))
}

pub(crate) fn default_arc() -> f64 {
    360.0
}

pub(crate) fn default_one() -> f64 {
    1.0
}

pub(crate) fn default_true() -> bool {
    true
}
