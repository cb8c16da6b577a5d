//! Numerical tangent estimation by the secant method.
//!
//! Works against any position function, so it doubles as a fallback for
//! curves without a closed-form tangent and as a baseline for checking the
//! analytic ones.

use std::f64::consts::PI;

use tweenpath_core::{CurveError, Result};
use tweenpath_math::Point2;

use crate::curve::Curve;
use crate::sample::Sample;

/// Default half-width of the secant, in progress units.
pub const DEFAULT_STEP: f64 = 1.0 / 1000.0;

/// Angle of the secant through `f(t - h, cfg)` and `f(t + h, cfg)`.
///
/// The slope angle is turned by π when the secant runs towards `-x`, so the
/// result is the direction of travel rather than the undirected line.
/// Coincident samples yield `0`.
pub fn secant_angle<C, F>(f: F, t: f64, cfg: &C, h: f64) -> Result<f64>
where
    C: ?Sized,
    F: Fn(f64, &C) -> Result<Point2>,
{
    if !(h.is_finite() && h > 0.0) {
        return Err(CurveError::invalid(format!(
            "secant step must be a positive finite number, got {h}"
        )));
    }
    let p1 = f(t - h, cfg)?;
    let p2 = f(t + h, cfg)?;
    let m = (p2.y - p1.y) / (p2.x - p1.x);
    let angle = m.atan();
    if angle.is_nan() {
        return Ok(0.0);
    }
    Ok(if p1.x > p2.x { angle + PI } else { angle })
}

/// Secant angle of `curve` at `t` using its position function.
pub fn curve_secant_angle<C: Curve + ?Sized>(curve: &C, t: f64, h: f64) -> Result<f64> {
    secant_angle(|t, c: &C| c.position_at(t), t, curve, h)
}

/// Wraps a curve and replaces its tangent angle with a secant estimate.
#[derive(Debug, Clone)]
pub struct Secant<C> {
    pub curve: C,
    pub step: f64,
}

impl<C: Curve> Secant<C> {
    pub fn new(curve: C) -> Self {
        Self {
            curve,
            step: DEFAULT_STEP,
        }
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }
}

impl<C: Curve> Curve for Secant<C> {
    fn sample(&self, t: f64) -> Result<Sample> {
        let position = self.curve.position_at(t)?;
        let angle = curve_secant_angle(&self.curve, t, self.step)?;
        Ok(Sample::at(position, angle))
    }

    fn position_at(&self, t: f64) -> Result<Point2> {
        self.curve.position_at(t)
    }
}
