//! Circle curve.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tweenpath_core::traits::ensure_finite;
use tweenpath_core::{Result, Validate};
use tweenpath_math::{dvec2, LocalAxis, Point2, TimeConfig, Transform2, DEG_TO_RAD};

use super::{default_arc, default_true, in_lower_half, placed_heading, Curve};
use crate::sample::Sample;

/// A circular arc swept from `phase` through `arc` degrees.
///
/// The local angle `α` is measured from the local y-axis, so `α = 0` sits at
/// `(0, radius)` and increasing `α` moves towards `+x`. Local coordinates
/// are screen space (y down): by default the circle starts straight below
/// its centre, at `(x, y + radius)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleConfig {
    #[serde(flatten)]
    pub placement: Transform2,
    pub radius: f64,
    #[serde(default)]
    pub phase: f64,
    #[serde(default = "default_arc")]
    pub arc: f64,
    #[serde(default = "default_true")]
    pub tangent: bool,
    #[serde(flatten)]
    pub time: TimeConfig,
}

impl CircleConfig {
    pub fn new(radius: f64) -> Self {
        Self {
            placement: Transform2::default(),
            radius,
            phase: 0.0,
            arc: default_arc(),
            tangent: true,
            time: TimeConfig::default(),
        }
    }

    pub fn with_offset(mut self, x: f64, y: f64) -> Self {
        self.placement.x = x;
        self.placement.y = y;
        self
    }

    pub fn with_angle(mut self, degrees: f64) -> Self {
        self.placement.angle = degrees;
        self
    }

    pub fn with_invert(mut self, invert: bool) -> Self {
        self.placement.invert = invert;
        self
    }

    pub fn with_phase(mut self, degrees: f64) -> Self {
        self.phase = degrees;
        self
    }

    pub fn with_arc(mut self, degrees: f64) -> Self {
        self.arc = degrees;
        self
    }

    pub fn with_tangent(mut self, tangent: bool) -> Self {
        self.tangent = tangent;
        self
    }

    pub fn with_time(mut self, time: TimeConfig) -> Self {
        self.time = time;
        self
    }

    fn evaluate(&self, t: f64, with_tangent: bool) -> Result<Sample> {
        self.validate()?;
        let t = self.time.map(t);
        let alpha = t * self.arc * DEG_TO_RAD + self.phase * DEG_TO_RAD;
        let local = dvec2(alpha.sin() * self.radius, alpha.cos() * self.radius);

        let local_heading = if with_tangent {
            heading_at(alpha, local)
        } else {
            None
        };
        let rate = self.arc * self.time.rate() * self.radius;
        let tangent_angle = placed_heading(local_heading, rate, |h| {
            self.placement.transform_heading(h, LocalAxis::Down)
        });

        Sample::at(self.placement.transform_point(local, LocalAxis::Down), tangent_angle)
            .checked("circle")
    }
}

/// Local heading for increasing `alpha` at `local = r (sin α, cos α)`.
///
/// `atan(x / y)`, shifted by π across the second and third quadrants,
/// recovers `α`; the point `(sin α, cos α)` travels along `(cos α, -sin α)`,
/// whose heading is `-α`. A zero radius has no direction.
fn heading_at(alpha: f64, local: Point2) -> Option<f64> {
    let slope = local.x / local.y;
    if slope.is_nan() {
        return None;
    }
    let clockwise = slope.atan() + if in_lower_half(alpha) { PI } else { 0.0 };
    Some(-clockwise)
}

impl Curve for CircleConfig {
    fn sample(&self, t: f64) -> Result<Sample> {
        self.evaluate(t, self.tangent)
    }

    fn position_at(&self, t: f64) -> Result<Point2> {
        self.evaluate(t, false).map(|s| s.position())
    }
}

impl Validate for CircleConfig {
    fn validate(&self) -> Result<()> {
        ensure_finite("radius", self.radius)?;
        ensure_finite("phase", self.phase)?;
        ensure_finite("arc", self.arc)?;
        self.placement.validate()?;
        self.time.validate()
    }
}
