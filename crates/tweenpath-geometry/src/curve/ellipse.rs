//! Ellipse curve.

use std::f64::consts::{FRAC_PI_2, PI};

use serde::{Deserialize, Serialize};
use tweenpath_core::traits::ensure_finite;
use tweenpath_core::{CurveError, Result, Validate};
use tweenpath_math::{dvec2, LocalAxis, Point2, TimeConfig, Transform2, DEG_TO_RAD};

use super::{default_arc, default_true, in_lower_half, placed_heading, Curve};
use crate::sample::Sample;

/// An elliptical arc with semi-axes `major` (local x) and `minor` (local y).
///
/// Parameterised like [`CircleConfig`](super::CircleConfig):
/// `(major sin α, minor cos α)`. When `minor > major` the axes are swapped,
/// `phase` is advanced by 90° and the result is turned a quarter turn back
/// into place, so the evaluated shape is unchanged. Local coordinates are
/// screen space (y down), as for circles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EllipseConfig {
    #[serde(flatten)]
    pub placement: Transform2,
    pub major: f64,
    pub minor: f64,
    #[serde(default)]
    pub phase: f64,
    #[serde(default = "default_arc")]
    pub arc: f64,
    #[serde(default = "default_true")]
    pub tangent: bool,
    #[serde(flatten)]
    pub time: TimeConfig,
}

impl EllipseConfig {
    pub fn new(major: f64, minor: f64) -> Self {
        Self {
            placement: Transform2::default(),
            major,
            minor,
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
        let (mut major, mut minor, mut phase) = (self.major, self.minor, self.phase);
        let upright = major < minor;
        if upright {
            std::mem::swap(&mut major, &mut minor);
            phase += 90.0;
        }

        let t = self.time.map(t);
        let alpha = t * self.arc * DEG_TO_RAD + phase * DEG_TO_RAD;
        let mut local = dvec2(alpha.sin() * major, alpha.cos() * minor);

        // Equal axes have no distinct foci.
        let mut local_heading = if with_tangent && major > minor {
            Some(focal_heading(alpha, local, major, minor))
        } else {
            None
        };
        if upright {
            local = local.perp();
            local_heading = local_heading.map(|h| h + FRAC_PI_2);
        }

        let tangent_angle = placed_heading(local_heading, self.arc * self.time.rate(), |h| {
            self.placement.transform_heading_counter(h, LocalAxis::Down)
        });

        Sample::at(self.placement.transform_point(local, LocalAxis::Down), tangent_angle)
            .checked("ellipse")
    }
}

/// Local heading at `p` for increasing `alpha`, from the reflection property.
///
/// With `θ1` the angle at `p` between the rays to both foci and `θ2` the angle
/// at the nearer-side focus between the other focus and `p`, the tangent
/// line lies at `(π - θ1) / 2 - θ2`. The focus is taken on the right for
/// the upper half of the ellipse and on the left for the lower half.
fn focal_heading(alpha: f64, p: Point2, major: f64, minor: f64) -> f64 {
    let f = (major * major - minor * minor).sqrt();
    let lower = in_lower_half(alpha);
    let (near, far) = if lower {
        (dvec2(-f, 0.0), dvec2(f, 0.0))
    } else {
        (dvec2(f, 0.0), dvec2(-f, 0.0))
    };

    let theta1 = inner_angle(p, near, far);
    let theta2 = inner_angle(near, far, p);
    let heading = (PI - theta1) / 2.0 - theta2;
    if lower {
        heading + PI
    } else {
        heading
    }
}

/// Angle at `vertex` between the rays towards `a` and `b`.
fn inner_angle(vertex: Point2, a: Point2, b: Point2) -> f64 {
    let u = (a - vertex).normalize_or_zero();
    let v = (b - vertex).normalize_or_zero();
    u.dot(v).clamp(-1.0, 1.0).acos()
}

impl Curve for EllipseConfig {
    fn sample(&self, t: f64) -> Result<Sample> {
        self.evaluate(t, self.tangent)
    }

    fn position_at(&self, t: f64) -> Result<Point2> {
        self.evaluate(t, false).map(|s| s.position())
    }
}

impl Validate for EllipseConfig {
    fn validate(&self) -> Result<()> {
        ensure_finite("major", self.major)?;
        ensure_finite("minor", self.minor)?;
        if self.major < 0.0 || self.minor < 0.0 {
            return Err(CurveError::invalid(format!(
                "ellipse radii must be non-negative, got major={} minor={}",
                self.major, self.minor
            )));
        }
        ensure_finite("phase", self.phase)?;
        ensure_finite("arc", self.arc)?;
        self.placement.validate()?;
        self.time.validate()
    }
}
