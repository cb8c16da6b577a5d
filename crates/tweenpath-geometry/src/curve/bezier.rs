//! Bézier curves of any degree.

use serde::{Deserialize, Serialize};
use tweenpath_core::traits::ensure_finite;
use tweenpath_core::{CurveError, Result, Tolerance, Validate};
use tweenpath_math::{heading, LocalAxis, Point2, TimeConfig, Transform2};

use super::{default_true, placed_heading, Curve};
use crate::bernstein;
use crate::sample::Sample;

/// Which evaluator handles a control polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BezierSegment {
    /// A single control point; evaluates to the placement offset.
    Point,
    Linear,
    Quadratic,
    Cubic,
    /// Bernstein sum for the given degree.
    General(usize),
}

impl BezierSegment {
    pub fn for_degree(degree: usize) -> Self {
        match degree {
            0 => Self::Point,
            1 => Self::Linear,
            2 => Self::Quadratic,
            3 => Self::Cubic,
            n => Self::General(n),
        }
    }
}

/// A Bézier curve over `points`, placed by `placement`.
///
/// Control points are in screen space (y down), so with the default
/// `invert = true` the curve passes through `points` shifted by `(x, y)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BezierConfig {
    #[serde(flatten)]
    pub placement: Transform2,
    pub points: Vec<Point2>,
    #[serde(default = "default_true")]
    pub tangent: bool,
    #[serde(flatten)]
    pub time: TimeConfig,
}

impl BezierConfig {
    pub fn new(points: impl Into<Vec<Point2>>) -> Self {
        Self {
            placement: Transform2::default(),
            points: points.into(),
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

    pub fn with_tangent(mut self, tangent: bool) -> Self {
        self.tangent = tangent;
        self
    }

    pub fn with_time(mut self, time: TimeConfig) -> Self {
        self.time = time;
        self
    }

    pub fn degree(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// The evaluator selected by the current point count.
    pub fn segment(&self) -> BezierSegment {
        BezierSegment::for_degree(self.degree())
    }

    /// Evaluate with an explicitly chosen evaluator.
    ///
    /// The specialised forms require exactly their number of points;
    /// [`BezierSegment::General`] accepts any degree and ignores its payload.
    pub fn evaluate_with(&self, segment: BezierSegment, t: f64) -> Result<Sample> {
        self.evaluate(segment, t, self.tangent)
    }

    fn evaluate(&self, segment: BezierSegment, t: f64, with_tangent: bool) -> Result<Sample> {
        self.validate()?;
        let p = &self.points;
        let expected = match segment {
            BezierSegment::Point => Some(1),
            BezierSegment::Linear => Some(2),
            BezierSegment::Quadratic => Some(3),
            BezierSegment::Cubic => Some(4),
            BezierSegment::General(_) => None,
        };
        if let Some(n) = expected.filter(|&n| n != p.len()) {
            return Err(CurveError::invalid(format!(
                "{segment:?} evaluator needs {n} control points, got {}",
                p.len()
            )));
        }
        if segment == BezierSegment::Point {
            return Sample::at(self.placement.offset(), 0.0).checked("bezier");
        }

        let t = self.time.map(t);
        let local = match segment {
            BezierSegment::Linear => bernstein::linear(p[0], p[1], t),
            BezierSegment::Quadratic => bernstein::quadratic(&[p[0], p[1], p[2]], t),
            BezierSegment::Cubic => bernstein::cubic(&[p[0], p[1], p[2], p[3]], t),
            _ => bernstein::general(p, t),
        };

        let local_heading = if with_tangent {
            bezier_tangent(t, p)
        } else {
            None
        };
        let tangent_angle = placed_heading(local_heading, self.time.rate(), |h| {
            self.placement.transform_heading(h, LocalAxis::Down)
        });

        Sample::at(self.placement.transform_point(local, LocalAxis::Down), tangent_angle)
            .checked("bezier")
    }
}

impl Curve for BezierConfig {
    fn sample(&self, t: f64) -> Result<Sample> {
        self.evaluate(self.segment(), t, self.tangent)
    }

    fn position_at(&self, t: f64) -> Result<Point2> {
        self.evaluate(self.segment(), t, false).map(|s| s.position())
    }
}

impl Validate for BezierConfig {
    fn validate(&self) -> Result<()> {
        if self.points.is_empty() {
            return Err(CurveError::invalid(
                "bezier curve needs at least one control point",
            ));
        }
        for (i, p) in self.points.iter().enumerate() {
            ensure_finite(&format!("points[{i}].x"), p.x)?;
            ensure_finite(&format!("points[{i}].y"), p.y)?;
        }
        self.placement.validate()?;
        self.time.validate()
    }
}

/// Local heading of the Bézier curve over `points` at local time `t`.
///
/// Evaluates the curve formed by successive control-point differences (the
/// hodograph) and reverses it; for a segment that is the constant direction
/// `p1 - p0`. Returns `None` where the derivative vanishes next to the
/// spread of the control polygon, e.g. at an end with coincident points.
pub fn bezier_tangent(t: f64, points: &[Point2]) -> Option<f64> {
    let &origin = points.first()?;
    let extent = points
        .iter()
        .map(|p| p.distance(origin))
        .fold(0.0, f64::max);
    let derivative = -bernstein::point(&bernstein::hodograph(points), t);
    if Tolerance::default().negligible(derivative.length(), extent) {
        return None;
    }
    Some(heading(derivative))
}
