//! Family-tagged curve configuration.

use std::fmt;

use serde::{Deserialize, Serialize};
use tweenpath_core::{CurveError, Result, Validate};
use tweenpath_math::{Point2, TimeConfig, Transform2};

use crate::curve::{BezierConfig, CircleConfig, Curve, EllipseConfig, SineConfig};
use crate::sample::Sample;

/// Curve families, by their stable lowercase names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveKind {
    Bezier,
    Circle,
    Ellipse,
    Sine,
}

impl CurveKind {
    pub const ALL: [CurveKind; 4] = [Self::Bezier, Self::Circle, Self::Ellipse, Self::Sine];

    pub fn name(self) -> &'static str {
        match self {
            Self::Bezier => "bezier",
            Self::Circle => "circle",
            Self::Ellipse => "ellipse",
            Self::Sine => "sine",
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration of one animated curve.
///
/// Built once per animation and evaluated unchanged on every frame. The
/// JSON form is tagged by `"type"`:
///
/// ```
/// use tweenpath_geometry::{CurveConfig, CurveKind};
///
/// let cfg = CurveConfig::from_json(r#"{"type": "circle", "radius": 10}"#).unwrap();
/// assert_eq!(cfg.kind(), CurveKind::Circle);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CurveConfig {
    Bezier(BezierConfig),
    Circle(CircleConfig),
    Ellipse(EllipseConfig),
    Sine(SineConfig),
}

impl CurveConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| CurveError::Parse(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| CurveError::Parse(e.to_string()))
    }

    pub fn kind(&self) -> CurveKind {
        match self {
            Self::Bezier(_) => CurveKind::Bezier,
            Self::Circle(_) => CurveKind::Circle,
            Self::Ellipse(_) => CurveKind::Ellipse,
            Self::Sine(_) => CurveKind::Sine,
        }
    }

    pub fn placement(&self) -> &Transform2 {
        match self {
            Self::Bezier(c) => &c.placement,
            Self::Circle(c) => &c.placement,
            Self::Ellipse(c) => &c.placement,
            Self::Sine(c) => &c.placement,
        }
    }

    pub fn time(&self) -> &TimeConfig {
        match self {
            Self::Bezier(c) => &c.time,
            Self::Circle(c) => &c.time,
            Self::Ellipse(c) => &c.time,
            Self::Sine(c) => &c.time,
        }
    }

    /// Whether samples carry a computed tangent angle.
    pub fn tangent(&self) -> bool {
        match self {
            Self::Bezier(c) => c.tangent,
            Self::Circle(c) => c.tangent,
            Self::Ellipse(c) => c.tangent,
            Self::Sine(c) => c.tangent,
        }
    }

    fn as_curve(&self) -> &dyn Curve {
        match self {
            Self::Bezier(c) => c,
            Self::Circle(c) => c,
            Self::Ellipse(c) => c,
            Self::Sine(c) => c,
        }
    }
}

impl Curve for CurveConfig {
    fn sample(&self, t: f64) -> Result<Sample> {
        self.as_curve().sample(t)
    }

    fn position_at(&self, t: f64) -> Result<Point2> {
        self.as_curve().position_at(t)
    }
}

impl Validate for CurveConfig {
    fn validate(&self) -> Result<()> {
        match self {
            Self::Bezier(c) => c.validate(),
            Self::Circle(c) => c.validate(),
            Self::Ellipse(c) => c.validate(),
            Self::Sine(c) => c.validate(),
        }
    }
}

impl From<BezierConfig> for CurveConfig {
    fn from(c: BezierConfig) -> Self {
        Self::Bezier(c)
    }
}

impl From<CircleConfig> for CurveConfig {
    fn from(c: CircleConfig) -> Self {
        Self::Circle(c)
    }
}

impl From<EllipseConfig> for CurveConfig {
    fn from(c: EllipseConfig) -> Self {
        Self::Ellipse(c)
    }
}

impl From<SineConfig> for CurveConfig {
    fn from(c: SineConfig) -> Self {
        Self::Sine(c)
    }
}

/// Evaluate `config` at `progress`.
pub fn evaluate(progress: f64, config: &CurveConfig) -> Result<Sample> {
    config.sample(progress)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tweenpath_math::dvec2;

    #[test]
    fn test_kind_names() {
        let names: Vec<_> = CurveKind::ALL.iter().map(|k| k.to_string()).collect();
        assert_eq!(names, ["bezier", "circle", "ellipse", "sine"]);
    }

    #[test]
    fn test_from_json_variants() {
        let cfg = CurveConfig::from_json(
            r#"{"type": "bezier", "points": [[0, 0], [10, 10]], "angle": 45, "reverse": true}"#,
        )
        .unwrap();
        match &cfg {
            CurveConfig::Bezier(b) => {
                assert_eq!(b.points.len(), 2);
                assert_eq!(b.placement.angle, 45.0);
                assert!(b.time.reverse);
            }
            other => panic!("expected bezier, got {:?}", other.kind()),
        }

        let cfg =
            CurveConfig::from_json(r#"{"type": "ellipse", "major": 4, "minor": 2, "arc": 180}"#)
                .unwrap();
        assert_eq!(
            cfg,
            CurveConfig::from(EllipseConfig::new(4.0, 2.0).with_arc(180.0))
        );

        let cfg =
            CurveConfig::from_json(r#"{"type": "sine", "amp": 3, "wavelength": 50, "tangent": false}"#)
                .unwrap();
        assert_eq!(
            cfg,
            CurveConfig::from(
                SineConfig::new(3.0)
                    .with_wavelength(50.0)
                    .with_tangent(false)
            )
        );
        assert!(!cfg.tangent());
    }

    #[test]
    fn test_missing_required_field_is_parse_error() {
        let err = CurveConfig::from_json(r#"{"type": "circle", "x": 5}"#).unwrap_err();
        assert!(matches!(err, CurveError::Parse(_)));
        assert!(err.to_string().contains("radius"));

        let err = CurveConfig::from_json(r#"{"type": "spiral"}"#).unwrap_err();
        assert!(matches!(err, CurveError::Parse(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let cfg: CurveConfig = CircleConfig::new(12.5)
            .with_offset(3.0, 4.0)
            .with_phase(30.0)
            .with_invert(false)
            .into();
        let json = cfg.to_json().unwrap();
        assert!(json.contains(r#""type":"circle""#));
        assert_eq!(CurveConfig::from_json(&json).unwrap(), cfg);
    }

    #[test]
    fn test_evaluate_dispatches() {
        let cfg: CurveConfig = BezierConfig::new(vec![dvec2(0.0, 0.0), dvec2(4.0, 0.0)])
            .with_offset(1.0, 1.0)
            .into();
        let s = evaluate(0.5, &cfg).unwrap();
        assert_eq!(s.position(), dvec2(3.0, 1.0));
        assert_eq!(cfg.placement().x, 1.0);
        assert!(cfg.time().is_identity());
    }

    #[test]
    fn test_validate_reports_empty_bezier() {
        let cfg: CurveConfig = BezierConfig::new(Vec::<Point2>::new()).into();
        assert!(matches!(
            cfg.validate(),
            Err(CurveError::InvalidConfiguration(_))
        ));
    }
}
