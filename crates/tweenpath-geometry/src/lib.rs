//! Tweenpath geometry: parametric 2D curves sampled by animation progress.
//!
//! Every evaluator is a pure function of `(progress, configuration)`; the
//! configurations are plain data and may be shared across threads freely.

pub mod bernstein;
pub mod config;
pub mod curve;
pub mod polyline;
pub mod sample;
pub mod tangent;

pub use config::{evaluate, CurveConfig, CurveKind};
pub use curve::{
    bezier_tangent, BezierConfig, BezierSegment, CircleConfig, Curve, EllipseConfig, SineConfig,
};
pub use polyline::sample_polyline;
pub use sample::Sample;
pub use tangent::{curve_secant_angle, secant_angle, Secant, DEFAULT_STEP};
