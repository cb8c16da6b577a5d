use serde::{Deserialize, Serialize};
use tweenpath_core::{CurveError, Result};
use tweenpath_math::{dvec2, Point2};

/// A single evaluated point on a curve.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    /// Direction of travel in radians from the positive x-axis.
    pub tangent_angle: f64,
}

impl Sample {
    pub fn new(x: f64, y: f64, tangent_angle: f64) -> Self {
        Self {
            x,
            y,
            tangent_angle,
        }
    }

    pub fn at(position: Point2, tangent_angle: f64) -> Self {
        Self::new(position.x, position.y, tangent_angle)
    }

    pub fn position(&self) -> Point2 {
        dvec2(self.x, self.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.tangent_angle.is_finite()
    }

    /// Reject samples that overflowed during evaluation.
    pub(crate) fn checked(self, curve: &str) -> Result<Self> {
        if self.is_finite() {
            Ok(self)
        } else {
            Err(CurveError::Geometry(format!(
                "{curve} evaluated to a non-finite sample ({}, {}, {})",
                self.x, self.y, self.tangent_angle
            )))
        }
    }
}
