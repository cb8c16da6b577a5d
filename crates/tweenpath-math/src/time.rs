//! Mapping of animation progress onto a curve-local parameter.

use serde::{Deserialize, Serialize};
use tweenpath_core::traits::ensure_finite;
use tweenpath_core::{Result, Validate};

/// Time window and direction applied to progress before a curve is evaluated.
///
/// `start` and `end` are unrestricted; `start > end` runs the curve backwards
/// independently of `reverse`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeConfig {
    pub start: f64,
    pub end: f64,
    pub reverse: bool,
}

impl TimeConfig {
    pub fn new(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            reverse: false,
        }
    }

    pub fn reversed(mut self) -> Self {
        self.reverse = !self.reverse;
        self
    }

    pub fn is_identity(&self) -> bool {
        !self.reverse && self.start == 0.0 && self.end == 1.0
    }

    /// Map `t` into curve-local time. The result is not clamped.
    pub fn map(&self, t: f64) -> f64 {
        if self.is_identity() {
            return t;
        }
        let t = t * (self.end - self.start) + self.start;
        if self.reverse {
            1.0 - t
        } else {
            t
        }
    }

    /// Derivative of the mapped time with respect to progress.
    pub fn rate(&self) -> f64 {
        let span = self.end - self.start;
        if self.reverse {
            -span
        } else {
            span
        }
    }
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

impl Validate for TimeConfig {
    fn validate(&self) -> Result<()> {
        ensure_finite("start", self.start)?;
        ensure_finite("end", self.end)
    }
}

/// Free-function form of [`TimeConfig::map`].
pub fn map_time(t: f64, cfg: &TimeConfig) -> f64 {
    cfg.map(t)
}
