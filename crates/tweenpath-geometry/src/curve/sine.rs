//! Sine wave curve.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};
use tweenpath_core::traits::ensure_finite;
use tweenpath_core::{CurveError, Result, Validate};
use tweenpath_math::{dvec2, round_to, LocalAxis, Point2, TimeConfig, Transform2, DEG_TO_RAD};

use super::{default_arc, default_one, default_true, placed_heading, Curve};
use crate::sample::Sample;

/// Decimal places kept in the wave's vertical displacement.
const DISPLACEMENT_PLACES: u32 = 8;

/// A sine wave advancing along local `+x`.
///
/// The wave is plotted y up, so the default `invert = true` flips it into
/// screen space: displacement and tangent both change sign.
///
/// Over `t ∈ [0, 1]` the wave sweeps `arc` degrees of phase `period` times,
/// `frequency` times faster than its horizontal advance. Without an explicit
/// `wavelength` the width of one period is `amp · 2π`, which makes the
/// slope at every point `frequency · cos α`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SineConfig {
    #[serde(flatten)]
    pub placement: Transform2,
    pub amp: f64,
    #[serde(default = "default_one")]
    pub frequency: f64,
    #[serde(default = "default_one")]
    pub period: f64,
    #[serde(default)]
    pub phase: f64,
    /// Width of one full period, in output units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wavelength: Option<f64>,
    #[serde(default = "default_arc")]
    pub arc: f64,
    #[serde(default = "default_true")]
    pub tangent: bool,
    #[serde(flatten)]
    pub time: TimeConfig,
}

impl SineConfig {
    pub fn new(amp: f64) -> Self {
        Self {
            placement: Transform2::default(),
            amp,
            frequency: 1.0,
            period: 1.0,
            phase: 0.0,
            wavelength: None,
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

    pub fn with_frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn with_period(mut self, period: f64) -> Self {
        self.period = period;
        self
    }

    pub fn with_phase(mut self, degrees: f64) -> Self {
        self.phase = degrees;
        self
    }

    pub fn with_wavelength(mut self, wavelength: f64) -> Self {
        self.wavelength = Some(wavelength);
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

    /// Horizontal advance over `t ∈ [0, 1]` per period, and the gain applied
    /// to `cos α` in the slope.
    ///
    /// An explicit wavelength rescales frequency by `amp · 2π / wavelength`
    /// and arc by its inverse: the phase sweep is unchanged while the
    /// width follows the requested wavelength.
    fn width_and_gain(&self, arc: f64) -> (f64, f64) {
        match self.wavelength {
            Some(wavelength) => {
                let scale = self.amp * TAU / wavelength;
                (wavelength * arc / TAU, self.frequency * scale)
            }
            None => (self.amp * arc, self.frequency),
        }
    }

    fn evaluate(&self, t: f64, with_tangent: bool) -> Result<Sample> {
        self.validate()?;
        let t = self.time.map(t);
        let arc = self.arc * DEG_TO_RAD;
        let (width, gain) = self.width_and_gain(arc);

        let alpha = t * self.frequency * arc * self.period + self.phase * DEG_TO_RAD;
        let local = dvec2(
            t * width * self.period,
            round_to(alpha.sin() * self.amp, DISPLACEMENT_PLACES),
        );

        let local_heading = with_tangent.then(|| (gain * alpha.cos()).atan());
        let rate = width * self.period * self.time.rate();
        let tangent_angle = placed_heading(local_heading, rate, |h| {
            self.placement.transform_heading(h, LocalAxis::Up)
        });

        Sample::at(self.placement.transform_point(local, LocalAxis::Up), tangent_angle)
            .checked("sine")
    }
}

impl Curve for SineConfig {
    fn sample(&self, t: f64) -> Result<Sample> {
        self.evaluate(t, self.tangent)
    }

    fn position_at(&self, t: f64) -> Result<Point2> {
        self.evaluate(t, false).map(|s| s.position())
    }
}

impl Validate for SineConfig {
    fn validate(&self) -> Result<()> {
        ensure_finite("amp", self.amp)?;
        ensure_finite("frequency", self.frequency)?;
        ensure_finite("period", self.period)?;
        ensure_finite("phase", self.phase)?;
        ensure_finite("arc", self.arc)?;
        if let Some(wavelength) = self.wavelength {
            ensure_finite("wavelength", wavelength)?;
            if wavelength == 0.0 {
                return Err(CurveError::invalid("wavelength must be non-zero"));
            }
        }
        self.placement.validate()?;
        self.time.validate()
    }
}
