//! Host-facing sampler for one animated curve.

use log::{debug, trace, warn};
use rayon::prelude::*;
use tweenpath_core::{Result, Validate};
use tweenpath_geometry::{evaluate, CurveConfig, CurveKind, Sample};

use crate::frame::{Frame, FrameSink};

/// A validated curve configuration, sampled once per host tick.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveTween {
    config: CurveConfig,
}

impl CurveTween {
    /// Validate `config` and wrap it for per-tick sampling.
    pub fn new(config: impl Into<CurveConfig>) -> Result<Self> {
        let config = config.into();
        config.validate()?;
        match &config {
            CurveConfig::Bezier(b) => {
                debug!("curve tween: bezier with {} control points", b.points.len())
            }
            other => debug!("curve tween: {}", other.kind()),
        }
        Ok(Self { config })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Self::new(CurveConfig::from_json(json)?)
    }

    pub fn config(&self) -> &CurveConfig {
        &self.config
    }

    pub fn kind(&self) -> CurveKind {
        self.config.kind()
    }

    pub fn sample(&self, progress: f64) -> Result<Sample> {
        evaluate(progress, &self.config)
    }

    pub fn frame(&self, progress: f64) -> Result<Frame> {
        let sample = self.sample(progress)?;
        trace!(
            "{} frame at {progress}: ({}, {}) angle {}",
            self.config.kind(),
            sample.x,
            sample.y,
            sample.tangent_angle
        );
        Ok(Frame::from_sample(&sample, self.config.tangent()))
    }

    /// Evaluate one tick and hand the frame to `sink`.
    ///
    /// Nothing reaches the sink when evaluation fails.
    pub fn step<S: FrameSink + ?Sized>(&self, progress: f64, sink: &mut S) -> Result<Frame> {
        let frame = self.frame(progress)?;
        sink.apply(&frame);
        Ok(frame)
    }

    /// Frames at `steps + 1` evenly spaced progress values from 0 to 1, in order.
    ///
    /// `steps == 0` yields only the final frame.
    pub fn frames(&self, steps: usize) -> Result<Vec<Frame>> {
        if steps == 0 {
            return Ok(vec![self.frame(1.0)?]);
        }
        (0..=steps)
            .into_par_iter()
            .map(|i| {
                let progress = i as f64 / steps as f64;
                self.frame(progress).map_err(|e| {
                    warn!("{} frame {i}/{steps} failed: {e}", self.config.kind());
                    e
                })
            })
            .collect()
    }

    /// Samples at arbitrary progress values, in the order given.
    pub fn samples(&self, progress: &[f64]) -> Result<Vec<Sample>> {
        progress.par_iter().map(|&p| self.sample(p)).collect()
    }
}
