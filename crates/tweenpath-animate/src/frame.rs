//! Frame values applied by the host on each tick.

use serde::{Deserialize, Serialize};
use tweenpath_geometry::Sample;
use tweenpath_math::round_to;

/// Decimal places kept on the rotation handed to the host.
pub const ROTATION_PLACES: u32 = 8;

/// Position (and optional heading) of the animated element for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub left: f64,
    pub top: f64,
    /// Tangent angle in radians, present only when the curve computes tangents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate: Option<f64>,
}

impl Frame {
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top, rotate: None }
    }

    pub fn with_rotate(mut self, radians: f64) -> Self {
        self.rotate = Some(round_to(radians, ROTATION_PLACES));
        self
    }

    pub fn from_sample(sample: &Sample, with_rotation: bool) -> Self {
        let frame = Self::new(sample.x, sample.y);
        if with_rotation {
            frame.with_rotate(sample.tangent_angle)
        } else {
            frame
        }
    }
}

/// Receiver of frames on the host side.
pub trait FrameSink {
    fn apply(&mut self, frame: &Frame);
}

impl<F: FnMut(&Frame)> FrameSink for F {
    fn apply(&mut self, frame: &Frame) {
        self(frame)
    }
}

impl FrameSink for Vec<Frame> {
    fn apply(&mut self, frame: &Frame) {
        self.push(*frame);
    }
}
