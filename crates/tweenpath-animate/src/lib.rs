//! Tweenpath animate: the boundary between a host animation driver and the
//! curve evaluators.
//!
//! The host owns the clock. Once per tick it hands a progress value to a
//! [`CurveTween`] and applies the resulting [`Frame`] to whatever it is
//! moving. Nothing here schedules, renders, or keeps state between ticks.

pub mod frame;
pub mod tween;

pub use frame::{Frame, FrameSink};
pub use tween::CurveTween;
