pub mod angle;
pub mod time;
pub mod transform;

pub use glam::{dvec2, DVec2};
pub use angle::{heading, rotate, round_to, DEG_TO_RAD, RAD_TO_DEG};
pub use time::{map_time, TimeConfig};
pub use transform::{LocalAxis, Transform2};

pub type Point2 = DVec2;
pub type Vector2 = DVec2;
