pub mod axis;
pub mod geometry;

pub use axis::{AxisId, AxisSlot, PerSlot};
pub use geometry::{Rect, Size};
