//! Canonical axis-aligned directions and the operations placement code
//! builds on: perpendicular lookup, axis projection and naming.

mod direction;
mod direction_2d;

pub use direction::{Axis, Direction};
pub use direction_2d::Direction2D;
