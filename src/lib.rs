pub mod config;
pub mod cutout;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod io;
pub mod math;

pub use config::{CutConfig, LayerColors};
pub use cutout::{Cutout, LocalAttribute, Render};
pub use error::{KerfcutError, Result};
pub use frame::{Axis, Direction, Direction2D};
pub use geometry::{Layer, PathSegment, RenderedShape};
