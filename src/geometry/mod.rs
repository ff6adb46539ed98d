mod layer;
mod segment;
mod shape;

pub use layer::{Layer, WarnLevel};
pub use segment::{ArcSegment, PathSegment};
pub use shape::{signed_area, Aabb, RenderedShape};
