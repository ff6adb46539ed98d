use super::{dimension, displacement, inset, rectangle_loop, LocalAttribute, Render};
use crate::error::Result;
use crate::geometry::{Layer, RenderedShape};
use crate::math::{Point2, Vector2};

/// Rectangular opening with one corner at the local origin.
#[derive(Debug, Clone, PartialEq)]
pub struct RectangleCutout {
    size: Vector2,
    layer: Layer,
}

impl RectangleCutout {
    /// Creates a `width` x `height` rectangle on the default `cut` layer.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidDimension` for negative or non-finite sizes.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        Ok(Self {
            size: Vector2::new(dimension("width", width)?, dimension("height", height)?),
            layer: Layer::default(),
        })
    }

    #[must_use]
    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layer = layer;
        self
    }

    #[must_use]
    pub fn size(&self) -> Vector2 {
        self.size
    }
}

impl Render for RectangleCutout {
    fn render(&self, kerf: f64) -> Result<RenderedShape> {
        let d = displacement(kerf)?;
        inset("rectangle width", self.size.x, 2.0 * d, kerf)?;
        inset("rectangle height", self.size.y, 2.0 * d, kerf)?;

        let min = Point2::new(d, d);
        let max = Point2::new(self.size.x - d, self.size.y - d);
        Ok(RenderedShape::new(rectangle_loop(min, max).to_vec(), self.layer.clone()))
    }

    fn layer(&self) -> &Layer {
        &self.layer
    }

    fn local_attributes(&self) -> &'static [LocalAttribute] {
        &[LocalAttribute::Size]
    }
}
