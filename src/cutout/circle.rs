use super::{dimension, displacement, inset, Render};
use crate::error::Result;
use crate::geometry::{Layer, PathSegment, RenderedShape};
use crate::math::Point2;

/// Round hole centered on the local origin.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCutout {
    radius: f64,
    layer: Layer,
}

impl CircleCutout {
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidDimension` for a negative or non-finite radius.
    pub fn new(radius: f64) -> Result<Self> {
        Ok(Self {
            radius: dimension("radius", radius)?,
            layer: Layer::default(),
        })
    }

    #[must_use]
    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layer = layer;
        self
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Render for CircleCutout {
    fn render(&self, kerf: f64) -> Result<RenderedShape> {
        let d = displacement(kerf)?;
        let radius = inset("circle radius", self.radius, d, kerf)?;
        Ok(RenderedShape::new(
            vec![PathSegment::circle(Point2::origin(), radius)],
            self.layer.clone(),
        ))
    }

    fn layer(&self) -> &Layer {
        &self.layer
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn radius_shrinks_by_half_kerf() {
        let circle = CircleCutout::new(5.0).unwrap();
        assert_eq!(
            circle.render(0.0).unwrap().segments(),
            &[PathSegment::circle(Point2::origin(), 5.0)]
        );
        assert_eq!(
            circle.render(0.5).unwrap().segments(),
            &[PathSegment::circle(Point2::origin(), 4.75)]
        );
    }

    #[test]
    fn kerf_wider_than_hole_fails() {
        assert!(CircleCutout::new(0.1).unwrap().render(0.4).is_err());
    }
}
