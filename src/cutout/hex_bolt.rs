use super::{dimension, displacement, inset, Render};
use crate::error::Result;
use crate::geometry::{Layer, PathSegment, RenderedShape};
use crate::math::Point2;

/// Hexagonal nut/bolt-head pocket centered on the local origin.
///
/// `width` is the distance from the centroid to each flat, so the
/// circumradius is `2 * width / sqrt(3)`. Two flats are horizontal.
#[derive(Debug, Clone, PartialEq)]
pub struct HexBoltCutout {
    width: f64,
    layer: Layer,
}

impl HexBoltCutout {
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidDimension` for a negative or non-finite width.
    pub fn new(width: f64) -> Result<Self> {
        Ok(Self {
            width: dimension("width", width)?,
            layer: Layer::default(),
        })
    }

    #[must_use]
    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layer = layer;
        self
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// The six kerf-compensated vertices, counter-clockwise from the +x corner.
    fn vertices(&self, kerf: f64) -> Result<[Point2; 6]> {
        let d = displacement(kerf)?;
        let sqrt3 = 3.0_f64.sqrt();
        let radius = 2.0 * self.width / sqrt3;

        // Each flat moves in by d; along the hexagon edges that is d / sqrt(3)
        // at the slanted vertices and 2d / sqrt(3) at the side corners.
        let y = inset("hex bolt width", self.width, d, kerf)?;
        let x = radius / 2.0 - d / sqrt3;
        let side_x = radius - 2.0 * d / sqrt3;

        Ok([
            Point2::new(side_x, 0.0),
            Point2::new(x, y),
            Point2::new(-x, y),
            Point2::new(-side_x, 0.0),
            Point2::new(-x, -y),
            Point2::new(x, -y),
        ])
    }
}

impl Render for HexBoltCutout {
    fn render(&self, kerf: f64) -> Result<RenderedShape> {
        let corners = self.vertices(kerf)?;
        let segments = corners
            .iter()
            .zip(corners.iter().cycle().skip(1))
            .map(|(a, b)| PathSegment::line(*a, *b))
            .collect();
        Ok(RenderedShape::new(segments, self.layer.clone()))
    }

    fn layer(&self) -> &Layer {
        &self.layer
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_3;

    use super::*;

    #[test]
    fn vertices_are_equidistant_and_60_degrees_apart() {
        for kerf in [0.0, 0.3, 1.0] {
            let hex = HexBoltCutout::new(5.5).unwrap();
            let v = hex.vertices(kerf).unwrap();
            let r0 = v[0].coords.norm();
            for (i, p) in v.iter().enumerate() {
                assert_abs_diff_eq!(p.coords.norm(), r0, epsilon = 1e-10);
                let q = v[(i + 1) % 6];
                let angle = p.coords.angle(&q.coords);
                assert_abs_diff_eq!(angle, FRAC_PI_3, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn zero_kerf_flats_at_width() {
        let shape = HexBoltCutout::new(5.0).unwrap().render(0.0).unwrap();
        assert_eq!(shape.len(), 6);
        let bb = shape.bounding_box().unwrap();
        assert_abs_diff_eq!(bb.max.y, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(bb.min.y, -5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(bb.max.x, 10.0 / 3.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn kerf_moves_each_flat_by_half_kerf() {
        let shape = HexBoltCutout::new(5.0).unwrap().render(0.4).unwrap();
        // Distance from centroid to every edge line must be width - d.
        for seg in shape.segments() {
            let (a, b) = (seg.start(), seg.end());
            let dir = (b - a).normalize();
            let dist = (a.coords.x * dir.y - a.coords.y * dir.x).abs();
            assert_abs_diff_eq!(dist, 4.8, epsilon = 1e-10);
        }
        crate::cutout::tests::assert_closed_ccw(&shape);
    }
}
