use super::{dimension, displacement, inset, LocalAttribute, Render};
use crate::error::{GeometryError, Result};
use crate::geometry::{Layer, PathSegment, RenderedShape};
use crate::math::{Point2, Vector2};

/// Rectangle with rounded corners, one corner of its bounding box at the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRectangleCutout {
    size: Vector2,
    radius: f64,
    layer: Layer,
}

impl RoundedRectangleCutout {
    /// Creates a `width` x `height` rectangle with corner `radius`.
    ///
    /// The radius is checked against the size at render time.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidDimension` for negative or non-finite values.
    pub fn new(width: f64, height: f64, radius: f64) -> Result<Self> {
        Ok(Self {
            size: Vector2::new(dimension("width", width)?, dimension("height", height)?),
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
    pub fn size(&self) -> Vector2 {
        self.size
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Render for RoundedRectangleCutout {
    /// Eight segments: four sides inset by half the kerf, joined by
    /// quarter arcs of radius `r - d` around the nominal corner centers.
    fn render(&self, kerf: f64) -> Result<RenderedShape> {
        let (w, h) = (self.size.x, self.size.y);
        let r = self.radius;
        if w < 2.0 * r || h < 2.0 * r {
            return Err(GeometryError::RadiusTooLarge {
                radius: r,
                width: w,
                height: h,
            }
            .into());
        }

        let d = displacement(kerf)?;
        let rd = inset("corner radius", r, d, kerf)?;
        let p = Point2::new;
        let corner = |start, end| PathSegment::arc(start, end, rd, false, true);

        let segments = vec![
            PathSegment::line(p(r, d), p(w - r, d)),
            corner(p(w - r, d), p(w - d, r))?,
            PathSegment::line(p(w - d, r), p(w - d, h - r)),
            corner(p(w - d, h - r), p(w - r, h - d))?,
            PathSegment::line(p(w - r, h - d), p(r, h - d)),
            corner(p(r, h - d), p(d, h - r))?,
            PathSegment::line(p(d, h - r), p(d, r)),
            corner(p(d, r), p(r, d))?,
        ];

        Ok(RenderedShape::new(segments, self.layer.clone()))
    }

    fn layer(&self) -> &Layer {
        &self.layer
    }

    fn local_attributes(&self) -> &'static [LocalAttribute] {
        &[LocalAttribute::Size]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::KerfcutError;

    #[test]
    fn zero_kerf_is_nominal() {
        let shape = RoundedRectangleCutout::new(30.0, 20.0, 5.0)
            .unwrap()
            .render(0.0)
            .unwrap();
        assert_eq!(shape.len(), 8);
        let bb = shape.bounding_box().unwrap();
        assert_abs_diff_eq!(bb.min.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(bb.min.y, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(bb.max.x, 30.0, epsilon = 1e-12);
        assert_abs_diff_eq!(bb.max.y, 20.0, epsilon = 1e-12);
        assert_eq!(shape.segments()[0].start(), Point2::new(5.0, 0.0));
        assert_eq!(shape.segments()[0].end(), Point2::new(25.0, 0.0));
    }

    #[test]
    fn corners_keep_nominal_centers() {
        let shape = RoundedRectangleCutout::new(30.0, 20.0, 5.0)
            .unwrap()
            .render(1.0)
            .unwrap();
        let centers = [(25.0, 5.0), (25.0, 15.0), (5.0, 15.0), (5.0, 5.0)];
        for (i, (cx, cy)) in centers.into_iter().enumerate() {
            let PathSegment::Arc(arc) = shape.segments()[2 * i + 1] else {
                panic!("segment {} is not an arc", 2 * i + 1);
            };
            assert_abs_diff_eq!(arc.radius(), 4.5, epsilon = 1e-12);
            let c = arc.center().unwrap();
            assert_abs_diff_eq!(c.x, cx, epsilon = 1e-9);
            assert_abs_diff_eq!(c.y, cy, epsilon = 1e-9);
            assert_abs_diff_eq!(arc.sweep_angle(), std::f64::consts::FRAC_PI_2, epsilon = 1e-9);
        }
        crate::cutout::tests::assert_closed_ccw(&shape);
    }

    #[test]
    fn radius_too_large_fails_at_render() {
        for (w, h, r) in [(9.0, 20.0, 5.0), (20.0, 9.0, 5.0), (10.0, 10.0, 5.1)] {
            let rect = RoundedRectangleCutout::new(w, h, r).unwrap();
            let err = rect.render(0.0).unwrap_err();
            assert!(
                matches!(err, KerfcutError::Geometry(GeometryError::RadiusTooLarge { .. })),
                "{w} x {h} r={r}: {err}"
            );
        }
    }

    #[test]
    fn radius_exactly_half_is_allowed() {
        for (w, h) in [(10.0, 10.0), (10.0, 20.0), (20.0, 10.0)] {
            let shape = RoundedRectangleCutout::new(w, h, 5.0)
                .unwrap()
                .render(0.2)
                .unwrap();
            assert_eq!(shape.closed_loops().unwrap(), vec![0..8], "{w} x {h}");
            crate::cutout::tests::assert_closed_ccw(&shape);
        }
    }

    #[test]
    fn kerf_larger_than_radius_fails() {
        let rect = RoundedRectangleCutout::new(10.0, 10.0, 0.1).unwrap();
        assert!(rect.render(0.4).is_err());
    }
}
