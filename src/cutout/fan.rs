use super::{displacement, inset, Render};
use crate::error::{ParameterError, Result};
use crate::geometry::{Layer, PathSegment, RenderedShape};
use crate::math::Point2;

/// Cutout dimensions for one nominal fan size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FanDimensions {
    /// Diameter of the central air bore.
    pub bore_diameter: f64,
    /// Diameter of each mounting hole.
    pub hole_diameter: f64,
    /// Distance from the fan edge to each mounting-hole center, per axis.
    pub hole_inset: f64,
}

/// Supported nominal fan sizes (square frame edge length).
pub const FAN_DIMENSIONS: &[(u32, FanDimensions)] = &[
    (40, FanDimensions { bore_diameter: 38.0, hole_diameter: 4.0, hole_inset: 3.5 }),
    (60, FanDimensions { bore_diameter: 58.0, hole_diameter: 4.0, hole_inset: 4.0 }),
    (70, FanDimensions { bore_diameter: 68.0, hole_diameter: 4.0, hole_inset: 4.0 }),
    (80, FanDimensions { bore_diameter: 76.0, hole_diameter: 4.0, hole_inset: 4.5 }),
    (92, FanDimensions { bore_diameter: 89.0, hole_diameter: 4.0, hole_inset: 5.0 }),
    (120, FanDimensions { bore_diameter: 117.0, hole_diameter: 4.0, hole_inset: 7.0 }),
];

/// Air bore plus four mounting holes for a square case fan, centered on
/// the local origin.
#[derive(Debug, Clone, PartialEq)]
pub struct FanCutout {
    size: u32,
    dimensions: FanDimensions,
    layer: Layer,
}

impl FanCutout {
    /// Creates a cutout for a fan of nominal `size`.
    ///
    /// # Errors
    ///
    /// Returns `ParameterError::UnsupportedFanSize` if `size` is not in
    /// [`FAN_DIMENSIONS`].
    pub fn new(size: u32) -> Result<Self> {
        let dimensions = FAN_DIMENSIONS
            .iter()
            .find(|(s, _)| *s == size)
            .map(|(_, dims)| *dims)
            .ok_or_else(|| ParameterError::UnsupportedFanSize {
                size,
                supported: Self::supported_sizes(),
            })?;
        Ok(Self {
            size,
            dimensions,
            layer: Layer::default(),
        })
    }

    #[must_use]
    pub fn supported_sizes() -> Vec<u32> {
        FAN_DIMENSIONS.iter().map(|(s, _)| *s).collect()
    }

    #[must_use]
    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layer = layer;
        self
    }

    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[must_use]
    pub fn dimensions(&self) -> FanDimensions {
        self.dimensions
    }

    /// Offset of the mounting holes from the center along each axis.
    #[must_use]
    pub fn hole_position(&self) -> f64 {
        f64::from(self.size) / 2.0 - self.dimensions.hole_inset
    }
}

impl Render for FanCutout {
    /// Hole positions do not depend on the kerf; only radii shrink.
    fn render(&self, kerf: f64) -> Result<RenderedShape> {
        let d = displacement(kerf)?;
        let bore = inset("fan bore radius", self.dimensions.bore_diameter / 2.0, d, kerf)?;
        let hole = inset("fan mounting hole radius", self.dimensions.hole_diameter / 2.0, d, kerf)?;
        let p = self.hole_position();

        let segments = vec![
            PathSegment::circle(Point2::origin(), bore),
            PathSegment::circle(Point2::new(p, p), hole),
            PathSegment::circle(Point2::new(-p, p), hole),
            PathSegment::circle(Point2::new(p, -p), hole),
            PathSegment::circle(Point2::new(-p, -p), hole),
        ];

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

    use super::*;
    use crate::error::KerfcutError;

    #[test]
    fn size_40_layout() {
        let kerf = 0.3;
        let shape = FanCutout::new(40).unwrap().render(kerf).unwrap();
        assert_eq!(shape.len(), 5);
        assert_eq!(shape.closed_loops().unwrap().len(), 5);

        let PathSegment::Circle { center, radius } = shape.segments()[0] else {
            panic!("expected bore circle");
        };
        assert_eq!(center, Point2::origin());
        assert_abs_diff_eq!(2.0 * radius, 38.0 - kerf, epsilon = 1e-12);

        let p = 20.0 - 3.5;
        let expected = [(p, p), (-p, p), (p, -p), (-p, -p)];
        for (seg, (x, y)) in shape.segments()[1..].iter().zip(expected) {
            let PathSegment::Circle { center, radius } = *seg else {
                panic!("expected mounting hole circle");
            };
            assert_eq!(center, Point2::new(x, y));
            assert_abs_diff_eq!(2.0 * radius, 4.0 - kerf, epsilon = 1e-12);
        }
    }

    #[test]
    fn hole_positions_are_kerf_independent() {
        let fan = FanCutout::new(120).unwrap();
        let a = fan.render(0.0).unwrap();
        let b = fan.render(1.0).unwrap();
        for (sa, sb) in a.segments().iter().zip(b.segments()) {
            let (PathSegment::Circle { center: ca, .. }, PathSegment::Circle { center: cb, .. }) = (sa, sb) else {
                panic!("expected circles");
            };
            assert_eq!(ca, cb);
        }
    }

    #[test]
    fn unsupported_size_fails() {
        let err = FanCutout::new(100).unwrap_err();
        match err {
            KerfcutError::Parameter(ParameterError::UnsupportedFanSize { size, supported }) => {
                assert_eq!(size, 100);
                assert_eq!(supported, vec![40, 60, 70, 80, 92, 120]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn every_table_size_renders() {
        for size in FanCutout::supported_sizes() {
            let shape = FanCutout::new(size).unwrap().render(0.2).unwrap();
            assert!(shape.is_closed());
        }
    }
}
