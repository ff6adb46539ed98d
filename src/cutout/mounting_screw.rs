use super::{dimension, displacement, inset, LocalAttribute, Render};
use crate::error::{DirectionError, GeometryError, Result};
use crate::frame::Direction2D;
use crate::geometry::{Layer, PathSegment, RenderedShape};
use crate::math::{orthonormal, Point2, Vector2, TOLERANCE};

/// Keyhole slot for hanging a panel on a screw.
///
/// The local origin is the center of the shaft end of the slot, where the
/// screw comes to rest. The head hole is centered at
/// `shaft_length * shaft_dir`; a slot of the shaft's width joins the two.
#[derive(Debug, Clone, PartialEq)]
pub struct MountingScrewCutout {
    radius_head: f64,
    radius_shaft: f64,
    shaft_length: f64,
    shaft_dir: Vector2,
    layer: Layer,
}

/// Unit-length tolerance for shaft directions.
const UNIT_TOLERANCE: f64 = 1e-9;

impl MountingScrewCutout {
    /// Creates a keyhole whose slot runs along the unit vector `shaft_dir`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::HeadSmallerThanShaft` if `radius_head < radius_shaft`,
    /// `DirectionError::NotUnit` if `shaft_dir` is not a unit vector, and
    /// `GeometryError::InvalidDimension` for negative or non-finite sizes
    /// or a zero shaft radius.
    pub fn new(
        radius_head: f64,
        radius_shaft: f64,
        shaft_length: f64,
        shaft_dir: Vector2,
    ) -> Result<Self> {
        let radius_head = dimension("head radius", radius_head)?;
        let radius_shaft = dimension("shaft radius", radius_shaft)?;
        if radius_shaft <= 0.0 {
            return Err(GeometryError::InvalidDimension {
                parameter: "shaft radius",
                value: radius_shaft,
            }
            .into());
        }
        let shaft_length = dimension("shaft length", shaft_length)?;

        if radius_head < radius_shaft {
            return Err(GeometryError::HeadSmallerThanShaft {
                head: radius_head,
                shaft: radius_shaft,
            }
            .into());
        }
        if (shaft_dir.norm() - 1.0).abs() > UNIT_TOLERANCE {
            return Err(DirectionError::NotUnit(vec![shaft_dir.x, shaft_dir.y]).into());
        }

        Ok(Self {
            radius_head,
            radius_shaft,
            shaft_length,
            shaft_dir,
            layer: Layer::default(),
        })
    }

    /// Creates a keyhole whose slot runs along a canonical direction.
    ///
    /// # Errors
    ///
    /// See [`MountingScrewCutout::new`].
    pub fn along(
        radius_head: f64,
        radius_shaft: f64,
        shaft_length: f64,
        direction: Direction2D,
    ) -> Result<Self> {
        Self::new(radius_head, radius_shaft, shaft_length, direction.vector())
    }

    #[must_use]
    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layer = layer;
        self
    }

    #[must_use]
    pub fn shaft_dir(&self) -> Vector2 {
        self.shaft_dir
    }

    #[must_use]
    pub fn radius_head(&self) -> f64 {
        self.radius_head
    }

    #[must_use]
    pub fn radius_shaft(&self) -> f64 {
        self.radius_shaft
    }

    #[must_use]
    pub fn shaft_length(&self) -> f64 {
        self.shaft_length
    }
}

impl Render for MountingScrewCutout {
    /// Four segments: the shaft end cap, one straight run, the head arc
    /// and the straight run back.
    ///
    /// The kerf must leave a shaft slot of positive width, and the shaft
    /// must be long enough that the runs reach the head circle without
    /// turning back past the origin.
    fn render(&self, kerf: f64) -> Result<RenderedShape> {
        let d = displacement(kerf)?;
        let rh = inset("screw head radius", self.radius_head, d, kerf)?;
        let rs = inset("screw shaft radius", self.radius_shaft, d, kerf)?;
        if rs <= 0.0 {
            return Err(GeometryError::KerfTooLarge {
                feature: "screw shaft radius",
                nominal: self.radius_shaft,
                kerf,
            }
            .into());
        }

        // Distance from the head center back to where the runs meet it tangentially.
        let tangent_offset = (rh * rh - rs * rs).sqrt();
        if self.shaft_length < tangent_offset - TOLERANCE {
            return Err(GeometryError::ShaftTooShort {
                length: self.shaft_length,
                minimum: tangent_offset,
            }
            .into());
        }

        let on = orthonormal(&self.shaft_dir)?;
        let straight_end = self.shaft_dir * (self.shaft_length - tangent_offset).max(0.0);

        let left = Point2::from(on * rs);
        let right = Point2::from(-on * rs);

        let segments = vec![
            PathSegment::arc(left, right, rs, false, true)?,
            PathSegment::line(right, right + straight_end),
            PathSegment::arc(right + straight_end, left + straight_end, rh, true, true)?,
            PathSegment::line(left + straight_end, left),
        ];

        Ok(RenderedShape::new(segments, self.layer.clone()))
    }

    fn layer(&self) -> &Layer {
        &self.layer
    }

    fn local_attributes(&self) -> &'static [LocalAttribute] {
        &[LocalAttribute::ShaftDirection]
    }
}
