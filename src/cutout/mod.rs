//! Parametric cutout generators.
//!
//! Every generator turns its construction parameters plus a kerf value into
//! an ordered, kerf-compensated path in the cutout's local frame. Boundaries
//! move inward by half the kerf so the finished opening has nominal size.
//! All loops are emitted counter-clockwise.

mod air_vent;
mod circle;
mod fan;
mod hex_bolt;
mod mounting_screw;
mod rectangle;
mod rounded_rectangle;

pub use air_vent::{AirVentGridCutout, MAX_VENT_SLOTS, VentLayout};
pub use circle::CircleCutout;
pub use fan::{FanCutout, FanDimensions, FAN_DIMENSIONS};
pub use hex_bolt::HexBoltCutout;
pub use mounting_screw::MountingScrewCutout;
pub use rectangle::RectangleCutout;
pub use rounded_rectangle::RoundedRectangleCutout;

use crate::config::CutConfig;
use crate::error::{GeometryError, Result};
use crate::geometry::{Layer, PathSegment, RenderedShape};
use crate::math::Point2;

/// Stored parameters that are expressed in the cutout's local frame and
/// must be re-expressed when the cutout is placed on a reoriented wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocalAttribute {
    /// The `(width, height)` extent.
    Size,
    /// The mounting-screw shaft direction.
    ShaftDirection,
}

/// Shared capability of all cutout shapes.
pub trait Render {
    /// Renders the kerf-compensated outline.
    ///
    /// Pure and repeatable: identical inputs yield identical coordinates.
    ///
    /// # Errors
    ///
    /// Returns an error if the kerf is negative or non-finite, if it would
    /// collapse a feature, or if the shape's parameters are invalid.
    fn render(&self, kerf: f64) -> Result<RenderedShape>;

    /// The styling tag forwarded onto rendered output.
    fn layer(&self) -> &Layer;

    /// Parameters stored in local coordinates.
    fn local_attributes(&self) -> &'static [LocalAttribute] {
        &[]
    }
}

/// The closed family of cutout shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Cutout {
    Rectangle(RectangleCutout),
    RoundedRectangle(RoundedRectangleCutout),
    HexBolt(HexBoltCutout),
    Circle(CircleCutout),
    MountingScrew(MountingScrewCutout),
    Fan(FanCutout),
    AirVentGrid(AirVentGridCutout),
}

impl Cutout {
    /// Short name of the shape kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Cutout::Rectangle(_) => "rectangle",
            Cutout::RoundedRectangle(_) => "rounded_rectangle",
            Cutout::HexBolt(_) => "hex_bolt",
            Cutout::Circle(_) => "circle",
            Cutout::MountingScrew(_) => "mounting_screw",
            Cutout::Fan(_) => "fan",
            Cutout::AirVentGrid(_) => "air_vent_grid",
        }
    }

    fn shape(&self) -> &dyn Render {
        match self {
            Cutout::Rectangle(c) => c,
            Cutout::RoundedRectangle(c) => c,
            Cutout::HexBolt(c) => c,
            Cutout::Circle(c) => c,
            Cutout::MountingScrew(c) => c,
            Cutout::Fan(c) => c,
            Cutout::AirVentGrid(c) => c,
        }
    }

    /// Renders with the cutting width of `config`.
    ///
    /// # Errors
    ///
    /// See [`Render::render`].
    pub fn render_with(&self, config: &CutConfig) -> Result<RenderedShape> {
        self.render(config.cutting_width())
    }
}

impl Render for Cutout {
    fn render(&self, kerf: f64) -> Result<RenderedShape> {
        let shape = self.shape().render(kerf)?;
        tracing::trace!(
            kind = self.kind(),
            kerf,
            segments = shape.len(),
            layer = %shape.layer(),
            "rendered cutout"
        );
        Ok(shape)
    }

    fn layer(&self) -> &Layer {
        self.shape().layer()
    }

    fn local_attributes(&self) -> &'static [LocalAttribute] {
        self.shape().local_attributes()
    }
}

macro_rules! impl_from_cutout {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Cutout {
                fn from(c: $ty) -> Self {
                    Cutout::$variant(c)
                }
            }
        )*
    };
}

impl_from_cutout! {
    Rectangle => RectangleCutout,
    RoundedRectangle => RoundedRectangleCutout,
    HexBolt => HexBoltCutout,
    Circle => CircleCutout,
    MountingScrew => MountingScrewCutout,
    Fan => FanCutout,
    AirVentGrid => AirVentGridCutout,
}

/// Half-kerf displacement applied to every boundary.
pub(crate) fn displacement(kerf: f64) -> Result<f64> {
    if !kerf.is_finite() || kerf < 0.0 {
        return Err(GeometryError::InvalidKerf(kerf).into());
    }
    Ok(kerf / 2.0)
}

/// Validates a size-like construction parameter.
pub(crate) fn dimension(parameter: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(GeometryError::InvalidDimension { parameter, value }.into());
    }
    Ok(value)
}

/// `nominal - amount`, failing if the kerf would make it negative.
pub(crate) fn inset(feature: &'static str, nominal: f64, amount: f64, kerf: f64) -> Result<f64> {
    let value = nominal - amount;
    if value < 0.0 {
        return Err(GeometryError::KerfTooLarge {
            feature,
            nominal,
            kerf,
        }
        .into());
    }
    Ok(value)
}

/// Counter-clockwise rectangle loop between two corners.
pub(crate) fn rectangle_loop(min: Point2, max: Point2) -> [PathSegment; 4] {
    [
        PathSegment::line(Point2::new(min.x, min.y), Point2::new(max.x, min.y)),
        PathSegment::line(Point2::new(max.x, min.y), Point2::new(max.x, max.y)),
        PathSegment::line(Point2::new(max.x, max.y), Point2::new(min.x, max.y)),
        PathSegment::line(Point2::new(min.x, max.y), Point2::new(min.x, min.y)),
    ]
}
