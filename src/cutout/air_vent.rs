use super::{dimension, displacement, inset, rectangle_loop, LocalAttribute, Render};
use crate::error::{GeometryError, Result};
use crate::geometry::{Layer, RenderedShape};
use crate::math::{Point2, Vector2};

const SHORT_SLOT: f64 = 5.0;
const LONG_SLOT: f64 = 30.0;
const SLOT_GAP: f64 = 5.0;

/// Grid of rectangular ventilation slots filling a `width` x `height`
/// area with one corner at the local origin.
///
/// Slots are short along x and long along y. Per axis the slot count is
/// the smallest one whose nominal pitch covers the area; the slots then
/// stretch or shrink evenly so the grid spans the area exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct AirVentGridCutout {
    size: Vector2,
    short_slot: f64,
    long_slot: f64,
    gap: f64,
    layer: Layer,
}

/// Slot counts and cell pitches along both axes of a vent grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VentLayout {
    pub short_count: usize,
    /// Slot length plus one gap, along x.
    pub short_pitch: f64,
    pub long_count: usize,
    /// Slot length plus one gap, along y.
    pub long_pitch: f64,
    pub gap: f64,
}

impl VentLayout {
    /// Nominal `(start, end)` of every slot along x.
    #[must_use]
    pub fn short_spans(&self) -> Vec<(f64, f64)> {
        spans(self.short_count, self.short_pitch, self.gap)
    }

    /// Nominal `(start, end)` of every slot along y.
    #[must_use]
    pub fn long_spans(&self) -> Vec<(f64, f64)> {
        spans(self.long_count, self.long_pitch, self.gap)
    }
}

#[allow(clippy::cast_precision_loss)]
fn spans(count: usize, pitch: f64, gap: f64) -> Vec<(f64, f64)> {
    (0..count)
        .map(|i| (i as f64 * pitch, (i + 1) as f64 * pitch - gap))
        .collect()
}

/// Largest number of slots one vent grid may render.
pub const MAX_VENT_SLOTS: usize = 100_000;

/// Smallest slot count covering `extent`, and the resulting even pitch.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn partition(extent: f64, slot: f64, gap: f64) -> Result<(usize, f64)> {
    let count = ((extent + gap) / (slot + gap)).ceil().max(1.0);
    if count > MAX_VENT_SLOTS as f64 {
        return Err(GeometryError::TooManySlots {
            count,
            limit: MAX_VENT_SLOTS,
        }
        .into());
    }
    let count = count as usize;
    Ok((count, (extent + gap) / count as f64))
}

impl AirVentGridCutout {
    /// Creates a vent grid with 5-long short slots, 30-long long slots and
    /// gaps of 5.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidDimension` for negative or non-finite sizes.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        Ok(Self {
            size: Vector2::new(dimension("width", width)?, dimension("height", height)?),
            short_slot: SHORT_SLOT,
            long_slot: LONG_SLOT,
            gap: SLOT_GAP,
            layer: Layer::default(),
        })
    }

    /// Overrides the nominal slot lengths and the gap between slots.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidDimension` if a slot length is not
    /// positive or the gap is negative.
    pub fn with_slots(mut self, short_slot: f64, long_slot: f64, gap: f64) -> Result<Self> {
        for (parameter, value) in [("short slot", short_slot), ("long slot", long_slot)] {
            if dimension(parameter, value)? <= 0.0 {
                return Err(GeometryError::InvalidDimension { parameter, value }.into());
            }
        }
        self.short_slot = short_slot;
        self.long_slot = long_slot;
        self.gap = dimension("gap", gap)?;
        Ok(self)
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

    /// Slot counts and pitches for the current size.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::TooManySlots` if the grid would hold more
    /// than [`MAX_VENT_SLOTS`] slots.
    #[allow(clippy::cast_precision_loss)]
    pub fn layout(&self) -> Result<VentLayout> {
        let (short_count, short_pitch) = partition(self.size.x, self.short_slot, self.gap)?;
        let (long_count, long_pitch) = partition(self.size.y, self.long_slot, self.gap)?;
        match short_count.checked_mul(long_count) {
            Some(total) if total <= MAX_VENT_SLOTS => Ok(VentLayout {
                short_count,
                short_pitch,
                long_count,
                long_pitch,
                gap: self.gap,
            }),
            _ => Err(GeometryError::TooManySlots {
                count: short_count as f64 * long_count as f64,
                limit: MAX_VENT_SLOTS,
            }
            .into()),
        }
    }
}

impl Render for AirVentGridCutout {
    /// One closed loop per slot, column by column.
    fn render(&self, kerf: f64) -> Result<RenderedShape> {
        let d = displacement(kerf)?;
        let layout = self.layout()?;
        inset("vent slot width", layout.short_pitch - layout.gap, 2.0 * d, kerf)?;
        inset("vent slot length", layout.long_pitch - layout.gap, 2.0 * d, kerf)?;

        let long_spans = layout.long_spans();
        let mut segments = Vec::with_capacity(4 * layout.short_count * layout.long_count);
        for (x1, x2) in layout.short_spans() {
            for &(y1, y2) in &long_spans {
                segments.extend(rectangle_loop(
                    Point2::new(x1 + d, y1 + d),
                    Point2::new(x2 - d, y2 - d),
                ));
            }
        }

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
    #[allow(clippy::cast_precision_loss)]
    fn counts_are_minimal_for_41_by_31() {
        let vent = AirVentGridCutout::new(41.0, 31.0).unwrap();
        let layout = vent.layout().unwrap();
        assert_eq!(layout.short_count, 5);
        assert_eq!(layout.long_count, 2);

        for (count, extent, slot) in [
            (layout.short_count, 41.0, SHORT_SLOT),
            (layout.long_count, 31.0, LONG_SLOT),
        ] {
            let nominal = slot + SLOT_GAP;
            assert!(count as f64 * nominal >= extent + SLOT_GAP);
            assert!((count - 1) as f64 * nominal < extent + SLOT_GAP);
        }
    }

    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn spans_reconstruct_extent() {
        let layout = AirVentGridCutout::new(41.0, 31.0).unwrap().layout().unwrap();
        for (spans, extent) in [(layout.short_spans(), 41.0), (layout.long_spans(), 31.0)] {
            let slots: f64 = spans.iter().map(|(a, b)| b - a).sum();
            let gaps = (spans.len() - 1) as f64 * layout.gap;
            assert_abs_diff_eq!(slots + gaps, extent, epsilon = 1e-9);
            assert_abs_diff_eq!(spans[0].0, 0.0, epsilon = 1e-12);
            assert_abs_diff_eq!(spans.last().unwrap().1, extent, epsilon = 1e-9);
        }
        assert_abs_diff_eq!(layout.short_pitch, 9.2, epsilon = 1e-12);
        assert_abs_diff_eq!(layout.long_pitch, 18.0, epsilon = 1e-12);
    }

    #[test]
    fn renders_one_loop_per_cell() {
        let vent = AirVentGridCutout::new(41.0, 31.0).unwrap();
        let shape = vent.render(0.2).unwrap();
        assert_eq!(shape.len(), 5 * 2 * 4);
        assert_eq!(shape.closed_loops().unwrap().len(), 10);

        let bb = shape.bounding_box().unwrap();
        assert_abs_diff_eq!(bb.min.x, 0.1, epsilon = 1e-12);
        assert_abs_diff_eq!(bb.max.x, 40.9, epsilon = 1e-9);
        assert_abs_diff_eq!(bb.max.y, 30.9, epsilon = 1e-9);
        crate::cutout::tests::assert_closed_ccw(&shape);
    }

    #[test]
    fn zero_kerf_slots_are_nominal() {
        let shape = AirVentGridCutout::new(41.0, 31.0).unwrap().render(0.0).unwrap();
        let first = shape.segments()[0];
        assert_eq!(first.start(), Point2::new(0.0, 0.0));
        assert_abs_diff_eq!(first.end().x, 4.2, epsilon = 1e-12);
    }

    #[test]
    fn custom_slots() {
        let vent = AirVentGridCutout::new(50.0, 50.0)
            .unwrap()
            .with_slots(10.0, 10.0, 0.0)
            .unwrap();
        let layout = vent.layout().unwrap();
        assert_eq!((layout.short_count, layout.long_count), (5, 5));
        assert!(AirVentGridCutout::new(50.0, 50.0)
            .unwrap()
            .with_slots(0.0, 10.0, 5.0)
            .is_err());
    }

    #[test]
    fn kerf_wider_than_slot_fails() {
        let vent = AirVentGridCutout::new(41.0, 31.0).unwrap();
        assert!(vent.render(5.0).is_err());
    }

    #[test]
    fn oversized_grid_fails_before_allocating() {
        for (w, h) in [(1e12, 1e12), (1e12, 10.0), (10.0, 1e12), (10000.0, 10000.0)] {
            let vent = AirVentGridCutout::new(w, h).unwrap();
            let err = vent.render(0.0).unwrap_err();
            assert!(
                matches!(err, KerfcutError::Geometry(GeometryError::TooManySlots { .. })),
                "{w} x {h}: {err}"
            );
        }

        // 1000 columns of 100 rows: exactly the limit.
        let vent = AirVentGridCutout::new(9995.0, 3495.0).unwrap();
        let layout = vent.layout().unwrap();
        assert_eq!(layout.short_count * layout.long_count, MAX_VENT_SLOTS);
    }
}
