use std::ops::Range;

use super::{Layer, PathSegment};
use crate::error::{PathError, Result};
use crate::math::{max_point, min_point, mirror_factors, points_coincide, rotate_2d, Point2, Vector2};

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl Aabb {
    #[must_use]
    pub fn size(&self) -> Vector2 {
        self.max - self.min
    }
}

/// Ordered path segments produced by one render call, tagged with a layer.
///
/// Segment order is the traversal order. Consumers must not reorder it;
/// closed-loop detection relies on consecutive segments sharing endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedShape {
    segments: Vec<PathSegment>,
    layer: Layer,
}

impl RenderedShape {
    #[must_use]
    pub fn new(segments: Vec<PathSegment>, layer: Layer) -> Self {
        Self { segments, layer }
    }

    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    #[must_use]
    pub fn into_segments(self) -> Vec<PathSegment> {
        self.segments
    }

    #[must_use]
    pub fn layer(&self) -> &Layer {
        &self.layer
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Splits the path into closed loops, returned as segment index ranges.
    ///
    /// A loop runs from its first segment until a later segment ends back at
    /// the loop's start point; each segment must start where the previous one
    /// ended. A circle is a loop by itself.
    ///
    /// # Errors
    ///
    /// Returns `PathError::NotClosed` naming the first segment that breaks
    /// the chain, or the last segment if the final loop never closes.
    pub fn closed_loops(&self) -> Result<Vec<Range<usize>>> {
        let mut loops = Vec::new();
        let mut loop_start: Option<usize> = None;

        for (i, seg) in self.segments.iter().enumerate() {
            match loop_start {
                None if seg.is_circle() => loops.push(i..i + 1),
                None => loop_start = Some(i),
                Some(first) => {
                    if seg.is_circle() || !points_coincide(&self.segments[i - 1].end(), &seg.start()) {
                        return Err(PathError::NotClosed { segment: first.max(i - 1) }.into());
                    }
                }
            }

            if let Some(first) = loop_start {
                // A zero-length opening segment does not close a loop by itself.
                let closes = i > first || !points_coincide(&seg.start(), &seg.end());
                if closes && points_coincide(&seg.end(), &self.segments[first].start()) {
                    loops.push(first..i + 1);
                    loop_start = None;
                }
            }
        }

        match loop_start {
            Some(_) => Err(PathError::NotClosed {
                segment: self.segments.len() - 1,
            }
            .into()),
            None => Ok(loops),
        }
    }

    /// Returns `true` if the whole path decomposes into closed loops.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed_loops().is_ok()
    }

    /// Exact bounding box of all segments, arcs included. `None` when empty.
    #[must_use]
    pub fn bounding_box(&self) -> Option<Aabb> {
        let (mins, maxs): (Vec<Point2>, Vec<Point2>) =
            self.segments.iter().map(PathSegment::extent).unzip();
        Some(Aabb {
            min: min_point(&mins)?,
            max: max_point(&maxs)?,
        })
    }

    /// Polygonal approximation of every closed loop.
    ///
    /// # Errors
    ///
    /// Returns `PathError::NotClosed` if the path is not made of closed loops.
    pub fn flatten(&self, tolerance: f64) -> Result<Vec<Vec<Point2>>> {
        Ok(self
            .closed_loops()?
            .into_iter()
            .map(|range| {
                let mut points: Vec<Point2> = Vec::new();
                for seg in &self.segments[range] {
                    let pts = seg.flatten(tolerance);
                    let skip = usize::from(!points.is_empty());
                    points.extend(pts.into_iter().skip(skip));
                }
                // Closing point duplicates the first.
                points.pop();
                points
            })
            .collect())
    }

    /// Signed area of every closed loop; positive when counter-clockwise.
    ///
    /// # Errors
    ///
    /// Returns `PathError::NotClosed` if the path is not made of closed loops.
    pub fn signed_areas(&self, tolerance: f64) -> Result<Vec<f64>> {
        Ok(self.flatten(tolerance)?.iter().map(|pts| signed_area(pts)).collect())
    }

    /// Same path shifted by `offset`.
    #[must_use]
    pub fn translated(&self, offset: &Vector2) -> Self {
        self.map_points(|p| p + offset, false)
    }

    /// Same path rotated counter-clockwise about the local origin.
    #[must_use]
    pub fn rotated(&self, degrees: f64) -> Self {
        self.map_points(|p| Point2::from(rotate_2d(&p.coords, degrees)), false)
    }

    /// Same path mirrored across the selected axes (`[mirror_x, mirror_y]`).
    ///
    /// Mirroring across exactly one axis reverses orientation, so arc
    /// sweeps are flipped to keep tracing the same curves.
    #[must_use]
    pub fn mirrored(&self, mirror: [bool; 2]) -> Self {
        let factors = mirror_factors(mirror);
        self.map_points(|p| Point2::from(p.coords.component_mul(&factors)), mirror[0] != mirror[1])
    }

    fn map_points(&self, f: impl Fn(Point2) -> Point2, reflects: bool) -> Self {
        Self {
            segments: self.segments.iter().map(|s| s.map_points(&f, reflects)).collect(),
            layer: self.layer.clone(),
        }
    }
}

/// Shoelace area of a closed polygon; positive for counter-clockwise.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}
