use std::f64::consts::{FRAC_PI_2, TAU};

use crate::error::{GeometryError, Result};
use crate::math::arc_2d::{arc_angles, arc_center, arc_point_at};
use crate::math::{Point2, Vector2, TOLERANCE};

/// A circular arc between two endpoints.
///
/// `large_arc` selects the arc spanning more than 180 degrees and `sweep`
/// selects the counter-clockwise (`true`) or clockwise (`false`) arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSegment {
    start: Point2,
    end: Point2,
    radius: f64,
    large_arc: bool,
    sweep: bool,
}

impl ArcSegment {
    /// Creates a new arc.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ArcRadiusTooSmall` if `radius` is shorter
    /// than half the distance between the endpoints.
    pub fn new(start: Point2, end: Point2, radius: f64, large_arc: bool, sweep: bool) -> Result<Self> {
        let half_chord = (end - start).norm() * 0.5;
        if radius < half_chord - TOLERANCE {
            return Err(GeometryError::ArcRadiusTooSmall { radius, half_chord }.into());
        }
        Ok(Self {
            start,
            end,
            radius,
            large_arc,
            sweep,
        })
    }

    #[must_use]
    pub fn start(&self) -> Point2 {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Point2 {
        self.end
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn large_arc(&self) -> bool {
        self.large_arc
    }

    /// `true` for counter-clockwise arcs.
    #[must_use]
    pub fn sweep(&self) -> bool {
        self.sweep
    }

    /// Center of the selected arc.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoints coincide.
    pub fn center(&self) -> Result<Point2> {
        arc_center(&self.start, &self.end, self.radius, self.large_arc, self.sweep)
    }

    /// Returns `(center, start_angle, sweep_angle)`, or `None` for a
    /// zero-length arc.
    fn parameters(&self) -> Option<(Point2, f64, f64)> {
        let center = self.center().ok()?;
        let (start_angle, sweep) = arc_angles(&self.start, &self.end, &center, self.sweep);
        Some((center, start_angle, sweep))
    }

    /// Signed sweep angle in radians; positive when counter-clockwise.
    #[must_use]
    pub fn sweep_angle(&self) -> f64 {
        self.parameters().map_or(0.0, |(_, _, sweep)| sweep)
    }
}

/// One element of a cutting path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    Line { start: Point2, end: Point2 },
    Arc(ArcSegment),
    /// A full circle; forms a closed loop on its own.
    Circle { center: Point2, radius: f64 },
}

impl PathSegment {
    #[must_use]
    pub fn line(start: Point2, end: Point2) -> Self {
        PathSegment::Line { start, end }
    }

    /// Creates an arc segment.
    ///
    /// # Errors
    ///
    /// See [`ArcSegment::new`].
    pub fn arc(start: Point2, end: Point2, radius: f64, large_arc: bool, sweep: bool) -> Result<Self> {
        Ok(PathSegment::Arc(ArcSegment::new(start, end, radius, large_arc, sweep)?))
    }

    #[must_use]
    pub fn circle(center: Point2, radius: f64) -> Self {
        PathSegment::Circle { center, radius }
    }

    /// Start point. A circle starts (and ends) at its rightmost point.
    #[must_use]
    pub fn start(&self) -> Point2 {
        match self {
            PathSegment::Line { start, .. } => *start,
            PathSegment::Arc(arc) => arc.start,
            PathSegment::Circle { center, radius } => center + Vector2::new(*radius, 0.0),
        }
    }

    #[must_use]
    pub fn end(&self) -> Point2 {
        match self {
            PathSegment::Line { end, .. } => *end,
            PathSegment::Arc(arc) => arc.end,
            PathSegment::Circle { .. } => self.start(),
        }
    }

    #[must_use]
    pub fn is_circle(&self) -> bool {
        matches!(self, PathSegment::Circle { .. })
    }

    /// Applies a point map to every defining point.
    ///
    /// `reflects` must be `true` when `f` reverses orientation, so arc
    /// sweep directions are flipped to trace the same curve.
    #[must_use]
    pub fn map_points(&self, f: impl Fn(Point2) -> Point2, reflects: bool) -> Self {
        match self {
            PathSegment::Line { start, end } => PathSegment::Line {
                start: f(*start),
                end: f(*end),
            },
            PathSegment::Arc(arc) => PathSegment::Arc(ArcSegment {
                start: f(arc.start),
                end: f(arc.end),
                sweep: arc.sweep != reflects,
                ..*arc
            }),
            PathSegment::Circle { center, radius } => PathSegment::Circle {
                center: f(*center),
                radius: *radius,
            },
        }
    }

    /// Approximates the segment by points, from start to end inclusive.
    ///
    /// `tolerance` bounds the deviation between an arc and its chords.
    #[must_use]
    pub fn flatten(&self, tolerance: f64) -> Vec<Point2> {
        match self {
            PathSegment::Line { start, end } => vec![*start, *end],
            PathSegment::Arc(arc) => match arc.parameters() {
                Some((center, start_angle, sweep)) => {
                    sample_arc(&center, arc.radius, start_angle, sweep, tolerance, arc.start, arc.end)
                }
                None => vec![arc.start, arc.end],
            },
            PathSegment::Circle { center, radius } => {
                let start = self.start();
                sample_arc(center, *radius, 0.0, TAU, tolerance, start, start)
            }
        }
    }

    /// Exact axis-aligned extremes of the segment as `(min, max)`.
    #[must_use]
    pub fn extent(&self) -> (Point2, Point2) {
        let mut pts = vec![self.start(), self.end()];
        match self {
            PathSegment::Line { .. } => {}
            PathSegment::Arc(arc) => {
                if let Some((center, start_angle, sweep)) = arc.parameters() {
                    pts.extend(
                        cardinal_angles_within(start_angle, sweep)
                            .map(|angle| arc_point_at(&center, arc.radius, angle, 0.0, 0.0)),
                    );
                }
            }
            PathSegment::Circle { center, radius } => {
                pts.push(center - Vector2::new(*radius, *radius));
                pts.push(center + Vector2::new(*radius, *radius));
            }
        }
        let min = pts.iter().fold(pts[0], |acc, p| acc.inf(p));
        let max = pts.iter().fold(pts[0], |acc, p| acc.sup(p));
        (min, max)
    }
}

/// Samples an arc, pinning the first and last points to the exact endpoints.
fn sample_arc(
    center: &Point2,
    radius: f64,
    start_angle: f64,
    sweep: f64,
    tolerance: f64,
    start: Point2,
    end: Point2,
) -> Vec<Point2> {
    let n = chord_count(radius, sweep, tolerance);
    let mut points = Vec::with_capacity(n as usize + 1);
    points.push(start);
    for j in 1..n {
        let t = f64::from(j) / f64::from(n);
        points.push(arc_point_at(center, radius, start_angle, sweep, t));
    }
    points.push(end);
    points
}

/// Upper bound on chords per arc when flattening.
const MAX_CHORDS: u32 = 1 << 16;

/// Chords needed so none strays more than `tolerance` from the arc, with
/// at least one chord per started quarter turn.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn chord_count(radius: f64, sweep: f64, tolerance: f64) -> u32 {
    let quarter_turns = (sweep.abs() / FRAC_PI_2).ceil().max(1.0);
    if tolerance <= 0.0 || tolerance >= radius {
        return quarter_turns as u32;
    }
    // A chord spanning angle `a` sits r * (1 - cos(a / 2)) inside the arc.
    let max_step = 2.0 * (1.0 - tolerance / radius).acos();
    let n = (sweep.abs() / max_step).ceil().max(quarter_turns);
    n.min(f64::from(MAX_CHORDS)) as u32
}

/// Multiples of 90 degrees strictly inside the swept angle range.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn cardinal_angles_within(start_angle: f64, sweep: f64) -> impl Iterator<Item = f64> {
    let (lo, hi) = if sweep >= 0.0 {
        (start_angle, start_angle + sweep)
    } else {
        (start_angle + sweep, start_angle)
    };
    let first = (lo / FRAC_PI_2).floor() as i64 + 1;
    (first..)
        .map(|k| k as f64 * FRAC_PI_2)
        .take_while(move |angle| *angle < hi)
}
