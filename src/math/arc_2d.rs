//! 2D arc math for endpoint-parameterised arcs.
//!
//! An arc is given by its endpoints, a radius and two flags:
//! - `large_arc`: take the arc spanning more than 180 degrees
//! - `sweep`: `true` runs counter-clockwise (increasing angle), `false` clockwise
//!
//! Of the (at most) two circles of that radius through both endpoints,
//! the flags select exactly one arc.
use std::f64::consts::TAU;

use super::{Point2, Vector2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Computes the center of an endpoint-parameterised arc.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` for coincident endpoints and
/// `GeometryError::ArcRadiusTooSmall` if the radius is shorter than half
/// the chord (no such arc exists).
pub fn arc_center(
    start: &Point2,
    end: &Point2,
    radius: f64,
    large_arc: bool,
    sweep: bool,
) -> Result<Point2> {
    let chord = end - start;
    let chord_len = chord.norm();
    if chord_len < TOLERANCE {
        return Err(GeometryError::Degenerate("arc endpoints coincide".into()).into());
    }

    let half_chord = chord_len * 0.5;
    if radius < half_chord - TOLERANCE {
        return Err(GeometryError::ArcRadiusTooSmall { radius, half_chord }.into());
    }

    // Distance from chord midpoint to center; clamped for semicircles.
    let offset = (radius * radius - half_chord * half_chord).max(0.0).sqrt();
    let left = Vector2::new(-chord.y, chord.x) / chord_len;
    let side = if large_arc == sweep { -1.0 } else { 1.0 };

    Ok(Point2::from((start.coords + end.coords) * 0.5) + left * (side * offset))
}

/// Returns `(start_angle, sweep_angle)` of an arc around `center`.
///
/// The sweep is positive for counter-clockwise arcs and lies in `(0, 2π]`
/// (or `[-2π, 0)` when clockwise).
#[must_use]
pub fn arc_angles(start: &Point2, end: &Point2, center: &Point2, sweep: bool) -> (f64, f64) {
    let start_angle = (start.y - center.y).atan2(start.x - center.x);
    let end_angle = (end.y - center.y).atan2(end.x - center.x);

    let mut delta = end_angle - start_angle;
    if sweep {
        if delta <= 0.0 {
            delta += TAU;
        }
    } else if delta >= 0.0 {
        delta -= TAU;
    }

    (start_angle, delta)
}

/// Evaluates a point on an arc at parameter `t` in `[0, 1]`.
#[must_use]
pub fn arc_point_at(center: &Point2, radius: f64, start_angle: f64, sweep: f64, t: f64) -> Point2 {
    let (s, c) = (start_angle + sweep * t).sin_cos();
    Point2::new(center.x + radius * c, center.y + radius * s)
}
