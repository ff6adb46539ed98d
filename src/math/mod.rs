pub mod arc_2d;
pub mod rotate_2d;

pub use rotate_2d::{orthonormal, rotate_2d};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Returns `true` if the Euclidean distance between `a` and `b` is below `epsilon`.
#[must_use]
pub fn approximately_equal<const D: usize>(
    a: &nalgebra::SVector<f64, D>,
    b: &nalgebra::SVector<f64, D>,
    epsilon: f64,
) -> bool {
    (a - b).norm() < epsilon
}

/// Returns `true` if two points coincide within [`TOLERANCE`].
#[must_use]
pub fn points_coincide(a: &Point2, b: &Point2) -> bool {
    approximately_equal(&a.coords, &b.coords, TOLERANCE)
}

/// Elementwise minimum over a set of points. `None` for an empty slice.
#[must_use]
pub fn min_point(points: &[Point2]) -> Option<Point2> {
    let (first, rest) = points.split_first()?;
    Some(rest.iter().fold(*first, |acc, p| acc.inf(p)))
}

/// Elementwise maximum over a set of points. `None` for an empty slice.
#[must_use]
pub fn max_point(points: &[Point2]) -> Option<Point2> {
    let (first, rest) = points.split_first()?;
    Some(rest.iter().fold(*first, |acc, p| acc.sup(p)))
}

/// Maps per-axis mirror flags to scale factors: `true` → `-1`, `false` → `1`.
#[must_use]
pub fn mirror_factors(mirror: [bool; 2]) -> Vector2 {
    let factor = |m: bool| if m { -1.0 } else { 1.0 };
    Vector2::new(factor(mirror[0]), factor(mirror[1]))
}
