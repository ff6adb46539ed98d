use std::fmt;

use crate::error::{DirectionError, Result};
use crate::math::{approximately_equal, Vector2, TOLERANCE};

/// One of the four canonical unit directions of a 2D frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction2D {
    Up,
    Down,
    Left,
    Right,
}

impl Direction2D {
    /// All directions, positive before negative along each axis.
    pub const ALL: [Direction2D; 4] = [
        Direction2D::Right,
        Direction2D::Left,
        Direction2D::Up,
        Direction2D::Down,
    ];

    /// Looks up the canonical direction equal to `v` (within [`TOLERANCE`]).
    ///
    /// # Errors
    ///
    /// Returns `DirectionError::NotCanonical` if `v` is not one of the four directions.
    pub fn from_vector(v: &Vector2) -> Result<Direction2D> {
        Direction2D::ALL
            .into_iter()
            .find(|d| approximately_equal(&d.vector(), v, TOLERANCE))
            .ok_or_else(|| DirectionError::NotCanonical(vec![v.x, v.y]).into())
    }

    #[must_use]
    pub fn is_dir(v: &Vector2) -> bool {
        Direction2D::from_vector(v).is_ok()
    }

    /// Returns `true` for `RIGHT` and `UP` only.
    #[must_use]
    pub fn is_axis(v: &Vector2) -> bool {
        Direction2D::from_vector(v)
            .is_ok_and(|d| matches!(d, Direction2D::Right | Direction2D::Up))
    }

    #[must_use]
    pub fn vector(self) -> Vector2 {
        match self {
            Direction2D::Up => Vector2::new(0.0, 1.0),
            Direction2D::Down => Vector2::new(0.0, -1.0),
            Direction2D::Left => Vector2::new(-1.0, 0.0),
            Direction2D::Right => Vector2::new(1.0, 0.0),
        }
    }

    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction2D::Left | Direction2D::Right)
    }

    #[must_use]
    pub fn opposite(self) -> Direction2D {
        match self {
            Direction2D::Up => Direction2D::Down,
            Direction2D::Down => Direction2D::Up,
            Direction2D::Left => Direction2D::Right,
            Direction2D::Right => Direction2D::Left,
        }
    }

    /// Symbolic name, e.g. `LEFT`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Direction2D::Up => "UP",
            Direction2D::Down => "DOWN",
            Direction2D::Left => "LEFT",
            Direction2D::Right => "RIGHT",
        }
    }

    /// The component of `v` perpendicular to this direction's axis.
    #[must_use]
    pub fn project_along_axis(self, v: &Vector2) -> f64 {
        if self.is_horizontal() {
            v.y
        } else {
            v.x
        }
    }

    /// Rotates by a multiple of 90 degrees, counter-clockwise.
    #[must_use]
    pub fn rotated(self, quarter_turns: i32) -> Direction2D {
        const CCW: [Direction2D; 4] = [
            Direction2D::Right,
            Direction2D::Up,
            Direction2D::Left,
            Direction2D::Down,
        ];
        let start = match self {
            Direction2D::Right => 0,
            Direction2D::Up => 1,
            Direction2D::Left => 2,
            Direction2D::Down => 3,
        };
        #[allow(clippy::cast_sign_loss)]
        let turns = quarter_turns.rem_euclid(4) as usize;
        CCW[(start + turns) % 4]
    }
}

impl fmt::Display for Direction2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Direction2D> for Vector2 {
    fn from(d: Direction2D) -> Self {
        d.vector()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn membership_tests() {
        assert!(Direction2D::is_dir(&Vector2::new(0.0, -1.0)));
        assert!(!Direction2D::is_dir(&Vector2::new(0.7, 0.7)));
        assert!(Direction2D::is_axis(&Vector2::new(0.0, 1.0)));
        assert!(!Direction2D::is_axis(&Vector2::new(-1.0, 0.0)));
        assert!(Direction2D::from_vector(&Vector2::new(2.0, 0.0)).is_err());
    }

    #[test]
    fn project_returns_perpendicular_component() {
        let v = Vector2::new(4.0, 9.0);
        assert!((Direction2D::Up.project_along_axis(&v) - 4.0).abs() < TOLERANCE);
        assert!((Direction2D::Left.project_along_axis(&v) - 9.0).abs() < TOLERANCE);
    }

    #[test]
    fn rotation_by_quarter_turns() {
        assert_eq!(Direction2D::Right.rotated(1), Direction2D::Up);
        assert_eq!(Direction2D::Up.rotated(1), Direction2D::Left);
        assert_eq!(Direction2D::Left.rotated(1), Direction2D::Down);
        assert_eq!(Direction2D::Down.rotated(1), Direction2D::Right);
        assert_eq!(Direction2D::Right.rotated(-1), Direction2D::Down);
        for d in Direction2D::ALL {
            let v = crate::math::rotate_2d(&d.vector(), 90.0);
            assert_eq!(Direction2D::from_vector(&v).unwrap(), d.rotated(1));
            assert_eq!(d.rotated(2), d.opposite());
            assert_eq!(d.rotated(4), d);
        }
    }
}
