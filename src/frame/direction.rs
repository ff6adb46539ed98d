use std::fmt;
use std::str::FromStr;

use super::Direction2D;
use crate::error::{DirectionError, Result};
use crate::math::{approximately_equal, Vector2, Vector3, TOLERANCE};

/// One of the three orthogonal axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in canonical order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// The positive direction along this axis (`RIGHT`, `UP` or `FRONT`).
    #[must_use]
    pub fn positive(self) -> Direction {
        match self {
            Axis::X => Direction::Right,
            Axis::Y => Direction::Up,
            Axis::Z => Direction::Front,
        }
    }

    /// Component index of this axis in a 3-vector.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Symbolic name, one of `X`, `Y`, `Z`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }

    /// The two axes not equal to `self`, in canonical order.
    #[must_use]
    pub fn others(self) -> [Axis; 2] {
        match self {
            Axis::X => [Axis::Y, Axis::Z],
            Axis::Y => [Axis::X, Axis::Z],
            Axis::Z => [Axis::X, Axis::Y],
        }
    }

    /// Maps a direction name (`"UP"`, `"left"`, ...) to its axis.
    ///
    /// # Errors
    ///
    /// Returns `DirectionError::UnknownName` for anything but the six names.
    pub fn from_direction_name(name: &str) -> Result<Axis> {
        Ok(name.parse::<Direction>()?.axis())
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the six canonical unit directions.
///
/// `X` runs `LEFT → RIGHT`, `Y` runs `DOWN → UP` and `Z` runs `BACK → FRONT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    Front,
    Back,
}

impl Direction {
    /// All directions, positive before negative along each axis.
    pub const ALL: [Direction; 6] = [
        Direction::Right,
        Direction::Left,
        Direction::Up,
        Direction::Down,
        Direction::Front,
        Direction::Back,
    ];

    /// Builds the direction pointing along `axis`, positive or negative.
    #[must_use]
    pub fn along(axis: Axis, positive: bool) -> Direction {
        let d = axis.positive();
        if positive {
            d
        } else {
            d.opposite()
        }
    }

    /// Looks up the canonical direction equal to `v` (within [`TOLERANCE`]).
    ///
    /// # Errors
    ///
    /// Returns `DirectionError::NotCanonical` if `v` is not one of the six directions.
    pub fn from_vector(v: &Vector3) -> Result<Direction> {
        Direction::ALL
            .into_iter()
            .find(|d| approximately_equal(&d.vector(), v, TOLERANCE))
            .ok_or_else(|| DirectionError::NotCanonical(v.iter().copied().collect()).into())
    }

    /// Returns `true` if `v` is one of the six canonical directions.
    #[must_use]
    pub fn is_dir(v: &Vector3) -> bool {
        Direction::from_vector(v).is_ok()
    }

    /// Returns `true` if `v` is one of the positive axis directions.
    #[must_use]
    pub fn is_axis(v: &Vector3) -> bool {
        Direction::from_vector(v).is_ok_and(Direction::is_positive)
    }

    /// Unit vector of this direction.
    #[must_use]
    pub fn vector(self) -> Vector3 {
        let mut v = Vector3::zeros();
        v[self.axis().index()] = self.sign();
        v
    }

    /// The axis this direction runs along.
    #[must_use]
    pub fn axis(self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::X,
            Direction::Up | Direction::Down => Axis::Y,
            Direction::Front | Direction::Back => Axis::Z,
        }
    }

    /// The axis name (`X`, `Y`, `Z`) of this direction.
    #[must_use]
    pub fn axis_name(self) -> &'static str {
        self.axis().name()
    }

    #[must_use]
    pub fn is_positive(self) -> bool {
        matches!(self, Direction::Right | Direction::Up | Direction::Front)
    }

    fn sign(self) -> f64 {
        if self.is_positive() {
            1.0
        } else {
            -1.0
        }
    }

    /// The absolute value of this direction, as its positive axis direction.
    #[must_use]
    pub fn abs(self) -> Direction {
        self.axis().positive()
    }

    #[must_use]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Front => Direction::Back,
            Direction::Back => Direction::Front,
        }
    }

    /// Symbolic name, e.g. `UP`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
            Direction::Front => "FRONT",
            Direction::Back => "BACK",
        }
    }

    /// The four directions perpendicular to `self`.
    ///
    /// With `j`, `k` the remaining axes in canonical order, returns
    /// `[+j, -j, +k, -k]`. Edge enumeration relies on this order.
    #[must_use]
    pub fn perpendicular_directions(self) -> [Direction; 4] {
        let [j, k] = self.axis().others();
        [
            j.positive(),
            j.positive().opposite(),
            k.positive(),
            k.positive().opposite(),
        ]
    }

    /// The two axes (as positive directions) not parallel to `self`.
    #[must_use]
    pub fn perpendicular_axes(self) -> [Direction; 2] {
        let [j, k] = self.axis().others();
        [j.positive(), k.positive()]
    }

    /// Drops the component of `v` parallel to this direction's axis,
    /// keeping the remaining two in their original order.
    #[must_use]
    pub fn project_along_axis(self, v: &Vector3) -> Vector2 {
        let [j, k] = self.axis().others();
        Vector2::new(v[j.index()], v[k.index()])
    }

    /// The 2D counterpart of a direction lying in the XY-plane.
    ///
    /// # Errors
    ///
    /// Returns `DirectionError::NotCanonical` for `FRONT` and `BACK`.
    pub fn to_2d(self) -> Result<Direction2D> {
        match self {
            Direction::Up => Ok(Direction2D::Up),
            Direction::Down => Ok(Direction2D::Down),
            Direction::Left => Ok(Direction2D::Left),
            Direction::Right => Ok(Direction2D::Right),
            Direction::Front | Direction::Back => {
                Err(DirectionError::NotCanonical(self.vector().iter().copied().collect()).into())
            }
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = DirectionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| DirectionError::UnknownName(s.to_owned()))
    }
}

impl TryFrom<Vector3> for Direction {
    type Error = crate::error::KerfcutError;

    fn try_from(v: Vector3) -> Result<Self> {
        Direction::from_vector(&v)
    }
}

impl From<Direction> for Vector3 {
    fn from(d: Direction) -> Self {
        d.vector()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn vectors_have_one_unit_component() {
        for d in Direction::ALL {
            let v = d.vector();
            assert_eq!(v.iter().filter(|c| **c != 0.0).count(), 1, "{d}");
            assert!((v.norm() - 1.0).abs() < TOLERANCE);
            assert_eq!(Direction::from_vector(&v).unwrap(), d);
        }
        assert_eq!(Direction::Up.vector(), Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(Direction::Left.vector(), Vector3::new(-1.0, 0.0, 0.0));
        assert_eq!(Direction::Back.vector(), Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn membership_tests() {
        assert!(Direction::is_dir(&Vector3::new(0.0, 0.0, -1.0)));
        assert!(Direction::is_dir(&Vector3::new(0.0, 1.0 + 1e-12, 0.0)));
        assert!(!Direction::is_dir(&Vector3::new(1.0, 1.0, 0.0)));
        assert!(!Direction::is_dir(&Vector3::zeros()));

        assert!(Direction::is_axis(&Vector3::new(1.0, 0.0, 0.0)));
        assert!(!Direction::is_axis(&Vector3::new(-1.0, 0.0, 0.0)));
    }

    #[test]
    fn non_canonical_vector_is_rejected() {
        let err = Direction::from_vector(&Vector3::new(0.5, 0.5, 0.0)).unwrap_err();
        assert!(matches!(
            err,
            crate::error::KerfcutError::Direction(DirectionError::NotCanonical(_))
        ));
    }

    #[test]
    fn names_and_axis_names() {
        assert_eq!(Direction::Front.name(), "FRONT");
        assert_eq!(Direction::Down.axis_name(), "Y");
        assert_eq!(Direction::Left.axis_name(), "X");
        assert_eq!(Direction::Back.axis_name(), "Z");
        assert_eq!(Axis::from_direction_name("RIGHT").unwrap(), Axis::X);
        assert_eq!(Axis::from_direction_name("front").unwrap(), Axis::Z);
        assert!(Axis::from_direction_name("SIDEWAYS").is_err());
        assert_eq!("up".parse::<Direction>().unwrap(), Direction::Up);
    }

    #[test]
    fn perpendicular_directions_order() {
        assert_eq!(
            Direction::Up.perpendicular_directions(),
            [Direction::Right, Direction::Left, Direction::Front, Direction::Back]
        );
        assert_eq!(
            Direction::Left.perpendicular_directions(),
            [Direction::Up, Direction::Down, Direction::Front, Direction::Back]
        );
        assert_eq!(
            Direction::Back.perpendicular_directions(),
            [Direction::Right, Direction::Left, Direction::Up, Direction::Down]
        );
    }

    #[test]
    fn perpendicular_directions_are_orthogonal() {
        for d in Direction::ALL {
            for p in d.perpendicular_directions() {
                assert!(d.vector().dot(&p.vector()).abs() < TOLERANCE);
            }
        }
    }

    #[test]
    fn perpendicular_axes_skip_own_axis() {
        assert_eq!(Direction::Down.perpendicular_axes(), [Direction::Right, Direction::Front]);
        assert_eq!(Direction::Right.perpendicular_axes(), [Direction::Up, Direction::Front]);
        assert_eq!(Direction::Front.perpendicular_axes(), [Direction::Right, Direction::Up]);
    }

    #[test]
    fn project_keeps_remaining_order() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(Direction::Right.project_along_axis(&v), Vector2::new(2.0, 3.0));
        assert_eq!(Direction::Down.project_along_axis(&v), Vector2::new(1.0, 3.0));
        assert_eq!(Direction::Back.project_along_axis(&v), Vector2::new(1.0, 2.0));
    }

    #[test]
    fn opposite_and_abs() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert_eq!(d.vector(), -d.opposite().vector());
            assert!(d.abs().is_positive());
            assert_eq!(Direction::along(d.axis(), d.is_positive()), d);
        }
    }

    #[test]
    fn planar_directions_convert_to_2d() {
        assert_eq!(Direction::Down.to_2d().unwrap(), Direction2D::Down);
        assert!(Direction::Front.to_2d().is_err());
    }
}
