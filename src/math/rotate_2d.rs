use super::{Vector2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Rotates `v` counter-clockwise by `degrees`.
///
/// Multiples of 90 degrees use exact integer-coefficient formulas, so
/// integer-valued coordinates stay exact and rotated outlines still close.
/// Any other angle falls back to the trigonometric rotation.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn rotate_2d(v: &Vector2, degrees: f64) -> Vector2 {
    let deg = degrees.rem_euclid(360.0);

    if deg == 0.0 {
        *v
    } else if deg == 90.0 {
        Vector2::new(-v.y, v.x)
    } else if deg == 180.0 {
        -v
    } else if deg == 270.0 {
        Vector2::new(v.y, -v.x)
    } else {
        let (s, c) = deg.to_radians().sin_cos();
        Vector2::new(v.x * c - v.y * s, v.x * s + v.y * c)
    }
}

/// Returns the unit vector 90 degrees counter-clockwise from `v`.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` if `v` has zero length.
pub fn orthonormal(v: &Vector2) -> Result<Vector2> {
    let len = v.norm();
    if len < TOLERANCE {
        return Err(GeometryError::Degenerate("cannot orient along a zero-length vector".into()).into());
    }
    Ok(Vector2::new(-v.y, v.x) / len)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn right_angles_are_exact() {
        let v = Vector2::new(3.0, -7.0);
        assert_eq!(rotate_2d(&v, 0.0), v);
        assert_eq!(rotate_2d(&v, 90.0), Vector2::new(7.0, 3.0));
        assert_eq!(rotate_2d(&v, 180.0), Vector2::new(-3.0, 7.0));
        assert_eq!(rotate_2d(&v, 270.0), Vector2::new(-7.0, -3.0));
    }

    #[test]
    fn angles_wrap_modulo_360() {
        let v = Vector2::new(2.0, 5.0);
        assert_eq!(rotate_2d(&v, 360.0), v);
        assert_eq!(rotate_2d(&v, -90.0), rotate_2d(&v, 270.0));
        assert_eq!(rotate_2d(&v, 450.0), rotate_2d(&v, 90.0));
    }

    #[test]
    fn compositions_return_to_identity_exactly() {
        for &(x, y) in &[(1.0, 0.0), (-4.0, 9.0), (123.0, -456.0), (0.0, 0.0)] {
            let v = Vector2::new(x, y);

            let mut r = v;
            for _ in 0..4 {
                r = rotate_2d(&r, 90.0);
            }
            assert_eq!(r, rotate_2d(&v, 0.0));

            let r = rotate_2d(&rotate_2d(&v, 180.0), 180.0);
            assert_eq!(r, v);

            let r = rotate_2d(&rotate_2d(&v, 90.0), 270.0);
            assert_eq!(r, v);

            let r = rotate_2d(&rotate_2d(&rotate_2d(&v, 90.0), 180.0), 90.0);
            assert_eq!(r, v);
        }
    }

    #[test]
    fn arbitrary_angle_uses_trigonometry() {
        let r = rotate_2d(&Vector2::new(1.0, 0.0), 45.0);
        let h = std::f64::consts::FRAC_1_SQRT_2;
        assert_abs_diff_eq!(r.x, h, epsilon = 1e-12);
        assert_abs_diff_eq!(r.y, h, epsilon = 1e-12);
    }

    #[test]
    fn orthonormal_is_ccw_unit() {
        let on = orthonormal(&Vector2::new(0.0, -2.0)).unwrap();
        assert_abs_diff_eq!(on.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(on.y, 0.0, epsilon = 1e-12);

        let on = orthonormal(&Vector2::new(3.0, 4.0)).unwrap();
        assert_abs_diff_eq!(on.norm(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(on.x, -0.8, epsilon = 1e-12);
        assert_abs_diff_eq!(on.y, 0.6, epsilon = 1e-12);
    }

    #[test]
    fn orthonormal_zero_vector_fails() {
        assert!(orthonormal(&Vector2::zeros()).is_err());
    }
}
