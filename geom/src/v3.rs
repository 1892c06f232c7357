//! Arithmetic on 3-vectors stored as plain arrays.
//!
//! Lines and planes keep their anchors and directions as `[f64; 3]` so that
//! they can be `Copy` and never fail a dimension check internally.

use la::math::{Angle, Matrix, Vector, acos};
use la::{Error, Result};

pub type V3 = [f64; 3];

pub fn add([a, b, c]: V3, [x, y, z]: V3) -> V3 {
    [a + x, b + y, c + z]
}

pub fn sub([a, b, c]: V3, [x, y, z]: V3) -> V3 {
    [a - x, b - y, c - z]
}

pub fn scale([a, b, c]: V3, k: f64) -> V3 {
    [a * k, b * k, c * k]
}

pub fn dot([a, b, c]: V3, [x, y, z]: V3) -> f64 {
    a * x + b * y + c * z
}

pub fn cross([a, b, c]: V3, [x, y, z]: V3) -> V3 {
    [b * z - c * y, c * x - a * z, a * y - b * x]
}

pub fn len(v: V3) -> f64 {
    use la::math::float::f64;
    f64::sqrt(dot(v, v))
}

/// Returns `v` scaled to unit length, or `None` if `v` is zero.
pub fn normalize(v: V3) -> Option<V3> {
    let len = len(v);
    (len != 0.0).then(|| scale(v, 1.0 / len))
}

/// Returns the angle between two unit vectors.
pub fn angle(a: V3, b: V3) -> Angle {
    acos(dot(a, b))
}

/// Returns whether two unit vectors point in the same or opposite
/// directions, to within `eps` radians.
pub fn is_parallel(a: V3, b: V3, eps: f64) -> bool {
    use la::math::ApproxEq;
    let th = angle(a, b);
    th.approx_eq_eps(&Angle::ZERO, &eps)
        || th.approx_eq_eps(&Angle::STRAIGHT, &eps)
}

/// Mirrors `v` in the plane through the origin with unit normal `n`.
pub fn mirror(v: V3, n: V3) -> V3 {
    sub(v, scale(n, 2.0 * dot(v, n)))
}

/// Returns the 3×3 matrix `m` applied to `v`.
pub fn apply(m: &Matrix, v: V3) -> V3 {
    let mut rows = m.as_slice().chunks_exact(3);
    [(); 3].map(|_| rows.next().map_or(0.0, |r| dot([r[0], r[1], r[2]], v)))
}

/// Returns the point `p` as an array, lifting a 2-D point to `z = 0`.
///
/// # Errors
/// [`Error::WrongDimension`] unless `p` is 2- or 3-dimensional.
pub fn point(p: &Vector) -> Result<V3> {
    match *p.to_3d()?.as_slice() {
        [x, y, z] => Ok([x, y, z]),
        _ => Err(Error::WrongDimension {
            expected: 3,
            actual: p.dimensions(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use la::assert_approx_eq;
    use la::math::{degs, vec2, vec3};

    use super::*;

    #[test]
    fn cross_of_axes() {
        assert_eq!(cross([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]), [0.0, 0.0, 1.0]);
        assert_eq!(cross([0.0, 1.0, 0.0], [1.0, 0.0, 0.0]), [0.0, 0.0, -1.0]);
    }

    #[test]
    fn normalize_zero() {
        assert_eq!(normalize([0.0; 3]), None);
        assert_approx_eq!(normalize([3.0, 0.0, 4.0]), Some([0.6, 0.0, 0.8]));
    }

    #[test]
    fn parallel_and_antiparallel() {
        let x = [1.0, 0.0, 0.0];
        assert!(is_parallel(x, x, 1e-6));
        assert!(is_parallel(x, [-1.0, 0.0, 0.0], 1e-6));
        assert!(!is_parallel(x, [0.0, 1.0, 0.0], 1e-6));
        assert_approx_eq!(angle(x, [0.0, 1.0, 0.0]), degs(90.0));
    }

    #[test]
    fn mirror_in_xy() {
        let n = [0.0, 0.0, 1.0];
        assert_eq!(mirror([1.0, 2.0, 3.0], n), [1.0, 2.0, -3.0]);
    }

    #[test]
    fn apply_rotation() {
        let r = Matrix::rotation_about_unit(degs(90.0), [0.0, 0.0, 1.0]);
        assert_approx_eq!(apply(&r, [1.0, 0.0, 0.0]), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn point_lifts_2d() {
        assert_eq!(point(&vec2(1.0, 2.0)), Ok([1.0, 2.0, 0.0]));
        assert_eq!(point(&vec3(1.0, 2.0, 3.0)), Ok([1.0, 2.0, 3.0]));
        assert_eq!(
            point(&Vector::zero(4)),
            Err(Error::WrongDimension {
                expected: 3,
                actual: 4
            })
        );
    }
}
