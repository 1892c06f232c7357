//! Small linear systems solved by matrix inversion.

use la::math::{Matrix, Vector};
use la::{Error, Result};
use log::{debug, trace};

use crate::v3::dot;

/// Solves the system `m · x = rhs` for `x`, where `m` is a 2×2 matrix.
///
/// # Errors
/// [`Error::NotSquare`] or [`Error::DimensionMismatch`] if `m` is not 2×2,
/// and [`Error::Singular`] if `m` is singular.
///
/// # Examples
/// ```
/// use la::mat;
/// use linea_geom::solve::solve_2x2;
///
/// // x + y = 3, x - y = 1
/// let m = mat![1.0, 1.0; 1.0, -1.0];
/// assert_eq!(solve_2x2(&m, [3.0, 1.0]), Ok([2.0, 1.0]));
/// ```
pub fn solve_2x2(m: &Matrix, rhs: [f64; 2]) -> Result<[f64; 2]> {
    let x = m.inverse()?.mul_vec(&Vector::from(rhs))?;
    match *x.as_slice() {
        [x, y] => Ok([x, y]),
        _ => Err(Error::DimensionMismatch {
            left: m.dimensions(),
            right: (2, 1),
        }),
    }
}

/// Returns a point lying on both the plane through `a` with normal `n` and
/// the plane through `b` with normal `o`.
///
/// The point has one coordinate equal to zero. The system
/// `n · p = n · a, o · p = o · b` is reduced to two unknowns by fixing one
/// coordinate of `p` at zero. Of the three resulting 2×2 systems, the one
/// whose determinant has the largest magnitude is solved; a minor that is
/// singular in exact arithmetic may still round to a tiny nonzero
/// determinant. Returns `None` if all three minors are exactly singular,
/// which can only happen if the normals are parallel.
///
/// # Examples
/// ```
/// use linea_geom::solve::plane_intersection_anchor;
///
/// // The planes x = 1 and y = 2 meet on a line through (1, 2, 0)
/// let p = plane_intersection_anchor(
///     [1.0, 0.0, 0.0], [1.0, 0.0, 0.0],
///     [0.0, 1.0, 0.0], [0.0, 2.0, 0.0],
/// );
/// assert_eq!(p, Some([1.0, 2.0, 0.0]));
/// ```
pub fn plane_intersection_anchor(
    n: [f64; 3],
    a: [f64; 3],
    o: [f64; 3],
    b: [f64; 3],
) -> Option<[f64; 3]> {
    use la::math::float::f64;

    let best = (0..3)
        .filter_map(|k| {
            let (i, j) = (k, (k + 1) % 3);
            let m = Matrix::from([[n[i], n[j]], [o[i], o[j]]]);
            let det = f64::abs(m.determinant().ok()?);
            trace!("minor over axes {} and {}: |det| = {det}", i + 1, j + 1);
            (det > 0.0).then_some((k, m, det))
        })
        .max_by(|(.., d), (.., e)| d.total_cmp(e));

    let Some((k, m, _)) = best else {
        debug!("no nonsingular minor for plane normals {n:?} and {o:?}");
        return None;
    };
    let (i, j) = (k, (k + 1) % 3);
    let zero = (k + 2) % 3;
    trace!("solving over axes {} and {}, axis {} zero", i + 1, j + 1, zero + 1);

    let [x, y] = solve_2x2(&m, [dot(n, a), dot(o, b)]).ok()?;
    let mut p = [0.0; 3];
    p[i] = x;
    p[j] = y;
    Some(p)
}
