//! Rotation, translation, scaling, and projection matrices.
//!
//! All matrices here act on *column* vectors: a point `p` is transformed
//! by computing `M × p`. Homogeneous transforms of 2-D points are 3×3 and
//! those of 3-D points are 4×4, with the translation in the last column.

use alloc::vec::Vec;

#[cfg(feature = "fp")]
use crate::math::angle::Angle;
use crate::math::mat::Matrix;
use crate::math::vec::Vector;
use crate::{Error, Result};

impl Matrix {
    /// Returns a 2×2 matrix that rotates 2-vectors counterclockwise
    /// by `angle`.
    ///
    /// # Examples
    /// ```
    /// use linea_core::assert_approx_eq;
    /// use linea_core::math::{Matrix, degs, vec2};
    ///
    /// let r = Matrix::rotation(degs(90.0));
    /// assert_approx_eq!(r.mul_vec(&vec2(1.0, 0.0)).unwrap(), vec2(0.0, 1.0));
    /// ```
    #[cfg(feature = "fp")]
    pub fn rotation(angle: Angle) -> Self {
        let (s, c) = angle.sin_cos();
        [[c, -s], [s, c]].into()
    }

    /// Returns a 3×3 matrix that rotates 3-vectors by `angle` about `axis`.
    ///
    /// The rotation is counterclockwise when looking from the tip of `axis`
    /// towards the origin. `axis` need not be of unit length.
    ///
    /// # Errors
    /// [`Error::WrongDimension`] if `axis` is not 3-dimensional, and
    /// [`Error::ZeroVector`] if it has zero length.
    #[cfg(feature = "fp")]
    pub fn rotation_about(angle: Angle, axis: &Vector) -> Result<Self> {
        let axis = axis.as_3()?;
        if axis == [0.0; 3] {
            return Err(Error::ZeroVector);
        }
        let unit = Vector::from(axis).to_unit_vector().as_3()?;
        Ok(Self::rotation_about_unit(angle, unit))
    }

    /// Returns a 3×3 matrix that rotates 3-vectors by `angle` about the
    /// unit vector `axis`.
    ///
    /// The length of `axis` is not checked. If it is not one, the result is
    /// not a rotation matrix.
    ///
    /// # Examples
    /// ```
    /// use linea_core::assert_approx_eq;
    /// use linea_core::math::{Matrix, degs, vec3};
    ///
    /// let r = Matrix::rotation_about_unit(degs(90.0), [0.0, 0.0, 1.0]);
    /// let v = r.mul_vec(&vec3(1.0, 0.0, 0.0)).unwrap();
    /// assert_approx_eq!(v, vec3(0.0, 1.0, 0.0));
    /// ```
    #[cfg(feature = "fp")]
    pub fn rotation_about_unit(angle: Angle, [x, y, z]: [f64; 3]) -> Self {
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;
        [
            [t * x * x + c, t * x * y - s * z, t * x * z + s * y],
            [t * x * y + s * z, t * y * y + c, t * y * z - s * x],
            [t * x * z - s * y, t * y * z + s * x, t * z * z + c],
        ]
        .into()
    }

    /// Returns the elements of `self` in column-major order, as expected by
    /// graphics APIs such as OpenGL.
    pub fn flatten(&self) -> Vec<f64> {
        let (rows, cols) = self.dimensions();
        (0..cols)
            .flat_map(|j| (0..rows).map(move |i| (i, j)))
            .map(|(i, j)| self.as_slice()[i * cols + j])
            .collect()
    }

    /// Returns `self` embedded in the upper left corner of the 4×4 identity
    /// matrix, or `None` if `self` has more than four rows or columns.
    pub fn ensure_4x4(&self) -> Option<Self> {
        let (rows, cols) = self.dimensions();
        if rows > 4 || cols > 4 {
            return None;
        }
        Some(Self::identity(4).map_indexed(|x, i, j| {
            self.e(i, j).unwrap_or(x)
        }))
    }

    /// Returns the upper left 3×3 submatrix of the 4×4 matrix `self`, or
    /// `None` if `self` is not 4×4.
    pub fn make_3x3(&self) -> Option<Self> {
        if self.dimensions() != (4, 4) {
            return None;
        }
        self.minor(1, 1, 3, 3)
    }
}

/// Returns a 3×3 matrix that rotates 3-vectors by `a` about the x axis.
#[cfg(feature = "fp")]
pub fn rotate_x(a: Angle) -> Matrix {
    let (s, c) = a.sin_cos();
    [
        [1.0, 0.0, 0.0], //
        [0.0, c, -s],
        [0.0, s, c],
    ]
    .into()
}

/// Returns a 3×3 matrix that rotates 3-vectors by `a` about the y axis.
#[cfg(feature = "fp")]
pub fn rotate_y(a: Angle) -> Matrix {
    let (s, c) = a.sin_cos();
    [
        [c, 0.0, s], //
        [0.0, 1.0, 0.0],
        [-s, 0.0, c],
    ]
    .into()
}

/// Returns a 3×3 matrix that rotates 3-vectors by `a` about the z axis.
#[cfg(feature = "fp")]
pub fn rotate_z(a: Angle) -> Matrix {
    let (s, c) = a.sin_cos();
    [
        [c, -s, 0.0], //
        [s, c, 0.0],
        [0.0, 0.0, 1.0],
    ]
    .into()
}

/// Returns a homogeneous matrix that translates points by `t`.
///
/// A 2-vector yields a 3×3 matrix and a 3-vector a 4×4 matrix, with the
/// components of `t` in the last column.
///
/// # Errors
/// [`Error::WrongDimension`] if `t` is neither 2- nor 3-dimensional.
///
/// # Examples
/// ```
/// use linea_core::math::{transform::translation, vec3};
///
/// let m = translation(&vec3(1.0, 2.0, 3.0)).unwrap();
/// assert_eq!(m.dimensions(), (4, 4));
/// assert_eq!(m.e(2, 4), Some(2.0));
/// ```
pub fn translation(t: &Vector) -> Result<Matrix> {
    let n = t.dimensions();
    if !(2..=3).contains(&n) {
        return Err(Error::WrongDimension {
            expected: 3,
            actual: n,
        });
    }
    Ok(Matrix::identity(n + 1).map_indexed(|x, i, j| {
        if j == n + 1 && i <= n {
            t.e(i).unwrap_or(x)
        } else {
            x
        }
    }))
}

/// Returns a homogeneous matrix that scales each axis by the corresponding
/// component of `s`.
///
/// An n-vector yields an (n+1)×(n+1) matrix.
pub fn scaling(s: &Vector) -> Matrix {
    let n = s.dimensions();
    Matrix::identity(n + 1).map_indexed(|x, i, j| {
        if i == j && i <= n { s.e(i).unwrap_or(x) } else { x }
    })
}

/// Returns an orthographic projection matrix mapping the box bounded by
/// the given planes to the cube [-1, 1]³.
pub fn orthographic(
    left: f64,
    right: f64,
    bottom: f64,
    top: f64,
    near: f64,
    far: f64,
) -> Matrix {
    let tx = -(right + left) / (right - left);
    let ty = -(top + bottom) / (top - bottom);
    let tz = -(far + near) / (far - near);
    [
        [2.0 / (right - left), 0.0, 0.0, tx],
        [0.0, 2.0 / (top - bottom), 0.0, ty],
        [0.0, 0.0, -2.0 / (far - near), tz],
        [0.0, 0.0, 0.0, 1.0],
    ]
    .into()
}

/// Returns a perspective projection matrix for the view frustum bounded by
/// the given planes.
///
/// The `left`, `right`, `bottom`, and `top` bounds are measured on the near
/// plane.
pub fn frustum(
    left: f64,
    right: f64,
    bottom: f64,
    top: f64,
    near: f64,
    far: f64,
) -> Matrix {
    let x = 2.0 * near / (right - left);
    let y = 2.0 * near / (top - bottom);
    let a = (right + left) / (right - left);
    let b = (top + bottom) / (top - bottom);
    let c = -(far + near) / (far - near);
    let d = -2.0 * far * near / (far - near);
    [
        [x, 0.0, a, 0.0],
        [0.0, y, b, 0.0],
        [0.0, 0.0, c, d],
        [0.0, 0.0, -1.0, 0.0],
    ]
    .into()
}

/// Returns a symmetric perspective projection matrix with vertical field of
/// view `fovy` and width-to-height ratio `aspect`.
///
/// # Panics
/// If `near` is not positive or `far` is not greater than `near`.
#[cfg(feature = "fp")]
pub fn perspective(fovy: Angle, aspect: f64, near: f64, far: f64) -> Matrix {
    assert!(0.0 < near, "near must be positive, was {near}");
    assert!(near < far, "far must be greater than near");
    let ymax = near * (fovy / 2.0).tan();
    let xmax = ymax * aspect;
    frustum(-xmax, xmax, -ymax, ymax, near, far)
}

/// Returns a view matrix for a camera at `eye` looking towards `center`,
/// with `up` pointing approximately upwards.
///
/// # Errors
/// [`Error::WrongDimension`] unless all arguments are 3-dimensional, and
/// [`Error::ZeroVector`] if `eye` equals `center` or the view direction is
/// parallel to `up`.
#[cfg(feature = "fp")]
pub fn look_at(eye: &Vector, center: &Vector, up: &Vector) -> Result<Matrix> {
    let unit = |v: Vector| -> Result<Vector> {
        if v.modulus_sqr() == 0.0 {
            return Err(Error::ZeroVector);
        }
        Ok(v.to_unit_vector())
    };
    let [ex, ey, ez] = eye.as_3()?;
    let z = unit(eye.subtract(center)?)?;
    let x = unit(up.cross(&z)?)?;
    let y = unit(z.cross(&x)?)?;

    let [x1, x2, x3] = x.as_3()?;
    let [y1, y2, y3] = y.as_3()?;
    let [z1, z2, z3] = z.as_3()?;
    let orient: Matrix = [
        [x1, x2, x3, 0.0],
        [y1, y2, y3, 0.0],
        [z1, z2, z3, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
    .into();
    let shift = translation(&Vector::from([-ex, -ey, -ez]))?;
    orient.mul_mat(&shift)
}
