//! Dense vectors of `f64` with run-time dimension.

use alloc::{vec, vec::Vec};
use core::fmt::{self, Debug, Display, Formatter};
use core::ops::{Mul, Neg};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "fp")]
use crate::math::angle::{self, Angle};
use crate::math::approx::{ApproxEq, PRECISION};
use crate::math::mat::Matrix;
use crate::math::rand::{Distrib, Uniform, Xorshift64};
use crate::{Error, Result};

/// A vector of `n ≥ 1` real components.
///
/// Vectors are values: every operation returns a new vector and leaves the
/// receiver as it was. Component access through [`e`][Self::e] is 1-based.
///
/// When used as an operand of [`Matrix::multiply`], a vector acts as an
/// `n×1` column matrix.
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<f64>", into = "Vec<f64>")
)]
pub struct Vector(Vec<f64>);

/// Returns a 2-vector with components `x` and `y`.
#[inline]
pub fn vec2(x: f64, y: f64) -> Vector {
    Vector(vec![x, y])
}

/// Returns a 3-vector with components `x`, `y`, and `z`.
#[inline]
pub fn vec3(x: f64, y: f64, z: f64) -> Vector {
    Vector(vec![x, y, z])
}

impl Vector {
    /// Returns a vector with the given components.
    ///
    /// # Errors
    /// [`Error::Empty`] if `els` is empty.
    pub fn new(els: Vec<f64>) -> Result<Self> {
        if els.is_empty() {
            return Err(Error::Empty);
        }
        Ok(Self(els))
    }

    /// Returns the zero vector of dimension `n`.
    ///
    /// # Panics
    /// If `n` is zero.
    pub fn zero(n: usize) -> Self {
        assert!(n > 0, "vector dimension must be nonzero");
        Self(vec![0.0; n])
    }

    /// Returns a vector of dimension `n` whose components are uniformly
    /// distributed in `0.0..1.0`.
    ///
    /// # Panics
    /// If `n` is zero.
    pub fn random(n: usize, rng: &mut Xorshift64) -> Self {
        assert!(n > 0, "vector dimension must be nonzero");
        let d = Uniform(0.0..1.0);
        Self((0..n).map(|_| d.sample(rng)).collect())
    }

    /// Returns the unit vector along the x axis.
    pub fn i() -> Self {
        vec3(1.0, 0.0, 0.0)
    }
    /// Returns the unit vector along the y axis.
    pub fn j() -> Self {
        vec3(0.0, 1.0, 0.0)
    }
    /// Returns the unit vector along the z axis.
    pub fn k() -> Self {
        vec3(0.0, 0.0, 1.0)
    }

    /// Returns the `i`th component of `self`, counting from 1.
    ///
    /// # Examples
    /// ```
    /// use linea_core::math::vec3;
    ///
    /// let v = vec3(1.0, 2.0, 3.0);
    /// assert_eq!(v.e(1), Some(1.0));
    /// assert_eq!(v.e(3), Some(3.0));
    /// assert_eq!(v.e(0), None);
    /// assert_eq!(v.e(4), None);
    /// ```
    #[inline]
    pub fn e(&self, i: usize) -> Option<f64> {
        i.checked_sub(1).and_then(|i| self.0.get(i)).copied()
    }

    /// Returns the number of components in `self`.
    #[inline]
    pub fn dimensions(&self) -> usize {
        self.0.len()
    }

    /// Returns the components of `self` as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Returns the squared Euclidean length of `self`.
    pub fn modulus_sqr(&self) -> f64 {
        self.0.iter().map(|x| x * x).sum()
    }

    /// Returns the Euclidean length of `self`.
    #[cfg(feature = "fp")]
    pub fn modulus(&self) -> f64 {
        use super::float::f64;
        f64::sqrt(self.modulus_sqr())
    }

    /// Returns a vector whose components are `f` applied to those of `self`.
    #[must_use]
    pub fn map(&self, f: impl FnMut(f64) -> f64) -> Self {
        Self(self.0.iter().copied().map(f).collect())
    }

    /// Like [`map`][Self::map], but also passes the 1-based index of each
    /// component to `f`.
    #[must_use]
    pub fn map_indexed(&self, mut f: impl FnMut(f64, usize) -> f64) -> Self {
        Self(
            self.0
                .iter()
                .enumerate()
                .map(|(i, &x)| f(x, i + 1))
                .collect(),
        )
    }

    /// Returns `self` scaled to unit length.
    ///
    /// The zero vector has no direction and is returned as is.
    #[cfg(feature = "fp")]
    #[must_use]
    pub fn to_unit_vector(&self) -> Self {
        let r = self.modulus();
        if r == 0.0 {
            return self.clone();
        }
        self.map(|x| x / r)
    }

    /// Returns the angle between `self` and `other`, in the range [0°, 180°].
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] if the dimensions differ, or
    /// [`Error::ZeroVector`] if either vector has zero length.
    #[cfg(feature = "fp")]
    pub fn angle_from(&self, other: &Self) -> Result<Angle> {
        let dot = self.dot(other)?;
        let norms = self.modulus() * other.modulus();
        if norms == 0.0 {
            return Err(Error::ZeroVector);
        }
        Ok(angle::acos(dot / norms))
    }

    /// Returns whether `self` points in the same direction as `other`.
    #[cfg(feature = "fp")]
    pub fn is_parallel_to(&self, other: &Self) -> bool {
        self.is_parallel_to_eps(other, PRECISION)
    }
    /// Returns whether the angle between `self` and `other` is at most `eps`
    /// radians. Always false if the dimensions differ or either is zero.
    #[cfg(feature = "fp")]
    pub fn is_parallel_to_eps(&self, other: &Self, eps: f64) -> bool {
        self.angle_from(other)
            .is_ok_and(|a| a.to_rads() <= eps)
    }

    /// Returns whether `self` points in the opposite direction to `other`.
    #[cfg(feature = "fp")]
    pub fn is_antiparallel_to(&self, other: &Self) -> bool {
        self.is_antiparallel_to_eps(other, PRECISION)
    }
    /// Returns whether the angle between `self` and `other` is within `eps`
    /// radians of 180°.
    #[cfg(feature = "fp")]
    pub fn is_antiparallel_to_eps(&self, other: &Self, eps: f64) -> bool {
        self.angle_from(other)
            .is_ok_and(|a| a.approx_eq_eps(&Angle::STRAIGHT, &eps))
    }

    /// Returns whether `self` and `other` are orthogonal.
    pub fn is_perpendicular_to(&self, other: &Self) -> bool {
        self.is_perpendicular_to_eps(other, PRECISION)
    }
    /// Returns whether the dot product of `self` and `other` is within `eps`
    /// of zero. Always false if the dimensions differ.
    pub fn is_perpendicular_to_eps(&self, other: &Self, eps: f64) -> bool {
        self.dot(other)
            .is_ok_and(|d| d.approx_eq_eps(&0.0, &eps))
    }

    /// Returns the component-wise sum of `self` and `other`.
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] if the dimensions differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Returns the component-wise difference of `self` and `other`.
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] if the dimensions differ.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Returns `self` multiplied by the scalar `k`.
    #[must_use]
    pub fn mul(&self, k: f64) -> Self {
        self.map(|x| x * k)
    }

    /// Returns the dot product of `self` and `other`.
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] if the dimensions differ.
    pub fn dot(&self, other: &Self) -> Result<f64> {
        self.check_same_dim(other)?;
        Ok(self.0.iter().zip(&other.0).map(|(a, b)| a * b).sum())
    }

    /// Returns the cross product of `self` and `other`.
    ///
    /// # Errors
    /// [`Error::WrongDimension`] unless both vectors are 3-dimensional.
    ///
    /// # Examples
    /// ```
    /// use linea_core::math::Vector;
    ///
    /// let k = Vector::i().cross(&Vector::j()).unwrap();
    /// assert_eq!(k, Vector::k());
    /// ```
    pub fn cross(&self, other: &Self) -> Result<Self> {
        let (a, b) = (self.as_3(), other.as_3());
        let ([a1, a2, a3], [b1, b2, b3]) = (a?, b?);
        Ok(vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        ))
    }

    /// Returns the component of `self` with the largest absolute value.
    ///
    /// The sign of the component is preserved. Of equally large components,
    /// the first one is returned.
    ///
    /// # Examples
    /// ```
    /// use linea_core::math::vec3;
    ///
    /// assert_eq!(vec3(1.0, -4.0, 4.0).max(), -4.0);
    /// ```
    pub fn max(&self) -> f64 {
        use super::float::f64;
        self.0.iter().copied().fold(0.0, |m, x| {
            if f64::abs(x) > f64::abs(m) { x } else { m }
        })
    }

    /// Returns the 1-based index of the first component exactly equal to `x`.
    pub fn index_of(&self, x: f64) -> Option<usize> {
        self.0.iter().position(|&e| e == x).map(|i| i + 1)
    }

    /// Returns a square matrix with the components of `self` on its diagonal.
    pub fn to_diagonal_matrix(&self) -> Matrix {
        let n = self.dimensions();
        let mut els = vec![0.0; n * n];
        for (i, &x) in self.0.iter().enumerate() {
            els[i * n + i] = x;
        }
        Matrix::from_parts(n, n, els)
    }

    /// Returns `self` with each component rounded to the nearest integer.
    #[cfg(feature = "fp")]
    #[must_use]
    pub fn round(&self) -> Self {
        use super::float::f64;
        self.map(f64::round)
    }

    /// Returns `self` with every component within [`PRECISION`] of `x`
    /// replaced by `x`.
    #[must_use]
    pub fn snap_to(&self, x: f64) -> Self {
        self.snap_to_eps(x, PRECISION)
    }
    /// Returns `self` with every component within `eps` of `x` replaced
    /// by `x`.
    #[must_use]
    pub fn snap_to_eps(&self, x: f64, eps: f64) -> Self {
        self.map(|e| if e.approx_eq_eps(&x, &eps) { x } else { e })
    }

    /// Returns `self` as a 3-vector, appending a zero z component to a
    /// 2-vector.
    ///
    /// # Errors
    /// [`Error::WrongDimension`] if `self` has more than three components
    /// or fewer than two.
    pub fn to_3d(&self) -> Result<Self> {
        match self.0[..] {
            [x, y] => Ok(vec3(x, y, 0.0)),
            [_, _, _] => Ok(self.clone()),
            _ => Err(Error::WrongDimension {
                expected: 3,
                actual: self.dimensions(),
            }),
        }
    }

    /// Returns the 2-vector `self` rotated by `angle` about the point
    /// `center`, counterclockwise for positive angles.
    ///
    /// # Errors
    /// [`Error::WrongDimension`] unless both `self` and `center` are
    /// 2-dimensional.
    #[cfg(feature = "fp")]
    pub fn rotate_2d(&self, angle: Angle, center: &Self) -> Result<Self> {
        let ([x, y], [cx, cy]) = (self.as_2()?, center.as_2()?);
        let (sin, cos) = angle.sin_cos();
        let (dx, dy) = (x - cx, y - cy);
        Ok(vec2(cx + dx * cos - dy * sin, cy + dx * sin + dy * cos))
    }

    /// Returns the Euclidean distance between the points `self` and `other`.
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] if the dimensions differ.
    #[cfg(feature = "fp")]
    pub fn distance_to(&self, other: &Self) -> Result<f64> {
        Ok(self.subtract(other)?.modulus())
    }

    /// Returns the point `self` mirrored through the point `center`.
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] if the dimensions differ.
    pub fn reflect_through(&self, center: &Self) -> Result<Self> {
        self.zip_with(center, |a, c| c + (c - a))
    }

    fn zip_with(
        &self,
        other: &Self,
        mut f: impl FnMut(f64, f64) -> f64,
    ) -> Result<Self> {
        self.check_same_dim(other)?;
        Ok(Self(
            self.0
                .iter()
                .zip(&other.0)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        ))
    }

    fn check_same_dim(&self, other: &Self) -> Result<()> {
        if self.dimensions() != other.dimensions() {
            return Err(Error::DimensionMismatch {
                left: (self.dimensions(), 1),
                right: (other.dimensions(), 1),
            });
        }
        Ok(())
    }

    fn as_2(&self) -> Result<[f64; 2]> {
        self.0[..].try_into().map_err(|_| Error::WrongDimension {
            expected: 2,
            actual: self.dimensions(),
        })
    }

    pub(crate) fn as_3(&self) -> Result<[f64; 3]> {
        self.0[..].try_into().map_err(|_| Error::WrongDimension {
            expected: 3,
            actual: self.dimensions(),
        })
    }
}

//
// Local trait impls
//

impl ApproxEq for Vector {
    fn approx_eq_eps(&self, other: &Self, eps: &f64) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
    fn default_epsilon() -> f64 {
        PRECISION
    }
}

//
// Foreign trait impls
//

impl Display for Vector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, x) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            Display::fmt(x, f)?;
        }
        f.write_str("]")
    }
}

impl Debug for Vector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Vector{:?}", self.0)
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    /// Returns a vector with the components in `els`.
    ///
    /// Fails to compile if `N` is zero.
    #[inline]
    fn from(els: [f64; N]) -> Self {
        const { assert!(N > 0, "vector dimension must be nonzero") };
        Self(els.into())
    }
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = Error;

    fn try_from(els: Vec<f64>) -> Result<Self> {
        Self::new(els)
    }
}

impl TryFrom<&[f64]> for Vector {
    type Error = Error;

    fn try_from(els: &[f64]) -> Result<Self> {
        Self::new(els.to_vec())
    }
}

impl From<Vector> for Vec<f64> {
    fn from(v: Vector) -> Self {
        v.0
    }
}

impl Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|x| -x)
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, k: f64) -> Vector {
        Vector::mul(self, k)
    }
}
