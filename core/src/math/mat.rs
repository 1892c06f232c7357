//! Dense matrices of `f64` with run-time dimensions.
//!
//! The row reduction engine (right-triangular form, determinant, rank,
//! trace, and inverse) is implemented in the [`elim`] submodule.

use alloc::{vec, vec::Vec};
use core::fmt::{self, Debug, Display, Formatter};
use core::ops::{Mul, Neg};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::math::approx::{ApproxEq, PRECISION};
use crate::math::rand::{Distrib, Uniform, Xorshift64};
use crate::math::vec::Vector;
use crate::{Error, Result};

pub mod elim;

/// A `rows × cols` matrix of real numbers, stored in row-major order.
///
/// Both dimensions are at least one and every row has the same length.
/// Element, row, and column accessors are 1-based and return `None` for
/// an index of 0 or one that is out of range.
///
/// Matrices are values: every operation returns a new matrix and leaves
/// the receiver as it was.
///
/// # Examples
/// ```
/// use linea_core::mat;
///
/// let m = mat![
///     1.0, 2.0;
///     3.0, 4.0
/// ];
/// assert_eq!(m.e(2, 1), Some(3.0));
/// assert_eq!(m.to_string(), "[1, 2]\n[3, 4]");
/// ```
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")
)]
pub struct Matrix {
    els: Vec<f64>,
    rows: usize,
    cols: usize,
}

/// The right-hand side of a matrix operation.
///
/// A scalar acts as a 1×1 matrix, while a slice or a vector acts as a
/// column matrix. Operations that accept an operand take
/// `impl Into<Operand>`, so any of these can be passed directly.
#[derive(Copy, Clone, Debug)]
pub enum Operand<'a> {
    Scalar(f64),
    Slice(&'a [f64]),
    Vector(&'a Vector),
    Matrix(&'a Matrix),
}

/// The result of [`Matrix::multiply`].
///
/// Multiplying by a column operand (a slice or a vector) yields a vector,
/// anything else yields a matrix.
#[derive(Clone, Debug, PartialEq)]
pub enum Product {
    Matrix(Matrix),
    Vector(Vector),
}

/// Creates a [`Matrix`] from rows of `f64` separated by semicolons.
///
/// # Examples
/// ```
/// use linea_core::mat;
/// use linea_core::math::Matrix;
///
/// assert_eq!(mat![1.0, 0.0; 0.0, 1.0], Matrix::identity(2));
/// ```
#[macro_export]
macro_rules! mat {
    ( $( $( $x:expr ),+ );+ $(;)? ) => {
        $crate::math::mat::Matrix::from([ $( [ $( $x ),+ ] ),+ ])
    };
}

//
// Inherent impls
//

impl Matrix {
    /// Returns a matrix with the given rows.
    ///
    /// # Errors
    /// [`Error::Empty`] if there are no rows or the rows are empty, and
    /// [`Error::Ragged`] if the rows are of different lengths.
    ///
    /// # Examples
    /// ```
    /// use linea_core::{Error, math::Matrix};
    ///
    /// let m = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
    /// assert_eq!(m.map(|m| m.dimensions()), Ok((2, 2)));
    ///
    /// let m = Matrix::from_rows([vec![1.0, 2.0], vec![3.0]]);
    /// assert_eq!(m, Err(Error::Ragged { row: 2, len: 1, expected: 2 }));
    /// ```
    pub fn from_rows<R: AsRef<[f64]>>(
        rows: impl IntoIterator<Item = R>,
    ) -> Result<Self> {
        let mut els = Vec::new();
        let mut cols = None;
        let mut n = 0;
        for (i, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            let expected = *cols.get_or_insert(row.len());
            if row.len() != expected {
                return Err(Error::Ragged {
                    row: i + 1,
                    len: row.len(),
                    expected,
                });
            }
            els.extend_from_slice(row);
            n += 1;
        }
        match cols {
            None | Some(0) => Err(Error::Empty),
            Some(cols) => Ok(Self::from_parts(n, cols, els)),
        }
    }

    /// Returns a single-column matrix with the elements of `col`.
    ///
    /// # Errors
    /// [`Error::Empty`] if `col` is empty.
    pub fn from_column(col: &[f64]) -> Result<Self> {
        if col.is_empty() {
            return Err(Error::Empty);
        }
        Ok(Self::from_parts(col.len(), 1, col.to_vec()))
    }

    /// Returns the `n × n` identity matrix.
    ///
    /// # Panics
    /// If `n` is zero.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zero(n, n);
        for i in 0..n {
            m.els[i * n + i] = 1.0;
        }
        m
    }

    /// Returns a `rows × cols` matrix of zeros.
    ///
    /// # Panics
    /// If `rows` or `cols` is zero.
    pub fn zero(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "matrix dimensions must be nonzero");
        Self::from_parts(rows, cols, vec![0.0; rows * cols])
    }

    /// Returns a square matrix with `diag` on its diagonal and zeros
    /// elsewhere.
    ///
    /// # Errors
    /// [`Error::Empty`] if `diag` is empty.
    pub fn from_diagonal(diag: &[f64]) -> Result<Self> {
        Ok(Vector::try_from(diag)?.to_diagonal_matrix())
    }

    /// Returns a `rows × cols` matrix whose elements are uniformly
    /// distributed in `0.0..1.0`.
    ///
    /// # Panics
    /// If `rows` or `cols` is zero.
    pub fn random(rows: usize, cols: usize, rng: &mut Xorshift64) -> Self {
        assert!(rows > 0 && cols > 0, "matrix dimensions must be nonzero");
        let d = Uniform(0.0..1.0);
        let els = (0..rows * cols).map(|_| d.sample(rng)).collect();
        Self::from_parts(rows, cols, els)
    }

    pub(crate) fn from_parts(rows: usize, cols: usize, els: Vec<f64>) -> Self {
        debug_assert_eq!(els.len(), rows * cols);
        Self { els, rows, cols }
    }

    /// Returns the element at row `i`, column `j`, counting from 1.
    ///
    /// # Examples
    /// ```
    /// use linea_core::mat;
    ///
    /// let m = mat![1.0, 2.0; 3.0, 4.0];
    /// assert_eq!(m.e(1, 2), Some(2.0));
    /// assert_eq!(m.e(0, 1), None);
    /// assert_eq!(m.e(3, 1), None);
    /// ```
    #[inline]
    pub fn e(&self, i: usize, j: usize) -> Option<f64> {
        let (i, j) = (i.checked_sub(1)?, j.checked_sub(1)?);
        (i < self.rows && j < self.cols).then(|| self.at(i, j))
    }

    /// Returns the `i`th row of `self`, counting from 1.
    pub fn row(&self, i: usize) -> Option<Vector> {
        let i = i.checked_sub(1).filter(|&i| i < self.rows)?;
        Vector::try_from(self.row_slice(i)).ok()
    }

    /// Returns the `j`th column of `self`, counting from 1.
    pub fn col(&self, j: usize) -> Option<Vector> {
        let j = j.checked_sub(1).filter(|&j| j < self.cols)?;
        Vector::new((0..self.rows).map(|i| self.at(i, j)).collect()).ok()
    }

    /// Returns the number of rows in `self`.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns in `self`.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the number of rows and columns in `self`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns whether `self` has as many rows as columns.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns the diagonal elements of `self`.
    ///
    /// # Errors
    /// [`Error::NotSquare`] if `self` is not square.
    pub fn diagonal(&self) -> Result<Vector> {
        self.check_square()?;
        Vector::new((0..self.rows).map(|i| self.at(i, i)).collect())
    }

    /// Returns whether `other` has the same dimensions as `self`.
    pub fn is_same_size_as<'a>(&self, other: impl Into<Operand<'a>>) -> bool {
        other.into().dimensions() == self.dimensions()
    }

    /// Returns whether `self × other` is defined, that is, whether `other`
    /// has as many rows as `self` has columns.
    pub fn can_multiply_from_left<'a>(
        &self,
        other: impl Into<Operand<'a>>,
    ) -> bool {
        let other = other.into();
        matches!(other, Operand::Scalar(_))
            || other.dimensions().0 == self.cols
    }

    /// Returns the element of `self` with the largest absolute value.
    ///
    /// The sign of the element is preserved. Of equally large elements,
    /// the first one in row-major order is returned.
    pub fn max(&self) -> f64 {
        use super::float::f64;
        self.els.iter().copied().fold(0.0, |m, x| {
            if f64::abs(x) > f64::abs(m) { x } else { m }
        })
    }

    /// Returns the 1-based row and column of the first element exactly
    /// equal to `x`, scanning in row-major order.
    pub fn index_of(&self, x: f64) -> Option<(usize, usize)> {
        let k = self.els.iter().position(|&e| e == x)?;
        Some((k / self.cols + 1, k % self.cols + 1))
    }

    /// Returns a matrix whose elements are `f` applied to those of `self`.
    #[must_use]
    pub fn map(&self, f: impl FnMut(f64) -> f64) -> Self {
        let els = self.els.iter().copied().map(f).collect();
        Self::from_parts(self.rows, self.cols, els)
    }

    /// Like [`map`][Self::map], but also passes the 1-based row and column
    /// of each element to `f`.
    #[must_use]
    pub fn map_indexed(
        &self,
        mut f: impl FnMut(f64, usize, usize) -> f64,
    ) -> Self {
        let els = self
            .els
            .iter()
            .enumerate()
            .map(|(k, &x)| f(x, k / self.cols + 1, k % self.cols + 1))
            .collect();
        Self::from_parts(self.rows, self.cols, els)
    }

    /// Returns the element-wise sum of `self` and `other`.
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] if the dimensions differ.
    pub fn add<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Self> {
        self.zip_with(other.into(), |a, b| a + b)
    }

    /// Returns the element-wise difference of `self` and `other`.
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] if the dimensions differ.
    pub fn subtract<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Self> {
        self.zip_with(other.into(), |a, b| a - b)
    }

    /// Returns the product `self × other`.
    ///
    /// A scalar scales every element. A slice or vector is treated as
    /// a column matrix and the result is returned as a [`Vector`].
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] if `other` does not have as many rows
    /// as `self` has columns.
    ///
    /// # Examples
    /// ```
    /// use linea_core::mat;
    /// use linea_core::math::{Product, vec2};
    ///
    /// let m = mat![1.0, 2.0; 3.0, 4.0];
    /// assert_eq!(m.multiply(&vec2(1.0, 1.0)), Ok(Product::Vector(vec2(3.0, 7.0))));
    /// assert_eq!(m.multiply(2.0), Ok(Product::Matrix(mat![2.0, 4.0; 6.0, 8.0])));
    /// ```
    pub fn multiply<'a>(
        &self,
        other: impl Into<Operand<'a>>,
    ) -> Result<Product> {
        match other.into() {
            Operand::Scalar(k) => Ok(Product::Matrix(self.mul_scalar(k))),
            Operand::Slice(v) => self.mul_col(v).map(Product::Vector),
            Operand::Vector(v) => {
                self.mul_col(v.as_slice()).map(Product::Vector)
            }
            Operand::Matrix(m) => self.mul_mat(m).map(Product::Matrix),
        }
    }

    /// Returns `self` with every element multiplied by `k`.
    #[must_use]
    pub fn mul_scalar(&self, k: f64) -> Self {
        self.map(|x| x * k)
    }

    /// Returns the matrix product `self × other`.
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] if `other.rows() != self.cols()`.
    pub fn mul_mat(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(self.mismatch(other.dimensions()));
        }
        let (n, m) = (self.rows, other.cols);
        let mut els = Vec::with_capacity(n * m);
        for i in 0..n {
            let row = self.row_slice(i);
            els.extend((0..m).map(|j| {
                row.iter()
                    .enumerate()
                    .map(|(k, a)| a * other.at(k, j))
                    .sum::<f64>()
            }));
        }
        Ok(Self::from_parts(n, m, els))
    }

    /// Returns the product of `self` and the column vector `v`.
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] if `v.dimensions() != self.cols()`.
    pub fn mul_vec(&self, v: &Vector) -> Result<Vector> {
        self.mul_col(v.as_slice())
    }

    /// Returns the transpose of `self`.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let (rows, cols) = (self.cols, self.rows);
        let els = (0..rows)
            .flat_map(|i| (0..cols).map(move |j| (i, j)))
            .map(|(i, j)| self.at(j, i))
            .collect();
        Self::from_parts(rows, cols, els)
    }

    /// Returns the `n_rows × n_cols` submatrix of `self` whose top left
    /// element is at row `a`, column `b`, counting from 1.
    ///
    /// Indices past the last row or column wrap around to the first one,
    /// so that any submatrix of a cyclic shift of `self` can be extracted.
    /// Returns `None` if `a` or `b` is zero, or if `n_rows` or `n_cols` is
    /// zero.
    ///
    /// # Examples
    /// ```
    /// use linea_core::mat;
    ///
    /// let m = mat![
    ///     1.0, 2.0, 3.0;
    ///     4.0, 5.0, 6.0;
    ///     7.0, 8.0, 9.0
    /// ];
    /// assert_eq!(m.minor(2, 2, 2, 2), Some(mat![5.0, 6.0; 8.0, 9.0]));
    /// assert_eq!(m.minor(3, 3, 2, 2), Some(mat![9.0, 7.0; 3.0, 1.0]));
    /// ```
    pub fn minor(
        &self,
        a: usize,
        b: usize,
        n_rows: usize,
        n_cols: usize,
    ) -> Option<Self> {
        let (a, b) = (a.checked_sub(1)?, b.checked_sub(1)?);
        if n_rows == 0 || n_cols == 0 {
            return None;
        }
        let els = (0..n_rows)
            .flat_map(|i| (0..n_cols).map(move |j| (i, j)))
            .map(|(i, j)| self.at((a + i) % self.rows, (b + j) % self.cols))
            .collect();
        Some(Self::from_parts(n_rows, n_cols, els))
    }

    /// Returns `self` with the columns of `other` appended to the right.
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] if `other` does not have as many rows
    /// as `self`.
    ///
    /// # Examples
    /// ```
    /// use linea_core::mat;
    /// use linea_core::math::Matrix;
    ///
    /// let m = mat![1.0; 2.0].augment(&Matrix::identity(2));
    /// assert_eq!(m, Ok(mat![1.0, 1.0, 0.0; 2.0, 0.0, 1.0]));
    /// ```
    pub fn augment<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Self> {
        let other = other.into();
        let (rows, cols) = other.dimensions();
        if rows != self.rows {
            return Err(self.mismatch((rows, cols)));
        }
        let width = self.cols + cols;
        let mut els = Vec::with_capacity(self.rows * width);
        for i in 0..self.rows {
            els.extend_from_slice(self.row_slice(i));
            els.extend((0..cols).map(|j| other.at(i, j)));
        }
        Ok(Self::from_parts(self.rows, width, els))
    }

    /// Returns `self` with each element rounded to the nearest integer.
    #[cfg(feature = "fp")]
    #[must_use]
    pub fn round(&self) -> Self {
        use super::float::f64;
        self.map(f64::round)
    }

    /// Returns `self` with every element within [`PRECISION`] of `x`
    /// replaced by `x`.
    #[must_use]
    pub fn snap_to(&self, x: f64) -> Self {
        self.snap_to_eps(x, PRECISION)
    }
    /// Returns `self` with every element within `eps` of `x` replaced by `x`.
    #[must_use]
    pub fn snap_to_eps(&self, x: f64, eps: f64) -> Self {
        self.map(|e| if e.approx_eq_eps(&x, &eps) { x } else { e })
    }

    /// Returns the elements of `self` in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.els
    }

    #[inline]
    fn at(&self, i: usize, j: usize) -> f64 {
        self.els[i * self.cols + j]
    }

    #[inline]
    fn row_slice(&self, i: usize) -> &[f64] {
        &self.els[i * self.cols..(i + 1) * self.cols]
    }

    fn check_square(&self) -> Result<()> {
        if !self.is_square() {
            return Err(Error::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    fn mismatch(&self, other: (usize, usize)) -> Error {
        Error::DimensionMismatch {
            left: self.dimensions(),
            right: other,
        }
    }

    fn mul_col(&self, v: &[f64]) -> Result<Vector> {
        if v.len() != self.cols {
            return Err(self.mismatch((v.len(), 1)));
        }
        let els = self
            .els
            .chunks_exact(self.cols)
            .map(|row| row.iter().zip(v).map(|(a, b)| a * b).sum())
            .collect();
        Vector::new(els)
    }

    fn zip_with(
        &self,
        other: Operand<'_>,
        mut f: impl FnMut(f64, f64) -> f64,
    ) -> Result<Self> {
        let dims = other.dimensions();
        if dims != self.dimensions() {
            return Err(self.mismatch(dims));
        }
        Ok(self.map_indexed(|x, i, j| f(x, other.at(i - 1, j - 1))))
    }
}

impl Operand<'_> {
    /// Returns the number of rows and columns of `self` as a matrix.
    pub fn dimensions(&self) -> (usize, usize) {
        match self {
            Self::Scalar(_) => (1, 1),
            Self::Slice(s) => (s.len(), 1),
            Self::Vector(v) => (v.dimensions(), 1),
            Self::Matrix(m) => m.dimensions(),
        }
    }

    /// Returns the 0-based element `(i, j)`. Assumes in-bounds indices.
    fn at(&self, i: usize, j: usize) -> f64 {
        match self {
            Self::Scalar(x) => *x,
            Self::Slice(s) => s[i],
            Self::Vector(v) => v.as_slice()[i],
            Self::Matrix(m) => m.at(i, j),
        }
    }
}

//
// Local trait impls
//

impl ApproxEq for Matrix {
    fn approx_eq_eps(&self, other: &Self, eps: &f64) -> bool {
        self.dimensions() == other.dimensions()
            && self.els.approx_eq_eps(&other.els, eps)
    }
    fn default_epsilon() -> f64 {
        PRECISION
    }
}

//
// Foreign trait impls
//

impl Display for Matrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str("[")?;
            for (j, x) in self.row_slice(i).iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                Display::fmt(x, f)?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}

impl Debug for Matrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix[")?;
        for i in 0..self.rows {
            writeln!(f, "    {:6.2?}", self.row_slice(i))?;
        }
        write!(f, "]")
    }
}

impl<const R: usize, const C: usize> From<[[f64; C]; R]> for Matrix {
    /// Returns a matrix with the rows in `rows`.
    ///
    /// Fails to compile if `R` or `C` is zero.
    fn from(rows: [[f64; C]; R]) -> Self {
        const { assert!(R > 0 && C > 0, "matrix dimensions must be nonzero") };
        Self::from_parts(R, C, rows.as_flattened().to_vec())
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = Error;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(m: Matrix) -> Self {
        m.els.chunks_exact(m.cols).map(<[f64]>::to_vec).collect()
    }
}

impl From<f64> for Operand<'_> {
    fn from(x: f64) -> Self {
        Self::Scalar(x)
    }
}
impl<'a> From<&'a [f64]> for Operand<'a> {
    fn from(s: &'a [f64]) -> Self {
        Self::Slice(s)
    }
}
impl<'a, const N: usize> From<&'a [f64; N]> for Operand<'a> {
    fn from(s: &'a [f64; N]) -> Self {
        Self::Slice(s)
    }
}
impl<'a> From<&'a Vector> for Operand<'a> {
    fn from(v: &'a Vector) -> Self {
        Self::Vector(v)
    }
}
impl<'a> From<&'a Matrix> for Operand<'a> {
    fn from(m: &'a Matrix) -> Self {
        Self::Matrix(m)
    }
}

impl Neg for Matrix {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|x| -x)
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, k: f64) -> Matrix {
        self.mul_scalar(k)
    }
}
