//! Row reduction and the quantities read off the reduced form.
//!
//! Reduction to right-triangular form uses **row addition only**: a row is
//! never scaled or swapped with another. Adding a multiple of one row to
//! another leaves the determinant unchanged, so the determinant of the
//! input is exactly the product of the diagonal of its triangular form,
//! with no sign or scale bookkeeping.
//!
//! Every entry point works on an owned copy of the input, so the receiver
//! is never modified.

use log::{debug, trace};

use super::Matrix;
use crate::math::approx::PRECISION;
use crate::{Error, Result};

impl Matrix {
    /// Returns the right-triangular (upper-triangular) form of `self`.
    ///
    /// For each pivot position `i`, top to bottom:
    /// 1. If the pivot is exactly zero, the first row below it with a nonzero
    ///    entry in column `i` is *added* to the pivot row. If there is none,
    ///    the column is skipped.
    /// 2. Column `i` is eliminated from every row below the pivot by
    ///    subtracting a multiple of the pivot row. Entries at or left of
    ///    column `i` in those rows are set to exactly zero rather than
    ///    computed, so no rounding residue is left below the diagonal.
    ///
    /// Applying this to an already triangular matrix returns it unchanged.
    ///
    /// # Examples
    /// ```
    /// use linea_core::mat;
    ///
    /// let m = mat![
    ///     0.0, 1.0;
    ///     2.0, 3.0
    /// ];
    /// // Row 2 is added into row 1 to fix the zero pivot
    /// assert_eq!(m.to_right_triangular(), mat![2.0, 4.0; 0.0, -1.0]);
    /// ```
    #[must_use]
    pub fn to_right_triangular(&self) -> Self {
        let mut m = self.clone();
        m.triangularize();
        m
    }

    /// Returns the determinant of `self`.
    ///
    /// # Errors
    /// [`Error::NotSquare`] if `self` is not square.
    ///
    /// # Examples
    /// ```
    /// use linea_core::{mat, Error};
    ///
    /// assert_eq!(mat![2.0, 1.0; 1.0, 1.0].determinant(), Ok(1.0));
    /// assert_eq!(
    ///     mat![1.0, 2.0].determinant(),
    ///     Err(Error::NotSquare { rows: 1, cols: 2 })
    /// );
    /// ```
    pub fn determinant(&self) -> Result<f64> {
        self.check_square()?;
        let m = self.to_right_triangular();
        Ok((0..m.rows).map(|i| m.at(i, i)).product())
    }

    /// Returns whether `self` is singular, that is, has a determinant of
    /// exactly zero.
    ///
    /// No tolerance is applied: a nearly singular matrix is not singular.
    /// Compare [`determinant`][Self::determinant] against a tolerance of
    /// your own if that is what you need.
    ///
    /// # Errors
    /// [`Error::NotSquare`] if `self` is not square.
    pub fn is_singular(&self) -> Result<bool> {
        Ok(self.determinant()? == 0.0)
    }

    /// Returns the sum of the diagonal elements of `self`.
    ///
    /// # Errors
    /// [`Error::NotSquare`] if `self` is not square.
    pub fn trace(&self) -> Result<f64> {
        self.check_square()?;
        Ok((0..self.rows).map(|i| self.at(i, i)).sum())
    }

    /// Returns the rank of `self`.
    ///
    /// Equivalent to [`rank_eps`][Self::rank_eps] with [`PRECISION`].
    pub fn rank(&self) -> usize {
        self.rank_eps(PRECISION)
    }

    /// Returns the number of rows in the right-triangular form of `self` that
    /// have at least one element with an absolute value greater than `eps`.
    ///
    /// A skipped pivot column does not shift later pivots to the left, so
    /// a matrix whose first column is all zeros may be reported as having
    /// a higher rank than it does.
    pub fn rank_eps(&self, eps: f64) -> usize {
        use crate::math::float::f64;
        let m = self.to_right_triangular();
        m.els
            .chunks_exact(m.cols)
            .filter(|row| row.iter().any(|&x| f64::abs(x) > eps))
            .count()
    }

    /// Returns the inverse of `self`, computed by Gauss–Jordan elimination.
    ///
    /// `self` is augmented with the identity matrix and brought to
    /// right-triangular form. Then, bottom to top, each row is divided by
    /// its diagonal element and subtracted from the rows above it to clear
    /// the rest of its column. The right half of the result is the inverse.
    ///
    /// # Errors
    /// [`Error::NotSquare`] if `self` is not square, and [`Error::Singular`]
    /// if it is singular.
    ///
    /// # Examples
    /// ```
    /// use linea_core::{mat, Error};
    ///
    /// let m = mat![2.0, 1.0; 1.0, 1.0];
    /// assert_eq!(m.inverse(), Ok(mat![1.0, -1.0; -1.0, 2.0]));
    ///
    /// let m = mat![1.0, 2.0; 2.0, 4.0];
    /// assert_eq!(m.inverse(), Err(Error::Singular));
    /// ```
    pub fn inverse(&self) -> Result<Self> {
        if self.is_singular()? {
            debug!("cannot invert singular {}×{} matrix", self.rows, self.cols);
            return Err(Error::Singular);
        }
        let n = self.rows;
        let mut m = self.augment(&Self::identity(n))?;
        m.triangularize();

        let w = m.cols;
        for i in (0..n).rev() {
            let (above, rest) = m.els.split_at_mut(i * w);
            let row = &mut rest[..w];

            let div = row[i];
            row.iter_mut().for_each(|x| *x /= div);

            for other in above.chunks_exact_mut(w) {
                let mul = other[i];
                for (x, r) in other.iter_mut().zip(&*row) {
                    *x -= r * mul;
                }
            }
        }
        let els = m
            .els
            .chunks_exact(w)
            .flat_map(|row| &row[n..])
            .copied()
            .collect();
        Ok(Self::from_parts(n, n, els))
    }

    /// Reduces `self` to right-triangular form in place.
    fn triangularize(&mut self) {
        let (rows, cols) = (self.rows, self.cols);
        for i in 0..rows.min(cols) {
            if self.at(i, i) == 0.0 {
                let Some(j) = (i + 1..rows).find(|&j| self.at(j, i) != 0.0)
                else {
                    trace!("no nonzero pivot in column {}, skipping", i + 1);
                    continue;
                };
                trace!("adding row {} into row {} for pivot", j + 1, i + 1);
                let (upper, lower) = self.els.split_at_mut(j * cols);
                let src = &lower[..cols];
                let dst = &mut upper[i * cols..(i + 1) * cols];
                for (d, s) in dst.iter_mut().zip(src) {
                    *d += s;
                }
            }

            let (upper, lower) = self.els.split_at_mut((i + 1) * cols);
            let pivot_row = &upper[i * cols..];
            let pivot = pivot_row[i];
            for row in lower.chunks_exact_mut(cols) {
                let mul = row[i] / pivot;
                for (p, x) in row.iter_mut().enumerate() {
                    *x = if p <= i { 0.0 } else { *x - pivot_row[p] * mul };
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;
    use crate::mat;
    use crate::math::rand::Xorshift64;

    use super::*;

    /// A random matrix with a dominant diagonal, hence well-conditioned.
    fn well_conditioned(n: usize, rng: &mut Xorshift64) -> Matrix {
        let m = Matrix::random(n, n, rng);
        m.add(&Matrix::identity(n).mul_scalar(n as f64))
            .unwrap()
    }

    #[test]
    fn triangular_form_of_regular_matrix() {
        let m = mat![
            2.0, 1.0, 1.0;
            4.0, 3.0, 3.0;
            8.0, 7.0, 9.0
        ];
        let t = m.to_right_triangular();
        assert_approx_eq!(
            t,
            mat![
                2.0, 1.0, 1.0;
                0.0, 1.0, 1.0;
                0.0, 0.0, 2.0
            ]
        );
        // Below-diagonal entries are exact zeros
        assert_eq!(t.e(2, 1), Some(0.0));
        assert_eq!(t.e(3, 1), Some(0.0));
        assert_eq!(t.e(3, 2), Some(0.0));
    }

    #[test]
    fn zero_pivot_is_repaired_by_row_addition() {
        let m = mat![
            0.0, 2.0, 1.0;
            0.0, 1.0, 1.0;
            3.0, 1.0, 0.0
        ];
        let t = m.to_right_triangular();
        // Row 3 is the first with a nonzero in column 1
        assert_eq!(t.row(1), mat![3.0, 3.0, 1.0].row(1));
        assert_approx_eq!(m.determinant().unwrap(), 3.0);
    }

    #[test]
    fn zero_column_is_skipped() {
        let m = mat![
            0.0, 1.0;
            0.0, 2.0
        ];
        let t = m.to_right_triangular();
        assert_eq!(t, m);
        assert_eq!(m.determinant(), Ok(0.0));
    }

    #[test]
    fn rectangular_matrices() {
        let wide = mat![
            1.0, 2.0, 3.0;
            2.0, 4.0, 7.0
        ];
        assert_eq!(wide.to_right_triangular(), mat![1.0, 2.0, 3.0; 0.0, 0.0, 1.0]);
        assert_eq!(wide.rank(), 2);

        let tall = mat![1.0; 2.0; 3.0];
        assert_eq!(tall.to_right_triangular(), mat![1.0; 0.0; 0.0]);
        assert_eq!(tall.rank(), 1);
    }

    #[test]
    fn scenario_regular_2x2() {
        let m = mat![2.0, 1.0; 1.0, 1.0];
        assert_eq!(m.determinant(), Ok(1.0));
        assert_eq!(m.is_singular(), Ok(false));
        assert_approx_eq!(m.inverse().unwrap(), mat![1.0, -1.0; -1.0, 2.0]);
        assert_eq!(m.rank(), 2);
        assert_eq!(m.trace(), Ok(3.0));
    }

    #[test]
    fn scenario_singular_2x2() {
        let m = mat![1.0, 2.0; 2.0, 4.0];
        assert_eq!(m.is_singular(), Ok(true));
        assert_eq!(m.inverse(), Err(Error::Singular));
        assert!(m.inverse().unwrap_err().is_degenerate());
        assert_eq!(m.rank(), 1);
    }

    #[test]
    fn scenario_identity_4x4() {
        let i = Matrix::identity(4);
        assert_eq!(i.trace(), Ok(4.0));
        assert_eq!(i.determinant(), Ok(1.0));
        assert_eq!(i.rank(), 4);
        assert_eq!(i.inverse(), Ok(i.clone()));
    }

    #[test]
    fn non_square_inputs() {
        let m = mat![1.0, 2.0, 3.0];
        let e = Error::NotSquare { rows: 1, cols: 3 };
        assert_eq!(m.determinant(), Err(e.clone()));
        assert_eq!(m.trace(), Err(e.clone()));
        assert_eq!(m.is_singular(), Err(e.clone()));
        assert_eq!(m.inverse(), Err(e.clone()));
        assert!(!e.is_degenerate());
    }

    #[test]
    fn near_singular_is_not_singular() {
        let m = mat![1.0, 2.0; 2.0, 4.0 + 1e-12];
        assert_eq!(m.is_singular(), Ok(false));
        assert!(m.inverse().is_ok());
        // But its rank under the default tolerance is one
        assert_eq!(m.rank(), 1);
        assert_eq!(m.rank_eps(1e-14), 2);
    }

    #[test]
    fn rank_bounds() {
        assert_eq!(Matrix::zero(3, 4).rank(), 0);
        assert_eq!(Matrix::identity(5).rank(), 5);

        let mut rng = Xorshift64::from_seed(0x1234);
        for (r, c) in [(1, 1), (2, 5), (5, 2), (4, 4), (3, 6)] {
            let m = Matrix::random(r, c, &mut rng);
            assert!(m.rank() <= r.min(c));
        }
    }

    #[test]
    fn input_is_not_modified() {
        let m = mat![0.0, 1.0; 1.0, 0.0];
        let copy = m.clone();
        let _ = m.to_right_triangular();
        let _ = m.inverse();
        let _ = m.rank();
        assert_eq!(m, copy);
    }

    #[test]
    fn inverse_needs_zero_pivot_repair() {
        let m = mat![0.0, 1.0; 1.0, 0.0];
        assert_approx_eq!(m.inverse().unwrap(), m);
    }

    #[test]
    fn determinant_is_preserved_by_triangularization() {
        let mut rng = Xorshift64::from_seed(99);
        for n in 1..=6 {
            let m = Matrix::random(n, n, &mut rng);
            let t = m.to_right_triangular();
            assert_approx_eq!(t.determinant().unwrap(), m.determinant().unwrap());
        }
    }

    #[test]
    fn triangularization_is_idempotent() {
        let mut rng = Xorshift64::from_seed(7);
        for (r, c) in [(3, 3), (4, 2), (2, 4), (5, 5)] {
            let t = Matrix::random(r, c, &mut rng).to_right_triangular();
            assert_eq!(t.to_right_triangular(), t);
        }
        let singular = mat![1.0, 2.0; 2.0, 4.0].to_right_triangular();
        assert_eq!(singular.to_right_triangular(), singular);
    }

    #[test]
    fn inverse_is_two_sided() {
        let mut rng = Xorshift64::from_seed(2024);
        for n in 1..=6 {
            let m = well_conditioned(n, &mut rng);
            let inv = m.inverse().unwrap();
            let id = Matrix::identity(n);
            assert_approx_eq!(m.mul_mat(&inv).unwrap(), id);
            assert_approx_eq!(inv.mul_mat(&m).unwrap(), id);
        }
    }
}
