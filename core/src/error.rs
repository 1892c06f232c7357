//! The error type shared by the vector, matrix, and geometry APIs.

use thiserror::Error;

/// Result type with [`Error`] as the default error.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Reasons an operation has no answer for its inputs.
///
/// The variants fall in two groups. *Shape* errors mean the operation is not
/// applicable to inputs of these dimensions at all, for example taking the
/// determinant of a 2×3 matrix. *Degenerate* errors mean the shapes are fine
/// but the values are not, for example inverting a singular matrix. Use
/// [`Error::is_degenerate`] to tell them apart.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// The operands of a binary operation have incompatible shapes.
    #[error(
        "dimension mismatch: {}×{} vs {}×{}",
        .left.0, .left.1, .right.0, .right.1
    )]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// The operation is only defined for square matrices.
    #[error("expected a square matrix, got {rows}×{cols}")]
    NotSquare { rows: usize, cols: usize },
    /// A vector of a particular dimension was required.
    #[error("expected a vector of dimension {expected}, got {actual}")]
    WrongDimension { expected: usize, actual: usize },
    /// Rows of a matrix have unequal lengths.
    #[error("row {row} has {len} elements, expected {expected}")]
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// A vector or matrix would have no elements.
    #[error("vectors and matrices must have at least one element")]
    Empty,
    /// The matrix has a zero determinant.
    #[error("matrix is singular")]
    Singular,
    /// A direction or normal vector has zero length.
    #[error("zero-length vector has no direction")]
    ZeroVector,
    /// Three points meant to span a plane lie on a single line.
    #[error("points are collinear")]
    Collinear,
}

impl Error {
    /// Returns whether `self` is caused by degenerate values rather than
    /// by incompatible shapes.
    ///
    /// # Examples
    /// ```
    /// use linea_core::Error;
    ///
    /// assert!(Error::Singular.is_degenerate());
    /// assert!(!Error::NotSquare { rows: 2, cols: 3 }.is_degenerate());
    /// ```
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::Singular | Self::ZeroVector | Self::Collinear)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn display() {
        let e = Error::DimensionMismatch {
            left: (2, 3),
            right: (4, 1),
        };
        assert_eq!(e.to_string(), "dimension mismatch: 2×3 vs 4×1");
        assert_eq!(
            Error::NotSquare { rows: 1, cols: 2 }.to_string(),
            "expected a square matrix, got 1×2"
        );
    }

    #[test]
    fn shape_errors_are_not_degenerate() {
        assert!(!Error::Empty.is_degenerate());
        assert!(
            !Error::WrongDimension {
                expected: 3,
                actual: 4
            }
            .is_degenerate()
        );
        assert!(Error::ZeroVector.is_degenerate());
        assert!(Error::Collinear.is_degenerate());
    }
}
