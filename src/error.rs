//! Error type shared by all fallible matrix operations.

use core::fmt;

/// Errors from matrix construction, access, arithmetic, and linear algebra.
///
/// Every precondition violation is reported through a distinct variant, and
/// every check runs before any element is written: a failed operation leaves
/// the receiving matrix unchanged.
///
/// ```
/// use cofact::{Matrix, MatrixError};
///
/// assert_eq!(Matrix::<f64>::new(0, 3).unwrap_err(), MatrixError::ZeroRows);
///
/// let rect = Matrix::<f64>::new(2, 3).unwrap();
/// assert_eq!(
///     rect.determinant().unwrap_err(),
///     MatrixError::NotSquare { rows: 2, cols: 3 },
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// A row count of zero was requested at construction or resize.
    ZeroRows,
    /// A column count of zero was requested at construction or resize.
    ZeroCols,
    /// Checked element access outside `[0, rows) x [0, cols)`.
    OutOfRange {
        /// Requested row index.
        row: usize,
        /// Requested column index.
        col: usize,
        /// Row count of the matrix.
        rows: usize,
        /// Column count of the matrix.
        cols: usize,
    },
    /// Operand shapes are incompatible for add, subtract, or multiply.
    ShapeMismatch {
        /// Shape of the left-hand side, `(rows, cols)`.
        lhs: (usize, usize),
        /// Shape of the right-hand side, `(rows, cols)`.
        rhs: (usize, usize),
    },
    /// Determinant, cofactor matrix, or inverse requested on a non-square matrix.
    NotSquare {
        /// Row count of the matrix.
        rows: usize,
        /// Column count of the matrix.
        cols: usize,
    },
    /// Cofactor matrix requested on a matrix smaller than 2x2.
    TooSmall,
    /// Inverse requested on a matrix whose determinant is exactly zero.
    Singular,
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::ZeroRows => write!(f, "the number of rows is lower than 1"),
            MatrixError::ZeroCols => write!(f, "the number of columns is lower than 1"),
            MatrixError::OutOfRange {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "index ({}, {}) is outside a {}x{} matrix",
                row, col, rows, cols
            ),
            MatrixError::ShapeMismatch { lhs, rhs } => write!(
                f,
                "shape mismatch: {}x{} is incompatible with {}x{}",
                lhs.0, lhs.1, rhs.0, rhs.1
            ),
            MatrixError::NotSquare { rows, cols } => {
                write!(f, "operation requires a square matrix, got {}x{}", rows, cols)
            }
            MatrixError::TooSmall => {
                write!(f, "cofactor matrix is undefined for a 1x1 matrix")
            }
            MatrixError::Singular => write!(f, "matrix is singular"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatrixError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            MatrixError::ZeroRows.to_string(),
            "the number of rows is lower than 1"
        );
        assert_eq!(
            MatrixError::OutOfRange {
                row: 3,
                col: 3,
                rows: 2,
                cols: 2
            }
            .to_string(),
            "index (3, 3) is outside a 2x2 matrix"
        );
        assert_eq!(
            MatrixError::ShapeMismatch {
                lhs: (2, 3),
                rhs: (2, 2)
            }
            .to_string(),
            "shape mismatch: 2x3 is incompatible with 2x2"
        );
        assert_eq!(MatrixError::Singular.to_string(), "matrix is singular");
    }

    #[test]
    fn variants_are_comparable() {
        assert_eq!(MatrixError::TooSmall, MatrixError::TooSmall);
        assert_ne!(MatrixError::ZeroRows, MatrixError::ZeroCols);
    }
}
