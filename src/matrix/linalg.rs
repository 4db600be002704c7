//! Transpose, minors, and the recursive determinant / cofactor / inverse
//! engine. Everything here reads its receiver and builds fresh results;
//! nothing mutates in place.

use alloc::vec::Vec;

use crate::error::MatrixError;
use crate::traits::{RealScalar, Scalar};

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    /// Transpose: `(M x N) -> (N x M)` with `result[i][j] = self[j][i]`.
    /// Always succeeds.
    ///
    /// ```
    /// use cofact::Matrix;
    /// let a = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// let t = a.transpose();
    /// assert_eq!(t.shape(), (3, 2));
    /// assert_eq!(t[(1, 0)], 2.0);
    /// assert_eq!(t[(2, 1)], 6.0);
    /// ```
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.cols, self.rows, |i, j| self.data[j * self.cols + i])
    }

    /// The minor submatrix: `self` with row `skip_row` and column `skip_col`
    /// removed, relative order preserved.
    ///
    /// Panics if the matrix has fewer than two rows or columns, or if the
    /// skipped indices are out of range. Callers in this crate only reach it
    /// through the validated determinant and cofactor paths.
    ///
    /// ```
    /// use cofact::Matrix;
    /// let a = Matrix::from_rows(3, 3, &[
    ///     1.0, 2.0, 3.0,
    ///     4.0, 5.0, 6.0,
    ///     7.0, 8.0, 9.0,
    /// ]);
    /// let m = a.minor(0, 1);
    /// assert_eq!(m.shape(), (2, 2));
    /// assert_eq!(m.as_slice(), &[4.0, 6.0, 7.0, 9.0]);
    /// ```
    pub fn minor(&self, skip_row: usize, skip_col: usize) -> Self {
        assert!(
            self.rows > 1 && self.cols > 1,
            "minor requires at least a 2x2 matrix, got {}x{}",
            self.rows,
            self.cols,
        );
        assert!(
            skip_row < self.rows && skip_col < self.cols,
            "minor indices ({}, {}) outside a {}x{} matrix",
            skip_row,
            skip_col,
            self.rows,
            self.cols,
        );
        let mut data = Vec::with_capacity((self.rows - 1) * (self.cols - 1));
        for i in 0..self.rows {
            if i == skip_row {
                continue;
            }
            for j in 0..self.cols {
                if j == skip_col {
                    continue;
                }
                data.push(self.data[i * self.cols + j]);
            }
        }
        Self {
            data,
            rows: self.rows - 1,
            cols: self.cols - 1,
        }
    }
}

impl<T: RealScalar> Matrix<T> {
    /// Determinant by cofactor expansion along row 0.
    ///
    /// Base cases: 1x1 is the single element, 2x2 is `ad - bc`. Larger
    /// matrices recurse over their minors with alternating sign. Exponential
    /// in the dimension, but exact and deterministic for the small matrices
    /// this crate targets.
    ///
    /// # Errors
    ///
    /// [`MatrixError::NotSquare`] unless `rows == cols`;
    /// [`MatrixError::ZeroRows`] on a hollowed-out `(0, 0)` matrix.
    ///
    /// ```
    /// use cofact::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[4.0, 8.0, 15.0, 16.0]);
    /// assert_eq!(m.determinant().unwrap(), -56.0);
    /// ```
    pub fn determinant(&self) -> Result<T, MatrixError> {
        if self.rows == 0 {
            return Err(MatrixError::ZeroRows);
        }
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.det_expand())
    }

    // Receiver is known square and non-empty.
    fn det_expand(&self) -> T {
        let n = self.rows;
        match n {
            1 => self.data[0],
            2 => self.data[0] * self.data[3] - self.data[1] * self.data[2],
            _ => {
                let mut det = T::zero();
                let mut sign = T::one();
                for j in 0..n {
                    det = det + sign * self.data[j] * self.minor(0, j).det_expand();
                    sign = -sign;
                }
                det
            }
        }
    }

    /// One cofactor: `(-1)^(row + col) * det(minor(row, col))`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::NotSquare`], [`MatrixError::TooSmall`] for a 1x1, or
    /// [`MatrixError::OutOfRange`] for bad indices.
    ///
    /// ```
    /// use cofact::Matrix;
    /// let m = Matrix::from_rows(3, 3, &[
    ///     1.0, 2.0, 3.0,
    ///     0.0, 4.0, 2.0,
    ///     5.0, 2.0, 1.0,
    /// ]);
    /// assert_eq!(m.cofactor(0, 1).unwrap(), 10.0);
    /// ```
    pub fn cofactor(&self, row: usize, col: usize) -> Result<T, MatrixError> {
        self.check_square_at_least_2x2()?;
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.cofactor_expand(row, col))
    }

    fn cofactor_expand(&self, row: usize, col: usize) -> T {
        let d = self.minor(row, col).det_expand();
        if (row + col) % 2 == 0 {
            d
        } else {
            -d
        }
    }

    /// The matrix of cofactors (algebraic complements), same shape as `self`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::NotSquare`] unless square, then
    /// [`MatrixError::TooSmall`] for a 1x1, whose cofactor matrix is
    /// undefined.
    ///
    /// ```
    /// use cofact::Matrix;
    /// let m = Matrix::from_rows(3, 3, &[
    ///     1.0, 2.0, 3.0,
    ///     0.0, 4.0, 2.0,
    ///     5.0, 2.0, 1.0,
    /// ]);
    /// let c = m.calc_complements().unwrap();
    /// let expected = Matrix::from_rows(3, 3, &[
    ///     0.0, 10.0, -20.0,
    ///     4.0, -14.0, 8.0,
    ///     -8.0, -2.0, 4.0,
    /// ]);
    /// assert!(c.eq_matrix(&expected));
    /// ```
    pub fn calc_complements(&self) -> Result<Self, MatrixError> {
        self.check_square_at_least_2x2()?;
        Ok(Self::from_fn(self.rows, self.cols, |i, j| {
            self.cofactor_expand(i, j)
        }))
    }

    /// The inverse matrix: adjugate over determinant.
    ///
    /// The determinant is compared to zero exactly, with no tolerance; a
    /// determinant that collapses to zero through floating-point cancellation
    /// is reported as singular. A 1x1 matrix inverts directly to `[1/a]`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::NotSquare`] unless square;
    /// [`MatrixError::Singular`] if the determinant is exactly `0.0`.
    ///
    /// ```
    /// use cofact::Matrix;
    /// let a = Matrix::from_rows(3, 3, &[
    ///     2.0, 5.0, 7.0,
    ///     6.0, 3.0, 4.0,
    ///     5.0, -2.0, -3.0,
    /// ]);
    /// let inv = a.inverse().unwrap();
    /// let product = &a * &inv;
    /// assert!(product.eq_matrix(&Matrix::eye(3)));
    /// ```
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        let det = self.determinant()?;
        if det == T::zero() {
            return Err(MatrixError::Singular);
        }
        if self.rows == 1 {
            return Ok(Self::from_rows(1, 1, &[T::one() / det]));
        }
        let mut adj = self.calc_complements()?.transpose();
        adj.mul_number(T::one() / det);
        Ok(adj)
    }

    fn check_square_at_least_2x2(&self) -> Result<(), MatrixError> {
        if self.rows == 0 {
            return Err(MatrixError::ZeroRows);
        }
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.rows < 2 {
            return Err(MatrixError::TooSmall);
        }
        Ok(())
    }
}
