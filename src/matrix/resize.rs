//! In-place row and column resizing. Growth zero-fills, shrinking silently
//! discards, and the overlapping top-left region is always preserved.

use alloc::vec;

use crate::error::MatrixError;
use crate::traits::Scalar;

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    /// Change the row count, keeping all columns.
    ///
    /// Builds a fresh zero-filled `new_rows x cols` buffer, copies the
    /// `min(new_rows, rows)` retained rows, and swaps it in. Rows added at
    /// the bottom are zero; rows dropped from the bottom are gone without
    /// warning.
    ///
    /// # Errors
    ///
    /// [`MatrixError::ZeroRows`] if `new_rows == 0`, or
    /// [`MatrixError::ZeroCols`] on a hollowed-out `(0, 0)` matrix, which
    /// only reassignment can revive; the matrix is unchanged either way.
    ///
    /// ```
    /// use cofact::Matrix;
    /// let mut m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// m.set_rows(3).unwrap();
    /// assert_eq!(m.shape(), (3, 2));
    /// assert_eq!(m[(0, 0)], 1.0);
    /// assert_eq!(m[(2, 0)], 0.0);
    /// ```
    pub fn set_rows(&mut self, new_rows: usize) -> Result<(), MatrixError> {
        if new_rows < 1 {
            return Err(MatrixError::ZeroRows);
        }
        if self.cols < 1 {
            return Err(MatrixError::ZeroCols);
        }
        if new_rows == self.rows {
            return Ok(());
        }
        let mut data = vec![T::zero(); new_rows * self.cols];
        let keep = self.rows.min(new_rows) * self.cols;
        data[..keep].copy_from_slice(&self.data[..keep]);
        self.data = data;
        self.rows = new_rows;
        Ok(())
    }

    /// Change the column count, keeping all rows.
    ///
    /// Symmetric to [`Matrix::set_rows`]: the retained left region of every
    /// row is copied, new columns on the right are zero, dropped columns are
    /// discarded.
    ///
    /// # Errors
    ///
    /// [`MatrixError::ZeroCols`] if `new_cols == 0`, or
    /// [`MatrixError::ZeroRows`] on a hollowed-out `(0, 0)` matrix; the
    /// matrix is unchanged either way.
    ///
    /// ```
    /// use cofact::Matrix;
    /// let mut m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// m.set_cols(2).unwrap();
    /// assert_eq!(m.shape(), (2, 2));
    /// assert_eq!(m.as_slice(), &[1.0, 2.0, 4.0, 5.0]);
    /// ```
    pub fn set_cols(&mut self, new_cols: usize) -> Result<(), MatrixError> {
        if new_cols < 1 {
            return Err(MatrixError::ZeroCols);
        }
        if self.rows < 1 {
            return Err(MatrixError::ZeroRows);
        }
        if new_cols == self.cols {
            return Ok(());
        }
        let mut data = vec![T::zero(); self.rows * new_cols];
        let keep = self.cols.min(new_cols);
        for i in 0..self.rows {
            let src = &self.data[i * self.cols..i * self.cols + keep];
            data[i * new_cols..i * new_cols + keep].copy_from_slice(src);
        }
        self.data = data;
        self.cols = new_cols;
        Ok(())
    }
}
