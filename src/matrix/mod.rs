mod linalg;
mod ops;
mod resize;
mod util;

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::error::MatrixError;
use crate::traits::{RealScalar, Scalar};

/// Dynamically-sized heap-allocated matrix.
///
/// Row-major `Vec<T>` storage in a single contiguous buffer; dimensions are
/// set at runtime and are part of the value's identity. A constructed matrix
/// always has at least one row and one column, and every row holds exactly
/// `cols` elements. The one sanctioned exception is the hollowed-out state
/// left behind by [`Matrix::take`]: shape `(0, 0)` with no storage, safe to
/// drop or reassign.
///
/// Cloning deep-copies the buffer; two matrices never alias storage.
///
/// # Examples
///
/// ```
/// use cofact::Matrix;
///
/// let mut a = Matrix::<f64>::new(2, 2).unwrap();
/// a[(0, 0)] = 1.0;
/// a[(1, 1)] = 4.0;
/// assert_eq!(a.rows(), 2);
/// assert_eq!(a[(0, 1)], 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    pub(crate) data: Vec<T>,
    pub(crate) rows: usize,
    pub(crate) cols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Create a `rows x cols` matrix filled with zeros.
    ///
    /// Rows and columns are validated independently, so the caller can tell
    /// which dimension was rejected.
    ///
    /// # Errors
    ///
    /// [`MatrixError::ZeroRows`] if `rows == 0`, then
    /// [`MatrixError::ZeroCols`] if `cols == 0`.
    ///
    /// ```
    /// use cofact::{Matrix, MatrixError};
    ///
    /// let m = Matrix::<f64>::new(2, 3).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// assert_eq!(m[(1, 2)], 0.0);
    ///
    /// assert_eq!(Matrix::<f64>::new(0, 3).unwrap_err(), MatrixError::ZeroRows);
    /// assert_eq!(Matrix::<f64>::new(3, 0).unwrap_err(), MatrixError::ZeroCols);
    /// ```
    pub fn new(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        if rows < 1 {
            return Err(MatrixError::ZeroRows);
        }
        if cols < 1 {
            return Err(MatrixError::ZeroCols);
        }
        Ok(Self::zeroed(rows, cols))
    }

    /// Zero-filled matrix with unvalidated shape. Internal constructor for
    /// paths whose shapes are already known to be consistent.
    pub(crate) fn zeroed(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![T::zero(); rows * cols],
            rows,
            cols,
        }
    }

    /// Create a matrix from a flat slice in row-major order.
    ///
    /// Panics if `row_major.len() != rows * cols`.
    ///
    /// ```
    /// use cofact::Matrix;
    /// let m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// assert_eq!(m[(0, 2)], 3.0);
    /// assert_eq!(m[(1, 0)], 4.0);
    /// ```
    pub fn from_rows(rows: usize, cols: usize, row_major: &[T]) -> Self {
        assert_eq!(
            row_major.len(),
            rows * cols,
            "slice length {} does not match {}x{} matrix",
            row_major.len(),
            rows,
            cols,
        );
        Self {
            data: row_major.to_vec(),
            rows,
            cols,
        }
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use cofact::Matrix;
    /// let m = Matrix::from_fn(3, 3, |i, j| if i == j { 1.0_f64 } else { 0.0 });
    /// assert_eq!(m[(0, 0)], 1.0);
    /// assert_eq!(m[(0, 1)], 0.0);
    /// ```
    pub fn from_fn(rows: usize, cols: usize, f: impl Fn(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { data, rows, cols }
    }

    /// Create an `n x n` identity matrix.
    ///
    /// ```
    /// use cofact::Matrix;
    /// let id = Matrix::<f64>::eye(3);
    /// assert_eq!(id[(0, 0)], 1.0);
    /// assert_eq!(id[(0, 1)], 0.0);
    /// assert_eq!(id[(2, 2)], 1.0);
    /// ```
    pub fn eye(n: usize) -> Self {
        let mut m = Self::zeroed(n, n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }
}

impl<T: Scalar> Default for Matrix<T> {
    /// A 3x3 zero-filled matrix.
    ///
    /// ```
    /// use cofact::Matrix;
    /// let m = Matrix::<f64>::default();
    /// assert_eq!(m.shape(), (3, 3));
    /// assert_eq!(m[(2, 2)], 0.0);
    /// ```
    fn default() -> Self {
        Self::zeroed(3, 3)
    }
}

// ── Shape & access ──────────────────────────────────────────────────

impl<T> Matrix<T> {
    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape as `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Whether the matrix is in the hollowed-out `(0, 0)` state left by
    /// [`Matrix::take`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Whether `self` and `other` have the same shape.
    ///
    /// ```
    /// use cofact::Matrix;
    /// let a = Matrix::<f64>::new(2, 3).unwrap();
    /// let b = Matrix::<f64>::new(2, 3).unwrap();
    /// let c = Matrix::<f64>::new(3, 2).unwrap();
    /// assert!(a.same_shape(&b));
    /// assert!(!a.same_shape(&c));
    /// ```
    #[inline]
    pub fn same_shape(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    /// Checked element access.
    ///
    /// # Errors
    ///
    /// [`MatrixError::OutOfRange`] if `row >= rows` or `col >= cols`.
    ///
    /// ```
    /// use cofact::{Matrix, MatrixError};
    /// let m = Matrix::<f64>::new(2, 2).unwrap();
    /// assert_eq!(*m.get(1, 1).unwrap(), 0.0);
    /// assert_eq!(
    ///     m.get(3, 3).unwrap_err(),
    ///     MatrixError::OutOfRange { row: 3, col: 3, rows: 2, cols: 2 },
    /// );
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Result<&T, MatrixError> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(&self.data[row * self.cols + col])
    }

    /// Checked mutable element access, allowing in-place assignment.
    ///
    /// # Errors
    ///
    /// [`MatrixError::OutOfRange`] if `row >= rows` or `col >= cols`.
    ///
    /// ```
    /// use cofact::Matrix;
    /// let mut m = Matrix::<f64>::new(2, 2).unwrap();
    /// *m.get_mut(0, 1).unwrap() = 21.0;
    /// assert_eq!(m[(0, 1)], 21.0);
    /// ```
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T, MatrixError> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(&mut self.data[row * self.cols + col])
    }

    /// View the entire matrix as a flat slice in row-major order.
    ///
    /// ```
    /// use cofact::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    /// ```
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterate over all elements in row-major order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate mutably over all elements in row-major order.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Take ownership of the storage, leaving `self` hollowed out.
    ///
    /// The source is reset to shape `(0, 0)` with no storage; dropping it is
    /// a no-op and every fallible operation on it reports a shape error.
    /// This is the explicit counterpart of move construction for callers
    /// holding the matrix behind a `&mut`.
    ///
    /// ```
    /// use cofact::Matrix;
    /// let mut a = Matrix::from_rows(2, 1, &[15.0, 16.0]);
    /// let b = a.take();
    /// assert_eq!(b.shape(), (2, 1));
    /// assert_eq!(a.shape(), (0, 0));
    /// assert!(a.is_empty());
    /// ```
    pub fn take(&mut self) -> Self {
        core::mem::replace(
            self,
            Self {
                data: Vec::new(),
                rows: 0,
                cols: 0,
            },
        )
    }
}

// ── Tolerant comparison ─────────────────────────────────────────────

impl<T: RealScalar> Matrix<T> {
    /// Tolerance-based equality.
    ///
    /// False immediately if shapes differ; otherwise true iff every
    /// corresponding element pair differs by at most `1e-7` in absolute
    /// value. The tolerance is applied per element, never to a sum.
    ///
    /// ```
    /// use cofact::Matrix;
    /// let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// let mut b = a.clone();
    /// assert!(a.eq_matrix(&b));
    ///
    /// b[(0, 0)] += 5.0e-8;
    /// assert!(a.eq_matrix(&b));
    ///
    /// b[(0, 0)] += 1.0e-3;
    /// assert!(!a.eq_matrix(&b));
    /// ```
    pub fn eq_matrix(&self, other: &Self) -> bool {
        if !self.same_shape(other) {
            return false;
        }
        let tol = T::eq_tolerance();
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(&a, &b)| (a - b).abs() <= tol)
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    /// Panics if the index is out of range; use [`Matrix::get`] for the
    /// checked form.
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) is outside a {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols,
        );
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) is outside a {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols,
        );
        &mut self.data[row * self.cols + col]
    }
}
