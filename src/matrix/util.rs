//! Fixture fill patterns and the plain-text dump. No algorithmic content;
//! these exist to prepare and inspect test matrices.

use core::fmt;

use crate::traits::Scalar;

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    /// Fill with sequential integers `1, 2, 3, ...` in row-major order.
    ///
    /// ```
    /// use cofact::Matrix;
    /// let mut m = Matrix::<f64>::new(2, 3).unwrap();
    /// m.fill_sequential();
    /// assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// ```
    pub fn fill_sequential(&mut self) {
        let mut k = T::zero();
        for x in self.data.iter_mut() {
            k = k + T::one();
            *x = k;
        }
    }

    /// Fill with even integers `2, 4, 6, ...` in row-major order.
    ///
    /// ```
    /// use cofact::Matrix;
    /// let mut m = Matrix::<f64>::new(2, 2).unwrap();
    /// m.fill_evens();
    /// assert_eq!(m.as_slice(), &[2.0, 4.0, 6.0, 8.0]);
    /// ```
    pub fn fill_evens(&mut self) {
        let two = T::one() + T::one();
        let mut k = T::zero();
        for x in self.data.iter_mut() {
            k = k + two;
            *x = k;
        }
    }

    /// Set every element to `value`. Covers the all-ones and all-zeros
    /// fixtures.
    ///
    /// ```
    /// use cofact::Matrix;
    /// let mut m = Matrix::<f64>::new(2, 2).unwrap();
    /// m.fill_with(1.0);
    /// assert!(m.iter().all(|&x| x == 1.0));
    /// ```
    pub fn fill_with(&mut self, value: T) {
        for x in self.data.iter_mut() {
            *x = value;
        }
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    /// Tab-separated elements, one line per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for j in 0..self.cols {
                if j > 0 {
                    write!(f, "\t")?;
                }
                write!(f, "{}", self.data[i * self.cols + j])?;
            }
            if i + 1 < self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
