use alloc::vec;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::MatrixError;
use crate::traits::Scalar;

use super::Matrix;

// ── Fallible in-place primitives ────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Add `other` to `self` elementwise, in place.
    ///
    /// # Errors
    ///
    /// [`MatrixError::ShapeMismatch`] unless both shapes match; `self` is
    /// left unchanged on failure.
    ///
    /// ```
    /// use cofact::Matrix;
    /// let mut a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// let b = Matrix::from_rows(2, 2, &[5.0, 6.0, 7.0, 8.0]);
    /// a.sum_matrix(&b).unwrap();
    /// assert_eq!(a[(0, 0)], 6.0);
    /// assert_eq!(a[(1, 1)], 12.0);
    /// ```
    pub fn sum_matrix(&mut self, other: &Self) -> Result<(), MatrixError> {
        self.check_same_shape(other)?;
        for (a, &b) in self.data.iter_mut().zip(other.data.iter()) {
            *a = *a + b;
        }
        Ok(())
    }

    /// Subtract `other` from `self` elementwise, in place.
    ///
    /// # Errors
    ///
    /// [`MatrixError::ShapeMismatch`] unless both shapes match.
    pub fn sub_matrix(&mut self, other: &Self) -> Result<(), MatrixError> {
        self.check_same_shape(other)?;
        for (a, &b) in self.data.iter_mut().zip(other.data.iter()) {
            *a = *a - b;
        }
        Ok(())
    }

    /// Multiply every element by `num`, in place. Never fails.
    ///
    /// ```
    /// use cofact::Matrix;
    /// let mut m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// m.mul_number(2.0);
    /// assert_eq!(m.as_slice(), &[2.0, 4.0, 6.0, 8.0]);
    /// ```
    pub fn mul_number(&mut self, num: T) {
        for x in self.data.iter_mut() {
            *x = *x * num;
        }
    }

    /// Multiply `self` by `other` in place: `(M x N) * (N x P) -> (M x P)`.
    ///
    /// The compatibility rule is the standard one, `self.cols == other.rows`
    /// and nothing more, so non-square products like `2x3 * 3x4` are valid.
    /// On success the storage and column count are replaced with the
    /// product's.
    ///
    /// # Errors
    ///
    /// [`MatrixError::ShapeMismatch`] if the inner dimensions differ. The
    /// check runs before any allocation, leaving `self` untouched.
    ///
    /// ```
    /// use cofact::Matrix;
    /// let mut a = Matrix::from_rows(1, 2, &[4.0, 8.0]);
    /// let b = Matrix::from_rows(2, 1, &[15.0, 16.0]);
    /// a.mul_matrix(&b).unwrap();
    /// assert_eq!(a.shape(), (1, 1));
    /// assert_eq!(a[(0, 0)], 188.0);
    /// ```
    pub fn mul_matrix(&mut self, other: &Self) -> Result<(), MatrixError> {
        if self.cols != other.rows {
            return Err(MatrixError::ShapeMismatch {
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        let m = self.rows;
        let n = self.cols;
        let p = other.cols;
        let mut data = vec![T::zero(); m * p];
        for i in 0..m {
            for k in 0..n {
                let a_ik = self.data[i * n + k];
                for j in 0..p {
                    data[i * p + j] = data[i * p + j] + a_ik * other.data[k * p + j];
                }
            }
        }
        self.data = data;
        self.cols = p;
        Ok(())
    }

    fn check_same_shape(&self, other: &Self) -> Result<(), MatrixError> {
        if self.same_shape(other) {
            Ok(())
        } else {
            Err(MatrixError::ShapeMismatch {
                lhs: self.shape(),
                rhs: other.shape(),
            })
        }
    }
}

// ── Element-wise addition ───────────────────────────────────────────

impl<T: Scalar> Add<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    /// Panics on shape mismatch; [`Matrix::sum_matrix`] is the checked form.
    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        let mut out = self.clone();
        if let Err(e) = out.sum_matrix(rhs) {
            panic!("{}", e);
        }
        out
    }
}

impl<T: Scalar> Add for Matrix<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl<T: Scalar> Add<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self + rhs
    }
}

impl<T: Scalar> Add<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: Matrix<T>) -> Matrix<T> {
        self + &rhs
    }
}

impl<T: Scalar> AddAssign for Matrix<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.add_assign(&rhs);
    }
}

impl<T: Scalar> AddAssign<&Matrix<T>> for Matrix<T> {
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        if let Err(e) = self.sum_matrix(rhs) {
            panic!("{}", e);
        }
    }
}

// ── Element-wise subtraction ────────────────────────────────────────

impl<T: Scalar> Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    /// Panics on shape mismatch; [`Matrix::sub_matrix`] is the checked form.
    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        let mut out = self.clone();
        if let Err(e) = out.sub_matrix(rhs) {
            panic!("{}", e);
        }
        out
    }
}

impl<T: Scalar> Sub for Matrix<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl<T: Scalar> Sub<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self - rhs
    }
}

impl<T: Scalar> Sub<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: Matrix<T>) -> Matrix<T> {
        self - &rhs
    }
}

impl<T: Scalar> SubAssign for Matrix<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.sub_assign(&rhs);
    }
}

impl<T: Scalar> SubAssign<&Matrix<T>> for Matrix<T> {
    fn sub_assign(&mut self, rhs: &Matrix<T>) {
        if let Err(e) = self.sub_matrix(rhs) {
            panic!("{}", e);
        }
    }
}

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        let data = self.data.iter().map(|&x| T::zero() - x).collect();
        Matrix {
            data,
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl<T: Scalar> Neg for Matrix<T> {
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}

// ── Matrix multiplication: (M x N) * (N x P) -> (M x P) ─────────────

impl<T: Scalar> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    /// Panics on an inner-dimension mismatch; [`Matrix::mul_matrix`] is the
    /// checked form.
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        let mut out = self.clone();
        if let Err(e) = out.mul_matrix(rhs) {
            panic!("{}", e);
        }
        out
    }
}

impl<T: Scalar> Mul for Matrix<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl<T: Scalar> Mul<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self * rhs
    }
}

impl<T: Scalar> Mul<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: Matrix<T>) -> Matrix<T> {
        self * &rhs
    }
}

impl<T: Scalar> MulAssign for Matrix<T> {
    fn mul_assign(&mut self, rhs: Self) {
        self.mul_assign(&rhs);
    }
}

impl<T: Scalar> MulAssign<&Matrix<T>> for Matrix<T> {
    fn mul_assign(&mut self, rhs: &Matrix<T>) {
        if let Err(e) = self.mul_matrix(rhs) {
            panic!("{}", e);
        }
    }
}

// ── Scalar multiplication: matrix * scalar ──────────────────────────

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Matrix<T> {
        let mut out = self.clone();
        out.mul_number(rhs);
        out
    }
}

impl<T: Scalar> Mul<T> for Matrix<T> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self {
        self.mul_number(rhs);
        self
    }
}

impl<T: Scalar> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.mul_number(rhs);
    }
}

// ── scalar * matrix (concrete impls) ────────────────────────────────

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: Matrix<$t>) -> Matrix<$t> {
                    rhs * self
                }
            }

            impl Mul<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: &Matrix<$t>) -> Matrix<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_and_sub_round_trip() {
        let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = Matrix::from_rows(2, 2, &[5.0, 6.0, 7.0, 8.0]);

        let mut r = a.clone();
        r.sum_matrix(&b).unwrap();
        assert_eq!(r.as_slice(), &[6.0, 8.0, 10.0, 12.0]);

        r.sub_matrix(&b).unwrap();
        assert!(r.eq_matrix(&a));
    }

    #[test]
    fn sum_shape_mismatch_leaves_receiver_unchanged() {
        let mut a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = Matrix::<f64>::new(2, 3).unwrap();

        let err = a.sum_matrix(&b).unwrap_err();
        assert_eq!(
            err,
            MatrixError::ShapeMismatch {
                lhs: (2, 2),
                rhs: (2, 3)
            }
        );
        assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0, 4.0]);

        assert!(a.sub_matrix(&b).is_err());
        assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn mul_number_fixture() {
        let mut m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        m.mul_number(2.0);
        assert_eq!(m.as_slice(), &[2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn mul_matrix_1x2_by_2x1() {
        let mut a = Matrix::from_rows(1, 2, &[4.0, 8.0]);
        let b = Matrix::from_rows(2, 1, &[15.0, 16.0]);
        a.mul_matrix(&b).unwrap();
        assert_eq!(a.shape(), (1, 1));
        assert_eq!(a[(0, 0)], 188.0);
    }

    #[test]
    fn mul_matrix_rectangular_product_is_valid() {
        // The standard rule only: a 2x3 times a 3x4 is fine.
        let mut a = Matrix::from_fn(2, 3, |i, j| (i * 3 + j + 1) as f64);
        let b = Matrix::from_fn(3, 4, |i, j| (i * 4 + j + 1) as f64);
        a.mul_matrix(&b).unwrap();
        assert_eq!(a.shape(), (2, 4));
        // Row 0: [1,2,3] . columns of b.
        assert_eq!(a[(0, 0)], 38.0);
        assert_eq!(a[(0, 3)], 56.0);
        assert_eq!(a[(1, 0)], 83.0);
    }

    #[test]
    fn mul_matrix_mismatch_preserves_receiver() {
        let mut a = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let b = Matrix::<f64>::new(2, 2).unwrap();

        let err = a.mul_matrix(&b).unwrap_err();
        assert_eq!(
            err,
            MatrixError::ShapeMismatch {
                lhs: (2, 3),
                rhs: (2, 2)
            }
        );
        assert_eq!(a.shape(), (2, 3));
        assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn operators_match_primitives() {
        let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = Matrix::from_rows(2, 2, &[5.0, 6.0, 7.0, 8.0]);

        let mut sum = a.clone();
        sum.sum_matrix(&b).unwrap();
        assert_eq!(&a + &b, sum);

        let mut diff = b.clone();
        diff.sub_matrix(&a).unwrap();
        assert_eq!(&b - &a, diff);

        let mut prod = a.clone();
        prod.mul_matrix(&b).unwrap();
        assert_eq!(&a * &b, prod);

        let mut scaled = a.clone();
        scaled.mul_number(2.0);
        assert_eq!(&a * 2.0, scaled);
    }

    #[test]
    fn assign_operators() {
        let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = Matrix::from_rows(2, 2, &[5.0, 6.0, 7.0, 8.0]);

        let mut m = a.clone();
        m += &b;
        assert_eq!(m[(0, 0)], 6.0);
        m -= &b;
        assert!(m.eq_matrix(&a));

        m *= 2.0;
        assert_eq!(m[(1, 1)], 8.0);

        let mut p = a.clone();
        p *= &b;
        assert_eq!(p, &a * &b);
    }

    #[test]
    fn ref_variants_agree() {
        let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = Matrix::from_rows(2, 2, &[5.0, 6.0, 7.0, 8.0]);

        let sum = &a + &b;
        assert_eq!(sum, a.clone() + &b);
        assert_eq!(sum, &a + b.clone());
        assert_eq!(sum, a.clone() + b.clone());
    }

    #[test]
    fn scalar_on_the_left() {
        let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(3.0 * &a, &a * 3.0);
        assert_eq!(2 * Matrix::from_rows(1, 2, &[3, 4]), Matrix::from_rows(1, 2, &[6, 8]));
    }

    #[test]
    fn neg() {
        let a = Matrix::from_rows(2, 2, &[1.0, -2.0, 3.0, -4.0]);
        let n = -&a;
        assert_eq!(n.as_slice(), &[-1.0, 2.0, -3.0, 4.0]);
        assert_eq!(-a.clone(), n);
    }

    #[test]
    #[should_panic(expected = "shape mismatch")]
    fn add_operator_panics_on_mismatch() {
        let a = Matrix::<f64>::new(2, 2).unwrap();
        let b = Matrix::<f64>::new(2, 3).unwrap();
        let _ = &a + &b;
    }

    #[test]
    #[should_panic(expected = "shape mismatch")]
    fn mul_operator_panics_on_mismatch() {
        let a = Matrix::<f64>::new(2, 3).unwrap();
        let b = Matrix::<f64>::new(2, 2).unwrap();
        let _ = &a * &b;
    }

    #[test]
    fn identity_multiply() {
        let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let id = Matrix::<f64>::eye(2);
        assert_eq!(&a * &id, a);
        assert_eq!(&id * &a, a);
    }

    #[test]
    fn integer_arithmetic_also_works() {
        let a = Matrix::from_rows(2, 2, &[1, 2, 3, 4]);
        let b = Matrix::from_rows(2, 2, &[5, 6, 7, 8]);
        let c = &a + &b;
        assert_eq!(c.as_slice(), &[6, 8, 10, 12]);
    }
}
