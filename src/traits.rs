use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for real floating-point matrix elements.
///
/// Required by tolerance-based comparison and by the determinant /
/// cofactor / inverse engine, which need `abs`, negation, and division.
pub trait RealScalar: Scalar + Float {
    /// Absolute per-element tolerance used by
    /// [`Matrix::eq_matrix`](crate::Matrix::eq_matrix).
    fn eq_tolerance() -> Self;
}

macro_rules! impl_real_scalar {
    ($($t:ty),*) => {
        $(
            impl RealScalar for $t {
                #[inline]
                fn eq_tolerance() -> $t {
                    1.0e-7
                }
            }
        )*
    };
}

impl_real_scalar!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn takes_scalar<T: Scalar>(x: T) -> T {
        x + T::one()
    }

    #[test]
    fn scalar_blanket_covers_floats_and_ints() {
        assert_eq!(takes_scalar(1.5_f64), 2.5);
        assert_eq!(takes_scalar(1_i32), 2);
    }

    #[test]
    fn eq_tolerance_value() {
        assert_eq!(<f64 as RealScalar>::eq_tolerance(), 1.0e-7);
        assert_eq!(<f32 as RealScalar>::eq_tolerance(), 1.0e-7);
    }
}
