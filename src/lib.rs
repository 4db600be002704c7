//! # cofact
//!
//! Dense, arbitrary-size real-valued matrices with exact, deterministic
//! linear algebra. Determinants, cofactor matrices, and inverses are
//! computed by classic recursive minor expansion rather than a pivoting
//! decomposition: exponential in the dimension, but bit-for-bit
//! reproducible and exact for the small matrices it is meant for.
//!
//! ## Quick start
//!
//! ```
//! use cofact::Matrix;
//!
//! let a = Matrix::from_rows(3, 3, &[
//!     2.0, 5.0, 7.0,
//!     6.0, 3.0, 4.0,
//!     5.0, -2.0, -3.0,
//! ]);
//! let inv = a.inverse().unwrap();
//!
//! let expected = Matrix::from_rows(3, 3, &[
//!     1.0, -1.0, 1.0,
//!     -38.0, 41.0, -34.0,
//!     27.0, -29.0, 24.0,
//! ]);
//! assert!(inv.eq_matrix(&expected));
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — Heap-allocated `Matrix<T>` with runtime dimensions.
//!   Row-major `Vec<T>` storage. Arithmetic primitives with shape
//!   validation, operator overloads, transpose/minor/determinant/
//!   cofactor/inverse, and in-place row/column resizing.
//!
//! - [`error`] — [`MatrixError`], the single error enum every fallible
//!   operation reports. Each precondition violation maps to a distinct
//!   variant, checked before any element is written.
//!
//! - [`traits`] — Element trait hierarchy:
//!   - [`Scalar`] — all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`RealScalar`] — real floats, required by the tolerance-based
//!     comparison and the determinant/inverse engine
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | `std::error::Error` impl; forwards to `num-traits/std` |
//! | `libm`  | no      | Pure-Rust float fallback for `no_std` builds, via `num-traits/libm` |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod matrix;
pub mod traits;

pub use error::MatrixError;
pub use matrix::Matrix;
pub use traits::{RealScalar, Scalar};
