//! # normis
//!
//! Vector and matrix norms in pure Rust, no-std compatible (with `alloc`).
//!
//! ## Quick start
//!
//! ```
//! use normis::{matrix_two_norm, vector_p_norm, Matrix};
//!
//! let a = Matrix::from([[1.0_f64, 2.0], [3.0, 4.0]]);
//! assert_eq!(a.norm_one(), 6.0);
//! assert_eq!(a.norm_inf(), 7.0);
//! assert!((a.frobenius_norm() - 30.0_f64.sqrt()).abs() < 1e-12);
//!
//! // Largest singular value: sqrt of the dominant eigenvalue of A^T A.
//! let two = matrix_two_norm(&a).unwrap();
//! assert!((two - 5.464985704219043).abs() < 1e-9);
//!
//! assert!((vector_p_norm(&[3, 4], 2.0).unwrap() - 5.0).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`vector`]: one, two, max, general p, and previous-difference norms
//!   over plain slices. [`vector_norm`] dispatches on [`VectorNorm`].
//!
//! - [`matrix`]: Heap-allocated `Matrix<T>` with runtime dimensions and
//!   `Vec<T>` row-major storage. Transpose and multiply live in
//!   [`matrix::ops`]; the reduction norms (one, infinity, Frobenius, max) in
//!   [`matrix::norm`].
//!
//! - [`linalg`]: Dense eigenvalues. Hessenberg reduction plus Francis
//!   double-shift QR for general input, Householder tridiagonalization plus
//!   Wilkinson-shift QR for symmetric input. Both sit behind the
//!   [`EigenSolver`] trait.
//!
//! - [`spectral`]: The matrix two-norm, built from [`gram`] and an
//!   [`EigenSolver`].
//!
//! - [`traits`]: Element trait hierarchy:
//!   - [`Scalar`]: all elements (`Copy + PartialEq + Debug + Num + ToPrimitive`,
//!     plus [`MulAccumulate`] for overflow-checked products), widened to `f64`
//!     for every norm
//!   - [`FloatScalar`]: real floats (`Scalar + Float`), used by the eigen routines
//!   - [`MatrixRef`] / [`MatrixMut`]: generic read/write access for algorithms
//!
//! Every norm returns `f64`. Empty input (an empty slice, or a matrix with
//! zero rows or zero columns) has norm 0.0.
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | Hardware FPU via system libm |
//! | `libm`  | no       | Pure-Rust software float fallback for `no_std` targets |
//!
//! One of `std` or `libm` must be enabled.
//!
//! ## Logging
//!
//! The spectral pipeline emits [`tracing`] events: `trace` on entry, `debug`
//! with the dominant Gram eigenvalue, and `warn` when an eigen iteration
//! exhausts its [`SolverConfig`] budget. Nothing is printed unless the caller
//! installs a subscriber.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("normis requires either the `std` or the `libm` feature");

extern crate alloc;

pub mod error;
pub mod linalg;
pub mod matrix;
pub mod spectral;
pub mod traits;
pub mod vector;

pub use error::{NormError, Result};
pub use linalg::{compute_eigenvalues, EigenSolver, Schur, SchurSolver, SolverConfig, SymmetricSolver};
pub use matrix::norm::{
    column_sums, frobenius_norm, matrix_infinity_norm, matrix_max_norm, matrix_one_norm, row_sums, MatrixNorm,
};
pub use matrix::ops::{matrix_multiply, transpose, try_matrix_multiply};
pub use matrix::Matrix;
pub use spectral::{gram, matrix_two_norm, SpectralNorm};
pub use traits::{FloatScalar, MatrixMut, MatrixRef, MulAccumulate, Scalar};
pub use vector::{
    previous_difference_norm, vector_max_norm, vector_norm, vector_one_norm, vector_p_norm, vector_two_norm,
    VectorNorm,
};

pub use num_complex::Complex;
