//! Dense eigenvalue routines backing the spectral norm.
//!
//! - [`hessenberg`](hessenberg::hessenberg) and [`francis_qr`](schur::francis_qr)
//!   reduce a general square matrix to real Schur form ([`Schur`]).
//! - [`tridiagonalize`](symmetric_eigen::tridiagonalize) and
//!   [`tridiagonal_qr`](symmetric_eigen::tridiagonal_qr) handle the symmetric case.
//! - [`EigenSolver`] wraps either path behind one method, with
//!   [`SchurSolver`] and [`SymmetricSolver`] as the two implementations.
//!
//! Every convergence and zero test is relative to the magnitude of the
//! entries involved, so scaling the input by any positive factor scales the
//! eigenvalues by the same factor.

pub mod eigen;
pub mod hessenberg;
pub mod schur;
pub mod symmetric_eigen;

pub use eigen::{compute_eigenvalues, EigenSolver, SchurSolver, SolverConfig, SymmetricSolver};
pub use schur::Schur;

use crate::traits::{FloatScalar, MatrixRef};

/// Largest absolute entry of `a`; zero for an empty matrix.
pub(crate) fn max_abs<T: FloatScalar>(a: &impl MatrixRef<T>) -> T {
    let mut m = T::zero();
    for i in 0..a.nrows() {
        for j in 0..a.ncols() {
            m = m.max(a.get(i, j).abs());
        }
    }
    m
}

/// Whether the off-diagonal `sub` is negligible next to the diagonal pair
/// `a`, `b`. When both diagonal entries are zero, `scale` (the magnitude of
/// the whole matrix) stands in for them.
#[inline]
pub(crate) fn negligible<T: FloatScalar>(sub: T, a: T, b: T, scale: T) -> bool {
    let mut s = a.abs() + b.abs();
    if s == T::zero() {
        s = scale;
    }
    sub.abs() <= T::epsilon() * s
}

/// Euclidean length of `values` without intermediate underflow or overflow:
/// the entries are divided by their largest magnitude before squaring.
pub(crate) fn scaled_norm<T: FloatScalar>(values: impl Iterator<Item = T> + Clone) -> T {
    let alpha = values.clone().fold(T::zero(), |m, x| m.max(x.abs()));
    if alpha == T::zero() {
        return T::zero();
    }
    let sum = values.fold(T::zero(), |acc, x| {
        let r = x / alpha;
        acc + r * r
    });
    alpha * sum.sqrt()
}
