use alloc::vec::Vec;
use num_complex::Complex;

use crate::error::{NormError, Result};
use crate::linalg::schur::Schur;
use crate::linalg::symmetric_eigen::symmetric_eigenvalues;
use crate::traits::FloatScalar;
use crate::Matrix;

/// Tuning for the iterative eigenvalue backends.
///
/// ```
/// use normis::linalg::SolverConfig;
/// let cfg = SolverConfig::default();
/// assert_eq!(cfg.max_iter(4), 120);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// QR sweeps allowed per row of the input; the total budget is
    /// `max_iter_per_dim * n`.
    pub max_iter_per_dim: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self { max_iter_per_dim: 30 }
    }
}

impl SolverConfig {
    /// Total sweep budget for an `n x n` input.
    #[inline]
    pub fn max_iter(&self, n: usize) -> usize {
        self.max_iter_per_dim.saturating_mul(n)
    }
}

/// A dense eigenvalue routine.
///
/// This is the seam between the spectral norm and the numeric backend: any
/// type that can turn a square matrix into its eigenvalues can drive
/// [`SpectralNorm`](crate::SpectralNorm).
pub trait EigenSolver {
    /// Every eigenvalue of `a`, counted with algebraic multiplicity, in an
    /// implementation-defined order.
    ///
    /// Fails with [`NormError::NotSquare`] if `a` is not square.
    fn eigenvalues<T: FloatScalar>(&self, a: &Matrix<T>) -> Result<Vec<Complex<T>>>;
}

fn ensure_square<T>(a: &Matrix<T>) -> Result<()> {
    if a.is_square() {
        Ok(())
    } else {
        Err(NormError::NotSquare {
            rows: a.nrows(),
            cols: a.ncols(),
        })
    }
}

fn log_failure(err: &NormError, n: usize) {
    if let NormError::ConvergenceFailure { max_iter } = err {
        tracing::warn!(n, max_iter = *max_iter, "eigenvalue iteration gave up");
    }
}

/// General eigenvalue solver: Hessenberg reduction followed by Francis
/// double-shift QR to real Schur form.
///
/// Handles any real square matrix; complex conjugate pairs come back with
/// non-zero imaginary parts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchurSolver {
    config: SolverConfig,
}

impl SchurSolver {
    /// Solver with the default [`SolverConfig`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Solver with an explicit sweep budget.
    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[inline]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }
}

impl EigenSolver for SchurSolver {
    fn eigenvalues<T: FloatScalar>(&self, a: &Matrix<T>) -> Result<Vec<Complex<T>>> {
        ensure_square(a)?;
        let n = a.nrows();
        let schur = Schur::with_max_iter(a, self.config.max_iter(n)).inspect_err(|e| log_failure(e, n))?;
        Ok(schur.eigenvalues())
    }
}

/// Symmetric eigenvalue solver: Householder tridiagonalization followed by
/// implicit Wilkinson-shift QR.
///
/// Only accepts exactly symmetric input. Eigenvalues are real and come back
/// in ascending order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SymmetricSolver {
    config: SolverConfig,
}

impl SymmetricSolver {
    /// Solver with the default [`SolverConfig`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Solver with an explicit sweep budget.
    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[inline]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }
}

impl EigenSolver for SymmetricSolver {
    fn eigenvalues<T: FloatScalar>(&self, a: &Matrix<T>) -> Result<Vec<Complex<T>>> {
        ensure_square(a)?;
        let n = a.nrows();
        for i in 0..n {
            for j in (i + 1)..n {
                if a[(i, j)] != a[(j, i)] {
                    return Err(NormError::NotSymmetric { row: i, col: j });
                }
            }
        }

        let values = symmetric_eigenvalues(a, self.config.max_iter(n)).inspect_err(|e| log_failure(e, n))?;
        Ok(values.into_iter().map(|x| Complex::new(x, T::zero())).collect())
    }
}

/// Eigenvalues of a square matrix using the general [`SchurSolver`].
///
/// ```
/// use normis::{compute_eigenvalues, Matrix};
///
/// let a = Matrix::from([[2.0_f64, 0.0], [0.0, -3.0]]);
/// let mut re: Vec<f64> = compute_eigenvalues(&a).unwrap().iter().map(|z| z.re).collect();
/// re.sort_by(|a, b| a.total_cmp(b));
/// assert_eq!(re, vec![-3.0, 2.0]);
/// ```
pub fn compute_eigenvalues<T: FloatScalar>(matrix: &Matrix<T>) -> Result<Vec<Complex<T>>> {
    SchurSolver::default().eigenvalues(matrix)
}
