//! The matrix two-norm (spectral norm).
//!
//! `||A||_2 = sqrt(max |λ(A^T A)|)`: transpose, form the Gram matrix, take
//! its eigenvalues, and return the square root of the dominant modulus.

use num_traits::Float;

use crate::error::Result;
use crate::linalg::{EigenSolver, SchurSolver};
use crate::matrix::norm::max_of;
use crate::traits::Scalar;
use crate::Matrix;

/// Gram matrix `A^T A`. Always square (C×C for an R×C input).
///
/// ```
/// use normis::{gram, Matrix};
/// let a = Matrix::from([[1, 2], [3, 4]]);
/// assert_eq!(gram(&a).unwrap(), Matrix::from([[10, 14], [14, 20]]));
/// ```
pub fn gram<T: Scalar>(matrix: &Matrix<T>) -> Result<Matrix<T>> {
    matrix.transpose().try_matmul(matrix)
}

/// Spectral norm engine, generic over the eigenvalue backend.
///
/// # Example
///
/// ```
/// use normis::linalg::{SchurSolver, SymmetricSolver};
/// use normis::{Matrix, SpectralNorm};
///
/// let a = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
/// let general = SpectralNorm::new(SchurSolver::new()).compute(&a).unwrap();
/// let symmetric = SpectralNorm::new(SymmetricSolver::new()).compute(&a).unwrap();
/// assert!((general - 5.464985704219043).abs() < 1e-9);
/// assert!((general - symmetric).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SpectralNorm<S = SchurSolver> {
    solver: S,
}

impl<S: EigenSolver> SpectralNorm<S> {
    /// Create an engine backed by `solver`.
    pub fn new(solver: S) -> Self {
        Self { solver }
    }

    /// The eigenvalue backend.
    #[inline]
    pub fn solver(&self) -> &S {
        &self.solver
    }

    /// Largest singular value of `matrix`.
    ///
    /// Any rectangular shape is accepted; the empty matrix has norm 0.0.
    /// Errors from the eigen backend propagate unchanged.
    ///
    /// The matrix is divided by its largest absolute entry before the Gram
    /// matrix is formed, so `A^T A` neither underflows nor overflows, and
    /// `||sA||_2 = s ||A||_2` holds for any positive `s`.
    pub fn compute<T: Scalar>(&self, matrix: &Matrix<T>) -> Result<f64> {
        let (rows, cols) = matrix.shape();
        tracing::trace!(rows, cols, "spectral norm");

        let widened = matrix.to_f64();
        let scale = widened.norm_max();
        if scale == 0.0 {
            return Ok(0.0);
        }
        let (unit, scale) = if scale.is_finite() {
            (widened.map(|x| x / scale), scale)
        } else {
            (widened, 1.0)
        };

        let gram = gram(&unit)?;
        let eigenvalues = self.solver.eigenvalues(&gram)?;
        let dominant = max_of(eigenvalues.iter().map(|z| z.norm()));
        tracing::debug!(count = eigenvalues.len(), dominant, scale, "gram spectrum");

        Ok(dominant.sqrt() * scale)
    }
}

impl<T: Scalar> Matrix<T> {
    /// Two-norm (largest singular value). See [`matrix_two_norm`].
    pub fn norm_two(&self) -> Result<f64> {
        matrix_two_norm(self)
    }
}

/// Spectral norm of `matrix` with the default general eigen backend.
///
/// ```
/// use normis::{matrix_two_norm, Matrix};
///
/// let a = Matrix::from([[1, 2], [3, 4]]);
/// assert!((matrix_two_norm(&a).unwrap() - 5.464985704219043).abs() < 1e-9);
///
/// assert_eq!(matrix_two_norm(&Matrix::from([[-2, 0], [0, 1]])).unwrap(), 2.0);
/// assert_eq!(matrix_two_norm(&Matrix::from([[0, 0], [0, 0]])).unwrap(), 0.0);
/// ```
pub fn matrix_two_norm<T: Scalar>(matrix: &Matrix<T>) -> Result<f64> {
    SpectralNorm::<SchurSolver>::default().compute(matrix)
}
