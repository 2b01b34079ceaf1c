//! Error types for normis

use thiserror::Error;

/// Result type alias using normis's [`NormError`].
pub type Result<T> = core::result::Result<T, NormError>;

/// Errors that can occur while building matrices or computing norms.
///
/// ```
/// use normis::{compute_eigenvalues, Matrix, NormError};
///
/// let rect = Matrix::from([[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0]]);
/// assert_eq!(
///     compute_eigenvalues(&rect).unwrap_err(),
///     NormError::NotSquare { rows: 2, cols: 3 },
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum NormError {
    /// A square-only operation received a non-square matrix.
    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },

    /// A symmetric-only solver received a matrix with `a[i][j] != a[j][i]`.
    #[error("matrix must be symmetric, a[{row}][{col}] differs from its mirror")]
    NotSymmetric {
        /// Row of the first asymmetric entry
        row: usize,
        /// Column of the first asymmetric entry
        col: usize,
    },

    /// Inner dimensions of a matrix product disagree.
    #[error("dimension mismatch: cannot multiply {lhs:?} by {rhs:?}")]
    DimensionMismatch {
        /// Left operand `(rows, cols)`
        lhs: (usize, usize),
        /// Right operand `(rows, cols)`
        rhs: (usize, usize),
    },

    /// An integer matrix product left the range of the element type.
    #[error("integer overflow computing product entry ({row}, {col})")]
    Overflow {
        /// Row of the entry being accumulated
        row: usize,
        /// Column of the entry being accumulated
        col: usize,
    },

    /// Rows of unequal length were supplied where a rectangular matrix is required.
    #[error("row {row} has {got} elements, expected {expected}")]
    RaggedRows {
        /// Index of the offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        got: usize,
    },

    /// Flat storage does not match the requested shape.
    #[error("{len} elements do not fill a {rows}x{cols} matrix")]
    LengthMismatch {
        /// Number of elements supplied
        len: usize,
        /// Requested rows
        rows: usize,
        /// Requested columns
        cols: usize,
    },

    /// A p-norm was requested with `p < 1` or `p = NaN`.
    #[error("norm order must be at least 1, got {0}")]
    InvalidOrder(f64),

    /// The QR iteration did not converge within its sweep budget.
    #[error("eigenvalue iteration did not converge within {max_iter} sweeps")]
    ConvergenceFailure {
        /// Sweep budget that was exhausted
        max_iter: usize,
    },
}
