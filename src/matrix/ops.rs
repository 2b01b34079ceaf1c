use alloc::vec::Vec;
use core::ops::Mul;

use crate::error::{NormError, Result};
use crate::traits::{MulAccumulate, Scalar};

use super::Matrix;

// ── Transpose ───────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Transpose: an R×C matrix becomes C×R with `out[(j, i)] = self[(i, j)]`.
    ///
    /// The empty matrix transposes to itself.
    ///
    /// ```
    /// use normis::Matrix;
    /// let m = Matrix::from([[1, 2, 3], [4, 5, 6]]);
    /// assert_eq!(m.transpose(), Matrix::from([[1, 4], [2, 5], [3, 6]]));
    /// ```
    pub fn transpose(&self) -> Self {
        if self.is_empty() {
            return Self::empty();
        }
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.ncols {
            for i in 0..self.nrows {
                data.push(self[(i, j)]);
            }
        }
        Self::from_parts(self.ncols, self.nrows, data)
    }

    /// Matrix product `self * rhs`, failing on an inner-dimension mismatch.
    ///
    /// An empty operand yields the empty matrix. Integer elements are
    /// accumulated with checked arithmetic; an entry that leaves the range
    /// of `T` fails with [`NormError::Overflow`].
    ///
    /// ```
    /// use normis::{Matrix, NormError};
    /// let a = Matrix::from([[1, 2], [3, 4]]);
    /// let b = Matrix::from([[5, 6], [7, 8]]);
    /// assert_eq!(a.try_matmul(&b).unwrap(), Matrix::from([[19, 22], [43, 50]]));
    ///
    /// let c = Matrix::from([[1, 2, 3]]);
    /// assert_eq!(
    ///     a.try_matmul(&c).unwrap_err(),
    ///     NormError::DimensionMismatch { lhs: (2, 2), rhs: (1, 3) },
    /// );
    /// ```
    pub fn try_matmul(&self, rhs: &Self) -> Result<Self> {
        if self.is_empty() || rhs.is_empty() {
            return Ok(Self::empty());
        }
        if self.ncols != rhs.nrows {
            return Err(NormError::DimensionMismatch {
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }

        let mut data = Vec::with_capacity(self.nrows * rhs.ncols);
        for i in 0..self.nrows {
            for j in 0..rhs.ncols {
                let mut sum = T::zero();
                for k in 0..self.ncols {
                    sum = sum
                        .mul_accumulate(self[(i, k)], rhs[(k, j)])
                        .ok_or(NormError::Overflow { row: i, col: j })?;
                }
                data.push(sum);
            }
        }
        Ok(Self::from_parts(self.nrows, rhs.ncols, data))
    }

    /// Matrix product `self * rhs`, returning the empty matrix when the
    /// inner dimensions disagree or an integer entry overflows.
    ///
    /// ```
    /// use normis::Matrix;
    /// let a = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
    /// let c = Matrix::from([[1.0, 2.0, 3.0]]);
    /// assert!(a.matmul(&c).is_empty());
    /// ```
    pub fn matmul(&self, rhs: &Self) -> Self {
        self.try_matmul(rhs).unwrap_or_else(|_| Self::empty())
    }
}

impl<T: Scalar> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    /// # Panics
    ///
    /// On an inner-dimension mismatch or integer overflow; use
    /// [`Matrix::try_matmul`] for a fallible product.
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        match self.try_matmul(rhs) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: Scalar> Mul for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: Matrix<T>) -> Matrix<T> {
        &self * &rhs
    }
}

// ── Free functions ──────────────────────────────────────────────────

/// Transpose of `matrix`. See [`Matrix::transpose`].
///
/// ```
/// use normis::{transpose, Matrix};
/// let a = Matrix::from([[1, 2, 3], [4, 5, 6]]);
/// assert_eq!(transpose(&transpose(&a)), a);
/// ```
pub fn transpose<T: Scalar>(matrix: &Matrix<T>) -> Matrix<T> {
    matrix.transpose()
}

/// Product `a * b`, or the empty matrix if either operand is empty, the
/// inner dimensions disagree, or an integer entry overflows. See [`try_matrix_multiply`] for the strict form.
///
/// ```
/// use normis::{matrix_multiply, Matrix};
/// let a = Matrix::from([[1, 2], [3, 4]]);
/// let b = Matrix::from([[5, 6], [7, 8]]);
/// assert_eq!(matrix_multiply(&a, &b), Matrix::from([[19, 22], [43, 50]]));
/// ```
pub fn matrix_multiply<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Matrix<T> {
    a.matmul(b)
}

/// Product `a * b`, reporting an inner-dimension mismatch as
/// [`NormError::DimensionMismatch`] and integer overflow as
/// [`NormError::Overflow`].
pub fn try_matrix_multiply<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    a.try_matmul(b)
}
