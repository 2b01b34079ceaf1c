use alloc::vec;
use alloc::vec::Vec;
use num_traits::Float;

use crate::error::Result;
use crate::traits::Scalar;

use super::Matrix;

/// Largest value of a non-negative sequence, 0.0 when there is none.
#[inline]
pub(crate) fn max_of(values: impl IntoIterator<Item = f64>) -> f64 {
    values.into_iter().fold(0.0, f64::max)
}

/// Which matrix norm [`Matrix::norm`] computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatrixNorm {
    /// Maximum absolute column sum.
    One,
    /// Maximum absolute row sum.
    Infinity,
    /// Square root of the sum of squared elements.
    Frobenius,
    /// Largest absolute element.
    Max,
    /// Largest singular value (spectral norm).
    Two,
}

// ── Matrix norms ────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Sum of absolute values in each column.
    ///
    /// ```
    /// use normis::Matrix;
    /// let m = Matrix::from([[1, -2, 3], [-4, 5, -6]]);
    /// assert_eq!(m.column_sums(), vec![5.0, 7.0, 9.0]);
    /// ```
    pub fn column_sums(&self) -> Vec<f64> {
        let mut sums = vec![0.0; self.ncols];
        for row in self.rows() {
            for (s, &x) in sums.iter_mut().zip(row) {
                *s += x.to_real().abs();
            }
        }
        sums
    }

    /// Sum of absolute values in each row.
    ///
    /// ```
    /// use normis::Matrix;
    /// let m = Matrix::from([[1, -2, 3], [-4, 5, -6]]);
    /// assert_eq!(m.row_sums(), vec![6.0, 15.0]);
    /// ```
    pub fn row_sums(&self) -> Vec<f64> {
        self.rows()
            .map(|row| row.iter().map(|&x| x.to_real().abs()).sum())
            .collect()
    }

    /// One norm (maximum column sum of absolute values).
    ///
    /// ```
    /// use normis::Matrix;
    /// let m = Matrix::from([[1, 2], [3, 4], [5, 6]]);
    /// assert_eq!(m.norm_one(), 12.0);
    /// ```
    pub fn norm_one(&self) -> f64 {
        max_of(self.column_sums())
    }

    /// Infinity norm (maximum row sum of absolute values).
    ///
    /// ```
    /// use normis::Matrix;
    /// let m = Matrix::from([[1, -2, 3], [-4, 5, 6], [7, -8, 9]]);
    /// assert_eq!(m.norm_inf(), 24.0);
    /// ```
    pub fn norm_inf(&self) -> f64 {
        max_of(self.row_sums())
    }

    /// Frobenius norm (square root of the sum of squared elements).
    ///
    /// ```
    /// use normis::Matrix;
    /// let m = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
    /// assert!((m.frobenius_norm() - 30.0_f64.sqrt()).abs() < 1e-12);
    /// ```
    pub fn frobenius_norm(&self) -> f64 {
        let mut sum = 0.0;
        for &x in &self.data {
            let v = x.to_real();
            sum += v * v;
        }
        sum.sqrt()
    }

    /// Max norm (largest absolute element).
    ///
    /// ```
    /// use normis::Matrix;
    /// let m = Matrix::from([[1, -5, 3], [2, 4, -6]]);
    /// assert_eq!(m.norm_max(), 6.0);
    /// ```
    pub fn norm_max(&self) -> f64 {
        max_of(self.data.iter().map(|&x| x.to_real().abs()))
    }

    /// Compute the norm selected by `kind`.
    ///
    /// Only [`MatrixNorm::Two`] can fail; it runs the eigenvalue pipeline.
    ///
    /// ```
    /// use normis::{Matrix, MatrixNorm};
    /// let m = Matrix::from([[-2.0, 0.0], [0.0, 1.0]]);
    /// assert_eq!(m.norm(MatrixNorm::Max).unwrap(), 2.0);
    /// assert_eq!(m.norm(MatrixNorm::Two).unwrap(), 2.0);
    /// ```
    pub fn norm(&self, kind: MatrixNorm) -> Result<f64> {
        match kind {
            MatrixNorm::One => Ok(self.norm_one()),
            MatrixNorm::Infinity => Ok(self.norm_inf()),
            MatrixNorm::Frobenius => Ok(self.frobenius_norm()),
            MatrixNorm::Max => Ok(self.norm_max()),
            MatrixNorm::Two => self.norm_two(),
        }
    }
}

// ── Free functions ──────────────────────────────────────────────────

/// Sum of absolute values per column; empty for the empty matrix.
pub fn column_sums<T: Scalar>(matrix: &Matrix<T>) -> Vec<f64> {
    matrix.column_sums()
}

/// Sum of absolute values per row; empty for the empty matrix.
pub fn row_sums<T: Scalar>(matrix: &Matrix<T>) -> Vec<f64> {
    matrix.row_sums()
}

/// Maximum of [`column_sums`]; 0.0 for the empty matrix.
pub fn matrix_one_norm<T: Scalar>(matrix: &Matrix<T>) -> f64 {
    matrix.norm_one()
}

/// Maximum of [`row_sums`]; 0.0 for the empty matrix.
pub fn matrix_infinity_norm<T: Scalar>(matrix: &Matrix<T>) -> f64 {
    matrix.norm_inf()
}

/// Square root of the sum of squared elements.
///
/// ```
/// use normis::{frobenius_norm, Matrix};
/// let m = Matrix::from([[1, 2], [3, 4]]);
/// assert!((frobenius_norm(&m) - 5.477225575051661).abs() < 1e-12);
/// ```
pub fn frobenius_norm<T: Scalar>(matrix: &Matrix<T>) -> f64 {
    matrix.frobenius_norm()
}

/// Largest absolute element; 0.0 for the empty matrix.
pub fn matrix_max_norm<T: Scalar>(matrix: &Matrix<T>) -> f64 {
    matrix.norm_max()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_and_row_sums() {
        let m = Matrix::from([[1.0, -2.0], [-3.0, 4.0]]);
        assert_eq!(column_sums(&m), vec![4.0, 6.0]);
        assert_eq!(row_sums(&m), vec![3.0, 7.0]);
    }

    #[test]
    fn sums_of_empty() {
        let e = Matrix::<f64>::empty();
        assert!(column_sums(&e).is_empty());
        assert!(row_sums(&e).is_empty());
    }

    #[test]
    fn one_norm() {
        let m = Matrix::from([[1, -2, 3], [-4, 5, -6]]);
        assert_eq!(matrix_one_norm(&m), 9.0);
    }

    #[test]
    fn infinity_norm() {
        let m = Matrix::from([[1.0_f32, -2.0], [3.0, 4.0]]);
        assert_eq!(matrix_infinity_norm(&m), 7.0);
    }

    #[test]
    fn frobenius() {
        let m = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
        assert!((frobenius_norm(&m) - 30.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn max_norm() {
        assert_eq!(matrix_max_norm(&Matrix::from([[-1, -2], [0, 2]])), 2.0);
        assert_eq!(matrix_max_norm(&Matrix::from([[0, 0], [0, 0]])), 0.0);
    }

    #[test]
    fn empty_norms_are_zero() {
        let e = Matrix::<i64>::empty();
        assert_eq!(matrix_one_norm(&e), 0.0);
        assert_eq!(matrix_infinity_norm(&e), 0.0);
        assert_eq!(frobenius_norm(&e), 0.0);
        assert_eq!(matrix_max_norm(&e), 0.0);
    }

    #[test]
    fn integer_extremes_do_not_overflow() {
        let m = Matrix::from([[i32::MIN, i32::MAX]]);
        assert_eq!(matrix_max_norm(&m), 2_147_483_648.0);
        assert_eq!(matrix_infinity_norm(&m), 4_294_967_295.0);
    }

    #[test]
    fn norm_dispatch() {
        let m = Matrix::from([[1.0, -2.0], [3.0, 4.0]]);
        assert_eq!(m.norm(MatrixNorm::One).unwrap(), 6.0);
        assert_eq!(m.norm(MatrixNorm::Infinity).unwrap(), 7.0);
        assert_eq!(m.norm(MatrixNorm::Max).unwrap(), 4.0);
        assert_eq!(m.norm(MatrixNorm::Frobenius).unwrap(), m.frobenius_norm());
        let two = m.norm(MatrixNorm::Two).unwrap();
        // ||A||_2 is bracketed by max-element and Frobenius norms.
        assert!(two >= m.norm_max() && two <= m.frobenius_norm());
    }
}
