pub mod norm;
pub mod ops;

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::ops::{Index, IndexMut};

use crate::error::{NormError, Result};
use crate::traits::{MatrixMut, MatrixRef, Scalar};

/// Dense, heap-allocated matrix with runtime dimensions.
///
/// Row-major `Vec<T>` storage: the matrix is an ordered sequence of rows of
/// equal length. Any matrix with zero rows or zero columns is normalized to
/// the canonical 0×0 empty matrix, so `is_empty()` is the only emptiness
/// check callers need.
///
/// # Examples
///
/// ```
/// use normis::Matrix;
///
/// let a = Matrix::from_rows(&[[1.0_f64, 2.0], [3.0, 4.0]]).unwrap();
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.shape(), (2, 2));
///
/// let ragged = Matrix::from_rows(&[vec![1, 2], vec![3]]);
/// assert!(ragged.is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T> Matrix<T> {
    /// The canonical empty matrix (0×0).
    pub const fn empty() -> Self {
        Self {
            data: Vec::new(),
            nrows: 0,
            ncols: 0,
        }
    }

    /// Assemble from parts whose length is already known to match.
    fn from_parts(nrows: usize, ncols: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), nrows * ncols);
        if nrows == 0 || ncols == 0 {
            return Self::empty();
        }
        Self { data, nrows, ncols }
    }

    /// Create a matrix from an owned `Vec<T>` in row-major order.
    ///
    /// ```
    /// use normis::Matrix;
    /// let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
    /// assert_eq!(m[(1, 0)], 4);
    /// assert!(Matrix::from_vec(2, 2, vec![1, 2, 3]).is_err());
    /// ```
    pub fn from_vec(nrows: usize, ncols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != nrows * ncols {
            return Err(NormError::LengthMismatch {
                len: data.len(),
                rows: nrows,
                cols: ncols,
            });
        }
        Ok(Self::from_parts(nrows, ncols, data))
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use normis::Matrix;
    /// let m = Matrix::from_fn(2, 3, |i, j| i * 3 + j);
    /// assert_eq!(m[(1, 2)], 5);
    /// ```
    pub fn from_fn(nrows: usize, ncols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self::from_parts(nrows, ncols, data)
    }
}

impl<T: Clone> Matrix<T> {
    /// Create a matrix from a sequence of rows.
    ///
    /// Zero rows, or a first row of length zero, yield the empty matrix
    /// regardless of what follows. Otherwise every row must have the length
    /// of the first one.
    ///
    /// ```
    /// use normis::{Matrix, NormError};
    ///
    /// let m = Matrix::from_rows(&[vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    ///
    /// let e = Matrix::from_rows(&[vec![1, 2], vec![3]]).unwrap_err();
    /// assert_eq!(e, NormError::RaggedRows { row: 1, expected: 2, got: 1 });
    ///
    /// let empty: Vec<Vec<f64>> = vec![vec![], vec![1.0]];
    /// assert!(Matrix::from_rows(&empty).unwrap().is_empty());
    /// ```
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let ncols = match rows.first() {
            Some(first) if !first.as_ref().is_empty() => first.as_ref().len(),
            _ => return Ok(Self::empty()),
        };

        let mut data = Vec::with_capacity(rows.len() * ncols);
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != ncols {
                return Err(NormError::RaggedRows {
                    row,
                    expected: ncols,
                    got: r.len(),
                });
            }
            data.extend_from_slice(r);
        }
        Ok(Self::from_parts(rows.len(), ncols, data))
    }

    /// Copy the matrix out as a `Vec` of rows.
    ///
    /// ```
    /// use normis::Matrix;
    /// let m = Matrix::from([[1, 2], [3, 4]]);
    /// assert_eq!(m.to_rows(), vec![vec![1, 2], vec![3, 4]]);
    /// ```
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.rows().map(<[T]>::to_vec).collect()
    }
}

impl<T: Scalar> Matrix<T> {
    /// Create an `nrows x ncols` matrix of zeros.
    ///
    /// ```
    /// use normis::Matrix;
    /// let m = Matrix::<f64>::zeros(2, 3);
    /// assert_eq!(m.shape(), (2, 3));
    /// assert_eq!(m[(1, 2)], 0.0);
    /// ```
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self::from_parts(nrows, ncols, vec![T::zero(); nrows * ncols])
    }

    /// Create an `n x n` identity matrix.
    ///
    /// ```
    /// use normis::Matrix;
    /// let id = Matrix::<f64>::eye(3);
    /// assert_eq!(id[(0, 0)], 1.0);
    /// assert_eq!(id[(0, 1)], 0.0);
    /// ```
    pub fn eye(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { T::one() } else { T::zero() })
    }

    /// Widen every element to `f64`.
    ///
    /// ```
    /// use normis::Matrix;
    /// let m = Matrix::from([[1_i32, -2], [3, 4]]);
    /// assert_eq!(m.to_f64()[(0, 1)], -2.0);
    /// ```
    pub fn to_f64(&self) -> Matrix<f64> {
        self.map(Scalar::to_real)
    }
}

// ── Accessors ───────────────────────────────────────────────────────

impl<T> Matrix<T> {
    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Whether this is the empty matrix.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether the matrix is square. The empty matrix counts as 0×0.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Row `i` as a slice. Panics if `i >= nrows`.
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        let start = i * self.ncols;
        &self.data[start..start + self.ncols]
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        // ncols is zero only for the empty matrix, whose data is empty too
        self.data.chunks(self.ncols.max(1))
    }

    /// All elements in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Bounds-checked element access.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.nrows && col < self.ncols {
            Some(&self.data[row * self.ncols + col])
        } else {
            None
        }
    }

    /// Apply `f` to every element, producing a new matrix of the same shape.
    ///
    /// ```
    /// use normis::Matrix;
    /// let m = Matrix::from([[1.0_f64, -4.0]]);
    /// assert_eq!(m.map(|x: f64| x * 2.0)[(0, 1)], -8.0);
    /// ```
    pub fn map<U>(&self, f: impl FnMut(T) -> U) -> Matrix<U>
    where
        T: Copy,
    {
        Matrix {
            data: self.data.iter().copied().map(f).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

// ── MatrixRef / MatrixMut ───────────────────────────────────────────

impl<T> MatrixRef<T> for Matrix<T> {
    #[inline]
    fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        &self.data[row * self.ncols + col]
    }
}

impl<T> MatrixMut<T> for Matrix<T> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.data[row * self.ncols + col]
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row * self.ncols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row * self.ncols + col]
    }
}

// ── Conversions ─────────────────────────────────────────────────────

impl<T: Copy, const M: usize, const N: usize> From<[[T; N]; M]> for Matrix<T> {
    /// Build from a nested array literal, one inner array per row.
    ///
    /// ```
    /// use normis::Matrix;
    /// let m = Matrix::from([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    /// assert_eq!(m.shape(), (2, 3));
    /// assert_eq!(m[(1, 2)], 6.0);
    /// ```
    fn from(rows: [[T; N]; M]) -> Self {
        let data = rows.iter().flat_map(|r| r.iter().copied()).collect();
        Self::from_parts(M, N, data)
    }
}

impl<T: Clone> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = NormError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self> {
        Self::from_rows(&rows)
    }
}

impl<T: Clone> TryFrom<&[Vec<T>]> for Matrix<T> {
    type Error = NormError;

    fn try_from(rows: &[Vec<T>]) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl<T: Clone> From<Matrix<T>> for Vec<Vec<T>> {
    fn from(m: Matrix<T>) -> Self {
        m.to_rows()
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (j, x) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", x)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn zeros() {
        let m = Matrix::<f64>::zeros(3, 4);
        assert_eq!(m.nrows(), 3);
        assert_eq!(m.ncols(), 4);
        for i in 0..3 {
            for j in 0..4 {
                assert_eq!(m[(i, j)], 0.0);
            }
        }
    }

    #[test]
    fn eye() {
        let m = Matrix::<i32>::eye(3);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(m[(i, j)], if i == j { 1 } else { 0 });
            }
        }
    }

    #[test]
    fn from_rows_rectangular() {
        let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.row(0), &[1.0, 2.0, 3.0]);
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn from_rows_ragged() {
        let err = Matrix::from_rows(&[vec![1, 2, 3], vec![4, 5, 6], vec![7]]).unwrap_err();
        assert_eq!(
            err,
            NormError::RaggedRows {
                row: 2,
                expected: 3,
                got: 1
            }
        );
    }

    #[test]
    fn empty_policy() {
        let none: [[f64; 0]; 0] = [];
        assert!(Matrix::from(none).is_empty());

        // An empty first row wins over whatever follows.
        let m = Matrix::from_rows(&[vec![], vec![1, 2], vec![3]]).unwrap();
        assert!(m.is_empty());
        assert_eq!(m, Matrix::empty());

        assert!(Matrix::<f64>::zeros(3, 0).is_empty());
        assert_eq!(Matrix::<f64>::zeros(0, 5).shape(), (0, 0));
    }

    #[test]
    fn from_vec_length_mismatch() {
        let err = Matrix::from_vec(2, 2, vec![1, 2, 3]).unwrap_err();
        assert_eq!(
            err,
            NormError::LengthMismatch {
                len: 3,
                rows: 2,
                cols: 2
            }
        );
    }

    #[test]
    fn rows_roundtrip() {
        let rows = vec![vec![1, 2], vec![3, 4], vec![5, 6]];
        let m = Matrix::try_from(rows.clone()).unwrap();
        assert_eq!(m.rows().count(), 3);
        let back: Vec<Vec<i32>> = m.into();
        assert_eq!(back, rows);
    }

    #[test]
    fn rows_of_empty() {
        let m = Matrix::<f64>::empty();
        assert_eq!(m.rows().count(), 0);
        assert!(m.to_rows().is_empty());
    }

    #[test]
    fn get_bounds() {
        let m = Matrix::from([[1, 2], [3, 4]]);
        assert_eq!(m.get(1, 0), Some(&3));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 2), None);
    }

    #[test]
    fn index_mut() {
        let mut m = Matrix::<f64>::zeros(2, 2);
        m[(0, 1)] = 5.0;
        assert_eq!(m[(0, 1)], 5.0);
        assert_eq!(m.as_slice(), &[0.0, 5.0, 0.0, 0.0]);
    }

    #[test]
    fn matrix_mut_trait() {
        let mut m = Matrix::<f64>::zeros(2, 2);
        fn set_diag<T: Scalar>(m: &mut impl MatrixMut<T>, val: T) {
            let n = m.nrows().min(m.ncols());
            for i in 0..n {
                *m.get_mut(i, i) = val;
            }
        }
        set_diag(&mut m, 7.0);
        assert_eq!(m, Matrix::from([[7.0, 0.0], [0.0, 7.0]]));
    }

    #[test]
    fn is_square() {
        assert!(Matrix::<f64>::zeros(3, 3).is_square());
        assert!(!Matrix::<f64>::zeros(2, 3).is_square());
        assert!(Matrix::<f64>::empty().is_square());
    }

    #[test]
    fn display() {
        let m = Matrix::from([[1, -2], [3, 4]]);
        assert_eq!(m.to_string(), "[[1, -2], [3, 4]]");
        assert_eq!(Matrix::<i32>::empty().to_string(), "[]");
    }
}
