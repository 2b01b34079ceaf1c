//! Norms of one-dimensional sequences.
//!
//! Every function accepts any slice of [`Scalar`] elements (integers or
//! floats), widens each element to `f64`, and returns an `f64`. An empty
//! slice has norm 0.0.

use num_traits::Float;

use crate::error::{NormError, Result};
use crate::matrix::norm::max_of;
use crate::traits::Scalar;

/// Which vector norm [`vector_norm`] computes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VectorNorm {
    /// Sum of absolute values.
    One,
    /// Euclidean length.
    Two,
    /// Largest absolute value.
    Max,
    /// General p-norm; `p` must be at least 1 (`f64::INFINITY` selects `Max`).
    P(f64),
    /// `|v[0]| + Σ |v[i] - v[i-1]|`.
    PreviousDifference,
}

#[inline]
fn abs_values<T: Scalar>(values: &[T]) -> impl Iterator<Item = f64> + '_ {
    values.iter().map(|&x| x.to_real().abs())
}

/// `(Σ|x|^p)^(1/p)` without validating `p`.
fn powered_sum_root<T: Scalar>(values: &[T], p: f64) -> f64 {
    let sum: f64 = abs_values(values).map(|a| a.powf(p)).sum();
    sum.powf(1.0 / p)
}

/// Sum of absolute values.
///
/// ```
/// use normis::vector_one_norm;
/// assert_eq!(vector_one_norm(&[1, -2, 3, -4]), 10.0);
/// ```
pub fn vector_one_norm<T: Scalar>(values: &[T]) -> f64 {
    abs_values(values).sum()
}

/// Largest absolute value.
///
/// ```
/// use normis::vector_max_norm;
/// assert_eq!(vector_max_norm(&[1.0, -2.0, 3.0, -4.0]), 4.0);
/// ```
pub fn vector_max_norm<T: Scalar>(values: &[T]) -> f64 {
    max_of(abs_values(values))
}

/// The p-norm `(Σ|x|^p)^(1/p)`.
///
/// `p` must be at least 1. `p = f64::INFINITY` is the limiting case and
/// returns [`vector_max_norm`].
///
/// ```
/// use normis::{vector_p_norm, NormError};
/// let n = vector_p_norm(&[1, -2, 3, -4], 3.0).unwrap();
/// assert!((n - 4.641588833612778).abs() < 1e-12);
/// assert_eq!(vector_p_norm(&[1.0], 0.5), Err(NormError::InvalidOrder(0.5)));
/// ```
pub fn vector_p_norm<T: Scalar>(values: &[T], p: f64) -> Result<f64> {
    if p.is_nan() || p < 1.0 {
        return Err(NormError::InvalidOrder(p));
    }
    if p.is_infinite() {
        return Ok(vector_max_norm(values));
    }
    Ok(powered_sum_root(values, p))
}

/// Euclidean norm, identical to `vector_p_norm(values, 2.0)`.
///
/// ```
/// use normis::vector_two_norm;
/// assert_eq!(vector_two_norm(&[3, 4]), 5.0);
/// assert_eq!(vector_two_norm(&[2.0, -2.0, 2.0, -2.0]), 4.0);
/// ```
pub fn vector_two_norm<T: Scalar>(values: &[T]) -> f64 {
    powered_sum_root(values, 2.0)
}

/// `|v[0]| + Σ_{i≥1} |v[i] - v[i-1]|`, the total variation of the sequence
/// starting from zero.
///
/// ```
/// use normis::previous_difference_norm;
/// assert_eq!(previous_difference_norm(&[2, 5, 1, -3]), 13.0);
/// assert_eq!(previous_difference_norm(&[-4, -2, 7]), 15.0);
/// assert_eq!(previous_difference_norm::<f64>(&[]), 0.0);
/// ```
pub fn previous_difference_norm<T: Scalar>(values: &[T]) -> f64 {
    let mut prev = 0.0;
    let mut total = 0.0;
    for &x in values {
        let cur = x.to_real();
        total += (cur - prev).abs();
        prev = cur;
    }
    total
}

/// Compute the vector norm selected by `kind`.
///
/// ```
/// use normis::{vector_norm, VectorNorm};
/// let v = [3.0, 4.0, -5.0];
/// assert_eq!(vector_norm(&v, VectorNorm::Max).unwrap(), 5.0);
/// assert!((vector_norm(&v, VectorNorm::P(2.0)).unwrap() - 7.0710678118654755).abs() < 1e-12);
/// ```
pub fn vector_norm<T: Scalar>(values: &[T], kind: VectorNorm) -> Result<f64> {
    match kind {
        VectorNorm::One => Ok(vector_one_norm(values)),
        VectorNorm::Two => Ok(vector_two_norm(values)),
        VectorNorm::Max => Ok(vector_max_norm(values)),
        VectorNorm::P(p) => vector_p_norm(values, p),
        VectorNorm::PreviousDifference => Ok(previous_difference_norm(values)),
    }
}
