use crate::linalg::scaled_norm;
use crate::traits::{FloatScalar, MatrixMut};

/// Reduce a square matrix to upper Hessenberg form via Householder similarity
/// transforms: `Q^T A Q = H`.
///
/// On return:
/// - `a` is overwritten with the upper Hessenberg matrix H
/// - `q` holds the accumulated orthogonal transform Q
///
/// Eigenvalues are preserved, so the Francis QR sweep can start from H.
pub fn hessenberg<T: FloatScalar>(a: &mut impl MatrixMut<T>, q: &mut impl MatrixMut<T>) {
    let n = a.nrows();
    debug_assert_eq!(n, a.ncols(), "hessenberg requires a square matrix");
    debug_assert_eq!((q.nrows(), q.ncols()), (n, n));

    for i in 0..n {
        for j in 0..n {
            *q.get_mut(i, j) = if i == j { T::one() } else { T::zero() };
        }
    }

    for k in 0..n.saturating_sub(2) {
        let norm = {
            let col = &*a;
            scaled_norm(((k + 1)..n).map(|i| *col.get(i, k)))
        };
        // Only an exactly zero column is already reduced.
        if norm == T::zero() {
            continue;
        }

        let head = *a.get(k + 1, k);
        let sigma = if head >= T::zero() { norm } else { T::zero() - norm };
        let v0 = head + sigma;
        let tau = v0 / sigma;

        // Reflector v = [1, a[k+2,k]/v0, ..., a[n-1,k]/v0], stored below the subdiagonal.
        for i in (k + 2)..n {
            *a.get_mut(i, k) = *a.get(i, k) / v0;
        }

        // Left: A[k+1.., k+1..] -= tau v (v^T A)
        for j in (k + 1)..n {
            let mut dot = *a.get(k + 1, j);
            for i in (k + 2)..n {
                dot = dot + *a.get(i, k) * *a.get(i, j);
            }
            dot = dot * tau;

            *a.get_mut(k + 1, j) = *a.get(k + 1, j) - dot;
            for i in (k + 2)..n {
                *a.get_mut(i, j) = *a.get(i, j) - dot * *a.get(i, k);
            }
        }

        // Right: A[.., k+1..] -= tau (A v) v^T
        for i in 0..n {
            let mut dot = *a.get(i, k + 1);
            for jj in (k + 2)..n {
                dot = dot + *a.get(i, jj) * *a.get(jj, k);
            }
            dot = dot * tau;

            *a.get_mut(i, k + 1) = *a.get(i, k + 1) - dot;
            for jj in (k + 2)..n {
                *a.get_mut(i, jj) = *a.get(i, jj) - dot * *a.get(jj, k);
            }
        }

        // Q = Q (I - tau v v^T)
        for i in 0..n {
            let mut dot = *q.get(i, k + 1);
            for jj in (k + 2)..n {
                dot = dot + *q.get(i, jj) * *a.get(jj, k);
            }
            dot = dot * tau;

            *q.get_mut(i, k + 1) = *q.get(i, k + 1) - dot;
            for jj in (k + 2)..n {
                *q.get_mut(i, jj) = *q.get(i, jj) - dot * *a.get(jj, k);
            }
        }

        *a.get_mut(k + 1, k) = T::zero() - sigma;
        for i in (k + 2)..n {
            *a.get_mut(i, k) = T::zero();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Matrix;

    const TOL: f64 = 1e-10;

    fn check(orig: &Matrix<f64>) {
        let n = orig.nrows();
        let mut h = orig.clone();
        let mut q = Matrix::<f64>::zeros(n, n);
        hessenberg(&mut h, &mut q);

        for i in 0..n {
            for j in 0..i.saturating_sub(1) {
                assert!(h[(i, j)].abs() < TOL, "H[({},{})] = {} should be zero", i, j, h[(i, j)]);
            }
        }

        let qt = q.transpose();
        let qtaq = &(&qt * orig) * &q;
        for i in 0..n {
            for j in 0..n {
                assert!(
                    (qtaq[(i, j)] - h[(i, j)]).abs() < TOL,
                    "Q^TAQ[({},{})] = {}, H = {}",
                    i,
                    j,
                    qtaq[(i, j)],
                    h[(i, j)]
                );
            }
        }

        let qtq = &qt * &q;
        for i in 0..n {
            for j in 0..n {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((qtq[(i, j)] - expected).abs() < TOL, "QtQ[({},{})]", i, j);
            }
        }
    }

    #[test]
    fn hessenberg_3x3() {
        check(&Matrix::from([
            [4.0, 1.0, -2.0],
            [1.0, 2.0, 0.0],
            [-2.0, 0.0, 3.0],
        ]));
    }

    #[test]
    fn hessenberg_4x4() {
        check(&Matrix::from([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ]));
    }

    #[test]
    fn hessenberg_negative_pivot() {
        check(&Matrix::from([
            [2.0, -1.0, 0.5, 3.0, 1.0],
            [-4.0, 1.0, 2.0, 0.0, -1.0],
            [3.0, 0.0, -2.0, 1.0, 2.0],
            [-1.0, 2.0, 1.0, -3.0, 0.0],
            [0.5, -1.0, 4.0, 2.0, 1.0],
        ]));
    }

    #[test]
    fn tiny_entries_are_still_reduced() {
        let s = 1e-18;
        let orig = Matrix::from([
            [4.0 * s, 1.0 * s, -2.0 * s],
            [1.0 * s, 2.0 * s, 0.0],
            [-2.0 * s, 0.0, 3.0 * s],
        ]);
        let mut h = orig.clone();
        let mut q = Matrix::<f64>::zeros(3, 3);
        hessenberg(&mut h, &mut q);

        assert_eq!(h[(2, 0)], 0.0);
        // |H[1,0]| is the norm of the eliminated column, sqrt(5) * s.
        assert!((h[(1, 0)].abs() / (5.0_f64.sqrt() * s) - 1.0).abs() < 1e-12);

        let qtaq = &(&q.transpose() * &orig) * &q;
        for i in 0..3 {
            for j in 0..3 {
                assert!((qtaq[(i, j)] - h[(i, j)]).abs() < 1e-12 * s, "({},{})", i, j);
            }
        }
    }

    #[test]
    fn hessenberg_already_triangular() {
        check(&Matrix::from([
            [1.0, 2.0, 3.0],
            [0.0, 4.0, 5.0],
            [0.0, 0.0, 6.0],
        ]));
    }
}
