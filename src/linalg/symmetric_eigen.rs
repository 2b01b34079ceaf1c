use alloc::vec;
use alloc::vec::Vec;

use crate::error::{NormError, Result};
use crate::linalg::{max_abs, negligible, scaled_norm};
use crate::traits::{FloatScalar, MatrixRef};

/// Householder tridiagonalization of a symmetric matrix.
///
/// Fills `diag[0..n]` with the diagonal and `off_diag[0..n-1]` with the
/// sub-diagonal of a tridiagonal matrix similar to `a`. Only eigenvalues are
/// needed downstream, so the transform itself is not kept.
pub fn tridiagonalize<T: FloatScalar>(a: &impl MatrixRef<T>, diag: &mut [T], off_diag: &mut [T]) {
    let n = a.nrows();
    debug_assert_eq!(n, a.ncols(), "tridiagonalize requires a square matrix");
    debug_assert!(diag.len() >= n);
    debug_assert!(off_diag.len() + 1 >= n);

    // Row-major working copy
    let mut w = vec![T::zero(); n * n];
    for i in 0..n {
        for j in 0..n {
            w[i * n + j] = *a.get(i, j);
        }
    }

    let two = T::one() + T::one();

    for k in 0..n.saturating_sub(2) {
        let norm = scaled_norm(((k + 1)..n).map(|i| w[i * n + k]));
        if norm == T::zero() {
            off_diag[k] = T::zero();
            continue;
        }

        let head = w[(k + 1) * n + k];
        let sigma = if head >= T::zero() { norm } else { T::zero() - norm };

        // v = x + sigma e1, read lazily from column k of w
        let v0 = head + sigma;
        let v_at = |w: &[T], i: usize| if i == 0 { v0 } else { w[(k + 1 + i) * n + k] };

        let sub_n = n - k - 1;
        let mut v_norm_sq = T::zero();
        for i in 0..sub_n {
            let vi = v_at(&w, i);
            v_norm_sq = v_norm_sq + vi * vi;
        }
        let tau = two / v_norm_sq;

        // p = tau * W_sub v
        let mut p = vec![T::zero(); sub_n];
        for (i, pi) in p.iter_mut().enumerate() {
            let row = k + 1 + i;
            let mut dot = T::zero();
            for j in 0..sub_n {
                dot = dot + w[row * n + k + 1 + j] * v_at(&w, j);
            }
            *pi = tau * dot;
        }

        // r = p - (tau/2)(v^T p) v
        let mut vtp = T::zero();
        for (i, &pi) in p.iter().enumerate() {
            vtp = vtp + v_at(&w, i) * pi;
        }
        let scale = tau / two * vtp;
        let r: Vec<T> = p
            .iter()
            .enumerate()
            .map(|(i, &pi)| pi - scale * v_at(&w, i))
            .collect();

        // W_sub -= v r^T + r v^T
        for i in 0..sub_n {
            let vi = v_at(&w, i);
            for j in 0..sub_n {
                let vj = v_at(&w, j);
                let idx = (k + 1 + i) * n + k + 1 + j;
                w[idx] = w[idx] - vi * r[j] - r[i] * vj;
            }
        }

        off_diag[k] = -sigma;
    }

    for i in 0..n {
        diag[i] = w[i * n + i];
    }
    if n >= 2 {
        off_diag[n - 2] = w[(n - 1) * n + (n - 2)];
    }
}

/// Implicit QR with Wilkinson shift on a symmetric tridiagonal matrix.
///
/// `diag` is overwritten with the eigenvalues, sorted ascending;
/// `off_diag` is destroyed.
pub fn tridiagonal_qr<T: FloatScalar>(diag: &mut [T], off_diag: &mut [T], max_iter: usize) -> Result<()> {
    let n = diag.len();
    if n <= 1 {
        return Ok(());
    }

    let two = T::one() + T::one();
    let scale = diag
        .iter()
        .chain(off_diag.iter())
        .fold(T::zero(), |m, x| m.max(x.abs()));
    let mut iter = 0usize;
    let mut hi = n - 1;

    while hi > 0 {
        let mut lo = hi;
        while lo > 0 {
            if negligible(off_diag[lo - 1], diag[lo - 1], diag[lo], scale) {
                off_diag[lo - 1] = T::zero();
                break;
            }
            lo -= 1;
        }

        if lo == hi {
            hi -= 1;
            continue;
        }

        iter += 1;
        if iter > max_iter {
            return Err(NormError::ConvergenceFailure { max_iter });
        }

        // Wilkinson shift from the trailing 2×2 block
        let d = (diag[hi - 1] - diag[hi]) / two;
        let e = off_diag[hi - 1];
        let r = d.hypot(e);
        let shift = diag[hi] - e * e / (d + if d >= T::zero() { r } else { -r });

        let mut x = diag[lo] - shift;
        let mut z = off_diag[lo];

        for k in lo..hi {
            let (c, s) = givens(x, z);

            if k > lo {
                off_diag[k - 1] = c * x + s * z;
            }

            let d_k = diag[k];
            let d_k1 = diag[k + 1];
            let e_k = off_diag[k];

            diag[k] = c * c * d_k + two * c * s * e_k + s * s * d_k1;
            diag[k + 1] = s * s * d_k - two * c * s * e_k + c * c * d_k1;
            off_diag[k] = c * s * (d_k1 - d_k) + (c * c - s * s) * e_k;

            if k + 1 < hi {
                let e_next = off_diag[k + 1];
                x = off_diag[k];
                z = s * e_next;
                off_diag[k + 1] = c * e_next;
            }
        }
    }

    diag.sort_by(|a, b| a.partial_cmp(b).unwrap_or(core::cmp::Ordering::Equal));
    Ok(())
}

/// Givens rotation: `(c, s)` such that `[c, s; -s, c] * [a; b] = [r; 0]`.
#[inline]
fn givens<T: FloatScalar>(a: T, b: T) -> (T, T) {
    if b == T::zero() {
        (T::one(), T::zero())
    } else if b.abs() > a.abs() {
        let t = a / b;
        let s = T::one() / (T::one() + t * t).sqrt();
        (s * t, s)
    } else {
        let t = b / a;
        let c = T::one() / (T::one() + t * t).sqrt();
        (c, c * t)
    }
}

/// Eigenvalues of a symmetric matrix, ascending.
///
/// The QR sweep runs on the tridiagonal form divided by its largest entry;
/// the eigenvalues are scaled back on return.
pub fn symmetric_eigenvalues<T: FloatScalar>(a: &impl MatrixRef<T>, max_iter: usize) -> Result<Vec<T>> {
    let n = a.nrows();
    if n == 0 {
        return Ok(Vec::new());
    }
    let mut diag = vec![T::zero(); n];
    let mut off_diag = vec![T::zero(); n];
    tridiagonalize(a, &mut diag, &mut off_diag);

    let scale = max_abs(a);
    let rescale = scale > T::zero() && scale.is_finite();
    if rescale {
        diag.iter_mut().chain(off_diag.iter_mut()).for_each(|x| *x = *x / scale);
    }
    tridiagonal_qr(&mut diag, &mut off_diag[..n - 1], max_iter)?;
    if rescale {
        diag.iter_mut().for_each(|x| *x = *x * scale);
    }
    Ok(diag)
}
