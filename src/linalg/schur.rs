use alloc::vec::Vec;
use num_complex::Complex;

use crate::error::{NormError, Result};
use crate::linalg::hessenberg::hessenberg;
use crate::linalg::{max_abs, negligible};
use crate::traits::{FloatScalar, MatrixMut, MatrixRef};
use crate::Matrix;

#[inline]
fn g<T: Copy>(m: &impl MatrixRef<T>, i: usize, j: usize) -> T {
    *m.get(i, j)
}

/// Whether subdiagonal entry `(i, i-1)` is negligible next to its diagonal
/// neighbours.
#[inline]
fn small<T: FloatScalar>(h: &impl MatrixRef<T>, i: usize, scale: T) -> bool {
    negligible(g(h, i, i - 1), g(h, i - 1, i - 1), g(h, i, i), scale)
}

/// Francis double-shift QR iteration on an upper Hessenberg matrix.
///
/// Transforms `h` to real Schur form (quasi-upper-triangular) in place and
/// accumulates the orthogonal similarity transform into `q`.
///
/// Real eigenvalues end up as 1×1 diagonal blocks; complex conjugate pairs
/// as 2×2 blocks. Fails with [`NormError::ConvergenceFailure`] after
/// `max_iter` double-shift sweeps.
pub fn francis_qr<T: FloatScalar>(
    h: &mut impl MatrixMut<T>,
    q: &mut impl MatrixMut<T>,
    max_iter: usize,
) -> Result<()> {
    let n = h.nrows();
    if n <= 1 {
        return Ok(());
    }

    let scale = max_abs(h);

    let mut iter = 0usize;
    // Active window is h[0..p, 0..p]
    let mut p = n;

    while p > 2 {
        if small(h, p - 1, scale) {
            *h.get_mut(p - 1, p - 2) = T::zero();
            p -= 1;
            continue;
        }

        if small(h, p - 2, scale) {
            *h.get_mut(p - 2, p - 3) = T::zero();
            p -= 2;
            continue;
        }

        iter += 1;
        if iter > max_iter {
            return Err(NormError::ConvergenceFailure { max_iter });
        }

        // Top of the unreduced block that ends at row p-1
        let mut lo = p - 1;
        while lo > 0 {
            if small(h, lo, scale) {
                *h.get_mut(lo, lo - 1) = T::zero();
                break;
            }
            lo -= 1;
        }

        // Shift pair as (sum, product); every 10th sweep uses an ad-hoc shift.
        let (s, t) = if iter % 10 == 0 {
            let w = g(h, p - 1, p - 2).abs() + g(h, p - 2, p - 3).abs();
            (w + w, w * w)
        } else {
            let a11 = g(h, p - 2, p - 2);
            let a12 = g(h, p - 2, p - 1);
            let a21 = g(h, p - 1, p - 2);
            let a22 = g(h, p - 1, p - 1);
            (a11 + a22, a11 * a22 - a12 * a21)
        };

        // First column of H^2 - sH + tI
        let h00 = g(h, lo, lo);
        let h10 = g(h, lo + 1, lo);
        let h01 = g(h, lo, lo + 1);
        let h11 = g(h, lo + 1, lo + 1);

        let mut x = h00 * h00 + h01 * h10 - s * h00 + t;
        let mut y = h10 * (h00 + h11 - s);
        let mut z = if lo + 2 < p {
            h10 * g(h, lo + 2, lo + 1)
        } else {
            T::zero()
        };

        // Chase the bulge down to row p-1
        for k in lo..(p - 1) {
            let use3 = k + 2 < p;
            let (v1, v2, tau) = if use3 {
                householder3(x, y, z)
            } else {
                let (v1, tau) = householder2(x, y);
                (v1, T::zero(), tau)
            };

            let col_start = if k > lo { k - 1 } else { k };
            for j in col_start..n {
                let mut dot = g(h, k, j) + v1 * g(h, k + 1, j);
                if use3 {
                    dot = dot + v2 * g(h, k + 2, j);
                }
                dot = tau * dot;
                *h.get_mut(k, j) = g(h, k, j) - dot;
                *h.get_mut(k + 1, j) = g(h, k + 1, j) - dot * v1;
                if use3 {
                    *h.get_mut(k + 2, j) = g(h, k + 2, j) - dot * v2;
                }
            }

            let row_end = if use3 { (k + 4).min(p) } else { p };
            for i in 0..row_end {
                let mut dot = g(h, i, k) + v1 * g(h, i, k + 1);
                if use3 {
                    dot = dot + v2 * g(h, i, k + 2);
                }
                dot = tau * dot;
                *h.get_mut(i, k) = g(h, i, k) - dot;
                *h.get_mut(i, k + 1) = g(h, i, k + 1) - dot * v1;
                if use3 {
                    *h.get_mut(i, k + 2) = g(h, i, k + 2) - dot * v2;
                }
            }

            for i in 0..n {
                let mut dot = g(q, i, k) + v1 * g(q, i, k + 1);
                if use3 {
                    dot = dot + v2 * g(q, i, k + 2);
                }
                dot = tau * dot;
                *q.get_mut(i, k) = g(q, i, k) - dot;
                *q.get_mut(i, k + 1) = g(q, i, k + 1) - dot * v1;
                if use3 {
                    *q.get_mut(i, k + 2) = g(q, i, k + 2) - dot * v2;
                }
            }

            // Fill-in below the subdiagonal seeds the next reflector
            if k + 3 < p {
                x = g(h, k + 1, k);
                y = g(h, k + 2, k);
                z = g(h, k + 3, k);
            } else if k + 2 < p {
                x = g(h, k + 1, k);
                y = g(h, k + 2, k);
                z = T::zero();
            }
        }

        for i in 0..n {
            for j in 0..i.saturating_sub(1) {
                if negligible(g(h, i, j), g(h, i, i), g(h, j, j), scale) {
                    *h.get_mut(i, j) = T::zero();
                }
            }
        }
    }

    if p == 2 && small(h, 1, scale) {
        *h.get_mut(1, 0) = T::zero();
    }

    Ok(())
}

/// 3-element Householder with implicit leading 1: returns `(v1, v2, tau)`.
///
/// The reflector depends only on the direction of `(x, y, z)`, so the inputs
/// are normalized by their largest magnitude first. Only an exactly zero
/// vector yields the identity (`tau = 0`).
#[inline]
fn householder3<T: FloatScalar>(x: T, y: T, z: T) -> (T, T, T) {
    let alpha = x.abs().max(y.abs()).max(z.abs());
    if alpha == T::zero() {
        return (T::zero(), T::zero(), T::zero());
    }
    let (x, y, z) = (x / alpha, y / alpha, z / alpha);
    let norm = (x * x + y * y + z * z).sqrt();
    let u0 = if x >= T::zero() { x + norm } else { x - norm };
    let v1 = y / u0;
    let v2 = z / u0;
    let two = T::one() + T::one();
    (v1, v2, two / (T::one() + v1 * v1 + v2 * v2))
}

/// 2-element Householder with implicit leading 1: returns `(v1, tau)`.
#[inline]
fn householder2<T: FloatScalar>(x: T, y: T) -> (T, T) {
    let alpha = x.abs().max(y.abs());
    if alpha == T::zero() {
        return (T::zero(), T::zero());
    }
    let (x, y) = (x / alpha, y / alpha);
    let norm = (x * x + y * y).sqrt();
    let u0 = if x >= T::zero() { x + norm } else { x - norm };
    let v1 = y / u0;
    let two = T::one() + T::one();
    (v1, two / (T::one() + v1 * v1))
}

/// Eigenvalues of a quasi-upper-triangular matrix, read off its 1×1 and 2×2
/// diagonal blocks.
pub(crate) fn block_eigenvalues<T: FloatScalar>(s: &impl MatrixRef<T>) -> Vec<Complex<T>> {
    let n = s.nrows();
    let mut out = Vec::with_capacity(n);

    let mut i = 0;
    while i < n {
        // Converged subdiagonals are exactly zero; anything else is a 2×2 block.
        if i + 1 < n && g(s, i + 1, i) != T::zero() {
            let (a, b, c, d) = (g(s, i, i), g(s, i, i + 1), g(s, i + 1, i), g(s, i + 1, i + 1));

            // Solve the block at unit scale, then scale the roots back.
            let m = a.abs().max(b.abs()).max(c.abs()).max(d.abs());
            let (a, b, c, d) = (a / m, b / m, c / m, d / m);

            let half = T::one() / (T::one() + T::one());
            let tr = (a + d) * half;
            let det = a * d - b * c;
            let disc = tr * tr - det;

            if disc >= T::zero() {
                let sq = disc.sqrt();
                out.push(Complex::new((tr + sq) * m, T::zero()));
                out.push(Complex::new((tr - sq) * m, T::zero()));
            } else {
                let sq = (-disc).sqrt();
                out.push(Complex::new(tr * m, sq * m));
                out.push(Complex::new(tr * m, -sq * m));
            }
            i += 2;
        } else {
            out.push(Complex::new(g(s, i, i), T::zero()));
            i += 1;
        }
    }

    out
}

/// Real Schur decomposition of a square matrix: `A = Q S Q^T`.
///
/// S is quasi-upper-triangular: 1×1 diagonal blocks carry real eigenvalues
/// and 2×2 blocks carry complex conjugate pairs.
///
/// # Example
///
/// ```
/// use normis::linalg::Schur;
/// use normis::Matrix;
///
/// // 90° rotation: eigenvalues ±i
/// let a = Matrix::from([[0.0_f64, -1.0], [1.0, 0.0]]);
/// let schur = Schur::new(&a).unwrap();
/// let eig = schur.eigenvalues();
/// assert!(eig[0].re.abs() < 1e-10);
/// assert!((eig[0].im.abs() - 1.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct Schur<T> {
    s: Matrix<T>,
    q: Matrix<T>,
}

impl<T: FloatScalar> Schur<T> {
    /// Decompose with the default budget of `30 * n` sweeps.
    pub fn new(a: &Matrix<T>) -> Result<Self> {
        Self::with_max_iter(a, 30 * a.nrows())
    }

    /// Decompose with an explicit sweep budget.
    pub fn with_max_iter(a: &Matrix<T>, max_iter: usize) -> Result<Self> {
        if !a.is_square() {
            return Err(NormError::NotSquare {
                rows: a.nrows(),
                cols: a.ncols(),
            });
        }
        let n = a.nrows();
        let mut q = Matrix::eye(n);
        if n <= 2 {
            // Already Hessenberg; 2×2 blocks are resolved in closed form.
            return Ok(Self { s: a.clone(), q });
        }

        // Iterate on A / max|a_ij|. Q is unaffected and S scales back linearly.
        let scale = max_abs(a);
        if scale == T::zero() || !scale.is_finite() {
            let mut s = a.clone();
            hessenberg(&mut s, &mut q);
            francis_qr(&mut s, &mut q, max_iter)?;
            return Ok(Self { s, q });
        }

        let mut s = a.map(|x| x / scale);
        hessenberg(&mut s, &mut q);
        francis_qr(&mut s, &mut q, max_iter)?;
        Ok(Self {
            s: s.map(|x| x * scale),
            q,
        })
    }

    /// The quasi-upper-triangular Schur form S.
    #[inline]
    pub fn schur_form(&self) -> &Matrix<T> {
        &self.s
    }

    /// The orthogonal Schur vectors Q.
    #[inline]
    pub fn schur_vectors(&self) -> &Matrix<T> {
        &self.q
    }

    /// All eigenvalues, in diagonal-block order.
    pub fn eigenvalues(&self) -> Vec<Complex<T>> {
        block_eigenvalues(&self.s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    fn assert_near(a: f64, b: f64, tol: f64, msg: &str) {
        assert!((a - b).abs() < tol, "{}: {} vs {} (diff {})", msg, a, b, (a - b).abs());
    }

    fn sorted_re(eig: &[Complex<f64>]) -> Vec<f64> {
        let mut re: Vec<f64> = eig.iter().map(|z| z.re).collect();
        re.sort_by(|a, b| a.total_cmp(b));
        re
    }

    fn verify(a: &Matrix<f64>, schur: &Schur<f64>) {
        let n = a.nrows();
        let s = schur.schur_form();
        let q = schur.schur_vectors();

        let qt = q.transpose();
        let qtaq = &(&qt * a) * q;
        for i in 0..n {
            for j in 0..n {
                assert_near(qtaq[(i, j)], s[(i, j)], TOL, "Q^TAQ");
            }
        }

        let qtq = &qt * q;
        for i in 0..n {
            for j in 0..n {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_near(qtq[(i, j)], expected, TOL, "QtQ");
            }
        }

        for i in 2..n {
            for j in 0..i - 1 {
                assert_near(s[(i, j)], 0.0, TOL, "below subdiagonal");
            }
        }
    }

    #[test]
    fn triangular_real_eigenvalues() {
        let a = Matrix::from([[1.0, 2.0, 3.0], [0.0, 4.0, 5.0], [0.0, 0.0, 6.0]]);
        let schur = Schur::new(&a).unwrap();
        verify(&a, &schur);

        let eig = schur.eigenvalues();
        assert_eq!(sorted_re(&eig), vec![1.0, 4.0, 6.0]);
        for z in &eig {
            assert_near(z.im, 0.0, TOL, "im");
        }
    }

    #[test]
    fn general_3x3_trace() {
        let a = Matrix::from([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 0.0]]);
        let schur = Schur::new(&a).unwrap();
        verify(&a, &schur);

        let eig = schur.eigenvalues();
        let sum: f64 = eig.iter().map(|z| z.re).sum();
        assert_near(sum, 6.0, TOL, "trace");
    }

    #[test]
    fn complex_conjugate_pair() {
        let theta = core::f64::consts::FRAC_PI_4;
        let (s, c) = theta.sin_cos();
        let a = Matrix::from([[c, -s], [s, c]]);
        let eig = Schur::new(&a).unwrap().eigenvalues();
        assert_near(eig[0].re, c, TOL, "re[0]");
        assert_near(eig[1].re, c, TOL, "re[1]");
        assert_near(eig[0].im.abs(), s, TOL, "|im[0]|");
        assert!(eig[0].im * eig[1].im < 0.0, "conjugate pair should have opposite signs");
    }

    #[test]
    fn companion_matrix() {
        // p(x) = (x-1)(x-2)(x-3)
        let a = Matrix::from([[0.0, 0.0, 6.0], [1.0, 0.0, -11.0], [0.0, 1.0, 6.0]]);
        let schur = Schur::new(&a).unwrap();
        verify(&a, &schur);
        let re = sorted_re(&schur.eigenvalues());
        assert_near(re[0], 1.0, TOL, "root 1");
        assert_near(re[1], 2.0, TOL, "root 2");
        assert_near(re[2], 3.0, TOL, "root 3");
    }

    #[test]
    fn rotation_block_in_4x4() {
        // Eigenvalues 2, -1 and ±3i
        let a = Matrix::from([
            [2.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, -3.0, 0.0],
            [0.0, 3.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, -1.0],
        ]);
        let schur = Schur::new(&a).unwrap();
        verify(&a, &schur);
        let mut moduli: Vec<f64> = schur.eigenvalues().iter().map(|z| z.norm()).collect();
        moduli.sort_by(|a, b| a.total_cmp(b));
        assert_near(moduli[0], 1.0, TOL, "|-1|");
        assert_near(moduli[1], 2.0, TOL, "|2|");
        assert_near(moduli[2], 3.0, TOL, "|3i|");
        assert_near(moduli[3], 3.0, TOL, "|-3i|");
    }

    #[test]
    fn symmetric_4x4() {
        let a = Matrix::from([
            [4.0, 1.0, -2.0, 2.0],
            [1.0, 2.0, 0.0, 1.0],
            [-2.0, 0.0, 3.0, -2.0],
            [2.0, 1.0, -2.0, 1.0],
        ]);
        let schur = Schur::new(&a).unwrap();
        verify(&a, &schur);
        let eig = schur.eigenvalues();
        let sum: f64 = eig.iter().map(|z| z.re).sum();
        assert_near(sum, 10.0, TOL, "trace");
        for z in &eig {
            assert_near(z.im, 0.0, TOL, "symmetric has real spectrum");
        }
    }

    #[test]
    fn small_sizes() {
        let one = Matrix::from([[42.0]]);
        assert_eq!(Schur::new(&one).unwrap().eigenvalues(), vec![Complex::new(42.0, 0.0)]);

        let empty = Matrix::<f64>::empty();
        assert!(Schur::new(&empty).unwrap().eigenvalues().is_empty());
    }

    #[test]
    fn two_by_two_closed_form() {
        let a = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
        let re = sorted_re(&Schur::new(&a).unwrap().eigenvalues());
        let r = 33.0_f64.sqrt();
        assert_near(re[0], (5.0 - r) / 2.0, TOL, "λ-");
        assert_near(re[1], (5.0 + r) / 2.0, TOL, "λ+");
    }

    #[test]
    fn f32_support() {
        let a = Matrix::from([[1.0_f32, 2.0, 0.0], [3.0, 4.0, 1.0], [0.0, 1.0, 2.0]]);
        let eig = Schur::new(&a).unwrap().eigenvalues();
        let sum: f32 = eig.iter().map(|z| z.re).sum();
        assert!((sum - 7.0).abs() < 1e-4);
    }

    #[test]
    fn non_square_rejected() {
        let a = Matrix::from([[1.0, 2.0, 3.0]]);
        assert_eq!(
            Schur::new(&a).unwrap_err(),
            NormError::NotSquare { rows: 1, cols: 3 }
        );
    }

    #[test]
    fn eigenvalues_scale_with_the_matrix() {
        let a = Matrix::from([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]]);
        let base = sorted_re(&Schur::new(&a).unwrap().eigenvalues());
        for s in [1e-18, 1e-9, 1e6, 1e150] {
            let scaled = a.map(|x| x * s);
            let schur = Schur::new(&scaled).unwrap();
            let re = sorted_re(&schur.eigenvalues());
            for (x, y) in re.iter().zip(&base) {
                assert_near(x / s, *y, 1e-9, "scaled eigenvalue");
            }
        }
    }

    #[test]
    fn tiny_two_by_two_block() {
        // 1e-20 times a rotation: eigenvalues ±1e-20 i
        let a = Matrix::<f64>::from([[0.0, -1e-20], [1e-20, 0.0]]);
        let eig = Schur::new(&a).unwrap().eigenvalues();
        assert_eq!(eig[0].re, 0.0);
        assert_near(eig[0].im.abs() * 1e20, 1.0, TOL, "|im|");
    }

    #[test]
    fn zero_budget_fails_on_unreduced_matrix() {
        let a = Matrix::from([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 0.0]]);
        assert_eq!(
            Schur::with_max_iter(&a, 0).unwrap_err(),
            NormError::ConvergenceFailure { max_iter: 0 }
        );
    }
}
