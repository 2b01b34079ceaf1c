use core::fmt::Debug;
use num_traits::{Float, Num, One, ToPrimitive, Zero};

/// Trait for types that can be used as matrix and vector elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all primitive integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num + ToPrimitive + MulAccumulate {
    /// Widen to `f64`, the type every norm is reported in.
    ///
    /// Values with no `f64` representation map to NaN.
    ///
    /// ```
    /// use normis::Scalar;
    /// assert_eq!(Scalar::to_real(-3_i32), -3.0);
    /// assert_eq!(Scalar::to_real(0.5_f32), 0.5);
    /// ```
    #[inline]
    fn to_real(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl<T: Copy + PartialEq + Debug + Zero + One + Num + ToPrimitive + MulAccumulate> Scalar for T {}

/// Overflow-aware multiply-accumulate, used by the matrix product.
///
/// Integers report overflow as `None`. Floats follow IEEE semantics (an
/// overflowing product is infinite) and always succeed.
///
/// ```
/// use normis::traits::MulAccumulate;
/// assert_eq!(1_i32.mul_accumulate(3, 4), Some(13));
/// assert_eq!(0_i32.mul_accumulate(100_000, 100_000), None);
/// assert_eq!(0.5_f64.mul_accumulate(2.0, 0.25), Some(1.0));
/// ```
pub trait MulAccumulate: Sized {
    /// `self + a * b`, or `None` if the result is not representable.
    fn mul_accumulate(self, a: Self, b: Self) -> Option<Self>;
}

macro_rules! impl_mul_accumulate_int {
    ($($t:ty),*) => {$(
        impl MulAccumulate for $t {
            #[inline]
            fn mul_accumulate(self, a: Self, b: Self) -> Option<Self> {
                a.checked_mul(b).and_then(|p| self.checked_add(p))
            }
        }
    )*};
}

macro_rules! impl_mul_accumulate_float {
    ($($t:ty),*) => {$(
        impl MulAccumulate for $t {
            #[inline]
            fn mul_accumulate(self, a: Self, b: Self) -> Option<Self> {
                Some(self + a * b)
            }
        }
    )*};
}

impl_mul_accumulate_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_mul_accumulate_float!(f32, f64);

/// Trait for floating-point matrix elements.
///
/// Required by the eigenvalue routines, which need `sqrt`, `abs`, and
/// machine epsilon.
pub trait FloatScalar: Scalar + Float {}

impl<T: Scalar + Float> FloatScalar for T {}

/// Read-only access to a matrix-like type.
///
/// The eigenvalue kernels are written against this trait rather than a
/// concrete storage layout.
pub trait MatrixRef<T> {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn get(&self, row: usize, col: usize) -> &T;
}

/// Mutable access to a matrix-like type.
///
/// Extends `MatrixRef` with mutable element access, enabling the in-place
/// reductions (Hessenberg, Francis QR) to work generically.
pub trait MatrixMut<T>: MatrixRef<T> {
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_real_integers() {
        assert_eq!(Scalar::to_real(7_u8), 7.0);
        assert_eq!(Scalar::to_real(i64::MIN), i64::MIN as f64);
    }

    #[test]
    fn mul_accumulate_detects_integer_overflow() {
        assert_eq!(i64::MAX.mul_accumulate(1, 1), None);
        assert_eq!(0_u8.mul_accumulate(16, 16), None);
        assert_eq!(10_u8.mul_accumulate(15, 15), Some(235));
        assert_eq!((-5_i16).mul_accumulate(-3, 7), Some(-26));
    }

    #[test]
    fn mul_accumulate_floats_never_fail() {
        assert_eq!(1.0_f32.mul_accumulate(2.0, 3.0), Some(7.0));
        assert_eq!(0.0_f64.mul_accumulate(1e200, 1e200), Some(f64::INFINITY));
    }

    #[test]
    fn to_real_floats() {
        assert_eq!(Scalar::to_real(1.5_f64), 1.5);
        assert!(Scalar::to_real(f64::NAN).is_nan());
    }
}
