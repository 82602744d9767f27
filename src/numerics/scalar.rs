//! Scalar abstraction shared by every recursion in the crate.
//!
//! Purpose
//! -------
//! Let the LPC and cepstrum recursions be written once and evaluated either
//! on plain floats (`f32`, `f64`) or on forward-mode dual numbers
//! ([`crate::autodiff::Dual`]) so that the same unrolled code path yields
//! exact directional derivatives.
//!
//! Conventions
//! -----------
//! - `to_f64` is lossy for dual numbers (it drops the tangent); it exists for
//!   diagnostics and comparisons only, never for arithmetic.
//! - `clip` follows `f64::clamp` semantics for NaN (NaN passes through).

use num_traits::{One, Zero};
use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Scalar — element type accepted by the transforms.
///
/// Implemented for `f32`, `f64`, and [`crate::autodiff::Dual`].
pub trait Scalar:
    Copy
    + Debug
    + PartialOrd
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Lift an `f64` constant into this scalar type.
    fn from_f64(value: f64) -> Self;

    /// Primal value as `f64`.
    fn to_f64(self) -> f64;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Clamp into `[lo, hi]`; NaN is returned unchanged.
    fn clip(self, lo: Self, hi: Self) -> Self;

    /// Square root; NaN for negative primal values.
    fn sqrt(self) -> Self;

    /// Machine epsilon of the primal type.
    fn epsilon() -> f64;

    /// `true` when the primal value is neither NaN nor infinite.
    fn is_finite(self) -> bool {
        self.to_f64().is_finite()
    }
}

macro_rules! impl_scalar_float {
    ($ty:ty) => {
        impl Scalar for $ty {
            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $ty
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn abs(self) -> Self {
                <$ty>::abs(self)
            }

            #[inline]
            fn clip(self, lo: Self, hi: Self) -> Self {
                <$ty>::clamp(self, lo, hi)
            }

            #[inline]
            fn sqrt(self) -> Self {
                <$ty>::sqrt(self)
            }

            #[inline]
            fn epsilon() -> f64 {
                <$ty>::EPSILON as f64
            }

            #[inline]
            fn is_finite(self) -> bool {
                <$ty>::is_finite(self)
            }
        }
    };
}

impl_scalar_float!(f32);
impl_scalar_float!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Confirm that `clip` saturates at both bounds and passes NaN through,
    // matching `f64::clamp`.
    //
    // Given
    // -----
    // - Values below, inside, and above `[-0.5, 0.5]`, plus NaN.
    //
    // Expect
    // ------
    // - Saturated values at the bounds, unchanged interior value, NaN out.
    fn clip_saturates_and_propagates_nan() {
        // Arrange
        let (lo, hi) = (-0.5_f64, 0.5_f64);

        // Act / Assert
        assert_eq!(Scalar::clip(-2.0_f64, lo, hi), -0.5);
        assert_eq!(Scalar::clip(0.25_f64, lo, hi), 0.25);
        assert_eq!(Scalar::clip(3.0_f64, lo, hi), 0.5);
        assert!(Scalar::clip(f64::NAN, lo, hi).is_nan());
    }

    #[test]
    // Purpose
    // -------
    // Check the single-precision round trip through `from_f64`/`to_f64`.
    //
    // Given
    // -----
    // - The constant `0.125`, exactly representable in `f32`.
    //
    // Expect
    // ------
    // - The value survives unchanged and reports as finite.
    fn f32_round_trip_is_exact_for_representable_values() {
        let v = <f32 as Scalar>::from_f64(0.125);
        assert_eq!(v.to_f64(), 0.125);
        assert!(Scalar::is_finite(v));
        assert!(!Scalar::is_finite(<f32 as Scalar>::from_f64(f64::INFINITY)));
        assert_eq!(<f32 as Scalar>::epsilon(), f32::EPSILON as f64);
        assert_eq!(Scalar::sqrt(0.25_f32), 0.5);
    }
}
