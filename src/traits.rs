use approx::{RelativeEq, UlpsEq};
use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point elements of vectors, matrices and quaternions.
///
/// Required by anything that needs `sqrt`, `atan2`, `epsilon`, or the
/// smallest normal value. The `approx` comparison traits come along so that
/// tolerance-based equality composes through `Matrix` and `Quaternion`.
///
/// Implemented for `f32` and `f64`.
pub trait FloatScalar:
    Scalar + Float + RelativeEq<Epsilon = Self> + UlpsEq<Epsilon = Self>
{
    /// `2`, built without a fallible cast.
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// `1/2`, built without a fallible cast.
    #[inline]
    fn half() -> Self {
        Self::one() / Self::two()
    }
}

impl<T> FloatScalar for T where
    T: Scalar + Float + RelativeEq<Epsilon = T> + UlpsEq<Epsilon = T>
{
}
