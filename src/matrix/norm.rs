use crate::matrix::vector::Vector;
use crate::traits::{FloatScalar, Scalar};

/// A sum of squares that can be square-rooted without losing precision:
/// at least `2 * MIN_POSITIVE` and finite. NaN counts as in range so that
/// the plain path propagates it.
#[inline]
pub(crate) fn in_normal_range<T: FloatScalar>(n2: T) -> bool {
    !(n2 < T::two() * T::min_positive_value() || n2.is_infinite())
}

// ── Vector norms ────────────────────────────────────────────────────

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Squared L2 norm (dot product with self). No sqrt, works with integers.
    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }
}

impl<T: FloatScalar, const N: usize> Vector<T, N> {
    /// L2 (Euclidean) norm.
    ///
    /// When the squared sum underflows below `2 * MIN_POSITIVE` or overflows
    /// to infinity, the elements are first divided by the largest magnitude,
    /// so tiny and huge vectors keep full precision.
    ///
    /// ```
    /// use versor::Vector3;
    /// let tiny = Vector3::from_array([0.0, 0.0, 1e-170_f64]);
    /// assert_eq!(tiny.norm(), 1e-170);
    /// let huge = Vector3::from_array([3e200_f64, 4e200, 0.0]);
    /// assert!((huge.norm() / 5e200 - 1.0).abs() < 1e-15);
    /// ```
    pub fn norm(&self) -> T {
        let n2 = self.norm_squared();
        if in_normal_range(n2) {
            n2.sqrt()
        } else {
            self.norm_rescaled()
        }
    }

    /// Largest absolute element.
    pub fn max_abs(&self) -> T {
        let mut max = T::zero();
        for i in 0..N {
            let a = self[i].abs();
            if a > max {
                max = a;
            }
        }
        max
    }

    /// Return a unit vector in the same direction.
    ///
    /// The zero vector has no direction and is returned unchanged.
    /// Vectors whose squared norm is outside the normal range are rescaled
    /// by their largest element before dividing.
    pub fn normalize(&self) -> Self {
        let n2 = self.norm_squared();
        if in_normal_range(n2) {
            return *self / n2.sqrt();
        }
        let m = self.max_abs();
        if m == T::zero() {
            return *self;
        }
        let scaled = *self / m;
        scaled / scaled.norm_squared().sqrt()
    }

    fn norm_rescaled(&self) -> T {
        let m = self.max_abs();
        if m == T::zero() || m.is_infinite() {
            return m;
        }
        let mut sum = T::zero();
        for i in 0..N {
            let s = self[i] / m;
            sum = sum + s * s;
        }
        m * sum.sqrt()
    }
}
