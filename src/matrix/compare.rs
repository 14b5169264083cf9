use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::compare;
use crate::traits::FloatScalar;
use crate::Matrix;

impl<T: FloatScalar, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Every element is within `e` of the corresponding element of `other`.
    ///
    /// ```
    /// use versor::Matrix3;
    /// let a: Matrix3<f64> = Matrix3::eye();
    /// let mut b = a;
    /// b[(0, 1)] = 1e-12;
    /// assert!(a.equal_with_abs_error(&b, 1e-9));
    /// assert!(!a.equal_with_abs_error(&b, 1e-15));
    /// ```
    pub fn equal_with_abs_error(&self, other: &Self, e: T) -> bool {
        self.zip_all(other, |a, b| compare::equal_with_abs_error(a, b, e))
    }

    /// Every element is within `e` relative to the corresponding element of `self`.
    pub fn equal_with_rel_error(&self, other: &Self, e: T) -> bool {
        self.zip_all(other, |a, b| compare::equal_with_rel_error(a, b, e))
    }

    fn zip_all(&self, other: &Self, f: impl Fn(T, T) -> bool) -> bool {
        self.data
            .iter()
            .flatten()
            .zip(other.data.iter().flatten())
            .all(|(&a, &b)| f(a, b))
    }
}

impl<T: FloatScalar, const M: usize, const N: usize> AbsDiffEq for Matrix<T, M, N> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.zip_all(other, |a, b| a.abs_diff_eq(&b, epsilon))
    }
}

impl<T: FloatScalar, const M: usize, const N: usize> RelativeEq for Matrix<T, M, N> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.zip_all(other, |a, b| a.relative_eq(&b, epsilon, max_relative))
    }
}

impl<T: FloatScalar, const M: usize, const N: usize> UlpsEq for Matrix<T, M, N> {
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
        self.zip_all(other, |a, b| a.ulps_eq(&b, epsilon, max_ulps))
    }
}
