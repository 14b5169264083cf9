//! Scalar tolerance comparisons.
//!
//! `Matrix` and `Quaternion` expose methods of the same names that apply
//! these element by element, and implement the `approx` traits for use with
//! `approx::assert_abs_diff_eq!` and friends.

use crate::traits::FloatScalar;

/// `|a - b| <= e`.
///
/// ```
/// use versor::compare::equal_with_abs_error;
/// assert!(equal_with_abs_error(1.0, 1.0 + 1e-9, 1e-8));
/// assert!(!equal_with_abs_error(1.0, 1.1, 1e-8));
/// ```
#[inline]
pub fn equal_with_abs_error<T: FloatScalar>(a: T, b: T, e: T) -> bool {
    (a - b).abs() <= e
}

/// `|a - b| <= e * |a|`, i.e. the error relative to `a`.
///
/// ```
/// use versor::compare::equal_with_rel_error;
/// assert!(equal_with_rel_error(1e-150_f64, 1.0000001e-150, 1e-6));
/// assert!(!equal_with_rel_error(1e-150_f64, 2e-150, 1e-6));
/// ```
#[inline]
pub fn equal_with_rel_error<T: FloatScalar>(a: T, b: T, e: T) -> bool {
    (a - b).abs() <= e * a.abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abs_error_is_inclusive() {
        assert!(equal_with_abs_error(1.0_f32, 1.5, 0.5));
        assert!(!equal_with_abs_error(1.0_f32, 1.5, 0.25));
    }

    #[test]
    fn rel_error_scales_with_reference() {
        assert!(equal_with_rel_error(1000.0_f64, 1001.0, 1e-3));
        assert!(!equal_with_rel_error(1.0_f64, 2.0, 1e-3));
        // Zero reference only matches exactly.
        assert!(equal_with_rel_error(0.0_f64, 0.0, 1e-3));
        assert!(!equal_with_rel_error(0.0_f64, 1e-300, 1e-3));
    }

    #[test]
    fn nan_never_matches() {
        assert!(!equal_with_abs_error(f64::NAN, f64::NAN, 1.0));
    }
}
