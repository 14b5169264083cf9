//! Quaternions for 3D rotations.
//!
//! A [`Quaternion`] is a real part `r` and a vector part `v`, representing
//! `r + v·(i, j, k)`. Unit quaternions represent rotations; `q` and `-q`
//! represent the same one.
//!
//! Conventions shared by every conversion in this module:
//!
//! - `q` rotates a vector `p` as `q · (0, p) · q⁻¹` (right-handed, active).
//! - Rotation matrices act on row vectors, `p' = p * m`, so the matrix of a
//!   product `a * b` is `b.to_matrix33() * a.to_matrix33()`: `b` is applied
//!   first.

mod axis_angle;
mod convert;
mod ops;
mod rotation_matrix;

pub use rotation_matrix::{extract_quat, rotation_matrix};

use core::fmt;
use core::ops::{Index, IndexMut};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::compare;
use crate::matrix::in_normal_range;
use crate::matrix::vector::{Vector3, Vector4};
use crate::traits::FloatScalar;

/// Quaternion `r + v·(i, j, k)` over a floating-point element type.
///
/// No magnitude invariant is enforced: unit and non-unit quaternions are
/// both valid values. Operations that assume a unit quaternion (axis-angle
/// extraction, matrix conversion) say so and degrade gracefully.
///
/// Equality (`==`) is exact and component-wise. For tolerance-based
/// comparison use [`equal_with_abs_error`](Self::equal_with_abs_error) or the
/// `approx` traits.
///
/// # Examples
///
/// ```
/// use versor::Quaternion;
///
/// let a = Quaternion::new(1.0, 0.0, 0.0, 1.0);
/// let b = Quaternion::new(1.0, 1.0, 0.0, 0.0);
/// assert_eq!(a * b, Quaternion::new(1.0, 1.0, 1.0, 1.0));
/// assert_eq!(b * a, Quaternion::new(1.0, 1.0, -1.0, 1.0));
/// assert_eq!(Quaternion::new(3.0, 0.0, 4.0, 0.0).length(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion<T> {
    /// Real (scalar) part.
    pub r: T,
    /// Vector (imaginary) part.
    pub v: Vector3<T>,
}

/// Errors from the checked quaternion operations.
///
/// The unchecked counterparts (`normalized`, `inverse`, `from_axis_angle`)
/// return the identity instead.
///
/// ```
/// use versor::{Quaternion, QuaternionError};
///
/// let zero = Quaternion::new(0.0_f64, 0.0, 0.0, 0.0);
/// assert_eq!(zero.try_inverse().unwrap_err(), QuaternionError::ZeroLength);
/// assert_eq!(zero.inverse(), Quaternion::identity());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuaternionError {
    /// Quaternion has zero length, so it has no direction and no inverse.
    ZeroLength,
    /// Rotation axis has zero length.
    ZeroAxis,
}

impl fmt::Display for QuaternionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuaternionError::ZeroLength => write!(f, "quaternion has zero length"),
            QuaternionError::ZeroAxis => write!(f, "rotation axis has zero length"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for QuaternionError {}

// ── Constructors ─────────────────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// Create a quaternion from its real part and vector components.
    #[inline]
    pub fn new(r: T, x: T, y: T, z: T) -> Self {
        Self {
            r,
            v: Vector3::from_array([x, y, z]),
        }
    }

    /// Create a quaternion from a real part and a vector part.
    #[inline]
    pub fn from_parts(r: T, v: Vector3<T>) -> Self {
        Self { r, v }
    }

    /// Identity quaternion `(1, 0, 0, 0)` (no rotation).
    #[inline]
    pub fn identity() -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::zero())
    }

    #[inline]
    fn to_vector4(self) -> Vector4<T> {
        Vector4::from_array([self.r, self.v[0], self.v[1], self.v[2]])
    }

    #[inline]
    fn from_vector4(q: &Vector4<T>) -> Self {
        Self::new(q[0], q[1], q[2], q[3])
    }

    // Exact test; -0.0 counts as zero, NaN does not.
    #[inline]
    fn is_zero(&self) -> bool {
        self.r == T::zero() && self.v == Vector3::zeros()
    }
}

impl<T: FloatScalar> Default for Quaternion<T> {
    /// The identity rotation.
    fn default() -> Self {
        Self::identity()
    }
}

// ── Core operations ──────────────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// Conjugate `(r, -v)`. The inverse rotation for unit quaternions.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::from_parts(self.r, -self.v)
    }

    /// Dot product `r1*r2 + v1·v2` of the four components.
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        self.r * rhs.r + self.v.dot(&rhs.v)
    }

    /// Multiply all four components by `t`.
    #[inline]
    pub fn scale(&self, t: T) -> Self {
        Self::from_parts(self.r * t, self.v * t)
    }

    /// Hamilton product `(r1*r2 - v1·v2, r1*v2 + r2*v1 + v1×v2)`.
    ///
    /// Not commutative. As rotations, `rhs` is applied first.
    #[inline]
    pub fn multiply(&self, rhs: &Self) -> Self {
        Self::from_parts(
            self.r * rhs.r - self.v.dot(&rhs.v),
            rhs.v * self.r + self.v * rhs.r + self.v.cross(&rhs.v),
        )
    }

    /// `self * rhs.inverse()`.
    ///
    /// Dividing by a zero-length quaternion returns `self` unchanged, since
    /// [`inverse`](Self::inverse) falls back to the identity.
    #[inline]
    pub fn divide(&self, rhs: &Self) -> Self {
        self.multiply(&rhs.inverse())
    }

    /// Squared length `self ^ self`.
    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    /// Euclidean length of the four components.
    ///
    /// Rescales internally when the squared length would underflow or
    /// overflow, so it stays accurate for tiny and huge quaternions.
    #[inline]
    pub fn length(&self) -> T {
        self.to_vector4().norm()
    }

    /// Scale in place to unit length.
    ///
    /// A zero-length quaternion becomes the identity.
    pub fn normalize(&mut self) -> &mut Self {
        *self = self.normalized();
        self
    }

    /// Unit-length copy. A zero-length quaternion yields the identity.
    ///
    /// ```
    /// use versor::Quaternion;
    /// let q = Quaternion::new(0.0, 0.0, 2.0, 0.0);
    /// assert_eq!(q.normalized(), Quaternion::new(0.0, 0.0, 1.0, 0.0));
    /// ```
    pub fn normalized(&self) -> Self {
        self.try_normalized().unwrap_or_else(|_| Self::identity())
    }

    /// Unit-length copy, or [`QuaternionError::ZeroLength`].
    pub fn try_normalized(&self) -> Result<Self, QuaternionError> {
        if self.is_zero() {
            return Err(QuaternionError::ZeroLength);
        }
        Ok(Self::from_vector4(&self.to_vector4().normalize()))
    }

    /// Replace with the multiplicative inverse.
    ///
    /// A zero-length quaternion becomes the identity.
    pub fn invert(&mut self) -> &mut Self {
        *self = self.inverse();
        self
    }

    /// Multiplicative inverse `conjugate / (self ^ self)`.
    ///
    /// A zero-length quaternion yields the identity.
    ///
    /// ```
    /// use versor::Quaternion;
    /// let q = Quaternion::new(1.0, 0.0, 0.0, 1.0);
    /// assert_eq!(q.inverse(), Quaternion::new(0.5, 0.0, 0.0, -0.5));
    /// ```
    pub fn inverse(&self) -> Self {
        self.try_inverse().unwrap_or_else(|_| Self::identity())
    }

    /// Multiplicative inverse, or [`QuaternionError::ZeroLength`].
    pub fn try_inverse(&self) -> Result<Self, QuaternionError> {
        if self.is_zero() {
            return Err(QuaternionError::ZeroLength);
        }
        let qdot = self.length_squared();
        if in_normal_range(qdot) {
            return Ok(self.conjugate() / qdot);
        }
        // q = s·u with |u| ~ 1, so q⁻¹ = conj(u) / (u ^ u) / s.
        let s = self.to_vector4().max_abs();
        let u = *self / s;
        Ok(u.conjugate() / u.length_squared() / s)
    }

    /// Rotate `p` by this quaternion: `q · (0, p) · q⁻¹`.
    ///
    /// The result does not depend on the length of `q`. Equivalent to
    /// `p * q.to_matrix33()` for unit quaternions.
    pub fn rotate_vector(&self, p: &Vector3<T>) -> Vector3<T> {
        let pure = Self::from_parts(T::zero(), *p);
        self.multiply(&pure).multiply(&self.inverse()).v
    }
}

// ── Comparison ───────────────────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// All four components within `e` of `other`'s.
    pub fn equal_with_abs_error(&self, other: &Self, e: T) -> bool {
        compare::equal_with_abs_error(self.r, other.r, e) && self.v.equal_with_abs_error(&other.v, e)
    }

    /// All four components within `e` relative to `self`'s.
    pub fn equal_with_rel_error(&self, other: &Self, e: T) -> bool {
        compare::equal_with_rel_error(self.r, other.r, e) && self.v.equal_with_rel_error(&other.v, e)
    }
}

impl<T: FloatScalar> AbsDiffEq for Quaternion<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.r.abs_diff_eq(&other.r, epsilon) && self.v.abs_diff_eq(&other.v, epsilon)
    }
}

impl<T: FloatScalar> RelativeEq for Quaternion<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.r.relative_eq(&other.r, epsilon, max_relative)
            && self.v.relative_eq(&other.v, epsilon, max_relative)
    }
}

impl<T: FloatScalar> UlpsEq for Quaternion<T> {
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
        self.r.ulps_eq(&other.r, epsilon, max_ulps) && self.v.ulps_eq(&other.v, epsilon, max_ulps)
    }
}

// ── Component access ─────────────────────────────────────────────────

// 0 is the real part, 1..=3 the vector part.
impl<T> Index<usize> for Quaternion<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.r,
            1..=3 => &self.v[i - 1],
            _ => panic!("quaternion index {i} out of range"),
        }
    }
}

impl<T> IndexMut<usize> for Quaternion<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        match i {
            0 => &mut self.r,
            1..=3 => &mut self.v[i - 1],
            _ => panic!("quaternion index {i} out of range"),
        }
    }
}

// ── Display ──────────────────────────────────────────────────────────

impl<T: fmt::Display> fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({} + {}i + {}j + {}k)",
            self.r,
            self.v[(0, 0)],
            self.v[(0, 1)],
            self.v[(0, 2)]
        )
    }
}
