use super::{Quaternion, QuaternionError};
use crate::matrix::vector::Vector3;
use crate::traits::FloatScalar;

// ── Axis-angle ──────────────────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// Unit quaternion rotating by `angle` radians about `axis`.
    ///
    /// `axis` need not be unit length. A zero axis yields the identity.
    ///
    /// ```
    /// use versor::{Quaternion, Vector3};
    /// let z = Vector3::from_array([0.0, 0.0, 2.0]);
    /// let q = Quaternion::from_axis_angle(z, core::f64::consts::FRAC_PI_2);
    /// let s = core::f64::consts::FRAC_1_SQRT_2;
    /// assert!((q.r - s).abs() < 1e-15);
    /// assert!((q.v[2] - s).abs() < 1e-15);
    /// ```
    pub fn from_axis_angle(axis: Vector3<T>, angle: T) -> Self {
        Self::try_from_axis_angle(axis, angle).unwrap_or_else(|_| Self::identity())
    }

    /// Like [`from_axis_angle`](Self::from_axis_angle), but a zero axis is
    /// [`QuaternionError::ZeroAxis`].
    pub fn try_from_axis_angle(axis: Vector3<T>, angle: T) -> Result<Self, QuaternionError> {
        if axis == Vector3::zeros() {
            return Err(QuaternionError::ZeroAxis);
        }
        let half = angle * T::half();
        Ok(Self::from_parts(half.cos(), axis.normalize() * half.sin()))
    }

    /// Set to the rotation by `angle` radians about `axis`.
    pub fn set_axis_angle(&mut self, axis: Vector3<T>, angle: T) -> &mut Self {
        *self = Self::from_axis_angle(axis, angle);
        self
    }

    /// Unit rotation axis: the normalized vector part.
    ///
    /// The vector part is rescaled by its largest component when its squared
    /// length underflows, so the axis of a tiny rotation is still exact.
    /// The identity rotation has no axis and yields the zero vector.
    pub fn axis(&self) -> Vector3<T> {
        self.v.normalize()
    }

    /// Rotation angle `2 * atan2(|v|, r)`, in `[0, 2π]`.
    ///
    /// Accurate down to angles near `MIN_POSITIVE` and for non-unit
    /// quaternions, with no clamping of `r`.
    pub fn angle(&self) -> T {
        T::two() * self.v.norm().atan2(self.r)
    }

    /// `(axis(), angle())`.
    pub fn to_axis_angle(&self) -> (Vector3<T>, T) {
        (self.axis(), self.angle())
    }
}

// ── Shortest arc between two directions ─────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// Unit quaternion rotating direction `from` onto direction `to` about
    /// their common normal. Neither input needs unit length.
    ///
    /// Arcs wider than a quarter turn go through the bisector in two halves.
    /// For exactly opposite directions the result is a half turn about an
    /// axis perpendicular to `from`. A zero input yields the identity.
    ///
    /// ```
    /// use versor::{Quaternion, Vector3};
    /// let x = Vector3::from_array([1.0, 0.0, 0.0]);
    /// let y = Vector3::from_array([0.0, 3.0, 0.0]);
    /// let q = Quaternion::from_rotation_arc(&x, &y);
    /// let p = q * x;
    /// assert!(p.equal_with_abs_error(&Vector3::from_array([0.0, 1.0, 0.0]), 1e-15));
    /// ```
    pub fn from_rotation_arc(from: &Vector3<T>, to: &Vector3<T>) -> Self {
        let zero = Vector3::zeros();
        let f0 = from.normalize();
        let t0 = to.normalize();
        if f0 == zero || t0 == zero {
            return Self::identity();
        }

        if f0.dot(&t0) >= T::zero() {
            return Self::half_arc(&f0, &t0);
        }

        let h0 = (f0 + t0).normalize();
        if h0 != zero {
            return Self::half_arc(&f0, &h0).multiply(&Self::half_arc(&h0, &t0));
        }

        // Opposite directions: turn about the world axis `from` leans on least.
        let (a, b, c) = (f0[0] * f0[0], f0[1] * f0[1], f0[2] * f0[2]);
        let e = if a <= b && a <= c {
            Vector3::from_array([T::one(), T::zero(), T::zero()])
        } else if b <= c {
            Vector3::from_array([T::zero(), T::one(), T::zero()])
        } else {
            Vector3::from_array([T::zero(), T::zero(), T::one()])
        };
        Self::from_parts(T::zero(), f0.cross(&e).normalize())
    }

    /// Set to the rotation carrying direction `from` onto direction `to`.
    pub fn set_rotation(&mut self, from: &Vector3<T>, to: &Vector3<T>) -> &mut Self {
        *self = Self::from_rotation_arc(from, to);
        self
    }

    // Unit inputs at most a quarter turn apart. With h the unit bisector,
    // (f·h, f×h) is the rotation by twice the f-h angle.
    fn half_arc(f0: &Vector3<T>, t0: &Vector3<T>) -> Self {
        let h0 = (*f0 + *t0).normalize();
        Self::from_parts(f0.dot(&h0), f0.cross(&h0))
    }
}

// ── Logarithm and exponential ───────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// Natural logarithm `(ln|q|, axis * atan2(|v|, r))`.
    ///
    /// For a unit quaternion this is the pure quaternion
    /// `(0, axis * angle / 2)`. A real quaternion has a zero vector part.
    pub fn ln(&self) -> Self {
        let theta = self.v.norm().atan2(self.r);
        Self::from_parts(self.length().ln(), self.v.normalize() * theta)
    }

    /// Exponential `e^r * (cos|v|, v/|v| * sin|v|)`.
    ///
    /// Inverse of [`ln`](Self::ln). A pure quaternion `(0, axis * angle / 2)`
    /// maps to the unit rotation by `angle` about `axis`.
    pub fn exp(&self) -> Self {
        let theta = self.v.norm();
        let k = if theta == T::zero() {
            T::one()
        } else {
            theta.sin() / theta
        };
        let er = self.r.exp();
        Self::from_parts(er * theta.cos(), self.v * (er * k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use core::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 4.0 * f64::EPSILON;

    fn v3(x: f64, y: f64, z: f64) -> Vector3<f64> {
        Vector3::from_array([x, y, z])
    }

    #[test]
    fn axis_angle_quarter_turn() {
        let mut q = Quaternion::identity();
        q.set_axis_angle(v3(0.0, 0.0, 1.0), FRAC_PI_2);
        assert_abs_diff_eq!(q.axis(), v3(0.0, 0.0, 1.0), epsilon = EPS);
        assert_abs_diff_eq!(q.angle(), FRAC_PI_2, epsilon = EPS);

        let (axis, angle) = q.to_axis_angle();
        assert_eq!(axis, q.axis());
        assert_eq!(angle, q.angle());
    }

    #[test]
    fn axis_is_normalized_input() {
        let q = Quaternion::from_axis_angle(v3(0.0, 3.0, 4.0), 1.0);
        assert_abs_diff_eq!(q.axis(), v3(0.0, 0.6, 0.8), epsilon = EPS);
        assert_abs_diff_eq!(q.length(), 1.0, epsilon = EPS);
    }

    #[test]
    fn negated_axis_and_angle_give_same_quaternion() {
        let a = Quaternion::from_axis_angle(v3(1.0, 2.0, 3.0), 0.7);
        let b = Quaternion::from_axis_angle(v3(-1.0, -2.0, -3.0), -0.7);
        assert_abs_diff_eq!(a, b, epsilon = EPS);
    }

    #[test]
    fn angle_range_covers_full_turn() {
        let q = Quaternion::from_axis_angle(v3(1.0, 0.0, 0.0), 1.5 * PI);
        assert_abs_diff_eq!(q.angle(), 1.5 * PI, epsilon = 4.0 * EPS);
        assert_eq!(Quaternion::new(-1.0, 0.0, 0.0, 0.0).angle(), 2.0 * PI);
    }

    #[test]
    fn zero_axis() {
        assert_eq!(
            Quaternion::try_from_axis_angle(v3(0.0, 0.0, 0.0), 1.0),
            Err(QuaternionError::ZeroAxis)
        );
        let mut q = Quaternion::new(0.0, 1.0, 0.0, 0.0);
        q.set_axis_angle(v3(0.0, 0.0, 0.0), 1.0);
        assert_eq!(q, Quaternion::identity());
    }

    #[test]
    fn identity_has_zero_axis_and_angle() {
        let q = Quaternion::<f64>::identity();
        assert_eq!(q.axis(), v3(0.0, 0.0, 0.0));
        assert_eq!(q.angle(), 0.0);
    }

    #[test]
    fn tiny_angle_survives_rescaling() {
        let t = 0.001 * f64::MIN_POSITIVE.sqrt();
        let mut q = Quaternion::from_axis_angle(v3(0.0, 0.0, 1.0), t);
        assert_eq!(q.axis(), v3(0.0, 0.0, 1.0));
        assert_abs_diff_eq!(q.angle(), t, epsilon = t * EPS);

        q *= 1.1;
        assert_eq!(q.axis(), v3(0.0, 0.0, 1.0));
        assert_abs_diff_eq!(q.angle(), t, epsilon = t * EPS);
    }

    #[test]
    fn rotation_arc_quarter_turn() {
        let mut q = Quaternion::identity();
        q.set_rotation(&v3(1.0, 0.0, 0.0), &v3(0.0, 1.0, 0.0));
        let s = core::f64::consts::FRAC_1_SQRT_2;
        assert_abs_diff_eq!(q, Quaternion::new(s, 0.0, 0.0, s), epsilon = EPS);
    }

    #[test]
    fn rotation_arc_wide_angle() {
        let from = v3(1.0, 0.0, 0.0);
        let to = v3(-1.0, 1.0, 0.0);
        let q = Quaternion::from_rotation_arc(&from, &to);
        assert_abs_diff_eq!(q.length(), 1.0, epsilon = EPS);
        assert_abs_diff_eq!(q * from, to.normalize(), epsilon = EPS);
        assert_abs_diff_eq!(q.angle(), 0.75 * PI, epsilon = 2.0 * EPS);
    }

    #[test]
    fn rotation_arc_opposite_directions() {
        let from = v3(2.0, 0.0, 0.0);
        let q = Quaternion::from_rotation_arc(&from, &v3(-1.0, 0.0, 0.0));
        assert_eq!(q, Quaternion::new(0.0, 0.0, 0.0, 1.0));
        assert_abs_diff_eq!(q * v3(1.0, 0.0, 0.0), v3(-1.0, 0.0, 0.0), epsilon = EPS);

        let from = v3(1.0, 2.0, 3.0);
        let q = Quaternion::from_rotation_arc(&from, &(-from));
        assert_abs_diff_eq!(q.r, 0.0, epsilon = EPS);
        assert_abs_diff_eq!(q.v.dot(&from), 0.0, epsilon = 4.0 * EPS);
        assert_abs_diff_eq!(q * from.normalize(), -from.normalize(), epsilon = 4.0 * EPS);
    }

    #[test]
    fn rotation_arc_same_direction_is_identity() {
        let d = v3(0.3, -0.4, 1.2);
        assert_abs_diff_eq!(
            Quaternion::from_rotation_arc(&d, &(d * 5.0)),
            Quaternion::identity(),
            epsilon = EPS
        );
    }

    #[test]
    fn rotation_arc_zero_input() {
        let q = Quaternion::from_rotation_arc(&v3(0.0, 0.0, 0.0), &v3(0.0, 1.0, 0.0));
        assert_eq!(q, Quaternion::identity());
    }

    #[test]
    fn ln_of_unit_is_half_angle_axis() {
        let q = Quaternion::from_axis_angle(v3(0.0, 1.0, 0.0), 1.2);
        let l = q.ln();
        assert_abs_diff_eq!(l, Quaternion::new(0.0, 0.0, 0.6, 0.0), epsilon = EPS);
    }

    #[test]
    fn exp_inverts_ln() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_abs_diff_eq!(q.ln().exp(), q, epsilon = 1e-12);

        let u = Quaternion::from_axis_angle(v3(1.0, -1.0, 0.5), 2.5);
        assert_abs_diff_eq!(u.ln().exp(), u, epsilon = 1e-14);
    }

    #[test]
    fn exp_of_zero_is_identity() {
        let z = Quaternion::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(z.exp(), Quaternion::identity());
        assert_eq!(Quaternion::<f64>::identity().ln(), z);
    }
}
