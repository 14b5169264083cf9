use super::Quaternion;
use crate::matrix::vector::Vector3;
use crate::matrix::{Matrix3, Matrix4};
use crate::traits::FloatScalar;

impl<T: FloatScalar> Quaternion<T> {
    /// 3×3 rotation matrix acting on row vectors: `p * q.to_matrix33()`
    /// rotates `p` by `q`.
    ///
    /// Assumes a unit quaternion. The matrix of `a * b` is
    /// `b.to_matrix33() * a.to_matrix33()`.
    ///
    /// ```
    /// use versor::{Quaternion, Vector3};
    /// let s = core::f64::consts::FRAC_1_SQRT_2;
    /// let q = Quaternion::new(s, 0.0, 0.0, s); // quarter turn about z
    /// let p = Vector3::from_array([1.0, 0.0, 0.0]) * q.to_matrix33();
    /// assert!(p.equal_with_abs_error(&Vector3::from_array([0.0, 1.0, 0.0]), 1e-15));
    /// ```
    pub fn to_matrix33(&self) -> Matrix3<T> {
        let one = T::one();
        let two = T::two();
        let (r, x, y, z) = (self.r, self.v[0], self.v[1], self.v[2]);
        Matrix3::new([
            [
                one - two * (y * y + z * z),
                two * (x * y + z * r),
                two * (z * x - y * r),
            ],
            [
                two * (x * y - z * r),
                one - two * (z * z + x * x),
                two * (y * z + x * r),
            ],
            [
                two * (z * x + y * r),
                two * (y * z - x * r),
                one - two * (y * y + x * x),
            ],
        ])
    }

    /// 4×4 homogeneous rotation: [`to_matrix33`](Self::to_matrix33) in the
    /// upper-left block, identity elsewhere.
    pub fn to_matrix44(&self) -> Matrix4<T> {
        let mut m = Matrix4::eye();
        m.set_block(0, 0, &self.to_matrix33());
        m
    }

    /// Unit quaternion from a row-vector rotation matrix.
    ///
    /// Uses the real part when the trace is positive, otherwise the largest
    /// diagonal element (ties go to the lower index), so no pivot is small.
    /// The result is normalized, which gives a close unit quaternion when
    /// `m` is only approximately orthogonal.
    ///
    /// ```
    /// use versor::{Quaternion, Vector3};
    /// let q = Quaternion::from_axis_angle(Vector3::from_array([1.0, 2.0, 3.0]), 2.9);
    /// let back = Quaternion::from_rotation_matrix(&q.to_matrix33());
    /// assert!(back.equal_with_abs_error(&q, 1e-14) || back.equal_with_abs_error(&-q, 1e-14));
    /// ```
    pub fn from_rotation_matrix(m: &Matrix3<T>) -> Self {
        let half = T::half();
        let one = T::one();
        let tr = m.trace();

        let q = if tr > T::zero() {
            let s = (tr + one).sqrt();
            let k = half / s;
            Self::new(
                s * half,
                (m[(1, 2)] - m[(2, 1)]) * k,
                (m[(2, 0)] - m[(0, 2)]) * k,
                (m[(0, 1)] - m[(1, 0)]) * k,
            )
        } else {
            let i = m.max_diagonal_index();
            let j = (i + 1) % 3;
            let k = (j + 1) % 3;
            // s >= 1 here: tr <= 0 and m[i][i] is the largest diagonal.
            let s = ((m[(i, i)] - (m[(j, j)] + m[(k, k)])) + one).sqrt();
            let f = half / s;
            let mut v = [T::zero(); 3];
            v[i] = s * half;
            v[j] = (m[(i, j)] + m[(j, i)]) * f;
            v[k] = (m[(i, k)] + m[(k, i)]) * f;
            Self::from_parts((m[(j, k)] - m[(k, j)]) * f, Vector3::from_array(v))
        };
        q.normalized()
    }
}

/// Unit quaternion from the rotation in the upper-left 3×3 block of `m`.
///
/// See [`Quaternion::from_rotation_matrix`].
///
/// ```
/// use versor::{extract_quat, rotation_matrix, Vector3};
/// let m = rotation_matrix(&Vector3::from_array([1.0, 0.0, 0.0]), &Vector3::from_array([0.0, 1.0, 1.0]));
/// let q = extract_quat(&m);
/// assert!(q.to_matrix44().equal_with_abs_error(&m, 8.0 * f64::EPSILON));
/// ```
pub fn extract_quat<T: FloatScalar>(m: &Matrix4<T>) -> Quaternion<T> {
    Quaternion::from_rotation_matrix(&m.top_left::<3, 3>())
}

/// 4×4 matrix rotating direction `from` onto direction `to`.
///
/// The matrix of [`Quaternion::from_rotation_arc`].
pub fn rotation_matrix<T: FloatScalar>(from: &Vector3<T>, to: &Vector3<T>) -> Matrix4<T> {
    Quaternion::from_rotation_arc(from, to).to_matrix44()
}
