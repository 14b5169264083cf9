use num_traits::AsPrimitive;

use super::Quaternion;
use crate::traits::FloatScalar;

impl<T: FloatScalar> Quaternion<T> {
    /// Convert each component to another float width with `as`.
    ///
    /// No rescaling and no renormalization: widening is exact, narrowing
    /// rounds each component independently.
    ///
    /// ```
    /// use versor::Quaternion;
    /// let q = Quaternion::new(1.0_f64, 2.0, 3.0, 4.0);
    /// let f: Quaternion<f32> = q.cast();
    /// assert_eq!(f, Quaternion::new(1.0_f32, 2.0, 3.0, 4.0));
    /// ```
    pub fn cast<U>(&self) -> Quaternion<U>
    where
        T: AsPrimitive<U>,
        U: FloatScalar + 'static,
    {
        Quaternion::new(self.r.as_(), self.v[0].as_(), self.v[1].as_(), self.v[2].as_())
    }
}

impl From<Quaternion<f32>> for Quaternion<f64> {
    fn from(q: Quaternion<f32>) -> Self {
        q.cast()
    }
}
