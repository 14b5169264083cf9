use core::ops::{
    Add, AddAssign, BitXor, Div, DivAssign, Mul, MulAssign, Neg, Not, Sub, SubAssign,
};

use super::Quaternion;
use crate::matrix::vector::Vector3;
use crate::traits::FloatScalar;

// ── Component-wise addition and subtraction ─────────────────────────

impl<T: FloatScalar> Add for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_parts(self.r + rhs.r, self.v + rhs.v)
    }
}

impl<T: FloatScalar> AddAssign for Quaternion<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: FloatScalar> Sub for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_parts(self.r - rhs.r, self.v - rhs.v)
    }
}

impl<T: FloatScalar> SubAssign for Quaternion<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: FloatScalar> Neg for Quaternion<T> {
    type Output = Self;

    /// Negate all four components. `-q` is the same rotation as `q`.
    #[inline]
    fn neg(self) -> Self {
        Self::from_parts(-self.r, -self.v)
    }
}

impl<T: FloatScalar> Neg for &Quaternion<T> {
    type Output = Quaternion<T>;

    #[inline]
    fn neg(self) -> Quaternion<T> {
        -*self
    }
}

/// `!q` is the conjugate.
impl<T: FloatScalar> Not for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        self.conjugate()
    }
}

// ── Hamilton product and quotient ───────────────────────────────────

impl<T: FloatScalar> Mul for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<T: FloatScalar> MulAssign for Quaternion<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl<T: FloatScalar> Div for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        self.divide(&rhs)
    }
}

impl<T: FloatScalar> DivAssign for Quaternion<T> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = self.divide(&rhs);
    }
}

/// `q ^ p` is the dot product.
impl<T: FloatScalar> BitXor for Quaternion<T> {
    type Output = T;

    #[inline]
    fn bitxor(self, rhs: Self) -> T {
        self.dot(&rhs)
    }
}

// ── Scalar multiplication and division ──────────────────────────────

impl<T: FloatScalar> Mul<T> for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        self.scale(rhs)
    }
}

impl<T: FloatScalar> MulAssign<T> for Quaternion<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        *self = self.scale(rhs);
    }
}

// Divides each component; `q / t` is not `q * (1 / t)` in the last bit.
impl<T: FloatScalar> Div<T> for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        Self::from_parts(self.r / rhs, self.v / rhs)
    }
}

impl<T: FloatScalar> DivAssign<T> for Quaternion<T> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Quaternion<$t>> for $t {
                type Output = Quaternion<$t>;

                #[inline]
                fn mul(self, rhs: Quaternion<$t>) -> Quaternion<$t> {
                    rhs.scale(self)
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64);

// ── Vector rotation ─────────────────────────────────────────────────

/// `q * p` rotates `p` by `q`, the same as `p * q.to_matrix33()` for unit `q`.
impl<T: FloatScalar> Mul<Vector3<T>> for Quaternion<T> {
    type Output = Vector3<T>;

    #[inline]
    fn mul(self, p: Vector3<T>) -> Vector3<T> {
        self.rotate_vector(&p)
    }
}

impl<T: FloatScalar> Mul<&Vector3<T>> for Quaternion<T> {
    type Output = Vector3<T>;

    #[inline]
    fn mul(self, p: &Vector3<T>) -> Vector3<T> {
        self.rotate_vector(p)
    }
}

impl<T: FloatScalar> Mul<Vector3<T>> for &Quaternion<T> {
    type Output = Vector3<T>;

    #[inline]
    fn mul(self, p: Vector3<T>) -> Vector3<T> {
        self.rotate_vector(&p)
    }
}

impl<T: FloatScalar> Mul<&Vector3<T>> for &Quaternion<T> {
    type Output = Vector3<T>;

    #[inline]
    fn mul(self, p: &Vector3<T>) -> Vector3<T> {
        self.rotate_vector(p)
    }
}

// ── Reference variants ──────────────────────────────────────────────
// Quaternion is Copy, so &Quaternion ops just deref and delegate.

macro_rules! forward_ref_binop {
    ($Op:ident, $method:ident, $Out:ty) => {
        impl<T: FloatScalar> $Op<Quaternion<T>> for &Quaternion<T> {
            type Output = $Out;
            #[inline]
            fn $method(self, rhs: Quaternion<T>) -> $Out {
                (*self).$method(rhs)
            }
        }

        impl<T: FloatScalar> $Op<&Quaternion<T>> for Quaternion<T> {
            type Output = $Out;
            #[inline]
            fn $method(self, rhs: &Quaternion<T>) -> $Out {
                self.$method(*rhs)
            }
        }

        impl<T: FloatScalar> $Op<&Quaternion<T>> for &Quaternion<T> {
            type Output = $Out;
            #[inline]
            fn $method(self, rhs: &Quaternion<T>) -> $Out {
                (*self).$method(*rhs)
            }
        }
    };
}

forward_ref_binop!(Add, add, Quaternion<T>);
forward_ref_binop!(Sub, sub, Quaternion<T>);
forward_ref_binop!(Mul, mul, Quaternion<T>);
forward_ref_binop!(Div, div, Quaternion<T>);
forward_ref_binop!(BitXor, bitxor, T);
