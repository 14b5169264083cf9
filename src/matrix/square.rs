use crate::traits::Scalar;
use crate::Matrix;

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Sum of diagonal elements.
    pub fn trace(&self) -> T {
        let mut sum = T::zero();
        for i in 0..N {
            sum = sum + self[(i, i)];
        }
        sum
    }
}

impl<T: Scalar + PartialOrd, const N: usize> Matrix<T, N, N> {
    /// Index of the largest diagonal element. Ties go to the lower index.
    pub fn max_diagonal_index(&self) -> usize {
        let mut best = 0;
        for i in 1..N {
            if self[(i, i)] > self[(best, best)] {
                best = i;
            }
        }
        best
    }
}
