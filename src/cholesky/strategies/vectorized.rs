#![allow(non_snake_case)]

use super::{factor_rows, CholeskyKernel};
use crate::algebra::*;

/// Single threaded strategy with a multi-lane inner product.
///
/// Same loop order as [`SequentialCholesky`](super::SequentialCholesky),
/// but each row prefix product is split over independent accumulators
/// which the compiler maps onto SIMD registers.
#[derive(Debug, Default, Clone, Copy)]
pub struct VectorizedCholesky<T> {
    phantom: std::marker::PhantomData<T>,
}

impl<T> VectorizedCholesky<T>
where
    T: FloatT,
{
    pub fn new() -> Self {
        Self {
            phantom: std::marker::PhantomData,
        }
    }
}

impl<T> CholeskyKernel<T> for VectorizedCholesky<T>
where
    T: FloatT,
{
    fn name(&self) -> &'static str {
        "vectorized"
    }

    fn factor_lower(
        &self,
        M: &BorrowedMatrix<'_, T>,
        L: &mut BorrowedMatrixMut<'_, T>,
    ) -> Result<(), CholeskyError> {
        factor_rows(M, L, |x, y| x.dot_lanes(y))
    }
}
