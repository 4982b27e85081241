#![allow(non_snake_case)]

use super::{factor_rows, CholeskyKernel};
use crate::algebra::*;

/// Scalar reference strategy.
///
/// Rows are produced in order and every inner product is accumulated
/// strictly left to right, so results are reproducible bit for bit
/// across runs and platforms.
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialCholesky<T> {
    phantom: std::marker::PhantomData<T>,
}

impl<T> SequentialCholesky<T>
where
    T: FloatT,
{
    pub fn new() -> Self {
        Self {
            phantom: std::marker::PhantomData,
        }
    }
}

impl<T> CholeskyKernel<T> for SequentialCholesky<T>
where
    T: FloatT,
{
    fn name(&self) -> &'static str {
        "sequential"
    }

    fn factor_lower(
        &self,
        M: &BorrowedMatrix<'_, T>,
        L: &mut BorrowedMatrixMut<'_, T>,
    ) -> Result<(), CholeskyError> {
        factor_rows(M, L, |x, y| x.dot(y))
    }
}
