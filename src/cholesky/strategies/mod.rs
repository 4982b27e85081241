#![allow(non_snake_case)]

use crate::algebra::*;
use crate::cholesky::{CholeskySettings, SettingsError};
use enum_dispatch::*;

mod parallel;
mod sequential;
mod vectorized;

pub use parallel::*;
pub use sequential::*;
pub use vectorized::*;

/// A single execution strategy for the lower triangular factorization.
///
/// Implementors receive views whose dimensions have already been
/// checked: `M` and `L` are both n×n with n ≥ 1.  Only the lower
/// triangle of `M` may be read, and only the lower triangle of `L`
/// may be written.
#[enum_dispatch]
pub trait CholeskyKernel<T>
where
    T: FloatT,
{
    /// short name used in reports and settings
    fn name(&self) -> &'static str;

    /// Factors `M` into `L` such that M = L*L^T
    fn factor_lower(
        &self,
        M: &BorrowedMatrix<'_, T>,
        L: &mut BorrowedMatrixMut<'_, T>,
    ) -> Result<(), CholeskyError>;
}

/// The supported execution strategies
#[enum_dispatch(CholeskyKernel<T>)]
#[derive(Debug)]
pub enum CholeskyStrategy<T>
where
    T: FloatT,
{
    Sequential(SequentialCholesky<T>),
    Vectorized(VectorizedCholesky<T>),
    Parallel(ParallelCholesky<T>),
}

impl<T> CholeskyStrategy<T>
where
    T: FloatT,
{
    /// Builds a concrete strategy from its name.   "auto" is not a
    /// concrete strategy and is resolved by the factorizer instead.
    pub fn from_name(name: &str, settings: &CholeskySettings<T>) -> Result<Self, SettingsError> {
        match name {
            "sequential" => Ok(SequentialCholesky::new().into()),
            "vectorized" => Ok(VectorizedCholesky::new().into()),
            "parallel" => {
                let kernel =
                    ParallelCholesky::new(settings.parallel_threshold, settings.max_threads)?;
                Ok(kernel.into())
            }
            _ => Err(SettingsError::BadFieldValue("strategy")),
        }
    }
}

// Row oriented factorization shared by the single threaded
// strategies.  Row i is produced left to right, so every entry
// reads the finished prefix of row i and of an earlier row j.
// The inner product kernel is the only thing that varies.
pub(crate) fn factor_rows<T, F>(
    M: &BorrowedMatrix<'_, T>,
    L: &mut BorrowedMatrixMut<'_, T>,
    dot: F,
) -> Result<(), CholeskyError>
where
    T: FloatT,
    F: Fn(&[T], &[T]) -> T,
{
    let n = M.nrows();
    let data = L.data_mut();

    for i in 0..n {
        let (done, rest) = data.split_at_mut(i * n);
        let row_i = &mut rest[..n];
        let m_i = M.row_slice(i);

        // below diagonal entries
        for j in 0..i {
            let row_j = &done[j * n..(j + 1) * n];
            let pivot = row_j[j];
            if pivot == T::zero() {
                return Err(CholeskyError::NotPositiveDefinite { index: j });
            }
            let s = dot(&row_i[..j], &row_j[..j]);
            row_i[j] = (m_i[j] - s) / pivot;
        }

        // diagonal entry.  NaN residuals also fail here
        let s = dot(&row_i[..i], &row_i[..i]);
        let val = m_i[i] - s;
        if !(val > T::zero()) {
            return Err(CholeskyError::NotPositiveDefinite { index: i });
        }
        row_i[i] = val.sqrt();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_from_name() {
        let settings = CholeskySettings::<f64>::default();
        for name in ["sequential", "vectorized", "parallel"] {
            let strategy = CholeskyStrategy::from_name(name, &settings).unwrap();
            assert_eq!(strategy.name(), name);
        }
        assert!(CholeskyStrategy::from_name("auto", &settings).is_err());
        assert!(CholeskyStrategy::from_name("avx", &settings).is_err());
    }
}
