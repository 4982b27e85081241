#![allow(non_snake_case)]

use super::CholeskyKernel;
use crate::algebra::*;
use crate::cholesky::SettingsError;
use rayon::prelude::*;

/// Multithreaded strategy built as a staged pipeline over columns.
///
/// Within one row the entries depend on each other (entry (i,j) reads
/// (i,0..j)), so rows cannot be split across workers.  Within one
/// column they can: once the pivot (j,j) is known, every entry (i,j)
/// with i > j depends only on columns 0..j, which earlier stages have
/// finished.  Each stage therefore
///
/// 1. resolves the pivot on the calling thread,
/// 2. fans the rows below it out across workers, each writing one cell,
/// 3. joins before the next column starts.
///
/// Every cell is computed from the same operands with the same kernel
/// as [`VectorizedCholesky`](super::VectorizedCholesky), so the two
/// strategies produce identical factors.
#[derive(Debug)]
pub struct ParallelCholesky<T> {
    /// rows below the pivot required before a stage runs in parallel
    threshold: usize,
    /// dedicated pool, or `None` for the global rayon pool
    pool: Option<rayon::ThreadPool>,
    phantom: std::marker::PhantomData<T>,
}

impl<T> ParallelCholesky<T>
where
    T: FloatT,
{
    pub fn new(threshold: usize, max_threads: u32) -> Result<Self, SettingsError> {
        let pool = match max_threads {
            0 => None,
            nthreads => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(nthreads as usize)
                    .build()
                    .map_err(|e| SettingsError::ThreadPool(e.to_string()))?;
                Some(pool)
            }
        };

        Ok(Self {
            threshold: threshold.max(1),
            pool,
            phantom: std::marker::PhantomData,
        })
    }

    /// number of worker threads stages will be spread across
    pub fn num_threads(&self) -> usize {
        match self.pool {
            Some(ref pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }

    fn factor_columns(
        &self,
        M: &BorrowedMatrix<'_, T>,
        L: &mut BorrowedMatrixMut<'_, T>,
    ) -> Result<(), CholeskyError> {
        let n = M.nrows();
        let data = L.data_mut();

        for j in 0..n {
            let (head, tail) = data.split_at_mut((j + 1) * n);

            // stage 1: the pivot, from the finished prefix of row j
            let row_j = &mut head[j * n..];
            let s = row_j[..j].dot_lanes(&row_j[..j]);
            let val = M[(j, j)] - s;
            if !(val > T::zero()) {
                return Err(CholeskyError::NotPositiveDefinite { index: j });
            }
            row_j[j] = val.sqrt();

            // stage 2: rows below the pivot.  The pivot is strictly
            // positive here, so no division check is needed.
            let row_j: &[T] = row_j;
            let pivot = row_j[j];
            let update = |(k, row_i): (usize, &mut [T])| {
                let i = j + 1 + k;
                let s = row_i[..j].dot_lanes(&row_j[..j]);
                row_i[j] = (M[(i, j)] - s) / pivot;
            };

            // stage 3: the join is implicit in for_each returning
            if n - j - 1 >= self.threshold {
                tail.par_chunks_mut(n).enumerate().for_each(update);
            } else {
                tail.chunks_mut(n).enumerate().for_each(update);
            }
        }

        Ok(())
    }
}

impl<T> CholeskyKernel<T> for ParallelCholesky<T>
where
    T: FloatT,
{
    fn name(&self) -> &'static str {
        "parallel"
    }

    fn factor_lower(
        &self,
        M: &BorrowedMatrix<'_, T>,
        L: &mut BorrowedMatrixMut<'_, T>,
    ) -> Result<(), CholeskyError> {
        match self.pool {
            Some(ref pool) => pool.install(|| self.factor_columns(M, L)),
            None => self.factor_columns(M, L),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_pool_configuration() {
        let kernel = ParallelCholesky::<f64>::new(8, 2).unwrap();
        assert_eq!(kernel.num_threads(), 2);

        let kernel = ParallelCholesky::<f64>::new(0, 0).unwrap();
        assert_eq!(kernel.threshold, 1);
        assert!(kernel.num_threads() >= 1);
    }
}
