#![allow(non_snake_case)]

use crate::algebra::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// Random symmetric positive definite test matrix.
///
/// Draws A (n×n) with entries uniform on [0,1) from a generator seeded
/// with `seed`, and returns M = A^T*A + n*I.  The same `(n, seed)`
/// always yields the same matrix.
pub fn random_spd_matrix<T>(n: usize, seed: u64) -> Matrix<T>
where
    T: FloatT,
{
    let mut rng = StdRng::seed_from_u64(seed);
    let mut A = Matrix::<T>::zeros((n, n));
    for v in A.data_mut().iter_mut() {
        *v = rng.gen::<f64>().as_T();
    }

    // columns of A as contiguous rows
    let At = A.t();
    let At = Matrix::from_fn(At.size(), |r, c| At[(r, c)]);
    let shift: T = n.as_T();

    let mut M = Matrix::<T>::zeros((n, n));
    if n == 0 {
        return M;
    }
    M.data_mut()
        .par_chunks_mut(n)
        .enumerate()
        .for_each(|(i, row)| {
            let ai = At.row_slice(i);
            for (j, mij) in row.iter_mut().enumerate() {
                *mij = ai.dot(At.row_slice(j));
            }
            row[i] += shift;
        });
    M
}
