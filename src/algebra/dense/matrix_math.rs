#![allow(non_snake_case)]
use crate::algebra::*;
use std::iter::zip;

impl<T> Matrix<T>
where
    T: FloatT,
{
    /// Overwrites `self` with L*L^T, reading only the lower
    /// triangle of `L`.  Entries above the diagonal of `L`
    /// are treated as zero whatever their stored value.
    pub fn mul_llt<S>(&mut self, L: &DenseStorageMatrix<S, T>) -> &Self
    where
        S: AsRef<[T]>,
    {
        assert!(L.is_square());
        assert_eq!(self.size(), L.size());

        let n = L.nrows();
        for i in 0..n {
            let li = L.row_slice(i);
            for j in 0..=i {
                let lj = L.row_slice(j);
                let v = li[..=j].dot(&lj[..=j]);
                self[(i, j)] = v;
                self[(j, i)] = v;
            }
        }
        self
    }
}

impl<S, T> DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
    T: FloatT,
{
    /// Inf-norm of the elementwise difference with a matrix of the same size
    pub fn norm_inf_diff<S2>(&self, B: &DenseStorageMatrix<S2, T>) -> T
    where
        S2: AsRef<[T]>,
    {
        assert_eq!(self.size(), B.size());
        self.data().norm_inf_diff(B.data())
    }

    /// Inf-norm of the difference over the lower triangles only
    pub fn norm_inf_diff_tril<S2>(&self, B: &DenseStorageMatrix<S2, T>) -> T
    where
        S2: AsRef<[T]>,
    {
        assert_eq!(self.size(), B.size());
        (0..self.nrows()).fold(T::zero(), |acc, r| {
            let k = usize::min(r + 1, self.ncols());
            T::max(acc, self.row_slice(r)[..k].norm_inf_diff(&B.row_slice(r)[..k]))
        })
    }

    /// Elementwise closeness test `|a - b| <= atol + rtol * |b|`
    pub fn allclose<S2>(&self, B: &DenseStorageMatrix<S2, T>, rtol: T, atol: T) -> bool
    where
        S2: AsRef<[T]>,
    {
        self.size() == B.size()
            && zip(self.data(), B.data()).all(|(&a, &b)| T::abs(a - b) <= atol + rtol * T::abs(b))
    }

    /// Returns the first (row, col) with row > col at which the
    /// matrix fails to be symmetric to relative tolerance `tol`,
    /// or `None` for a symmetric matrix.
    pub fn symmetry_mismatch(&self, tol: T) -> Option<(usize, usize)> {
        if !self.is_square() {
            return Some((0, 0));
        }
        let n = self.nrows();
        for r in 0..n {
            for c in 0..r {
                let (a, b) = (self[(r, c)], self[(c, r)]);
                let scale = T::max(T::one(), T::max(a.abs(), b.abs()));
                if !(T::abs(a - b) <= tol * scale) {
                    return Some((r, c));
                }
            }
        }
        None
    }
}
