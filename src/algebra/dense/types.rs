#![allow(non_snake_case)]
use crate::algebra::*;
use std::ops::{Index, IndexMut};

/// Core dense matrix type for owned and borrowed matrices.
///
/// Data is stored in **row major** format, so that row `i` of a
/// matrix is the contiguous slice `data[i*n..(i+1)*n]`.   The
/// triangular factorization kernels rely on this to walk two
/// contiguous row prefixes in every inner product.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
    T: Sized,
{
    /// dimensions
    pub size: (usize, usize),
    /// vector of data in row major format
    pub data: S,
    pub(crate) phantom: std::marker::PhantomData<T>,
}

/// Owned dense matrix
pub type Matrix<T> = DenseStorageMatrix<Vec<T>, T>;
/// Dense matrix borrowing an immutable slice
pub type BorrowedMatrix<'a, T> = DenseStorageMatrix<&'a [T], T>;
/// Dense matrix borrowing a mutable slice
pub type BorrowedMatrixMut<'a, T> = DenseStorageMatrix<&'a mut [T], T>;

/// Read only transposed view of a matrix
#[derive(Debug, Clone, Copy)]
pub struct Adjoint<'a, M> {
    pub src: &'a M,
}

impl<S, T> ShapedMatrix for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
{
    fn nrows(&self) -> usize {
        self.size.0
    }
    fn ncols(&self) -> usize {
        self.size.1
    }
    fn size(&self) -> (usize, usize) {
        self.size
    }
}

impl<S, T> DenseMatrix<T> for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
{
    #[inline]
    fn index_linear(&self, idx: (usize, usize)) -> usize {
        idx.0 * self.ncols() + idx.1
    }
    fn data(&self) -> &[T] {
        self.data.as_ref()
    }
}

impl<S, T> DenseMatrixMut<T> for DenseStorageMatrix<S, T>
where
    S: AsMut<[T]> + AsRef<[T]>,
{
    fn data_mut(&mut self) -> &mut [T] {
        self.data.as_mut()
    }
}

impl<S, T> Index<(usize, usize)> for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
    T: Sized,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &T {
        let lidx = self.index_linear(idx);
        &self.data()[lidx]
    }
}

impl<S, T> IndexMut<(usize, usize)> for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]> + AsMut<[T]>,
    T: Sized,
{
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        let lidx = self.index_linear(idx);
        &mut self.data_mut()[lidx]
    }
}

impl<S, T> DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
{
    pub fn row_slice(&self, row: usize) -> &[T] {
        let (m, n) = self.size;
        assert!(row < m);
        &self.data()[(row * n)..(row + 1) * n]
    }

    /// immutable view of the same data
    pub fn as_view(&self) -> BorrowedMatrix<'_, T> {
        DenseStorageMatrix {
            size: self.size,
            data: self.data(),
            phantom: std::marker::PhantomData,
        }
    }

    /// transposed view
    pub fn t(&self) -> Adjoint<'_, Self> {
        Adjoint { src: self }
    }
}

impl<S, T> DenseStorageMatrix<S, T>
where
    S: AsMut<[T]> + AsRef<[T]>,
{
    pub fn row_slice_mut(&mut self, row: usize) -> &mut [T] {
        let (m, n) = self.size;
        assert!(row < m);
        &mut self.data_mut()[(row * n)..(row + 1) * n]
    }

    /// mutable view of the same data
    pub fn as_view_mut(&mut self) -> BorrowedMatrixMut<'_, T> {
        DenseStorageMatrix {
            size: self.size,
            data: self.data.as_mut(),
            phantom: std::marker::PhantomData,
        }
    }
}

// ------------------------------------------------
// Adjoint implementation for DenseMatrix.  This is a read
// only view of the matrix that allows indexing, but does
// not allow for modification of the underlying data.

impl<S, T> ShapedMatrix for Adjoint<'_, DenseStorageMatrix<S, T>>
where
    S: AsRef<[T]>,
{
    fn nrows(&self) -> usize {
        self.src.ncols()
    }
    fn ncols(&self) -> usize {
        self.src.nrows()
    }
}

impl<S, T> DenseMatrix<T> for Adjoint<'_, DenseStorageMatrix<S, T>>
where
    S: AsRef<[T]>,
    T: Sized,
{
    fn index_linear(&self, idx: (usize, usize)) -> usize {
        //reverse the indices
        self.src.index_linear((idx.1, idx.0))
    }
    fn data(&self) -> &[T] {
        self.src.data()
    }
}

impl<S, T> Index<(usize, usize)> for Adjoint<'_, DenseStorageMatrix<S, T>>
where
    S: AsRef<[T]>,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &T {
        let lidx = self.index_linear(idx);
        &self.data()[lidx]
    }
}

// ------------------------------------------------
// BorrowedMatrix implementation

impl<'a, T> BorrowedMatrix<'a, T>
where
    T: FloatT,
{
    pub fn from_slice(data: &'a [T], m: usize, n: usize) -> Self {
        assert_eq!(data.len(), m * n);
        Self {
            size: (m, n),
            data,
            phantom: std::marker::PhantomData::<T>,
        }
    }
}

impl<'a, T> BorrowedMatrixMut<'a, T>
where
    T: FloatT,
{
    pub fn from_slice_mut(data: &'a mut [T], m: usize, n: usize) -> Self {
        assert_eq!(data.len(), m * n);
        Self {
            size: (m, n),
            data,
            phantom: std::marker::PhantomData::<T>,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_indexing_matrix() -> Matrix<f64> {
        // Create a 3x3 matrix in row-major order:
        // [ 1.0  2.0  3.0 ]
        // [ 4.0  5.0  6.0 ]
        // [ 7.0  8.0  9.0 ]
        Matrix::from(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]])
    }

    #[test]
    fn test_matrix_indexing() {
        let matrix = create_indexing_matrix();

        assert_eq!(matrix[(0, 0)], 1.0);
        assert_eq!(matrix[(0, 1)], 2.0);
        assert_eq!(matrix[(0, 2)], 3.0);
        assert_eq!(matrix[(1, 0)], 4.0);
        assert_eq!(matrix[(2, 1)], 8.0);

        // linear indexing runs along rows
        assert_eq!(matrix.index_linear((0, 2)), 2);
        assert_eq!(matrix.index_linear((1, 0)), 3);
        assert_eq!(matrix.index_linear((2, 2)), 8);

        assert_eq!(matrix.row_slice(1), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_adjoint_indexing() {
        let matrix = create_indexing_matrix();
        let adjoint = matrix.t();

        assert_eq!(adjoint[(0, 1)], 4.0);
        assert_eq!(adjoint[(1, 0)], 2.0);
        assert_eq!(adjoint[(2, 0)], 3.0);
        assert_eq!(adjoint.index_linear((0, 1)), 3);
    }

    #[test]
    fn test_borrowed_views() {
        let mut data = vec![0.0; 6];
        {
            let mut B = BorrowedMatrixMut::from_slice_mut(&mut data, 2, 3);
            B[(1, 2)] = 5.0;
            B.row_slice_mut(0)[1] = 2.0;
        }
        let B = BorrowedMatrix::from_slice(&data, 2, 3);
        assert_eq!(B.size(), (2, 3));
        assert_eq!(B[(1, 2)], 5.0);
        assert_eq!(B[(0, 1)], 2.0);
        assert!(!B.is_square());
    }
}
