#![allow(non_snake_case)]
use crate::algebra::*;

impl<T> Matrix<T>
where
    T: FloatT,
{
    pub fn zeros(size: (usize, usize)) -> Self {
        let (m, n) = size;
        let data = vec![T::zero(); m * n];
        Self {
            size,
            data,
            phantom: std::marker::PhantomData,
        }
    }

    pub fn identity(n: usize) -> Self {
        let mut mat = Matrix::zeros((n, n));
        mat.set_identity();
        mat
    }

    pub fn set_identity(&mut self) {
        assert!(self.is_square());
        self.data_mut().set(T::zero());
        for i in 0..self.nrows() {
            self[(i, i)] = T::one();
        }
    }

    /// new matrix from row major data
    pub fn new_from_slice(size: (usize, usize), src: &[T]) -> Self {
        let (m, n) = size;
        assert!(m * n == src.len());
        Self {
            size,
            data: src.to_vec(),
            phantom: std::marker::PhantomData,
        }
    }

    /// Builds a matrix entry by entry from a closure of (row, col)
    pub fn from_fn(size: (usize, usize), f: impl Fn(usize, usize) -> T) -> Self {
        let (m, n) = size;
        let data = (0..m)
            .flat_map(|r| (0..n).map(move |c| (r, c)))
            .map(|(r, c)| f(r, c))
            .collect();
        Self {
            size,
            data,
            phantom: std::marker::PhantomData,
        }
    }

    pub fn resize(&mut self, size: (usize, usize)) {
        if size == self.size {
            return;
        }
        self.data.resize(size.0 * size.1, T::zero());
        self.size = size;
    }
}

impl<S, T> DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
    T: FloatT,
{
    /// copy of the lower triangle (including the diagonal),
    /// with zeros above the diagonal
    pub fn tril(&self) -> Matrix<T> {
        Matrix::from_fn(self.size, |r, c| if c <= r { self[(r, c)] } else { T::zero() })
    }

    pub fn is_tril(&self) -> bool {
        // check upper triangle for any nonzero entries
        for r in 0..self.nrows() {
            for c in (r + 1)..self.ncols() {
                if self[(r, c)] != T::zero() {
                    return false;
                }
            }
        }
        true
    }
}

impl<T, const R: usize, const C: usize> From<&[[T; C]; R]> for Matrix<T>
where
    T: FloatT,
{
    // rows of the array become rows of the matrix
    fn from(rows: &[[T; C]; R]) -> Self {
        let data: Vec<T> = rows.iter().flat_map(|row| row.iter().copied()).collect();
        Matrix::new_from_slice((R, C), &data)
    }
}

impl<S, T> std::fmt::Display for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
    T: FloatT,
{
    // This trait requires `fmt` with this exact signature.
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f)?;
        for i in 0..self.nrows() {
            write!(f, "[ ")?;
            for v in self.row_slice(i) {
                write!(f, " {:?}", v)?;
            }
            writeln!(f, "]")?;
        }
        writeln!(f)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_and_identity() {
        let A = Matrix::from(&[[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(A.data, vec![1.0, 2.0, 3.0, 4.0]);

        let I = Matrix::<f64>::identity(3);
        assert_eq!(I[(1, 1)], 1.0);
        assert_eq!(I[(1, 2)], 0.0);
        assert!(I.is_tril());
    }

    #[test]
    fn test_tril() {
        let A = Matrix::from(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let L = A.tril();
        assert!(L.is_tril());
        assert!(!A.is_tril());
        assert_eq!(L[(2, 1)], 8.0);
        assert_eq!(L[(0, 2)], 0.0);
    }

    #[test]
    fn test_resize() {
        let mut A = Matrix::<f64>::zeros((2, 2));
        A.resize((3, 3));
        assert_eq!(A.size(), (3, 3));
        assert_eq!(A.data.len(), 9);
    }
}
