#![allow(non_snake_case)]

use super::checks::check_dimensions;
use crate::algebra::*;
use itertools::izip;

/// Square root free factorization M = L*D*L^T.
///
/// On success `L` holds a unit lower triangular factor and `d` the
/// diagonal of D.  Only the lower triangle of `M` is read and only the
/// lower triangle of `L` is written.
///
/// Pivots may be negative, so any symmetric matrix whose leading
/// principal minors are nonzero can be factored.  A zero or non-finite
/// pivot returns [`SingularPivot`](CholeskyError::SingularPivot).
pub fn factorize_ldlt<SM, SL, T>(
    M: &DenseStorageMatrix<SM, T>,
    L: &mut DenseStorageMatrix<SL, T>,
    d: &mut [T],
) -> Result<(), CholeskyError>
where
    SM: AsRef<[T]>,
    SL: AsRef<[T]> + AsMut<[T]>,
    T: FloatT,
{
    let n = check_dimensions(M, L)?;
    if d.len() != n {
        return Err(CholeskyError::InvalidDimensions {
            input: M.size(),
            output: (d.len(), 1),
        });
    }

    let data = L.data_mut();

    for j in 0..n {
        let (head, tail) = data.split_at_mut((j + 1) * n);
        let row_j = &mut head[j * n..];

        let dj = M[(j, j)] - dot_scaled(&row_j[..j], &row_j[..j], &d[..j]);
        if dj == T::zero() || !dj.is_finite() {
            return Err(CholeskyError::SingularPivot { index: j });
        }
        d[j] = dj;
        row_j[j] = T::one();

        let row_j: &[T] = row_j;
        let inv = T::recip(dj);
        for (k, row_i) in tail.chunks_mut(n).enumerate() {
            let i = j + 1 + k;
            let s = dot_scaled(&row_i[..j], &row_j[..j], &d[..j]);
            row_i[j] = inv * (M[(i, j)] - s);
        }
    }

    Ok(())
}

// sum of x[k]*y[k]*d[k]
fn dot_scaled<T: FloatT>(x: &[T], y: &[T], d: &[T]) -> T {
    izip!(x, y, d).fold(T::zero(), |acc, (&x, &y, &d)| acc + x * y * d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ldlt_worked_example() {
        #[rustfmt::skip]
        let M = Matrix::from(
            &[[  4.,  12., -16.],
              [ 12.,  37., -43.],
              [-16., -43.,  98.]]);

        let mut L = Matrix::<f64>::zeros((3, 3));
        let mut d = vec![0.0; 3];
        factorize_ldlt(&M, &mut L, &mut d).unwrap();

        assert_eq!(d, vec![4.0, 1.0, 9.0]);
        assert_eq!(
            L,
            Matrix::from(&[[1., 0., 0.], [3., 1., 0.], [-4., 5., 1.]])
        );
    }

    #[test]
    fn test_ldlt_indefinite() {
        let M = Matrix::from(&[[1.0, 0.0], [0.0, -1.0]]);
        let mut L = Matrix::<f64>::zeros((2, 2));
        let mut d = vec![0.0; 2];
        factorize_ldlt(&M, &mut L, &mut d).unwrap();
        assert_eq!(d, vec![1.0, -1.0]);
    }

    #[test]
    fn test_ldlt_singular() {
        let M = Matrix::from(&[[1.0, 1.0], [1.0, 1.0]]);
        let mut L = Matrix::<f64>::zeros((2, 2));
        let mut d = vec![0.0; 2];
        assert_eq!(
            factorize_ldlt(&M, &mut L, &mut d),
            Err(CholeskyError::SingularPivot { index: 1 })
        );
    }

    #[test]
    fn test_ldlt_bad_diagonal_length() {
        let M = Matrix::<f64>::identity(3);
        let mut L = Matrix::<f64>::zeros((3, 3));
        let mut d = vec![0.0; 2];
        assert!(matches!(
            factorize_ldlt(&M, &mut L, &mut d),
            Err(CholeskyError::InvalidDimensions { .. })
        ));
    }
}
