#![allow(non_snake_case)]

use crate::algebra::*;
use crate::cholesky::CholeskyFactorizer;

/// The 3×3 matrix used for accuracy checks, together with its
/// known lower triangular factor.
pub fn worked_example<T>() -> (Matrix<T>, Matrix<T>)
where
    T: FloatT,
{
    let f = |x: f64| -> T { x.as_T() };

    #[rustfmt::skip]
    let M = Matrix::from(
        &[[f(  4.), f( 12.), f(-16.)],
          [f( 12.), f( 37.), f(-43.)],
          [f(-16.), f(-43.), f( 98.)]]);

    #[rustfmt::skip]
    let L = Matrix::from(
        &[[f( 2.), f(0.), f(0.)],
          [f( 6.), f(1.), f(0.)],
          [f(-8.), f(5.), f(3.)]]);

    (M, L)
}

/// Factors the worked example with `factorizer` and returns the
/// largest absolute deviation from the known factor.  Only the lower
/// triangle is compared.
pub fn accuracy_check<T>(factorizer: &CholeskyFactorizer<T>) -> Result<T, CholeskyError>
where
    T: FloatT,
{
    let (M, expected) = worked_example::<T>();
    let mut L = Matrix::<T>::zeros((3, 3));
    factorizer.factorize(&M, &mut L)?;
    Ok(L.norm_inf_diff_tril(&expected))
}

/// Relative residual max|M - L*L^T| / max|M| of a computed factor,
/// reading only the lower triangle of `L`.
pub fn verify_factor<SM, SL, T>(M: &DenseStorageMatrix<SM, T>, L: &DenseStorageMatrix<SL, T>) -> T
where
    SM: AsRef<[T]>,
    SL: AsRef<[T]>,
    T: FloatT,
{
    let mut P = Matrix::<T>::zeros(L.size());
    P.mul_llt(L);
    let scale = M.data().norm_inf();
    let scale = if scale > T::zero() { scale } else { T::one() };
    P.norm_inf_diff(M) / scale
}
