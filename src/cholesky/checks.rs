#![allow(non_snake_case)]
use crate::algebra::*;

// Argument checks shared by every factorization entry point.
// All of them run before the output is touched.

/// Returns the common dimension of `M` and `L`, or an error if
/// either is not square, if they differ, or if they are empty.
pub(crate) fn check_dimensions<SM, SL, T>(
    M: &DenseStorageMatrix<SM, T>,
    L: &DenseStorageMatrix<SL, T>,
) -> Result<usize, CholeskyError>
where
    SM: AsRef<[T]>,
    SL: AsRef<[T]>,
{
    let (input, output) = (M.size(), L.size());
    if !M.is_square() || input != output || input.0 == 0 {
        return Err(CholeskyError::InvalidDimensions { input, output });
    }
    Ok(input.0)
}

pub(crate) fn check_symmetry<S, T>(M: &DenseStorageMatrix<S, T>, tol: T) -> Result<(), CholeskyError>
where
    S: AsRef<[T]>,
    T: FloatT,
{
    match M.symmetry_mismatch(tol) {
        Some((row, col)) => Err(CholeskyError::NotSymmetric { row, col }),
        None => Ok(()),
    }
}

#[test]
fn test_check_dimensions() {
    let M = Matrix::<f64>::zeros((3, 3));
    let L = Matrix::<f64>::zeros((3, 3));
    assert_eq!(check_dimensions(&M, &L), Ok(3));

    let L = Matrix::<f64>::zeros((2, 2));
    assert_eq!(
        check_dimensions(&M, &L),
        Err(CholeskyError::InvalidDimensions {
            input: (3, 3),
            output: (2, 2)
        })
    );

    let M = Matrix::<f64>::zeros((2, 3));
    let L = Matrix::<f64>::zeros((2, 3));
    assert!(check_dimensions(&M, &L).is_err());

    let M = Matrix::<f64>::zeros((0, 0));
    let L = Matrix::<f64>::zeros((0, 0));
    assert!(check_dimensions(&M, &L).is_err());
}
