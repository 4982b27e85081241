#![allow(non_snake_case)]

use super::{CholeskyFactorizer, CholeskySettings, SettingsError};
use crate::algebra::*;

/// Owns a Cholesky factor and the operations that reuse it.
pub struct CholeskyEngine<T>
where
    T: FloatT,
{
    /// lower triangular factor (stored as square dense)
    pub L: Matrix<T>,
    factorizer: CholeskyFactorizer<T>,
    work: Vec<T>,
    // true only while L holds the result of a successful `factor`
    factored: bool,
}

impl<T> CholeskyEngine<T>
where
    T: FloatT,
{
    pub fn new(n: usize, settings: CholeskySettings<T>) -> Result<Self, SettingsError> {
        let L = Matrix::<T>::zeros((n, n));
        let factorizer = CholeskyFactorizer::new(settings)?;
        let work = vec![T::zero(); n];
        Ok(Self {
            L,
            factorizer,
            work,
            factored: false,
        })
    }

    /// Resizes the factor storage.  Any previous factor is discarded.
    pub fn resize(&mut self, n: usize) {
        self.factored = false;
        self.L.resize((n, n));
        self.work.resize(n, T::zero());
    }

    /// Factors `A`, reading only its lower triangle.  The upper
    /// triangle of the stored factor is reset to zero first.
    pub fn factor<S>(&mut self, A: &DenseStorageMatrix<S, T>) -> Result<(), CholeskyError>
    where
        S: AsRef<[T]>,
    {
        self.factored = false;
        self.L.data_mut().set(T::zero());
        self.factorizer.factorize(A, &mut self.L)?;
        self.factored = true;
        Ok(())
    }

    /// true if the last call to [`factor`](Self::factor) succeeded
    pub fn is_factored(&self) -> bool {
        self.factored
    }

    /// Solve AX = B, where B is a matrix with (possibly) multiple columns.
    /// Uses the factor computed by [`factor`](Self::factor).  B is
    /// modified in place and holds X after the call.
    ///
    /// Returns [`NotFactored`](CholeskyError::NotFactored) and leaves B
    /// untouched if no successful factorization is held.
    pub fn solve<S>(&mut self, B: &mut DenseStorageMatrix<S, T>) -> Result<(), CholeskyError>
    where
        S: AsRef<[T]> + AsMut<[T]>,
    {
        if !self.factored {
            return Err(CholeskyError::NotFactored);
        }
        let n = self.L.nrows();
        if B.nrows() != n {
            return Err(CholeskyError::InvalidDimensions {
                input: self.L.size(),
                output: B.size(),
            });
        }

        let L = &self.L;
        let x = &mut self.work;

        for col in 0..B.ncols() {
            for i in 0..n {
                x[i] = B[(i, col)];
            }

            // Forward substitution: solve Ly = b
            for i in 0..n {
                let s = L.row_slice(i)[..i].dot(&x[..i]);
                x[i] = (x[i] - s) / L[(i, i)];
            }

            // Backward substitution: solve L^T x = y
            for i in (0..n).rev() {
                let mut s = T::zero();
                for k in (i + 1)..n {
                    s += L[(k, i)] * x[k];
                }
                x[i] = (x[i] - s) / L[(i, i)];
            }

            for i in 0..n {
                B[(i, col)] = x[i];
            }
        }
        Ok(())
    }

    /// computes log(det(X)) for the matrix X = LL^T, or `None`
    /// if no successful factorization is held
    pub fn logdet(&self) -> Option<T> {
        if !self.factored {
            return None;
        }
        let mut ld = T::zero();
        let n = self.L.nrows();
        for i in 0..n {
            ld += T::ln(self.L[(i, i)]);
        }
        Some(ld + ld)
    }
}

macro_rules! generate_test_cholesky_engine {
    ($fxx:ty, $test_name:ident, $tolfn:ident) => {
        #[test]
        fn $test_name() {
            for strategy in ["sequential", "vectorized", "parallel"] {
                #[rustfmt::skip]
                let S = Matrix::<$fxx>::from(
                &[[ 8., -2., 4.],
                  [-2., 12., 2.],
                  [ 4.,  2., 6.]]);

                let settings = super::CholeskySettingsBuilder::<$fxx>::default()
                    .strategy(strategy.to_string())
                    .build()
                    .unwrap();
                let mut eng = CholeskyEngine::<$fxx>::new(3, settings).unwrap();
                assert!(eng.factor(&S).is_ok());

                let mut M = Matrix::<$fxx>::zeros((3, 3));
                M.mul_llt(&eng.L);
                assert!(M.norm_inf_diff(&S) < (1e-8 as $fxx).$tolfn());

                // now try to solve with multiple RHS
                let X = Matrix::<$fxx>::from(&[
                    [1., 2.], //
                    [3., 4.], //
                    [5., 6.],
                ]);
                let mut B = Matrix::<$fxx>::from(&[
                    [22., 32.], //
                    [44., 56.], //
                    [40., 52.],
                ]);

                eng.solve(&mut B).unwrap();
                assert!(B.norm_inf_diff(&X) <= (1e-10 as $fxx).$tolfn());
            }
        }
    };
}

generate_test_cholesky_engine!(f32, test_cholesky_engine_f32, sqrt);
generate_test_cholesky_engine!(f64, test_cholesky_engine_f64, abs);

macro_rules! generate_test_cholesky_logdet {
    ($fxx:ty, $test_name:ident, $tolfn:ident) => {
        #[test]
        #[allow(clippy::excessive_precision)]
        fn $test_name() {
            #[rustfmt::skip]
            let S = Matrix::<$fxx>::from(
            &[[ 8., -2., 4.],
              [-2., 12., 2.],
              [ 4.,  2., 6.]]);

            let mut eng = CholeskyEngine::<$fxx>::new(3, CholeskySettings::default()).unwrap();
            assert!(eng.factor(&S).is_ok());
            assert!((eng.logdet().unwrap() - 5.69035945432406).abs() < (1e-10 as $fxx).$tolfn());
        }
    };
}

generate_test_cholesky_logdet!(f32, test_cholesky_logdet_f32, sqrt);
generate_test_cholesky_logdet!(f64, test_cholesky_logdet_f64, abs);

#[test]
fn test_cholesky_engine_solve_bad_rhs() {
    let mut eng = CholeskyEngine::<f64>::new(3, CholeskySettings::default()).unwrap();
    eng.factor(&Matrix::<f64>::identity(3)).unwrap();
    let mut B = Matrix::<f64>::zeros((2, 1));
    assert!(eng.solve(&mut B).is_err());
}

#[test]
fn test_cholesky_engine_failed_factor() {
    let mut eng = CholeskyEngine::<f64>::new(2, CholeskySettings::default()).unwrap();
    let mut B = Matrix::from(&[[1.0], [1.0]]);

    // nothing factored yet
    assert_eq!(eng.solve(&mut B), Err(CholeskyError::NotFactored));
    assert_eq!(eng.logdet(), None);

    let M = Matrix::from(&[[1.0, 0.0], [0.0, -1.0]]);
    assert_eq!(
        eng.factor(&M),
        Err(CholeskyError::NotPositiveDefinite { index: 1 })
    );
    assert!(!eng.is_factored());
    assert_eq!(eng.solve(&mut B), Err(CholeskyError::NotFactored));
    assert_eq!(eng.logdet(), None);
    assert_eq!(B, Matrix::from(&[[1.0], [1.0]]));

    // a later success makes the factor usable again
    eng.factor(&Matrix::<f64>::identity(2)).unwrap();
    assert!(eng.solve(&mut B).is_ok());
    assert_eq!(eng.logdet(), Some(0.0));

    // resizing discards it
    eng.resize(3);
    assert_eq!(eng.logdet(), None);
}
