#![allow(non_snake_case)]

use super::checks::*;
use super::strategies::*;
use super::{CholeskySettings, SettingsError};
use crate::algebra::*;

// "auto" is resolved per call from the matrix dimension, so the
// factorizer keeps both candidates ready instead of rebuilding a
// strategy (and possibly a thread pool) for every call.
#[derive(Debug)]
enum StrategySelection<T>
where
    T: FloatT,
{
    Fixed(CholeskyStrategy<T>),
    Auto {
        small: CholeskyStrategy<T>,
        large: CholeskyStrategy<T>,
        crossover: usize,
    },
}

/// Computes lower triangular Cholesky factors with a configured
/// execution strategy.
///
/// The factorizer holds no state between calls other than its
/// configuration, so one instance may be reused for any number of
/// factorizations of any size.
#[derive(Debug)]
pub struct CholeskyFactorizer<T>
where
    T: FloatT,
{
    pub settings: CholeskySettings<T>,
    selection: StrategySelection<T>,
}

impl<T> CholeskyFactorizer<T>
where
    T: FloatT,
{
    pub fn new(settings: CholeskySettings<T>) -> Result<Self, SettingsError> {
        settings.validate()?;

        let selection = match settings.strategy.as_str() {
            "auto" => StrategySelection::Auto {
                small: CholeskyStrategy::from_name("vectorized", &settings)?,
                large: CholeskyStrategy::from_name("parallel", &settings)?,
                crossover: settings.auto_parallel_dim,
            },
            name => StrategySelection::Fixed(CholeskyStrategy::from_name(name, &settings)?),
        };

        Ok(Self {
            settings,
            selection,
        })
    }

    /// The strategy that will be used for an n×n input
    pub fn strategy_for(&self, n: usize) -> &CholeskyStrategy<T> {
        match self.selection {
            StrategySelection::Fixed(ref strategy) => strategy,
            StrategySelection::Auto {
                ref small,
                ref large,
                crossover,
            } => {
                if n >= crossover {
                    large
                } else {
                    small
                }
            }
        }
    }

    /// Computes L such that M = L*L^T.
    ///
    /// Only the lower triangle of `M` is read, and only the lower
    /// triangle of `L` is written.  Entries of `L` above the diagonal
    /// keep whatever value they had on entry.
    ///
    /// # Errors
    ///
    /// * [`InvalidDimensions`](CholeskyError::InvalidDimensions) if `M` and
    ///   `L` are not square matrices of the same nonzero size.  `L` is
    ///   left untouched.
    /// * [`NotSymmetric`](CholeskyError::NotSymmetric) if symmetry checking
    ///   is enabled and fails.  `L` is left untouched.
    /// * [`NotPositiveDefinite`](CholeskyError::NotPositiveDefinite) if a
    ///   non-positive diagonal residual or a zero pivot is met.  Entries
    ///   computed before the failing pivot are left populated.
    pub fn factorize<SM, SL>(
        &self,
        M: &DenseStorageMatrix<SM, T>,
        L: &mut DenseStorageMatrix<SL, T>,
    ) -> Result<(), CholeskyError>
    where
        SM: AsRef<[T]>,
        SL: AsRef<[T]> + AsMut<[T]>,
    {
        let n = check_dimensions(M, L)?;
        if self.settings.check_symmetry {
            check_symmetry(M, self.settings.symmetry_tol)?;
        }
        self.strategy_for(n)
            .factor_lower(&M.as_view(), &mut L.as_view_mut())
    }
}

/// Computes L such that M = L*L^T using the sequential strategy.
///
/// This is the reference routine: no threads, no configuration, and
/// inner products accumulated strictly left to right.  See
/// [`CholeskyFactorizer::factorize`] for the contract and errors.
///
/// ```
/// use cholbench::algebra::Matrix;
/// use cholbench::cholesky::factorize;
///
/// let M = Matrix::from(&[[4., 12., -16.], [12., 37., -43.], [-16., -43., 98.]]);
/// let mut L = Matrix::<f64>::zeros((3, 3));
/// factorize(&M, &mut L).unwrap();
/// assert_eq!(L, Matrix::from(&[[2., 0., 0.], [6., 1., 0.], [-8., 5., 3.]]));
/// ```
pub fn factorize<SM, SL, T>(
    M: &DenseStorageMatrix<SM, T>,
    L: &mut DenseStorageMatrix<SL, T>,
) -> Result<(), CholeskyError>
where
    SM: AsRef<[T]>,
    SL: AsRef<[T]> + AsMut<[T]>,
    T: FloatT,
{
    check_dimensions(M, L)?;
    SequentialCholesky::new().factor_lower(&M.as_view(), &mut L.as_view_mut())
}
