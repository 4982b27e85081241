use crate::algebra::*;
use derive_builder::Builder;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

#[derive(Error, Debug)]
/// Error type returned by settings validation
pub enum SettingsError {
    /// A field holds a value outside of its allowed set
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
    /// The worker thread pool could not be created
    #[error("Unable to build thread pool ({0})")]
    ThreadPool(String),
}

/// Configuration of a [`CholeskyFactorizer`](crate::cholesky::CholeskyFactorizer)
///
/// Build with [`CholeskySettingsBuilder`], which validates the
/// `strategy` string and the parallel threshold at build time.

#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CholeskySettings<T: FloatT> {
    ///execution strategy ("auto", "sequential", "vectorized" or "parallel")
    #[builder(default = r#""auto".to_string()"#)]
    pub strategy: String,

    ///matrix dimension from which the "auto" strategy runs in parallel
    #[builder(default = "256")]
    pub auto_parallel_dim: usize,

    ///minimum number of rows below a pivot before a column
    ///stage is spread across worker threads
    #[builder(default = "64")]
    pub parallel_threshold: usize,

    ///maximum worker threads for the parallel strategy
    ///choosing 0 lets rayon choose for itself
    #[builder(default = "0")]
    pub max_threads: u32,

    ///check the input for symmetry before factoring
    #[builder(default = "false")]
    pub check_symmetry: bool,

    ///relative tolerance used by the symmetry check
    #[builder(default = "(1e-12).as_T()")]
    pub symmetry_tol: T,
}

impl<T> Default for CholeskySettings<T>
where
    T: FloatT,
{
    fn default() -> CholeskySettings<T> {
        CholeskySettingsBuilder::<T>::default().build().unwrap()
    }
}

impl<T> CholeskySettings<T>
where
    T: FloatT,
{
    /// Checks that the settings are valid.  This only ensures that fields
    /// specified by strings contain valid options and that the parallel
    /// threshold is nonzero.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_strategy(&self.strategy)?;
        validate_parallel_threshold(self.parallel_threshold)?;
        Ok(())
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for CholeskySettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        CholeskySettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl<T> CholeskySettingsBuilder<T>
where
    T: FloatT,
{
    /// check that the specified strategy and threshold are valid
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(ref strategy) = self.strategy {
            validate_strategy(strategy)?;
        }
        if let Some(parallel_threshold) = self.parallel_threshold {
            validate_parallel_threshold(parallel_threshold)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------
// individual validation functions go here
// ---------------------------------------------------------

pub(crate) fn validate_strategy(strategy: &str) -> Result<(), SettingsError> {
    match strategy {
        "auto" => Ok(()),
        "sequential" => Ok(()),
        "vectorized" => Ok(()),
        "parallel" => Ok(()),
        _ => Err(SettingsError::BadFieldValue("strategy")),
    }
}

fn validate_parallel_threshold(parallel_threshold: usize) -> Result<(), SettingsError> {
    if parallel_threshold == 0 {
        Err(SettingsError::BadFieldValue("parallel_threshold"))
    } else {
        Ok(())
    }
}
