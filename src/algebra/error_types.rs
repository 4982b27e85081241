use thiserror::Error;

/// Error type returned by the dense factorization routines.
///
/// Dimension and symmetry failures are detected before any output is
/// written.  Pivot failures stop the factorization at the offending
/// index, leaving the entries computed before it populated.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CholeskyError {
    /// Input and output matrices are not square, are empty, or differ in size
    #[error("Incompatible dimensions: input is {input:?}, output is {output:?}")]
    InvalidDimensions {
        input: (usize, usize),
        output: (usize, usize),
    },
    /// A diagonal residual was non-positive, or a pivot was zero
    #[error("Matrix is not positive definite (failed at pivot {index})")]
    NotPositiveDefinite { index: usize },
    /// Input failed the optional symmetry check
    #[error("Matrix is not symmetric (mismatch at ({row}, {col}))")]
    NotSymmetric { row: usize, col: usize },
    /// A zero or non-finite pivot in a square root free factorization
    #[error("Singular pivot at index {index}")]
    SingularPivot { index: usize },
    /// A stored factor was used before a successful factorization
    #[error("No valid factor is available")]
    NotFactored,
}
