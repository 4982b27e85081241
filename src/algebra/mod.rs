//! Dense matrix types and the slice math used by the factorization kernels.
//!
//! All matrices are stored in row major format.

mod dense;
mod error_types;
mod floats;
mod math_traits;
mod matrix_traits;
mod vecmath;

pub use dense::*;
pub use error_types::*;
pub use floats::*;
pub use math_traits::*;
pub use matrix_traits::*;
