//! Dense Cholesky factorization with selectable execution strategies.

mod checks;
mod engine;
mod factorizer;
mod ldlt;
mod settings;
mod strategies;

pub use engine::*;
pub use factorizer::*;
pub use ldlt::*;
pub use settings::*;
pub use strategies::*;

pub(crate) use settings::validate_strategy;
