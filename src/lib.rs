//! __cholbench__ computes the dense Cholesky factorization
//!
//! $$
//! M = L L^\top
//! $$
//!
//! of a symmetric positive definite matrix $M \in \mathbb{R}^{n \times n}$,
//! where $L$ is lower triangular with a positive diagonal.  The same
//! factorization can be carried out under several execution strategies:
//!
//! * __sequential__: scalar loops, inner products accumulated strictly
//!   left to right.  This is the reference routine.
//!
//! * __vectorized__: the same loop order with a multi-lane inner product.
//!
//! * __parallel__: a column staged pipeline whose stages are spread over a
//!   [rayon](https://docs.rs/rayon) thread pool.
//!
//! An `"auto"` setting chooses between the vectorized and parallel
//! strategies from the matrix dimension.
//!
//! The crate also provides the square root free $LDL^\top$ variant, a
//! reusable [`CholeskyEngine`](cholesky::CholeskyEngine) for solves and
//! log-determinants, and a timing [`harness`] that writes delimited text
//! reports.
//!
//! # Example
//!
//! ```
//! use cholbench::algebra::*;
//! use cholbench::cholesky::*;
//!
//! let M = Matrix::from(&[[4., 12., -16.], [12., 37., -43.], [-16., -43., 98.]]);
//! let mut L = Matrix::<f64>::zeros((3, 3));
//!
//! let settings = CholeskySettingsBuilder::default()
//!     .strategy("parallel".to_string())
//!     .build()
//!     .unwrap();
//! let factorizer = CholeskyFactorizer::new(settings).unwrap();
//! factorizer.factorize(&M, &mut L).unwrap();
//!
//! assert_eq!(L, Matrix::from(&[[2., 0., 0.], [6., 1., 0.], [-8., 5., 3.]]));
//! ```
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

pub mod algebra;
pub mod cholesky;
pub mod harness;
pub mod io;
pub mod timers;
