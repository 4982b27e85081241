//! Timing harness: test matrix generation, verification, timed runs
//! and delimited text reports.

mod benchmark;
mod generate;
mod report;
mod verify;

pub use benchmark::*;
pub use generate::*;
pub use report::*;
pub use verify::*;
