//! Wall clock timing of repeated trials.

#[allow(clippy::module_inception)]
mod timers;
pub use timers::*;
