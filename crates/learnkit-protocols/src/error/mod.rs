//! Error types for the LearnKit protocol layer.

mod provider;
mod task;

pub use provider::*;
pub use task::*;
