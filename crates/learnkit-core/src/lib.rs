//! # LearnKit Core
//!
//! The proxy's task pipeline. Every invocation runs
//! `validate -> build prompt -> call provider -> shape`, and stops at the
//! first failure:
//!
//! ```text
//! Idle -> Validating -> InvalidInput
//!                    -> Invoking -> UpstreamError
//!                                -> Shaping -> MalformedModelOutput
//!                                           -> Succeeded
//! ```
//!
//! The completion provider is injected into [`Orchestrator`]; there is no
//! global client.

pub mod orchestrator;
pub mod prompt;
pub mod shaping;
pub mod validation;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use orchestrator::Orchestrator;
pub use shaping::{parse_quiz, parse_roadmap, strip_code_fence};
