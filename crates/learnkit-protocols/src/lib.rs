//! # LearnKit Protocols
//!
//! Core definitions shared by every LearnKit crate.
//! Contains only data types and interfaces - no network code.
//!
//! ## Contents
//!
//! - [`TaskRequest`] / [`TaskResult`] - the four learning tasks and their results
//! - [`CompletionProvider`] - trait for the text-completion capability
//! - [`TaskError`] / [`ProviderError`] - error taxonomy

pub mod error;
pub mod provider;
pub mod types;

pub use error::{ProviderError, TaskError};
pub use provider::{CompletionProvider, CompletionRequest, CompletionResponse, ModelDefinition};
pub use types::*;
