//! # LearnKit Provider - Gemini
//!
//! Google Gemini `generateContent` client implementing
//! [`learnkit_protocols::CompletionProvider`].

mod client;
mod provider;
mod types;

pub use client::{DEFAULT_BASE_URL, HttpTimeouts};
pub use provider::GeminiProvider;
pub use types::*;
