//! Completion request types.

use serde::{Deserialize, Serialize};

/// Request for a single-prompt completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Model to use.
    pub model: String,

    /// The user prompt.
    pub prompt: String,

    /// Ask the model to answer with JSON only.
    #[serde(default)]
    pub json_mode: bool,
}

impl CompletionRequest {
    /// Create a new completion request.
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            json_mode: false,
        }
    }

    pub fn with_json_mode(mut self) -> Self {
        self.json_mode = true;
        self
    }
}
