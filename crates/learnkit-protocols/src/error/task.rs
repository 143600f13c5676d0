//! Learning task errors.

use thiserror::Error;

use super::ProviderError;
use crate::types::TaskKind;

/// Failure of a single task invocation.
///
/// Every variant is terminal for the invocation; nothing is retried.
#[derive(Debug, Error)]
pub enum TaskError {
    /// Rejected before any model call was made.
    #[error("Invalid input: {message}")]
    InvalidInput { kind: TaskKind, message: String },

    /// The model capability failed (network, timeout, status, empty body).
    #[error("Upstream failure during {kind} task: {source}")]
    Upstream {
        kind: TaskKind,
        #[source]
        source: ProviderError,
    },

    /// The model answered, but not with the expected JSON shape.
    #[error("Malformed model output for {kind} task: {reason}")]
    MalformedModelOutput { kind: TaskKind, reason: String },
}

impl TaskError {
    pub fn invalid_input(kind: TaskKind, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            kind,
            message: message.into(),
        }
    }

    pub fn upstream(kind: TaskKind, source: ProviderError) -> Self {
        Self::Upstream { kind, source }
    }

    pub fn malformed(kind: TaskKind, reason: impl Into<String>) -> Self {
        Self::MalformedModelOutput {
            kind,
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> TaskKind {
        match self {
            Self::InvalidInput { kind, .. }
            | Self::Upstream { kind, .. }
            | Self::MalformedModelOutput { kind, .. } => *kind,
        }
    }

    /// Whether the caller caused the failure.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// Whether resubmitting the same input may succeed.
    pub fn is_user_retryable(&self) -> bool {
        !self.is_client_error()
    }

    /// Message safe to show to end users. Upstream details stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput { message, .. } => message.clone(),
            Self::MalformedModelOutput { kind, .. } => match kind {
                TaskKind::Quiz => "Failed to parse generated quiz JSON.".to_string(),
                TaskKind::Roadmap => "Failed to parse generated roadmap JSON.".to_string(),
                other => generic_failure(*other).to_string(),
            },
            Self::Upstream { kind, .. } => generic_failure(*kind).to_string(),
        }
    }
}

fn generic_failure(kind: TaskKind) -> &'static str {
    match kind {
        TaskKind::Ask => "Failed to process your question. Please try again.",
        TaskKind::Summarize => "Failed to generate summary. Please try again.",
        TaskKind::Quiz => "Failed to generate quiz questions. Please try again.",
        TaskKind::Roadmap => "Failed to generate learning roadmap. Please try again.",
    }
}
