//! Completion provider trait definition.

use async_trait::async_trait;

use super::{CompletionRequest, CompletionResponse, ModelDefinition};
use crate::error::ProviderError;

/// The text-completion capability the proxy depends on.
///
/// Implementations are constructed once at startup and shared behind an
/// `Arc`; they must not keep per-request state.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Returns the provider ID.
    fn id(&self) -> &str;

    /// Returns the models this provider knows about.
    fn models(&self) -> &[ModelDefinition];

    /// Generate a completion for a single prompt.
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, ProviderError>;

    /// Look up one of [`CompletionProvider::models`] by id.
    fn model(&self, id: &str) -> Option<&ModelDefinition> {
        self.models().iter().find(|m| m.id == id)
    }
}
