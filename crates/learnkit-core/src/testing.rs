//! Scripted completion provider for tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use learnkit_protocols::{
    CompletionProvider, CompletionRequest, CompletionResponse, ModelDefinition, ProviderError,
};

pub const SCRIPTED_MODEL: &str = "scripted-model";

/// Replays canned replies in order and records every request it sees.
///
/// Once the script runs out, calls fail with [`ProviderError::Network`].
pub struct ScriptedProvider {
    script: Mutex<VecDeque<Result<String, ProviderError>>>,
    requests: Mutex<Vec<CompletionRequest>>,
    calls: AtomicUsize,
    models: Vec<ModelDefinition>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            models: vec![ModelDefinition::new(SCRIPTED_MODEL, "Scripted")],
        }
    }

    /// Provider that answers once with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        let provider = Self::new();
        provider.push_reply(text);
        provider
    }

    /// Provider that fails once with `error`.
    pub fn failing(error: ProviderError) -> Self {
        let provider = Self::new();
        provider.push_error(error);
        provider
    }

    pub fn push_reply(&self, text: impl Into<String>) {
        self.lock_script().push_back(Ok(text.into()));
    }

    pub fn push_error(&self, error: ProviderError) {
        self.lock_script().push_back(Err(error));
    }

    /// Number of `complete` calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.requests().last().map(|r| r.prompt.clone())
    }

    fn lock_script(&self) -> std::sync::MutexGuard<'_, VecDeque<Result<String, ProviderError>>> {
        self.script.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for ScriptedProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    fn id(&self) -> &str {
        "scripted"
    }

    fn models(&self) -> &[ModelDefinition] {
        &self.models
    }

    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, ProviderError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        let model = request.model.clone();
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request);

        match self.lock_script().pop_front() {
            Some(Ok(text)) => Ok(CompletionResponse::new(model, text)),
            Some(Err(error)) => Err(error),
            None => Err(ProviderError::Network(format!(
                "ScriptedProvider: no reply scripted for call {}",
                call
            ))),
        }
    }
}
