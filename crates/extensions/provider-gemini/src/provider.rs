//! Gemini completion provider implementation.

use async_trait::async_trait;
use tracing::{debug, warn};

use learnkit_protocols::{
    CompletionProvider, CompletionRequest, CompletionResponse, ModelDefinition, ProviderError,
    provider::Usage,
};

use crate::client::{DEFAULT_BASE_URL, GeminiClient, HttpTimeouts};
use crate::types::*;

const JSON_MIME_TYPE: &str = "application/json";

/// Gemini completion provider.
pub struct GeminiProvider {
    client: GeminiClient,
    models: Vec<ModelDefinition>,
}

impl GeminiProvider {
    /// Create a provider against the public Gemini endpoint.
    pub fn new(api_key: String) -> Result<Self, ProviderError> {
        Self::with_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Create a provider against a custom base URL.
    pub fn with_url(api_key: String, base_url: String) -> Result<Self, ProviderError> {
        Self::with_options(api_key, base_url, HttpTimeouts::default())
    }

    pub fn with_options(
        api_key: String,
        base_url: String,
        timeouts: HttpTimeouts,
    ) -> Result<Self, ProviderError> {
        Ok(Self {
            client: GeminiClient::new(api_key, base_url, timeouts)?,
            models: vec![
                ModelDefinition::new("gemini-2.0-flash", "Gemini 2.0 Flash"),
                ModelDefinition::new("gemini-2.0-flash-lite", "Gemini 2.0 Flash-Lite"),
                ModelDefinition::new("gemini-1.5-pro", "Gemini 1.5 Pro"),
                ModelDefinition::new("gemini-1.5-flash", "Gemini 1.5 Flash"),
            ],
        })
    }

    fn build_request(&self, request: &CompletionRequest) -> GenerateContentRequest {
        let generation_config = request.json_mode.then(|| GenerationConfig {
            response_mime_type: Some(JSON_MIME_TYPE.to_string()),
        });

        GenerateContentRequest {
            contents: vec![Content::user(request.prompt.as_str())],
            generation_config,
        }
    }

    fn convert_response(
        &self,
        response: GenerateContentResponse,
        model: &str,
    ) -> Result<CompletionResponse, ProviderError> {
        let Some(candidate) = response.candidates.into_iter().next() else {
            if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
                return Err(ProviderError::ContentFiltered(format!(
                    "prompt blocked: {}",
                    reason
                )));
            }
            return Err(ProviderError::EmptyResponse);
        };

        let text = candidate
            .content
            .as_ref()
            .map(Content::joined_text)
            .unwrap_or_default();

        if text.trim().is_empty() {
            return match candidate.finish_reason.as_deref() {
                Some(reason @ ("SAFETY" | "BLOCKLIST" | "PROHIBITED_CONTENT")) => Err(
                    ProviderError::ContentFiltered(format!("response blocked: {}", reason)),
                ),
                _ => Err(ProviderError::EmptyResponse),
            };
        }

        let usage = response.usage_metadata.map(|u| Usage {
            prompt_tokens: u.prompt_token_count,
            completion_tokens: u.candidates_token_count,
            total_tokens: u.total_token_count,
        });

        Ok(CompletionResponse {
            model: model.to_string(),
            text,
            finish_reason: candidate.finish_reason,
            usage,
        })
    }
}

#[async_trait]
impl CompletionProvider for GeminiProvider {
    fn id(&self) -> &str {
        "gemini"
    }

    fn models(&self) -> &[ModelDefinition] {
        &self.models
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, ProviderError> {
        debug!("Gemini complete: model={}", request.model);

        if !self.client.has_api_key() {
            warn!("Gemini API key is not configured");
            return Err(ProviderError::Configuration(
                "Gemini API key is not configured".to_string(),
            ));
        }

        let gemini_request = self.build_request(&request);
        let response = self
            .client
            .generate_content(&request.model, &gemini_request)
            .await?;
        self.convert_response(response, &request.model)
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
