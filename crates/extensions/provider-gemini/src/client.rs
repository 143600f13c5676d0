//! Gemini API client.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use learnkit_protocols::ProviderError;

use crate::types::*;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Connect and overall request timeouts for model calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub connect: Duration,
    pub request: Duration,
}

impl HttpTimeouts {
    pub fn from_secs(connect: u64, request: u64) -> Self {
        Self {
            connect: Duration::from_secs(connect),
            request: Duration::from_secs(request),
        }
    }
}

impl Default for HttpTimeouts {
    fn default() -> Self {
        Self::from_secs(10, 60)
    }
}

/// Gemini API client.
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
    timeouts: HttpTimeouts,
}

impl GeminiClient {
    /// Create a new Gemini client.
    pub fn new(
        api_key: String,
        base_url: impl Into<String>,
        timeouts: HttpTimeouts,
    ) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .connect_timeout(timeouts.connect)
            .timeout(timeouts.request)
            .build()
            .map_err(|e| ProviderError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            timeouts,
        })
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    pub fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    /// Generate content (non-streaming).
    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ProviderError> {
        let url = self.endpoint(model);

        debug!("Gemini generate_content: model={}", model);

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            let message = match serde_json::from_str::<GeminiError>(&body) {
                Ok(e) => e.error.message,
                Err(_) => body,
            };
            return Err(ProviderError::from_api_response(status.as_u16(), message));
        }

        serde_json::from_str(&body).map_err(|e| ProviderError::ApiError {
            status: status.as_u16(),
            message: format!("Failed to parse response: {}", e),
        })
    }

    fn transport_error(&self, error: reqwest::Error) -> ProviderError {
        if error.is_timeout() {
            ProviderError::Timeout(self.timeouts.request.as_secs())
        } else {
            ProviderError::Network(error.to_string())
        }
    }
}
