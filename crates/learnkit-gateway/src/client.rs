//! HTTP client for the proxy API.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::{debug, error, warn};

use learnkit_protocols::{
    AnswerResult, DEFAULT_ROADMAP_LEVEL, QuizResult, RoadmapResult, SummaryResult,
};

use crate::response::ApiResponse;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3001/api";

/// Error body the proxy sends with non-success statuses.
#[derive(Debug, Deserialize)]
struct ErrorPayload {
    error: Option<String>,
}

/// Client request gateway.
///
/// Each call makes one POST to `<base_url>/<endpoint>` and folds every
/// outcome into an [`ApiResponse`]. No retries.
#[derive(Debug, Clone)]
pub struct Gateway {
    client: Client,
    base_url: String,
}

impl Gateway {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Gateway whose requests give up after `timeout`.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder().timeout(timeout).build().unwrap_or_else(|e| {
            warn!("Failed to build HTTP client with timeout, using defaults: {}", e);
            Client::new()
        });
        Self::with_client(client, base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn ask_question(&self, question: &str) -> ApiResponse<AnswerResult> {
        self.make_request("ask", json!({ "question": question })).await
    }

    pub async fn summarize_text(&self, text: &str) -> ApiResponse<SummaryResult> {
        self.make_request("summarize", json!({ "text": text })).await
    }

    pub async fn generate_quiz(&self, text: &str) -> ApiResponse<QuizResult> {
        self.make_request("quiz", json!({ "text": text })).await
    }

    /// `level` defaults to beginner.
    pub async fn generate_roadmap(
        &self,
        topic: &str,
        level: Option<&str>,
    ) -> ApiResponse<RoadmapResult> {
        let level = level.unwrap_or(DEFAULT_ROADMAP_LEVEL);
        self.make_request("roadmap", json!({ "topic": topic, "level": level }))
            .await
    }

    async fn make_request<T: DeserializeOwned>(&self, endpoint: &str, body: Value) -> ApiResponse<T> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("Gateway request: POST {}", url);

        let response = match self.client.post(&url).json(&body).send().await {
            Ok(response) => response,
            Err(e) => return failure(endpoint, e.to_string()),
        };

        let status = response.status();
        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => return failure(endpoint, e.to_string()),
        };

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorPayload>(&bytes)
                .ok()
                .and_then(|p| p.error)
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));
            return failure(endpoint, message);
        }

        match serde_json::from_slice(&bytes) {
            Ok(data) => ApiResponse::ok(data),
            Err(e) => failure(endpoint, format!("Failed to decode response: {}", e)),
        }
    }
}

impl Default for Gateway {
    fn default() -> Self {
        Self::new()
    }
}

fn failure<T>(endpoint: &str, message: String) -> ApiResponse<T> {
    error!(endpoint, error = %message, "API request failed");
    ApiResponse::err(message)
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
