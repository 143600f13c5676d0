//! Task and health handlers.

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use learnkit_protocols::{AnswerResult, QuizResult, RoadmapResult, SummaryResult};

use crate::error::ApiError;
use crate::state::AppState;

/// Health check response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

/// A JSON request body read leniently: missing or non-string fields
/// read as empty, so validation reports them with the task's message.
#[derive(Debug, Default)]
pub struct RequestBody {
    fields: Map<String, Value>,
}

impl RequestBody {
    /// Parse raw bytes. An empty body is an empty object; non-object
    /// JSON has no fields.
    pub fn parse(bytes: &[u8]) -> Result<Self, ApiError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let value: Value =
            serde_json::from_slice(bytes).map_err(|e| ApiError::InvalidJson(e.to_string()))?;

        Ok(match value {
            Value::Object(fields) => Self { fields },
            _ => Self::default(),
        })
    }

    /// String field, or `""` when missing or not a string.
    pub fn text(&self, name: &str) -> &str {
        self.optional_text(name).unwrap_or("")
    }

    pub fn optional_text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }
}

/// POST /api/ask
pub async fn ask(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<AnswerResult>, ApiError> {
    let body = RequestBody::parse(&body)?;
    let result = state.orchestrator.ask_question(body.text("question")).await?;
    Ok(Json(result))
}

/// POST /api/summarize
pub async fn summarize(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<SummaryResult>, ApiError> {
    let body = RequestBody::parse(&body)?;
    let result = state.orchestrator.summarize(body.text("text")).await?;
    Ok(Json(result))
}

/// POST /api/quiz
pub async fn quiz(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<QuizResult>, ApiError> {
    let body = RequestBody::parse(&body)?;
    let result = state.orchestrator.generate_quiz(body.text("text")).await?;
    Ok(Json(result))
}

/// POST /api/roadmap
pub async fn roadmap(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<RoadmapResult>, ApiError> {
    let body = RequestBody::parse(&body)?;
    let result = state
        .orchestrator
        .generate_roadmap(body.text("topic"), body.optional_text("level"))
        .await?;
    Ok(Json(result))
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: "AI Learning System API is running".to_string(),
    })
}

/// Fallback for unmatched routes.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;
