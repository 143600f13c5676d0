//! API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

use learnkit_protocols::TaskError;

pub const NOT_FOUND_MESSAGE: &str = "Endpoint not found";
pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON body";

/// Body of every failed response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Errors surfaced by the HTTP layer.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Task(#[from] TaskError),

    #[error("Invalid JSON body: {0}")]
    InvalidJson(String),

    #[error("Endpoint not found")]
    NotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Task(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            Self::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidJson(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }

    /// Message placed in the `error` field.
    pub fn user_message(&self) -> String {
        match self {
            Self::Task(e) => e.user_message(),
            Self::InvalidJson(_) => INVALID_JSON_MESSAGE.to_string(),
            Self::NotFound => NOT_FOUND_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            debug!(status = status.as_u16(), error = %self, "Request rejected");
        }

        let body = ErrorBody {
            error: self.user_message(),
        };
        (status, Json(body)).into_response()
    }
}
