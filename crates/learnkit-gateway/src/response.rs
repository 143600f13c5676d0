//! Gateway response envelope.

use serde::{Deserialize, Serialize};

/// Outcome of one gateway call.
///
/// Exactly one of `data` and `error` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            data: None,
            error: Some(message.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.data.is_some()
    }

    pub fn is_err(&self) -> bool {
        self.error.is_some()
    }

    pub fn into_result(self) -> Result<T, String> {
        match (self.data, self.error) {
            (Some(data), None) => Ok(data),
            (_, Some(error)) => Err(error),
            (None, None) => Err("Response carried neither data nor error".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_serialization_omits_error() {
        let response = ApiResponse::ok(serde_json::json!({"answer": "4"}));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"data": {"answer": "4"}}));
        assert!(response.is_ok());
        assert!(!response.is_err());
    }

    #[test]
    fn test_err_serialization_omits_data() {
        let response: ApiResponse<String> = ApiResponse::err("Question is required");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"error": "Question is required"}));
        assert!(response.is_err());
    }

    #[test]
    fn test_into_result() {
        assert_eq!(ApiResponse::ok(1).into_result(), Ok(1));
        assert_eq!(
            ApiResponse::<i32>::err("boom").into_result(),
            Err("boom".to_string())
        );
        let empty: ApiResponse<i32> = ApiResponse {
            data: None,
            error: None,
        };
        assert!(empty.into_result().is_err());
    }
}
