use super::*;
use std::time::Duration;

use wiremock::{Mock, MockServer, ResponseTemplate, matchers};

const MODEL: &str = "gemini-2.0-flash";
const ENDPOINT: &str = "/models/gemini-2.0-flash:generateContent";

fn provider_for(server: &MockServer) -> GeminiProvider {
    GeminiProvider::with_url("test-key".to_string(), server.uri()).unwrap()
}

fn text_response(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }],
        "usageMetadata": {"promptTokenCount": 7, "candidatesTokenCount": 1, "totalTokenCount": 8}
    })
}

async fn mount_status(server: &MockServer, status: u16, body: &str) {
    Mock::given(matchers::method("POST"))
        .and(matchers::path(ENDPOINT))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .expect(1)
        .mount(server)
        .await;
}

#[test]
fn test_provider_creation() {
    let provider = GeminiProvider::new("test-key".to_string()).unwrap();
    assert_eq!(provider.id(), "gemini");
    assert_eq!(provider.model(MODEL).unwrap().name, "Gemini 2.0 Flash");
    assert!(provider.model("gpt-4").is_none());
}

#[test]
fn test_build_request_plain() {
    let provider = GeminiProvider::new("k".to_string()).unwrap();
    let request = provider.build_request(&CompletionRequest::new(MODEL, "Hello"));
    assert_eq!(request.contents, vec![Content::user("Hello")]);
    assert!(request.generation_config.is_none());
}

#[test]
fn test_build_request_json_mode() {
    let provider = GeminiProvider::new("k".to_string()).unwrap();
    let request = provider.build_request(&CompletionRequest::new(MODEL, "Quiz me").with_json_mode());
    let config = request.generation_config.unwrap();
    assert_eq!(config.response_mime_type.as_deref(), Some("application/json"));
}

#[tokio::test]
async fn test_json_mode_reaches_the_wire() {
    let server = MockServer::start().await;

    Mock::given(matchers::method("POST"))
        .and(matchers::path(ENDPOINT))
        .and(matchers::body_partial_json(serde_json::json!({
            "generationConfig": {"responseMimeType": "application/json"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response("[]")))
        .expect(1)
        .mount(&server)
        .await;

    let response = provider_for(&server)
        .complete(CompletionRequest::new(MODEL, "Quiz me").with_json_mode())
        .await
        .unwrap();
    assert_eq!(response.text, "[]");
}

#[tokio::test]
async fn test_complete_success() {
    let server = MockServer::start().await;

    Mock::given(matchers::method("POST"))
        .and(matchers::path(ENDPOINT))
        .and(matchers::header("x-goog-api-key", "test-key"))
        .and(matchers::body_partial_json(serde_json::json!({
            "contents": [{"role": "user", "parts": [{"text": "What is 2+2?"}]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response("4")))
        .expect(1)
        .mount(&server)
        .await;

    let response = provider_for(&server)
        .complete(CompletionRequest::new(MODEL, "What is 2+2?"))
        .await
        .unwrap();

    assert_eq!(response.text, "4");
    assert_eq!(response.model, MODEL);
    assert_eq!(response.finish_reason.as_deref(), Some("STOP"));
    assert_eq!(response.usage.unwrap().total_tokens, 8);
}

#[tokio::test]
async fn test_complete_joins_text_parts() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "candidates": [{"content": {"role": "model", "parts": [{"text": "```json\n"}, {"text": "[]\n```"}]}}]
    });

    Mock::given(matchers::method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let response = provider_for(&server)
        .complete(CompletionRequest::new(MODEL, "p"))
        .await
        .unwrap();
    assert_eq!(response.text, "```json\n[]\n```");
}

#[tokio::test]
async fn test_complete_authentication_error() {
    let server = MockServer::start().await;
    mount_status(
        &server,
        401,
        r#"{"error": {"code": 401, "message": "API key not valid.", "status": "UNAUTHENTICATED"}}"#,
    )
    .await;

    let err = provider_for(&server)
        .complete(CompletionRequest::new(MODEL, "Hello"))
        .await
        .unwrap_err();

    match err {
        ProviderError::AuthenticationFailed(message) => {
            assert_eq!(message, "API key not valid.");
        }
        other => panic!("Expected AuthenticationFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_complete_rate_limit() {
    let server = MockServer::start().await;
    mount_status(
        &server,
        429,
        r#"{"error": {"code": 429, "message": "Resource has been exhausted", "status": "RESOURCE_EXHAUSTED"}}"#,
    )
    .await;

    let err = provider_for(&server)
        .complete(CompletionRequest::new(MODEL, "Hello"))
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::RateLimited { .. }));
}

#[tokio::test]
async fn test_complete_server_error_with_plain_body() {
    let server = MockServer::start().await;
    mount_status(&server, 500, "Internal Server Error").await;

    let err = provider_for(&server)
        .complete(CompletionRequest::new(MODEL, "Hello"))
        .await
        .unwrap_err();

    match err {
        ProviderError::ApiError { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Internal Server Error");
        }
        other => panic!("Expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_complete_no_candidates() {
    let server = MockServer::start().await;
    mount_status(&server, 200, r#"{"candidates": []}"#).await;

    let err = provider_for(&server)
        .complete(CompletionRequest::new(MODEL, "Hello"))
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::EmptyResponse));
}

#[tokio::test]
async fn test_complete_blank_text() {
    let server = MockServer::start().await;
    Mock::given(matchers::method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response("  ")))
        .mount(&server)
        .await;

    let err = provider_for(&server)
        .complete(CompletionRequest::new(MODEL, "Hello"))
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::EmptyResponse));
}

#[tokio::test]
async fn test_complete_blocked_prompt() {
    let server = MockServer::start().await;
    mount_status(&server, 200, r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#).await;

    let err = provider_for(&server)
        .complete(CompletionRequest::new(MODEL, "Hello"))
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::ContentFiltered(_)));
}

#[tokio::test]
async fn test_complete_unparseable_success_body() {
    let server = MockServer::start().await;
    mount_status(&server, 200, "not json").await;

    let err = provider_for(&server)
        .complete(CompletionRequest::new(MODEL, "Hello"))
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::ApiError { status: 200, .. }));
}

#[tokio::test]
async fn test_complete_timeout() {
    let server = MockServer::start().await;
    Mock::given(matchers::method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(text_response("late"))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let provider = GeminiProvider::with_options(
        "test-key".to_string(),
        server.uri(),
        HttpTimeouts::from_secs(1, 1),
    )
    .unwrap();

    let err = provider
        .complete(CompletionRequest::new(MODEL, "Hello"))
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Timeout(1)));
}

#[tokio::test]
async fn test_complete_network_failure() {
    let provider =
        GeminiProvider::with_url("test-key".to_string(), "http://127.0.0.1:1".to_string()).unwrap();

    let err = provider
        .complete(CompletionRequest::new(MODEL, "Hello"))
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Network(_)));
}

#[tokio::test]
async fn test_complete_without_api_key_makes_no_call() {
    let server = MockServer::start().await;
    Mock::given(matchers::method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response("4")))
        .expect(0)
        .mount(&server)
        .await;

    let provider = GeminiProvider::with_url("  ".to_string(), server.uri()).unwrap();
    let err = provider
        .complete(CompletionRequest::new(MODEL, "Hello"))
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Configuration(_)));
}

#[test]
fn test_endpoint_trims_trailing_slash() {
    let client = GeminiClient::new(
        "k".to_string(),
        "http://localhost:9999/v1beta/",
        HttpTimeouts::default(),
    )
    .unwrap();
    assert_eq!(
        client.endpoint(MODEL),
        "http://localhost:9999/v1beta/models/gemini-2.0-flash:generateContent"
    );
}
