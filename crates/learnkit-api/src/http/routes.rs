//! HTTP route definitions.

use std::path::Path;
use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, Request};
use axum::http::Method;
use axum::response::{IntoResponse, Response};
use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceExt;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

use learnkit_config::ServerConfig;

use crate::http::handlers::{self, ask, health, quiz, roadmap, summarize};
use crate::state::AppState;

/// Create the proxy router.
///
/// ```text
/// /api
///   POST /api/ask
///   POST /api/summarize
///   POST /api/quiz
///   POST /api/roadmap
/// GET  /health
/// ```
///
/// Anything else is a 404 `{error}`. When `static_dir` is set, unmatched
/// GETs outside `/api` are served from it, falling back to `index.html`.
pub fn create_router(state: Arc<AppState>, config: &ServerConfig) -> Router {
    let api_routes = Router::new()
        .route("/ask", post(ask))
        .route("/summarize", post(summarize))
        .route("/quiz", post(quiz))
        .route("/roadmap", post(roadmap))
        .with_state(state);

    let router = Router::new()
        .nest("/api", api_routes)
        .route("/health", get(health));

    let router = match &config.static_dir {
        Some(dir) => {
            info!("Serving UI from {}", dir.display());
            let spa = spa_service(dir);
            router.fallback(move |request: Request| serve_spa(spa.clone(), request))
        }
        None => router.fallback(handlers::not_found),
    };

    router
        .layer(DefaultBodyLimit::max(config.body_limit_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn spa_service(dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")))
}

async fn serve_spa(spa: ServeDir<ServeFile>, request: Request) -> Response {
    let is_read = request.method() == Method::GET || request.method() == Method::HEAD;
    if !is_read || request.uri().path().starts_with("/api/") {
        return handlers::not_found().await.into_response();
    }

    match spa.oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
