//! Proxy server.

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::{info, warn};

use learnkit_config::ServerConfig;

use crate::http::routes::create_router;
use crate::state::AppState;

/// The proxy HTTP server.
pub struct ApiServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl ApiServer {
    pub fn new(config: ServerConfig, state: Arc<AppState>) -> Self {
        Self { config, state }
    }

    /// Get the server address.
    pub fn addr(&self) -> String {
        self.config.addr()
    }

    pub fn router(&self) -> Router {
        create_router(self.state.clone(), &self.config)
    }

    /// Bind the configured address and serve until Ctrl+C.
    pub async fn run(&self) -> std::io::Result<()> {
        let listener = TcpListener::bind(self.addr()).await?;
        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        info!("LearnKit API listening on http://{}", addr);
        info!("Health check: http://{}/health", addr);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("LearnKit API stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use learnkit_core::Orchestrator;
    use learnkit_core::testing::{SCRIPTED_MODEL, ScriptedProvider};

    fn create_test_state() -> Arc<AppState> {
        let provider = Arc::new(ScriptedProvider::new());
        Arc::new(AppState::new(Arc::new(Orchestrator::new(provider, SCRIPTED_MODEL))))
    }

    #[test]
    fn test_server_addr() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 3001,
            ..Default::default()
        };
        let server = ApiServer::new(config, create_test_state());
        assert_eq!(server.addr(), "0.0.0.0:3001");
    }

    #[tokio::test]
    async fn test_serve_stops_on_shutdown() {
        let server = ApiServer::new(ServerConfig::default(), create_test_state());
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            server
                .serve(listener, async {
                    let _ = rx.await;
                })
                .await
        });

        tx.send(()).unwrap();
        handle.await.unwrap().unwrap();
    }
}
