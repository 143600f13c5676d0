//! Application state.

use std::sync::Arc;

use learnkit_core::Orchestrator;

/// State shared across handlers. Immutable after startup.
pub struct AppState {
    pub orchestrator: Arc<Orchestrator>,
}

impl AppState {
    pub fn new(orchestrator: Arc<Orchestrator>) -> Self {
        Self { orchestrator }
    }
}
