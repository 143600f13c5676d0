//! Server initialization and startup logic for LearnKit.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{error, info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use learnkit_api::{ApiServer, AppState};
use learnkit_config::{Config, ConfigLoader, ConfigValidator, LoggingConfig};
use learnkit_core::Orchestrator;
use learnkit_protocols::CompletionProvider;
use learnkit_provider_gemini::{GeminiProvider, HttpTimeouts};

/// `~/.learnkit`, when a home directory is known.
pub(crate) fn learnkit_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".learnkit"))
}

/// Use `path` if it exists, else `~/.learnkit/config.toml` if that exists.
pub(crate) fn resolve_config_path(path: &Path) -> PathBuf {
    if path.exists() {
        return path.to_path_buf();
    }
    learnkit_dir()
        .map(|dir| dir.join("config.toml"))
        .filter(|candidate| candidate.exists())
        .unwrap_or_else(|| path.to_path_buf())
}

/// Load the config file (defaults when missing), then apply environment
/// overrides.
pub(crate) fn load_config(path: &Path) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = ConfigLoader::load_or_default(&resolve_config_path(path))?;
    ConfigLoader::apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Initialize tracing with console output and, when configured, a daily
/// rolling log file.
///
/// Console output goes to stderr so client commands keep stdout for JSON.
pub(crate) fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&logging.level))?;

    let file_layer = match &logging.directory {
        Some(dir) => {
            let log_dir = PathBuf::from(ConfigLoader::expand_path(dir));
            std::fs::create_dir_all(&log_dir)?;

            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("learnkit")
                .filename_suffix("log")
                .max_log_files(30)
                .build(&log_dir)?;

            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            // Keep the writer alive for the program duration
            static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
                std::sync::OnceLock::new();
            let _ = GUARD.set(guard);

            Some(fmt::layer().with_writer(non_blocking).with_ansi(false).boxed())
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()?;

    Ok(())
}

/// Build the Gemini-backed orchestrator described by `config`.
pub(crate) fn build_orchestrator(
    config: &Config,
) -> Result<Arc<Orchestrator>, Box<dyn std::error::Error>> {
    let provider_config = &config.provider;
    let provider = GeminiProvider::with_options(
        provider_config.api_key.clone().unwrap_or_default(),
        provider_config.base_url.clone(),
        HttpTimeouts::from_secs(
            provider_config.connect_timeout_seconds,
            provider_config.timeout_seconds,
        ),
    )?;

    match provider.model(&provider_config.model) {
        Some(model) => info!(
            "Completion provider: {} ({}, timeout={}s)",
            provider.id(),
            model.name,
            provider_config.timeout_seconds
        ),
        None => warn!(
            "Model '{}' is not a known {} model; requests may be rejected",
            provider_config.model,
            provider.id()
        ),
    }

    Ok(Arc::new(Orchestrator::new(
        Arc::new(provider),
        provider_config.model.clone(),
    )))
}

/// Run the proxy server in foreground.
pub(crate) async fn run_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting LearnKit v{}", env!("CARGO_PKG_VERSION"));

    let validation = ConfigValidator::validate(&config);
    for warning in &validation.warnings {
        warn!("Config {}: {}", warning.path, warning.message);
    }
    if !validation.is_valid() {
        for err in &validation.errors {
            error!("Config {}: {}", err.path, err.message);
        }
        return Err(format!(
            "invalid configuration ({} error(s))",
            validation.errors.len()
        )
        .into());
    }

    let orchestrator = build_orchestrator(&config)?;
    let server = ApiServer::new(config.server.clone(), Arc::new(AppState::new(orchestrator)));

    server.run().await?;

    info!("LearnKit shutdown complete");
    Ok(())
}
