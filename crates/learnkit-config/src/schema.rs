//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub provider: ProviderConfig,

    #[serde(default)]
    pub gateway: GatewayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Proxy server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Maximum accepted request body size.
    #[serde(default = "default_body_limit")]
    pub body_limit_bytes: usize,

    /// Directory of a built single-page UI to serve for unmatched GETs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            body_limit_bytes: default_body_limit(),
            static_dir: None,
        }
    }
}

impl ServerConfig {
    /// `host:port` string to bind to.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_body_limit() -> usize {
    10 * 1024 * 1024
}

/// Model provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default = "default_provider_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_provider_timeout")]
    pub timeout_seconds: u64,

    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_provider_url(),
            model: default_model(),
            timeout_seconds: default_provider_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

fn default_provider_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_provider_timeout() -> u64 {
    60
}

fn default_connect_timeout() -> u64 {
    10
}

/// Client gateway configuration (used by the CLI commands).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_gateway_url")]
    pub base_url: String,

    #[serde(default = "default_gateway_timeout")]
    pub timeout_seconds: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: default_gateway_url(),
            timeout_seconds: default_gateway_timeout(),
        }
    }
}

fn default_gateway_url() -> String {
    "http://localhost:3001/api".to_string()
}

fn default_gateway_timeout() -> u64 {
    120
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for daily rolling log files. Console only when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.server.body_limit_bytes, 10 * 1024 * 1024);
        assert!(config.server.static_dir.is_none());
        assert_eq!(config.provider.model, "gemini-2.0-flash");
        assert_eq!(config.provider.timeout_seconds, 60);
        assert_eq!(config.provider.connect_timeout_seconds, 10);
        assert!(config.provider.api_key.is_none());
        assert_eq!(config.gateway.base_url, "http://localhost:3001/api");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_server_addr() {
        let server = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
            ..Default::default()
        };
        assert_eq!(server.addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_serialize_skips_secrets_when_absent() {
        let toml = toml::to_string(&Config::default()).unwrap();
        assert!(!toml.contains("api_key"));
        assert!(toml.contains("gemini-2.0-flash"));
    }
}
