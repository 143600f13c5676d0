//! Configuration validation.

use crate::schema::Config;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_server(config, &mut result);
        Self::validate_provider(config, &mut result);
        Self::validate_gateway(config, &mut result);

        result
    }

    fn validate_server(config: &Config, result: &mut ValidationResult) {
        if config.server.port == 0 {
            result.add_error(ValidationError::new("server.port", "Port cannot be 0"));
        }

        if config.server.host.is_empty() {
            result.add_error(ValidationError::new("server.host", "Host cannot be empty"));
        }

        if config.server.body_limit_bytes == 0 {
            result.add_error(ValidationError::new(
                "server.body_limit_bytes",
                "body_limit_bytes must be greater than 0",
            ));
        }

        if let Some(ref dir) = config.server.static_dir {
            if !dir.join("index.html").exists() {
                result.add_warning(ValidationWarning::new(
                    "server.static_dir",
                    format!("No index.html found in {:?}, the UI will not be served", dir),
                ));
            }
        }
    }

    fn validate_provider(config: &Config, result: &mut ValidationResult) {
        let provider = &config.provider;

        if provider.api_key.as_deref().is_none_or(|k| k.trim().is_empty()) {
            result.add_warning(ValidationWarning::new(
                "provider.api_key",
                "API key is not set; set GEMINI_API_KEY or every model call will fail",
            ));
        }

        if !is_http_url(&provider.base_url) {
            result.add_error(ValidationError::new(
                "provider.base_url",
                "base_url must start with http:// or https://",
            ));
        }

        if provider.model.trim().is_empty() {
            result.add_error(ValidationError::new("provider.model", "Model cannot be empty"));
        }

        if provider.timeout_seconds == 0 {
            result.add_error(ValidationError::new(
                "provider.timeout_seconds",
                "timeout_seconds must be greater than 0",
            ));
        }

        if provider.connect_timeout_seconds == 0 {
            result.add_error(ValidationError::new(
                "provider.connect_timeout_seconds",
                "connect_timeout_seconds must be greater than 0",
            ));
        }

        if provider.connect_timeout_seconds > provider.timeout_seconds {
            result.add_warning(ValidationWarning::new(
                "provider.connect_timeout_seconds",
                "connect timeout is longer than the overall request timeout",
            ));
        }
    }

    fn validate_gateway(config: &Config, result: &mut ValidationResult) {
        if !is_http_url(&config.gateway.base_url) {
            result.add_error(ValidationError::new(
                "gateway.base_url",
                "base_url must start with http:// or https://",
            ));
        }

        if config.gateway.timeout_seconds == 0 {
            result.add_error(ValidationError::new(
                "gateway.timeout_seconds",
                "timeout_seconds must be greater than 0",
            ));
        }
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
