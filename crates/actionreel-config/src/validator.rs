//! Configuration validation.

use crate::error::ConfigError;
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
    pub fn validate(config: &Config) -> Result<ValidationResult, ConfigError> {
        let mut result = ValidationResult::default();

        Self::validate_recorder(config, &mut result);
        Self::validate_bridge(config, &mut result);
        Self::validate_codegen(config, &mut result);
        Self::validate_storage(config, &mut result);

        Ok(result)
    }

    fn validate_recorder(config: &Config, result: &mut ValidationResult) {
        let recorder = &config.recorder;

        if recorder.overlay_prefix.is_empty() {
            result.add_error(ValidationError::new(
                "recorder.overlay_prefix",
                "Overlay prefix cannot be empty, every element would be treated as overlay",
            ));
        }

        if recorder.cache_key.is_empty() {
            result.add_error(ValidationError::new(
                "recorder.cache_key",
                "Cache key cannot be empty",
            ));
        }

        if recorder.fill_debounce_ms == 0 {
            result.add_warning(ValidationWarning::new(
                "recorder.fill_debounce_ms",
                "Debounce of 0 ms records one fill per keystroke",
            ));
        }

        if recorder.snippet_chars == 0 {
            result.add_error(ValidationError::new(
                "recorder.snippet_chars",
                "snippet_chars must be greater than 0",
            ));
        }

        if recorder.nearby_text_limit > 20 {
            result.add_warning(ValidationWarning::new(
                "recorder.nearby_text_limit",
                "nearby_text_limit is very high (>20), actions will grow large",
            ));
        }
    }

    fn validate_bridge(config: &Config, result: &mut ValidationResult) {
        if config.bridge.timeout_ms == 0 {
            result.add_error(ValidationError::new(
                "bridge.timeout_ms",
                "timeout_ms must be greater than 0",
            ));
        }

        if config.bridge.max_html_chars == 0 {
            result.add_error(ValidationError::new(
                "bridge.max_html_chars",
                "max_html_chars must be greater than 0",
            ));
        }
    }

    fn validate_codegen(config: &Config, result: &mut ValidationResult) {
        let valid_modes = ["skip", "fail_fast"];
        if !valid_modes.contains(&config.codegen.strictness.as_str()) {
            result.add_error(ValidationError::new(
                "codegen.strictness",
                format!(
                    "Unknown strictness '{}', valid values: {:?}",
                    config.codegen.strictness, valid_modes
                ),
            ));
        }

        if config.codegen.helper_module.is_empty() {
            result.add_warning(ValidationWarning::new(
                "codegen.helper_module",
                "helper_module is empty, AI steps import from 'ai_helpers'",
            ));
        }
    }

    fn validate_storage(config: &Config, result: &mut ValidationResult) {
        let valid_backends = ["file", "memory"];
        if !valid_backends.contains(&config.storage.backend.as_str()) {
            result.add_warning(ValidationWarning::new(
                "storage.backend",
                format!(
                    "Unknown storage backend '{}', valid values: {:?}",
                    config.storage.backend, valid_backends
                ),
            ));
        }

        if config.storage.backend == "file" && config.storage.cache_dir.is_empty() {
            result.add_error(ValidationError::new(
                "storage.cache_dir",
                "File backend requires a cache directory",
            ));
        }

        if config.storage.backend != "memory" && config.storage.quota_bytes.is_some() {
            result.add_warning(ValidationWarning::new(
                "storage.quota_bytes",
                "quota_bytes only applies to the memory backend",
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
