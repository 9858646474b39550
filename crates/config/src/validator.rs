use crate::{substitution, AppConfig};
use std::fmt;

/// A single finding from configuration validation.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)
    }
}

/// Outcome of validating an [`AppConfig`].
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(ValidationIssue {
            field: field.to_string(),
            message: message.into(),
        });
    }

    fn warn(&mut self, field: &str, message: impl Into<String>) {
        self.warnings.push(ValidationIssue {
            field: field.to_string(),
            message: message.into(),
        });
    }
}

/// Validate a loaded configuration.
pub fn validate_config(config: &AppConfig) -> ValidationReport {
    let mut report = ValidationReport::default();

    if config.service.port == 0 {
        report.error("service.port", "port must be non-zero");
    }
    if config.service.host.is_empty() {
        report.error("service.host", "host must not be empty");
    }

    if config.database.url.is_empty() {
        report.error("database.url", "database URL must not be empty");
    } else if substitution::has_unresolved_env_vars(&config.database.url) {
        report.error(
            "database.url",
            format!(
                "unresolved environment reference in URL: {}",
                config.database.url
            ),
        );
    } else if !config.database.url.starts_with("sqlite:") {
        report.warn(
            "database.url",
            "URL does not use the sqlite scheme; the service is only tested against SQLite",
        );
    }

    if config.database.max_connections == 0 {
        report.error("database.max_connections", "pool size must be non-zero");
    }

    report
}
