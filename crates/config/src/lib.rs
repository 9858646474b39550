use serde::{Deserialize, Serialize};

pub mod defaults;
pub mod parser;
pub mod substitution;
pub mod validator;

pub use parser::{generate_default_config, load_config, save_config};
pub use validator::{validate_config, ValidationIssue, ValidationReport};

/// Top-level configuration for the climated service.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    pub database: DatabaseConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    #[serde(default = "defaults::default_service_name")]
    pub name: String,
    #[serde(default = "defaults::default_host")]
    pub host: String,
    #[serde(default = "defaults::default_port")]
    pub port: u16,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: defaults::default_service_name(),
            host: defaults::default_host(),
            port: defaults::default_port(),
        }
    }
}

/// Backing store settings. The URL may reference environment variables
/// as `${VAR}`; they are expanded at load time.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "defaults::default_max_connections")]
    pub max_connections: u32,
}
