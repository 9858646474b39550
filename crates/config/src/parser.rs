use crate::{substitution, AppConfig, DatabaseConfig, ServiceConfig};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Load a configuration file, expanding `${VAR}` environment references
/// before parsing.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path = path.as_ref();
    info!("Loading configuration from: {:?}", path);

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let substituted = substitution::substitute_env_vars(&content);
    debug!("Environment variable substitution completed");

    let config: AppConfig = serde_yaml::from_str(&substituted)
        .with_context(|| "Failed to parse YAML configuration")?;

    info!("Configuration loaded successfully");
    Ok(config)
}

/// Build the configuration written by `climated init`.
pub fn generate_default_config() -> AppConfig {
    AppConfig {
        service: ServiceConfig::default(),
        database: DatabaseConfig {
            url: "sqlite://resources/hawaii.sqlite".to_string(),
            max_connections: crate::defaults::default_max_connections(),
        },
    }
}

pub fn save_config<P: AsRef<Path> + std::fmt::Debug>(config: &AppConfig, path: P) -> Result<()> {
    let path = path.as_ref();
    info!("Saving configuration to: {:?}", path);

    let yaml = serde_yaml::to_string(config)
        .with_context(|| "Failed to serialize configuration to YAML")?;

    fs::write(path, yaml)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    Ok(())
}
