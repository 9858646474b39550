//! climated — read-only HTTP query service over a climate observation
//! dataset.

use anyhow::Result;
use clap::{Parser, Subcommand};
use climate_api::{create_router, ApiState};
use climate_store::ClimateStore;
use config::{generate_default_config, load_config, save_config, validate_config};
use observability::init_tracing;
use std::path::{Path, PathBuf};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

#[derive(Debug, Parser)]
#[command(name = "climated", about = "Climate observations query service")]
struct Cli {
    /// Emit logs as JSON lines instead of the compact format.
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start the HTTP server.
    Serve {
        #[arg(long, default_value = "climated.yaml")]
        config: PathBuf,
        /// Override the configured listen port.
        #[arg(long)]
        port: Option<u16>,
    },
    /// Validate a configuration file and print a report.
    Validate {
        #[arg(long, default_value = "climated.yaml")]
        config: PathBuf,
    },
    /// Write a default configuration file.
    Init {
        #[arg(long, default_value = "climated.yaml")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing("climated", cli.json_logs)?;

    match cli.command {
        Commands::Serve { config, port } => serve_command(&config, port).await,
        Commands::Validate { config } => validate_command(&config),
        Commands::Init { output } => init_command(&output),
    }
}

async fn serve_command(config_path: &Path, port_override: Option<u16>) -> Result<()> {
    let config = load_config(config_path)?;

    let report = validate_config(&config);
    for warning in &report.warnings {
        warn!(field = %warning.field, message = %warning.message, "configuration warning");
    }
    if !report.is_valid() {
        for err in &report.errors {
            error!("{}", err);
        }
        anyhow::bail!("cannot start due to configuration errors");
    }

    let port = port_override.unwrap_or(config.service.port);

    let store =
        ClimateStore::connect(&config.database.url, config.database.max_connections).await?;
    let router = create_router(ApiState { store });

    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Ctrl+C received, shutting down");
            signal_token.cancel();
        }
    });

    info!(host = %config.service.host, port, "starting query service");
    climate_api::serve(&config.service.host, port, router, shutdown).await?;
    Ok(())
}

fn validate_command(config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    let report = validate_config(&config);

    println!("\n=== Configuration Validation Report ===\n");

    if !report.warnings.is_empty() {
        println!("Warnings ({}):", report.warnings.len());
        for warning in &report.warnings {
            println!("  [warn] {}", warning);
        }
        println!();
    }

    if !report.errors.is_empty() {
        println!("Errors ({}):", report.errors.len());
        for err in &report.errors {
            println!("  [error] {}", err);
        }
        println!();
        anyhow::bail!("configuration validation failed");
    }

    println!("[ok] Configuration is valid!");
    println!();
    println!("Service: {}", config.service.name);
    println!("Listen:  {}:{}", config.service.host, config.service.port);
    println!("Store:   {}", config.database.url);

    Ok(())
}

fn init_command(output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let config = generate_default_config();
    save_config(&config, output_path)?;

    println!("[ok] Configuration file created: {:?}", output_path);
    println!();
    println!("Next steps:");
    println!("  1. Point database.url at the climate SQLite file");
    println!(
        "  2. Run 'climated validate --config {:?}' to check the configuration",
        output_path
    );
    println!(
        "  3. Run 'climated serve --config {:?}' to start the service",
        output_path
    );

    Ok(())
}
