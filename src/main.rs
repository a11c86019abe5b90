//! TalentGate command-line client.
//!
//! Loads layered configuration, initializes logging and dispatches the
//! requested command against the recruitment API.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use talentgate_core::config::{AppConfig, LoggingConfig};

mod commands;
mod output;

use commands::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let env = std::env::var("TALENTGATE_ENV").unwrap_or_else(|_| "development".to_string());
    let config = match AppConfig::load(&cli.config, &env) {
        Ok(c) => c,
        Err(e) => {
            output::print_error(&format!("Configuration '{}' invalid: {e}", cli.config));
            std::process::exit(1);
        }
    };

    init_logging(&config.logging);
    tracing::debug!(config = %cli.config, env = %env, "Configuration loaded");

    if let Err(e) = cli.execute(config).await {
        tracing::debug!(kind = %e.kind, status = ?e.status, "Command failed");
        output::print_error(&e.message);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
