//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use talentgate_auth::guard::RoutePolicy;
use talentgate_core::config::AppConfig;
use talentgate_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Validate the configuration
    Validate,
}

/// Execute config commands
pub fn execute(
    args: &ConfigArgs,
    config_path: &str,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => match format {
            OutputFormat::Json => output::print_json(config),
            OutputFormat::Table => {
                let text = toml_like(config)?;
                println!("{text}");
            }
        },
        ConfigCommand::Validate => {
            // Guard rules are only parsed when a client is built; check them here too.
            RoutePolicy::from_config(&config.guard)?;
            output::print_success(&format!("Configuration '{config_path}' is valid"));
            output::print_kv("API", &config.api.base_url);
            output::print_kv(
                "Session",
                &format!("{} ({})", config.session.backend, config.session.file_path),
            );
            output::print_kv(
                "Refresh window",
                &format!("{}s", config.auth.refresh_threshold_seconds),
            );
            output::print_kv("Guard rules", &config.guard.rules.len().to_string());
        }
    }

    Ok(())
}

/// Render the configuration section by section.
fn toml_like(config: &AppConfig) -> Result<String, AppError> {
    let value = serde_json::to_value(config)?;
    let mut out = String::new();
    if let serde_json::Value::Object(sections) = value {
        for (section, fields) in sections {
            out.push_str(&format!("[{section}]\n"));
            if let serde_json::Value::Object(fields) = fields {
                for (key, value) in fields {
                    out.push_str(&format!("{key} = {value}\n"));
                }
            }
            out.push('\n');
        }
    }
    Ok(out.trim_end().to_string())
}
