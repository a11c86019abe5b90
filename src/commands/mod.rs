//! CLI command definitions and dispatch.

pub mod application;
pub mod auth;
pub mod candidate;
pub mod config;
pub mod evaluation;
pub mod position;
pub mod profile;
pub mod route;
pub mod stats;

use clap::{Parser, Subcommand};

use talentgate_client::TalentGateClient;
use talentgate_core::config::AppConfig;
use talentgate_core::error::AppError;

use crate::output::OutputFormat;

/// TalentGate recruitment platform client
#[derive(Debug, Parser)]
#[command(name = "talentgate", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sign in
    Login(auth::LoginArgs),
    /// Create a candidate account and sign in
    Register(auth::RegisterArgs),
    /// Sign out
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Your profile
    Profile(profile::ProfileArgs),
    /// Job positions
    Position(position::PositionArgs),
    /// Job applications
    Application(application::ApplicationArgs),
    /// Evaluation tests
    Test(evaluation::TestArgs),
    /// Candidate records
    Candidate(candidate::CandidateArgs),
    /// Dashboard statistics
    Stats,
    /// Check where navigation to a client route would land
    Route(route::RouteArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: AppConfig) -> Result<(), AppError> {
        if let Commands::Config(args) = &self.command {
            return config::execute(args, &self.config, &config, self.format);
        }

        let client = TalentGateClient::connect(&config).await?;
        match &self.command {
            Commands::Login(args) => auth::login(args, &client, self.format).await,
            Commands::Register(args) => auth::register(args, &client, self.format).await,
            Commands::Logout => auth::logout(&client).await,
            Commands::Whoami => auth::whoami(&client, self.format).await,
            Commands::Profile(args) => profile::execute(args, &client, self.format).await,
            Commands::Position(args) => position::execute(args, &client, self.format).await,
            Commands::Application(args) => application::execute(args, &client, self.format).await,
            Commands::Test(args) => evaluation::execute(args, &client, self.format).await,
            Commands::Candidate(args) => candidate::execute(args, &client, self.format).await,
            Commands::Stats => stats::execute(&client, self.format).await,
            Commands::Route(args) => route::execute(args, &client, self.format),
            Commands::Config(_) => Ok(()),
        }
    }
}

/// Helper: enforce the route guard for the client page a command stands for
pub fn guard(client: &TalentGateClient, route: &str) -> Result<(), AppError> {
    client.navigate(route).into_result()
}

/// Helper: map a dialoguer failure
pub fn input_error(err: dialoguer::Error) -> AppError {
    AppError::internal(format!("Input error: {err}"))
}
