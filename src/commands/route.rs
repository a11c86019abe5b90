//! Route guard inspection command.

use clap::Args;
use serde::Serialize;

use talentgate_auth::guard::GuardDecision;
use talentgate_client::TalentGateClient;
use talentgate_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for `route`
#[derive(Debug, Args)]
pub struct RouteArgs {
    /// Client route, e.g. /hr/positions
    pub path: String,
}

#[derive(Debug, Serialize)]
struct RouteOutcome<'a> {
    path: &'a str,
    allowed: bool,
    destination: String,
    reason: Option<String>,
}

/// Show where navigation to a route would land for the current session
pub fn execute(
    args: &RouteArgs,
    client: &TalentGateClient,
    format: OutputFormat,
) -> Result<(), AppError> {
    let outcome = match client.navigate(&args.path) {
        GuardDecision::Allow => RouteOutcome {
            path: &args.path,
            allowed: true,
            destination: args.path.clone(),
            reason: None,
        },
        GuardDecision::Redirect { to, reason } => RouteOutcome {
            path: &args.path,
            allowed: false,
            destination: to,
            reason: Some(reason.to_string()),
        },
    };

    output::print_item(
        &outcome,
        &[
            ("Route", outcome.path.to_string()),
            ("Allowed", outcome.allowed.to_string()),
            ("Lands on", outcome.destination.clone()),
            ("Reason", output::or_dash(outcome.reason.as_deref())),
        ],
        format,
    );
    Ok(())
}
