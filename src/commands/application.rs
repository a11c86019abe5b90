//! Application commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use talentgate_client::TalentGateClient;
use talentgate_core::error::AppError;
use talentgate_core::types::{ApplicationId, PositionId};
use talentgate_entity::application::{
    Application, ApplicationStatus, SubmitApplication, UpdateApplicationStatus,
};

use crate::output::{self, OutputFormat};

/// Arguments for application commands
#[derive(Debug, Args)]
pub struct ApplicationArgs {
    /// Application subcommand
    #[command(subcommand)]
    pub command: ApplicationCommand,
}

/// Application subcommands
#[derive(Debug, Subcommand)]
pub enum ApplicationCommand {
    /// Apply to a position
    Submit {
        /// Position ID
        position_id: PositionId,
        /// Cover letter text
        #[arg(long)]
        cover_letter: Option<String>,
        /// Resume URL (defaults to the one on your profile)
        #[arg(long)]
        resume_url: Option<String>,
    },
    /// List your applications
    List,
    /// List applications received for a position
    ForPosition {
        /// Position ID
        position_id: PositionId,
    },
    /// Move an application through the pipeline
    Status {
        /// Application ID
        id: ApplicationId,
        /// New status (in-review, test-assigned, interview, offered, rejected)
        status: ApplicationStatus,
        /// Note for the candidate
        #[arg(long)]
        note: Option<String>,
    },
    /// Withdraw one of your applications
    Withdraw {
        /// Application ID
        id: ApplicationId,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

/// Application display row for table output
#[derive(Debug, Serialize, Tabled)]
struct ApplicationRow {
    /// Application ID
    id: String,
    /// Position
    position: String,
    /// Candidate
    candidate: String,
    /// Status
    status: String,
    /// Submitted at
    submitted: String,
}

impl From<&Application> for ApplicationRow {
    fn from(a: &Application) -> Self {
        Self {
            id: a.id.to_string(),
            position: a
                .position_title
                .clone()
                .unwrap_or_else(|| a.position_id.to_string()),
            candidate: a
                .candidate_name
                .clone()
                .unwrap_or_else(|| a.candidate_id.to_string()),
            status: a.status.to_string(),
            submitted: a.submitted_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute application commands
pub async fn execute(
    args: &ApplicationArgs,
    client: &TalentGateClient,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ApplicationCommand::Submit {
            position_id,
            cover_letter,
            resume_url,
        } => {
            super::guard(client, &format!("/candidate/positions/{position_id}/apply"))?;

            let position = client.positions().get(*position_id).await?;
            if !position.status.accepts_applications() {
                return Err(AppError::conflict(format!(
                    "Position '{}' is not accepting applications",
                    position.title
                )));
            }

            let application = client
                .applications()
                .submit(&SubmitApplication {
                    position_id: *position_id,
                    cover_letter: cover_letter.clone(),
                    resume_url: resume_url.clone(),
                })
                .await?;
            output::print_success(&format!("Applied to '{}'", position.title));
            print_application(&application, format);
        }
        ApplicationCommand::List => {
            super::guard(client, "/candidate/applications")?;
            let applications = client.applications().mine().await?;
            print_rows(&applications, format);
        }
        ApplicationCommand::ForPosition { position_id } => {
            super::guard(client, &format!("/hr/positions/{position_id}/applications"))?;
            let applications = client.applications().for_position(*position_id).await?;
            print_rows(&applications, format);
        }
        ApplicationCommand::Status { id, status, note } => {
            super::guard(client, &format!("/hr/applications/{id}"))?;
            if matches!(status, ApplicationStatus::Submitted | ApplicationStatus::Withdrawn) {
                return Err(AppError::validation(format!(
                    "Status {status} cannot be set by HR"
                )));
            }
            let application = client
                .applications()
                .update_status(
                    *id,
                    &UpdateApplicationStatus {
                        status: *status,
                        note: note.clone(),
                    },
                )
                .await?;
            output::print_success(&format!("Application moved to {}", application.status));
        }
        ApplicationCommand::Withdraw { id, yes } => {
            super::guard(client, &format!("/candidate/applications/{id}"))?;

            let application = client.applications().get(*id).await?;
            if !application.status.can_withdraw() {
                return Err(AppError::conflict(format!(
                    "Application is already {} and cannot be withdrawn",
                    application.status
                )));
            }
            if !yes {
                let confirm = dialoguer::Confirm::new()
                    .with_prompt("Withdraw this application? This cannot be undone.")
                    .default(false)
                    .interact()
                    .map_err(super::input_error)?;
                if !confirm {
                    println!("Cancelled.");
                    return Ok(());
                }
            }
            client.applications().withdraw(*id).await?;
            output::print_success("Application withdrawn");
        }
    }

    Ok(())
}

fn print_rows(applications: &[Application], format: OutputFormat) {
    let rows: Vec<ApplicationRow> = applications.iter().map(ApplicationRow::from).collect();
    output::print_list(&rows, format);
}

fn print_application(application: &Application, format: OutputFormat) {
    output::print_item(
        application,
        &[
            ("ID", application.id.to_string()),
            ("Position", application.position_id.to_string()),
            ("Status", application.status.to_string()),
            (
                "Submitted",
                application.submitted_at.format("%Y-%m-%d %H:%M").to_string(),
            ),
        ],
        format,
    );
}
