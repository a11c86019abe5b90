//! Candidate review commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use talentgate_client::TalentGateClient;
use talentgate_core::error::AppError;
use talentgate_core::types::{PageRequest, UserId};

use crate::output::{self, OutputFormat};

/// Arguments for candidate commands
#[derive(Debug, Args)]
pub struct CandidateArgs {
    /// Candidate subcommand
    #[command(subcommand)]
    pub command: CandidateCommand,
}

/// Candidate subcommands
#[derive(Debug, Subcommand)]
pub enum CandidateCommand {
    /// List candidates
    List {
        /// Page number
        #[arg(long, default_value_t = 1)]
        page: u64,
        /// Items per page
        #[arg(long, default_value_t = 20)]
        page_size: u64,
    },
    /// Show a candidate with profile and applications
    Show {
        /// Candidate user ID
        id: UserId,
    },
}

/// Candidate display row for table output
#[derive(Debug, Serialize, Tabled)]
struct CandidateRow {
    /// User ID
    id: String,
    /// Name
    name: String,
    /// Email
    email: String,
    /// Headline
    headline: String,
    /// Applications
    applications: u32,
    /// Latest status
    latest: String,
}

/// Execute candidate commands
pub async fn execute(
    args: &CandidateArgs,
    client: &TalentGateClient,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        CandidateCommand::List { page, page_size } => {
            super::guard(client, "/hr/candidates")?;
            let result = client
                .candidates()
                .list(PageRequest::new(*page, *page_size))
                .await?;

            let rows: Vec<CandidateRow> = result
                .items
                .iter()
                .map(|c| CandidateRow {
                    id: c.id.to_string(),
                    name: c.full_name.clone(),
                    email: c.email.clone(),
                    headline: output::or_dash(c.headline.as_deref()),
                    applications: c.application_count,
                    latest: c
                        .latest_status
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "-".to_string()),
                })
                .collect();
            output::print_list(&rows, format);
            output::print_page_footer(result.page, result.total_pages, result.total_items, format);
        }
        CandidateCommand::Show { id } => {
            super::guard(client, &format!("/hr/candidates/{id}"))?;
            let detail = client.candidates().get(*id).await?;

            let profile = detail.profile.as_ref();
            let applications = detail
                .applications
                .iter()
                .map(|a| {
                    format!(
                        "{} ({})",
                        a.position_title.as_deref().unwrap_or("untitled"),
                        a.status
                    )
                })
                .collect::<Vec<_>>()
                .join(", ");

            output::print_item(
                &detail,
                &[
                    ("ID", detail.user.id.to_string()),
                    ("Name", detail.user.full_name()),
                    ("E-mail", detail.user.email.clone()),
                    (
                        "Headline",
                        output::or_dash(profile.and_then(|p| p.headline.as_deref())),
                    ),
                    (
                        "Skills",
                        profile.map(|p| p.skills.join(", ")).unwrap_or_default(),
                    ),
                    (
                        "Resume",
                        output::or_dash(profile.and_then(|p| p.resume_url.as_deref())),
                    ),
                    ("Active", detail.active_applications().count().to_string()),
                    ("Applications", applications),
                ],
                format,
            );
        }
    }

    Ok(())
}
