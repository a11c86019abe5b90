//! Position commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use talentgate_client::TalentGateClient;
use talentgate_core::error::AppError;
use talentgate_core::types::{PageRequest, PositionId};
use talentgate_entity::position::{
    CreatePosition, EmploymentType, Position, PositionFilter, PositionStatus, UpdatePosition,
};

use crate::output::{self, OutputFormat};

/// Arguments for position commands
#[derive(Debug, Args)]
pub struct PositionArgs {
    /// Position subcommand
    #[command(subcommand)]
    pub command: PositionCommand,
}

/// Position subcommands
#[derive(Debug, Subcommand)]
pub enum PositionCommand {
    /// List positions
    List {
        /// Free-text search
        #[arg(short, long)]
        search: Option<String>,
        /// Filter by status (draft, open, closed)
        #[arg(long)]
        status: Option<PositionStatus>,
        /// Filter by department
        #[arg(short, long)]
        department: Option<String>,
        /// Page number
        #[arg(long, default_value_t = 1)]
        page: u64,
        /// Items per page
        #[arg(long, default_value_t = 20)]
        page_size: u64,
    },
    /// Show a position
    Show {
        /// Position ID
        id: PositionId,
    },
    /// Create a position
    Create {
        /// Job title
        #[arg(long)]
        title: String,
        /// Department
        #[arg(long)]
        department: String,
        /// Location
        #[arg(long)]
        location: String,
        /// Employment type (full-time, part-time, contract, internship)
        #[arg(long = "type", default_value = "full-time")]
        employment_type: EmploymentType,
        /// Description
        #[arg(long)]
        description: String,
        /// Requirement (repeatable)
        #[arg(long = "requirement")]
        requirements: Vec<String>,
        /// Salary lower bound
        #[arg(long)]
        salary_min: Option<u32>,
        /// Salary upper bound
        #[arg(long)]
        salary_max: Option<u32>,
        /// Publish immediately instead of saving a draft
        #[arg(long)]
        publish: bool,
    },
    /// Change fields of a position
    Update {
        /// Position ID
        id: PositionId,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New department
        #[arg(long)]
        department: Option<String>,
        /// New location
        #[arg(long)]
        location: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// Replacement requirements (repeatable)
        #[arg(long = "requirement")]
        requirements: Vec<String>,
        /// New salary lower bound
        #[arg(long)]
        salary_min: Option<u32>,
        /// New salary upper bound
        #[arg(long)]
        salary_max: Option<u32>,
    },
    /// Start accepting applications
    Publish {
        /// Position ID
        id: PositionId,
    },
    /// Stop accepting applications
    Close {
        /// Position ID
        id: PositionId,
    },
    /// Delete a position
    Delete {
        /// Position ID
        id: PositionId,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

/// Position display row for table output
#[derive(Debug, Serialize, Tabled)]
struct PositionRow {
    /// Position ID
    id: String,
    /// Title
    title: String,
    /// Department
    department: String,
    /// Location
    location: String,
    /// Employment type
    #[tabled(rename = "type")]
    employment_type: String,
    /// Status
    status: String,
    /// Salary band
    salary: String,
}

impl From<&Position> for PositionRow {
    fn from(p: &Position) -> Self {
        Self {
            id: p.id.to_string(),
            title: p.title.clone(),
            department: p.department.clone(),
            location: p.location.clone(),
            employment_type: p.employment_type.to_string(),
            status: p.status.to_string(),
            salary: p.salary_range(),
        }
    }
}

/// Execute position commands
pub async fn execute(
    args: &PositionArgs,
    client: &TalentGateClient,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        PositionCommand::List {
            search,
            status,
            department,
            page,
            page_size,
        } => {
            super::guard(client, "/positions")?;
            let filter = PositionFilter {
                search: search.clone(),
                status: *status,
                department: department.clone(),
            };
            let result = client
                .positions()
                .list(&filter, PageRequest::new(*page, *page_size))
                .await?;

            let rows: Vec<PositionRow> = result.items.iter().map(PositionRow::from).collect();
            output::print_list(&rows, format);
            output::print_page_footer(result.page, result.total_pages, result.total_items, format);
        }
        PositionCommand::Show { id } => {
            super::guard(client, &format!("/positions/{id}"))?;
            let position = client.positions().get(*id).await?;
            print_position(&position, format);
        }
        PositionCommand::Create {
            title,
            department,
            location,
            employment_type,
            description,
            requirements,
            salary_min,
            salary_max,
            publish,
        } => {
            super::guard(client, "/hr/positions/new")?;
            let form = CreatePosition {
                title: title.clone(),
                department: department.clone(),
                location: location.clone(),
                employment_type: *employment_type,
                description: description.clone(),
                requirements: requirements.clone(),
                salary_min: *salary_min,
                salary_max: *salary_max,
                status: if *publish {
                    PositionStatus::Open
                } else {
                    PositionStatus::Draft
                },
            };
            let position = client.positions().create(&form).await?;
            output::print_success(&format!(
                "Position '{}' created ({})",
                position.title, position.status
            ));
            print_position(&position, format);
        }
        PositionCommand::Update {
            id,
            title,
            department,
            location,
            description,
            requirements,
            salary_min,
            salary_max,
        } => {
            super::guard(client, &format!("/hr/positions/{id}"))?;
            let form = UpdatePosition {
                title: title.clone(),
                department: department.clone(),
                location: location.clone(),
                description: description.clone(),
                requirements: (!requirements.is_empty()).then(|| requirements.clone()),
                salary_min: *salary_min,
                salary_max: *salary_max,
            };
            let position = client.positions().update(*id, &form).await?;
            output::print_success(&format!("Position '{}' updated", position.title));
            print_position(&position, format);
        }
        PositionCommand::Publish { id } => {
            super::guard(client, &format!("/hr/positions/{id}"))?;
            let position = client
                .positions()
                .set_status(*id, PositionStatus::Open)
                .await?;
            output::print_success(&format!("Position '{}' is open", position.title));
        }
        PositionCommand::Close { id } => {
            super::guard(client, &format!("/hr/positions/{id}"))?;
            let position = client
                .positions()
                .set_status(*id, PositionStatus::Closed)
                .await?;
            output::print_success(&format!("Position '{}' closed", position.title));
        }
        PositionCommand::Delete { id, yes } => {
            super::guard(client, &format!("/hr/positions/{id}"))?;
            if !yes {
                let confirm = dialoguer::Confirm::new()
                    .with_prompt(format!("Delete position {id}? Its applications are removed too."))
                    .default(false)
                    .interact()
                    .map_err(super::input_error)?;

                if !confirm {
                    println!("Cancelled.");
                    return Ok(());
                }
            }
            client.positions().delete(*id).await?;
            output::print_success(&format!("Position {id} deleted"));
        }
    }

    Ok(())
}

fn print_position(position: &Position, format: OutputFormat) {
    output::print_item(
        position,
        &[
            ("ID", position.id.to_string()),
            ("Title", position.title.clone()),
            ("Department", position.department.clone()),
            ("Location", position.location.clone()),
            ("Type", position.employment_type.to_string()),
            ("Status", position.status.to_string()),
            ("Salary", position.salary_range()),
            ("Requirements", position.requirements.join("; ")),
            ("Created", position.created_at.format("%Y-%m-%d %H:%M").to_string()),
            ("Description", position.description.clone()),
        ],
        format,
    );
}
