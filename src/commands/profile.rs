//! Profile commands.

use clap::{Args, Subcommand};

use talentgate_client::TalentGateClient;
use talentgate_core::error::AppError;
use talentgate_entity::user::{Profile, UpdateProfile};

use crate::output::{self, OutputFormat};

/// Arguments for profile commands
#[derive(Debug, Args)]
pub struct ProfileArgs {
    /// Profile subcommand
    #[command(subcommand)]
    pub command: ProfileCommand,
}

/// Profile subcommands
#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    /// Show your profile
    Show,
    /// Update profile fields
    Update {
        /// Phone number
        #[arg(long)]
        phone: Option<String>,
        /// City / country
        #[arg(long)]
        location: Option<String>,
        /// Professional headline
        #[arg(long)]
        headline: Option<String>,
        /// Summary
        #[arg(long)]
        summary: Option<String>,
        /// Skills, comma-separated (replaces the list)
        #[arg(long, value_delimiter = ',')]
        skills: Option<Vec<String>>,
        /// Resume URL
        #[arg(long)]
        resume_url: Option<String>,
    },
}

/// Execute profile commands
pub async fn execute(
    args: &ProfileArgs,
    client: &TalentGateClient,
    format: OutputFormat,
) -> Result<(), AppError> {
    super::guard(client, "/profile")?;

    match &args.command {
        ProfileCommand::Show => {
            let profile = client.profile().get().await?;
            print_profile(&profile, format);
        }
        ProfileCommand::Update {
            phone,
            location,
            headline,
            summary,
            skills,
            resume_url,
        } => {
            let form = UpdateProfile {
                phone: phone.clone(),
                location: location.clone(),
                headline: headline.clone(),
                summary: summary.clone(),
                skills: skills.clone(),
                resume_url: resume_url.clone(),
            };
            let profile = client.profile().update(&form).await?;
            output::print_success("Profile updated");
            print_profile(&profile, format);
        }
    }

    Ok(())
}

fn print_profile(profile: &Profile, format: OutputFormat) {
    output::print_item(
        profile,
        &[
            ("Phone", output::or_dash(profile.phone.as_deref())),
            ("Location", output::or_dash(profile.location.as_deref())),
            ("Headline", output::or_dash(profile.headline.as_deref())),
            ("Skills", profile.skills.join(", ")),
            ("Resume", output::or_dash(profile.resume_url.as_deref())),
        ],
        format,
    );
}
