//! Candidate summary and detail models.

use serde::{Deserialize, Serialize};

use talentgate_core::types::UserId;

use crate::application::{Application, ApplicationStatus};
use crate::user::{Profile, User};

/// One row of `GET /candidates`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateSummary {
    /// Candidate user id.
    pub id: UserId,
    /// Display name.
    pub full_name: String,
    /// E-mail address.
    pub email: String,
    /// Profile headline.
    #[serde(default)]
    pub headline: Option<String>,
    /// Number of applications submitted.
    #[serde(default)]
    pub application_count: u32,
    /// Status of the most recent application.
    #[serde(default)]
    pub latest_status: Option<ApplicationStatus>,
}

/// Full candidate record returned by `GET /candidates/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateDetail {
    /// Account.
    pub user: User,
    /// Profile, absent when the candidate never filled it in.
    #[serde(default)]
    pub profile: Option<Profile>,
    /// Applications across all positions.
    #[serde(default)]
    pub applications: Vec<Application>,
}

impl CandidateDetail {
    /// Applications still moving through the pipeline.
    pub fn active_applications(&self) -> impl Iterator<Item = &Application> {
        self.applications.iter().filter(|a| !a.status.is_terminal())
    }
}
