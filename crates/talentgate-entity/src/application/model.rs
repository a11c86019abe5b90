//! Application entity model and forms.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use talentgate_core::types::{ApplicationId, PositionId, UserId};

use super::status::ApplicationStatus;

/// A candidate's application to a position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Unique application identifier.
    pub id: ApplicationId,
    /// Position applied to.
    pub position_id: PositionId,
    /// Applying candidate.
    pub candidate_id: UserId,
    /// Denormalized position title.
    #[serde(default)]
    pub position_title: Option<String>,
    /// Denormalized candidate name.
    #[serde(default)]
    pub candidate_name: Option<String>,
    /// Cover letter text.
    #[serde(default)]
    pub cover_letter: Option<String>,
    /// Resume link submitted with the application.
    #[serde(default)]
    pub resume_url: Option<String>,
    /// Pipeline status.
    pub status: ApplicationStatus,
    /// When the application was submitted.
    pub submitted_at: DateTime<Utc>,
}

/// Form a candidate submits to apply.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitApplication {
    /// Position to apply to.
    pub position_id: PositionId,
    /// Optional cover letter.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 5000, message = "must be at most 5000 characters"))]
    pub cover_letter: Option<String>,
    /// Optional resume link; the profile resume is used when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "must be a valid URL"))]
    pub resume_url: Option<String>,
}

/// HR decision moving an application through the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateApplicationStatus {
    /// Target status.
    pub status: ApplicationStatus,
    /// Optional note shown to the candidate.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 1000, message = "must be at most 1000 characters"))]
    pub note: Option<String>,
}
