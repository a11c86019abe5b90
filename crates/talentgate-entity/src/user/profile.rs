//! Candidate profile model.

use serde::{Deserialize, Serialize};
use validator::Validate;

use talentgate_core::types::UserId;

/// Profile details attached to a user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Owner of the profile.
    pub user_id: UserId,
    /// Contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// City / country.
    #[serde(default)]
    pub location: Option<String>,
    /// One-line professional headline.
    #[serde(default)]
    pub headline: Option<String>,
    /// Free-form summary.
    #[serde(default)]
    pub summary: Option<String>,
    /// Skill keywords.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Link to an uploaded resume.
    #[serde(default)]
    pub resume_url: Option<String>,
}

/// Partial profile update sent to `PUT /profile`. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfile {
    /// New phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 5, max = 32, message = "must be 5 to 32 characters"))]
    pub phone: Option<String>,
    /// New location.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 120, message = "must be at most 120 characters"))]
    pub location: Option<String>,
    /// New headline.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 160, message = "must be at most 160 characters"))]
    pub headline: Option<String>,
    /// New summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 4000, message = "must be at most 4000 characters"))]
    pub summary: Option<String>,
    /// Replacement skill list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    /// New resume link.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "must be a valid URL"))]
    pub resume_url: Option<String>,
}

impl UpdateProfile {
    /// Whether the update would change nothing.
    pub fn is_empty(&self) -> bool {
        self.phone.is_none()
            && self.location.is_none()
            && self.headline.is_none()
            && self.summary.is_none()
            && self.skills.is_none()
            && self.resume_url.is_none()
    }
}
