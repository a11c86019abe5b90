//! Position entity model and forms.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use talentgate_core::types::PositionId;

use super::status::PositionStatus;

/// Contract type of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentType {
    /// Full-time employment.
    FullTime,
    /// Part-time employment.
    PartTime,
    /// Fixed-term contract.
    Contract,
    /// Internship.
    Internship,
}

impl std::fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::FullTime => "full-time",
            Self::PartTime => "part-time",
            Self::Contract => "contract",
            Self::Internship => "internship",
        };
        write!(f, "{label}")
    }
}

impl std::str::FromStr for EmploymentType {
    type Err = talentgate_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "full-time" => Ok(Self::FullTime),
            "part-time" => Ok(Self::PartTime),
            "contract" => Ok(Self::Contract),
            "internship" => Ok(Self::Internship),
            _ => Err(talentgate_core::AppError::validation(format!(
                "Invalid employment type: '{s}'"
            ))),
        }
    }
}

/// A job position as listed by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    /// Unique position identifier.
    pub id: PositionId,
    /// Job title.
    pub title: String,
    /// Owning department.
    pub department: String,
    /// Work location.
    pub location: String,
    /// Contract type.
    pub employment_type: EmploymentType,
    /// Full description.
    pub description: String,
    /// Listed requirements.
    #[serde(default)]
    pub requirements: Vec<String>,
    /// Lower bound of the salary band.
    #[serde(default)]
    pub salary_min: Option<u32>,
    /// Upper bound of the salary band.
    #[serde(default)]
    pub salary_max: Option<u32>,
    /// Publication state.
    pub status: PositionStatus,
    /// When the position was created.
    pub created_at: DateTime<Utc>,
}

impl Position {
    /// Human-readable salary band.
    pub fn salary_range(&self) -> String {
        match (self.salary_min, self.salary_max) {
            (Some(min), Some(max)) => format!("{min} - {max}"),
            (Some(min), None) => format!("from {min}"),
            (None, Some(max)) => format!("up to {max}"),
            (None, None) => "not disclosed".to_string(),
        }
    }
}

/// Form used by HR to create a position.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_create_salary"))]
pub struct CreatePosition {
    /// Job title.
    #[validate(length(min = 3, max = 120, message = "must be 3 to 120 characters"))]
    pub title: String,
    /// Owning department.
    #[validate(length(min = 1, max = 80, message = "is required"))]
    pub department: String,
    /// Work location.
    #[validate(length(min = 1, max = 120, message = "is required"))]
    pub location: String,
    /// Contract type.
    pub employment_type: EmploymentType,
    /// Full description.
    #[validate(length(min = 20, message = "must be at least 20 characters"))]
    pub description: String,
    /// Listed requirements.
    #[serde(default)]
    pub requirements: Vec<String>,
    /// Lower bound of the salary band.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<u32>,
    /// Upper bound of the salary band.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<u32>,
    /// Initial publication state.
    pub status: PositionStatus,
}

/// Partial update of a position. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_update_salary"))]
pub struct UpdatePosition {
    /// New title.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 3, max = 120, message = "must be 3 to 120 characters"))]
    pub title: Option<String>,
    /// New department.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// New location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 20, message = "must be at least 20 characters"))]
    pub description: Option<String>,
    /// Replacement requirement list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Vec<String>>,
    /// New salary lower bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<u32>,
    /// New salary upper bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<u32>,
}

/// Search filter for the position list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionFilter {
    /// Free-text search over title and description.
    pub search: Option<String>,
    /// Only positions in this state.
    pub status: Option<PositionStatus>,
    /// Only positions of this department.
    pub department: Option<String>,
}

impl PositionFilter {
    /// Query pairs appended to the list request.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(search) = self.search.as_deref().filter(|s| !s.trim().is_empty()) {
            query.push(("search".to_string(), search.trim().to_string()));
        }
        if let Some(status) = self.status {
            query.push(("status".to_string(), status.as_str().to_string()));
        }
        if let Some(department) = &self.department {
            query.push(("department".to_string(), department.clone()));
        }
        query
    }
}

fn check_salary_band(min: Option<u32>, max: Option<u32>) -> Result<(), ValidationError> {
    match (min, max) {
        (Some(min), Some(max)) if min > max => {
            let mut err = ValidationError::new("salary_range");
            err.message = Some("salary_min must not exceed salary_max".into());
            Err(err)
        }
        _ => Ok(()),
    }
}

fn validate_create_salary(form: &CreatePosition) -> Result<(), ValidationError> {
    check_salary_band(form.salary_min, form.salary_max)
}

fn validate_update_salary(form: &UpdatePosition) -> Result<(), ValidationError> {
    check_salary_band(form.salary_min, form.salary_max)
}
