//! Application pipeline status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where an application sits in the hiring pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    /// Received, not yet looked at.
    Submitted,
    /// Being reviewed by HR.
    InReview,
    /// An evaluation test was assigned.
    TestAssigned,
    /// Invited to interview.
    Interview,
    /// An offer was made.
    Offered,
    /// Turned down by HR.
    Rejected,
    /// Withdrawn by the candidate.
    Withdrawn,
}

impl ApplicationStatus {
    /// Whether the application reached a final state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Offered | Self::Rejected | Self::Withdrawn)
    }

    /// Whether the candidate may still withdraw.
    pub fn can_withdraw(&self) -> bool {
        !self.is_terminal()
    }

    /// Return the status as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Submitted => "SUBMITTED",
            Self::InReview => "IN_REVIEW",
            Self::TestAssigned => "TEST_ASSIGNED",
            Self::Interview => "INTERVIEW",
            Self::Offered => "OFFERED",
            Self::Rejected => "REJECTED",
            Self::Withdrawn => "WITHDRAWN",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = talentgate_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace('-', "_").as_str() {
            "SUBMITTED" => Ok(Self::Submitted),
            "IN_REVIEW" => Ok(Self::InReview),
            "TEST_ASSIGNED" => Ok(Self::TestAssigned),
            "INTERVIEW" => Ok(Self::Interview),
            "OFFERED" => Ok(Self::Offered),
            "REJECTED" => Ok(Self::Rejected),
            "WITHDRAWN" => Ok(Self::Withdrawn),
            _ => Err(talentgate_core::AppError::validation(format!(
                "Invalid application status: '{s}'"
            ))),
        }
    }
}
