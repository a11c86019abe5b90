//! Position lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Publication state of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PositionStatus {
    /// Being prepared by HR, not visible to candidates.
    Draft,
    /// Published and accepting applications.
    Open,
    /// No longer accepting applications.
    Closed,
}

impl PositionStatus {
    /// Whether candidates may apply.
    pub fn accepts_applications(&self) -> bool {
        matches!(self, Self::Open)
    }

    /// Return the status as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Open => "OPEN",
            Self::Closed => "CLOSED",
        }
    }
}

impl fmt::Display for PositionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PositionStatus {
    type Err = talentgate_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DRAFT" => Ok(Self::Draft),
            "OPEN" => Ok(Self::Open),
            "CLOSED" => Ok(Self::Closed),
            _ => Err(talentgate_core::AppError::validation(format!(
                "Invalid position status: '{s}'. Expected one of: draft, open, closed"
            ))),
        }
    }
}
