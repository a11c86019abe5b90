//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles known to the recruitment platform.
///
/// On the wire roles are upper-case (`"CANDIDATE"`); in configuration they
/// are referred to by their lower-case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    /// Applies to positions and takes evaluation tests.
    Candidate,
    /// Creates positions and tests, reviews candidates.
    Hr,
    /// Platform administrator.
    Admin,
}

impl UserRole {
    /// All roles, in declaration order.
    pub const ALL: [UserRole; 3] = [Self::Candidate, Self::Hr, Self::Admin];

    /// Whether this role belongs to recruitment staff.
    pub fn is_staff(&self) -> bool {
        matches!(self, Self::Hr | Self::Admin)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Candidate => "candidate",
            Self::Hr => "hr",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = talentgate_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "candidate" => Ok(Self::Candidate),
            "hr" => Ok(Self::Hr),
            "admin" => Ok(Self::Admin),
            _ => Err(talentgate_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: candidate, hr, admin"
            ))),
        }
    }
}
