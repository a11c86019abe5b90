//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use talentgate_core::types::UserId;

use super::role::UserRole;

/// The identity returned by `GET /auth/me`. Read-only on the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Login e-mail address.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Platform role.
    pub role: UserRole,
    /// When the account was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    /// Full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Check if this user is recruitment staff.
    pub fn is_staff(&self) -> bool {
        self.role.is_staff()
    }
}

/// Credentials posted to `/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// E-mail address.
    #[validate(email(message = "must be a valid e-mail address"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "is required"))]
    pub password: String,
}

/// Self-registration form posted to `/auth/register`.
///
/// Registration always creates a candidate account; staff accounts are
/// provisioned by administrators.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// E-mail address.
    #[validate(email(message = "must be a valid e-mail address"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 8, message = "must be at least 8 characters"))]
    pub password: String,
    /// Given name.
    #[validate(length(min = 1, max = 100, message = "is required"))]
    pub first_name: String,
    /// Family name.
    #[validate(length(min = 1, max = 100, message = "is required"))]
    pub last_name: String,
}
