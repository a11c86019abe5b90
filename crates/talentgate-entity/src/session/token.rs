//! Token value types for the bearer and refresh tokens.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The access and refresh tokens issued on login.
///
/// Both tokens live in one value so a session can never hold only one of them.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    /// Short-lived JWT sent as the bearer token.
    pub access_token: String,
    /// Long-lived token exchanged for a new access token.
    pub refresh_token: String,
}

impl TokenPair {
    /// Create a new token pair.
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }

    /// Apply a refresh response, keeping the current refresh token when none was rotated.
    pub fn rotated(&self, response: TokenResponse) -> Self {
        Self {
            access_token: response.access_token,
            refresh_token: response
                .refresh_token
                .unwrap_or_else(|| self.refresh_token.clone()),
        }
    }
}

impl fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenPair")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}

/// Body returned by `POST /auth/refresh`.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    /// The new access token.
    pub access_token: String,
    /// A rotated refresh token, when the server rotates them.
    #[serde(default)]
    pub refresh_token: Option<String>,
}

impl fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenResponse")
            .field("rotated", &self.refresh_token.is_some())
            .finish_non_exhaustive()
    }
}
