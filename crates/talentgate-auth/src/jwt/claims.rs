//! JWT claims read from access tokens.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Claims payload of an access token.
///
/// Only `exp` is required; the client never trusts the other claims for
/// authorization, the user record from `/auth/me` is authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject, the user id.
    #[serde(default)]
    pub sub: Option<String>,
    /// Role at the time of issuance.
    #[serde(default)]
    pub role: Option<String>,
    /// Issued-at timestamp (seconds since epoch).
    #[serde(default)]
    pub iat: Option<i64>,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Checks whether this token has expired at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }

    /// Returns the remaining TTL in seconds (0 if expired).
    pub fn remaining_ttl_seconds(&self, now: DateTime<Utc>) -> u64 {
        u64::try_from(self.exp.saturating_sub(now.timestamp())).unwrap_or(0)
    }

    /// Whether the token expires within `window` of `now`, expired tokens included.
    pub fn expires_within(&self, window: Duration, now: DateTime<Utc>) -> bool {
        self.exp.saturating_sub(now.timestamp()) < window.num_seconds()
    }
}
