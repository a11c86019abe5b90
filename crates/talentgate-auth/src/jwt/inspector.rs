//! Unverified JWT payload decoding.
//!
//! The client holds no signing key. Claims are read only to decide when to
//! refresh; the server remains the authority on token validity.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Duration, Utc};

use talentgate_core::config::MAX_REFRESH_THRESHOLD_SECONDS;
use talentgate_core::error::AppError;

use super::claims::Claims;

/// Reads claims from JWT access tokens without verifying the signature.
#[derive(Debug, Clone)]
pub struct JwtInspector {
    /// Refresh ahead of expiry when less than this remains.
    refresh_window: Duration,
}

impl JwtInspector {
    /// Creates an inspector refreshing `threshold_seconds` ahead of expiry.
    ///
    /// Thresholds above [`MAX_REFRESH_THRESHOLD_SECONDS`] are clamped to it.
    pub fn new(threshold_seconds: u64) -> Self {
        let clamped = threshold_seconds.min(MAX_REFRESH_THRESHOLD_SECONDS) as i64;
        Self {
            refresh_window: Duration::seconds(clamped),
        }
    }

    /// Decodes the payload segment of a compact JWT.
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        let mut segments = token.split('.');
        let payload = match (segments.next(), segments.next(), segments.next(), segments.next()) {
            (Some(_), Some(payload), Some(_), None) => payload,
            _ => return Err(AppError::authentication("Invalid token format")),
        };

        let bytes = URL_SAFE_NO_PAD
            .decode(payload.trim_end_matches('='))
            .map_err(|e| AppError::authentication(format!("Invalid token encoding: {e}")))?;

        serde_json::from_slice(&bytes)
            .map_err(|e| AppError::authentication(format!("Invalid token claims: {e}")))
    }

    /// Whether `token` should be refreshed before it is sent at `now`.
    ///
    /// Tokens whose claims cannot be read are left to the server to reject.
    pub fn needs_refresh(&self, token: &str, now: DateTime<Utc>) -> bool {
        match self.decode(token) {
            Ok(claims) => claims.expires_within(self.refresh_window, now),
            Err(e) => {
                tracing::debug!(error = %e, "Access token claims unreadable, skipping proactive refresh");
                false
            }
        }
    }
}
