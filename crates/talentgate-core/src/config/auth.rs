//! Token lifecycle configuration.

use serde::{Deserialize, Serialize};

/// Largest accepted proactive refresh threshold, one day.
pub const MAX_REFRESH_THRESHOLD_SECONDS: u64 = 86_400;

/// Controls how the request wrapper refreshes access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Refresh proactively when the access token expires within this many seconds.
    #[serde(default = "default_refresh_threshold")]
    pub refresh_threshold_seconds: u64,
    /// API path of the token refresh endpoint.
    #[serde(default = "default_refresh_path")]
    pub refresh_path: String,
    /// Response statuses that trigger one refresh-and-retry.
    #[serde(default = "default_refresh_on_status")]
    pub refresh_on_status: Vec<u16>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            refresh_threshold_seconds: default_refresh_threshold(),
            refresh_path: default_refresh_path(),
            refresh_on_status: default_refresh_on_status(),
        }
    }
}

fn default_refresh_threshold() -> u64 {
    5
}

fn default_refresh_path() -> String {
    "/auth/refresh".to_string()
}

fn default_refresh_on_status() -> Vec<u16> {
    vec![401, 403]
}
