//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section, and every field carries a default so an empty file is valid.

pub mod api;
pub mod auth;
pub mod guard;
pub mod logging;
pub mod session;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use self::api::ApiConfig;
pub use self::auth::{AuthConfig, MAX_REFRESH_THRESHOLD_SECONDS};
pub use self::guard::{GuardConfig, RouteRuleConfig};
pub use self::logging::LoggingConfig;
pub use self::session::{SessionBackend, SessionConfig};

use crate::error::AppError;

/// Prefix of environment variables that override file settings.
pub const ENV_PREFIX: &str = "TALENTGATE";

/// Root application configuration.
///
/// Deserialization target for the merged configuration: the base file, an
/// optional environment overlay next to it, and `TALENTGATE_*` variables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Remote API settings.
    #[serde(default)]
    pub api: ApiConfig,
    /// Token refresh settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Session persistence settings.
    #[serde(default)]
    pub session: SessionConfig,
    /// Route guard rules.
    #[serde(default)]
    pub guard: GuardConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `path`, overlaid with `{dir}/{env}.toml` and
    /// environment variables such as `TALENTGATE_API__BASE_URL`.
    pub fn load(path: &str, env: &str) -> Result<Self, AppError> {
        let overlay = Path::new(path)
            .parent()
            .map(|dir| dir.join(env))
            .unwrap_or_else(|| Path::new(env).to_path_buf());

        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::File::with_name(&overlay.to_string_lossy()).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints that serde defaults cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://")
        {
            return Err(AppError::configuration(format!(
                "api.base_url must be an http(s) URL, got '{}'",
                self.api.base_url
            )));
        }
        if !self.guard.login_route.starts_with('/') {
            return Err(AppError::configuration(
                "guard.login_route must be an absolute path",
            ));
        }
        if self.auth.refresh_threshold_seconds > MAX_REFRESH_THRESHOLD_SECONDS {
            return Err(AppError::configuration(format!(
                "auth.refresh_threshold_seconds must be at most {MAX_REFRESH_THRESHOLD_SECONDS}, got {}",
                self.auth.refresh_threshold_seconds
            )));
        }
        if self.auth.refresh_on_status.iter().any(|s| !(400..600).contains(s)) {
            return Err(AppError::configuration(
                "auth.refresh_on_status may only contain error statuses",
            ));
        }
        Ok(())
    }
}
