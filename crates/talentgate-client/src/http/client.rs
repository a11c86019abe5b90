//! Authenticated request wrapper.
//!
//! Every authenticated call attaches the current bearer token. A token about
//! to expire is renewed before the call; a response whose status is listed in
//! `auth.refresh_on_status` triggers one renewal and one retry. When renewal
//! is refused, or the retry is rejected again, the session is torn down and
//! the caller receives a session-expired error.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use talentgate_auth::jwt::JwtInspector;
use talentgate_auth::session::SessionManager;
use talentgate_core::config::AppConfig;
use talentgate_core::error::{AppError, ErrorKind};
use talentgate_core::types::ApiErrorResponse;
use talentgate_entity::session::TokenResponse;

use super::request::{ApiRequest, AuthMode};

/// Body of the refresh call.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RefreshRequest<'a> {
    refresh_token: &'a str,
}

/// The request wrapper shared by all API services.
#[derive(Clone)]
pub struct ApiClient {
    /// Pooled HTTP client.
    http: reqwest::Client,
    /// API base URL without trailing slash.
    base_url: String,
    /// Shared session state.
    session: SessionManager,
    /// Reads token expiry.
    inspector: JwtInspector,
    /// Path of the refresh endpoint.
    refresh_path: String,
    /// Statuses that mean "token rejected".
    refresh_on_status: Vec<u16>,
    /// Serializes refreshes so concurrent callers share one.
    refresh_lock: Arc<Mutex<()>>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("refresh_path", &self.refresh_path)
            .field("refresh_on_status", &self.refresh_on_status)
            .finish()
    }
}

impl ApiClient {
    /// Creates the wrapper from configuration.
    pub fn new(config: &AppConfig, session: SessionManager) -> Result<Self, AppError> {
        let base = url::Url::parse(&config.api.base_url).map_err(|e| {
            AppError::configuration(format!(
                "Invalid api.base_url '{}': {e}",
                config.api.base_url
            ))
        })?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.api.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.api.connect_timeout_seconds))
            .user_agent(config.api.user_agent.clone())
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    format!("Failed to create HTTP client: {e}"),
                    e,
                )
            })?;

        info!(base_url = %base, "API client ready");

        Ok(Self {
            http,
            base_url: base.as_str().trim_end_matches('/').to_string(),
            session,
            inspector: JwtInspector::new(config.auth.refresh_threshold_seconds),
            refresh_path: config.auth.refresh_path.clone(),
            refresh_on_status: config.auth.refresh_on_status.clone(),
            refresh_lock: Arc::new(Mutex::new(())),
        })
    }

    /// The session this client authenticates with.
    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    /// Sends `request` and decodes the JSON response body.
    pub async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, AppError> {
        let response = self.execute(&request).await?;
        let bytes = response.bytes().await.map_err(transport_error)?;
        serde_json::from_slice(&bytes).map_err(|e| {
            AppError::with_source(
                ErrorKind::Serialization,
                format!("Unexpected response from {} {}: {e}", request.method, request.path),
                e,
            )
        })
    }

    /// Sends `request` and discards the response body.
    pub async fn send_empty(&self, request: ApiRequest) -> Result<(), AppError> {
        self.execute(&request).await.map(|_| ())
    }

    async fn execute(&self, request: &ApiRequest) -> Result<reqwest::Response, AppError> {
        let token = match (request.auth, self.session.access_token()) {
            (AuthMode::Anonymous, _) | (AuthMode::Optional, None) => {
                let response = self.dispatch(request, None).await?;
                return check_status(response).await;
            }
            (AuthMode::Required, None) => {
                return Err(AppError::authentication("Please log in to continue"));
            }
            (_, Some(token)) => token,
        };

        let mut token = token;
        let mut refreshed = false;
        if self.inspector.needs_refresh(&token, Utc::now()) {
            debug!(path = %request.path, "Access token about to expire, refreshing first");
            token = self.refresh(&token).await?;
            refreshed = true;
        }

        let response = self.dispatch(request, Some(&token)).await?;
        if !self.is_rejected(&response) {
            return check_status(response).await;
        }

        // One renewal per call: a token renewed moments ago that is still
        // rejected means the session is gone.
        if refreshed {
            return Err(self.expire(response.status().as_u16()).await);
        }

        warn!(
            status = response.status().as_u16(),
            path = %request.path,
            "Token rejected, refreshing and retrying once"
        );
        let token = self.refresh(&token).await?;
        let retry = self.dispatch(request, Some(&token)).await?;
        if self.is_rejected(&retry) {
            return Err(self.expire(retry.status().as_u16()).await);
        }
        check_status(retry).await
    }

    /// Exchanges the refresh token for a new access token.
    ///
    /// `stale` is the token the caller holds. If another caller already
    /// replaced it while this one waited for the lock, the new token is
    /// returned without another round trip.
    async fn refresh(&self, stale: &str) -> Result<String, AppError> {
        let _guard = self.refresh_lock.lock().await;

        match self.session.access_token() {
            Some(current) if current != stale => {
                debug!("Token already refreshed by a concurrent request");
                return Ok(current);
            }
            Some(_) => {}
            None => return Err(AppError::session_expired()),
        }
        let Some(refresh_token) = self.session.refresh_token() else {
            return Err(AppError::session_expired());
        };

        let response = self
            .http
            .post(self.url(&self.refresh_path))
            .json(&RefreshRequest {
                refresh_token: &refresh_token,
            })
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.expire(status.as_u16()).await);
        }

        let tokens: TokenResponse = response.json().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Serialization,
                format!("Unexpected refresh response: {e}"),
                e,
            )
        })?;
        let pair = self.session.rotate_tokens(tokens).await?;
        info!("Access token refreshed");
        Ok(pair.access_token)
    }

    /// Tears the session down after an unrecoverable rejection.
    async fn expire(&self, status: u16) -> AppError {
        warn!(status, "Session could not be renewed, signing out");
        if let Err(e) = self.session.clear().await {
            warn!(error = %e, "Failed to remove persisted session");
        }
        AppError::session_expired()
    }

    async fn dispatch(
        &self,
        request: &ApiRequest,
        token: Option<&str>,
    ) -> Result<reqwest::Response, AppError> {
        let mut builder = self
            .http
            .request(request.method.clone(), self.url(&request.path));
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }

        debug!(method = %request.method, path = %request.path, "Sending request");
        builder.send().await.map_err(transport_error)
    }

    fn is_rejected(&self, response: &reqwest::Response) -> bool {
        self.refresh_on_status
            .contains(&response.status().as_u16())
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// Maps a non-success response to an error classified by status.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = ApiErrorResponse::parse(&body)
        .map(|e| e.display_message())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()))
        });
    debug!(status = status.as_u16(), message = %message, "Request failed");
    Err(AppError::from_status(status.as_u16(), message))
}

/// Maps a failure that produced no response.
fn transport_error(err: reqwest::Error) -> AppError {
    let message = if err.is_timeout() {
        "The server did not respond in time".to_string()
    } else if err.is_connect() {
        "Could not connect to the server".to_string()
    } else {
        format!("Request failed: {err}")
    };
    AppError::with_source(ErrorKind::Network, message, err)
}
