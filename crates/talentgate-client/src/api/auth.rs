//! Sign-in, registration and identity.

use serde::Serialize;
use tracing::{info, warn};
use validator::Validate;

use talentgate_core::error::AppError;
use talentgate_entity::session::TokenPair;
use talentgate_entity::user::{LoginRequest, RegisterRequest, User};

use crate::http::{ApiClient, ApiRequest};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LogoutRequest {
    refresh_token: String,
}

/// `/auth/*` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    /// Creates the service.
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Signs in and loads the user, replacing any existing session.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<User, AppError> {
        credentials.validate()?;

        let tokens: TokenPair = self
            .client
            .send(ApiRequest::post("/auth/login").anonymous().json(credentials)?)
            .await?;
        self.client.session().establish(tokens).await?;

        match self.current_user().await {
            Ok(user) => {
                info!(user_id = %user.id, role = %user.role, "Signed in");
                Ok(user)
            }
            Err(e) => {
                if let Err(clear_err) = self.client.session().clear().await {
                    warn!(error = %clear_err, "Failed to discard partial session");
                }
                Err(e)
            }
        }
    }

    /// Creates a candidate account and signs in with it.
    pub async fn register(&self, form: &RegisterRequest) -> Result<User, AppError> {
        form.validate()?;

        self.client
            .send_empty(ApiRequest::post("/auth/register").anonymous().json(form)?)
            .await?;
        info!(email = %form.email, "Account registered");

        self.login(&LoginRequest {
            email: form.email.clone(),
            password: form.password.clone(),
        })
        .await
    }

    /// Signs out. The server is told on a best-effort basis; the local session
    /// is always cleared.
    pub async fn logout(&self) -> Result<(), AppError> {
        if let Some(refresh_token) = self.client.session().refresh_token() {
            let request = ApiRequest::post("/auth/logout").json(&LogoutRequest { refresh_token })?;
            if let Err(e) = self.client.send_empty(request).await {
                warn!(error = %e, "Server-side logout failed");
            }
        }
        self.client.session().clear().await?;
        info!("Signed out");
        Ok(())
    }

    /// Fetches the signed-in user and stores it in the session.
    pub async fn current_user(&self) -> Result<User, AppError> {
        let user: User = self.client.send(ApiRequest::get("/auth/me")).await?;
        self.client.session().set_user(user.clone()).await?;
        Ok(user)
    }
}
