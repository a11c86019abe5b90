//! Profile of the signed-in user.

use validator::Validate;

use talentgate_core::error::AppError;
use talentgate_entity::user::{Profile, UpdateProfile};

use crate::http::{ApiClient, ApiRequest};

/// `/profile` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct ProfileApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ProfileApi<'a> {
    /// Creates the service.
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Loads the profile.
    pub async fn get(&self) -> Result<Profile, AppError> {
        self.client.send(ApiRequest::get("/profile")).await
    }

    /// Applies a partial update.
    pub async fn update(&self, form: &UpdateProfile) -> Result<Profile, AppError> {
        if form.is_empty() {
            return Err(AppError::validation("Nothing to update"));
        }
        form.validate()?;
        self.client
            .send(ApiRequest::put("/profile").json(form)?)
            .await
    }
}
