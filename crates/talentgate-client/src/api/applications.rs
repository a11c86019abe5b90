//! Job applications.

use validator::Validate;

use talentgate_core::error::AppError;
use talentgate_core::types::{ApplicationId, PositionId};
use talentgate_entity::application::{Application, SubmitApplication, UpdateApplicationStatus};

use crate::http::{ApiClient, ApiRequest};

/// `/applications` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct ApplicationsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ApplicationsApi<'a> {
    /// Creates the service.
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Applies to a position.
    pub async fn submit(&self, form: &SubmitApplication) -> Result<Application, AppError> {
        form.validate()?;
        self.client
            .send(ApiRequest::post("/applications").json(form)?)
            .await
    }

    /// Applications of the signed-in candidate.
    pub async fn mine(&self) -> Result<Vec<Application>, AppError> {
        self.client.send(ApiRequest::get("/applications/me")).await
    }

    /// Applications received for a position.
    pub async fn for_position(&self, id: PositionId) -> Result<Vec<Application>, AppError> {
        self.client
            .send(ApiRequest::get(format!("/positions/{id}/applications")))
            .await
    }

    /// Loads one application.
    pub async fn get(&self, id: ApplicationId) -> Result<Application, AppError> {
        self.client
            .send(ApiRequest::get(format!("/applications/{id}")))
            .await
    }

    /// Moves an application through the pipeline.
    pub async fn update_status(
        &self,
        id: ApplicationId,
        form: &UpdateApplicationStatus,
    ) -> Result<Application, AppError> {
        form.validate()?;
        self.client
            .send(ApiRequest::patch(format!("/applications/{id}/status")).json(form)?)
            .await
    }

    /// Withdraws an application.
    pub async fn withdraw(&self, id: ApplicationId) -> Result<Application, AppError> {
        self.client
            .send(ApiRequest::post(format!("/applications/{id}/withdraw")))
            .await
    }
}
