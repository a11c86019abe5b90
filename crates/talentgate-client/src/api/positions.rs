//! Job positions.

use serde::Serialize;
use validator::Validate;

use talentgate_core::error::AppError;
use talentgate_core::types::{PageRequest, PageResponse, PositionId};
use talentgate_entity::position::{
    CreatePosition, Position, PositionFilter, PositionStatus, UpdatePosition,
};

use crate::http::{ApiClient, ApiRequest};

#[derive(Debug, Serialize)]
struct StatusChange {
    status: PositionStatus,
}

/// `/positions` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct PositionsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> PositionsApi<'a> {
    /// Creates the service.
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Lists positions. Signed-out visitors see open positions only.
    pub async fn list(
        &self,
        filter: &PositionFilter,
        page: PageRequest,
    ) -> Result<PageResponse<Position>, AppError> {
        let request = ApiRequest::get("/positions")
            .optional_auth()
            .query(filter.to_query())
            .query(page.to_query());
        self.client.send(request).await
    }

    /// Loads one position.
    pub async fn get(&self, id: PositionId) -> Result<Position, AppError> {
        self.client
            .send(ApiRequest::get(format!("/positions/{id}")).optional_auth())
            .await
    }

    /// Creates a position.
    pub async fn create(&self, form: &CreatePosition) -> Result<Position, AppError> {
        form.validate()?;
        self.client
            .send(ApiRequest::post("/positions").json(form)?)
            .await
    }

    /// Applies a partial update.
    pub async fn update(&self, id: PositionId, form: &UpdatePosition) -> Result<Position, AppError> {
        form.validate()?;
        self.client
            .send(ApiRequest::put(format!("/positions/{id}")).json(form)?)
            .await
    }

    /// Publishes, closes or reverts a position to draft.
    pub async fn set_status(
        &self,
        id: PositionId,
        status: PositionStatus,
    ) -> Result<Position, AppError> {
        self.client
            .send(ApiRequest::patch(format!("/positions/{id}/status")).json(&StatusChange { status })?)
            .await
    }

    /// Deletes a position.
    pub async fn delete(&self, id: PositionId) -> Result<(), AppError> {
        self.client
            .send_empty(ApiRequest::delete(format!("/positions/{id}")))
            .await
    }
}
