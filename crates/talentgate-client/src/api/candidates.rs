//! Candidate records for HR.

use talentgate_core::error::AppError;
use talentgate_core::types::{PageRequest, PageResponse, UserId};
use talentgate_entity::candidate::{CandidateDetail, CandidateSummary};

use crate::http::{ApiClient, ApiRequest};

/// `/candidates` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct CandidatesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> CandidatesApi<'a> {
    /// Creates the service.
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Lists candidates.
    pub async fn list(&self, page: PageRequest) -> Result<PageResponse<CandidateSummary>, AppError> {
        self.client
            .send(ApiRequest::get("/candidates").query(page.to_query()))
            .await
    }

    /// Loads a candidate with profile and applications.
    pub async fn get(&self, id: UserId) -> Result<CandidateDetail, AppError> {
        self.client
            .send(ApiRequest::get(format!("/candidates/{id}")))
            .await
    }
}
