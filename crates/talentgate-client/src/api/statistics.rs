//! Dashboard statistics.

use talentgate_core::error::AppError;
use talentgate_entity::statistics::DashboardStatistics;

use crate::http::{ApiClient, ApiRequest};

/// `/statistics` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct StatisticsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> StatisticsApi<'a> {
    /// Creates the service.
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Aggregate counts for the dashboard.
    pub async fn dashboard(&self) -> Result<DashboardStatistics, AppError> {
        self.client
            .send(ApiRequest::get("/statistics/dashboard"))
            .await
    }
}
