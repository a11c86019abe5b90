//! Dashboard statistics model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::application::ApplicationStatus;

/// Payload of `GET /statistics/dashboard`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatistics {
    /// Positions in any status.
    pub total_positions: u64,
    /// Positions accepting applications.
    pub open_positions: u64,
    /// Applications across all positions.
    pub total_applications: u64,
    /// Application counts keyed by status.
    #[serde(default)]
    pub applications_by_status: BTreeMap<String, u64>,
    /// Registered candidates.
    pub total_candidates: u64,
    /// Submitted evaluation tests.
    #[serde(default)]
    pub tests_taken: u64,
    /// Mean test score percentage, absent before the first submission.
    #[serde(default)]
    pub average_score: Option<f64>,
}

impl DashboardStatistics {
    /// Number of applications in `status`.
    pub fn count_for(&self, status: ApplicationStatus) -> u64 {
        self.applications_by_status
            .get(status.as_str())
            .copied()
            .unwrap_or(0)
    }

    /// Share of applications that reached an offer, as a percentage.
    pub fn offer_rate(&self) -> Option<f64> {
        if self.total_applications == 0 {
            return None;
        }
        let offered = self.count_for(ApplicationStatus::Offered) as f64;
        Some(offered * 100.0 / self.total_applications as f64)
    }
}
