//! Tests assigned to candidates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use talentgate_core::types::{ApplicationId, AssignmentId, TestId, UserId};

/// Progress of an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssignmentStatus {
    /// Assigned, not started.
    Pending,
    /// Answers submitted.
    Completed,
    /// The deadline passed without a submission.
    Expired,
}

impl std::fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Pending => "PENDING",
            Self::Completed => "COMPLETED",
            Self::Expired => "EXPIRED",
        };
        write!(f, "{label}")
    }
}

/// A test assigned to a candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestAssignment {
    /// Unique assignment identifier.
    pub id: AssignmentId,
    /// The assigned test.
    pub test_id: TestId,
    /// Denormalized test title.
    #[serde(default)]
    pub test_title: Option<String>,
    /// Candidate who takes the test.
    pub candidate_id: UserId,
    /// Application the assignment belongs to, if any.
    #[serde(default)]
    pub application_id: Option<ApplicationId>,
    /// Progress.
    pub status: AssignmentStatus,
    /// Submission deadline.
    #[serde(default)]
    pub due_at: Option<DateTime<Utc>>,
}

impl TestAssignment {
    /// Whether the candidate can still submit answers at `now`.
    pub fn is_open(&self, now: DateTime<Utc>) -> bool {
        self.status == AssignmentStatus::Pending && self.due_at.is_none_or(|due| now < due)
    }
}

/// Body of `POST /tests/{id}/assignments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignTest {
    /// Candidate to assign the test to.
    pub candidate_id: UserId,
    /// Application the assignment belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<ApplicationId>,
    /// Optional deadline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_at: Option<DateTime<Utc>>,
}
