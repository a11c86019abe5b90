//! Evaluation tests, assignments and results.

use validator::Validate;

use talentgate_core::error::AppError;
use talentgate_core::types::TestId;
use talentgate_entity::evaluation::{
    AssignTest, CreateEvaluationTest, EvaluationTest, TestAssignment, TestResult, TestSubmission,
};

use crate::http::{ApiClient, ApiRequest};

/// `/tests` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct EvaluationsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> EvaluationsApi<'a> {
    /// Creates the service.
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// All tests, without their questions.
    pub async fn list(&self) -> Result<Vec<EvaluationTest>, AppError> {
        self.client.send(ApiRequest::get("/tests")).await
    }

    /// One test with its questions.
    pub async fn get(&self, id: TestId) -> Result<EvaluationTest, AppError> {
        self.client.send(ApiRequest::get(format!("/tests/{id}"))).await
    }

    /// Creates a test.
    pub async fn create(&self, form: &CreateEvaluationTest) -> Result<EvaluationTest, AppError> {
        form.validate()?;
        self.client.send(ApiRequest::post("/tests").json(form)?).await
    }

    /// Assigns a test to a candidate.
    pub async fn assign(&self, test_id: TestId, form: &AssignTest) -> Result<TestAssignment, AppError> {
        self.client
            .send(ApiRequest::post(format!("/tests/{test_id}/assignments")).json(form)?)
            .await
    }

    /// Tests assigned to the signed-in candidate.
    pub async fn my_assignments(&self) -> Result<Vec<TestAssignment>, AppError> {
        self.client
            .send(ApiRequest::get("/tests/assignments/me"))
            .await
    }

    /// Submits answers and returns the graded result.
    pub async fn submit(
        &self,
        test_id: TestId,
        submission: &TestSubmission,
    ) -> Result<TestResult, AppError> {
        if submission.answers.is_empty() {
            return Err(AppError::validation("Submission contains no answers"));
        }
        self.client
            .send(ApiRequest::post(format!("/tests/{test_id}/submissions")).json(submission)?)
            .await
    }

    /// Results of every candidate who took a test.
    pub async fn results(&self, test_id: TestId) -> Result<Vec<TestResult>, AppError> {
        self.client
            .send(ApiRequest::get(format!("/tests/{test_id}/results")))
            .await
    }
}
