//! Candidate answers and graded results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use talentgate_core::AppError;
use talentgate_core::types::{QuestionId, ResultId, TestId, UserId};

use super::model::{EvaluationTest, QuestionKind};

/// The answer to one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    /// Answered question.
    pub question_id: QuestionId,
    /// Selected option indexes (choice questions).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub selected_options: Vec<usize>,
    /// Free-text answer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Body of `POST /tests/{id}/submissions`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSubmission {
    /// One answer per answered question.
    pub answers: Vec<Answer>,
}

impl TestSubmission {
    /// Check the answers against the test definition before sending them.
    ///
    /// Every question must be answered exactly once, option indexes must be in
    /// range, and single-choice questions take exactly one option.
    pub fn check_against(&self, test: &EvaluationTest) -> Result<(), AppError> {
        for answer in &self.answers {
            let question = test.question(answer.question_id).ok_or_else(|| {
                AppError::validation(format!(
                    "Answer refers to unknown question {}",
                    answer.question_id
                ))
            })?;

            match question.kind {
                QuestionKind::FreeText => {
                    if answer.text.as_deref().is_none_or(|t| t.trim().is_empty()) {
                        return Err(AppError::validation(format!(
                            "Question '{}' needs a text answer",
                            question.prompt
                        )));
                    }
                }
                QuestionKind::SingleChoice | QuestionKind::MultipleChoice => {
                    if answer
                        .selected_options
                        .iter()
                        .any(|&i| i >= question.options.len())
                    {
                        return Err(AppError::validation(format!(
                            "Question '{}' has no such option",
                            question.prompt
                        )));
                    }
                    let expected_single = question.kind == QuestionKind::SingleChoice;
                    if expected_single && answer.selected_options.len() != 1 {
                        return Err(AppError::validation(format!(
                            "Question '{}' takes exactly one option",
                            question.prompt
                        )));
                    }
                }
            }
        }

        for question in &test.questions {
            let count = self
                .answers
                .iter()
                .filter(|a| a.question_id == question.id)
                .count();
            if count != 1 {
                return Err(AppError::validation(format!(
                    "Question '{}' must be answered exactly once",
                    question.prompt
                )));
            }
        }
        Ok(())
    }
}

/// A graded submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    /// Unique result identifier.
    pub id: ResultId,
    /// Graded test.
    pub test_id: TestId,
    /// Candidate who submitted.
    pub candidate_id: UserId,
    /// Denormalized candidate name.
    #[serde(default)]
    pub candidate_name: Option<String>,
    /// Points earned.
    pub score: u32,
    /// Points available.
    pub max_score: u32,
    /// Whether the passing score was reached.
    pub passed: bool,
    /// When the answers were submitted.
    pub submitted_at: DateTime<Utc>,
}

impl TestResult {
    /// Score as a percentage of the maximum.
    pub fn percentage(&self) -> f64 {
        if self.max_score == 0 {
            0.0
        } else {
            f64::from(self.score) * 100.0 / f64::from(self.max_score)
        }
    }
}
