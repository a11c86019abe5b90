//! Evaluation test definitions.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use talentgate_core::types::{PositionId, QuestionId, TestId};

/// How a question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionKind {
    /// Exactly one option is selected.
    SingleChoice,
    /// Any number of options are selected.
    MultipleChoice,
    /// Free-form text answer, graded by HR.
    FreeText,
}

impl QuestionKind {
    /// Whether the question is answered by picking options.
    pub fn is_choice(&self) -> bool {
        !matches!(self, Self::FreeText)
    }
}

/// A question as delivered to a candidate. Correct answers never leave the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Unique question identifier.
    pub id: QuestionId,
    /// Question text.
    pub prompt: String,
    /// Answer mode.
    pub kind: QuestionKind,
    /// Options for choice questions.
    #[serde(default)]
    pub options: Vec<String>,
    /// Points awarded for a correct answer.
    pub points: u32,
}

/// An evaluation test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationTest {
    /// Unique test identifier.
    pub id: TestId,
    /// Test title.
    pub title: String,
    /// Instructions shown before starting.
    #[serde(default)]
    pub description: Option<String>,
    /// Position the test evaluates for, if any.
    #[serde(default)]
    pub position_id: Option<PositionId>,
    /// Time limit in minutes.
    pub duration_minutes: u32,
    /// Minimum percentage required to pass.
    pub passing_score: u8,
    /// Questions, in presentation order. Summaries returned by list endpoints omit them.
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl EvaluationTest {
    /// Sum of all question points, saturating at `u32::MAX`.
    pub fn max_score(&self) -> u32 {
        self.questions
            .iter()
            .fold(0u32, |total, q| total.saturating_add(q.points))
    }

    /// Look up a question by id.
    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}

/// A question inside the test creation form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_question_options"))]
pub struct CreateQuestion {
    /// Question text.
    #[validate(length(min = 5, message = "must be at least 5 characters"))]
    pub prompt: String,
    /// Answer mode.
    pub kind: QuestionKind,
    /// Options for choice questions.
    #[serde(default)]
    pub options: Vec<String>,
    /// Indexes into `options` that are correct.
    #[serde(default)]
    pub correct_options: Vec<usize>,
    /// Points awarded for a correct answer.
    #[validate(range(min = 1, max = 100, message = "must be between 1 and 100"))]
    pub points: u32,
}

/// Form used by HR to create a test.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEvaluationTest {
    /// Test title.
    #[validate(length(min = 3, max = 120, message = "must be 3 to 120 characters"))]
    pub title: String,
    /// Instructions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Position the test evaluates for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_id: Option<PositionId>,
    /// Time limit in minutes.
    #[validate(range(min = 1, max = 480, message = "must be between 1 and 480 minutes"))]
    pub duration_minutes: u32,
    /// Minimum percentage required to pass.
    #[validate(range(max = 100, message = "must be a percentage"))]
    pub passing_score: u8,
    /// Questions.
    #[validate(length(min = 1, message = "must contain at least one question"), nested)]
    pub questions: Vec<CreateQuestion>,
}

fn validate_question_options(question: &CreateQuestion) -> Result<(), ValidationError> {
    let fail = |code: &'static str, message: &'static str| {
        let mut err = ValidationError::new(code);
        err.message = Some(message.into());
        Err(err)
    };

    match question.kind {
        QuestionKind::FreeText => {
            if !question.options.is_empty() || !question.correct_options.is_empty() {
                return fail("free_text_options", "free-text questions take no options");
            }
        }
        QuestionKind::SingleChoice | QuestionKind::MultipleChoice => {
            if question.options.len() < 2 {
                return fail("too_few_options", "choice questions need at least two options");
            }
            if question.correct_options.is_empty() {
                return fail("no_correct_option", "mark at least one option as correct");
            }
            if question
                .correct_options
                .iter()
                .any(|&i| i >= question.options.len())
            {
                return fail("correct_option_range", "correct option index out of range");
            }
            if question.kind == QuestionKind::SingleChoice && question.correct_options.len() != 1 {
                return fail(
                    "single_choice_answers",
                    "single-choice questions have exactly one correct option",
                );
            }
        }
    }
    Ok(())
}
