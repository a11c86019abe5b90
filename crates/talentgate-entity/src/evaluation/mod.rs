//! Evaluation test entities: definitions, assignments, submissions and results.

pub mod assignment;
pub mod model;
pub mod submission;

pub use assignment::{AssignTest, AssignmentStatus, TestAssignment};
pub use model::{CreateEvaluationTest, CreateQuestion, EvaluationTest, Question, QuestionKind};
pub use submission::{Answer, TestResult, TestSubmission};
