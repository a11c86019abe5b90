//! Evaluation test commands.

use chrono::{DateTime, TimeDelta, Utc};
use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use talentgate_client::TalentGateClient;
use talentgate_core::error::AppError;
use talentgate_core::types::{ApplicationId, TestId, UserId};
use talentgate_entity::evaluation::{
    Answer, AssignTest, CreateEvaluationTest, EvaluationTest, QuestionKind, TestResult,
    TestSubmission,
};

use crate::output::{self, OutputFormat};

/// Longest assignment deadline accepted from the command line.
const MAX_DUE_IN_DAYS: i64 = 365;

/// Arguments for test commands
#[derive(Debug, Args)]
pub struct TestArgs {
    /// Test subcommand
    #[command(subcommand)]
    pub command: TestCommand,
}

/// Test subcommands
#[derive(Debug, Subcommand)]
pub enum TestCommand {
    /// List tests
    List,
    /// Show a test with its questions
    Show {
        /// Test ID
        id: TestId,
    },
    /// Create a test from a JSON definition file
    Create {
        /// Path to the test definition (camelCase JSON)
        #[arg(short, long)]
        file: String,
    },
    /// Assign a test to a candidate
    Assign {
        /// Test ID
        id: TestId,
        /// Candidate user ID
        #[arg(long)]
        candidate: UserId,
        /// Application the test belongs to
        #[arg(long)]
        application: Option<ApplicationId>,
        /// Days until the deadline (1-365)
        #[arg(long, value_parser = clap::value_parser!(i64).range(1..=MAX_DUE_IN_DAYS))]
        due_in_days: Option<i64>,
    },
    /// List tests assigned to you
    Assignments,
    /// Take an assigned test interactively
    Take {
        /// Test ID
        id: TestId,
    },
    /// Show results of a test
    Results {
        /// Test ID
        id: TestId,
    },
}

/// Test display row for table output
#[derive(Debug, Serialize, Tabled)]
struct TestRow {
    /// Test ID
    id: String,
    /// Title
    title: String,
    /// Duration
    minutes: u32,
    /// Passing score
    #[tabled(rename = "pass %")]
    passing_score: u8,
}

/// Assignment display row for table output
#[derive(Debug, Serialize, Tabled)]
struct AssignmentRow {
    /// Test ID
    test: String,
    /// Title
    title: String,
    /// Status
    status: String,
    /// Deadline
    due: String,
}

/// Result display row for table output
#[derive(Debug, Serialize, Tabled)]
struct ResultRow {
    /// Candidate
    candidate: String,
    /// Score
    score: String,
    /// Percentage
    percent: String,
    /// Passed
    passed: bool,
    /// Submitted at
    submitted: String,
}

impl From<&TestResult> for ResultRow {
    fn from(r: &TestResult) -> Self {
        Self {
            candidate: r
                .candidate_name
                .clone()
                .unwrap_or_else(|| r.candidate_id.to_string()),
            score: format!("{}/{}", r.score, r.max_score),
            percent: format!("{:.1}%", r.percentage()),
            passed: r.passed,
            submitted: r.submitted_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute test commands
pub async fn execute(
    args: &TestArgs,
    client: &TalentGateClient,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        TestCommand::List => {
            super::guard(client, "/hr/tests")?;
            let tests = client.evaluations().list().await?;
            let rows: Vec<TestRow> = tests
                .iter()
                .map(|t| TestRow {
                    id: t.id.to_string(),
                    title: t.title.clone(),
                    minutes: t.duration_minutes,
                    passing_score: t.passing_score,
                })
                .collect();
            output::print_list(&rows, format);
        }
        TestCommand::Show { id } => {
            super::guard(client, &format!("/hr/tests/{id}"))?;
            let test = client.evaluations().get(*id).await?;
            print_test(&test, format);
        }
        TestCommand::Create { file } => {
            super::guard(client, "/hr/tests/new")?;
            let raw = tokio::fs::read_to_string(file).await?;
            let form: CreateEvaluationTest = serde_json::from_str(&raw)?;
            let test = client.evaluations().create(&form).await?;
            output::print_success(&format!(
                "Test '{}' created with {} questions",
                test.title,
                test.questions.len()
            ));
            print_test(&test, format);
        }
        TestCommand::Assign {
            id,
            candidate,
            application,
            due_in_days,
        } => {
            super::guard(client, &format!("/hr/tests/{id}/assign"))?;
            let form = AssignTest {
                candidate_id: *candidate,
                application_id: *application,
                due_at: due_in_days
                    .map(|days| due_date(days, Utc::now()))
                    .transpose()?,
            };
            let assignment = client.evaluations().assign(*id, &form).await?;
            output::print_success(&format!(
                "Test assigned to {} ({})",
                assignment.candidate_id, assignment.status
            ));
        }
        TestCommand::Assignments => {
            super::guard(client, "/candidate/tests")?;
            let assignments = client.evaluations().my_assignments().await?;
            let rows: Vec<AssignmentRow> = assignments
                .iter()
                .map(|a| AssignmentRow {
                    test: a.test_id.to_string(),
                    title: output::or_dash(a.test_title.as_deref()),
                    status: a.status.to_string(),
                    due: a
                        .due_at
                        .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
                        .unwrap_or_else(|| "-".to_string()),
                })
                .collect();
            output::print_list(&rows, format);
        }
        TestCommand::Take { id } => {
            super::guard(client, &format!("/candidate/tests/{id}"))?;
            take_test(client, *id, format).await?;
        }
        TestCommand::Results { id } => {
            super::guard(client, &format!("/hr/tests/{id}/results"))?;
            let results = client.evaluations().results(*id).await?;
            let rows: Vec<ResultRow> = results.iter().map(ResultRow::from).collect();
            output::print_list(&rows, format);
        }
    }

    Ok(())
}

async fn take_test(
    client: &TalentGateClient,
    id: TestId,
    format: OutputFormat,
) -> Result<(), AppError> {
    let now = chrono::Utc::now();
    let assignments = client.evaluations().my_assignments().await?;
    let assignment = assignments
        .iter()
        .find(|a| a.test_id == id)
        .ok_or_else(|| AppError::not_found("This test is not assigned to you"))?;
    if !assignment.is_open(now) {
        return Err(AppError::conflict(format!(
            "This assignment is {} and can no longer be submitted",
            assignment.status
        )));
    }

    let test = client.evaluations().get(id).await?;
    println!("{} ({} minutes)", test.title, test.duration_minutes);
    if let Some(description) = &test.description {
        println!("{description}");
    }

    let mut answers = Vec::with_capacity(test.questions.len());
    for (index, question) in test.questions.iter().enumerate() {
        let prompt = format!(
            "Q{}/{} [{} pts] {}",
            index + 1,
            test.questions.len(),
            question.points,
            question.prompt
        );
        let answer = match question.kind {
            QuestionKind::SingleChoice => {
                let choice = dialoguer::Select::new()
                    .with_prompt(prompt)
                    .items(&question.options)
                    .default(0)
                    .interact()
                    .map_err(super::input_error)?;
                Answer {
                    question_id: question.id,
                    selected_options: vec![choice],
                    text: None,
                }
            }
            QuestionKind::MultipleChoice => {
                let choices = dialoguer::MultiSelect::new()
                    .with_prompt(prompt)
                    .items(&question.options)
                    .interact()
                    .map_err(super::input_error)?;
                Answer {
                    question_id: question.id,
                    selected_options: choices,
                    text: None,
                }
            }
            QuestionKind::FreeText => {
                let text: String = dialoguer::Input::new()
                    .with_prompt(prompt)
                    .interact_text()
                    .map_err(super::input_error)?;
                Answer {
                    question_id: question.id,
                    selected_options: Vec::new(),
                    text: Some(text),
                }
            }
        };
        answers.push(answer);
    }

    let submission = TestSubmission { answers };
    submission.check_against(&test)?;

    let confirm = dialoguer::Confirm::new()
        .with_prompt("Submit your answers?")
        .default(true)
        .interact()
        .map_err(super::input_error)?;
    if !confirm {
        output::print_warning("Answers discarded");
        return Ok(());
    }

    let result = client.evaluations().submit(id, &submission).await?;
    let verdict = if result.passed { "passed" } else { "did not pass" };
    output::print_success(&format!(
        "Submitted: {}/{} ({:.1}%), {verdict}",
        result.score,
        result.max_score,
        result.percentage()
    ));
    if format == OutputFormat::Json {
        output::print_json(&result);
    }
    Ok(())
}

/// Deadline `days` after `now`.
fn due_date(days: i64, now: DateTime<Utc>) -> Result<DateTime<Utc>, AppError> {
    if !(1..=MAX_DUE_IN_DAYS).contains(&days) {
        return Err(AppError::validation(format!(
            "due-in-days must be between 1 and {MAX_DUE_IN_DAYS}, got {days}"
        )));
    }
    TimeDelta::try_days(days)
        .and_then(|delta| now.checked_add_signed(delta))
        .ok_or_else(|| AppError::validation(format!("due-in-days {days} is out of range")))
}

fn print_test(test: &EvaluationTest, format: OutputFormat) {
    output::print_item(
        test,
        &[
            ("ID", test.id.to_string()),
            ("Title", test.title.clone()),
            ("Duration", format!("{} minutes", test.duration_minutes)),
            ("Passing score", format!("{}%", test.passing_score)),
            ("Questions", test.questions.len().to_string()),
            ("Max score", test.max_score().to_string()),
        ],
        format,
    );
    if format == OutputFormat::Table {
        for (index, question) in test.questions.iter().enumerate() {
            println!("  {}. {} [{} pts]", index + 1, question.prompt, question.points);
            for option in &question.options {
                println!("       - {option}");
            }
        }
    }
}
