//! Consistency findings.

use serde::Serialize;
use std::fmt;

/// A single discrepancy found by the verifier.
///
/// Findings are not execution errors; they are collected and reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VerificationIssue {
    ActiveCount { expected: u64, actual: u64 },
    MissingComment { question_number: String },
    MissingMotivation { question_number: String },
    OptionCount { question_number: String, count: u64 },
    ScoreExampleCount { question_number: String, count: u64 },
    ScoreLevels { question_number: String, levels: Vec<String> },
    MissingActions { question_number: String, with_action: u64 },
}

impl VerificationIssue {
    /// Question the finding is about, if it concerns a single template.
    pub fn question_number(&self) -> Option<&str> {
        match self {
            VerificationIssue::ActiveCount { .. } => None,
            VerificationIssue::MissingComment { question_number }
            | VerificationIssue::MissingMotivation { question_number }
            | VerificationIssue::OptionCount { question_number, .. }
            | VerificationIssue::ScoreExampleCount { question_number, .. }
            | VerificationIssue::ScoreLevels { question_number, .. }
            | VerificationIssue::MissingActions { question_number, .. } => Some(question_number),
        }
    }
}

impl fmt::Display for VerificationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerificationIssue::ActiveCount { expected, actual } => {
                write!(f, "Expected {} active questions, got {}", expected, actual)
            }
            VerificationIssue::MissingComment { question_number } => {
                write!(f, "Q{} missing comment", question_number)
            }
            VerificationIssue::MissingMotivation { question_number } => {
                write!(f, "Q{} missing motivation", question_number)
            }
            VerificationIssue::OptionCount {
                question_number,
                count,
            } => write!(f, "Q{} has {} options (expected 3)", question_number, count),
            VerificationIssue::ScoreExampleCount {
                question_number,
                count,
            } => write!(
                f,
                "Q{} has {} score examples (expected 3)",
                question_number, count
            ),
            VerificationIssue::ScoreLevels {
                question_number,
                levels,
            } => write!(
                f,
                "Q{} has score levels [{}] (expected high, low, medium)",
                question_number,
                levels.join(", ")
            ),
            VerificationIssue::MissingActions {
                question_number,
                with_action,
            } => write!(
                f,
                "Q{} only {}/3 score examples have report_action",
                question_number, with_action
            ),
        }
    }
}
