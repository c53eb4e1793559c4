//! Verification report

use super::issue::VerificationIssue;
use super::rows::{CategoryCount, FieldCompleteness, OptionCount, ScoreExampleSummary};
use crate::template::TemplateListing;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Outcome of a verification run: the rows each check looked at plus the
/// findings, in check order.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationReport {
    pub generated_at: DateTime<Utc>,
    pub expected_active: u64,
    pub active_count: u64,
    pub inactive_count: u64,
    pub fields: Vec<FieldCompleteness>,
    pub option_counts: Vec<OptionCount>,
    pub score_examples: Vec<ScoreExampleSummary>,
    pub distribution: Vec<CategoryCount>,
    pub deactivated: Vec<TemplateListing>,
    pub issues: Vec<VerificationIssue>,
}

impl VerificationReport {
    /// Returns `true` when every check passed.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Findings concerning one question.
    pub fn issues_for<'a>(
        &'a self,
        question_number: &'a str,
    ) -> impl Iterator<Item = &'a VerificationIssue> + 'a {
        self.issues
            .iter()
            .filter(move |i| i.question_number() == Some(question_number))
    }
}
