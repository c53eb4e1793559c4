//! Structural validation of catalogue entries.
//!
//! Runs before anything is written so that a malformed entry can never
//! produce a template with the wrong number of options or score examples.

use crate::question::definition::QuestionDefinition;
use crate::question::score_level::ScoreLevel;
use std::collections::HashSet;
use std::fmt;

/// Options every question must define.
pub const OPTIONS_PER_QUESTION: usize = 3;

/// Score interpretations every question must define (one per level).
pub const SCORES_PER_QUESTION: usize = 3;

/// Identifies a specific catalogue problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogueIssueCode {
    EmptyId,
    DuplicateId,
    EmptyText,
    InvalidWeight,
    OptionCount,
    EmptyOptionLabel,
    ScoreCount,
    ScoreLevels,
    EmptyReason,
    EmptyAction,
}

/// A detected problem in one catalogue entry.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogueIssue {
    /// Question id the issue belongs to (may be empty for `EmptyId`)
    pub question_id: String,
    pub code: CatalogueIssueCode,
    pub message: String,
}

impl CatalogueIssue {
    fn new(question_id: &str, code: CatalogueIssueCode, message: impl Into<String>) -> Self {
        Self {
            question_id: question_id.to_string(),
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CatalogueIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}: {}", self.question_id, self.message)
    }
}

/// Validate every entry, returning all issues found (empty when valid).
pub fn validate_questions(questions: &[QuestionDefinition]) -> Vec<CatalogueIssue> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();

    for q in questions {
        let id = q.id.as_str();

        if id.trim().is_empty() {
            issues.push(CatalogueIssue::new(
                id,
                CatalogueIssueCode::EmptyId,
                "question id is empty",
            ));
        } else if !seen.insert(id) {
            issues.push(CatalogueIssue::new(
                id,
                CatalogueIssueCode::DuplicateId,
                "question id appears more than once",
            ));
        }

        if q.text.trim().is_empty() {
            issues.push(CatalogueIssue::new(
                id,
                CatalogueIssueCode::EmptyText,
                "question text is empty",
            ));
        }

        if !q.weight.is_finite() || q.weight <= 0.0 {
            issues.push(CatalogueIssue::new(
                id,
                CatalogueIssueCode::InvalidWeight,
                format!("weight must be positive, got {}", q.weight),
            ));
        }

        issues.extend(validate_options(q));
        issues.extend(validate_scores(q));
    }

    issues
}

fn validate_options(q: &QuestionDefinition) -> Vec<CatalogueIssue> {
    let mut issues = Vec::new();

    if q.options.len() != OPTIONS_PER_QUESTION {
        issues.push(CatalogueIssue::new(
            &q.id,
            CatalogueIssueCode::OptionCount,
            format!(
                "expected {} options, found {}",
                OPTIONS_PER_QUESTION,
                q.options.len()
            ),
        ));
    }

    for (order, option) in q.numbered_options() {
        if option.label.trim().is_empty() {
            issues.push(CatalogueIssue::new(
                &q.id,
                CatalogueIssueCode::EmptyOptionLabel,
                format!("option {} has an empty label", order),
            ));
        }
    }

    issues
}

fn validate_scores(q: &QuestionDefinition) -> Vec<CatalogueIssue> {
    let mut issues = Vec::new();

    if q.scores.len() != SCORES_PER_QUESTION {
        issues.push(CatalogueIssue::new(
            &q.id,
            CatalogueIssueCode::ScoreCount,
            format!(
                "expected {} score interpretations, found {}",
                SCORES_PER_QUESTION,
                q.scores.len()
            ),
        ));
    }

    let levels: Vec<&str> = q.scores.iter().map(|s| s.level.as_str()).collect();
    if !ScoreLevel::is_complete_set(&levels) {
        issues.push(CatalogueIssue::new(
            &q.id,
            CatalogueIssueCode::ScoreLevels,
            format!("score levels must be low, medium and high, found [{}]", levels.join(", ")),
        ));
    }

    for score in &q.scores {
        if score.reason.trim().is_empty() {
            issues.push(CatalogueIssue::new(
                &q.id,
                CatalogueIssueCode::EmptyReason,
                format!("{} score has an empty reason", score.level),
            ));
        }
        if score.action.trim().is_empty() {
            issues.push(CatalogueIssue::new(
                &q.id,
                CatalogueIssueCode::EmptyAction,
                format!("{} score has an empty action", score.level),
            ));
        }
    }

    issues
}
