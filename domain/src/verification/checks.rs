//! Pure consistency checks.
//!
//! Each check looks at one kind of row and returns its findings; none of
//! them depends on another having passed.

use super::issue::VerificationIssue;
use super::rows::{FieldCompleteness, OptionCount, ScoreExampleSummary};
use crate::catalogue::validation::{OPTIONS_PER_QUESTION, SCORES_PER_QUESTION};
use crate::question::score_level::ScoreLevel;

/// Active template count must match the catalogue size.
pub fn check_active_count(expected: u64, actual: u64) -> Option<VerificationIssue> {
    (expected != actual).then_some(VerificationIssue::ActiveCount { expected, actual })
}

/// Every active template needs a comment and a motivation.
pub fn check_fields(rows: &[FieldCompleteness]) -> Vec<VerificationIssue> {
    let mut issues = Vec::new();
    for row in rows {
        if !row.has_comment {
            issues.push(VerificationIssue::MissingComment {
                question_number: row.question_number.clone(),
            });
        }
        if !row.has_motivation {
            issues.push(VerificationIssue::MissingMotivation {
                question_number: row.question_number.clone(),
            });
        }
    }
    issues
}

/// Every active template owns exactly three answer options.
pub fn check_option_counts(rows: &[OptionCount]) -> Vec<VerificationIssue> {
    rows.iter()
        .filter(|r| r.count != OPTIONS_PER_QUESTION as u64)
        .map(|r| VerificationIssue::OptionCount {
            question_number: r.question_number.clone(),
            count: r.count,
        })
        .collect()
}

/// Every active template owns one score example per level, each with an action.
///
/// The level set is only compared when at least one example exists; a
/// template without any is already reported by the count.
pub fn check_score_examples(rows: &[ScoreExampleSummary]) -> Vec<VerificationIssue> {
    let expected = SCORES_PER_QUESTION as u64;
    let mut issues = Vec::new();

    for row in rows {
        if row.count != expected {
            issues.push(VerificationIssue::ScoreExampleCount {
                question_number: row.question_number.clone(),
                count: row.count,
            });
        }
        if !row.levels.is_empty() && !ScoreLevel::is_complete_set(&row.levels) {
            issues.push(VerificationIssue::ScoreLevels {
                question_number: row.question_number.clone(),
                levels: row.levels.clone(),
            });
        }
        if row.with_action != expected {
            issues.push(VerificationIssue::MissingActions {
                question_number: row.question_number.clone(),
                with_action: row.with_action,
            });
        }
    }

    issues
}
