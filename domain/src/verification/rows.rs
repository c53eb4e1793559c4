//! Read-only audit rows returned by the store.

use serde::{Deserialize, Serialize};

/// Field presence for one active template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldCompleteness {
    pub question_number: String,
    pub category: String,
    pub sub_category: String,
    pub text_excerpt: String,
    pub is_critical: bool,
    pub weight: f64,
    /// `comment` is non-null and non-empty
    pub has_comment: bool,
    /// `motivation_learning_point` is non-null and non-empty
    pub has_motivation: bool,
}

/// Answer options owned by one active template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionCount {
    pub question_number: String,
    pub count: u64,
}

/// Score examples owned by one active template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreExampleSummary {
    pub question_number: String,
    pub count: u64,
    /// Levels present, sorted (may contain duplicates or unknown values)
    pub levels: Vec<String>,
    /// Examples carrying a non-empty `report_action`
    pub with_action: u64,
}

/// Active templates per (category, sub_category).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub sub_category: String,
    pub count: u64,
}
