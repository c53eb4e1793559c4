//! Question definitions: the in-code source of truth for templates.

use super::score_level::ScoreLevel;
use serde::{Deserialize, Serialize};

/// `question_type` stored for every seeded template.
pub const QUESTION_TYPE: &str = "multiple_choice";

/// One selectable answer of a question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub label: String,
    /// Score awarded when the option is chosen
    pub value: i32,
}

impl AnswerOption {
    pub fn new(label: impl Into<String>, value: i32) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Options paired with their 1-based `option_order`.
pub fn numbered_options(options: &[AnswerOption]) -> impl Iterator<Item = (i32, &AnswerOption)> {
    options
        .iter()
        .enumerate()
        .map(|(i, option)| (i as i32 + 1, option))
}

/// How an answer at a given level is explained in the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreInterpretation {
    pub level: ScoreLevel,
    pub reason: String,
    /// Recommended action printed in the report
    pub action: String,
}

impl ScoreInterpretation {
    pub fn new(level: ScoreLevel, reason: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            level,
            reason: reason.into(),
            action: action.into(),
        }
    }
}

/// A questionnaire item as defined in the catalogue.
///
/// `id` is the dotted question number (e.g. `"1.1"`); `options` keep their
/// catalogue order, which becomes `option_order` (1-based) when persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionDefinition {
    pub id: String,
    pub category: String,
    pub sub_category: String,
    pub text: String,
    pub critical: bool,
    pub weight: f64,
    pub comment: String,
    pub motivation: String,
    pub options: Vec<AnswerOption>,
    pub scores: Vec<ScoreInterpretation>,
}

impl QuestionDefinition {
    /// Options paired with their 1-based `option_order`.
    pub fn numbered_options(&self) -> impl Iterator<Item = (i32, &AnswerOption)> {
        numbered_options(&self.options)
    }
}
