//! The catalogue: the immutable list of questions treated as source of truth.

pub mod validation;

use crate::question::definition::QuestionDefinition;
use std::collections::BTreeSet;
use thiserror::Error;
use validation::{CatalogueIssue, validate_questions};

/// Errors raised while building a catalogue
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogueError {
    #[error("Catalogue contains no questions")]
    Empty,

    #[error("Catalogue is invalid ({} issue(s)): {}", .0.len(), summarize(.0))]
    Invalid(Vec<CatalogueIssue>),
}

fn summarize(issues: &[CatalogueIssue]) -> String {
    issues
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validated, ordered list of question definitions.
///
/// Order is the literal catalogue order and is the order in which entries
/// are seeded.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalogue {
    questions: Vec<QuestionDefinition>,
}

impl Catalogue {
    pub fn new(questions: Vec<QuestionDefinition>) -> Result<Self, CatalogueError> {
        if questions.is_empty() {
            return Err(CatalogueError::Empty);
        }

        let issues = validate_questions(&questions);
        if !issues.is_empty() {
            return Err(CatalogueError::Invalid(issues));
        }

        Ok(Self { questions })
    }

    pub fn questions(&self) -> &[QuestionDefinition] {
        &self.questions
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuestionDefinition> {
        self.questions.iter()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// The set of question numbers that should be active.
    pub fn question_numbers(&self) -> BTreeSet<&str> {
        self.questions.iter().map(|q| q.id.as_str()).collect()
    }

    /// Persisted question numbers no longer present in the catalogue, sorted
    /// and without duplicates.
    pub fn stale_numbers<S: AsRef<str>>(&self, existing: &[S]) -> Vec<String> {
        let valid = self.question_numbers();
        existing
            .iter()
            .map(|n| n.as_ref())
            .filter(|n| !valid.contains(n))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalogue {
    type Item = &'a QuestionDefinition;
    type IntoIter = std::slice::Iter<'a, QuestionDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}
