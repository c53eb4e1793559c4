//! Seeding results.
//!
//! Every stale deactivation and every catalogue entry yields an outcome;
//! a failure in one never prevents the others from being attempted.

use crate::template::{TemplateId, TemplateListing};

/// Result of deactivating one stale question number.
#[derive(Debug, Clone, PartialEq)]
pub struct DeactivationOutcome {
    pub question_number: String,
    /// Rows affected, or the error message
    pub result: Result<u64, String>,
}

impl DeactivationOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Result of upserting one catalogue entry (template, options, score examples).
#[derive(Debug, Clone, PartialEq)]
pub struct EntryOutcome {
    pub question_number: String,
    pub text: String,
    /// Persisted template id, or the error message of the first failed step
    pub result: Result<TemplateId, String>,
}

impl EntryOutcome {
    pub fn success(question_number: &str, text: &str, id: TemplateId) -> Self {
        Self {
            question_number: question_number.to_string(),
            text: text.to_string(),
            result: Ok(id),
        }
    }

    pub fn failure(question_number: &str, text: &str, error: impl Into<String>) -> Self {
        Self {
            question_number: question_number.to_string(),
            text: text.to_string(),
            result: Err(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Everything a seeding run did, in order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeedReport {
    /// Catalogue question numbers, sorted
    pub valid_ids: Vec<String>,
    /// Question numbers found in the store before seeding, sorted
    pub existing_ids: Vec<String>,
    pub deactivations: Vec<DeactivationOutcome>,
    /// One per catalogue entry, in catalogue order
    pub entries: Vec<EntryOutcome>,
    pub active_count: u64,
    pub active_templates: Vec<TemplateListing>,
}

impl SeedReport {
    pub fn succeeded(&self) -> usize {
        self.entries.iter().filter(|e| e.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.entries.len() - self.succeeded()
    }

    pub fn failed_deactivations(&self) -> usize {
        self.deactivations.iter().filter(|d| !d.is_success()).count()
    }

    pub fn is_clean(&self) -> bool {
        self.failed() == 0 && self.failed_deactivations() == 0
    }
}
