//! Verify Questions use case
//!
//! Runs the read-only consistency checks over persisted templates and
//! collects every finding into a report.

use crate::ports::question_store::{QuestionStore, StoreError};
use chrono::Utc;
use questionnaire_domain::VerificationReport;
use questionnaire_domain::verification::checks::{
    check_active_count, check_fields, check_option_counts, check_score_examples,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that abort a verification run
#[derive(Error, Debug)]
pub enum VerifyQuestionsError {
    #[error("Verification query failed: {0}")]
    Store(#[from] StoreError),
}

/// Input for the VerifyQuestions use case
#[derive(Debug, Clone)]
pub struct VerifyQuestionsInput {
    /// Number of active templates the store should hold
    pub expected_active: u64,
}

impl VerifyQuestionsInput {
    pub fn new(expected_active: u64) -> Self {
        Self { expected_active }
    }
}

/// Use case for auditing persisted templates
pub struct VerifyQuestionsUseCase<S: QuestionStore + 'static> {
    store: Arc<S>,
}

impl<S: QuestionStore + 'static> VerifyQuestionsUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn execute(
        &self,
        input: VerifyQuestionsInput,
    ) -> Result<VerificationReport, VerifyQuestionsError> {
        let mut issues = Vec::new();

        debug!("Check 1: active count");
        let active_count = self.store.count_templates(true).await?;
        let inactive_count = self.store.count_templates(false).await?;
        issues.extend(check_active_count(input.expected_active, active_count));

        debug!("Check 2: field completeness");
        let fields = self.store.field_completeness().await?;
        issues.extend(check_fields(&fields));

        debug!("Check 3: answer options");
        let option_counts = self.store.option_counts().await?;
        issues.extend(check_option_counts(&option_counts));

        debug!("Check 4: score examples");
        let score_examples = self.store.score_example_summaries().await?;
        issues.extend(check_score_examples(&score_examples));

        debug!("Check 5: category distribution");
        let distribution = self.store.category_distribution().await?;

        debug!("Check 6: deactivated templates");
        let deactivated = self.store.list_templates(false).await?;

        info!(
            "Verification finished: {} active, {} inactive, {} issue(s)",
            active_count,
            inactive_count,
            issues.len()
        );

        Ok(VerificationReport {
            generated_at: Utc::now(),
            expected_active: input.expected_active,
            active_count,
            inactive_count,
            fields,
            option_counts,
            score_examples,
            distribution,
            deactivated,
            issues,
        })
    }
}
