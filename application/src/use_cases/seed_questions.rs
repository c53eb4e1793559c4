//! Seed Questions use case
//!
//! Reconciles persisted templates with the catalogue: stale templates are
//! deactivated, every catalogue entry is upserted together with its answer
//! options and score examples.

use crate::ports::progress::{NoProgress, SeedProgressNotifier};
use crate::ports::question_store::{QuestionStore, StoreError};
use questionnaire_domain::{
    Catalogue, DeactivationOutcome, EntryOutcome, QuestionDefinition, SeedReport, TemplateId,
    TemplateListing,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that abort a seeding run
#[derive(Error, Debug)]
pub enum SeedQuestionsError {
    #[error("Failed to read existing templates: {0}")]
    ReadExisting(#[source] StoreError),

    /// Upserts were applied; `report` holds every outcome but no final state.
    #[error("Failed to read final template state: {source}")]
    FinalState {
        report: Box<SeedReport>,
        #[source]
        source: StoreError,
    },
}

/// Use case for seeding the catalogue into the store
pub struct SeedQuestionsUseCase<S: QuestionStore + 'static> {
    store: Arc<S>,
}

impl<S: QuestionStore + 'static> SeedQuestionsUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, catalogue: &Catalogue) -> Result<SeedReport, SeedQuestionsError> {
        self.execute_with_progress(catalogue, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        catalogue: &Catalogue,
        progress: &dyn SeedProgressNotifier,
    ) -> Result<SeedReport, SeedQuestionsError> {
        info!("Seeding {} questions", catalogue.len());

        let valid_ids: Vec<String> = catalogue
            .question_numbers()
            .into_iter()
            .map(str::to_string)
            .collect();

        // Step 1: deactivate templates that left the catalogue
        let mut existing_ids = self
            .store
            .existing_question_numbers()
            .await
            .map_err(SeedQuestionsError::ReadExisting)?;
        existing_ids.sort();
        existing_ids.dedup();

        let stale = catalogue.stale_numbers(&existing_ids);
        let deactivations = self.deactivate_stale(&stale, progress).await;

        // Step 2: upsert every entry in catalogue order
        let entries = self.upsert_all(catalogue, progress).await;

        let mut report = SeedReport {
            valid_ids,
            existing_ids,
            deactivations,
            entries,
            ..Default::default()
        };

        // Step 3: final state for the operator
        match self.read_final_state().await {
            Ok((active_count, active_templates)) => {
                info!("Seeding finished: {} active templates", active_count);
                report.active_count = active_count;
                report.active_templates = active_templates;
                Ok(report)
            }
            Err(source) => Err(SeedQuestionsError::FinalState {
                report: Box::new(report),
                source,
            }),
        }
    }

    async fn read_final_state(&self) -> Result<(u64, Vec<TemplateListing>), StoreError> {
        let active_count = self.store.count_templates(true).await?;
        let active_templates = self.store.list_templates(true).await?;
        Ok((active_count, active_templates))
    }

    /// Deactivate each stale question number; a failure is recorded and the
    /// remaining ids are still attempted.
    async fn deactivate_stale(
        &self,
        stale: &[String],
        progress: &dyn SeedProgressNotifier,
    ) -> Vec<DeactivationOutcome> {
        if stale.is_empty() {
            debug!("No stale templates");
            return Vec::new();
        }

        info!("Deactivating {} stale templates", stale.len());
        let mut outcomes = Vec::with_capacity(stale.len());

        for question_number in stale {
            let result = match self.store.deactivate(question_number).await {
                Ok(rows) => {
                    debug!("Deactivated Q{}: {} row(s)", question_number, rows);
                    Ok(rows)
                }
                Err(e) => {
                    warn!("Failed to deactivate Q{}: {}", question_number, e);
                    Err(e.to_string())
                }
            };

            let outcome = DeactivationOutcome {
                question_number: question_number.clone(),
                result,
            };
            progress.on_deactivation(&outcome);
            outcomes.push(outcome);
        }

        outcomes
    }

    async fn upsert_all(
        &self,
        catalogue: &Catalogue,
        progress: &dyn SeedProgressNotifier,
    ) -> Vec<EntryOutcome> {
        progress.on_upsert_start(catalogue.len());
        let mut outcomes = Vec::with_capacity(catalogue.len());

        for question in catalogue {
            let outcome = match self.seed_entry(question).await {
                Ok(id) => EntryOutcome::success(&question.id, &question.text, id),
                Err(e) => {
                    warn!("Failed to seed Q{}: {}", question.id, e);
                    EntryOutcome::failure(&question.id, &question.text, e.to_string())
                }
            };
            progress.on_entry_complete(&outcome);
            outcomes.push(outcome);
        }

        let succeeded = outcomes.iter().filter(|o| o.is_success()).count();
        progress.on_upsert_complete(succeeded, outcomes.len() - succeeded);
        outcomes
    }

    /// Template, then options, then score examples. Steps already applied
    /// stay applied when a later one fails.
    async fn seed_entry(&self, question: &QuestionDefinition) -> Result<TemplateId, StoreError> {
        let id = self.store.upsert_template(question).await?;
        debug!("Upserted Q{} as template {}", question.id, id);

        self.store
            .replace_answer_options(&id, &question.options)
            .await?;

        for score in &question.scores {
            self.store.upsert_score_example(&id, score).await?;
        }

        Ok(id)
    }
}
