//! Question store port
//!
//! Every read and write the seeder and verifier perform against persisted
//! templates, expressed in domain terms.

use super::sql_gateway::GatewayError;
use async_trait::async_trait;
use questionnaire_domain::{
    AnswerOption, CategoryCount, FieldCompleteness, OptionCount, QuestionDefinition,
    ScoreExampleSummary, ScoreInterpretation, TemplateId, TemplateListing,
};
use thiserror::Error;

/// Errors that can occur during store operations
#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("Upsert of Q{0} returned no template id")]
    MissingTemplateId(String),
}

/// Persistence of question templates and their owned rows
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// Question numbers of every persisted template, active or not
    async fn existing_question_numbers(&self) -> Result<Vec<String>, StoreError>;

    /// Mark every template with this question number inactive; returns rows affected
    async fn deactivate(&self, question_number: &str) -> Result<u64, StoreError>;

    /// Insert or overwrite the template keyed on (category, question_number),
    /// forcing it active
    async fn upsert_template(&self, question: &QuestionDefinition)
    -> Result<TemplateId, StoreError>;

    /// Delete the template's answer options and insert `options` with
    /// 1-based `option_order`
    async fn replace_answer_options(
        &self,
        template: &TemplateId,
        options: &[AnswerOption],
    ) -> Result<(), StoreError>;

    /// Insert or overwrite the score example keyed on (template, level)
    async fn upsert_score_example(
        &self,
        template: &TemplateId,
        score: &ScoreInterpretation,
    ) -> Result<(), StoreError>;

    async fn count_templates(&self, active: bool) -> Result<u64, StoreError>;

    /// Templates with the given state, ordered by question number
    async fn list_templates(&self, active: bool) -> Result<Vec<TemplateListing>, StoreError>;

    /// Field presence of active templates, grouped by category then question number
    async fn field_completeness(&self) -> Result<Vec<FieldCompleteness>, StoreError>;

    /// Answer option count per active template
    async fn option_counts(&self) -> Result<Vec<OptionCount>, StoreError>;

    /// Score example aggregates per active template
    async fn score_example_summaries(&self) -> Result<Vec<ScoreExampleSummary>, StoreError>;

    /// Active templates per (category, sub_category)
    async fn category_distribution(&self) -> Result<Vec<CategoryCount>, StoreError>;
}
