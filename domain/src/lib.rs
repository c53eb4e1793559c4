//! Domain layer for questionnaire-admin
//!
//! This crate contains the questionnaire catalogue, the rules persisted
//! templates must satisfy, and the result types of seeding and verification.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Catalogue**: the fixed list of [`QuestionDefinition`]s treated as source of truth
//! - **Template**: the persisted record of one question, keyed on
//!   (category, question_number)
//! - **Stale template**: a persisted template whose question number left the catalogue

pub mod catalogue;
pub mod core;
pub mod question;
pub mod seeding;
pub mod template;
pub mod verification;

// Re-export commonly used types
pub use catalogue::{
    Catalogue, CatalogueError,
    validation::{CatalogueIssue, CatalogueIssueCode, OPTIONS_PER_QUESTION, SCORES_PER_QUESTION},
};
pub use question::{
    definition::{
        AnswerOption, QUESTION_TYPE, QuestionDefinition, ScoreInterpretation, numbered_options,
    },
    score_level::ScoreLevel,
    tier::Tier,
};
pub use seeding::{DeactivationOutcome, EntryOutcome, SeedReport};
pub use template::{LISTING_EXCERPT_CHARS, TemplateId, TemplateListing};
pub use verification::{
    issue::VerificationIssue,
    report::VerificationReport,
    rows::{CategoryCount, FieldCompleteness, OptionCount, ScoreExampleSummary},
};
