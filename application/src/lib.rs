//! Application layer for questionnaire-admin
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use ports::{
    progress::{NoProgress, SeedProgressNotifier},
    question_store::{QuestionStore, StoreError},
    sql_gateway::{GatewayError, QueryResult, Row, SqlGateway, SqlStatement, SqlValue},
};
pub use use_cases::seed_questions::{SeedQuestionsError, SeedQuestionsUseCase};
pub use use_cases::verify_questions::{
    VerifyQuestionsError, VerifyQuestionsInput, VerifyQuestionsUseCase,
};
