//! Question store adapters

pub mod queries;
pub mod sql;

pub use sql::SqlQuestionStore;
