//! Infrastructure layer for questionnaire-admin
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading
//! and the built-in question catalogue.

pub mod catalogue;
pub mod config;
pub mod gateway;
pub mod store;

// Re-export commonly used types
pub use catalogue::{CatalogueLoadError, CatalogueLoader};
pub use config::{
    ConfigLoader, ConfigSource, ConfigValidationError, FileCatalogueConfig, FileConfig,
    FileGatewayConfig, FileOutputConfig, FileVerifyConfig, GatewayConfig,
};
pub use gateway::HttpSqlGateway;
pub use store::SqlQuestionStore;
