//! Presentation layer for questionnaire-admin
//!
//! This crate contains CLI definitions, output formatters
//! and progress reporters.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{OutputFormat, SeedCli, VerifyCli};
pub use output::{SeedReportFormatter, VerificationFormatter};
pub use progress::reporter::SeedProgressReporter;
