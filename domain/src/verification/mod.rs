//! Read-only consistency audit of persisted templates.
//!
//! - [`rows`]: aggregates fetched from the store
//! - [`checks`]: pure functions turning rows into findings
//! - [`issue::VerificationIssue`]: one finding
//! - [`report::VerificationReport`]: everything a run produced

pub mod checks;
pub mod issue;
pub mod report;
pub mod rows;
