//! Progress notification port
//!
//! Defines the interface for reporting progress during a seeding run.

use questionnaire_domain::{DeactivationOutcome, EntryOutcome};

/// Callback for progress updates during seeding
///
/// Implementations live in the presentation layer.
pub trait SeedProgressNotifier: Send + Sync {
    /// Called once per stale question number after its deactivation was attempted
    fn on_deactivation(&self, _outcome: &DeactivationOutcome) {}

    /// Called before the first catalogue entry is upserted
    fn on_upsert_start(&self, total: usize);

    /// Called after each catalogue entry
    fn on_entry_complete(&self, outcome: &EntryOutcome);

    /// Called after the last catalogue entry
    fn on_upsert_complete(&self, succeeded: usize, failed: usize);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl SeedProgressNotifier for NoProgress {
    fn on_upsert_start(&self, _total: usize) {}
    fn on_entry_complete(&self, _outcome: &EntryOutcome) {}
    fn on_upsert_complete(&self, _succeeded: usize, _failed: usize) {}
}
