//! Progress reporting for seeding runs

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use questionnaire_application::ports::progress::SeedProgressNotifier;
use questionnaire_domain::{DeactivationOutcome, EntryOutcome};
use std::sync::Mutex;

/// Reports seeding progress with a progress bar on stderr
pub struct SeedProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl SeedProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }
}

impl Default for SeedProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SeedProgressNotifier for SeedProgressReporter {
    fn on_deactivation(&self, outcome: &DeactivationOutcome) {
        if let Err(e) = &outcome.result {
            eprintln!(
                "{} deactivating {}: {}",
                "x".red(),
                outcome.question_number,
                e
            );
        }
    }

    fn on_upsert_start(&self, total: usize) {
        let pb = ProgressBar::new(total as u64);
        pb.set_style(Self::style());
        pb.set_prefix("Upserting");
        pb.set_message("Starting...");

        if let Ok(mut bar) = self.bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_entry_complete(&self, outcome: &EntryOutcome) {
        if let Ok(bar) = self.bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            let status = if outcome.is_success() {
                format!("{} Q{}", "v".green(), outcome.question_number)
            } else {
                format!("{} Q{}", "x".red(), outcome.question_number)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_upsert_complete(&self, succeeded: usize, failed: usize) {
        if let Ok(mut bar) = self.bar.lock()
            && let Some(pb) = bar.take()
        {
            pb.finish_and_clear();
            let summary = format!("{} OK, {} failed", succeeded, failed);
            if failed == 0 {
                eprintln!("{} {}", "v".green(), summary);
            } else {
                eprintln!("{} {}", "x".red(), summary);
            }
        }
    }
}
