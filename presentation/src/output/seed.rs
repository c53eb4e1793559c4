//! Seeding transcript

use super::console::{column, heading, id_list};
use colored::Colorize;
use questionnaire_domain::core::string::truncate;
use questionnaire_domain::{Catalogue, SeedReport};

/// Formats seeding runs for console display
pub struct SeedReportFormatter;

impl SeedReportFormatter {
    /// Format a completed seeding run
    pub fn format(report: &SeedReport) -> String {
        let mut output = Self::format_outcomes(report);

        output.push_str(&format!("Active questions in DB: {}\n", report.active_count));

        output.push('\n');
        output.push_str(&heading("Final question list"));
        output.push('\n');
        for t in &report.active_templates {
            output.push_str(&format!(
                "  Q{} | {} | {}\n",
                t.question_number, t.sub_category, t.text_excerpt
            ));
        }

        output
    }

    /// Format what a run did up to the per-entry totals, without the final
    /// state (used when reading it back failed)
    pub fn format_outcomes(report: &SeedReport) -> String {
        let mut output = String::new();

        output.push_str(&heading("Starting DB seed"));
        output.push('\n');
        output.push_str(&format!("\nValid question IDs: {}\n", id_list(&report.valid_ids)));
        output.push_str(&format!(
            "Existing DB questions: {}\n",
            id_list(&report.existing_ids)
        ));

        if !report.deactivations.is_empty() {
            let stale: Vec<&str> = report
                .deactivations
                .iter()
                .map(|d| d.question_number.as_str())
                .collect();
            output.push_str(&format!("\nDeactivating stale questions: {}\n", id_list(&stale)));
            for d in &report.deactivations {
                match &d.result {
                    Ok(rows) => output.push_str(&format!(
                        "  Deactivated {}: {} row(s)\n",
                        d.question_number, rows
                    )),
                    Err(e) => output.push_str(&format!(
                        "  {} {}: {}\n",
                        "FAIL".red().bold(),
                        d.question_number,
                        e
                    )),
                }
            }
        }

        output.push('\n');
        output.push_str(&heading(&format!("Upserting {} questions", report.entries.len())));
        output.push('\n');
        for entry in &report.entries {
            match &entry.result {
                Ok(_) => output.push_str(&format!(
                    "  {} Q{}: {}\n",
                    "OK".green(),
                    entry.question_number,
                    truncate(&entry.text, 60)
                )),
                Err(e) => output.push_str(&format!(
                    "  {} Q{}: {}\n",
                    "FAIL".red().bold(),
                    entry.question_number,
                    e
                )),
            }
        }

        output.push('\n');
        output.push_str(&heading(&format!(
            "Results: {} OK, {} failed",
            report.succeeded(),
            report.failed()
        )));
        output.push('\n');

        output
    }

    /// Format the catalogue as a dry run would seed it
    pub fn format_dry_run(catalogue: &Catalogue) -> String {
        let mut output = String::new();

        output.push_str(&heading(&format!(
            "Dry run: {} questions (database not contacted)",
            catalogue.len()
        )));
        output.push('\n');

        let mut category = "";
        for q in catalogue {
            if q.category != category {
                category = &q.category;
                output.push_str(&format!("\n{}\n", category.cyan().bold()));
            }
            let crit = if q.critical { "CRIT" } else { "    " };
            output.push_str(&format!(
                "  Q{:5} | {} | w={} | {} | {}\n",
                q.id,
                crit,
                q.weight,
                column(&q.sub_category, 30),
                truncate(&q.text, 60)
            ));
            for (order, option) in q.numbered_options() {
                output.push_str(&format!(
                    "          {}. [{:>2}] {}\n",
                    order,
                    option.value,
                    truncate(&option.label, 70)
                ));
            }
        }

        output
    }
}
