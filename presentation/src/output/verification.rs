//! Verification transcript

use super::console::{column, rule, section};
use colored::Colorize;
use questionnaire_domain::core::string::left;
use questionnaire_domain::{OPTIONS_PER_QUESTION, VerificationIssue, VerificationReport};

/// Formats verification reports for console display
pub struct VerificationFormatter;

impl VerificationFormatter {
    /// Format the full six-check transcript followed by the findings
    pub fn format(report: &VerificationReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::active_count(report));
        output.push('\n');
        output.push_str(&Self::fields(report));
        output.push('\n');
        output.push_str(&Self::option_counts(report));
        output.push('\n');
        output.push_str(&Self::score_examples(report));
        output.push('\n');
        output.push_str(&Self::distribution(report));
        output.push('\n');
        output.push_str(&Self::deactivated(report));
        output.push('\n');
        output.push_str(&Self::result(report));

        output
    }

    /// Format as JSON
    pub fn format_json(report: &VerificationReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    fn ok() -> String {
        "[OK]".green().to_string()
    }

    fn fail() -> String {
        "[FAIL]".red().bold().to_string()
    }

    fn flag(text: &str) -> String {
        format!(" {}", format!("[{}]", text).yellow())
    }

    fn has_issue(
        report: &VerificationReport,
        question_number: &str,
        matches: impl Fn(&VerificationIssue) -> bool,
    ) -> bool {
        report.issues_for(question_number).any(matches)
    }

    fn active_count(report: &VerificationReport) -> String {
        let mut output = section("CHECK 1: Question count");
        output.push_str(&format!("  Active: {}\n", report.active_count));
        output.push_str(&format!("  Inactive: {}\n", report.inactive_count));

        let expected = report.expected_active;
        if report.active_count == expected {
            output.push_str(&format!("  {} {} active questions\n", Self::ok(), expected));
        } else {
            output.push_str(&format!("  {} Expected {} active\n", Self::fail(), expected));
        }
        output
    }

    fn fields(report: &VerificationReport) -> String {
        let mut output = section("CHECK 2: Question fields (text, comment, motivation)");
        for r in &report.fields {
            let crit = if r.is_critical { "CRIT" } else { "    " };
            let yn = |b: bool| if b { "Y" } else { "N" };

            let mut flags = String::new();
            if !r.has_comment {
                flags.push_str(&Self::flag("NO COMMENT"));
            }
            if !r.has_motivation {
                flags.push_str(&Self::flag("NO MOTIVATION"));
            }

            output.push_str(&format!(
                "  Q{:5} | {} | w={} | c={} m={} | {} | {}{}\n",
                r.question_number,
                crit,
                r.weight,
                yn(r.has_comment),
                yn(r.has_motivation),
                column(&r.sub_category, 30),
                left(&r.text_excerpt, 60),
                flags
            ));
        }
        output
    }

    fn option_counts(report: &VerificationReport) -> String {
        let mut output = section("CHECK 3: Answer options per question (expect 3 each)");
        for r in &report.option_counts {
            let flag = if r.count as usize != OPTIONS_PER_QUESTION {
                Self::flag(&format!("EXPECTED {}", OPTIONS_PER_QUESTION))
            } else {
                String::new()
            };
            output.push_str(&format!(
                "  Q{:5} | {} options{}\n",
                r.question_number, r.count, flag
            ));
        }
        output
    }

    fn score_examples(report: &VerificationReport) -> String {
        let mut output =
            section("CHECK 4: Score examples per question (expect 3: low/medium/high)");
        for r in &report.score_examples {
            let q = r.question_number.as_str();
            let levels = r.levels.join(",");

            let mut flags = String::new();
            if Self::has_issue(report, q, |i| {
                matches!(i, VerificationIssue::ScoreExampleCount { .. })
            }) {
                flags.push_str(&Self::flag(&format!("EXPECTED 3, GOT {}", r.count)));
            }
            if Self::has_issue(report, q, |i| {
                matches!(i, VerificationIssue::ScoreLevels { .. })
            }) {
                flags.push_str(&Self::flag(&format!("LEVELS: {}", levels)));
            }
            if Self::has_issue(report, q, |i| {
                matches!(i, VerificationIssue::MissingActions { .. })
            }) {
                flags.push_str(&Self::flag(&format!(
                    "ONLY {}/3 HAVE report_action",
                    r.with_action
                )));
            }

            output.push_str(&format!(
                "  Q{:5} | {} examples | {}/3 actions | levels={}{}\n",
                q, r.count, r.with_action, levels, flags
            ));
        }
        output
    }

    fn distribution(report: &VerificationReport) -> String {
        let mut output = section("CHECK 5: Sub-categories and question distribution");
        for r in &report.distribution {
            output.push_str(&format!(
                "  {} | {} | {} Q(s)\n",
                column(&r.category, 40),
                column(&r.sub_category, 35),
                r.count
            ));
        }
        output
    }

    fn deactivated(report: &VerificationReport) -> String {
        let mut output = section("CHECK 6: Deactivated (stale) questions");
        if report.deactivated.is_empty() {
            output.push_str("  None (all cleaned up)\n");
        }
        for t in &report.deactivated {
            output.push_str(&format!(
                "  Q{:5} | {} | {}\n",
                t.question_number, t.sub_category, t.text_excerpt
            ));
        }
        output
    }

    fn result(report: &VerificationReport) -> String {
        let mut output = format!("{}\n", rule());
        if report.is_clean() {
            output.push_str(&format!("{}\n", "RESULT: ALL CHECKS PASSED".green().bold()));
        } else {
            output.push_str(&format!(
                "{}\n",
                format!("RESULT: {} ISSUE(S) FOUND", report.issues.len())
                    .red()
                    .bold()
            ));
            for (i, issue) in report.issues.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, issue));
            }
        }
        output.push_str(&format!("{}\n", rule()));
        output
    }
}
