//! Shared console layout helpers

use colored::Colorize;

const WIDTH: usize = 60;

/// Full-width `=` rule
pub fn rule() -> String {
    "=".repeat(WIDTH).cyan().to_string()
}

/// Section title framed by rules
pub fn section(title: &str) -> String {
    format!("{}\n{}\n{}\n", rule(), title.bold(), rule())
}

/// Short `=== title ===` heading
pub fn heading(title: &str) -> String {
    format!("{}", format!("=== {} ===", title).cyan().bold())
}

/// `[a, b, c]` list of question numbers
pub fn id_list<S: AsRef<str>>(ids: &[S]) -> String {
    let joined = ids.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(", ");
    format!("[{}]", joined)
}

/// Pad `s` to exactly `width` characters, cutting it if longer
pub fn column(s: &str, width: usize) -> String {
    format!("{:width$}", questionnaire_domain::core::string::left(s, width))
}
