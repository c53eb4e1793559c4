//! String utilities for the domain layer.

/// First `max_chars` characters of `s`, counted like SQL `LEFT()`.
pub fn left(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

/// Truncate to `max_chars` characters, appending `...` when anything was cut.
pub fn truncate(s: &str, max_chars: usize) -> String {
    let head = left(s, max_chars);
    if head.len() == s.len() {
        s.to_string()
    } else {
        format!("{}...", head)
    }
}
