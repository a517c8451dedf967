//! String utilities for the domain layer.

/// First `max_chars` characters of `s`, with `...` appended when anything was cut.
///
/// Counts characters rather than bytes so multi-byte personas never split.
pub fn excerpt(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &s[..cut]),
        None => s.to_string(),
    }
}

/// First line of `s`, trimmed
pub fn first_line(s: &str) -> &str {
    s.lines().next().unwrap_or("").trim()
}
