// crates/common/src/log.rs

//! Colored stderr logging for capabilities.
//!
//! Stdout carries the JSON response, so everything here goes to stderr.

use std::fmt::Display;

// ANSI color codes
const RESET: &str = "\x1b[0m";
const RED: &str = "\x1b[31m";

/// Log an error.
pub fn error(message: impl Display) {
    eprintln!("{RED}[error]{RESET} {}", truncate(&message.to_string(), 200));
}

/// Truncate and clean string for display.
fn truncate(s: &str, max: usize) -> String {
    let clean: String = s
        .chars()
        .filter(|c| !c.is_control() || *c == ' ')
        .collect();
    let trimmed = clean.trim();
    match trimmed.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short() {
        assert_eq!(truncate("  hello\n", 10), "hello");
    }

    #[test]
    fn test_truncate_long_multibyte() {
        assert_eq!(truncate("héllo wörld", 4), "héll...");
    }
}
