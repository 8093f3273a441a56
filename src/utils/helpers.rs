//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

use chrono::{DateTime, SubsecRound, Utc};

/// Current time truncated to whole seconds
///
/// All sets of one submission are stamped with a single value from here,
/// which is what groups them into one session.
pub fn session_timestamp() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}

/// Format a session date for display
pub fn format_session_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d").to_string()
}

/// Format a weight without a trailing ".0" when it is integral
pub fn format_weight(weight: f64) -> String {
    if weight.fract() == 0.0 && weight.abs() < 1e15 {
        format!("{}", weight as i64)
    } else {
        format!("{}", weight)
    }
}

/// Escape MarkdownV2 special characters
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(
            ch,
            '\\' | '_' | '*' | '[' | ']' | '(' | ')' | '~' | '`' | '>' | '#' | '+' | '-' | '='
                | '|' | '{' | '}' | '.' | '!'
        ) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Wrap text in a MarkdownV2 inline code span
pub fn markdown_code(text: &str) -> String {
    format!("`{}`", text.replace('\\', r"\\").replace('`', r"\`"))
}

/// Wrap text in MarkdownV2 bold, escaping its content
pub fn markdown_bold(text: &str) -> String {
    format!("*{}*", escape_markdown(text))
}

/// Truncate text to a maximum number of characters with ellipsis
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(80.0), "80");
        assert_eq!(format_weight(82.5), "82.5");
        assert_eq!(format_weight(0.0), "0");
        assert_eq!(format_weight(1.25), "1.25");
    }

    #[test]
    fn test_session_timestamp_has_whole_seconds() {
        assert_eq!(session_timestamp().timestamp_subsec_nanos(), 0);
    }

    #[test]
    fn test_format_session_date() {
        let ts = Utc.with_ymd_and_hms(2025, 11, 2, 14, 0, 0).unwrap();
        assert_eq!(format_session_date(ts), "2025-11-02");
    }

    #[test]
    fn test_escape_markdown() {
        assert_eq!(escape_markdown("Push-Day (A)."), r"Push\-Day \(A\)\.");
        assert_eq!(escape_markdown("plain"), "plain");
    }

    #[test]
    fn test_markdown_wrappers() {
        assert_eq!(markdown_code("3 82.5 85"), "`3 82.5 85`");
        assert_eq!(markdown_bold("Bench!"), r"*Bench\!*");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("Жим лёжа на наклонной", 8), "Жим л...");
    }
}
