//! Display formatting for tale cards and the detail page.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, NaiveDate};

/// Card preview length, in characters.
pub const PREVIEW_CHARS: usize = 150;

/// Render an API timestamp as `Mar 5, 2024`. Accepts RFC 3339 timestamps and
/// bare `YYYY-MM-DD` dates; anything else yields `None`.
pub fn format_date(raw: &str) -> Option<String> {
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()?;
    Some(date.format("%b %-d, %Y").to_string())
}

/// First `max_chars` characters of `content`, with `...` when cut.
pub fn truncate_content(content: &str, max_chars: usize) -> String {
    match content.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &content[..cut]),
        None => content.to_owned(),
    }
}

/// Uppercase the first character: `"space"` becomes `"Space"`.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn like_label(likes: u64) -> String {
    if likes == 1 { "1 like".to_owned() } else { format!("{likes} likes") }
}

/// Split tale content into paragraphs on blank lines. CRLF line endings are
/// treated as LF.
pub fn paragraphs(content: &str) -> Vec<String> {
    content
        .replace("\r\n", "\n")
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_owned)
        .collect()
}
