//! Console formatting helpers.
//!
//! CHANGELOG:
//! - 10/19/2026 - Previews, dynamic value rendering and timestamps

use chrono::{DateTime, Utc};
use rusqlite::types::Value;

/// Max characters of message content shown.
pub const CONTENT_PREVIEW_CHARS: usize = 100;

/// Characters of an API key shown before the ellipsis.
pub const KEY_PREVIEW_CHARS: usize = 20;

pub const MESSAGE_DIVIDER: &str = "--------------------------------------------------";
pub const AUTH_DIVIDER: &str = "------------------------------";

/// Truncate to `max_chars` characters with a `...` suffix when longer.
///
/// Counts chars, not bytes: message content is mostly Cyrillic.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}

/// Message content line body.
pub fn content_preview(content: Option<&str>) -> String {
    match content {
        Some(c) if !c.is_empty() => truncate_chars(c, CONTENT_PREVIEW_CHARS),
        _ => "(пустое)".to_string(),
    }
}

/// Redacted API key: prefix plus `...` even when the key is shorter.
pub fn key_preview(api_key: Option<&str>) -> String {
    match api_key {
        Some(k) if !k.is_empty() => {
            let prefix: String = k.chars().take(KEY_PREVIEW_CHARS).collect();
            format!("{}...", prefix)
        }
        _ => "(отсутствует)".to_string(),
    }
}

/// Render a dynamically typed column value.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Integer(i) => i.to_string(),
        // Debug keeps the decimal point on whole numbers (1.0, not 1)
        Value::Real(f) => format!("{:?}", f),
        Value::Text(s) => s.clone(),
        Value::Blob(b) => format!("<blob {} bytes>", b.len()),
    }
}

/// Render a timestamp column.
///
/// sqflite apps store either ISO strings or `millisecondsSinceEpoch`; text is
/// shown as stored, integers are converted to RFC 3339 UTC.
pub fn display_timestamp(value: &Value) -> String {
    match value {
        Value::Integer(ms) => DateTime::<Utc>::from_timestamp_millis(*ms)
            .map(|dt| dt.to_rfc3339())
            .unwrap_or_else(|| ms.to_string()),
        other => display_value(other),
    }
}
