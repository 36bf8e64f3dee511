//! SQL queries for chat_cache.db.
//!
//! CHANGELOG:
//! - 10/19/2026 - Messages, auth and sqlite_master queries

/// Number of messages shown in the recent list.
pub const RECENT_MESSAGES_LIMIT: u32 = 10;

/// Number of auth records shown.
pub const RECENT_AUTH_LIMIT: u32 = 5;

/// Query to list user tables.
pub const LIST_TABLES: &str = "SELECT name FROM sqlite_master WHERE type='table'";

/// Query to get the newest messages.
pub const RECENT_MESSAGES: &str = r#"
SELECT id, is_user, content, timestamp, model_id, tokens, cost
FROM messages
ORDER BY timestamp DESC
LIMIT ?1
"#;

/// Message counts (total, user, ai).
pub const MESSAGE_COUNT_TOTAL: &str = "SELECT COUNT(*) FROM messages";
pub const MESSAGE_COUNT_USER: &str = "SELECT COUNT(*) FROM messages WHERE is_user = 1";
pub const MESSAGE_COUNT_AI: &str = "SELECT COUNT(*) FROM messages WHERE is_user = 0";

/// Query to get the newest auth records.
pub const RECENT_AUTH: &str = r#"
SELECT id, api_key, provider, balance, created_at, updated_at
FROM auth
ORDER BY created_at DESC
LIMIT ?1
"#;
