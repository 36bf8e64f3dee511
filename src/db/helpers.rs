//! Database query helpers for the chat cache.
//!
//! Every function takes `&Connection` and maps SQLite failures to
//! `InspectError::Query` tagged with the table being read, so the report can
//! tell a missing `messages` table apart from a missing `auth` table.
//!
//! CHANGELOG:
//! - 10/19/2026 - Row types and queries for messages/auth

use rusqlite::types::Value;
use rusqlite::{Connection, Row};
use tracing::debug;

use super::queries;
use crate::error::InspectError;
use crate::output;

// ============================================================================
// Data Structures
// ============================================================================

/// A row of the `messages` table.
///
/// SQLite columns are dynamically typed and the app has changed what it stores
/// over time, so displayed columns stay as raw `Value`s.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: Value,
    pub is_user: bool,
    pub content: Option<String>,
    pub timestamp: Value,
    pub model_id: Value,
    pub tokens: Value,
    pub cost: Value,
}

/// A row of the `auth` table.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthRecord {
    pub id: Value,
    pub api_key: Option<String>,
    pub provider: Value,
    pub balance: Value,
    pub created_at: Value,
    pub updated_at: Value,
}

/// Aggregate counts over the whole `messages` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MessageCounts {
    pub total: i64,
    pub user: i64,
    pub ai: i64,
}

// ============================================================================
// Schema
// ============================================================================

/// List table names from sqlite_master.
pub fn list_tables(conn: &Connection) -> Result<Vec<String>, InspectError> {
    debug!("listing tables");
    let mut stmt = conn
        .prepare(queries::LIST_TABLES)
        .map_err(InspectError::query("sqlite_master"))?;

    let rows = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .map_err(InspectError::query("sqlite_master"))?;

    rows.collect::<rusqlite::Result<Vec<_>>>()
        .map_err(InspectError::query("sqlite_master"))
}

// ============================================================================
// Messages
// ============================================================================

/// Query the newest `limit` messages, returned oldest first.
pub fn recent_messages(conn: &Connection, limit: u32) -> Result<Vec<ChatMessage>, InspectError> {
    debug!(limit, "querying recent messages");
    let mut stmt = conn
        .prepare(queries::RECENT_MESSAGES)
        .map_err(InspectError::query("messages"))?;

    let rows = stmt
        .query_map([limit], |row: &Row| {
            Ok(ChatMessage {
                id: row.get(0)?,
                is_user: is_user_flag(&row.get::<_, Value>(1)?),
                content: text_or_display(row.get::<_, Value>(2)?),
                timestamp: row.get(3)?,
                model_id: row.get(4)?,
                tokens: row.get(5)?,
                cost: row.get(6)?,
            })
        })
        .map_err(InspectError::query("messages"))?;

    let mut messages = rows
        .collect::<rusqlite::Result<Vec<_>>>()
        .map_err(InspectError::query("messages"))?;

    // Newest-first from SQL; display chronologically
    messages.reverse();
    Ok(messages)
}

/// Count all messages, user messages and AI messages.
pub fn message_counts(conn: &Connection) -> Result<MessageCounts, InspectError> {
    debug!("counting messages");
    let count = |sql: &str| -> Result<i64, InspectError> {
        conn.query_row(sql, [], |row| row.get::<_, i64>(0))
            .map_err(InspectError::query("messages"))
    };

    Ok(MessageCounts {
        total: count(queries::MESSAGE_COUNT_TOTAL)?,
        user: count(queries::MESSAGE_COUNT_USER)?,
        ai: count(queries::MESSAGE_COUNT_AI)?,
    })
}

// ============================================================================
// Auth
// ============================================================================

/// Query the newest `limit` auth records, newest first.
pub fn recent_auth(conn: &Connection, limit: u32) -> Result<Vec<AuthRecord>, InspectError> {
    debug!(limit, "querying auth records");
    let mut stmt = conn
        .prepare(queries::RECENT_AUTH)
        .map_err(InspectError::query("auth"))?;

    let rows = stmt
        .query_map([limit], |row: &Row| {
            Ok(AuthRecord {
                id: row.get(0)?,
                api_key: text_or_display(row.get::<_, Value>(1)?),
                provider: row.get(2)?,
                balance: row.get(3)?,
                created_at: row.get(4)?,
                updated_at: row.get(5)?,
            })
        })
        .map_err(InspectError::query("auth"))?;

    rows.collect::<rusqlite::Result<Vec<_>>>()
        .map_err(InspectError::query("auth"))
}

// ============================================================================
// Utility Functions
// ============================================================================

/// `is_user` is 1 for user rows; anything else (0, NULL, junk) counts as AI.
fn is_user_flag(value: &Value) -> bool {
    match value {
        Value::Integer(i) => *i == 1,
        Value::Real(f) => *f == 1.0,
        _ => false,
    }
}

/// Text columns read as-is; NULL stays `None`, other types are rendered.
fn text_or_display(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Text(s) => Some(s),
        other => Some(output::display_value(&other)),
    }
}
