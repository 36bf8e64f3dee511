//! Console report over chat_cache.db: table list, recent messages with
//! totals, and recent auth records.
//!
//! Missing file, a failing `messages` query and a failing `auth` query are
//! all reported and recovered from; each shows up in the returned
//! `ReportOutcome` instead of unwinding to the caller.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial implementation

use rusqlite::Connection;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::db::connection::{close_db, open_db};
use crate::db::helpers::{self, AuthRecord, ChatMessage, MessageCounts};
use crate::db::queries::{RECENT_AUTH_LIMIT, RECENT_MESSAGES_LIMIT};
use crate::error::InspectError;
use crate::output::{self, AUTH_DIVIDER, MESSAGE_DIVIDER};

/// Result of one table section.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionOutcome<T> {
    /// Rows were printed; carries what the section produced.
    Rows(T),
    /// Table exists but has no rows.
    Empty,
    /// Query failed (usually a missing table); carries SQLite's message.
    QueryFailed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    pub tables: Vec<String>,
    /// Aggregate counts, present only when messages were listed.
    pub messages: SectionOutcome<MessageCounts>,
    /// Number of auth records printed.
    pub auth: SectionOutcome<usize>,
}

#[derive(Debug)]
pub enum ReportOutcome {
    /// File absent; no connection was opened.
    DatabaseNotFound(PathBuf),
    /// Database has no tables; nothing queried past sqlite_master.
    NoTables,
    Completed(ReportSummary),
    /// Open, sqlite_master, close or output failed.
    Failed(InspectError),
}

/// Print the report for the database at `path` to `out`.
pub fn run<W: Write>(path: &Path, out: &mut W) -> ReportOutcome {
    if !path.exists() {
        debug!(path = %path.display(), "database file missing");
        return match writeln!(out, "База данных не найдена: {}", path.display()) {
            Ok(()) => ReportOutcome::DatabaseNotFound(path.to_path_buf()),
            Err(e) => ReportOutcome::Failed(e.into()),
        };
    }

    match inspect(path, out) {
        Ok(outcome) => outcome,
        Err(e) => {
            warn!(error = %e, "database inspection failed");
            // Output may be what failed; nothing else to report to
            let _ = writeln!(out, "Ошибка при работе с базой данных: {}", e);
            ReportOutcome::Failed(e)
        }
    }
}

fn inspect<W: Write>(path: &Path, out: &mut W) -> Result<ReportOutcome, InspectError> {
    writeln!(out, "Подключаемся к базе данных: {}", path.display())?;

    let conn = open_db(path)?;

    let tables = helpers::list_tables(&conn)?;
    writeln!(out, "\nНайденные таблицы: {:?}", tables)?;

    if tables.is_empty() {
        writeln!(out, "В базе данных нет таблиц.")?;
        close_db(conn)?;
        return Ok(ReportOutcome::NoTables);
    }

    let messages = messages_section(&conn, out)?;
    let auth = auth_section(&conn, out)?;

    close_db(conn)?;

    Ok(ReportOutcome::Completed(ReportSummary {
        tables,
        messages,
        auth,
    }))
}

// ============================================================================
// Messages section
// ============================================================================

fn messages_section<W: Write>(
    conn: &Connection,
    out: &mut W,
) -> Result<SectionOutcome<MessageCounts>, InspectError> {
    writeln!(out, "\n=== ПОСЛЕДНИЕ {} СООБЩЕНИЙ ===", RECENT_MESSAGES_LIMIT)?;
    recover_query_failure(print_messages(conn, out), out)
}

fn print_messages<W: Write>(
    conn: &Connection,
    out: &mut W,
) -> Result<SectionOutcome<MessageCounts>, InspectError> {
    let messages = helpers::recent_messages(conn, RECENT_MESSAGES_LIMIT)?;

    if messages.is_empty() {
        writeln!(out, "Таблица messages пуста.")?;
        return Ok(SectionOutcome::Empty);
    }

    for msg in &messages {
        write_message(out, msg)?;
    }

    let counts = helpers::message_counts(conn)?;
    writeln!(out, "\nВсего сообщений в базе: {}", counts.total)?;
    writeln!(out, "Из них пользователь спросил: {}", counts.user)?;
    writeln!(out, "AI ответило: {}", counts.ai)?;

    Ok(SectionOutcome::Rows(counts))
}

fn write_message<W: Write>(out: &mut W, msg: &ChatMessage) -> std::io::Result<()> {
    let sender = if msg.is_user { "ПОЛЬЗОВАТЕЛЬ" } else { "AI" };

    writeln!(out, "ID: {} | {}", output::display_value(&msg.id), sender)?;
    writeln!(
        out,
        "Модель: {} | Токены: {} | Стоимость: {}",
        output::display_value(&msg.model_id),
        output::display_value(&msg.tokens),
        output::display_value(&msg.cost),
    )?;
    writeln!(out, "Время: {}", output::display_timestamp(&msg.timestamp))?;
    writeln!(out, "Сообщение: {}", output::content_preview(msg.content.as_deref()))?;
    writeln!(out, "{}", MESSAGE_DIVIDER)
}

// ============================================================================
// Auth section
// ============================================================================

fn auth_section<W: Write>(
    conn: &Connection,
    out: &mut W,
) -> Result<SectionOutcome<usize>, InspectError> {
    writeln!(out, "\n=== ДАННЫЕ АУТЕНТИФИКАЦИИ ===")?;
    recover_query_failure(print_auth(conn, out), out)
}

fn print_auth<W: Write>(
    conn: &Connection,
    out: &mut W,
) -> Result<SectionOutcome<usize>, InspectError> {
    let records = helpers::recent_auth(conn, RECENT_AUTH_LIMIT)?;

    if records.is_empty() {
        writeln!(out, "Таблица auth пуста.")?;
        return Ok(SectionOutcome::Empty);
    }

    for record in &records {
        write_auth(out, record)?;
    }

    Ok(SectionOutcome::Rows(records.len()))
}

fn write_auth<W: Write>(out: &mut W, record: &AuthRecord) -> std::io::Result<()> {
    writeln!(
        out,
        "ID: {} | Провайдер: {} | Баланс: {}",
        output::display_value(&record.id),
        output::display_value(&record.provider),
        output::display_value(&record.balance),
    )?;
    writeln!(out, "Ключ: {}", output::key_preview(record.api_key.as_deref()))?;
    writeln!(out, "Создан: {}", output::display_timestamp(&record.created_at))?;
    writeln!(out, "{}", AUTH_DIVIDER)
}

// ============================================================================
// Shared
// ============================================================================

/// Turn a per-table query error into a printed notice; anything else propagates.
fn recover_query_failure<T, W: Write>(
    result: Result<SectionOutcome<T>, InspectError>,
    out: &mut W,
) -> Result<SectionOutcome<T>, InspectError> {
    match result {
        Err(InspectError::Query { table, source }) => {
            warn!(table, error = %source, "table query failed");
            writeln!(out, "Ошибка при чтении таблицы {}: {}", table, source)?;
            writeln!(out, "Возможно, таблицы {} не существует.", table)?;
            Ok(SectionOutcome::QueryFailed(source.to_string()))
        }
        other => other,
    }
}
