//! SQLite connection management for the chat cache database.
//!
//! CHANGELOG:
//! - 10/19/2026 - Fixed relative path and read-only open

use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::InspectError;

/// Where sqflite_common_ffi keeps the app's database during `flutter run` on desktop.
pub const DEFAULT_DB_PATH: &str = ".dart_tool/sqflite_common_ffi/databases/chat_cache.db";

/// Default chat_cache.db path, relative to the Flutter project root.
pub fn default_db_path() -> PathBuf {
    PathBuf::from(DEFAULT_DB_PATH)
}

/// Open a read-only connection to the chat cache.
///
/// Read-only mode never creates the file, so a path that vanished after the
/// existence check surfaces as an open error rather than an empty database.
pub fn open_db(path: &Path) -> Result<Connection, InspectError> {
    debug!(path = %path.display(), "opening chat cache");

    Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|source| InspectError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Close the connection, surfacing any error SQLite reports on close.
pub fn close_db(conn: Connection) -> Result<(), InspectError> {
    debug!("closing chat cache");
    conn.close().map_err(|(_, e)| InspectError::Close(e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_db_path() {
        let path = default_db_path();
        assert!(path.ends_with("databases/chat_cache.db"));
        assert!(path.is_relative());
    }

    #[test]
    fn test_open_missing_file_does_not_create_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.db");

        let err = open_db(&path).unwrap_err();
        assert!(matches!(err, InspectError::Open { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_open_is_read_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat_cache.db");
        Connection::open(&path)
            .unwrap()
            .execute_batch("CREATE TABLE t (x INTEGER);")
            .unwrap();

        let conn = open_db(&path).unwrap();
        assert!(conn.execute("INSERT INTO t (x) VALUES (1)", []).is_err());
        close_db(conn).unwrap();
    }
}
