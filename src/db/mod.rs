//! Database module for read-only SQLite access to chat_cache.db.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial module structure

pub mod connection;
pub mod helpers;
pub mod queries;
