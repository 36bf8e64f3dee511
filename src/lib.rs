//! chat-cache-inspect library
//!
//! Exposes the report and database modules for the binary and integration tests.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial library structure

pub mod db;
pub mod error;
pub mod output;
pub mod report;
