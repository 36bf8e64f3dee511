//! Error type for database inspection.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial implementation

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InspectError {
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("{source}")]
    Query {
        table: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    #[error("failed to close connection: {0}")]
    Close(rusqlite::Error),

    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

impl InspectError {
    pub(crate) fn query(table: &'static str) -> impl FnOnce(rusqlite::Error) -> Self {
        move |source| InspectError::Query { table, source }
    }
}
