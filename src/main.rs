//! chat-cache-inspect - debug viewer for the AI chat app's local cache
//!
//! Prints the tables, the last messages with totals and the stored auth
//! records from the sqflite database the desktop build writes under
//! `.dart_tool/`. Run from the Flutter project root.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial implementation

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::process::ExitCode;

use chat_cache_inspect::db::connection::default_db_path;
use chat_cache_inspect::error::InspectError;
use chat_cache_inspect::report::{self, ReportOutcome};

/// Print recent messages and auth records from chat_cache.db.
#[derive(Parser, Debug)]
#[command(name = "chat-cache-inspect")]
#[command(version, about, long_about = None)]
struct Cli {}

fn main() -> ExitCode {
    // Initialize tracing/logging; stdout is reserved for the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let _cli = Cli::parse();

    match print_report() {
        Ok(()) => ExitCode::from(0),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

/// Every database problem is reported in the output itself, so the process
/// exits cleanly regardless of the outcome; only a broken stdout is an error.
fn print_report() -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let outcome = report::run(&default_db_path(), &mut out);
    tracing::debug!(?outcome, "report finished");

    if let ReportOutcome::Failed(InspectError::Io(e)) = outcome {
        return Err(e).context("Failed to write report");
    }

    out.flush().context("Failed to flush stdout")
}
