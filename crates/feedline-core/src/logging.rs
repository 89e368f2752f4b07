//! File-based tracing setup.
//!
//! The TUI owns the terminal, so diagnostics go to
//! `${FEEDLINE_HOME}/logs/feedline.log` instead of stdout/stderr.
//! The filter is controlled by the FEEDLINE_LOG env var (default: info).

use std::fs;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::paths;

/// Log filter environment variable.
const LOG_ENV: &str = "FEEDLINE_LOG";

/// Log file name inside the logs directory.
const LOG_FILE: &str = "feedline.log";

/// Initializes file logging and returns the appender guard.
///
/// The guard must be kept alive for the lifetime of the process; dropping
/// it flushes and stops the background writer.
///
/// # Errors
/// Returns an error if the logs directory cannot be created or a global
/// subscriber is already installed.
pub fn init() -> Result<WorkerGuard> {
    let dir = paths::logs_dir();
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))?;

    Ok(guard)
}
