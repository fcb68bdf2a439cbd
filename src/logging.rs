//! Logging bootstrap
//!
//! Opt-in tracing setup for binaries built on this crate. Log lines carry
//! file and line number, so error-severity events (such as a failed service
//! client build) record where they originated.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::MakeWriterExt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

/// Default log file location
pub fn default_log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("gcpaudit").join("gcpaudit.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".gcpaudit").join("gcpaudit.log");
    }
    PathBuf::from("gcpaudit.log")
}

/// Initialize file logging for the process
///
/// Returns the appender guard, which must be held for the lifetime of the
/// program to flush buffered log lines. `LogLevel::Off` installs nothing.
/// May only be called once per process.
pub fn init(level: LogLevel, log_file: Option<PathBuf>) -> Result<Option<WorkerGuard>> {
    let Some(tracing_level) = level.to_tracing_level() else {
        return Ok(None);
    };

    let log_path = log_file.unwrap_or_else(default_log_path);

    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(non_blocking.with_max_level(tracing_level))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("gcpaudit logging started at level {:?}", level);
    tracing::info!("Log file: {:?}", log_path);

    Ok(Some(guard))
}
