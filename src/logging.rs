//! Structured logging setup.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::core::config::LoggingConfig;
use crate::core::Config;

/// Initialize structured logging to `<state dir>/broeser/<file_name>`.
///
/// The REPL owns stdout, so log lines go to a file. `RUST_LOG` overrides the
/// configured filter. Returns the log file path.
pub fn init_logging(config: &LoggingConfig) -> Result<PathBuf> {
    let log_dir = Config::state_dir();
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log dir {}", log_dir.display()))?;
    let log_file_path = log_dir.join(&config.file_name);

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)
        .with_context(|| format!("Failed to open log file {}", log_file_path.display()))?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    tracing::info!("broeser logging initialized at {}", log_file_path.display());

    Ok(log_file_path)
}
