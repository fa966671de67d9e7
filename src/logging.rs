// src/logging.rs
use crate::config::Config;
use crate::error::{ExplorerError, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

/// Sends logs to the configured log file so they stay off the terminal UI.
/// Without a usable log location no subscriber is installed.
pub fn init_file(config: &Config) -> Result<()> {
    let Some(path) = config.log_path() else {
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter(config))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| ExplorerError::Logging(e.to_string()))
}

pub fn init_stderr(config: &Config) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(config))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| ExplorerError::Logging(e.to_string()))
}
