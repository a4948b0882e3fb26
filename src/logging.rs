//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! The terminal UI owns stdout and stderr while it runs, so log output only
//! goes to a file. Without `--log-file` no subscriber is installed and
//! events are dropped. `RUST_LOG` controls the filter (default `info`).

use crate::error::{JobSwipeError, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| JobSwipeError::LoggingError(e.to_string()))
}
