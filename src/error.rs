//! Error types for the jobswipe crate.
//!
//! The deck itself never fails; these cover the edges where listings,
//! configuration or the terminal are read.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JobSwipeError {
    /// Listing catalog could not be read or parsed
    #[error("Failed to load listings from {path}: {reason}")]
    CatalogError { path: PathBuf, reason: String },

    /// Two listings in the same catalog share an identifier
    #[error("Duplicate listing id {0} in catalog")]
    DuplicateListing(u32),

    /// User configuration problem
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Logging could not be initialised
    #[error("Logging error: {0}")]
    LoggingError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, JobSwipeError>;
