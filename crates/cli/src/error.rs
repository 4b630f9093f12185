//! CLI error types.

use std::path::PathBuf;

use hnds_core::calendar::CalendarError;
use hnds_core::listing::ListingError;
use thiserror::Error;

/// Result type alias for the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur while loading fixtures or running a command.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON in {source_name}: {source}")]
    Parse {
        source_name: String,
        source: serde_json::Error,
    },

    #[error("Invalid event {id:?}: {source}")]
    InvalidEvent { id: String, source: CalendarError },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Calendar(#[from] CalendarError),

    #[error(transparent)]
    Listing(#[from] ListingError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
