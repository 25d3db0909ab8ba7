//! Error types for writing outputs.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing output artifacts.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Output file or its directory could not be created.
    #[error("failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing or flushing an output file failed.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The run report could not be serialized.
    #[error("failed to serialize run report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
