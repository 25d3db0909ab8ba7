//! Error types for vCard ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading, decoding, or parsing input.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input exceeds the configured size limit.
    #[error("input file {path} is {size} bytes, exceeding the {max_size} byte limit")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    // === Encoding Errors ===
    /// No byte evidence to detect an encoding from.
    #[error("could not detect input encoding")]
    EncodingUndetectable,

    /// Encoding label not recognized.
    #[error("unknown encoding label '{label}'")]
    UnknownEncoding { label: String },

    // === Parsing Errors ===
    /// A record block could not be parsed.
    #[error("malformed record block #{index}: {reason}")]
    MalformedRecordBlock { index: usize, reason: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
