//! Error types for table output.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while projecting or writing tables. All are fatal.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Projection names a column the table does not have.
    #[error("unknown column '{column}' (available: {available})")]
    UnknownColumn { column: String, available: String },

    /// Destination directory could not be created.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Destination file could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV serialization failed.
    #[error("failed to serialize CSV for {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// JSON serialization failed.
    #[error("failed to serialize JSON for {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, OutputError>;
