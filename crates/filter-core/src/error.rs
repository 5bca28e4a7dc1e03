use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the backoff filter.
#[derive(Error, Debug)]
pub enum FilterError {
    /// A file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A manager line is too short to carry the id and time fields.
    #[error("Line {line_number} is a manager line but only {length} characters long")]
    LineTooShort { line_number: u64, length: usize },

    /// A stored time field did not parse as a number at summary time.
    #[error("Invalid time value for manager {manager_id}: {value:?}")]
    InvalidTimeValue { manager_id: String, value: String },

    /// The given input path does not exist.
    #[error("Input path not found: {0}")]
    DataPathNotFound(PathBuf),

    /// No `.log` files were found under the given directory.
    #[error("No log files found in {0}")]
    NoLogFiles(PathBuf),

    /// The summary report could not be serialized as JSON.
    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the filter crates.
pub type Result<T> = std::result::Result<T, FilterError>;
