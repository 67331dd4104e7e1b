//! Error types for partfind.

use thiserror::Error;

/// partfind error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Source error: {0}")]
    Source(String),

    #[error("Sheet '{0}' not found in workbook")]
    MissingSheet(String),

    #[error("Column '{column}' not found in sheet '{sheet}'")]
    MissingColumn { sheet: String, column: String },

    #[error("Watcher error: {0}")]
    Watcher(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for partfind operations.
pub type Result<T> = std::result::Result<T, Error>;
