//! Error types for the catalog crate.
//!
//! Every variant here means the dataset is unavailable: the file is missing,
//! unreadable or structurally malformed. Missing *values* inside a
//! well-formed file are never errors, they are defaulted by the parser.

use thiserror::Error;

/// Errors that can occur while loading the title catalog
///
/// The `#[derive(Error)]` macro from thiserror implements
/// `std::error::Error` and `Display` from the `#[error(...)]` attributes.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found
    #[error("Dataset file not found: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The CSV layer rejected the input (bad quoting, ragged rows, ...)
    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A mandatory column is absent from the header row
    #[error("Missing required column '{column}'")]
    MissingColumn { column: String },

    /// Two rows share the same identifier
    #[error("Duplicate title id '{id}' at data row {row}")]
    DuplicateId { id: String, row: usize },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
