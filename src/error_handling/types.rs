//! Error type definitions.
//!
//! Derivation functions never fail. These types cover the fallible edges:
//! logger setup, reading JSON snapshots, and writing CSV output.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for loading a JSON snapshot of documents, reports or results.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// The input could not be read.
    #[error("Failed to read snapshot '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The input was not valid JSON for the expected shape.
    #[error("Failed to parse snapshot '{path}': {source}")]
    ParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Error types for CSV export.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Error writing a CSV record.
    #[error("CSV write error: {0}")]
    CsvError(#[from] csv::Error),

    /// Error flushing or creating the output.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The serialized CSV was not valid UTF-8.
    #[error("CSV output is not valid UTF-8: {0}")]
    EncodingError(#[from] std::string::FromUtf8Error),
}
