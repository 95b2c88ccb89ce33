//! Error type definitions.
//!
//! This module defines the error types used throughout the application and the
//! categories export failures are logged under.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for database setup.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The database file does not exist.
    #[error("Database file not found: {0}")]
    FileNotFound(String),

    /// The configured table name is not a plain SQL identifier.
    #[error("Invalid table name: {0:?}")]
    InvalidTableName(String),

    /// SQL execution or connection error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),
}

/// Error raised while producing an export.
///
/// None of these reach the HTTP client as a status code: once a download has
/// started they are logged and a notice is appended to the file instead.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Query or row decoding failure.
    #[error("Data access error: {0}")]
    DataAccess(#[from] sqlx::Error),

    /// The sink could not be written (client gone, disk full, ...).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoder failure.
    #[error("CSV encoding error: {0}")]
    Csv(#[from] csv::Error),

    /// Spreadsheet encoder failure.
    #[error("Spreadsheet encoding error: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    /// The header has more columns than a worksheet can hold.
    #[error("Too many columns for a worksheet: {0}")]
    TooManyColumns(usize),
}

impl ExportError {
    /// Returns the category this error is logged under.
    pub fn error_type(&self) -> ErrorType {
        match self {
            ExportError::DataAccess(_) => ErrorType::DataAccessError,
            ExportError::Io(_) => ErrorType::SinkWriteError,
            ExportError::Csv(_)
            | ExportError::Spreadsheet(_)
            | ExportError::TooManyColumns(_) => ErrorType::EncodingError,
        }
    }
}

/// Categories of export failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[allow(clippy::enum_variant_names)]
pub enum ErrorType {
    /// Query or connection failure
    DataAccessError,
    /// Output stream failure (includes client disconnects)
    SinkWriteError,
    /// CSV or spreadsheet encoder failure
    EncodingError,
}

impl ErrorType {
    /// Returns a human-readable label for log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::DataAccessError => "Data access error",
            ErrorType::SinkWriteError => "Output write error",
            ErrorType::EncodingError => "Encoding error",
        }
    }
}
