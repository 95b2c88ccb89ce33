//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization, database setup and exports
//! - Error categories used when logging failed exports
//!
//! Export errors are never surfaced as HTTP status codes: a download that has
//! started always completes, possibly with a notice appended to the file.

mod types;

// Re-export public API
pub use types::{DatabaseError, ErrorType, ExportError, InitializationError};
