//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (table name, file names, pipe sizes)
//! - HTTP header values for file downloads
//! - CLI option types and parsing

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{Cli, Command, ExportArgs, Locale, LogFormat, LogLevel, ServeArgs, ServerConfig};
