//! Application initialization.
//!
//! Sets up process-wide resources before the service or an export starts.
//! Database pools are opened by [`crate::storage`].

mod logger;

// Re-export public API
pub use logger::init_logger_with;
