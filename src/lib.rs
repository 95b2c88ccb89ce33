//! csv_convert library: role-gated table exports
//!
//! This library reads every row of one SQLite table and serves it as a CSV or
//! Excel download to callers holding the `administrator` or `gestor` role. The
//! same serializers back a one-off export to a file.
//!
//! # Example
//!
//! ```no_run
//! use csv_convert::{run_server, ServerConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig {
//!     db_path: std::path::PathBuf::from("forms.db"),
//!     base_path: "/admin".to_string(),
//!     ..Default::default()
//! };
//!
//! run_server(config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod auth;
pub mod config;
pub mod error_handling;
pub mod export;
pub mod initialization;
pub mod messages;
pub mod server;
pub mod storage;

// Re-export public API
pub use auth::{can_export, Principal};
pub use config::{Locale, LogFormat, LogLevel, ServerConfig};
pub use error_handling::{DatabaseError, ExportError};
pub use export::{export_to_file, ExportFormat, ExportJob, ExportOptions, Row, Value};
pub use messages::Messages;
pub use server::{run_server, ExportState, RequestContext};
pub use storage::{RowSource, SqliteRowSource, TableName};
