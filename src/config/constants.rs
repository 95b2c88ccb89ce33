//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including the exported table, download file names and buffer sizes.

/// Table exported by default.
///
/// The column set is discovered at query time; nothing in this crate declares
/// its schema.
pub const DEFAULT_TABLE_NAME: &str = "nou_formulari_dades_formulari";

/// Default SQLite database path.
pub const DB_PATH: &str = "./csv_convert.db";

/// Default address the HTTP service binds to.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Default maximum number of pooled database connections.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Longest table identifier accepted (SQLite has no hard limit, this is a sanity bound).
pub const MAX_TABLE_NAME_LENGTH: usize = 128;

// Download file names
/// Prefix of the spreadsheet download file name
pub const XLSX_FILENAME_PREFIX: &str = "dades_equipaments_";
/// Prefix of the CSV download file name
pub const CSV_FILENAME_PREFIX: &str = "dades_formulari_";
/// `chrono` format of the timestamp embedded in download file names (`YYYYMMDD_HHMMSS`)
pub const FILENAME_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

// Routes (relative to the configured base path)
/// Landing page with the two download links
pub const ROUTE_LANDING: &str = "/csv";
/// Spreadsheet download
pub const ROUTE_DOWNLOAD_XLSX: &str = "/csv/download-excel";
/// CSV download
pub const ROUTE_DOWNLOAD_CSV: &str = "/csv/download-csv";

/// UTF-8 byte-order mark written before any CSV content.
///
/// Spreadsheet tools use it to detect the encoding of the file.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Capacity in bytes of the in-memory pipe between an export task and the response body.
pub const STREAM_PIPE_CAPACITY: usize = 64 * 1024;

/// Roles allowed to export.
pub const EXPORT_ROLES: &[&str] = &["administrator", "gestor"];
