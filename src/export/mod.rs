//! Export functionality.
//!
//! This module turns the rows of a table into downloadable files:
//! - CSV (UTF-8 with byte-order mark, streamed record by record)
//! - Excel `.xlsx` (single worksheet, digit-only codes kept as text)
//!
//! Serializers write to any `tokio::io::AsyncWrite` sink, so the same code
//! feeds HTTP response bodies and files.

mod csv;
mod file;
mod job;
mod types;
mod xlsx;

pub use csv::write_csv;
pub use file::{export_to_file, ExportOptions};
pub use job::ExportJob;
pub use types::{ExportFormat, Header, Row, Value};
pub use xlsx::{is_digit_code, write_xlsx};
