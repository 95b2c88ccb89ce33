//! Export server HTTP handlers.
//!
//! Each endpoint has a plain function taking the principal and the request
//! context explicitly, plus a thin axum handler that extracts them.

mod download;
mod landing;

pub use download::{download_csv, download_csv_handler, download_spreadsheet, download_xlsx_handler};
pub use landing::{landing_handler, show_landing_page};
