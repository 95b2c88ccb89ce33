//! HTTP header constants.
//!
//! This module defines the header names and values sent with the download
//! responses and the request header the principal is read from.

/// Request header carrying the caller's comma separated role list.
///
/// Set by the authenticating proxy in front of this service.
pub const DEFAULT_ROLES_HEADER: &str = "x-user-roles";

// Content types
/// Spreadsheet (Office Open XML) content type
pub const CONTENT_TYPE_XLSX: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
/// CSV content type
pub const CONTENT_TYPE_CSV: &str = "text/csv; charset=utf-8";
/// Plain text content type used by refusals
pub const CONTENT_TYPE_TEXT: &str = "text/plain; charset=utf-8";

// Cache suppression for spreadsheet downloads
/// `Cache-Control` value for spreadsheet downloads
pub const XLSX_CACHE_CONTROL: &str = "max-age=0";
/// `Pragma` value for spreadsheet downloads
pub const XLSX_PRAGMA: &str = "public";

// Cache suppression for CSV downloads
/// `Cache-Control` value for CSV downloads
pub const CSV_CACHE_CONTROL: &str = "private, no-cache, must-revalidate";
/// `Pragma` value for CSV downloads
pub const CSV_PRAGMA: &str = "private";
/// `Expires` value for CSV downloads
pub const CSV_EXPIRES: &str = "0";
