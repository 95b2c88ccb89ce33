//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use strum_macros::EnumIter;

use crate::config::constants::{
    DB_PATH, DEFAULT_BIND_ADDR, DEFAULT_MAX_CONNECTIONS, DEFAULT_TABLE_NAME,
};
use crate::config::headers::DEFAULT_ROLES_HEADER;
use crate::export::ExportFormat;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Language of user-facing messages (refusals, landing page, in-file notices).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, EnumIter)]
pub enum Locale {
    /// Catalan
    #[default]
    Ca,
    /// English
    En,
}

/// Command-line interface.
///
/// # Examples
///
/// ```bash
/// # Serve the download pages behind a proxy mounted at /admin
/// csv_convert serve --db-path ./forms.db --base-path /admin
///
/// # One-off export to a file
/// csv_convert export --db-path ./forms.db --format xlsx --output dades.xlsx
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "csv_convert",
    about = "Exports a database table as CSV or Excel downloads."
)]
pub struct Cli {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true, env = "CSV_CONVERT_LOG_LEVEL")]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true, env = "CSV_CONVERT_LOG_FORMAT")]
    pub log_format: LogFormat,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP export service
    Serve(ServeArgs),
    /// Export the table once to a file or stdout
    Export(ExportArgs),
}

/// Options of the `serve` subcommand.
#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    /// Database path (SQLite file)
    #[arg(long, value_parser, default_value = DB_PATH, env = "CSV_CONVERT_DB_PATH")]
    pub db_path: PathBuf,

    /// Address to listen on
    #[arg(long, default_value = DEFAULT_BIND_ADDR, env = "CSV_CONVERT_BIND")]
    pub bind: String,

    /// Path prefix the routes are mounted under (e.g. /admin)
    #[arg(long, default_value = "", env = "CSV_CONVERT_BASE_PATH")]
    pub base_path: String,

    /// Request header carrying the caller's comma separated roles
    #[arg(long, default_value = DEFAULT_ROLES_HEADER, env = "CSV_CONVERT_ROLES_HEADER")]
    pub roles_header: String,

    /// Table to export
    #[arg(long, default_value = DEFAULT_TABLE_NAME, env = "CSV_CONVERT_TABLE")]
    pub table: String,

    /// Language of user-facing messages
    #[arg(long, value_enum, default_value_t = Locale::Ca, env = "CSV_CONVERT_LOCALE")]
    pub locale: Locale,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS, env = "CSV_CONVERT_MAX_CONNECTIONS")]
    pub max_connections: u32,
}

/// Options of the `export` subcommand.
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Database path (SQLite file)
    #[arg(long, value_parser, default_value = DB_PATH, env = "CSV_CONVERT_DB_PATH")]
    pub db_path: PathBuf,

    /// Output format: csv|xlsx
    #[arg(long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Output file path (stdout if omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Table to export
    #[arg(long, default_value = DEFAULT_TABLE_NAME, env = "CSV_CONVERT_TABLE")]
    pub table: String,

    /// Language of in-file notices
    #[arg(long, value_enum, default_value_t = Locale::Ca, env = "CSV_CONVERT_LOCALE")]
    pub locale: Locale,
}

/// Server configuration (no CLI dependencies).
///
/// This is the configuration struct used by [`crate::run_server`]. It can be
/// constructed programmatically without going through the CLI.
///
/// # Examples
///
/// ```no_run
/// use csv_convert::ServerConfig;
/// use std::path::PathBuf;
///
/// let config = ServerConfig {
///     db_path: PathBuf::from("forms.db"),
///     base_path: "/admin".to_string(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Database path (SQLite file)
    pub db_path: PathBuf,

    /// Address to listen on
    pub bind: String,

    /// Path prefix the routes are mounted under
    pub base_path: String,

    /// Request header carrying the caller's roles
    pub roles_header: String,

    /// Table to export
    pub table: String,

    /// Language of user-facing messages
    pub locale: Locale,

    /// Maximum pooled database connections
    pub max_connections: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DB_PATH),
            bind: DEFAULT_BIND_ADDR.to_string(),
            base_path: String::new(),
            roles_header: DEFAULT_ROLES_HEADER.to_string(),
            table: DEFAULT_TABLE_NAME.to_string(),
            locale: Locale::Ca,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl From<ServeArgs> for ServerConfig {
    fn from(args: ServeArgs) -> Self {
        Self {
            db_path: args.db_path,
            bind: args.bind,
            base_path: args.base_path,
            roles_header: args.roles_header,
            table: args.table,
            locale: args.locale,
            max_connections: args.max_connections,
        }
    }
}
