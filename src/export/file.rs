//! One-off export to a file or stdout.
//!
//! Used by the `export` subcommand. The operator running it already has the
//! database file, so no role check applies. Failures are returned rather than
//! written into the output.

use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;

use crate::config::{ExportArgs, Locale};
use crate::messages::Messages;
use crate::storage::{init_db_pool_with_path, SqliteRowSource, TableName};

use super::job::ExportJob;
use super::types::ExportFormat;

/// Options for a file export.
#[derive(Clone, Debug)]
pub struct ExportOptions {
    /// Database path
    pub db_path: PathBuf,
    /// Output file path (or stdout if None)
    pub output: Option<PathBuf>,
    /// Export format
    pub format: ExportFormat,
    /// Table to export
    pub table: String,
    /// Language of in-file notices
    pub locale: Locale,
}

impl From<ExportArgs> for ExportOptions {
    fn from(args: ExportArgs) -> Self {
        Self {
            db_path: args.db_path,
            output: args.output,
            format: args.format,
            table: args.table,
            locale: args.locale,
        }
    }
}

/// Exports the configured table.
///
/// # Returns
///
/// Returns the number of records exported, or an error if export fails.
///
/// # Errors
///
/// Fails before writing anything when the table name is invalid, the database
/// cannot be opened or the output file cannot be created.
pub async fn export_to_file(opts: &ExportOptions) -> Result<usize> {
    let table = TableName::new(opts.table.as_str())?;
    let pool = init_db_pool_with_path(&opts.db_path, 1)
        .await
        .context("Failed to initialize database pool")?;
    let source = SqliteRowSource::new(pool.clone());
    let job = ExportJob::new(table, opts.format, Messages::new(opts.locale));

    let count = match &opts.output {
        Some(output_path) => {
            let mut file = tokio::fs::File::create(output_path)
                .await
                .with_context(|| {
                    format!("Failed to create output file: {}", output_path.display())
                })?;
            let count = job
                .write_to(&source, &mut file)
                .await
                .context("Export failed")?;
            info!(
                "Exported {} rows from {} to {}",
                count,
                job.table(),
                output_path.display()
            );
            count
        }
        None => {
            let mut stdout = tokio::io::stdout();
            job.write_to(&source, &mut stdout)
                .await
                .context("Export failed")?
        }
    };

    pool.close().await;
    Ok(count)
}
