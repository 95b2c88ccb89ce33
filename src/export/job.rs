//! Export jobs: one table, one format, one sink.
//!
//! [`ExportJob::run`] is the failure boundary of a download. Errors are
//! logged once and a human-readable notice is appended to whatever the sink
//! already holds; nothing propagates to the caller.

use log::error;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::error_handling::ExportError;
use crate::messages::Messages;
use crate::storage::{RowSource, TableName};

use super::csv::write_csv;
use super::types::ExportFormat;
use super::xlsx::write_xlsx;

/// A single export of `table` in `format`.
#[derive(Debug, Clone)]
pub struct ExportJob {
    table: TableName,
    format: ExportFormat,
    messages: Messages,
}

impl ExportJob {
    /// Creates a job. Nothing is read until the job runs.
    pub fn new(table: TableName, format: ExportFormat, messages: Messages) -> Self {
        Self {
            table,
            format,
            messages,
        }
    }

    /// Table being exported.
    pub fn table(&self) -> &TableName {
        &self.table
    }

    /// Output format.
    pub fn format(&self) -> ExportFormat {
        self.format
    }

    /// Streams the table into `sink`, returning the number of data rows.
    ///
    /// # Errors
    ///
    /// Propagates the first failure; the sink keeps what was written before it.
    pub async fn write_to<W>(&self, source: &dyn RowSource, sink: &mut W) -> Result<usize, ExportError>
    where
        W: AsyncWrite + Unpin + Send,
    {
        let rows = source.fetch(&self.table);
        match self.format {
            ExportFormat::Csv => write_csv(rows, sink).await,
            ExportFormat::Xlsx => {
                let notice = self.messages.empty_table(self.table.as_str());
                write_xlsx(rows, sink, &notice).await
            }
        }
    }

    /// Like [`ExportJob::write_to`], but on failure logs the error and appends
    /// the localized failure notice to the sink.
    ///
    /// Returns `None` when the export failed.
    pub async fn run<W>(&self, source: &dyn RowSource, sink: &mut W) -> Option<usize>
    where
        W: AsyncWrite + Unpin + Send,
    {
        match self.write_to(source, sink).await {
            Ok(count) => Some(count),
            Err(e) => {
                let (label, notice) = match self.format {
                    ExportFormat::Csv => ("CSV", self.messages.csv_failed()),
                    ExportFormat::Xlsx => ("Excel", self.messages.xlsx_failed()),
                };
                error!(
                    "Error generating {} from table {} ({}): {}",
                    label,
                    self.table,
                    e.error_type().as_str(),
                    e
                );
                // The sink may be the thing that failed; a second failure has nobody to report to.
                let _ = sink.write_all(notice.as_bytes()).await;
                let _ = sink.flush().await;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Locale, UTF8_BOM};
    use crate::export::Row;
    use crate::storage::RowStream;
    use futures::stream::{self, StreamExt};

    struct FixedSource(Vec<Row>);

    impl RowSource for FixedSource {
        fn fetch<'a>(&'a self, _table: &'a TableName) -> RowStream<'a> {
            stream::iter(self.0.clone().into_iter().map(Ok)).boxed()
        }
    }

    struct FailingSource;

    impl RowSource for FailingSource {
        fn fetch<'a>(&'a self, _table: &'a TableName) -> RowStream<'a> {
            let rows: Vec<Result<Row, ExportError>> = vec![
                Ok([("id", "1")].into_iter().collect()),
                Err(ExportError::DataAccess(sqlx::Error::PoolClosed)),
            ];
            stream::iter(rows).boxed()
        }
    }

    fn job(format: ExportFormat) -> ExportJob {
        ExportJob::new(
            TableName::new("equipaments").unwrap(),
            format,
            Messages::new(Locale::En),
        )
    }

    #[tokio::test]
    async fn test_run_csv_success() {
        let source = FixedSource(vec![[("id", "1")].into_iter().collect()]);
        let mut sink = Vec::new();

        let count = job(ExportFormat::Csv).run(&source, &mut sink).await;

        assert_eq!(count, Some(1));
        assert_eq!(&sink[UTF8_BOM.len()..], b"id\r\n1\r\n");
    }

    #[tokio::test]
    async fn test_run_csv_failure_appends_notice_to_partial_output() {
        let mut sink = Vec::new();

        let count = job(ExportFormat::Csv).run(&FailingSource, &mut sink).await;

        assert_eq!(count, None);
        let text = String::from_utf8(sink[UTF8_BOM.len()..].to_vec()).unwrap();
        assert_eq!(
            text,
            format!("id\r\n1\r\n{}", Messages::new(Locale::En).csv_failed())
        );
    }

    #[tokio::test]
    async fn test_run_xlsx_failure_body_is_notice_only() {
        let mut sink = Vec::new();

        let count = job(ExportFormat::Xlsx).run(&FailingSource, &mut sink).await;

        assert_eq!(count, None);
        assert_eq!(sink, Messages::new(Locale::En).xlsx_failed().as_bytes());
    }

    #[tokio::test]
    async fn test_write_to_propagates_errors() {
        let mut sink = Vec::new();
        let result = job(ExportFormat::Csv)
            .write_to(&FailingSource, &mut sink)
            .await;
        assert!(matches!(result, Err(ExportError::DataAccess(_))));
    }

    #[test]
    fn test_job_accessors() {
        let job = job(ExportFormat::Xlsx);
        assert_eq!(job.table().as_str(), "equipaments");
        assert_eq!(job.format(), ExportFormat::Xlsx);
    }
}
