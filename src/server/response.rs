//! Response building blocks: refusals, download headers and streamed bodies.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Local};
use log::error;
use tokio_util::io::ReaderStream;

use crate::config::{
    CONTENT_TYPE_CSV, CONTENT_TYPE_TEXT, CONTENT_TYPE_XLSX, CSV_CACHE_CONTROL, CSV_EXPIRES,
    CSV_PRAGMA, FILENAME_TIMESTAMP_FORMAT, STREAM_PIPE_CAPACITY, XLSX_CACHE_CONTROL, XLSX_PRAGMA,
};
use crate::export::{ExportFormat, ExportJob};
use crate::storage::RowSource;

/// Download file name for `format` at `now`, e.g. `dades_formulari_20240131_142501.csv`.
pub fn download_filename(format: ExportFormat, now: &DateTime<Local>) -> String {
    format!(
        "{}{}.{}",
        format.filename_prefix(),
        now.format(FILENAME_TIMESTAMP_FORMAT),
        format.extension()
    )
}

/// 403 with a plain text explanation.
pub fn forbidden(message: &str) -> Response {
    (
        StatusCode::FORBIDDEN,
        [(header::CONTENT_TYPE, CONTENT_TYPE_TEXT)],
        message.to_string(),
    )
        .into_response()
}

/// Attachment response for `format` carrying `body`.
pub fn attachment(format: ExportFormat, filename: &str, body: Body) -> Response {
    let disposition = format!("attachment; filename=\"{filename}\"");
    let builder = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_DISPOSITION, disposition);
    let builder = match format {
        ExportFormat::Xlsx => builder
            .header(header::CONTENT_TYPE, CONTENT_TYPE_XLSX)
            .header(header::CACHE_CONTROL, XLSX_CACHE_CONTROL)
            .header(header::PRAGMA, XLSX_PRAGMA),
        ExportFormat::Csv => builder
            .header(header::CONTENT_TYPE, CONTENT_TYPE_CSV)
            .header(header::CACHE_CONTROL, CSV_CACHE_CONTROL)
            .header(header::PRAGMA, CSV_PRAGMA)
            .header(header::EXPIRES, CSV_EXPIRES),
    };

    match builder.body(body) {
        Ok(response) => response,
        Err(e) => {
            error!("Failed to build download response for {}: {}", filename, e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Runs `job` on its own task and returns the body its output streams into.
///
/// The task writes into an in-memory pipe read by the response body. When the
/// client goes away the pipe closes, the job's next write fails and the
/// failure is logged by [`ExportJob::run`].
pub fn spawn_export_body(job: ExportJob, source: Arc<dyn RowSource>) -> Body {
    let (mut writer, reader) = tokio::io::duplex(STREAM_PIPE_CAPACITY);
    tokio::spawn(async move {
        job.run(source.as_ref(), &mut writer).await;
    });
    Body::from_stream(ReaderStream::new(reader))
}
