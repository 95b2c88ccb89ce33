//! Download endpoints.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Response;

use crate::auth::{can_export, Principal};
use crate::export::{ExportFormat, ExportJob};

use super::super::response::{attachment, download_filename, forbidden, spawn_export_body};
use super::super::types::{ExportState, RequestContext};

/// Streams the table as a spreadsheet, or refuses with 403.
pub fn download_spreadsheet(
    state: &ExportState,
    principal: &Principal,
    ctx: &RequestContext,
) -> Response {
    download(state, principal, ctx, ExportFormat::Xlsx)
}

/// Streams the table as CSV, or refuses with 403.
pub fn download_csv(state: &ExportState, principal: &Principal, ctx: &RequestContext) -> Response {
    download(state, principal, ctx, ExportFormat::Csv)
}

fn download(
    state: &ExportState,
    principal: &Principal,
    ctx: &RequestContext,
    format: ExportFormat,
) -> Response {
    let settings = state.settings();
    if !can_export(principal) {
        return forbidden(settings.messages.forbidden_download());
    }

    let job = ExportJob::new(settings.table.clone(), format, settings.messages);
    let body = spawn_export_body(job, state.source().clone());
    attachment(format, &download_filename(format, ctx.now()), body)
}

/// `GET <base>/csv/download-excel`
pub async fn download_xlsx_handler(
    State(state): State<ExportState>,
    headers: HeaderMap,
) -> Response {
    let principal = Principal::from_headers(&headers, &state.settings().roles_header);
    download_spreadsheet(&state, &principal, &state.request_context())
}

/// `GET <base>/csv/download-csv`
pub async fn download_csv_handler(
    State(state): State<ExportState>,
    headers: HeaderMap,
) -> Response {
    let principal = Principal::from_headers(&headers, &state.settings().roles_header);
    download_csv(&state, &principal, &state.request_context())
}
