//! Landing page with the two download links.

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::auth::{can_export, Principal};
use crate::config::{ROUTE_DOWNLOAD_CSV, ROUTE_DOWNLOAD_XLSX};
use crate::messages::Messages;

use super::super::response::forbidden;
use super::super::types::{ExportState, RequestContext};

/// Renders the landing fragment, or a 403 for callers who may not export.
pub fn show_landing_page(
    principal: &Principal,
    ctx: &RequestContext,
    messages: &Messages,
) -> Response {
    if !can_export(principal) {
        return forbidden(messages.forbidden_page());
    }

    let url_excel = escape_html(&ctx.url_for(ROUTE_DOWNLOAD_XLSX));
    let url_csv = escape_html(&ctx.url_for(ROUTE_DOWNLOAD_CSV));
    let html = format!(
        r#"<h1>{title}</h1>
<p>{intro}</p>
<a href="{url_excel}" class="button button--primary">{link_xlsx}</a><br><br>
<a href="{url_csv}" class="button button--primary">{link_csv}</a><br><br>
"#,
        title = escape_html(messages.landing_title()),
        intro = escape_html(messages.landing_intro()),
        link_xlsx = escape_html(messages.link_xlsx()),
        link_csv = escape_html(messages.link_csv()),
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        html,
    )
        .into_response()
}

/// `GET <base>/csv`
pub async fn landing_handler(State(state): State<ExportState>, headers: HeaderMap) -> Response {
    let settings = state.settings();
    let principal = Principal::from_headers(&headers, &settings.roles_header);
    show_landing_page(&principal, &state.request_context(), &settings.messages)
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
