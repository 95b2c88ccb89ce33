//! Export server data structures.

use std::sync::Arc;

use chrono::{DateTime, Local};

use crate::messages::Messages;
use crate::storage::{RowSource, TableName};

/// Settings shared by every request.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    /// Table the downloads read
    pub table: TableName,
    /// Request header carrying the caller's roles
    pub roles_header: String,
    /// Normalized path prefix the routes are mounted under (empty or `/x`)
    pub base_path: String,
    /// User-facing messages
    pub messages: Messages,
}

/// Shared state for the export server
#[derive(Clone)]
pub struct ExportState {
    source: Arc<dyn RowSource>,
    settings: Arc<ServerSettings>,
}

impl ExportState {
    /// Builds the state from a row source and the server settings.
    pub fn new(source: Arc<dyn RowSource>, settings: ServerSettings) -> Self {
        Self {
            source,
            settings: Arc::new(settings),
        }
    }

    /// Row source downloads read from.
    pub fn source(&self) -> &Arc<dyn RowSource> {
        &self.source
    }

    /// Server settings.
    pub fn settings(&self) -> &ServerSettings {
        &self.settings
    }

    /// Context of a request arriving now.
    pub fn request_context(&self) -> RequestContext {
        RequestContext::new(self.settings.base_path.clone(), Local::now())
    }
}

/// Per-request facts the endpoints need besides the principal.
#[derive(Debug, Clone)]
pub struct RequestContext {
    base_path: String,
    now: DateTime<Local>,
}

impl RequestContext {
    /// Creates a context for a request received at `now`.
    pub fn new(base_path: impl Into<String>, now: DateTime<Local>) -> Self {
        Self {
            base_path: base_path.into(),
            now,
        }
    }

    /// Path prefix of the site the links point into.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Time the request was received (local clock).
    pub fn now(&self) -> &DateTime<Local> {
        &self.now
    }

    /// Absolute path of `route` under the base path.
    pub fn url_for(&self, route: &str) -> String {
        format!("{}{}", self.base_path, route)
    }
}

/// Normalizes a configured base path to either `""` or `/segment[/segment]`.
pub fn normalize_base_path(base_path: &str) -> String {
    let trimmed = base_path.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
