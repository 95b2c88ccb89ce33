//! HTTP export server.
//!
//! Provides three endpoints under the configured base path:
//! - `/csv` - landing page with the download links
//! - `/csv/download-excel` - spreadsheet download
//! - `/csv/download-csv` - CSV download
//!
//! All of them require the `administrator` or `gestor` role.

mod handlers;
mod response;
mod types;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::routing::get;
use axum::Router;
use log::{info, warn};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::config::{ServerConfig, ROUTE_DOWNLOAD_CSV, ROUTE_DOWNLOAD_XLSX, ROUTE_LANDING};
use crate::messages::Messages;
use crate::storage::{init_db_pool_with_path, SqliteRowSource, TableName};

pub use handlers::{download_csv, download_spreadsheet, show_landing_page};
pub use response::download_filename;
pub use types::{normalize_base_path, ExportState, RequestContext, ServerSettings};

/// Builds the router, nested under `state`'s base path when one is set.
pub fn router(state: ExportState) -> Router {
    let base_path = state.settings().base_path.clone();
    let routes = Router::new()
        .route(ROUTE_LANDING, get(handlers::landing_handler))
        .route(ROUTE_DOWNLOAD_XLSX, get(handlers::download_xlsx_handler))
        .route(ROUTE_DOWNLOAD_CSV, get(handlers::download_csv_handler))
        .with_state(state);

    if base_path.is_empty() {
        routes
    } else {
        Router::new().nest(&base_path, routes)
    }
}

/// Serves `state` on `listener` until `shutdown` is cancelled.
pub async fn serve(
    listener: TcpListener,
    state: ExportState,
    shutdown: CancellationToken,
) -> Result<()> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .context("Export server error")
}

/// Runs the export server until Ctrl-C or SIGTERM.
///
/// # Errors
///
/// Fails when the table name is invalid, the database cannot be opened or the
/// address cannot be bound.
pub async fn run_server(config: ServerConfig) -> Result<()> {
    let table = TableName::new(config.table.as_str())?;
    let pool = init_db_pool_with_path(&config.db_path, config.max_connections)
        .await
        .context("Failed to initialize database pool")?;

    let settings = ServerSettings {
        table,
        roles_header: config.roles_header.to_ascii_lowercase(),
        base_path: normalize_base_path(&config.base_path),
        messages: Messages::new(config.locale),
    };
    let base_path = settings.base_path.clone();
    let state = ExportState::new(Arc::new(SqliteRowSource::new(pool.clone())), settings);

    let listener = TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("Failed to bind export server to {}", config.bind))?;
    let addr = listener
        .local_addr()
        .context("Failed to read the bound address")?;

    info!("Export server listening on http://{}{}", addr, base_path);
    info!("  - Landing: http://{}{}{}", addr, base_path, ROUTE_LANDING);
    info!("  - Excel: http://{}{}{}", addr, base_path, ROUTE_DOWNLOAD_XLSX);
    info!("  - CSV: http://{}{}{}", addr, base_path, ROUTE_DOWNLOAD_CSV);

    let shutdown = CancellationToken::new();
    let signal = shutdown.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        signal.cancel();
    });

    let result = serve(listener, state, shutdown).await;
    pool.close().await;
    result
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl-C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
