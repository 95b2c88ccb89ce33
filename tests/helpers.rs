// Shared test helpers for database setup and server startup.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use csv_convert::config::{Locale, DEFAULT_TABLE_NAME};
use csv_convert::server::{serve, ExportState, ServerSettings};
use csv_convert::storage::init_db_pool_with_path;
use csv_convert::{Messages, SqliteRowSource, TableName};

/// Creates (or reuses) the database at `db_path` and runs `statements` on it
/// through a writable connection.
#[allow(dead_code)] // Used by other test files
pub async fn create_test_db(db_path: &Path, statements: &[&str]) {
    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(options)
        .await
        .expect("Failed to create test database");
    for statement in statements {
        sqlx::query(statement)
            .execute(&pool)
            .await
            .unwrap_or_else(|e| panic!("Failed to run {statement:?}: {e}"));
    }
    pool.close().await;
}

/// Database whose default table holds the two rows of the reference scenario.
#[allow(dead_code)] // Used by other test files
pub async fn create_scenario_db(dir: &TempDir) -> PathBuf {
    let db_path = dir.path().join("forms.db");
    let create = format!("CREATE TABLE {DEFAULT_TABLE_NAME} (id TEXT, code TEXT, name TEXT)");
    let insert = format!(
        "INSERT INTO {DEFAULT_TABLE_NAME} (id, code, name) VALUES ('1', '007', 'Alpha'), ('2', '12', 'Beta')"
    );
    create_test_db(&db_path, &[&create, &insert]).await;
    db_path
}

/// Database whose default table exists but has no rows.
#[allow(dead_code)] // Used by other test files
pub async fn create_empty_db(dir: &TempDir) -> PathBuf {
    let db_path = dir.path().join("empty.db");
    let create = format!("CREATE TABLE {DEFAULT_TABLE_NAME} (id TEXT, code TEXT, name TEXT)");
    create_test_db(&db_path, &[&create]).await;
    db_path
}

/// Starts the export server for `db_path` on an ephemeral port.
///
/// Cancel the returned token to stop it.
#[allow(dead_code)] // Used by other test files
pub async fn start_test_server(
    db_path: &Path,
    table: &str,
    base_path: &str,
) -> (SocketAddr, CancellationToken) {
    let pool = init_db_pool_with_path(db_path, 2)
        .await
        .expect("Failed to open test database");
    let settings = ServerSettings {
        table: TableName::new(table).expect("valid table name"),
        roles_header: "x-user-roles".to_string(),
        base_path: base_path.to_string(),
        messages: Messages::new(Locale::Ca),
    };
    let state = ExportState::new(Arc::new(SqliteRowSource::new(pool)), settings);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test server");
    let addr = listener.local_addr().expect("Failed to get local address");

    let shutdown = CancellationToken::new();
    let token = shutdown.clone();
    tokio::spawn(async move {
        let _ = serve(listener, state, token).await;
    });

    (addr, shutdown)
}
