//! Database connection pool management.
//!
//! This module opens the SQLite connection pool the exports read from:
//! - Connections are read-only; the service never writes to the database
//! - The database file must already exist
//! - Connection count is bounded by configuration

use std::sync::Arc;

use log::{error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::error_handling::DatabaseError;

/// Shared handle to the connection pool.
pub type DbPool = Arc<SqlitePool>;

/// Opens a read-only connection pool on the database at `db_path`.
///
/// Fails with `DatabaseError::FileNotFound` instead of creating an empty
/// database when the path is wrong.
pub async fn init_db_pool_with_path(
    db_path: &std::path::Path,
    max_connections: u32,
) -> Result<DbPool, DatabaseError> {
    if !db_path.is_file() {
        error!("Database file not found: {}", db_path.display());
        return Err(DatabaseError::FileNotFound(
            db_path.to_string_lossy().to_string(),
        ));
    }

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .read_only(true)
        .create_if_missing(false);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect_with(options)
        .await
        .map_err(|e| {
            error!("Failed to connect to database: {e}");
            DatabaseError::SqlError(e)
        })?;

    info!(
        "Opened database {} (read-only, up to {} connections)",
        db_path.display(),
        max_connections.max(1)
    );

    Ok(Arc::new(pool))
}
