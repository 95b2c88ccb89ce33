//! Row source: full-table reads streamed as [`Row`]s.
//!
//! The table's column set is discovered from the result; every value is
//! decoded from the storage class SQLite reports for it.

use std::fmt;
use std::sync::LazyLock;

use futures::stream::{BoxStream, StreamExt};
use regex::Regex;
use sqlx::sqlite::SqliteRow;
use sqlx::{Column, Row as _, TypeInfo, ValueRef};

use crate::config::MAX_TABLE_NAME_LENGTH;
use crate::error_handling::{DatabaseError, ExportError};
use crate::export::{Row, Value};
use crate::storage::DbPool;

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Lazy, single-pass sequence of rows.
pub type RowStream<'a> = BoxStream<'a, Result<Row, ExportError>>;

/// A validated table identifier and the statement that reads all of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableName {
    name: String,
    select_all: String,
}

impl TableName {
    /// Validates `name` as a plain SQL identifier.
    pub fn new(name: impl Into<String>) -> Result<Self, DatabaseError> {
        let name = name.into();
        if name.len() > MAX_TABLE_NAME_LENGTH || !IDENTIFIER.is_match(&name) {
            return Err(DatabaseError::InvalidTableName(name));
        }
        let select_all = format!("SELECT * FROM \"{name}\"");
        Ok(Self { name, select_all })
    }

    /// The bare table name.
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// `SELECT *` over the table, without ordering.
    pub fn select_all(&self) -> &str {
        &self.select_all
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Something that can stream every row of a table.
pub trait RowSource: Send + Sync {
    /// Reads all columns of all rows of `table`, in arrival order.
    fn fetch<'a>(&'a self, table: &'a TableName) -> RowStream<'a>;
}

/// [`RowSource`] backed by the SQLite pool.
#[derive(Clone)]
pub struct SqliteRowSource {
    pool: DbPool,
}

impl SqliteRowSource {
    /// Wraps a connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// The underlying pool.
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

impl RowSource for SqliteRowSource {
    fn fetch<'a>(&'a self, table: &'a TableName) -> RowStream<'a> {
        sqlx::query(table.select_all())
            .fetch(self.pool.as_ref())
            .map(|result| result.and_then(|row| decode_row(&row)).map_err(ExportError::from))
            .boxed()
    }
}

/// Converts a result row into a [`Row`], keeping the column order.
fn decode_row(row: &SqliteRow) -> Result<Row, sqlx::Error> {
    let mut decoded = Row::with_capacity(row.len());
    for column in row.columns() {
        let idx = column.ordinal();
        let raw = row.try_get_raw(idx)?;
        let value = if raw.is_null() {
            Value::Null
        } else {
            let storage_class = raw.type_info().name().to_string();
            match storage_class.as_str() {
                "INTEGER" | "BIGINT" | "INT8" | "BOOLEAN" => Value::Integer(row.try_get(idx)?),
                "REAL" | "NUMERIC" => Value::Real(row.try_get(idx)?),
                "BLOB" => {
                    let bytes: Vec<u8> = row.try_get(idx)?;
                    Value::Text(String::from_utf8_lossy(&bytes).into_owned())
                }
                _ => Value::Text(row.try_get_unchecked(idx)?),
            }
        };
        decoded.push(column.name(), value);
    }
    Ok(decoded)
}
