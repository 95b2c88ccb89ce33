// storage/mod.rs
// Database access: connection pool and row sources

pub mod pool;
pub mod source;

// Re-export commonly used items
pub use pool::{init_db_pool_with_path, DbPool};
pub use source::{RowSource, RowStream, SqliteRowSource, TableName};
