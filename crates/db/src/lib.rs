//! SQLite persistence for assets and asset versions.
//!
//! The [`Storage`] facade owns the connection and the schema; the
//! repositories underneath issue one SQL statement per operation.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod error;
pub mod models;
pub mod repositories;
pub mod schema;
pub mod storage;

pub use error::DbError;
pub use storage::Storage;

pub type DbPool = sqlx::SqlitePool;

/// URL of a private, process-local in-memory database.
pub const IN_MEMORY_URL: &str = "sqlite::memory:";

/// Create a single-connection pool from a database URL.
///
/// One connection serializes every statement, and keeping it open for the
/// pool's lifetime keeps an in-memory database alive.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
}

/// Verify the connection can execute a query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
