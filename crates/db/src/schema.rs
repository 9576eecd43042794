//! Idempotent schema creation.

use crate::DbPool;

const CREATE_ASSETS: &str = "\
    CREATE TABLE IF NOT EXISTS assets (
        asset_id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        type TEXT NOT NULL,
        UNIQUE(name, type)
    )";

const CREATE_ASSET_VERSIONS: &str = "\
    CREATE TABLE IF NOT EXISTS asset_versions (
        asset_id INTEGER NOT NULL,
        department TEXT NOT NULL,
        version INTEGER NOT NULL,
        status TEXT NOT NULL,
        FOREIGN KEY(asset_id) REFERENCES assets(asset_id),
        UNIQUE(asset_id, department, version)
    )";

/// Create both tables if they do not exist yet.
pub async fn initialize_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    tracing::debug!("Initializing database schema");

    let mut tx = pool.begin().await?;
    sqlx::query(CREATE_ASSETS).execute(&mut *tx).await?;
    sqlx::query(CREATE_ASSET_VERSIONS).execute(&mut *tx).await?;
    tx.commit().await
}
