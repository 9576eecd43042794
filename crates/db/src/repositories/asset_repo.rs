//! Repository for the `assets` table.

use crate::models::asset::{AssetRow, InsertAsset};
use crate::DbPool;

/// Column list for `assets` queries.
const COLUMNS: &str = "asset_id, name, type";

/// Insert and lookup operations for assets.
pub struct AssetRepo;

impl AssetRepo {
    /// Insert a new asset. Fails with a unique violation when `(name, type)`
    /// already exists.
    pub async fn create(pool: &DbPool, input: &InsertAsset<'_>) -> Result<AssetRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO assets (name, type) VALUES (?1, ?2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AssetRow>(&query)
            .bind(input.name)
            .bind(input.asset_type.as_str())
            .fetch_one(pool)
            .await
    }

    /// Find the earliest-inserted asset with the given name, whatever its type.
    pub async fn find_by_name(pool: &DbPool, name: &str) -> Result<Option<AssetRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM assets WHERE name = ?1 \
             ORDER BY asset_id ASC LIMIT 1"
        );
        sqlx::query_as::<_, AssetRow>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List every asset, ordered by name then type.
    pub async fn list(pool: &DbPool) -> Result<Vec<AssetRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assets ORDER BY name ASC, type ASC");
        sqlx::query_as::<_, AssetRow>(&query).fetch_all(pool).await
    }
}
