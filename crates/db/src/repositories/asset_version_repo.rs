//! Repository for the `asset_versions` table.

use otherworld_core::types::{DbId, VersionNumber};

use crate::models::asset_version::{AssetVersionRow, InsertAssetVersion};
use crate::DbPool;

/// Column list shared across queries.
const COLUMNS: &str = "asset_id, department, version, status";

/// Insert and lookup operations for asset versions.
pub struct AssetVersionRepo;

impl AssetVersionRepo {
    /// Insert a new asset version.
    ///
    /// When `input.version` is `None` the next number for the asset
    /// (`MAX(version) + 1` across all departments, or 1) is computed inside
    /// the same statement. If the asset already holds `VersionNumber::MAX`
    /// nothing is inserted and `None` is returned. Fails with a unique
    /// violation when `(asset_id, department, version)` already exists.
    pub async fn create(
        pool: &DbPool,
        input: &InsertAssetVersion<'_>,
    ) -> Result<Option<AssetVersionRow>, sqlx::Error> {
        let query = format!(
            "INSERT INTO asset_versions (asset_id, department, version, status)
             SELECT
                ?1,
                ?2,
                COALESCE(
                    ?3,
                    (SELECT COALESCE(MAX(version), 0) + 1 FROM asset_versions WHERE asset_id = ?1)
                ),
                ?4
             WHERE ?3 IS NOT NULL
                OR (SELECT COALESCE(MAX(version), 0) FROM asset_versions WHERE asset_id = ?1) < ?5
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AssetVersionRow>(&query)
            .bind(input.asset_id)
            .bind(input.department)
            .bind(input.version)
            .bind(input.status.as_str())
            .bind(VersionNumber::MAX)
            .fetch_optional(pool)
            .await
    }

    /// Find a version of an asset by number. When several departments share
    /// the number, the alphabetically first department wins.
    pub async fn find(
        pool: &DbPool,
        asset_id: DbId,
        version: VersionNumber,
    ) -> Result<Option<AssetVersionRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM asset_versions
             WHERE asset_id = ?1 AND version = ?2
             ORDER BY department ASC LIMIT 1"
        );
        sqlx::query_as::<_, AssetVersionRow>(&query)
            .bind(asset_id)
            .bind(version)
            .fetch_optional(pool)
            .await
    }

    /// Highest version number recorded for the asset in any department.
    pub async fn last_version_number(
        pool: &DbPool,
        asset_id: DbId,
    ) -> Result<Option<VersionNumber>, sqlx::Error> {
        sqlx::query_scalar::<_, Option<VersionNumber>>(
            "SELECT MAX(version) FROM asset_versions WHERE asset_id = ?1",
        )
        .bind(asset_id)
        .fetch_one(pool)
        .await
    }

    /// List all versions for an asset, ordered by department, version, status.
    pub async fn list_by_asset(
        pool: &DbPool,
        asset_id: DbId,
    ) -> Result<Vec<AssetVersionRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM asset_versions
             WHERE asset_id = ?1
             ORDER BY department ASC, version ASC, status ASC"
        );
        sqlx::query_as::<_, AssetVersionRow>(&query)
            .bind(asset_id)
            .fetch_all(pool)
            .await
    }
}
