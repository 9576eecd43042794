//! `asset_versions` table row and insert DTO.

use otherworld_core::assets::{AssetVersion, VersionStatus};
use otherworld_core::types::{DbId, VersionNumber};
use serde::Serialize;
use sqlx::FromRow;

use crate::error::DbError;

/// A row from the `asset_versions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AssetVersionRow {
    pub asset_id: DbId,
    pub department: String,
    pub version: VersionNumber,
    pub status: String,
}

impl TryFrom<AssetVersionRow> for AssetVersion {
    type Error = DbError;

    fn try_from(row: AssetVersionRow) -> Result<Self, Self::Error> {
        let status: VersionStatus = row.status.parse()?;
        Ok(AssetVersion::new(
            Some(row.asset_id),
            row.department,
            Some(row.version),
            status,
        ))
    }
}

/// Column values for an `asset_versions` insert.
///
/// `version: None` lets the insert statement allocate the next number.
#[derive(Debug, Clone, Copy)]
pub struct InsertAssetVersion<'a> {
    pub asset_id: DbId,
    pub department: &'a str,
    pub version: Option<VersionNumber>,
    pub status: VersionStatus,
}

impl<'a> InsertAssetVersion<'a> {
    /// Decode `version` for the already-persisted asset `asset_id`.
    pub fn for_asset(asset_id: DbId, version: &'a AssetVersion) -> Result<Self, DbError> {
        let department = version
            .department()
            .ok_or_else(|| DbError::Decode("department must be a string".to_string()))?;
        Ok(Self {
            asset_id,
            department,
            version: version.version(),
            status: version.status()?,
        })
    }
}
