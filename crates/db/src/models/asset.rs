//! `assets` table row and insert DTO.

use otherworld_core::assets::{Asset, AssetType};
use otherworld_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

use crate::error::DbError;

/// A row from the `assets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AssetRow {
    pub asset_id: DbId,
    pub name: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub asset_type: String,
}

impl TryFrom<AssetRow> for Asset {
    type Error = DbError;

    fn try_from(row: AssetRow) -> Result<Self, Self::Error> {
        let asset_type: AssetType = row.asset_type.parse()?;
        Ok(Asset::new(row.name, asset_type).with_id(row.asset_id))
    }
}

/// Column values for an `assets` insert.
#[derive(Debug, Clone, Copy)]
pub struct InsertAsset<'a> {
    pub name: &'a str,
    pub asset_type: AssetType,
}

impl<'a> TryFrom<&'a Asset> for InsertAsset<'a> {
    type Error = DbError;

    fn try_from(asset: &'a Asset) -> Result<Self, Self::Error> {
        let name = asset
            .name()
            .ok_or_else(|| DbError::Decode("asset name must be a string".to_string()))?;
        Ok(Self {
            name,
            asset_type: asset.asset_type()?,
        })
    }
}
