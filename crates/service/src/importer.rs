//! Bulk import of assets and versions from a JSON file.
//!
//! The file holds an array of records:
//!
//! ```json
//! [
//!   {
//!     "asset": { "name": "coraline", "type": "character" },
//!     "department": "animation",
//!     "version": 1,
//!     "status": "active"
//!   }
//! ]
//! ```
//!
//! `version` may be omitted or `null` to allocate the next number.

use std::path::Path;

use otherworld_core::assets::{Asset, AssetType, AssetVersion, VersionStatus};
use otherworld_core::types::VersionNumber;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ServiceError;
use crate::outcome::WriteOutcome;
use crate::service::AssetService;

/// Counts reported by [`AssetService::load_assets`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    /// Elements in the input array.
    pub records: usize,
    /// Assets newly created. Assets that already existed are not counted.
    pub assets_stored: usize,
    pub versions_stored: usize,
    /// Records that failed to decode or whose asset or version was rejected.
    pub skipped: usize,
}

#[derive(Debug, Deserialize)]
struct ImportRecord {
    asset: ImportAsset,
    department: String,
    #[serde(default)]
    version: Option<VersionNumber>,
    status: VersionStatus,
}

#[derive(Debug, Deserialize)]
struct ImportAsset {
    name: String,
    #[serde(rename = "type")]
    asset_type: AssetType,
}

impl ImportRecord {
    fn asset(&self) -> Asset {
        Asset::new(self.asset.name.as_str(), self.asset.asset_type)
    }

    fn version_for(&self, asset: &Asset) -> AssetVersion {
        AssetVersion::new(
            asset.id(),
            self.department.as_str(),
            self.version,
            self.status,
        )
    }
}

impl AssetService {
    /// Import every record of the JSON file at `path`.
    ///
    /// Records are decoded in full before anything is written. A record that
    /// fails to decode is logged and skipped; the rest of the file is still
    /// imported. Failing to read the file or to parse it as a JSON array
    /// aborts the call.
    pub async fn load_assets(&self, path: impl AsRef<Path>) -> Result<ImportSummary, ServiceError> {
        let path = path.as_ref();
        self.traced(async {
            tracing::info!(path = %path.display(), "Loading assets");

            let text = tokio::fs::read_to_string(path)
                .await
                .map_err(|source| ServiceError::Io {
                    path: path.display().to_string(),
                    source,
                })?;
            let entries: Vec<Value> =
                serde_json::from_str(&text).map_err(|source| ServiceError::Json {
                    path: path.display().to_string(),
                    source,
                })?;

            let mut summary = ImportSummary {
                records: entries.len(),
                ..ImportSummary::default()
            };

            for (index, entry) in entries.into_iter().enumerate() {
                let record = match serde_json::from_value::<ImportRecord>(entry) {
                    Ok(record) => record,
                    Err(err) => {
                        tracing::warn!(record = index, error = %err, "Skipping malformed record");
                        summary.skipped += 1;
                        continue;
                    }
                };

                let asset = match self.add_asset(&record.asset()).await? {
                    outcome @ WriteOutcome::Created(_) => {
                        summary.assets_stored += 1;
                        outcome.into_inner()
                    }
                    outcome => outcome.into_inner(),
                };
                let Some(asset) = asset else {
                    tracing::warn!(record = index, "Skipping record whose asset was not stored");
                    summary.skipped += 1;
                    continue;
                };

                let outcome = self
                    .add_asset_version(&asset, &record.version_for(&asset))
                    .await?;
                if outcome.is_stored() {
                    summary.versions_stored += 1;
                } else {
                    tracing::warn!(record = index, "Skipping record whose version was not stored");
                    summary.skipped += 1;
                }
            }

            tracing::info!(
                path = %path.display(),
                records = summary.records,
                assets = summary.assets_stored,
                versions = summary.versions_stored,
                skipped = summary.skipped,
                "Assets loaded"
            );
            Ok(summary)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn record_decodes_with_absent_version() {
        let record: ImportRecord = serde_json::from_value(json!({
            "asset": { "name": "coraline", "type": "character" },
            "department": "animation",
            "status": "active"
        }))
        .unwrap();

        assert_eq!(record.version, None);
        assert_eq!(record.asset().label(), "coraline (character)");
    }

    #[test]
    fn record_with_null_version_decodes() {
        let record: ImportRecord = serde_json::from_value(json!({
            "asset": { "name": "wybie", "type": "character" },
            "department": "modeling",
            "version": null,
            "status": "inactive"
        }))
        .unwrap();
        assert_eq!(record.version, None);
    }

    #[test]
    fn unknown_type_fails_to_decode() {
        let result = serde_json::from_value::<ImportRecord>(json!({
            "asset": { "name": "coraline", "type": "creature" },
            "department": "animation",
            "version": 1,
            "status": "active"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn uppercase_status_fails_to_decode() {
        let result = serde_json::from_value::<ImportRecord>(json!({
            "asset": { "name": "coraline", "type": "character" },
            "department": "animation",
            "version": 1,
            "status": "ACTIVE"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn version_takes_asset_id() {
        let record: ImportRecord = serde_json::from_value(json!({
            "asset": { "name": "coraline", "type": "character" },
            "department": "animation",
            "version": 4,
            "status": "active"
        }))
        .unwrap();
        let asset = record.asset().with_id(12);

        let version = record.version_for(&asset);
        assert_eq!(version.asset_id(), Some(12));
        assert_eq!(version.version(), Some(4));
    }
}
