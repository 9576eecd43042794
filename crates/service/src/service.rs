//! Validated reads and writes over [`Storage`].

use std::future::Future;

use otherworld_core::assets::{Asset, AssetVersion};
use otherworld_core::types::VersionNumber;
use otherworld_core::validation::{
    build_default_asset_pipeline, build_default_asset_version_pipeline, ValidationError,
    ValidationPipeline,
};
use otherworld_db::{DbError, Storage};
use tracing::instrument::{WithDispatch, WithSubscriber};
use tracing::Dispatch;

use crate::error::ServiceError;
use crate::outcome::WriteOutcome;

/// Entry point for managing assets and asset versions.
///
/// Owns its storage and validation pipelines. Cloning is cheap; clones share
/// the same connection and rules.
#[derive(Debug, Clone)]
pub struct AssetService {
    storage: Storage,
    asset_pipeline: ValidationPipeline<Asset>,
    version_pipeline: ValidationPipeline<AssetVersion>,
    dispatch: Dispatch,
}

impl AssetService {
    pub fn new(
        storage: Storage,
        asset_pipeline: ValidationPipeline<Asset>,
        version_pipeline: ValidationPipeline<AssetVersion>,
    ) -> Self {
        Self {
            storage,
            asset_pipeline,
            version_pipeline,
            dispatch: tracing::dispatcher::get_default(Dispatch::clone),
        }
    }

    /// Open `database_url` with the default validation pipelines.
    pub async fn open(database_url: &str) -> Result<Self, ServiceError> {
        let storage = Storage::open(database_url).await?;
        Ok(Self::new(
            storage,
            build_default_asset_pipeline(),
            build_default_asset_version_pipeline(),
        ))
    }

    /// Send log events from this service and its storage to `dispatch`.
    pub fn with_dispatch(self, dispatch: Dispatch) -> Self {
        Self {
            storage: self.storage.with_dispatch(dispatch.clone()),
            dispatch,
            ..self
        }
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Validate and persist an asset.
    ///
    /// When an asset with the same `(name, type)` already exists, the stored
    /// asset is looked up by name and returned as [`WriteOutcome::Existing`].
    pub async fn add_asset(&self, asset: &Asset) -> Result<WriteOutcome<Asset>, ServiceError> {
        self.traced(async {
            tracing::debug!(asset = %asset.label(), "Adding asset");

            let errors = self.asset_pipeline.validate(asset);
            if !errors.is_empty() {
                log_validation_errors(&errors);
                return Ok(WriteOutcome::Invalid(errors));
            }

            match self.storage.add_asset(asset).await {
                Ok(stored) => Ok(WriteOutcome::Created(stored)),
                Err(DbError::UniqueViolation(message)) => {
                    tracing::warn!(asset = %asset.label(), error = %message, "Asset already exists");
                    let name = asset.name().unwrap_or_default();
                    match self.storage.get_asset(name).await? {
                        Some(existing) => Ok(WriteOutcome::Existing(existing)),
                        None => Ok(WriteOutcome::Conflict(message)),
                    }
                }
                Err(err) => Err(err.into()),
            }
        })
        .await
    }

    /// Validate and persist a version of a stored asset.
    ///
    /// A version without a number is given the asset's last number plus one,
    /// or 1 for the first version. A duplicate
    /// `(asset_id, department, version)` is reported as
    /// [`WriteOutcome::Conflict`] and not retried.
    pub async fn add_asset_version(
        &self,
        asset: &Asset,
        version: &AssetVersion,
    ) -> Result<WriteOutcome<AssetVersion>, ServiceError> {
        self.traced(async {
            tracing::debug!(asset = %asset.label(), version = %version.label(), "Adding asset version");

            let mut errors = self.asset_pipeline.validate(asset);
            errors.extend(self.version_pipeline.validate(version));
            if !errors.is_empty() {
                log_validation_errors(&errors);
                return Ok(WriteOutcome::Invalid(errors));
            }

            let version = match version.version() {
                Some(_) => version.clone(),
                None => {
                    let Some(next) = self.next_version_number(asset).await? else {
                        let message = format!("asset {} has no version numbers left", asset.label());
                        tracing::error!(asset = %asset.label(), "{message}");
                        return Ok(WriteOutcome::Conflict(message));
                    };
                    tracing::debug!(asset = %asset.label(), version = next, "Allocated version number");
                    version.clone().with_version(Some(next))
                }
            };

            match self.storage.add_asset_version(asset, &version).await {
                Ok(stored) => Ok(WriteOutcome::Created(stored)),
                Err(DbError::UniqueViolation(message)) => {
                    tracing::error!(
                        asset = %asset.label(),
                        version = %version.label(),
                        error = %message,
                        "Asset version already exists"
                    );
                    Ok(WriteOutcome::Conflict(message))
                }
                Err(err) => Err(err.into()),
            }
        })
        .await
    }

    pub async fn get_asset(&self, name: &str) -> Result<Option<Asset>, ServiceError> {
        self.traced(async {
            tracing::debug!(name, "Getting asset");
            Ok(self.storage.get_asset(name).await?)
        })
        .await
    }

    /// Look up a version by asset name and number. An unknown name yields
    /// `None`.
    pub async fn get_asset_version(
        &self,
        name: &str,
        version: VersionNumber,
    ) -> Result<Option<AssetVersion>, ServiceError> {
        self.traced(async {
            tracing::debug!(name, version, "Getting asset version");
            let Some(asset) = self.storage.get_asset(name).await? else {
                tracing::debug!(name, "No asset found");
                return Ok(None);
            };
            self.get_version_of(&asset, version).await
        })
        .await
    }

    /// Look up a version of an asset already in hand, skipping the name lookup.
    pub async fn get_version_of(
        &self,
        asset: &Asset,
        version: VersionNumber,
    ) -> Result<Option<AssetVersion>, ServiceError> {
        let Some(asset_id) = asset.id() else {
            return Ok(None);
        };
        Ok(self
            .traced(self.storage.get_asset_version(asset_id, version))
            .await?)
    }

    pub async fn list_assets(&self) -> Result<Vec<Asset>, ServiceError> {
        self.traced(async {
            tracing::debug!("Listing all assets");
            Ok(self.storage.list_assets().await?)
        })
        .await
    }

    /// Every version of the named asset. An unknown name yields an empty list.
    pub async fn list_asset_versions(&self, name: &str) -> Result<Vec<AssetVersion>, ServiceError> {
        self.traced(async {
            tracing::debug!(name, "Listing all asset versions");
            let Some(asset) = self.storage.get_asset(name).await? else {
                tracing::debug!(name, "No asset found");
                return Ok(Vec::new());
            };
            self.list_versions_of(&asset).await
        })
        .await
    }

    /// Every version of an asset already in hand. An unpersisted asset has none.
    pub async fn list_versions_of(&self, asset: &Asset) -> Result<Vec<AssetVersion>, ServiceError> {
        let Some(asset_id) = asset.id() else {
            return Ok(Vec::new());
        };
        Ok(self
            .traced(self.storage.list_asset_versions(asset_id))
            .await?)
    }

    /// Release the storage connection. Idempotent.
    pub async fn close(&self) {
        self.storage.close().await;
    }

    /// Number for the asset's next version across all departments, or `None`
    /// once `VersionNumber::MAX` is taken.
    ///
    /// This read is separate from the insert, so a concurrent writer can
    /// take the number first; the insert then reports a conflict.
    async fn next_version_number(
        &self,
        asset: &Asset,
    ) -> Result<Option<VersionNumber>, ServiceError> {
        let Some(asset_id) = asset.id() else {
            // The insert rejects unpersisted assets.
            return Ok(Some(1));
        };
        let last = self.storage.get_last_asset_version_number(asset_id).await?;
        Ok(match last {
            Some(n) => n.checked_add(1),
            None => Some(1),
        })
    }

    pub(crate) fn traced<F: Future>(&self, fut: F) -> WithDispatch<F> {
        fut.with_subscriber(self.dispatch.clone())
    }
}

fn log_validation_errors(errors: &[ValidationError]) {
    for error in errors {
        tracing::error!(field = %error.field, "{}", error.message);
    }
}
