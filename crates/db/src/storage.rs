//! The storage facade: owns the connection, the schema and the log sink.

use std::future::Future;

use otherworld_core::assets::{Asset, AssetVersion};
use otherworld_core::types::{DbId, VersionNumber};
use tracing::instrument::{WithDispatch, WithSubscriber};
use tracing::Dispatch;

use crate::error::DbError;
use crate::models::asset::InsertAsset;
use crate::models::asset_version::InsertAssetVersion;
use crate::repositories::{AssetRepo, AssetVersionRepo};
use crate::{create_pool, health_check, schema, DbPool, IN_MEMORY_URL};

/// Relational persistence for assets and their versions.
///
/// Enforces the `(name, type)` and `(asset_id, department, version)`
/// uniqueness keys and allocates version numbers. Business rules are not
/// checked here; callers validate before writing.
#[derive(Debug, Clone)]
pub struct Storage {
    pool: DbPool,
    dispatch: Dispatch,
}

impl Storage {
    /// Connect to `database_url` and create the schema if absent.
    ///
    /// Log events go to the dispatcher that is current at construction time.
    pub async fn open(database_url: &str) -> Result<Self, DbError> {
        let dispatch = tracing::dispatcher::get_default(Dispatch::clone);
        let pool = create_pool(database_url)
            .with_subscriber(dispatch.clone())
            .await?;
        let storage = Self { pool, dispatch };
        storage
            .traced(schema::initialize_schema(&storage.pool))
            .await?;
        Ok(storage)
    }

    /// Open a private in-memory database.
    pub async fn open_in_memory() -> Result<Self, DbError> {
        Self::open(IN_MEMORY_URL).await
    }

    /// Send this storage's log events to `dispatch`.
    pub fn with_dispatch(self, dispatch: Dispatch) -> Self {
        Self { dispatch, ..self }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub async fn health_check(&self) -> Result<(), DbError> {
        Ok(self.traced(health_check(&self.pool)).await?)
    }

    /// Persist a new asset and return it with its assigned id.
    pub async fn add_asset(&self, asset: &Asset) -> Result<Asset, DbError> {
        self.traced(async {
            let input = InsertAsset::try_from(asset)?;
            tracing::debug!(name = %input.name, asset_type = %input.asset_type, "Adding asset");

            let row = AssetRepo::create(&self.pool, &input).await?;
            tracing::debug!(asset_id = row.asset_id, name = %row.name, "Asset added");
            Ok(asset.clone().with_id(row.asset_id))
        })
        .await
    }

    /// Persist a version of a stored asset.
    ///
    /// The asset must carry an id. A version without a number receives the
    /// asset's next number, allocated in the insert statement itself; when
    /// the asset has used every number the insert is skipped and
    /// [`DbError::Exhausted`] is returned.
    pub async fn add_asset_version(
        &self,
        asset: &Asset,
        version: &AssetVersion,
    ) -> Result<AssetVersion, DbError> {
        self.traced(async {
            let asset_id = asset.id().ok_or_else(|| {
                DbError::Precondition(format!(
                    "asset {} has no id; versions must reference a persisted asset",
                    asset.label()
                ))
            })?;
            let input = InsertAssetVersion::for_asset(asset_id, version)?;
            tracing::debug!(
                asset_id,
                department = %input.department,
                version = ?input.version,
                "Adding asset version"
            );

            let row = AssetVersionRepo::create(&self.pool, &input)
                .await?
                .ok_or_else(|| {
                    DbError::Exhausted(format!(
                        "asset {} has no version numbers left",
                        asset.label()
                    ))
                })?;
            tracing::debug!(asset_id, version = row.version, "Asset version added");
            AssetVersion::try_from(row)
        })
        .await
    }

    /// The earliest-inserted asset named `name`, if any.
    pub async fn get_asset(&self, name: &str) -> Result<Option<Asset>, DbError> {
        self.traced(async {
            tracing::debug!(name, "Getting asset");
            AssetRepo::find_by_name(&self.pool, name)
                .await?
                .map(Asset::try_from)
                .transpose()
        })
        .await
    }

    pub async fn get_asset_version(
        &self,
        asset_id: DbId,
        version: VersionNumber,
    ) -> Result<Option<AssetVersion>, DbError> {
        self.traced(async {
            tracing::debug!(asset_id, version, "Getting asset version");
            AssetVersionRepo::find(&self.pool, asset_id, version)
                .await?
                .map(AssetVersion::try_from)
                .transpose()
        })
        .await
    }

    /// Highest version number of the asset across departments.
    pub async fn get_last_asset_version_number(
        &self,
        asset_id: DbId,
    ) -> Result<Option<VersionNumber>, DbError> {
        self.traced(async {
            tracing::debug!(asset_id, "Getting last asset version number");
            Ok(AssetVersionRepo::last_version_number(&self.pool, asset_id).await?)
        })
        .await
    }

    /// Every asset, ordered by `(name, type)`.
    pub async fn list_assets(&self) -> Result<Vec<Asset>, DbError> {
        self.traced(async {
            tracing::debug!("Listing assets");
            AssetRepo::list(&self.pool)
                .await?
                .into_iter()
                .map(Asset::try_from)
                .collect()
        })
        .await
    }

    /// Versions of one asset, ordered by `(department, version, status)`.
    pub async fn list_asset_versions(&self, asset_id: DbId) -> Result<Vec<AssetVersion>, DbError> {
        self.traced(async {
            tracing::debug!(asset_id, "Listing asset versions");
            AssetVersionRepo::list_by_asset(&self.pool, asset_id)
                .await?
                .into_iter()
                .map(AssetVersion::try_from)
                .collect()
        })
        .await
    }

    /// Close the connection. Calling this more than once is harmless.
    pub async fn close(&self) {
        if !self.pool.is_closed() {
            self.traced(async { tracing::debug!("Closing database connection") })
                .await;
        }
        self.pool.close().await;
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }

    fn traced<F: Future>(&self, fut: F) -> WithDispatch<F> {
        fut.with_subscriber(self.dispatch.clone())
    }
}
