//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&DbPool` as the first argument and issue a single statement.

pub mod asset_repo;
pub mod asset_version_repo;

pub use asset_repo::AssetRepo;
pub use asset_version_repo::AssetVersionRepo;
