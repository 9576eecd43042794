//! Asset and asset version value types.
//!
//! Entities carry the fields that pass through validation as raw
//! [`serde_json::Value`]s, so a pipeline can see exactly what a caller or an
//! import file supplied (a missing name, a number where a type string
//! belongs). Typed accessors decode those values on demand.

pub mod asset;
pub mod enums;
pub mod version;

pub use asset::Asset;
pub use enums::{AssetType, VersionStatus};
pub use version::AssetVersion;
