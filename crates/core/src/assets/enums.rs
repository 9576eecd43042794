//! Closed enumerations stored as lowercase strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::UnknownEnumValue;

// ---------------------------------------------------------------------------
// Asset type
// ---------------------------------------------------------------------------

/// The kind of production resource an asset represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Character,
    Dressing,
    Environment,
    Fx,
    Prop,
    Set,
    Vehicle,
}

/// Accepted `AssetType` wire values, in declaration order.
pub const ASSET_TYPE_VALUES: &str = "character, dressing, environment, fx, prop, set, vehicle";

impl AssetType {
    /// Every asset type, in declaration order.
    pub const ALL: [AssetType; 7] = [
        Self::Character,
        Self::Dressing,
        Self::Environment,
        Self::Fx,
        Self::Prop,
        Self::Set,
        Self::Vehicle,
    ];

    /// Convert to the string stored in the `assets.type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Dressing => "dressing",
            Self::Environment => "environment",
            Self::Fx => "fx",
            Self::Prop => "prop",
            Self::Set => "set",
            Self::Vehicle => "vehicle",
        }
    }

    /// Decode an untrusted JSON value. Anything but a known string fails.
    pub fn from_value(value: &Value) -> Result<Self, UnknownEnumValue> {
        match value {
            Value::String(s) => s.parse(),
            other => Err(unknown_asset_type(other.to_string())),
        }
    }
}

fn unknown_asset_type(value: String) -> UnknownEnumValue {
    UnknownEnumValue {
        kind: "asset type",
        value,
        expected: ASSET_TYPE_VALUES,
    }
}

impl FromStr for AssetType {
    type Err = UnknownEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "character" => Ok(Self::Character),
            "dressing" => Ok(Self::Dressing),
            "environment" => Ok(Self::Environment),
            "fx" => Ok(Self::Fx),
            "prop" => Ok(Self::Prop),
            "set" => Ok(Self::Set),
            "vehicle" => Ok(Self::Vehicle),
            _ => Err(unknown_asset_type(s.to_string())),
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Version status
// ---------------------------------------------------------------------------

/// Whether an asset version is the one currently in use.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum VersionStatus {
    Active,
    #[default]
    Inactive,
}

/// Accepted `VersionStatus` wire values.
pub const VERSION_STATUS_VALUES: &str = "active, inactive";

impl VersionStatus {
    pub const ALL: [VersionStatus; 2] = [Self::Active, Self::Inactive];

    /// Convert to the string stored in the `asset_versions.status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    /// Decode an untrusted JSON value. Anything but a known string fails.
    pub fn from_value(value: &Value) -> Result<Self, UnknownEnumValue> {
        match value {
            Value::String(s) => s.parse(),
            other => Err(unknown_status(other.to_string())),
        }
    }
}

fn unknown_status(value: String) -> UnknownEnumValue {
    UnknownEnumValue {
        kind: "version status",
        value,
        expected: VERSION_STATUS_VALUES,
    }
}

impl FromStr for VersionStatus {
    type Err = UnknownEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err(unknown_status(s.to_string())),
        }
    }
}

impl fmt::Display for VersionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn asset_type_round_trips_every_member() {
        for asset_type in AssetType::ALL {
            assert_eq!(asset_type.as_str().parse::<AssetType>(), Ok(asset_type));
        }
    }

    #[test]
    fn asset_type_parse_is_case_sensitive() {
        let err = "Character".parse::<AssetType>().unwrap_err();
        assert_eq!(err.kind, "asset type");
        assert_eq!(err.value, "Character");
    }

    #[test]
    fn asset_type_rejects_unknown_and_empty() {
        assert!("spaceship".parse::<AssetType>().is_err());
        assert!("".parse::<AssetType>().is_err());
    }

    #[test]
    fn asset_type_from_value_rejects_non_strings() {
        assert_eq!(AssetType::from_value(&json!("prop")), Ok(AssetType::Prop));
        let err = AssetType::from_value(&json!(1)).unwrap_err();
        assert_eq!(err.value, "1");
        assert!(AssetType::from_value(&Value::Null).is_err());
    }

    #[test]
    fn asset_type_serializes_lowercase() {
        assert_eq!(serde_json::to_value(AssetType::Fx).unwrap(), json!("fx"));
    }

    #[test]
    fn status_defaults_to_inactive() {
        assert_eq!(VersionStatus::default(), VersionStatus::Inactive);
    }

    #[test]
    fn status_from_str_valid() {
        assert_eq!("active".parse::<VersionStatus>(), Ok(VersionStatus::Active));
        assert_eq!(
            "inactive".parse::<VersionStatus>(),
            Ok(VersionStatus::Inactive)
        );
    }

    #[test]
    fn status_from_str_invalid() {
        let err = "ACTIVE".parse::<VersionStatus>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown version status 'ACTIVE'. Must be one of: active, inactive"
        );
    }
}
