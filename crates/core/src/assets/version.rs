use serde::Serialize;
use serde_json::Value;

use crate::assets::asset::display_value;
use crate::assets::enums::VersionStatus;
use crate::error::UnknownEnumValue;
use crate::types::{DbId, VersionNumber};

/// One department-scoped, numbered snapshot of an asset.
///
/// Uniqueness is defined by `(asset_id, department, version)`. A `version`
/// of `None` asks the write path to allocate the next number for the asset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetVersion {
    asset_id: Option<DbId>,
    department: Value,
    version: Option<VersionNumber>,
    status: Value,
}

impl AssetVersion {
    pub fn new(
        asset_id: Option<DbId>,
        department: impl Into<String>,
        version: Option<VersionNumber>,
        status: VersionStatus,
    ) -> Self {
        Self {
            asset_id,
            department: Value::String(department.into()),
            version,
            status: Value::String(status.as_str().to_string()),
        }
    }

    /// Build a version from untrusted values.
    pub fn from_values(
        asset_id: Option<DbId>,
        department: Value,
        version: Option<VersionNumber>,
        status: Value,
    ) -> Self {
        Self {
            asset_id,
            department,
            version,
            status,
        }
    }

    pub fn with_asset_id(self, asset_id: DbId) -> Self {
        Self {
            asset_id: Some(asset_id),
            ..self
        }
    }

    pub fn with_department(self, department: impl Into<Value>) -> Self {
        Self {
            department: department.into(),
            ..self
        }
    }

    pub fn with_version(self, version: Option<VersionNumber>) -> Self {
        Self { version, ..self }
    }

    pub fn with_status(self, status: impl Into<Value>) -> Self {
        Self {
            status: status.into(),
            ..self
        }
    }

    pub fn asset_id(&self) -> Option<DbId> {
        self.asset_id
    }

    /// The department, if it is a string.
    pub fn department(&self) -> Option<&str> {
        self.department.as_str()
    }

    pub fn department_value(&self) -> &Value {
        &self.department
    }

    pub fn version(&self) -> Option<VersionNumber> {
        self.version
    }

    /// Decode the status field.
    pub fn status(&self) -> Result<VersionStatus, UnknownEnumValue> {
        VersionStatus::from_value(&self.status)
    }

    pub fn status_value(&self) -> &Value {
        &self.status
    }

    /// `department v{version} [status]` as shown in logs and CLI output.
    pub fn label(&self) -> String {
        let version = self
            .version
            .map(|v| v.to_string())
            .unwrap_or_else(|| "?".to_string());
        format!(
            "{} v{} [{}]",
            display_value(&self.department),
            version,
            display_value(&self.status)
        )
    }
}
