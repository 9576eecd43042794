use serde::Serialize;
use serde_json::Value;

use crate::assets::enums::AssetType;
use crate::error::UnknownEnumValue;
use crate::types::DbId;

/// A named, typed production resource.
///
/// Uniqueness is defined by `(name, type)`: two assets may share a name as
/// long as their types differ. `id` is absent until storage persists the
/// asset and is never changed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Asset {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<DbId>,
    name: Value,
    #[serde(rename = "type")]
    asset_type: Value,
}

impl Asset {
    /// Build an unpersisted asset from well-typed parts.
    pub fn new(name: impl Into<String>, asset_type: AssetType) -> Self {
        Self {
            id: None,
            name: Value::String(name.into()),
            asset_type: Value::String(asset_type.as_str().to_string()),
        }
    }

    /// Build an unpersisted asset from untrusted values.
    pub fn from_values(name: Value, asset_type: Value) -> Self {
        Self {
            id: None,
            name,
            asset_type,
        }
    }

    pub fn with_id(self, id: DbId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    pub fn with_name(self, name: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    pub fn with_asset_type(self, asset_type: impl Into<Value>) -> Self {
        Self {
            asset_type: asset_type.into(),
            ..self
        }
    }

    pub fn id(&self) -> Option<DbId> {
        self.id
    }

    /// The name, if it is a string.
    pub fn name(&self) -> Option<&str> {
        self.name.as_str()
    }

    pub fn name_value(&self) -> &Value {
        &self.name
    }

    /// Decode the type field.
    pub fn asset_type(&self) -> Result<AssetType, UnknownEnumValue> {
        AssetType::from_value(&self.asset_type)
    }

    pub fn asset_type_value(&self) -> &Value {
        &self.asset_type
    }

    /// `name (type)` as shown in logs and CLI output.
    pub fn label(&self) -> String {
        format!(
            "{} ({})",
            display_value(&self.name),
            display_value(&self.asset_type)
        )
    }
}

/// Strings render bare, everything else as JSON.
pub(crate) fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_asset_has_no_id() {
        let asset = Asset::new("coraline", AssetType::Character);
        assert_eq!(asset.id(), None);
        assert_eq!(asset.name(), Some("coraline"));
        assert_eq!(asset.asset_type(), Ok(AssetType::Character));
    }

    #[test]
    fn with_id_keeps_other_fields() {
        let asset = Asset::new("coraline", AssetType::Character).with_id(7);
        assert_eq!(asset.id(), Some(7));
        assert_eq!(asset.label(), "coraline (character)");
    }

    #[test]
    fn untrusted_fields_are_preserved() {
        let asset = Asset::new("coraline", AssetType::Character)
            .with_name(Value::Null)
            .with_asset_type(1);
        assert_eq!(asset.name(), None);
        assert_eq!(asset.name_value(), &Value::Null);
        assert!(asset.asset_type().is_err());
        assert_eq!(asset.label(), "null (1)");
    }

    #[test]
    fn serializes_type_under_wire_name() {
        let asset = Asset::new("wybie", AssetType::Character).with_id(3);
        assert_eq!(
            serde_json::to_value(&asset).unwrap(),
            json!({"id": 3, "name": "wybie", "type": "character"})
        );
    }
}
