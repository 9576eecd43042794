//! Default rules for [`Asset`].

use crate::assets::{Asset, AssetType};
use crate::validation::rules::{check, is_missing, Rule, ValidationError};

const NAME: &str = "name";
const TYPE: &str = "type";

/// The asset must have a non-empty name.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssetNameIsRequired;

impl Rule<Asset> for AssetNameIsRequired {
    fn name(&self) -> &'static str {
        "asset_name_is_required"
    }

    fn validate(&self, asset: &Asset) -> Vec<ValidationError> {
        check(
            is_missing(asset.name_value()),
            NAME,
            "Asset must define a valid name",
        )
    }
}

/// The asset name must be a string. Fires for a null name too.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssetNameIsString;

impl Rule<Asset> for AssetNameIsString {
    fn name(&self) -> &'static str {
        "asset_name_is_string"
    }

    fn validate(&self, asset: &Asset) -> Vec<ValidationError> {
        check(
            !asset.name_value().is_string(),
            NAME,
            "Asset name must be a string",
        )
    }
}

/// The asset must have a type.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssetTypeIsRequired;

impl Rule<Asset> for AssetTypeIsRequired {
    fn name(&self) -> &'static str {
        "asset_type_is_required"
    }

    fn validate(&self, asset: &Asset) -> Vec<ValidationError> {
        check(
            is_missing(asset.asset_type_value()),
            TYPE,
            "Asset must define a valid type",
        )
    }
}

/// The asset type must name a known [`AssetType`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AssetTypeIsKnown;

impl Rule<Asset> for AssetTypeIsKnown {
    fn name(&self) -> &'static str {
        "asset_type_is_known"
    }

    fn validate(&self, asset: &Asset) -> Vec<ValidationError> {
        match AssetType::from_value(asset.asset_type_value()) {
            Ok(_) => Vec::new(),
            Err(err) => vec![ValidationError::new(
                TYPE,
                format!("Asset type must be one of: {}", err.expected),
            )],
        }
    }
}
