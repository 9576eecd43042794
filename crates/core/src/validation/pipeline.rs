//! Ordered, immutable rule collections and the default pipelines.

use std::fmt;
use std::sync::Arc;

use crate::assets::{Asset, AssetVersion};
use crate::validation::asset_rules::{
    AssetNameIsRequired, AssetNameIsString, AssetTypeIsKnown, AssetTypeIsRequired,
};
use crate::validation::rules::{Rule, ValidationError};
use crate::validation::version_rules::{
    DepartmentIsRequired, DepartmentIsString, StatusIsKnown, VersionIsAtLeastOne,
};

/// A fixed sequence of rules for subjects of type `T`.
///
/// The rule list cannot change after construction. Cloning shares it.
pub struct ValidationPipeline<T> {
    rules: Arc<[Box<dyn Rule<T>>]>,
}

impl<T> ValidationPipeline<T> {
    pub fn new(rules: Vec<Box<dyn Rule<T>>>) -> Self {
        Self {
            rules: rules.into(),
        }
    }

    pub fn rules(&self) -> &[Box<dyn Rule<T>>] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule and collect all errors in rule order.
    pub fn validate(&self, subject: &T) -> Vec<ValidationError> {
        self.rules
            .iter()
            .flat_map(|rule| rule.validate(subject))
            .collect()
    }
}

impl<T> Clone for ValidationPipeline<T> {
    fn clone(&self) -> Self {
        Self {
            rules: Arc::clone(&self.rules),
        }
    }
}

impl<T> Default for ValidationPipeline<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> fmt::Debug for ValidationPipeline<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.rules.iter().map(|rule| rule.name()))
            .finish()
    }
}

/// Name presence, name type, type presence, type membership.
pub fn build_default_asset_pipeline() -> ValidationPipeline<Asset> {
    let rules: Vec<Box<dyn Rule<Asset>>> = vec![
        Box::new(AssetNameIsRequired),
        Box::new(AssetNameIsString),
        Box::new(AssetTypeIsRequired),
        Box::new(AssetTypeIsKnown),
    ];
    ValidationPipeline::new(rules)
}

/// Department presence, department type, version floor, status membership.
pub fn build_default_asset_version_pipeline() -> ValidationPipeline<AssetVersion> {
    let rules: Vec<Box<dyn Rule<AssetVersion>>> = vec![
        Box::new(DepartmentIsRequired),
        Box::new(DepartmentIsString),
        Box::new(VersionIsAtLeastOne),
        Box::new(StatusIsKnown),
    ];
    ValidationPipeline::new(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{AssetType, VersionStatus};
    use serde_json::Value;

    fn fields(errors: &[ValidationError]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn default_asset_pipeline_has_four_rules() {
        let pipeline = build_default_asset_pipeline();
        assert_eq!(pipeline.len(), 4);
        assert_eq!(
            format!("{pipeline:?}"),
            "[\"asset_name_is_required\", \"asset_name_is_string\", \
             \"asset_type_is_required\", \"asset_type_is_known\"]"
        );
    }

    #[test]
    fn asset_pipeline_reports_every_error() {
        let pipeline = build_default_asset_pipeline();
        let asset = Asset::new("coraline", AssetType::Character);
        assert!(pipeline.validate(&asset).is_empty());

        let broken = asset.with_name(Value::Null).with_asset_type(1);
        let errors = pipeline.validate(&broken);
        assert_eq!(errors.len(), 3);
        assert_eq!(fields(&errors), ["name", "name", "type"]);
    }

    #[test]
    fn default_version_pipeline_reports_every_error() {
        let pipeline = build_default_asset_version_pipeline();
        assert_eq!(pipeline.len(), 4);

        let version = AssetVersion::new(Some(1), "animation", None, VersionStatus::Inactive);
        assert!(pipeline.validate(&version).is_empty());

        let broken = version.with_version(Some(0)).with_department(1);
        let errors = pipeline.validate(&broken);
        assert_eq!(fields(&errors), ["department", "version"]);
    }

    #[test]
    fn empty_pipeline_passes_anything() {
        let pipeline = ValidationPipeline::<Asset>::default();
        assert!(pipeline.is_empty());
        let asset = Asset::from_values(Value::Null, Value::Null);
        assert!(pipeline.validate(&asset).is_empty());
    }

    #[test]
    fn clones_share_rules() {
        let pipeline = build_default_asset_pipeline();
        let copy = pipeline.clone();
        assert!(std::ptr::eq(pipeline.rules(), copy.rules()));
    }
}
