//! Default rules for [`AssetVersion`].

use crate::assets::{AssetVersion, VersionStatus};
use crate::validation::rules::{check, is_missing, Rule, ValidationError};

const DEPARTMENT: &str = "department";

/// The version must name a department.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepartmentIsRequired;

impl Rule<AssetVersion> for DepartmentIsRequired {
    fn name(&self) -> &'static str {
        "department_is_required"
    }

    fn validate(&self, version: &AssetVersion) -> Vec<ValidationError> {
        check(
            is_missing(version.department_value()),
            DEPARTMENT,
            "Asset version must define a valid department",
        )
    }
}

/// The department must be a string. Fires for a null department too.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepartmentIsString;

impl Rule<AssetVersion> for DepartmentIsString {
    fn name(&self) -> &'static str {
        "department_is_string"
    }

    fn validate(&self, version: &AssetVersion) -> Vec<ValidationError> {
        check(
            !version.department_value().is_string(),
            DEPARTMENT,
            "Asset version department must be a string",
        )
    }
}

/// A supplied version number must be at least 1.
///
/// An absent number passes: the write path allocates one after validation.
#[derive(Debug, Clone, Copy, Default)]
pub struct VersionIsAtLeastOne;

impl Rule<AssetVersion> for VersionIsAtLeastOne {
    fn name(&self) -> &'static str {
        "version_is_at_least_one"
    }

    fn validate(&self, version: &AssetVersion) -> Vec<ValidationError> {
        check(
            version.version().is_some_and(|number| number < 1),
            "version",
            "Asset version must be greater than or equal to 1",
        )
    }
}

/// The status must name a known [`VersionStatus`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusIsKnown;

impl Rule<AssetVersion> for StatusIsKnown {
    fn name(&self) -> &'static str {
        "status_is_known"
    }

    fn validate(&self, version: &AssetVersion) -> Vec<ValidationError> {
        match VersionStatus::from_value(version.status_value()) {
            Ok(_) => Vec::new(),
            Err(err) => vec![ValidationError::new(
                "status",
                format!("Asset version status must be one of: {}", err.expected),
            )],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn animation(version: Option<i64>) -> AssetVersion {
        AssetVersion::new(Some(1), "animation", version, VersionStatus::Active)
    }

    #[test]
    fn valid_version_passes_every_rule() {
        let version = animation(Some(1));
        assert!(DepartmentIsRequired.validate(&version).is_empty());
        assert!(DepartmentIsString.validate(&version).is_empty());
        assert!(VersionIsAtLeastOne.validate(&version).is_empty());
        assert!(StatusIsKnown.validate(&version).is_empty());
    }

    #[test]
    fn absent_version_number_is_tolerated() {
        assert!(VersionIsAtLeastOne.validate(&animation(None)).is_empty());
    }

    #[test]
    fn zero_and_negative_numbers_fail() {
        for number in [0, -1, i64::MIN] {
            let errors = VersionIsAtLeastOne.validate(&animation(Some(number)));
            assert_eq!(errors.len(), 1, "version {number} should fail");
            assert_eq!(errors[0].field, "version");
        }
    }

    #[test]
    fn empty_department_is_required() {
        let version = animation(Some(1)).with_department("");
        assert_eq!(DepartmentIsRequired.validate(&version).len(), 1);
        assert!(DepartmentIsString.validate(&version).is_empty());
    }

    #[test]
    fn null_department_fails_presence_and_type() {
        let version = animation(Some(1)).with_department(Value::Null);
        assert_eq!(DepartmentIsRequired.validate(&version).len(), 1);
        assert_eq!(DepartmentIsString.validate(&version).len(), 1);
    }

    #[test]
    fn unknown_status_is_rejected() {
        let version = animation(Some(1)).with_status("archived");
        let errors = StatusIsKnown.validate(&version);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "status");
    }

    #[test]
    fn non_string_status_is_rejected() {
        let version = animation(Some(1)).with_status(true);
        assert_eq!(StatusIsKnown.validate(&version).len(), 1);
    }
}
