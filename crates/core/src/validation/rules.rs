//! Validation rule and error types.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// A validation rule for subjects of type `T`.
///
/// An empty result means the subject passed.
pub trait Rule<T>: Send + Sync {
    /// Rule identifier used in diagnostics.
    fn name(&self) -> &'static str;

    fn validate(&self, subject: &T) -> Vec<ValidationError>;
}

/// Null and the empty string count as absent.
pub(crate) fn is_missing(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// One error when `failed`, none otherwise.
pub(crate) fn check(failed: bool, field: &str, message: &str) -> Vec<ValidationError> {
    if failed {
        vec![ValidationError::new(field, message)]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_covers_null_and_empty_string() {
        assert!(is_missing(&Value::Null));
        assert!(is_missing(&json!("")));
        assert!(!is_missing(&json!("coraline")));
        assert!(!is_missing(&json!(0)));
        assert!(!is_missing(&json!(false)));
    }

    #[test]
    fn display_prefixes_field() {
        let error = ValidationError::new("name", "Asset must define a valid name");
        assert_eq!(error.to_string(), "name: Asset must define a valid name");
    }
}
