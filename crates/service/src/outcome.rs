use otherworld_core::validation::ValidationError;

/// The non-exceptional result of a service write.
#[derive(Debug, Clone, PartialEq)]
pub enum WriteOutcome<T> {
    /// The entity was validated and persisted.
    Created(T),
    /// An equal entity already existed and was returned instead.
    Existing(T),
    /// Validation failed; nothing was written.
    Invalid(Vec<ValidationError>),
    /// Storage rejected the write on a uniqueness key.
    Conflict(String),
}

impl<T> WriteOutcome<T> {
    /// The persisted entity, whether newly created or already present.
    pub fn into_inner(self) -> Option<T> {
        match self {
            Self::Created(value) | Self::Existing(value) => Some(value),
            Self::Invalid(_) | Self::Conflict(_) => None,
        }
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Created(value) | Self::Existing(value) => Some(value),
            Self::Invalid(_) | Self::Conflict(_) => None,
        }
    }

    pub fn is_stored(&self) -> bool {
        self.as_ref().is_some()
    }

    /// Validation errors, empty unless the outcome is `Invalid`.
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            Self::Invalid(errors) => errors,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_and_existing_are_stored() {
        assert_eq!(WriteOutcome::Created(1).into_inner(), Some(1));
        assert_eq!(WriteOutcome::Existing(2).into_inner(), Some(2));
        assert!(WriteOutcome::Existing(2).errors().is_empty());
    }

    #[test]
    fn invalid_exposes_errors() {
        let outcome: WriteOutcome<i32> =
            WriteOutcome::Invalid(vec![ValidationError::new("name", "missing")]);
        assert!(!outcome.is_stored());
        assert_eq!(outcome.errors().len(), 1);
        assert_eq!(outcome.into_inner(), None);
    }

    #[test]
    fn conflict_is_not_stored() {
        let outcome: WriteOutcome<i32> = WriteOutcome::Conflict("duplicate".into());
        assert!(!outcome.is_stored());
        assert!(outcome.errors().is_empty());
    }
}
