//! Storage error types.

use otherworld_core::error::UnknownEnumValue;

/// Errors raised by [`Storage`](crate::Storage) operations.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// An insert collided with a `UNIQUE` constraint.
    #[error("Uniqueness violation: {0}")]
    UniqueViolation(String),

    /// The caller asked for something structurally impossible, such as a
    /// version for an asset that has not been persisted.
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// No version number is left to allocate for the asset.
    #[error("Version numbers exhausted: {0}")]
    Exhausted(String),

    /// A value could not be converted to or from its column representation.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Any other database failure.
    #[error("Database error: {0}")]
    Sqlx(sqlx::Error),
}

impl DbError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, Self::UniqueViolation(_))
    }
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                DbError::UniqueViolation(db_err.message().to_string())
            }
            other => DbError::Sqlx(other),
        }
    }
}

impl From<UnknownEnumValue> for DbError {
    fn from(err: UnknownEnumValue) -> Self {
        DbError::Decode(err.to_string())
    }
}
