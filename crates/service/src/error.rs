use otherworld_db::DbError;

/// Failures that abort a service call.
///
/// Validation failures and uniqueness conflicts are not errors; they are
/// reported through [`WriteOutcome`](crate::WriteOutcome).
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// A storage failure, including precondition violations.
    #[error(transparent)]
    Db(#[from] DbError),

    /// The import file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The import file is not a JSON array.
    #[error("Invalid import file {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ServiceError {
    /// True for caller-ordering bugs such as versioning an unpersisted asset.
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::Db(DbError::Precondition(_)))
    }
}
