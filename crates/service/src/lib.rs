//! The asset service: the only write path into storage.
//!
//! Every write runs the validation pipelines first and reports expected
//! business outcomes (invalid input, duplicates) as a [`WriteOutcome`]
//! rather than an error.

pub mod error;
pub mod importer;
pub mod outcome;
pub mod service;

pub use error::ServiceError;
pub use importer::ImportSummary;
pub use outcome::WriteOutcome;
pub use service::AssetService;
