//! Pure domain logic for the asset service: identifiers, asset and version
//! value types, and the rule-based validation pipelines. No database access.

pub mod assets;
pub mod error;
pub mod types;
pub mod validation;
