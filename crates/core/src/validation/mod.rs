//! Rule-based validation run before every write.
//!
//! A [`Rule`] checks one contract on one field. A [`ValidationPipeline`]
//! runs an ordered, fixed set of rules and reports every violation rather
//! than stopping at the first one.

pub mod asset_rules;
pub mod pipeline;
pub mod rules;
pub mod version_rules;

pub use pipeline::{
    build_default_asset_pipeline, build_default_asset_version_pipeline, ValidationPipeline,
};
pub use rules::{Rule, ValidationError};
