//! Row structs and insert DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` struct matching the database row, convertible into the
//!   core entity
//! - A borrowed insert DTO decoded from the core entity before writing

pub mod asset;
pub mod asset_version;
