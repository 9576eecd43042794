/// All database primary keys are SQLite `INTEGER` rowids.
pub type DbId = i64;

/// Asset version numbers. Valid numbers are `>= 1`.
pub type VersionNumber = i64;
