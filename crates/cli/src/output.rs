//! Plain-text rendering of service results.

use std::io::{self, Write};

use otherworld_core::assets::{Asset, AssetVersion};
use otherworld_service::{ImportSummary, WriteOutcome};

fn text(value: Option<&str>) -> &str {
    value.unwrap_or("<none>")
}

pub fn write_asset(out: &mut impl Write, asset: &Asset) -> io::Result<()> {
    writeln!(out, "Asset Name: {}", asset.label())
}

pub fn write_version(out: &mut impl Write, version: &AssetVersion) -> io::Result<()> {
    writeln!(out, "Department: {}", text(version.department()))?;
    match version.version() {
        Some(number) => writeln!(out, "Version Number: {number}")?,
        None => writeln!(out, "Version Number: <unassigned>")?,
    }
    match version.status() {
        Ok(status) => writeln!(out, "Status: {status}"),
        Err(_) => writeln!(out, "Status: <invalid>"),
    }
}

/// Report a write. Returns whether the entity is now stored.
pub fn write_outcome<T>(
    out: &mut impl Write,
    what: &str,
    outcome: &WriteOutcome<T>,
    describe: impl Fn(&T) -> String,
) -> io::Result<bool> {
    match outcome {
        WriteOutcome::Created(value) => writeln!(out, "Added {what}: {}", describe(value))?,
        WriteOutcome::Existing(value) => {
            writeln!(out, "The {what} already exists: {}", describe(value))?
        }
        WriteOutcome::Invalid(errors) => {
            writeln!(out, "Could not add the {what}:")?;
            for error in errors {
                writeln!(out, "  {error}")?;
            }
        }
        WriteOutcome::Conflict(message) => {
            writeln!(out, "Could not add the {what}: {message}")?
        }
    }
    Ok(outcome.is_stored())
}

pub fn write_summary(out: &mut impl Write, summary: &ImportSummary) -> io::Result<()> {
    writeln!(
        out,
        "Loaded {} records: {} assets added, {} versions added, {} skipped",
        summary.records, summary.assets_stored, summary.versions_stored, summary.skipped
    )
}
