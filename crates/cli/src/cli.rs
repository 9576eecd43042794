use std::path::PathBuf;

use clap::{Parser, Subcommand};
use otherworld_core::assets::{AssetType, VersionStatus};

use crate::config::DEFAULT_DATABASE_URL;

/// Other World Asset Service - asset and asset version management
#[derive(Parser, Debug)]
#[command(name = "otherworld")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Database connection URL (`sqlite::memory:` for a throwaway database)
    #[arg(
        long,
        global = true,
        env = "DATABASE_URL",
        default_value = DEFAULT_DATABASE_URL
    )]
    pub database_url: String,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load assets and versions from a JSON file
    Load {
        /// Path to the JSON file
        file: PathBuf,
    },

    /// Add an asset
    AddAsset {
        name: String,

        /// Asset type, by name or menu number (1-7)
        #[arg(value_parser = parse_asset_type)]
        asset_type: AssetType,
    },

    /// Add a version, creating the asset when it does not exist
    AddVersion {
        name: String,

        /// Asset type, by name or menu number (1-7)
        #[arg(value_parser = parse_asset_type)]
        asset_type: AssetType,

        department: String,

        /// Version number (next free number when omitted)
        #[arg(long)]
        version: Option<i64>,

        /// Version status, by name or menu number (1-2)
        #[arg(long, default_value = "inactive", value_parser = parse_version_status)]
        status: VersionStatus,
    },

    /// Show an asset
    GetAsset { name: String },

    /// Show one version of an asset
    GetVersion { name: String, version: i64 },

    /// List every asset
    ListAssets,

    /// List every version of an asset
    ListVersions { name: String },
}

/// Accept a wire value (`prop`) or its 1-based position in the type list.
fn parse_asset_type(input: &str) -> Result<AssetType, String> {
    let input = input.trim().to_lowercase();
    if let Some(asset_type) = by_position(&input, &AssetType::ALL) {
        return Ok(asset_type);
    }
    input.parse().map_err(|err| format!("{err}"))
}

fn parse_version_status(input: &str) -> Result<VersionStatus, String> {
    let input = input.trim().to_lowercase();
    if let Some(status) = by_position(&input, &VersionStatus::ALL) {
        return Ok(status);
    }
    input.parse().map_err(|err| format!("{err}"))
}

fn by_position<T: Copy>(input: &str, values: &[T]) -> Option<T> {
    let index: usize = input.trim_end_matches('.').parse().ok()?;
    index.checked_sub(1).and_then(|i| values.get(i)).copied()
}
