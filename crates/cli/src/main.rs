//! Other World Asset Service CLI
//!
//! Usage: otherworld [--database-url <URL>] <COMMAND>
//!
//! Commands:
//!   load           Load assets and versions from a JSON file
//!   add-asset      Add an asset
//!   add-version    Add a version, creating the asset when missing
//!   get-asset      Show an asset
//!   get-version    Show one version of an asset
//!   list-assets    List every asset
//!   list-versions  List every version of an asset

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use otherworld_core::assets::{Asset, AssetVersion};
use otherworld_service::{AssetService, WriteOutcome};
use tracing::instrument::WithSubscriber;
use tracing::Dispatch;
use tracing_subscriber::layer::SubscriberExt;

mod cli;
mod config;
mod output;

use cli::{Cli, Commands};
use config::CliConfig;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CliConfig::from_cli(&cli);
    let dispatch = build_dispatch(&config);

    let service = AssetService::open(&config.database_url)
        .with_subscriber(dispatch.clone())
        .await
        .with_context(|| format!("Failed to open database {}", config.database_url))?
        .with_dispatch(dispatch);

    let result = run(&service, cli.command).await;
    service.close().await;

    let ok = result?;
    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Logs go to stderr; stdout carries command output only.
fn build_dispatch(config: &CliConfig) -> Dispatch {
    let registry = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter));
    let fmt = tracing_subscriber::fmt::layer().with_writer(io::stderr);
    if config.log_json {
        Dispatch::new(registry.with(fmt.json()))
    } else {
        Dispatch::new(registry.with(fmt))
    }
}

/// Execute one command. Returns false when the command ran but did not
/// achieve its effect (nothing found, invalid input, conflict).
async fn run(service: &AssetService, command: Commands) -> Result<bool> {
    let mut out = io::stdout().lock();

    match command {
        Commands::Load { file } => {
            let summary = service
                .load_assets(&file)
                .await
                .with_context(|| format!("Error loading assets from {}", file.display()))?;
            output::write_summary(&mut out, &summary)?;
            Ok(true)
        }

        Commands::AddAsset { name, asset_type } => {
            let asset = Asset::new(normalize(&name), asset_type);
            let outcome = service
                .add_asset(&asset)
                .await
                .context("Error adding the asset")?;
            Ok(output::write_outcome(&mut out, "asset", &outcome, Asset::label)?)
        }

        Commands::AddVersion {
            name,
            asset_type,
            department,
            version,
            status,
        } => {
            let name = normalize(&name);
            let asset = match service.get_asset(&name).await? {
                Some(asset) => asset,
                None => {
                    let outcome = service
                        .add_asset(&Asset::new(name.as_str(), asset_type))
                        .await
                        .context("Error adding the asset")?;
                    match outcome {
                        WriteOutcome::Created(asset) | WriteOutcome::Existing(asset) => asset,
                        other => {
                            output::write_outcome(&mut out, "asset", &other, Asset::label)?;
                            return Ok(false);
                        }
                    }
                }
            };

            let version = AssetVersion::new(asset.id(), normalize(&department), version, status);
            let outcome = service
                .add_asset_version(&asset, &version)
                .await
                .context("Error adding the asset version")?;
            if let Some(stored) = outcome.as_ref() {
                output::write_asset(&mut out, &asset)?;
                output::write_version(&mut out, stored)?;
                return Ok(true);
            }
            Ok(output::write_outcome(&mut out, "asset version", &outcome, AssetVersion::label)?)
        }

        Commands::GetAsset { name } => {
            let name = normalize(&name);
            match service.get_asset(&name).await.context("Error getting asset")? {
                Some(asset) => {
                    output::write_asset(&mut out, &asset)?;
                    Ok(true)
                }
                None => not_found(&mut out, &name),
            }
        }

        Commands::GetVersion { name, version } => {
            let name = normalize(&name);
            let Some(asset) = service.get_asset(&name).await? else {
                return not_found(&mut out, &name);
            };
            match service
                .get_version_of(&asset, version)
                .await
                .context("Error getting asset version")?
            {
                Some(found) => {
                    output::write_asset(&mut out, &asset)?;
                    output::write_version(&mut out, &found)?;
                    Ok(true)
                }
                None => {
                    writeln!(out, "Could not find version {version} for {name}")?;
                    Ok(false)
                }
            }
        }

        Commands::ListAssets => {
            for asset in service.list_assets().await? {
                output::write_asset(&mut out, &asset)?;
            }
            Ok(true)
        }

        Commands::ListVersions { name } => {
            let name = normalize(&name);
            let Some(asset) = service.get_asset(&name).await? else {
                return not_found(&mut out, &name);
            };
            output::write_asset(&mut out, &asset)?;
            for version in service.list_versions_of(&asset).await? {
                writeln!(out)?;
                output::write_version(&mut out, &version)?;
            }
            Ok(true)
        }
    }
}

fn not_found(out: &mut impl Write, name: &str) -> Result<bool> {
    writeln!(out, "Could not find an asset for {name}")?;
    Ok(false)
}

/// Names and departments are stored trimmed and lowercase.
fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}
