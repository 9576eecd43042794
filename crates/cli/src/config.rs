//! Runtime configuration for the `otherworld` binary.
//!
//! Sources, in priority order:
//! 1. CLI flags
//! 2. Environment variables (`DATABASE_URL`, `RUST_LOG`), including a `.env` file
//! 3. Built-in defaults

use crate::cli::Cli;

/// A database file in the working directory, created on first use.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://otherworld.db";

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "otherworld=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub database_url: String,
    pub log_filter: String,
    pub log_json: bool,
}

impl CliConfig {
    /// Merge parsed flags with the environment.
    ///
    /// `-v` and `-vv` raise the default filter to debug and trace; an explicit
    /// `RUST_LOG` always wins.
    pub fn from_cli(cli: &Cli) -> Self {
        let log_filter = std::env::var("RUST_LOG")
            .ok()
            .filter(|filter| !filter.trim().is_empty())
            .unwrap_or_else(|| default_log_filter(cli.verbose));

        Self {
            database_url: cli.database_url.clone(),
            log_filter,
            log_json: cli.log_json,
        }
    }
}

fn default_log_filter(verbose: u8) -> String {
    match verbose {
        0 => DEFAULT_LOG_FILTER.to_string(),
        1 => "otherworld=debug".to_string(),
        _ => "otherworld=trace,sqlx=debug".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_default_filter() {
        assert_eq!(default_log_filter(0), "otherworld=info");
        assert_eq!(default_log_filter(1), "otherworld=debug");
        assert_eq!(default_log_filter(3), "otherworld=trace,sqlx=debug");
    }
}
