//! Runtime configuration for the CLI.
//!
//! Precedence: command-line flag, then environment variable (both handled by
//! clap), then the defaults below.

use crate::cli::Cli;
use anyhow::Context;
use classhandle_core::default_log_level;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = "class_data_v2.json";
const DEFAULT_LOG_DIR_NAME: &str = "classhandle-logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_file: PathBuf,
    pub log_level: String,
    /// Always absolute.
    pub log_dir: PathBuf,
}

impl AppConfig {
    pub fn resolve(cli: &Cli) -> anyhow::Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read working directory")?;
        Ok(Self::resolve_in(cli, &cwd))
    }

    fn resolve_in(cli: &Cli, cwd: &Path) -> Self {
        let data_file = cli
            .data_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));
        let log_level = cli
            .log_level
            .clone()
            .unwrap_or_else(|| default_log_level().to_string());
        let log_dir = match &cli.log_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => cwd.join(dir),
            None => std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME),
        };

        Self {
            data_file,
            log_level,
            log_dir,
        }
    }
}
