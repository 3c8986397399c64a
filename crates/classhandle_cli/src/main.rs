//! `classhandle` entry point.
//!
//! Resolves configuration, starts logging, loads the store and runs one
//! command against it.

use anyhow::Context;
use clap::Parser;
use classhandle_core::{core_version, init_logging, ClassService, JsonFileRepository};
use cli::Cli;
use config::AppConfig;
use log::info;
use std::process::ExitCode;

mod cli;
mod commands;
mod config;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::resolve(&cli)?;
    init_logging(&config.log_level, &config.log_dir).context("Failed to start logging")?;
    info!(
        "event=cli_start module=cli status=ok core_version={} data_file={}",
        core_version(),
        config.data_file.display()
    );

    let mut service = ClassService::open(JsonFileRepository::new(&config.data_file));
    let mut stdout = std::io::stdout().lock();
    commands::dispatch(&mut service, cli.command, &mut stdout)
}
