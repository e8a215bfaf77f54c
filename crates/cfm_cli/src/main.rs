//! `cfm` command-line entry point.
//!
//! # Responsibility
//! - Expose header inspection, linting and rendering for local files.
//! - Keep a deterministic smoke probe of `cfm_core` linkage (`cfm version`).

mod cli;
mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let output = execute(&Cli::parse())?;
    println!("{}", output.trim_end());
    Ok(())
}

/// Starts logging when a log directory is configured, then runs the command.
fn execute(cli: &Cli) -> Result<String> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli
            .log_level
            .as_deref()
            .unwrap_or(cfm_core::default_log_level());
        cfm_core::init_logging(level, log_dir)
            .map_err(anyhow::Error::msg)
            .context("failed to initialize logging")?;
    }

    let output = match &cli.command {
        Commands::Inspect(file) => commands::inspect(file)?,
        Commands::Check {
            file,
            deny_warnings,
        } => commands::check(file, *deny_warnings)?,
        Commands::Render { file, style } => commands::render_header(file, *style)?,
        Commands::Demo(args) => commands::demo(args)?,
        Commands::Version => commands::version(),
    };
    Ok(output)
}
