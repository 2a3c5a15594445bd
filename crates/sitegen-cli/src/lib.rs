//! sitegen CLI - convert URL priority lists to and from XML sitemaps
//!
//! The binary is a thin wrapper around [`run`]; command implementations live
//! in their own modules and all conversion logic is in `sitegen-core`.

use anyhow::Result;
use clap::Parser;
use sitegen_core::Config;
use std::path::Path;
use std::process::ExitCode;
use tracing::debug;

mod cli;
mod commands;
pub mod error;
mod utils;

use crate::cli::{Cli, Commands};
use crate::error::{ErrorCategory, exit_code_from_error};
use crate::utils::{initialize_logging, print_error, print_summary};

/// Execute the sitegen CLI with the current process arguments.
///
/// Returns the exit status: 0 on success, 2 for usage errors, and the
/// category codes documented in [`error`] otherwise.
pub fn run() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version also arrive here and are not failures
            let _ = err.print();
            return if err.use_stderr() {
                ErrorCategory::Usage.as_exit_code()
            } else {
                ExitCode::SUCCESS
            };
        },
    };

    if let Err(err) = initialize_logging(&cli) {
        print_error(&err);
        return ErrorCategory::Internal.as_exit_code();
    }

    match execute_command(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(error = ?err, "command failed");
            print_error(&err);
            ExitCode::from(exit_code_from_error(&err))
        },
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    Ok(match path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    })
}

fn execute_command(cli: &Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    let summary = match &cli.command {
        Commands::Generate { input, output } => {
            commands::generate_sitemap(&config, input, output.as_deref())?
        },
        Commands::Parse { input, output } => {
            commands::parse_sitemap(&config, input, output.as_deref())?
        },
        Commands::Add {
            input,
            sitemap,
            output,
        } => commands::add_urls(&config, input, sitemap, output.as_deref())?,
    };

    print_summary(&summary, cli.quiet);
    Ok(())
}
