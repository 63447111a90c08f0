//! ivory CLI
//!
//! Command-line interface for building the item database JSON from client data.

mod cli_types;
mod commands;
mod error;

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use log::{Level, LevelFilter};

use ivory_build::{BuildConfig, ConfigOverrides};

use crate::cli_types::{Cli, Commands};
pub(crate) use crate::error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    let result = match cli.command {
        Commands::Build { paths } => {
            resolve_config(cli.root, paths.into()).and_then(|c| commands::build::run_build(&c))
        }
        Commands::Items { paths } => {
            resolve_config(cli.root, paths.into()).and_then(|c| commands::items::run_items(&c))
        }
        Commands::Sets { item, paths } => resolve_config(cli.root, paths.into())
            .and_then(|c| commands::sets::run_sets(&c, item)),
        Commands::Config { paths } => {
            resolve_config(cli.root, paths.into()).and_then(|c| commands::config::run_config(&c))
        }
    };

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

/// Install the logger. `RUST_LOG` overrides the level picked by the flags.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .target(env_logger::Target::Stdout)
        .parse_default_env();

    if verbose {
        builder.format_timestamp_millis();
    } else {
        builder.format(|buf, record| match record.level() {
            Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "{}: {}", level, record.args()),
        });
    }
    builder.init();
}

fn resolve_config(
    root: Option<PathBuf>,
    overrides: ConfigOverrides,
) -> Result<BuildConfig, CliError> {
    let root = match root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };
    let config = BuildConfig::resolve(&root, overrides)?;
    log::debug!("Client data:   {}", config.client_dir.display());
    log::debug!("Baseline data: {}", config.original_dir.display());
    log::debug!("Output:        {}", config.output_dir.display());
    Ok(config)
}

/// Log an empty line at info level.
pub(crate) fn log_blank() {
    log::info!("");
}
