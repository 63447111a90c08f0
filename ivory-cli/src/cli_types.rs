//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use ivory_build::ConfigOverrides;

#[derive(Parser)]
#[command(name = "ivory")]
#[command(about = "Build the Tower of Ivory item database from client data", long_about = None)]
pub(crate) struct Cli {
    /// Root directory holding data/ and ivory.toml (defaults to current directory)
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Path overrides shared by every command that touches data files.
#[derive(Args, Clone, Default)]
pub(crate) struct PathArgs {
    /// Directory of the current client data files
    #[arg(long)]
    pub client_dir: Option<PathBuf>,

    /// Directory of the baseline client data files
    #[arg(long)]
    pub original_dir: Option<PathBuf>,

    /// Set definitions file
    #[arg(long)]
    pub sets: Option<PathBuf>,

    /// Pricing table file
    #[arg(long)]
    pub itemdata: Option<PathBuf>,

    /// Directory the JSON catalogs are written to
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

impl From<PathArgs> for ConfigOverrides {
    fn from(args: PathArgs) -> Self {
        Self {
            client_dir: args.client_dir,
            original_dir: args.original_dir,
            sets: args.sets,
            itemdata: args.itemdata,
            output_dir: args.output_dir,
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Build every catalog, then compose armor sets
    Build {
        #[command(flatten)]
        paths: PathArgs,
    },

    /// Build item and skill catalogs only
    Items {
        #[command(flatten)]
        paths: PathArgs,
    },

    /// Compose armor sets from the catalogs already in the output directory
    Sets {
        /// Only list sets containing this object id
        #[arg(long)]
        item: Option<i64>,

        #[command(flatten)]
        paths: PathArgs,
    },

    /// Show the resolved configuration
    Config {
        #[command(flatten)]
        paths: PathArgs,
    },
}
