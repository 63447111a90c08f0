//! Build pipeline for the Tower of Ivory item database.
//!
//! Reads client data text files (current and baseline releases), the pricing
//! table, and the set definitions, then writes the JSON catalogs the site
//! serves. Missing inputs read as empty; only write failures and malformed
//! JSON/TOML abort a run.

pub mod armorsets;
pub mod config;
pub mod error;
pub mod items;
pub mod pipeline;
pub mod pricing;
pub mod progress;
pub mod skills;
pub mod source;

pub use armorsets::compose_sets;
pub use config::{BuildConfig, CONFIG_FILE, ConfigOverrides};
pub use error::BuildError;
pub use items::{NameTables, build_items};
pub use pipeline::{
    BuildSummary, ClientCatalogs, OutputSummary, run, run_client, run_sets, run_sets_from_outputs,
};
pub use pricing::{PriceEntry, PriceTable};
pub use progress::{BuildProgress, LogProgress, SilentProgress};
pub use skills::build_skills;
