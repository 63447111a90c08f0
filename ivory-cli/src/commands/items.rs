use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use ivory_build::{BuildConfig, LogProgress};
use ivory_catalog::group_skill_levels;

use crate::CliError;

pub(crate) fn run_items(config: &BuildConfig) -> Result<(), CliError> {
    let catalogs = ivory_build::run_client(config, &LogProgress)?;

    crate::log_blank();
    super::print_summary(&catalogs.summaries());

    let groups = group_skill_levels(&catalogs.skills);
    let touched = groups.iter().filter(|g| g.any_changed()).count();
    crate::log_blank();
    log::info!(
        "  {} skills ({} levels), {} new or changed",
        groups.len().if_supports_color(Stdout, |t| t.bold()),
        catalogs.skills.len(),
        touched,
    );
    Ok(())
}
