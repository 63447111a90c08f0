use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use ivory_build::{BuildConfig, CONFIG_FILE};

use crate::CliError;

/// Print the configuration after flags, `ivory.toml` and defaults are merged.
pub(crate) fn run_config(config: &BuildConfig) -> Result<(), CliError> {
    let rendered = toml::to_string_pretty(config)
        .map_err(|e| CliError::config(format!("Failed to render configuration: {}", e)))?;

    log::info!(
        "{}",
        "Resolved configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  (flags, then {}, then defaults)", CONFIG_FILE);
    crate::log_blank();
    for line in rendered.lines() {
        log::info!("{}", line);
    }
    Ok(())
}
