use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use ivory_build::{BuildConfig, LogProgress};

use crate::CliError;

pub(crate) fn run_build(config: &BuildConfig) -> Result<(), CliError> {
    let summary = ivory_build::run(config, &LogProgress)?;

    crate::log_blank();
    super::print_summary(&summary.outputs);
    crate::log_blank();
    log::info!(
        "{} Catalogs written to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        config
            .output_dir
            .display()
            .if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}
