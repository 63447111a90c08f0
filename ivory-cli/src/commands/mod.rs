pub(crate) mod build;
pub(crate) mod config;
pub(crate) mod items;
pub(crate) mod sets;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use ivory_build::OutputSummary;

/// Print one row per written file with its entity counts.
pub(crate) fn print_summary(outputs: &[OutputSummary]) {
    log::info!(
        "  {:<16} {:>7} {:>7} {:>7}",
        "File".if_supports_color(Stdout, |t| t.bold()),
        "Total",
        "New",
        "Changed",
    );
    for output in outputs {
        log::info!(
            "  {:<16} {:>7} {:>7} {:>7}",
            output.file.if_supports_color(Stdout, |t| t.cyan()),
            output.total,
            if output.new > 0 {
                output.new.if_supports_color(Stdout, |t| t.green()).to_string()
            } else {
                output.new.to_string()
            },
            if output.changed > 0 {
                output
                    .changed
                    .if_supports_color(Stdout, |t| t.yellow())
                    .to_string()
            } else {
                output.changed.to_string()
            },
        );
    }
}
