use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use ivory_build::{BuildConfig, LogProgress};
use ivory_catalog::{ArmorSet, item_path, sets_containing};

use crate::CliError;

pub(crate) fn run_sets(config: &BuildConfig, item: Option<i64>) -> Result<(), CliError> {
    let sets = ivory_build::run_sets_from_outputs(config, &LogProgress)?;

    let shown: Vec<&ArmorSet> = match item {
        Some(id) => sets_containing(&sets, id),
        None => sets.iter().collect(),
    };

    if let Some(id) = item {
        crate::log_blank();
        if shown.is_empty() {
            log::info!("No set contains object {}", id);
            return Ok(());
        }
        log::info!("Sets containing object {}:", id);
    }

    for set in shown {
        crate::log_blank();
        print_set(set);
    }
    Ok(())
}

fn print_set(set: &ArmorSet) {
    log::info!(
        "{} [{}] {} / {}",
        set.name.if_supports_color(Stdout, |t| t.bold()),
        set.id,
        set.armor_type.if_supports_color(Stdout, |t| t.cyan()),
        set.grade,
    );
    if !set.set_bonus.is_empty() {
        log::info!("  Bonus: {}", set.set_bonus);
    }
    log::info!(
        "  P. Def. {}  Price {}",
        set.total_physical_defense(),
        set.total_base_price(),
    );
    for slot in &set.items {
        match slot {
            Some(member) => log::info!(
                "    {} {}",
                member.display_name().or(member.object_name()).unwrap_or("?"),
                item_path(member)
                    .unwrap_or_default()
                    .if_supports_color(Stdout, |t| t.dimmed()),
            ),
            None => log::info!(
                "    {}",
                "(unresolved)".if_supports_color(Stdout, |t| t.red()),
            ),
        }
    }
}
