//! Whole-run orchestration.
//!
//! A run has two phases, in order:
//!
//! 1. **Client**: item catalogs and skills from the client data files,
//!    written as `{category}.json` and `skills.json`.
//! 2. **Sets**: `armorsets.json` from the set definitions and the armor and
//!    weapon catalogs.
//!
//! Every output is rewritten in full on each run.

use ivory_catalog::{
    ArmorSet, EntitySnapshot, ITEM_NAME_COLUMNS, NameColumns, NameTable, SKILL_NAME_COLUMNS,
    SetDefinition, extract_records,
};

use crate::armorsets::compose_sets;
use crate::config::BuildConfig;
use crate::error::BuildError;
use crate::items::{ITEM_MARKER, ITEM_REQUIRED, NameTables, build_items};
use crate::pricing::PriceTable;
use crate::progress::BuildProgress;
use crate::skills::{SKILL_MARKER, SKILL_REQUIRED, build_skills};
use crate::source::{read_json, read_text, write_json};

pub const ITEM_NAMES_FILE: &str = "itemname-e.txt";
pub const SKILL_NAMES_FILE: &str = "skillname-e.txt";
pub const SKILL_DATA_FILE: &str = "skillgrp.txt";
pub const SKILLS_OUTPUT: &str = "skills.json";
pub const SETS_OUTPUT: &str = "armorsets.json";

/// Client data file of an item category, e.g. `weapongrp.txt`.
pub fn category_data_file(category: &str) -> String {
    format!("{category}grp.txt")
}

/// Output file of an item category, e.g. `weapon.json`.
pub fn category_output(category: &str) -> String {
    format!("{category}.json")
}

/// Entity counts for one written output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSummary {
    pub file: String,
    pub total: usize,
    pub new: usize,
    pub changed: usize,
}

impl OutputSummary {
    pub fn of(file: impl Into<String>, entities: &[EntitySnapshot]) -> Self {
        Self {
            file: file.into(),
            total: entities.len(),
            new: entities.iter().filter(|e| e.is_new).count(),
            changed: entities.iter().filter(|e| e.is_changed).count(),
        }
    }

    pub fn of_sets(file: impl Into<String>, sets: &[ArmorSet]) -> Self {
        Self {
            file: file.into(),
            total: sets.len(),
            new: 0,
            changed: 0,
        }
    }
}

/// Counts for every file a run wrote, in write order.
#[derive(Debug, Clone, Default)]
pub struct BuildSummary {
    pub outputs: Vec<OutputSummary>,
}

/// Catalogs produced by the client phase.
#[derive(Debug, Clone, Default)]
pub struct ClientCatalogs {
    /// One catalog per configured category, in configuration order.
    pub categories: Vec<(String, Vec<EntitySnapshot>)>,
    pub skills: Vec<EntitySnapshot>,
}

impl ClientCatalogs {
    pub fn category(&self, name: &str) -> &[EntitySnapshot] {
        self.categories
            .iter()
            .find(|(category, _)| category == name)
            .map(|(_, items)| items.as_slice())
            .unwrap_or(&[])
    }

    pub fn summaries(&self) -> Vec<OutputSummary> {
        self.categories
            .iter()
            .map(|(category, items)| OutputSummary::of(category_output(category), items))
            .chain(std::iter::once(OutputSummary::of(SKILLS_OUTPUT, &self.skills)))
            .collect()
    }
}

fn load_names(
    config: &BuildConfig,
    file: &str,
    columns: &NameColumns,
) -> Result<NameTables, BuildError> {
    Ok(NameTables {
        current: NameTable::parse(&read_text(&config.client_file(file))?, columns),
        original: NameTable::parse(&read_text(&config.original_file(file))?, columns),
    })
}

/// Build and write every item category and the skill catalog.
pub fn run_client(
    config: &BuildConfig,
    progress: &dyn BuildProgress,
) -> Result<ClientCatalogs, BuildError> {
    progress.on_phase("Building client catalogs");

    let prices = PriceTable::load(&config.itemdata)?;
    let item_names = load_names(config, ITEM_NAMES_FILE, &ITEM_NAME_COLUMNS)?;
    let mut catalogs = ClientCatalogs::default();

    for category in &config.categories {
        let file = category_data_file(category);
        let current = extract_records(
            &read_text(&config.client_file(&file))?,
            ITEM_MARKER,
            &ITEM_REQUIRED,
        );
        let original = extract_records(
            &read_text(&config.original_file(&file))?,
            ITEM_MARKER,
            &ITEM_REQUIRED,
        );

        let items = build_items(current, &original, &item_names, &prices);
        let output = category_output(category);
        write_json(&config.output_file(&output), &items)?;
        progress.on_output(&output, items.len());

        catalogs.categories.push((category.clone(), items));
    }

    let skill_names = load_names(config, SKILL_NAMES_FILE, &SKILL_NAME_COLUMNS)?;
    let current = extract_records(
        &read_text(&config.client_file(SKILL_DATA_FILE))?,
        SKILL_MARKER,
        &SKILL_REQUIRED,
    );
    let original = extract_records(
        &read_text(&config.original_file(SKILL_DATA_FILE))?,
        SKILL_MARKER,
        &SKILL_REQUIRED,
    );
    catalogs.skills = build_skills(current, &original, &skill_names);
    write_json(&config.output_file(SKILLS_OUTPUT), &catalogs.skills)?;
    progress.on_output(SKILLS_OUTPUT, catalogs.skills.len());

    Ok(catalogs)
}

/// Compose and write `armorsets.json` from in-memory catalogs.
pub fn run_sets(
    config: &BuildConfig,
    armor: &[EntitySnapshot],
    weapon: &[EntitySnapshot],
    progress: &dyn BuildProgress,
) -> Result<Vec<ArmorSet>, BuildError> {
    progress.on_phase("Composing armor sets");

    let definitions: Vec<SetDefinition> = read_json(&config.sets)?;
    let sets = compose_sets(&definitions, armor, weapon);
    write_json(&config.output_file(SETS_OUTPUT), &sets)?;
    progress.on_output(SETS_OUTPUT, sets.len());

    Ok(sets)
}

/// Compose armor sets from the `armor.json` and `weapon.json` already in
/// the output directory.
pub fn run_sets_from_outputs(
    config: &BuildConfig,
    progress: &dyn BuildProgress,
) -> Result<Vec<ArmorSet>, BuildError> {
    let armor: Vec<EntitySnapshot> = read_json(&config.output_file(&category_output("armor")))?;
    let weapon: Vec<EntitySnapshot> = read_json(&config.output_file(&category_output("weapon")))?;
    run_sets(config, &armor, &weapon, progress)
}

/// Run both phases.
pub fn run(config: &BuildConfig, progress: &dyn BuildProgress) -> Result<BuildSummary, BuildError> {
    let catalogs = run_client(config, progress)?;
    let sets = run_sets(
        config,
        catalogs.category("armor"),
        catalogs.category("weapon"),
        progress,
    )?;

    let mut summary = BuildSummary {
        outputs: catalogs.summaries(),
    };
    summary.outputs.push(OutputSummary::of_sets(SETS_OUTPUT, &sets));
    progress.on_complete(&format!(
        "Wrote {} files to {}",
        summary.outputs.len(),
        config.output_dir.display()
    ));

    Ok(summary)
}
