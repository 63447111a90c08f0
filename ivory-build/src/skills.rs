//! Skill catalog (`skillgrp.txt`).
//!
//! A skill has one record per level, so records, baselines, and localized
//! text are all matched on the `"{skill_id}_{skill_level}"` key.

use ivory_catalog::{EntitySnapshot, Record, diff, leveled_key};

use crate::items::{MissingText, NameTables, index_by, localize};

/// Line marker of skill records.
pub const SKILL_MARKER: &str = "skill_begin";

/// Keys a skill line must carry to count as a skill record.
pub const SKILL_REQUIRED: [&str; 2] = ["skill_id", "skill_level"];

fn skill_key(record: &Record) -> Option<String> {
    Some(leveled_key(record.get("skill_id")?, record.get("skill_level")?))
}

/// Build the skill catalog from current and baseline records.
///
/// Raw `name`/`description` attributes are dropped from the published
/// attributes (the comparison still sees them); localized text is applied
/// afterwards. A missing localized description compares as empty.
pub fn build_skills(
    current: Vec<Record>,
    original: &[Record],
    names: &NameTables,
) -> Vec<EntitySnapshot> {
    let baseline = index_by(original, skill_key);

    current
        .into_iter()
        .map(|mut record| {
            let key = skill_key(&record);
            let changes = diff(
                key.as_ref().and_then(|k| baseline.get(k).copied()),
                &record,
            );

            record.shift_remove("name");
            record.shift_remove("description");
            let mut snapshot = EntitySnapshot::from_record(record);
            snapshot.apply_diff(changes);

            if let Some(key) = key {
                localize(
                    &mut snapshot,
                    names.current.get(&key),
                    names.original.get(&key),
                    MissingText::Empty,
                );
            }
            snapshot
        })
        .collect()
}
