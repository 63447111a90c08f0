//! Armor sets: hand-authored definitions resolved against the item catalogs.

use std::collections::HashMap;

use ivory_catalog::{ArmorSet, AttrValue, EntitySnapshot, SetDefinition};

const DEFAULT_ARMOR_TYPE: &str = "light";
const NO_GRADE: &str = "none";

/// Resolve set definitions against the armor and weapon catalogs.
///
/// Members are matched on `object_name`. When a name exists in both catalogs
/// the weapon entry is used, since weapons are indexed after armor. Names
/// that match nothing keep their slot as `None`.
pub fn compose_sets(
    definitions: &[SetDefinition],
    armor: &[EntitySnapshot],
    weapon: &[EntitySnapshot],
) -> Vec<ArmorSet> {
    let by_name: HashMap<&str, &EntitySnapshot> = armor
        .iter()
        .chain(weapon)
        .filter_map(|item| Some((item.object_name()?, item)))
        .collect();

    definitions
        .iter()
        .map(|def| {
            let items: Vec<Option<EntitySnapshot>> = def
                .items
                .iter()
                .map(|name| {
                    let found = by_name.get(name.as_str()).map(|item| (*item).clone());
                    if found.is_none() {
                        log::warn!("Set '{}' ({}): no item named '{}'", def.name, def.id, name);
                    }
                    found
                })
                .collect();

            let chest = items.iter().flatten().find(|item| item.is_chest());

            ArmorSet {
                id: def.id.clone(),
                name: def.name.clone(),
                armor_type: chest
                    .and_then(|c| c.get("armor_type"))
                    .and_then(AttrValue::as_text)
                    .unwrap_or(DEFAULT_ARMOR_TYPE)
                    .to_string(),
                grade: grade(chest),
                set_bonus: chest
                    .and_then(EntitySnapshot::display_description)
                    .map(set_bonus)
                    .unwrap_or_default(),
                items,
            }
        })
        .collect()
}

/// Crystal grade of the chest piece, trimmed. Empty, missing or non-text
/// reads as "none".
fn grade(chest: Option<&EntitySnapshot>) -> String {
    let grade = chest
        .and_then(|c| c.get("crystal_type"))
        .and_then(AttrValue::as_text)
        .map(|v| v.trim().to_string())
        .unwrap_or_default();
    if grade.is_empty() || grade.eq_ignore_ascii_case(NO_GRADE) {
        NO_GRADE.to_string()
    } else {
        grade
    }
}

/// Everything after the first `|` segment of a description. The chest's
/// localized description is used, or its raw one when it has none.
fn set_bonus(description: &str) -> String {
    description
        .split_once('|')
        .map(|(_, bonus)| bonus.to_string())
        .unwrap_or_default()
}
