//! Output data model: entity snapshots, armor sets, and set definitions.
//!
//! These are the shapes written to `armor.json`, `weapon.json`,
//! `etcitem.json`, `skills.json` and `armorsets.json`.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::diff::{ChangeSet, Diff};
use crate::record::{Record, RecordExt};
use crate::value::AttrValue;

// ── Entity snapshot ─────────────────────────────────────────────────────────

/// One item or skill level as published: its raw attributes plus pricing,
/// localized text, and change tracking against the baseline.
///
/// Localized text lives in `name`/`description` and is written after the
/// change tracking, unless the record already carried a raw attribute of the
/// same key; then the attribute is overwritten in place and the field stays
/// `None`. Use [`EntitySnapshot::display_name`] and
/// [`EntitySnapshot::display_description`] to read either.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EntitySnapshot {
    #[serde(flatten)]
    pub attributes: Record,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crystal_count: Option<i64>,
    pub is_new: bool,
    pub is_changed: bool,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub changes: ChangeSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl EntitySnapshot {
    /// Wrap raw attributes. Icon lists are lowercased.
    pub fn from_record(mut attributes: Record) -> Self {
        if let Some(icon) = attributes.get_mut("icon") {
            icon.lowercase_list();
        }
        Self {
            attributes,
            ..Self::default()
        }
    }

    /// Record the outcome of a baseline comparison.
    pub fn apply_diff(&mut self, diff: Diff) {
        self.is_new = diff.is_new;
        self.is_changed = diff.is_changed;
        self.changes = diff.changes;
    }

    /// Fold extra changes (e.g. from localized text) into this snapshot.
    /// Non-empty changes force `is_changed`.
    pub fn merge_changes(&mut self, changes: ChangeSet) {
        if changes.is_empty() {
            return;
        }
        self.changes.extend(changes);
        self.is_changed = true;
    }

    /// Apply localized name and description.
    pub fn set_localized_text(&mut self, name: Option<String>, description: Option<String>) {
        place_text(&mut self.attributes, &mut self.name, "name", name);
        place_text(
            &mut self.attributes,
            &mut self.description,
            "description",
            description,
        );
    }

    /// Localized name, or the raw `name` attribute.
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .or_else(|| self.attributes.text("name"))
    }

    /// Localized description, or the raw `description` attribute.
    pub fn display_description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .or_else(|| self.attributes.text("description"))
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.attributes.get(key)
    }

    pub fn object_id(&self) -> Option<i64> {
        self.attributes.int("object_id")
    }

    pub fn object_name(&self) -> Option<&str> {
        self.attributes.text("object_name")
    }

    pub fn skill_id(&self) -> Option<i64> {
        self.attributes.int("skill_id")
    }

    pub fn skill_level(&self) -> Option<i64> {
        self.attributes.int("skill_level")
    }

    /// The `object_name` this item had in the baseline, if it was renamed;
    /// otherwise its current `object_name`.
    pub fn original_object_name(&self) -> Option<&str> {
        if self.is_changed {
            let old = self
                .changes
                .get("object_name")
                .and_then(|c| c.old.as_ref())
                .and_then(AttrValue::as_text)
                .filter(|old| !old.is_empty());
            if old.is_some() {
                return old;
            }
        }
        self.object_name()
    }

    /// True when any `body_part` entry mentions "chest", ignoring case.
    pub fn is_chest(&self) -> bool {
        self.attributes
            .get("body_part")
            .and_then(AttrValue::as_list)
            .is_some_and(|parts| parts.iter().any(|p| p.to_lowercase().contains("chest")))
    }
}

/// Overwrite a raw attribute in place, or fall back to the trailing field.
/// A raw attribute with no localized value is dropped.
fn place_text(
    attributes: &mut Record,
    field: &mut Option<String>,
    key: &str,
    value: Option<String>,
) {
    if attributes.contains_key(key) {
        match value {
            Some(text) => {
                attributes.insert(key.to_string(), AttrValue::Text(text));
            }
            None => {
                attributes.shift_remove(key);
            }
        }
        *field = None;
    } else {
        *field = value;
    }
}

/// Keys written after the attributes. `name`/`description` seen before the
/// first of these belong to the attributes.
const TRAILING_START: [&str; 4] = ["base_price", "crystal_count", "is_new", "is_changed"];

impl<'de> Deserialize<'de> for EntitySnapshot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SnapshotVisitor;

        impl<'de> Visitor<'de> for SnapshotVisitor {
            type Value = EntitySnapshot;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an entity snapshot object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<EntitySnapshot, A::Error> {
                let mut snap = EntitySnapshot::default();
                let mut trailing = false;

                while let Some(key) = map.next_key::<String>()? {
                    trailing |= TRAILING_START.contains(&key.as_str());
                    match key.as_str() {
                        "base_price" => snap.base_price = map.next_value()?,
                        "crystal_count" => snap.crystal_count = map.next_value()?,
                        "is_new" => snap.is_new = map.next_value()?,
                        "is_changed" => snap.is_changed = map.next_value()?,
                        "changes" => snap.changes = map.next_value()?,
                        "name" if trailing => snap.name = map.next_value()?,
                        "description" if trailing => snap.description = map.next_value()?,
                        _ => {
                            let value: AttrValue = map.next_value()?;
                            snap.attributes.insert(key, value);
                        }
                    }
                }
                Ok(snap)
            }
        }

        deserializer.deserialize_map(SnapshotVisitor)
    }
}

// ── Armor sets ──────────────────────────────────────────────────────────────

/// A hand-authored set definition from `sets.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub items: Vec<String>,
}

/// A set definition resolved against the armor and weapon catalogs.
///
/// `items` keeps one slot per member name in definition order; names with no
/// catalog entry stay as `None` (`null` in JSON).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorSet {
    pub id: String,
    pub name: String,
    pub armor_type: String,
    pub grade: String,
    pub set_bonus: String,
    pub items: Vec<Option<EntitySnapshot>>,
}
