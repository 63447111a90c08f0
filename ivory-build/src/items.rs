//! Item catalogs (`armor`, `weapon`, `etcitem`).
//!
//! Each current record is enriched with pricing, compared with its baseline
//! record by `object_id`, and given its localized name and description.

use std::collections::HashMap;

use ivory_catalog::{
    AttrValue, Change, ChangeSet, EntitySnapshot, NameEntry, NameTable, Record, diff,
};

use crate::pricing::PriceTable;

/// Line marker of item records in `*grp.txt`.
pub const ITEM_MARKER: &str = "item_begin";

/// Keys an item line must carry to count as an item record.
pub const ITEM_REQUIRED: [&str; 2] = ["object_id", "object_name"];

/// Localized text for the current release and for the baseline.
#[derive(Debug, Clone, Default)]
pub struct NameTables {
    pub current: NameTable,
    pub original: NameTable,
}

/// Index records by a derived key. Later records win on duplicate keys.
pub(crate) fn index_by<'a>(
    records: &'a [Record],
    key: impl Fn(&Record) -> Option<String>,
) -> HashMap<String, &'a Record> {
    records
        .iter()
        .filter_map(|record| Some((key(record)?, record)))
        .collect()
}

/// How a localized entry without a description compares with one that has it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MissingText {
    /// The side without text is left out of the change.
    Absent,
    /// The side without text compares as `""`.
    Empty,
}

/// Apply localized text to a snapshot.
///
/// With no current entry the snapshot is left as it is. Otherwise a change
/// in name or description against the baseline entry is folded into the
/// snapshot's changes, and the localized values replace any raw ones.
pub(crate) fn localize(
    snapshot: &mut EntitySnapshot,
    current: Option<&NameEntry>,
    original: Option<&NameEntry>,
    missing: MissingText,
) {
    let Some(current) = current else {
        return;
    };
    if let Some(original) = original {
        snapshot.merge_changes(text_changes(original, current, missing));
    }
    snapshot.set_localized_text(current.name.clone(), current.description.clone());
}

fn text_changes(original: &NameEntry, current: &NameEntry, missing: MissingText) -> ChangeSet {
    let description = |entry: &NameEntry| match missing {
        MissingText::Absent => entry.description.clone(),
        MissingText::Empty => Some(entry.description.clone().unwrap_or_default()),
    };
    [
        ("name", original.name.clone(), current.name.clone()),
        ("description", description(original), description(current)),
    ]
    .into_iter()
    .filter(|(_, old, new)| old != new)
    .map(|(key, old, new)| {
        let change = Change {
            old: old.map(AttrValue::Text),
            new: new.map(AttrValue::Text),
        };
        (key.to_string(), change)
    })
    .collect()
}

fn object_key(record: &Record) -> Option<String> {
    record.get("object_id").map(ToString::to_string)
}

/// Build one item catalog from its current and baseline records.
pub fn build_items(
    current: Vec<Record>,
    original: &[Record],
    names: &NameTables,
    prices: &PriceTable,
) -> Vec<EntitySnapshot> {
    let baseline = index_by(original, object_key);

    current
        .into_iter()
        .map(|record| {
            let key = object_key(&record);
            let changes = diff(
                key.as_ref().and_then(|k| baseline.get(k).copied()),
                &record,
            );

            let mut snapshot = EntitySnapshot::from_record(record);
            if let Some(price) = snapshot.object_id().and_then(|id| prices.get(id)) {
                snapshot.base_price = price.default_price;
                snapshot.crystal_count = price.crystal_count;
            }
            snapshot.apply_diff(changes);

            if let Some(key) = key {
                localize(
                    &mut snapshot,
                    names.current.get(&key),
                    names.original.get(&key),
                    MissingText::Absent,
                );
            }
            snapshot
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ivory_catalog::{ITEM_NAME_COLUMNS, RecordExt, extract_records};

    use crate::pricing::PriceEntry;

    const CURRENT: &str = "\
item_begin\tobject_id=1\tobject_name=[small_sword]\ticon={[Icon.Weapon_Small_Sword_i00]}\tweight=1600\titem_end
item_begin\tobject_id=2\tobject_name=[bronze_sword]\tweight=1500\titem_end
item_begin\tobject_id=3\tobject_name=[new_sword]\tweight=1000\titem_end
";

    const ORIGINAL: &str = "\
item_begin\tobject_id=1\tobject_name=[small_sword]\ticon={[Icon.Weapon_Small_Sword_i00]}\tweight=1600\titem_end
item_begin\tobject_id=2\tobject_name=[bronze_sword]\tweight=1400\titem_end
";

    fn records(text: &str) -> Vec<Record> {
        extract_records(text, ITEM_MARKER, &ITEM_REQUIRED)
    }

    fn names(current: &str, original: &str) -> NameTables {
        NameTables {
            current: NameTable::parse(current, &ITEM_NAME_COLUMNS),
            original: NameTable::parse(original, &ITEM_NAME_COLUMNS),
        }
    }

    #[test]
    fn new_changed_and_unchanged_items() {
        let out = build_items(
            records(CURRENT),
            &records(ORIGINAL),
            &NameTables::default(),
            &PriceTable::default(),
        );
        assert_eq!(out.len(), 3);

        assert!(!out[0].is_new);
        assert!(!out[0].is_changed);

        assert!(out[1].is_changed);
        let weight = out[1].changes.get("weight").unwrap();
        assert_eq!(weight.old, Some(AttrValue::Int(1400)));
        assert_eq!(weight.new, Some(AttrValue::Int(1500)));

        assert!(out[2].is_new);
        assert!(out[2].changes.is_empty());
    }

    #[test]
    fn icons_are_lowercased_after_diffing() {
        let out = build_items(
            records(CURRENT),
            &records(ORIGINAL),
            &NameTables::default(),
            &PriceTable::default(),
        );
        assert_eq!(
            out[0].get("icon"),
            Some(&AttrValue::TextList(vec!["icon.weapon_small_sword_i00".into()]))
        );
        assert!(!out[0].changes.contains_key("icon"));
    }

    #[test]
    fn pricing_is_merged_by_object_id() {
        let prices: PriceTable = [(
            2,
            PriceEntry {
                default_price: Some(768),
                crystal_count: None,
            },
        )]
        .into_iter()
        .collect();
        let out = build_items(records(CURRENT), &[], &NameTables::default(), &prices);
        assert_eq!(out[1].base_price, Some(768));
        assert_eq!(out[1].crystal_count, None);
        assert_eq!(out[0].base_price, None);
    }

    #[test]
    fn localized_text_replaces_raw_and_is_diffed() {
        let tables = names(
            "item_name_begin\tid=1\tname=[Small Sword]\tdescription=[Sharp.]\n\
             item_name_begin\tid=2\tname=[Bronze Sword]\tdescription=[Heavy.]\n",
            "item_name_begin\tid=1\tname=[Small Sword]\tdescription=[Dull.]\n",
        );
        let out = build_items(records(CURRENT), &records(ORIGINAL), &tables, &PriceTable::default());

        // Only the description moved, but that alone marks the item changed.
        assert!(out[0].is_changed);
        assert_eq!(out[0].changes.keys().collect::<Vec<_>>(), vec!["description"]);
        assert_eq!(out[0].description.as_deref(), Some("Sharp."));

        // No baseline name entry: no text diff contribution.
        assert_eq!(out[1].name.as_deref(), Some("Bronze Sword"));
        assert!(!out[1].changes.contains_key("name"));
    }

    #[test]
    fn item_without_name_entry_keeps_raw_attributes_only() {
        let out = build_items(
            records("item_begin\tobject_id=9\tobject_name=[raw]\tname=[raw name]\n"),
            &[],
            &NameTables::default(),
            &PriceTable::default(),
        );
        assert_eq!(out[0].name, None);
        assert_eq!(out[0].description, None);
        assert_eq!(out[0].attributes.text("name"), Some("raw name"));
        let json = serde_json::to_value(&out[0]).unwrap();
        assert!(json.get("description").is_none());
    }

    #[test]
    fn raw_text_is_overwritten_in_place() {
        let tables = names(
            "item_name_begin\tid=9\tname=[Localized]\titem_name_end\n",
            "item_name_begin\tid=9\tname=[Localized]\titem_name_end\n",
        );
        let out = build_items(
            records("item_begin\tobject_id=9\tobject_name=[raw]\tname=[raw name]\tweight=1\n"),
            &[],
            &tables,
            &PriceTable::default(),
        );
        assert_eq!(out[0].name, None);
        assert_eq!(out[0].display_name(), Some("Localized"));
        assert_eq!(
            out[0].attributes.keys().collect::<Vec<_>>(),
            vec!["object_id", "object_name", "name", "weight"]
        );
    }

    #[test]
    fn dropped_description_keeps_only_the_old_side() {
        let tables = names(
            "item_name_begin\tid=1\tname=[Small Sword]\titem_name_end\n",
            "item_name_begin\tid=1\tname=[Small Sword]\tdescription=[Sharp.]\titem_name_end\n",
        );
        let out = build_items(records(CURRENT), &records(ORIGINAL), &tables, &PriceTable::default());

        assert!(out[0].is_changed);
        let json = serde_json::to_value(&out[0].changes).unwrap();
        assert_eq!(json, serde_json::json!({"description": {"old": "Sharp."}}));
        assert!(serde_json::to_value(&out[0]).unwrap().get("description").is_none());
    }
}
