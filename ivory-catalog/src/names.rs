//! Localized name/description tables (`itemname-e.txt`, `skillname-e.txt`).
//!
//! Skills have one name line per level, so a table built with a level column
//! is keyed by `"{id}_{level}"`; otherwise by `"{id}"`.

use std::collections::HashMap;
use std::fmt::Display;

use crate::record::{marked_lines, raw_fields};
use crate::value::unwrap_markers;

/// Column layout of a name file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameColumns {
    pub marker: &'static str,
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub level: Option<&'static str>,
}

/// Layout of `itemname-e.txt`.
pub const ITEM_NAME_COLUMNS: NameColumns = NameColumns {
    marker: "item_name_begin",
    id: "id",
    name: "name",
    description: "description",
    level: None,
};

/// Layout of `skillname-e.txt`.
pub const SKILL_NAME_COLUMNS: NameColumns = NameColumns {
    marker: "skill_begin",
    id: "skill_id",
    name: "name",
    description: "desc",
    level: Some("skill_level"),
};

/// One localized entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameEntry {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub level: Option<i64>,
}

/// Lookup key of a leveled entity: `"{id}_{level}"`.
pub fn leveled_key(id: impl Display, level: impl Display) -> String {
    format!("{id}_{level}")
}

/// Name entries keyed by `"{id}"`, or by [`leveled_key`] when the table has a
/// level column and the line carries a level.
#[derive(Debug, Clone, Default)]
pub struct NameTable {
    entries: HashMap<String, NameEntry>,
}

impl NameTable {
    /// Build a table from the contents of a name file.
    ///
    /// Lines without a parseable id are skipped. Later lines win over earlier
    /// ones with the same key.
    pub fn parse(content: &str, columns: &NameColumns) -> Self {
        let mut entries = HashMap::new();

        for line in marked_lines(content, columns.marker) {
            let mut id = None;
            let mut entry = NameEntry::default();

            for (key, value) in raw_fields(line) {
                let key = key.trim();
                if key == columns.id {
                    id = parse_leading_int(value);
                } else if key == columns.name {
                    entry.name = Some(unwrap_markers(value).to_string());
                } else if key == columns.description {
                    entry.description = Some(unwrap_markers(value).to_string());
                } else if columns.level.is_some_and(|lvl| lvl == key) {
                    entry.level = parse_leading_int(value);
                }
            }

            let Some(id) = id else { continue };
            entry.id = id;
            let key = match entry.level {
                Some(level) if columns.level.is_some() => leveled_key(id, level),
                _ => id.to_string(),
            };
            entries.insert(key, entry);
        }

        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&NameEntry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse the leading decimal integer of `s` (optional sign, then digits).
/// Trailing garbage is ignored; no digits at all yields `None`.
fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..end].parse::<i64>().ok().map(|n| sign * n)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEM_NAMES: &str = "\
item_name_begin\tid=1\tname=[Short Sword]\tadditionalname=[]\tdescription=[A plain blade.]\titem_name_end
item_name_begin\tid=2\tname=[Bronze Sword]\titem_name_end
item_name_begin\tname=[No Id]\titem_name_end
item_name_begin\tid=1\tname=[Short Sword II]\tdescription=[Reforged.]\titem_name_end
";

    const SKILL_NAMES: &str = "\
skill_begin\tskill_id=3\tskill_level=1\tname=[Power Strike]\tdesc=[Lv 1 strike.]\tskill_end
skill_begin\tskill_id=3\tskill_level=2\tname=[Power Strike]\tdesc=[Lv 2 strike.]\tskill_end
skill_begin\tskill_id=4\tname=[Levelless]\tskill_end
";

    #[test]
    fn item_names_keyed_by_id_last_write_wins() {
        let table = NameTable::parse(ITEM_NAMES, &ITEM_NAME_COLUMNS);
        assert_eq!(table.len(), 2);

        let sword = table.get("1").unwrap();
        assert_eq!(sword.name.as_deref(), Some("Short Sword II"));
        assert_eq!(sword.description.as_deref(), Some("Reforged."));

        let bronze = table.get("2").unwrap();
        assert_eq!(bronze.description, None);
    }

    #[test]
    fn skill_names_keyed_by_id_and_level() {
        let table = NameTable::parse(SKILL_NAMES, &SKILL_NAME_COLUMNS);
        assert_eq!(
            table.get("3_1").unwrap().description.as_deref(),
            Some("Lv 1 strike.")
        );
        assert_eq!(
            table.get("3_2").unwrap().description.as_deref(),
            Some("Lv 2 strike.")
        );
        assert!(table.get("3").is_none());
        // No level on the line: falls back to the bare id.
        assert_eq!(table.get("4").unwrap().name.as_deref(), Some("Levelless"));
    }

    #[test]
    fn leveled_keys() {
        assert_eq!(leveled_key(10, 3), "10_3");
        assert_eq!(leveled_key("10", "x"), "10_x");
    }

    #[test]
    fn leading_int_parsing() {
        assert_eq!(parse_leading_int("42"), Some(42));
        assert_eq!(parse_leading_int("42abc"), Some(42));
        assert_eq!(parse_leading_int("-7"), Some(-7));
        assert_eq!(parse_leading_int("[42]"), None);
        assert_eq!(parse_leading_int(""), None);
    }
}
