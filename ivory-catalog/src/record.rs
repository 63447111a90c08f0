//! Tab-delimited record lines and the ordered attribute map they parse into.
//!
//! Client data files hold one record per line:
//! ```text
//! item_begin	object_id=1	object_name=[small_sword]	icon={[icon.weapon_small_sword_i00]}	item_end
//! ```
//! Lines are selected by their leading marker and split on tabs into
//! `key=value` fields. Fields without `=` (the markers themselves) or with an
//! empty value are skipped.

use indexmap::IndexMap;

use crate::value::{AttrValue, coerce};

/// Attribute map for one source record, in first-seen key order.
///
/// Re-inserting an existing key replaces its value without moving it.
pub type Record = IndexMap<String, AttrValue>;

/// Typed lookups on a [`Record`].
pub trait RecordExt {
    /// Integer value of `key`, if present and numeric.
    fn int(&self, key: &str) -> Option<i64>;

    /// Text value of `key`, if present and textual.
    fn text(&self, key: &str) -> Option<&str>;
}

impl RecordExt for Record {
    fn int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(AttrValue::as_int)
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(AttrValue::as_text)
    }
}

// ── Line parsing ────────────────────────────────────────────────────────────

/// Trimmed lines of `content` that begin with `marker`.
pub fn marked_lines<'a>(content: &'a str, marker: &'a str) -> impl Iterator<Item = &'a str> {
    content
        .split('\n')
        .map(str::trim)
        .filter(move |line| !line.is_empty() && line.starts_with(marker))
}

/// Raw `(key, value)` pairs of one line, with the value trimmed.
///
/// Only the text between the first and second `=` of a field counts as its
/// value. Fields with no `=` or an empty value are skipped; keys may be empty.
pub fn raw_fields(line: &str) -> impl Iterator<Item = (&str, &str)> {
    line.split('\t').filter_map(|part| {
        let mut kv = part.split('=');
        let key = kv.next()?;
        let value = kv.next()?;
        if value.is_empty() {
            return None;
        }
        Some((key, value.trim()))
    })
}

/// Parse one line into a record, coercing each value.
pub fn parse_line(line: &str) -> Record {
    let mut record = Record::new();
    for (key, value) in raw_fields(line) {
        if key.is_empty() {
            continue;
        }
        record.insert(key.trim().to_string(), coerce(value));
    }
    record
}

/// Extract every record whose line starts with `marker` and carries all of
/// the `required` keys. Lines missing a required key are dropped silently.
pub fn extract_records(content: &str, marker: &str, required: &[&str]) -> Vec<Record> {
    marked_lines(content, marker)
        .map(parse_line)
        .filter(|record| required.iter().all(|key| record.contains_key(*key)))
        .collect()
}
