//! Item pricing table (`itemdata.json`).
//!
//! The file is usually a dense array indexed by object id with `null` holes,
//! but an object keyed by decimal object id is accepted too. Either way the
//! table is held as a map so sparse id spaces cost nothing.

use std::collections::HashMap;
use std::path::Path;

use serde::de::Error as _;
use serde_json::{Map, Value};

use crate::error::BuildError;
use crate::source::read_text;

const PRICE_FIELDS: [&str; 2] = ["default_price", "crystal_count"];

/// Pricing fields for one item. Other fields in the source are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriceEntry {
    pub default_price: Option<i64>,
    pub crystal_count: Option<i64>,
}

impl PriceEntry {
    /// Read the price fields of one row. A field that is not an integer
    /// (a whole float or a numeric string counts) is dropped with a warning.
    fn from_row(id: i64, row: &Map<String, Value>) -> Self {
        let [default_price, crystal_count] =
            PRICE_FIELDS.map(|field| integer_field(id, row, field));
        Self {
            default_price,
            crystal_count,
        }
    }
}

fn integer_field(id: i64, row: &Map<String, Value>, field: &str) -> Option<i64> {
    let value = row.get(field)?;
    let parsed = match value {
        Value::Null => return None,
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    if parsed.is_none() {
        log::warn!("Pricing for object {}: ignoring non-integer {} {}", id, field, value);
    }
    parsed
}

/// One pricing row. `null` rows are holes; anything else that is not an
/// object is skipped with a warning.
fn row_entry(id: i64, row: &Value) -> Option<PriceEntry> {
    match row {
        Value::Null => None,
        Value::Object(fields) => Some(PriceEntry::from_row(id, fields)),
        other => {
            log::warn!("Pricing for object {}: ignoring row {}", id, other);
            None
        }
    }
}

/// Prices keyed by object id.
#[derive(Debug, Clone, Default)]
pub struct PriceTable {
    entries: HashMap<i64, PriceEntry>,
}

impl PriceTable {
    /// Parse the pricing file. Only malformed JSON or a top level that is
    /// neither an array nor an object is an error; bad rows are skipped.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let entries = match serde_json::from_str::<Value>(content)? {
            Value::Array(rows) => rows
                .iter()
                .enumerate()
                .filter_map(|(id, row)| {
                    let id = i64::try_from(id).ok()?;
                    Some((id, row_entry(id, row)?))
                })
                .collect(),
            Value::Object(rows) => rows
                .iter()
                .filter_map(|(id, row)| {
                    let Ok(id) = id.trim().parse::<i64>() else {
                        log::warn!("Pricing: ignoring non-numeric object id {:?}", id);
                        return None;
                    };
                    Some((id, row_entry(id, row)?))
                })
                .collect(),
            _ => {
                return Err(serde_json::Error::custom(
                    "pricing table must be an array or an object keyed by object id",
                ));
            }
        };
        Ok(Self { entries })
    }

    /// Load the table from disk. A missing file yields an empty table.
    pub fn load(path: &Path) -> Result<Self, BuildError> {
        let content = read_text(path)?;
        Self::from_json(&content).map_err(|e| BuildError::json(path, e))
    }

    pub fn get(&self, object_id: i64) -> Option<&PriceEntry> {
        self.entries.get(&object_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(i64, PriceEntry)> for PriceTable {
    fn from_iter<I: IntoIterator<Item = (i64, PriceEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dense_array_is_indexed_by_position() {
        let table = PriceTable::from_json(
            r#"[null, {"default_price": 768, "crystal_count": 0, "weight": 1600}, null, {"default_price": 5}]"#,
        )
        .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.get(1),
            Some(&PriceEntry {
                default_price: Some(768),
                crystal_count: Some(0),
            })
        );
        assert_eq!(table.get(3).unwrap().crystal_count, None);
        assert!(table.get(0).is_none());
        assert!(table.get(99).is_none());
    }

    #[test]
    fn keyed_object_supports_sparse_ids() {
        let table = PriceTable::from_json(
            r#"{"57": {"default_price": 1}, "1000000": {"crystal_count": 3}, "junk": {}}"#,
        )
        .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(57).unwrap().default_price, Some(1));
        assert_eq!(table.get(1_000_000).unwrap().crystal_count, Some(3));
    }

    #[test]
    fn empty_content_is_empty_table() {
        assert!(PriceTable::from_json("").unwrap().is_empty());
    }

    #[test]
    fn wrong_shape_is_an_error() {
        assert!(PriceTable::from_json("42").is_err());
    }

    #[test]
    fn non_integer_prices_are_skipped_not_fatal() {
        let table = PriceTable::from_json(
            r#"[null, {"default_price": 768}, {"default_price": 12.5, "crystal_count": "4"}, "junk", {"default_price": 300.0}]"#,
        )
        .unwrap();
        assert_eq!(table.get(1).unwrap().default_price, Some(768));
        assert_eq!(
            table.get(2),
            Some(&PriceEntry {
                default_price: None,
                crystal_count: Some(4),
            })
        );
        assert!(table.get(3).is_none());
        assert_eq!(table.get(4).unwrap().default_price, Some(300));
    }
}
