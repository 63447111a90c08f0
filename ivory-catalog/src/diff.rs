//! Field-level comparison of a record against its baseline.
//!
//! Only fields present in both records are compared. A missing or empty
//! baseline marks the entity new instead.

use std::cmp::Ordering;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::record::Record;
use crate::value::AttrValue;

/// Old and new value of one changed field. A side is `None` when the field
/// had no value on that side (localized text missing a description).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old: Option<AttrValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new: Option<AttrValue>,
}

/// Changed fields, in the order they appear in the current record.
pub type ChangeSet = IndexMap<String, Change>;

/// Which way a changed value moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeDirection {
    Increase,
    Decrease,
    /// Values that do not compare numerically.
    Unordered,
}

impl Change {
    pub fn new(old: impl Into<AttrValue>, new: impl Into<AttrValue>) -> Self {
        Self {
            old: Some(old.into()),
            new: Some(new.into()),
        }
    }

    /// Compare the two sides numerically. Only integer pairs are ordered.
    pub fn direction(&self) -> ChangeDirection {
        let old = self.old.as_ref().and_then(AttrValue::as_int);
        let new = self.new.as_ref().and_then(AttrValue::as_int);
        match (old, new) {
            (Some(old), Some(new)) => match new.cmp(&old) {
                Ordering::Greater => ChangeDirection::Increase,
                Ordering::Less => ChangeDirection::Decrease,
                Ordering::Equal => ChangeDirection::Unordered,
            },
            _ => ChangeDirection::Unordered,
        }
    }
}

/// Result of comparing a record with its baseline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diff {
    pub is_new: bool,
    pub is_changed: bool,
    pub changes: ChangeSet,
}

/// Compare `current` with `original`.
///
/// `is_new` is set when there is no baseline or the baseline has no fields.
/// A field is recorded as changed when it exists in both records with unequal
/// values; fields added or removed between the two are not reported.
pub fn diff(original: Option<&Record>, current: &Record) -> Diff {
    let mut changes = ChangeSet::new();

    if let Some(original) = original {
        for (key, new) in current.iter() {
            if let Some(old) = original.get(key).filter(|old| *old != new) {
                changes.insert(key.clone(), Change::new(old.clone(), new.clone()));
            }
        }
    }

    Diff {
        is_new: original.is_none_or(Record::is_empty),
        is_changed: !changes.is_empty(),
        changes,
    }
}
