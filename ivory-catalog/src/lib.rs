//! Data model and pure transforms for the Tower of Ivory item database.
//!
//! This crate turns client data text into typed records and compares them
//! against a baseline release. It does no file I/O; `ivory-build` drives it.

pub mod diff;
pub mod names;
pub mod query;
pub mod record;
pub mod types;
pub mod value;

pub use diff::{Change, ChangeDirection, ChangeSet, Diff, diff};
pub use names::{
    ITEM_NAME_COLUMNS, NameColumns, NameEntry, NameTable, SKILL_NAME_COLUMNS, leveled_key,
};
pub use query::{ItemKind, SkillGroup, group_skill_levels, item_path, sets_containing};
pub use record::{Record, RecordExt, extract_records, parse_line};
pub use types::{ArmorSet, EntitySnapshot, SetDefinition};
pub use value::{AttrValue, coerce};
