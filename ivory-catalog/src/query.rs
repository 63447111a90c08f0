//! Read-side helpers over published snapshots: item classification, skill
//! level grouping, and armor-set aggregates.

use crate::record::RecordExt;
use crate::types::{ArmorSet, EntitySnapshot};

/// Which catalog an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Armor,
    Weapon,
    Etc,
}

impl ItemKind {
    /// Armor carries `armor_type`, weapons carry `weapon_type`; everything
    /// else is an etc item.
    pub fn classify(item: &EntitySnapshot) -> Self {
        if item.get("armor_type").is_some() {
            Self::Armor
        } else if item.get("weapon_type").is_some() {
            Self::Weapon
        } else {
            Self::Etc
        }
    }

    /// Path segment the site uses for this kind.
    pub fn route(&self) -> &'static str {
        match self {
            Self::Armor => "armor",
            Self::Weapon => "weapons",
            Self::Etc => "etc",
        }
    }
}

/// Site path of an item's detail page, e.g. `/weapons/1`.
pub fn item_path(item: &EntitySnapshot) -> Option<String> {
    let id = item.object_id()?;
    Some(format!("/{}/{id}", ItemKind::classify(item).route()))
}

/// All levels of one skill.
#[derive(Debug, Clone)]
pub struct SkillGroup<'a> {
    pub skill_id: i64,
    /// Highest-level entry; the first one seen when levels tie.
    pub representative: &'a EntitySnapshot,
    /// Every level in input order.
    pub levels: Vec<&'a EntitySnapshot>,
}

impl SkillGroup<'_> {
    pub fn all_new(&self) -> bool {
        self.levels.iter().all(|s| s.is_new)
    }

    pub fn any_changed(&self) -> bool {
        self.levels.iter().any(|s| s.is_new || s.is_changed)
    }
}

/// Group skill snapshots by `skill_id`, in order of first appearance.
/// Entries without a `skill_id` are skipped.
pub fn group_skill_levels(skills: &[EntitySnapshot]) -> Vec<SkillGroup<'_>> {
    let mut groups: Vec<SkillGroup<'_>> = Vec::new();

    for skill in skills {
        let Some(skill_id) = skill.skill_id() else {
            continue;
        };
        match groups.iter_mut().find(|g| g.skill_id == skill_id) {
            Some(group) => {
                group.levels.push(skill);
                if skill.skill_level() > group.representative.skill_level() {
                    group.representative = skill;
                }
            }
            None => groups.push(SkillGroup {
                skill_id,
                representative: skill,
                levels: vec![skill],
            }),
        }
    }

    groups
}

impl ArmorSet {
    /// Resolved members, skipping unresolved slots.
    pub fn members(&self) -> impl Iterator<Item = &EntitySnapshot> {
        self.items.iter().flatten()
    }

    /// Sum of `physical_defense` over resolved members.
    pub fn total_physical_defense(&self) -> i64 {
        self.members()
            .filter_map(|item| item.attributes.int("physical_defense"))
            .sum()
    }

    /// Sum of `base_price` over resolved members.
    pub fn total_base_price(&self) -> i64 {
        self.members().filter_map(|item| item.base_price).sum()
    }

    pub fn contains_object(&self, object_id: i64) -> bool {
        self.members().any(|item| item.object_id() == Some(object_id))
    }
}

/// Every set with a resolved member whose `object_id` matches.
pub fn sets_containing(sets: &[ArmorSet], object_id: i64) -> Vec<&ArmorSet> {
    sets.iter().filter(|s| s.contains_object(object_id)).collect()
}
