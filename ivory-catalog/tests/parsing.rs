use ivory_catalog::{
    AttrValue, ITEM_NAME_COLUMNS, NameTable, RecordExt, SKILL_NAME_COLUMNS, coerce, diff,
    extract_records, leveled_key,
};

const ARMOR_GRP: &str = "\
item_begin\tobject_id=23\tobject_name=[wooden_breastplate]\ticon={[icon.armor_t04_u_i00]}\tbody_part={[chest]}\tcrystal_type=[none]\tarmor_type=[light]\tphysical_defense=33\titem_end
item_begin\tobject_id=24\tobject_name=[wooden_gaiters]\tbody_part={[legs]}\tcrystal_type=[none]\tarmor_type=[light]\tphysical_defense=20\titem_end
// a comment line that the marker filter drops
item_begin\tobject_id=25\titem_end
";

#[test]
fn token_coercion_examples() {
    assert_eq!(
        coerce("{a;b;c}"),
        AttrValue::TextList(vec!["a".into(), "b".into(), "c".into()])
    );
    assert_eq!(coerce("123"), AttrValue::Int(123));
    assert_eq!(coerce("true"), AttrValue::Bool(true));
    assert_eq!(coerce("D "), AttrValue::Text("D".into()));
}

#[test]
fn armor_lines_become_records() {
    let records = extract_records(ARMOR_GRP, "item_begin", &["object_id", "object_name"]);
    assert_eq!(records.len(), 2);

    let breastplate = &records[0];
    assert_eq!(breastplate.int("object_id"), Some(23));
    assert_eq!(breastplate.text("armor_type"), Some("light"));
    assert_eq!(
        breastplate.get("body_part"),
        Some(&AttrValue::TextList(vec!["chest".into()]))
    );
    assert_eq!(breastplate.int("physical_defense"), Some(33));
}

#[test]
fn single_required_key_keeps_more_lines() {
    let records = extract_records(ARMOR_GRP, "item_begin", &["object_id"]);
    assert_eq!(records.len(), 3);
}

#[test]
fn diff_between_releases() {
    let original = extract_records(ARMOR_GRP, "item_begin", &["object_id", "object_name"]);
    let current_text = ARMOR_GRP.replace("physical_defense=33", "physical_defense=35");
    let current = extract_records(&current_text, "item_begin", &["object_id", "object_name"]);

    let changed = diff(Some(&original[0]), &current[0]);
    assert!(!changed.is_new);
    assert!(changed.is_changed);
    let pdef = changed.changes.get("physical_defense").unwrap();
    assert_eq!(pdef.old, Some(AttrValue::Int(33)));
    assert_eq!(pdef.new, Some(AttrValue::Int(35)));

    let unchanged = diff(Some(&original[1]), &current[1]);
    assert!(!unchanged.is_changed);
    assert!(unchanged.changes.is_empty());
}

#[test]
fn name_tables_for_items_and_skills() {
    let items = NameTable::parse(
        "item_name_begin\tid=23\tname=[Wooden Breastplate]\tdescription=[Sturdy.]\titem_name_end\n",
        &ITEM_NAME_COLUMNS,
    );
    assert_eq!(
        items.get("23").unwrap().name.as_deref(),
        Some("Wooden Breastplate")
    );

    let skills = NameTable::parse(
        "skill_begin\tskill_id=1\tskill_level=1\tname=[Triple Slash]\tdesc=[Three cuts.]\tskill_end\n",
        &SKILL_NAME_COLUMNS,
    );
    let entry = skills.get(&leveled_key(1, 1)).unwrap();
    assert_eq!(entry.level, Some(1));
    assert_eq!(entry.description.as_deref(), Some("Three cuts."));
}
