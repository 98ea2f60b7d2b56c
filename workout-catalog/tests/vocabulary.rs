use workout_catalog::*;

#[test]
fn category_maps_to_type() {
    assert_eq!(map_category("strength"), Some(AttributeValue::Strength));
    assert_eq!(
        map_category("olympic weightlifting"),
        Some(AttributeValue::Weightlifting)
    );
    assert_eq!(map_category("unknown-category"), None);
}

#[test]
fn lookups_are_case_sensitive() {
    assert_eq!(map_category("Strength"), None);
    assert_eq!(map_muscle("Chest"), None);
}

#[test]
fn back_muscles_collapse() {
    assert_eq!(map_muscle("lower back"), Some(AttributeValue::Back));
    assert_eq!(map_muscle("middle back"), Some(AttributeValue::Back));
}

#[test]
fn equipment_aliases() {
    assert_eq!(map_equipment("e-z curl bar"), Some(AttributeValue::EzBar));
    assert_eq!(map_equipment("exercise ball"), Some(AttributeValue::SwissBall));
    assert_eq!(map_equipment("body only"), Some(AttributeValue::BodyOnly));
    assert_eq!(map_equipment("smith machine"), None);
}

#[test]
fn mechanic_maps() {
    assert_eq!(map_mechanic("compound"), Some(AttributeValue::Compound));
    assert_eq!(map_mechanic("isolation"), Some(AttributeValue::Isolation));
    assert_eq!(map_mechanic(""), None);
}

#[test]
fn vocabulary_dispatch_matches_tables() {
    assert_eq!(Vocabulary::Muscle.map("triceps"), map_muscle("triceps"));
    assert_eq!(Vocabulary::Category.map("cardio"), map_category("cardio"));
    assert_eq!(Vocabulary::Equipment.map("cable"), map_equipment("cable"));
    assert_eq!(Vocabulary::Mechanic.map("compound"), map_mechanic("compound"));
}

#[test]
fn stored_names_parse_back() {
    for name in AttributeName::ALL {
        assert_eq!(AttributeName::from_db_str(name.as_str()), Some(name));
    }
    assert_eq!(AttributeName::from_db_str("COLOR"), None);
}

#[test]
fn stored_values_parse_back() {
    for value in AttributeValue::ALL {
        assert_eq!(AttributeValue::from_db_str(value.as_str()), Some(value));
    }
    assert_eq!(AttributeValue::from_db_str("BICEP"), None);
}
