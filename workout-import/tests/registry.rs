use workout_catalog::types::*;
use workout_db::*;
use workout_import::AttributeRegistry;

fn insert_plank(conn: &rusqlite::Connection) -> i64 {
    let ex = Exercise {
        id: 0,
        name: "Plank".to_string(),
        name_en: "Plank".to_string(),
        description: String::new(),
        description_en: String::new(),
        slug: "plank".to_string(),
        slug_en: "plank".to_string(),
        full_video_image_url: None,
        created_at: String::new(),
    };
    insert_exercise(conn, &ex).unwrap()
}

#[test]
fn resolve_name_is_get_or_create() {
    let conn = open_memory().unwrap();
    let registry = AttributeRegistry::new(&conn);

    let first = registry.resolve_name(AttributeName::PrimaryMuscle).unwrap();
    let second = registry.resolve_name(AttributeName::PrimaryMuscle).unwrap();
    assert_eq!(first, second);
    assert_eq!(catalog_stats(&conn).unwrap().attribute_names, 1);
}

#[test]
fn resolve_value_is_get_or_create() {
    let conn = open_memory().unwrap();
    let registry = AttributeRegistry::new(&conn);
    let name = registry.resolve_name(AttributeName::PrimaryMuscle).unwrap();

    let first = registry.resolve_value(&name, AttributeValue::Biceps).unwrap();
    let second = registry.resolve_value(&name, AttributeValue::Biceps).unwrap();
    assert_eq!(first.id, second.id);
    assert_eq!(catalog_stats(&conn).unwrap().attribute_values, 1);
}

#[test]
fn resolve_picks_up_existing_rows() {
    let conn = open_memory().unwrap();
    let existing = insert_attribute_name(&conn, AttributeName::Equipment).unwrap();
    let value = insert_attribute_value(&conn, existing.id, AttributeValue::Cable).unwrap();

    let registry = AttributeRegistry::new(&conn);
    let name = registry.resolve_name(AttributeName::Equipment).unwrap();
    assert_eq!(name.id, existing.id);
    assert_eq!(
        registry.resolve_value(&name, AttributeValue::Cable).unwrap().id,
        value.id
    );
}

#[test]
fn attach_links_every_call() {
    let conn = open_memory().unwrap();
    let exercise_id = insert_plank(&conn);
    let registry = AttributeRegistry::new(&conn);

    let a = registry
        .attach(exercise_id, AttributeName::Type, AttributeValue::Strength)
        .unwrap();
    let b = registry
        .attach(exercise_id, AttributeName::Type, AttributeValue::Strength)
        .unwrap();
    assert_ne!(a.id, b.id);
    assert_eq!(a.attribute_value_id, b.attribute_value_id);
    assert_eq!(count_exercise_attributes(&conn).unwrap(), 2);
}

#[test]
fn link_error_propagates() {
    let conn = open_memory().unwrap();
    let registry = AttributeRegistry::new(&conn);
    assert!(
        registry
            .attach(404, AttributeName::Type, AttributeValue::Cardio)
            .is_err()
    );
}
