use std::io::Write;

use workout_catalog::*;

const SAMPLE: &str = r#"[
  {
    "id": "3_4_Sit-Up",
    "name": "3/4 Sit-Up",
    "force": "pull",
    "level": "beginner",
    "mechanic": "compound",
    "equipment": "body only",
    "primaryMuscles": ["abdominals"],
    "secondaryMuscles": [],
    "instructions": ["Lie down on the floor.", "Flex your hips."],
    "category": "strength",
    "images": ["3_4_Sit-Up/0.jpg", "3_4_Sit-Up/1.jpg"]
  },
  {
    "id": "Ab_Roller",
    "name": "Ab Roller",
    "force": null,
    "level": "intermediate",
    "mechanic": null,
    "equipment": null,
    "primaryMuscles": ["abdominals"],
    "secondaryMuscles": ["shoulders"],
    "instructions": [],
    "category": "strength",
    "images": []
  }
]"#;

#[test]
fn parse_full_record() {
    let records = parse_source_records(SAMPLE).unwrap();
    assert_eq!(records.len(), 2);

    let r = &records[0];
    assert_eq!(r.id, "3_4_Sit-Up");
    assert_eq!(r.name, "3/4 Sit-Up");
    assert_eq!(r.force.as_deref(), Some("pull"));
    assert_eq!(r.mechanic.as_deref(), Some("compound"));
    assert_eq!(r.equipment.as_deref(), Some("body only"));
    assert_eq!(r.primary_muscles, vec!["abdominals"]);
    assert_eq!(r.instructions.len(), 2);
    assert_eq!(r.images[0], "3_4_Sit-Up/0.jpg");
}

#[test]
fn nulls_become_none() {
    let records = parse_source_records(SAMPLE).unwrap();
    let r = &records[1];
    assert!(r.force.is_none());
    assert!(r.mechanic.is_none());
    assert!(r.equipment.is_none());
    assert!(r.images.is_empty());
}

#[test]
fn missing_fields_default() {
    let records = parse_source_records(r#"[{"name": "Plank"}]"#).unwrap();
    assert_eq!(records[0].name, "Plank");
    assert!(records[0].primary_muscles.is_empty());
    assert!(records[0].category.is_none());
}

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();

    let records = load_source_records(file.path()).unwrap();
    assert_eq!(records.len(), 2);
}

#[test]
fn missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_source_records(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, LoadError::NotFound(_)));
}

#[test]
fn non_array_document_is_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{"name": "Plank"}"#).unwrap();

    let err = load_source_records(file.path()).unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));
}

#[test]
fn null_arrays_and_id_default_to_empty() {
    let records = parse_source_records(
        r#"[{
            "id": null,
            "name": "Plank",
            "primaryMuscles": null,
            "secondaryMuscles": null,
            "instructions": null,
            "images": null
        }]"#,
    )
    .unwrap();
    let r = &records[0];
    assert_eq!(r.id, "");
    assert!(r.primary_muscles.is_empty());
    assert!(r.secondary_muscles.is_empty());
    assert!(r.instructions.is_empty());
    assert!(r.images.is_empty());
}

#[test]
fn one_null_array_does_not_reject_the_file() {
    let records = parse_source_records(
        r#"[
            {"name": "Squat", "images": ["Squat/0.jpg"]},
            {"name": "Plank", "images": null},
            {"name": "Lunge", "primaryMuscles": ["quadriceps"]}
        ]"#,
    )
    .unwrap();
    assert_eq!(records.len(), 3);
    assert!(records[1].images.is_empty());
    assert_eq!(records[2].primary_muscles, vec!["quadriceps"]);
}
