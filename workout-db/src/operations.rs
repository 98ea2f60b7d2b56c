//! Find and create operations for catalog entities.
//!
//! Every lookup returns the first matching row; every insert is a plain
//! `INSERT` with no conflict handling. Get-or-create logic lives in the
//! importer, not here.

use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, params};
use thiserror::Error;
use workout_catalog::types::*;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

// ── Exercise Operations ─────────────────────────────────────────────────────

/// Insert a new exercise. `id` and `created_at` on the input are ignored.
/// Returns the generated row ID.
pub fn insert_exercise(conn: &Connection, exercise: &Exercise) -> Result<i64, OperationError> {
    conn.execute(
        "INSERT INTO exercises (name, name_en, description, description_en,
             slug, slug_en, full_video_image_url)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            exercise.name,
            exercise.name_en,
            exercise.description,
            exercise.description_en,
            exercise.slug,
            exercise.slug_en,
            exercise.full_video_image_url,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Find the first exercise whose slug matches in either locale.
pub fn find_exercise_by_slug(
    conn: &Connection,
    slug: &str,
) -> Result<Option<Exercise>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, name_en, description, description_en, slug, slug_en,
                full_video_image_url, created_at
         FROM exercises WHERE slug = ?1 OR slug_en = ?1
         ORDER BY id LIMIT 1",
    )?;
    let result = stmt.query_row(params![slug], row_to_exercise).optional()?;
    Ok(result)
}

pub(crate) fn row_to_exercise(row: &rusqlite::Row<'_>) -> rusqlite::Result<Exercise> {
    Ok(Exercise {
        id: row.get(0)?,
        name: row.get(1)?,
        name_en: row.get(2)?,
        description: row.get(3)?,
        description_en: row.get(4)?,
        slug: row.get(5)?,
        slug_en: row.get(6)?,
        full_video_image_url: row.get(7)?,
        created_at: row.get(8)?,
    })
}

// ── Attribute Name Operations ───────────────────────────────────────────────

/// Find an attribute name row by its enumerant.
pub fn find_attribute_name(
    conn: &Connection,
    name: AttributeName,
) -> Result<Option<AttributeNameRow>, OperationError> {
    let result = conn
        .query_row(
            "SELECT id FROM exercise_attribute_names WHERE name = ?1 ORDER BY id LIMIT 1",
            params![name.as_str()],
            |row| row.get::<_, i64>(0),
        )
        .optional()?;
    Ok(result.map(|id| AttributeNameRow { id, name }))
}

/// Insert an attribute name row.
pub fn insert_attribute_name(
    conn: &Connection,
    name: AttributeName,
) -> Result<AttributeNameRow, OperationError> {
    conn.execute(
        "INSERT INTO exercise_attribute_names (name) VALUES (?1)",
        params![name.as_str()],
    )?;
    Ok(AttributeNameRow {
        id: conn.last_insert_rowid(),
        name,
    })
}

// ── Attribute Value Operations ──────────────────────────────────────────────

/// Find an attribute value row scoped to `attribute_name_id`.
pub fn find_attribute_value(
    conn: &Connection,
    attribute_name_id: i64,
    value: AttributeValue,
) -> Result<Option<AttributeValueRow>, OperationError> {
    let result = conn
        .query_row(
            "SELECT id FROM exercise_attribute_values
             WHERE attribute_name_id = ?1 AND value = ?2
             ORDER BY id LIMIT 1",
            params![attribute_name_id, value.as_str()],
            |row| row.get::<_, i64>(0),
        )
        .optional()?;
    Ok(result.map(|id| AttributeValueRow {
        id,
        attribute_name_id,
        value,
    }))
}

/// Insert an attribute value row under `attribute_name_id`.
pub fn insert_attribute_value(
    conn: &Connection,
    attribute_name_id: i64,
    value: AttributeValue,
) -> Result<AttributeValueRow, OperationError> {
    conn.execute(
        "INSERT INTO exercise_attribute_values (attribute_name_id, value) VALUES (?1, ?2)",
        params![attribute_name_id, value.as_str()],
    )?;
    Ok(AttributeValueRow {
        id: conn.last_insert_rowid(),
        attribute_name_id,
        value,
    })
}

// ── Link Operations ─────────────────────────────────────────────────────────

/// Link an exercise to an attribute value. No duplicate check is made.
pub fn insert_exercise_attribute(
    conn: &Connection,
    exercise_id: i64,
    value: &AttributeValueRow,
) -> Result<ExerciseAttribute, OperationError> {
    conn.execute(
        "INSERT INTO exercise_attributes (exercise_id, attribute_name_id, attribute_value_id)
         VALUES (?1, ?2, ?3)",
        params![exercise_id, value.attribute_name_id, value.id],
    )?;
    Ok(ExerciseAttribute {
        id: conn.last_insert_rowid(),
        exercise_id,
        attribute_name_id: value.attribute_name_id,
        attribute_value_id: value.id,
    })
}

// ── Import Log Operations ───────────────────────────────────────────────────

/// Record an import run.
pub fn insert_import_log(conn: &Connection, log: &ImportLog) -> Result<i64, OperationError> {
    conn.execute(
        "INSERT INTO import_log (source_type, source_name, imported_at,
             records_created, records_skipped, records_failed)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            log.source_type,
            log.source_name,
            log.imported_at,
            log.records_created,
            log.records_skipped,
            log.records_failed,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

// ── Helpers ─────────────────────────────────────────────────────────────────

pub(crate) fn parse_attribute_name(idx: usize, s: &str) -> rusqlite::Result<AttributeName> {
    AttributeName::from_db_str(s)
        .ok_or_else(|| rusqlite::Error::InvalidColumnType(idx, s.to_string(), Type::Text))
}

pub(crate) fn parse_attribute_value(idx: usize, s: &str) -> rusqlite::Result<AttributeValue> {
    AttributeValue::from_db_str(s)
        .ok_or_else(|| rusqlite::Error::InvalidColumnType(idx, s.to_string(), Type::Text))
}
