//! Read queries for the catalog database.
//!
//! Counts for post-import auditing, plus listing helpers for consumers
//! that read imported exercises back.

use rusqlite::{Connection, params};
use workout_catalog::types::*;

use crate::operations::{
    OperationError, parse_attribute_name, parse_attribute_value, row_to_exercise,
};

// ── Counts ──────────────────────────────────────────────────────────────────

/// Total number of stored exercises.
pub fn count_exercises(conn: &Connection) -> Result<i64, OperationError> {
    let n = conn.query_row("SELECT COUNT(*) FROM exercises", [], |r| r.get(0))?;
    Ok(n)
}

/// Total number of exercise ↔ attribute links.
pub fn count_exercise_attributes(conn: &Connection) -> Result<i64, OperationError> {
    let n = conn.query_row("SELECT COUNT(*) FROM exercise_attributes", [], |r| {
        r.get(0)
    })?;
    Ok(n)
}

/// Summary statistics for the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogStats {
    pub exercises: i64,
    pub attribute_names: i64,
    pub attribute_values: i64,
    pub attribute_links: i64,
    pub import_runs: i64,
}

/// Get summary statistics for the catalog.
pub fn catalog_stats(conn: &Connection) -> Result<CatalogStats, OperationError> {
    let attribute_names: i64 =
        conn.query_row("SELECT COUNT(*) FROM exercise_attribute_names", [], |r| {
            r.get(0)
        })?;
    let attribute_values: i64 =
        conn.query_row("SELECT COUNT(*) FROM exercise_attribute_values", [], |r| {
            r.get(0)
        })?;
    let import_runs: i64 = conn.query_row("SELECT COUNT(*) FROM import_log", [], |r| r.get(0))?;

    Ok(CatalogStats {
        exercises: count_exercises(conn)?,
        attribute_names,
        attribute_values,
        attribute_links: count_exercise_attributes(conn)?,
        import_runs,
    })
}

// ── Exercise Lookups ────────────────────────────────────────────────────────

/// List all exercises ordered by name.
pub fn list_exercises(conn: &Connection) -> Result<Vec<Exercise>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, name_en, description, description_en, slug, slug_en,
                full_video_image_url, created_at
         FROM exercises ORDER BY name, id",
    )?;
    let rows = stmt.query_map([], row_to_exercise)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// All (name, value) attribute pairs linked to an exercise, in link order.
pub fn attributes_for_exercise(
    conn: &Connection,
    exercise_id: i64,
) -> Result<Vec<(AttributeName, AttributeValue)>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT n.name, v.value
         FROM exercise_attributes a
         JOIN exercise_attribute_names n ON n.id = a.attribute_name_id
         JOIN exercise_attribute_values v ON v.id = a.attribute_value_id
         WHERE a.exercise_id = ?1
         ORDER BY a.id",
    )?;
    let rows = stmt.query_map(params![exercise_id], |row| {
        let name: String = row.get(0)?;
        let value: String = row.get(1)?;
        Ok((parse_attribute_name(0, &name)?, parse_attribute_value(1, &value)?))
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Import Log ──────────────────────────────────────────────────────────────

/// List recent import runs, newest first.
pub fn list_import_logs(
    conn: &Connection,
    limit: Option<u32>,
) -> Result<Vec<ImportLog>, OperationError> {
    let limit = limit.unwrap_or(20);
    let mut stmt = conn.prepare(
        "SELECT id, source_type, source_name, imported_at,
                records_created, records_skipped, records_failed
         FROM import_log ORDER BY imported_at DESC, id DESC LIMIT ?1",
    )?;
    let rows = stmt.query_map(params![limit], |row| {
        Ok(ImportLog {
            id: row.get(0)?,
            source_type: row.get(1)?,
            source_name: row.get(2)?,
            imported_at: row.get(3)?,
            records_created: row.get(4)?,
            records_skipped: row.get(5)?,
            records_failed: row.get(6)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}
