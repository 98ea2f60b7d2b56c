//! Import free-exercise-db records into the catalog database.
//!
//! Each `SourceRecord` is keyed by the slug of its name. A record whose slug
//! is already stored is skipped, never merged. New records become one
//! `exercises` row plus one attribute link per mapped category, muscle,
//! equipment and mechanic term.

use std::collections::HashSet;

use rusqlite::Connection;
use thiserror::Error;
use workout_catalog::types::*;
use workout_catalog::{map_category, map_equipment, map_mechanic, map_muscle, slugify};
use workout_db::operations::{self, OperationError};

use crate::progress::ImportProgress;
use crate::registry::AttributeRegistry;

/// Source type recorded in the import log.
pub const SOURCE_TYPE: &str = "free-exercise-db";

/// Where free-exercise-db serves the images referenced by `images[]`.
pub const DEFAULT_IMAGE_BASE_URL: &str =
    "https://raw.githubusercontent.com/yuhonas/free-exercise-db/main/exercises";

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Database error: {0}")]
    Db(#[from] OperationError),
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Name produces an empty slug")]
    EmptySlug,
}

/// What happens to an exercise row when one of its attribute links fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkFailurePolicy {
    /// Leave the exercise and any links created so far in place.
    KeepPartial,
    /// Run each record in its own transaction and roll it back on failure.
    #[default]
    Rollback,
}

/// Options controlling an import run.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Prefix joined with the first `images[]` entry to build the media URL.
    pub image_base_url: String,
    pub link_failure_policy: LinkFailurePolicy,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            link_failure_policy: LinkFailurePolicy::default(),
        }
    }
}

/// Result of importing a single record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    Imported { exercise_id: i64, links: usize },
    Skipped { slug: String },
    Failed(RecordFailure),
}

/// A record that could not be imported, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFailure {
    pub name: String,
    pub reason: String,
}

/// Statistics from a single import run.
#[derive(Debug, Default)]
pub struct ImportStats {
    pub total_records: u64,
    pub imported: u64,
    pub skipped: u64,
    pub errors: u64,
    pub links_created: u64,
    pub failures: Vec<RecordFailure>,
}

impl ImportStats {
    /// Fold one record outcome into the running tally.
    pub fn record(&mut self, outcome: &RecordOutcome) {
        match outcome {
            RecordOutcome::Imported { links, .. } => {
                self.imported += 1;
                self.links_created += *links as u64;
            }
            RecordOutcome::Skipped { .. } => self.skipped += 1,
            RecordOutcome::Failed(failure) => {
                self.errors += 1;
                self.failures.push(failure.clone());
            }
        }
    }

    /// True when `outcome` was the import that brought `imported` to a
    /// multiple of `every`. Call after [`ImportStats::record`]. `every == 0`
    /// never fires.
    pub fn is_progress_point(&self, outcome: &RecordOutcome, every: u64) -> bool {
        every > 0
            && matches!(outcome, RecordOutcome::Imported { .. })
            && self.imported.is_multiple_of(every)
    }
}

/// Import every record, in order, into the catalog database.
///
/// Never fails as a whole: a record that errors is logged, counted under
/// `errors`, and the run moves on to the next one.
pub fn import_all(
    conn: &Connection,
    records: &[SourceRecord],
    options: &ImportOptions,
    progress: Option<&dyn ImportProgress>,
) -> ImportStats {
    let mut stats = ImportStats {
        total_records: records.len() as u64,
        ..Default::default()
    };

    if let Some(p) = progress {
        p.on_phase(&format!("Importing {} exercises", records.len()));
    }

    for (i, record) in records.iter().enumerate() {
        let outcome = match import_record(conn, record, options) {
            Ok(outcome) => outcome,
            Err(e) => {
                log::error!("Error importing \"{}\": {}", record.name, e);
                RecordOutcome::Failed(RecordFailure {
                    name: record.name.clone(),
                    reason: e.to_string(),
                })
            }
        };
        stats.record(&outcome);

        if let Some(p) = progress {
            p.on_record(i + 1, records.len(), &outcome, &stats);
        }
    }

    if let Some(p) = progress {
        p.on_complete(&format!(
            "Import finished: {} imported, {} skipped, {} errors",
            stats.imported, stats.skipped, stats.errors
        ));
    }

    stats
}

/// Import a single record.
///
/// Returns `Skipped` when the slug is already stored. Under
/// [`LinkFailurePolicy::Rollback`] an error leaves no rows behind; under
/// `KeepPartial` the exercise and any links made before the error remain.
pub fn import_record(
    conn: &Connection,
    record: &SourceRecord,
    options: &ImportOptions,
) -> Result<RecordOutcome, ImportError> {
    match options.link_failure_policy {
        LinkFailurePolicy::KeepPartial => import_record_inner(conn, record, options),
        LinkFailurePolicy::Rollback => {
            let tx = conn.unchecked_transaction()?;
            let outcome = import_record_inner(&tx, record, options)?;
            tx.commit()?;
            Ok(outcome)
        }
    }
}

fn import_record_inner(
    conn: &Connection,
    record: &SourceRecord,
    options: &ImportOptions,
) -> Result<RecordOutcome, ImportError> {
    let slug = slugify(&record.name);
    if slug.is_empty() {
        return Err(ImportError::EmptySlug);
    }

    if operations::find_exercise_by_slug(conn, &slug)?.is_some() {
        log::debug!("Skipping \"{}\": slug '{}' already imported", record.name, slug);
        return Ok(RecordOutcome::Skipped { slug });
    }

    let description = build_description(&record.instructions);
    let exercise = Exercise {
        id: 0,
        name: record.name.clone(),
        name_en: record.name.clone(),
        description: description.clone(),
        description_en: description,
        slug: slug.clone(),
        slug_en: slug,
        full_video_image_url: image_url(&options.image_base_url, &record.images),
        created_at: String::new(),
    };
    let exercise_id = operations::insert_exercise(conn, &exercise)?;

    let registry = AttributeRegistry::new(conn);
    let planned = plan_attributes(record);
    for (name, value) in &planned {
        registry.attach(exercise_id, *name, *value)?;
    }

    Ok(RecordOutcome::Imported {
        exercise_id,
        links: planned.len(),
    })
}

/// Map a record's source vocabulary onto the attribute links it should get.
///
/// Order: TYPE, PRIMARY_MUSCLE..., SECONDARY_MUSCLE..., EQUIPMENT,
/// MECHANICS_TYPE. Muscles are deduplicated per record, and a muscle that
/// is already primary is never also added as secondary. Unmapped terms are
/// dropped.
pub fn plan_attributes(record: &SourceRecord) -> Vec<(AttributeName, AttributeValue)> {
    let mut planned = Vec::new();

    if let Some(value) = record.category.as_deref().and_then(map_category) {
        planned.push((AttributeName::Type, value));
    }

    let mut primary = HashSet::new();
    for muscle in &record.primary_muscles {
        let Some(value) = map_muscle(muscle) else {
            continue;
        };
        if primary.insert(value) {
            planned.push((AttributeName::PrimaryMuscle, value));
        }
    }

    let mut secondary = HashSet::new();
    for muscle in &record.secondary_muscles {
        let Some(value) = map_muscle(muscle) else {
            continue;
        };
        if !primary.contains(&value) && secondary.insert(value) {
            planned.push((AttributeName::SecondaryMuscle, value));
        }
    }

    if let Some(value) = record.equipment.as_deref().and_then(map_equipment) {
        planned.push((AttributeName::Equipment, value));
    }

    if let Some(value) = record.mechanic.as_deref().and_then(map_mechanic) {
        planned.push((AttributeName::MechanicsType, value));
    }

    planned
}

/// Number the instructions one per line: `"1. …\n2. …"`.
pub fn build_description(instructions: &[String]) -> String {
    instructions
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {}", i + 1, step))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full URL of the first image, if the record has any.
pub fn image_url(base_url: &str, images: &[String]) -> Option<String> {
    images
        .first()
        .map(|first| format!("{}/{}", base_url.trim_end_matches('/'), first))
}

/// Log an import run in the import_log table.
pub fn log_import(
    conn: &Connection,
    source_name: &str,
    stats: &ImportStats,
) -> Result<i64, ImportError> {
    let log_entry = ImportLog {
        id: 0,
        source_type: SOURCE_TYPE.to_string(),
        source_name: source_name.to_string(),
        imported_at: chrono::Utc::now().to_rfc3339(),
        records_created: stats.imported as i64,
        records_skipped: stats.skipped as i64,
        records_failed: stats.errors as i64,
    };
    let id = operations::insert_import_log(conn, &log_entry)?;
    Ok(id)
}
