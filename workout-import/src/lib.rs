//! Import free-exercise-db records into the exercise catalog database.
//!
//! This crate owns all ETL logic: deduplicating by slug, creating catalog
//! exercises, mapping source vocabulary onto attribute links, and tallying
//! per-record outcomes without letting one bad record stop the run.

pub mod exercise_import;
pub mod progress;
pub mod registry;

pub use exercise_import::{
    DEFAULT_IMAGE_BASE_URL, ImportError, ImportOptions, ImportStats, LinkFailurePolicy,
    RecordFailure, RecordOutcome, SOURCE_TYPE, build_description, image_url, import_all,
    import_record, log_import, plan_attributes,
};
pub use progress::{ImportProgress, LogProgress, SilentProgress};
pub use registry::AttributeRegistry;
