//! SQLite persistence layer for the exercise catalog.
//!
//! Provides schema creation, find/create/count operations, and read
//! queries backed by SQLite (via rusqlite with bundled feature).

pub mod operations;
pub mod queries;
pub mod schema;

pub use operations::{
    OperationError, find_attribute_name, find_attribute_value, find_exercise_by_slug,
    insert_attribute_name, insert_attribute_value, insert_exercise, insert_exercise_attribute,
    insert_import_log,
};
pub use queries::{
    CatalogStats, attributes_for_exercise, catalog_stats, count_exercise_attributes,
    count_exercises, list_exercises, list_import_logs,
};
pub use schema::{SchemaError, open_database, open_memory};
