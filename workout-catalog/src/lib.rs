//! Exercise catalog data model, JSON source loading, slugs and vocabulary mapping.
//!
//! This crate defines the catalog data model without any database
//! dependencies. `workout-db` persists these types and `workout-import`
//! drives the mapping from source records to catalog rows.

pub mod slug;
pub mod source;
pub mod types;
pub mod vocabulary;

pub use slug::slugify;
pub use source::{LoadError, load_source_records, parse_source_records};
pub use types::*;
pub use vocabulary::{Vocabulary, map_category, map_equipment, map_mechanic, map_muscle};
