//! Get-or-create resolution for attribute names and values.
//!
//! Each (name) and (name, value) pair maps to exactly one stored row no
//! matter how many exercises reference it. Resolution is a lookup followed
//! by an insert on miss; it is not atomic, so callers must not resolve the
//! same key from two connections at once. The unique indexes in the schema
//! turn such a race into an insert error instead of a duplicate row.

use rusqlite::Connection;
use workout_catalog::types::*;
use workout_db::operations::{self, OperationError};

/// Resolves attribute rows against one connection.
pub struct AttributeRegistry<'c> {
    conn: &'c Connection,
}

impl<'c> AttributeRegistry<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    /// Return the row for `name`, inserting it if it does not exist yet.
    pub fn resolve_name(&self, name: AttributeName) -> Result<AttributeNameRow, OperationError> {
        if let Some(row) = operations::find_attribute_name(self.conn, name)? {
            return Ok(row);
        }
        log::debug!("Creating attribute name {}", name.as_str());
        operations::insert_attribute_name(self.conn, name)
    }

    /// Return the row for `value` under `name`, inserting it if needed.
    pub fn resolve_value(
        &self,
        name: &AttributeNameRow,
        value: AttributeValue,
    ) -> Result<AttributeValueRow, OperationError> {
        if let Some(row) = operations::find_attribute_value(self.conn, name.id, value)? {
            return Ok(row);
        }
        log::debug!(
            "Creating attribute value {}={}",
            name.name.as_str(),
            value.as_str()
        );
        operations::insert_attribute_value(self.conn, name.id, value)
    }

    /// Link an exercise to a resolved value. Always inserts.
    pub fn link(
        &self,
        exercise_id: i64,
        value: &AttributeValueRow,
    ) -> Result<ExerciseAttribute, OperationError> {
        operations::insert_exercise_attribute(self.conn, exercise_id, value)
    }

    /// Resolve `name` and `value`, then link them to the exercise.
    pub fn attach(
        &self,
        exercise_id: i64,
        name: AttributeName,
        value: AttributeValue,
    ) -> Result<ExerciseAttribute, OperationError> {
        let name_row = self.resolve_name(name)?;
        let value_row = self.resolve_value(&name_row, value)?;
        self.link(exercise_id, &value_row)
    }
}
