//! Entity models for the six loaded tables, and their mapping from raw
//! source records.
//!
//! [`User`](user::User) maps explicitly, field by field. The other five
//! entities mirror the source JSON and map structurally through serde.

pub mod album;
pub mod comment;
pub mod photo;
pub mod post;
pub mod todo;
pub mod user;

use jph_core::error::{MapError, RecordError};
use jph_core::resource::Resource;
use jph_core::types::Record;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Conversion from one raw source record into an entity.
pub trait FromRecord: Sized {
    fn from_record(record: Record) -> Result<Self, MapError>;
}

/// Map every record of a collection, stopping at the first failure.
pub fn map_records<T: FromRecord>(
    resource: Resource,
    records: Vec<Record>,
) -> Result<Vec<T>, RecordError> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            T::from_record(record).map_err(|source| RecordError {
                resource,
                index,
                source,
            })
        })
        .collect()
}

/// Structural mapping: the record's keys already match the entity's
/// (camelCase) serde field names.
fn deserialize_record<T: DeserializeOwned>(record: Record) -> Result<T, MapError> {
    Ok(serde_json::from_value(Value::Object(record))?)
}

fn take(record: &mut Record, field: &'static str) -> Result<Value, MapError> {
    record
        .remove(field)
        .ok_or(MapError::MissingField { field })
}

fn take_i64(record: &mut Record, field: &'static str) -> Result<i64, MapError> {
    take(record, field)?.as_i64().ok_or(MapError::WrongType {
        field,
        expected: "an integer",
    })
}

/// Absent keys and JSON `null` both map to `None`.
fn take_optional(record: &mut Record, field: &str) -> Option<Value> {
    record.remove(field).filter(|v| !v.is_null())
}

fn take_optional_string(
    record: &mut Record,
    field: &'static str,
) -> Result<Option<String>, MapError> {
    match take_optional(record, field) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(_) => Err(MapError::WrongType {
            field,
            expected: "a string",
        }),
    }
}
