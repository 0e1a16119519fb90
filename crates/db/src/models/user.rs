//! User entity model.

use jph_core::error::MapError;
use jph_core::types::{DbId, Record};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use super::{take_i64, take_optional, take_optional_string, FromRecord};

/// Full row from the `users` table.
///
/// `address` and `company` are nested objects in the source and are stored
/// as JSONB without further interpretation. Only `id` is required.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: DbId,
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub address: Option<Value>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub company: Option<Value>,
}

impl FromRecord for User {
    fn from_record(mut record: Record) -> Result<Self, MapError> {
        Ok(Self {
            id: take_i64(&mut record, "id")?,
            name: take_optional_string(&mut record, "name")?,
            username: take_optional_string(&mut record, "username")?,
            email: take_optional_string(&mut record, "email")?,
            address: take_optional(&mut record, "address"),
            phone: take_optional_string(&mut record, "phone")?,
            website: take_optional_string(&mut record, "website")?,
            company: take_optional(&mut record, "company"),
        })
    }
}
