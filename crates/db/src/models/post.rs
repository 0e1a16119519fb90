//! Post entity model.

use jph_core::error::MapError;
use jph_core::types::{DbId, Record};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{deserialize_record, FromRecord};

/// Full row from the `posts` table. References `users.id`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: DbId,
    pub user_id: DbId,
    pub title: Option<String>,
    pub body: Option<String>,
}

impl FromRecord for Post {
    fn from_record(record: Record) -> Result<Self, MapError> {
        deserialize_record(record)
    }
}
