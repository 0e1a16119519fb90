//! Comment entity model.

use jph_core::error::MapError;
use jph_core::types::{DbId, Record};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{deserialize_record, FromRecord};

/// Full row from the `comments` table. References `posts.id`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: DbId,
    pub post_id: DbId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub body: Option<String>,
}

impl FromRecord for Comment {
    fn from_record(record: Record) -> Result<Self, MapError> {
        deserialize_record(record)
    }
}
