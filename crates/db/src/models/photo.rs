//! Photo entity model.

use jph_core::error::MapError;
use jph_core::types::{DbId, Record};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{deserialize_record, FromRecord};

/// Full row from the `photos` table. References `albums.id`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: DbId,
    pub album_id: DbId,
    pub title: Option<String>,
    pub url: Option<String>,
    pub thumbnail_url: Option<String>,
}

impl FromRecord for Photo {
    fn from_record(record: Record) -> Result<Self, MapError> {
        deserialize_record(record)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;

    #[test]
    fn maps_thumbnail_url() {
        let Value::Object(record) = json!({
            "albumId": 1,
            "id": 1,
            "title": "accusamus beatae ad facilis cum similique qui sunt",
            "url": "https://via.placeholder.com/600/92c952",
            "thumbnailUrl": "https://via.placeholder.com/150/92c952"
        }) else {
            unreachable!()
        };

        let photo = Photo::from_record(record).unwrap();

        assert_eq!(photo.album_id, 1);
        assert_eq!(
            photo.thumbnail_url.as_deref(),
            Some("https://via.placeholder.com/150/92c952")
        );
    }
}
