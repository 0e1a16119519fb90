//! Repository for the `photos` table.

use jph_core::types::DbId;
use sqlx::{PgConnection, PgPool, Postgres, QueryBuilder};

use super::rows_per_statement;
use crate::models::photo::Photo;

const COLUMNS: &str = "id, album_id, title, url, thumbnail_url";

const COLUMN_COUNT: usize = 5;

/// Bulk insert and lookup for photos.
pub struct PhotoRepo;

impl PhotoRepo {
    /// Insert every photo in `photos`, returning the number of rows written.
    ///
    /// The photos collection is the largest one served by the source, so this
    /// is the batch most likely to span several statements.
    pub async fn insert_batch(
        conn: &mut PgConnection,
        photos: &[Photo],
    ) -> Result<u64, sqlx::Error> {
        let mut inserted = 0;
        for chunk in photos.chunks(rows_per_statement(COLUMN_COUNT)) {
            let mut builder =
                QueryBuilder::<Postgres>::new(format!("INSERT INTO photos ({COLUMNS}) "));
            builder.push_values(chunk, |mut row, photo| {
                row.push_bind(photo.id)
                    .push_bind(photo.album_id)
                    .push_bind(&photo.title)
                    .push_bind(&photo.url)
                    .push_bind(&photo.thumbnail_url);
            });
            inserted += builder.build().execute(&mut *conn).await?.rows_affected();
        }
        Ok(inserted)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Photo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM photos WHERE id = $1");
        sqlx::query_as::<_, Photo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Photos in one album, ordered by id.
    pub async fn list_by_album(
        pool: &PgPool,
        album_id: DbId,
    ) -> Result<Vec<Photo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM photos WHERE album_id = $1 ORDER BY id");
        sqlx::query_as::<_, Photo>(&query)
            .bind(album_id)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM photos")
            .fetch_one(pool)
            .await
    }
}
