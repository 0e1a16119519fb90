//! Repository for the `albums` table.

use jph_core::types::DbId;
use sqlx::{PgConnection, PgPool, Postgres, QueryBuilder};

use super::rows_per_statement;
use crate::models::album::Album;

const COLUMNS: &str = "id, user_id, title";

const COLUMN_COUNT: usize = 3;

/// Bulk insert and lookup for albums.
pub struct AlbumRepo;

impl AlbumRepo {
    /// Insert every album in `albums`, returning the number of rows written.
    pub async fn insert_batch(
        conn: &mut PgConnection,
        albums: &[Album],
    ) -> Result<u64, sqlx::Error> {
        let mut inserted = 0;
        for chunk in albums.chunks(rows_per_statement(COLUMN_COUNT)) {
            let mut builder =
                QueryBuilder::<Postgres>::new(format!("INSERT INTO albums ({COLUMNS}) "));
            builder.push_values(chunk, |mut row, album| {
                row.push_bind(album.id)
                    .push_bind(album.user_id)
                    .push_bind(&album.title);
            });
            inserted += builder.build().execute(&mut *conn).await?.rows_affected();
        }
        Ok(inserted)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Album>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM albums WHERE id = $1");
        sqlx::query_as::<_, Album>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// A user's albums, ordered by id.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Album>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM albums WHERE user_id = $1 ORDER BY id");
        sqlx::query_as::<_, Album>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM albums")
            .fetch_one(pool)
            .await
    }
}
