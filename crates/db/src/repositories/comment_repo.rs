//! Repository for the `comments` table.

use jph_core::types::DbId;
use sqlx::{PgConnection, PgPool, Postgres, QueryBuilder};

use super::rows_per_statement;
use crate::models::comment::Comment;

const COLUMNS: &str = "id, post_id, name, email, body";

const COLUMN_COUNT: usize = 5;

/// Bulk insert and lookup for comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert every comment in `comments`, returning the number of rows
    /// written. Each `post_id` must already exist in `posts`.
    pub async fn insert_batch(
        conn: &mut PgConnection,
        comments: &[Comment],
    ) -> Result<u64, sqlx::Error> {
        let mut inserted = 0;
        for chunk in comments.chunks(rows_per_statement(COLUMN_COUNT)) {
            let mut builder =
                QueryBuilder::<Postgres>::new(format!("INSERT INTO comments ({COLUMNS}) "));
            builder.push_values(chunk, |mut row, comment| {
                row.push_bind(comment.id)
                    .push_bind(comment.post_id)
                    .push_bind(&comment.name)
                    .push_bind(&comment.email)
                    .push_bind(&comment.body);
            });
            inserted += builder.build().execute(&mut *conn).await?.rows_affected();
        }
        Ok(inserted)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE id = $1");
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Comments on one post, ordered by id.
    pub async fn list_by_post(pool: &PgPool, post_id: DbId) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE post_id = $1 ORDER BY id");
        sqlx::query_as::<_, Comment>(&query)
            .bind(post_id)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM comments")
            .fetch_one(pool)
            .await
    }
}
