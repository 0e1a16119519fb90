//! Repository for the `posts` table.

use jph_core::types::DbId;
use sqlx::{PgConnection, PgPool, Postgres, QueryBuilder};

use super::rows_per_statement;
use crate::models::post::Post;

const COLUMNS: &str = "id, user_id, title, body";

const COLUMN_COUNT: usize = 4;

/// Bulk insert and lookup for posts.
pub struct PostRepo;

impl PostRepo {
    /// Insert every post in `posts`, returning the number of rows written.
    ///
    /// Each `user_id` must already exist in `users`.
    pub async fn insert_batch(conn: &mut PgConnection, posts: &[Post]) -> Result<u64, sqlx::Error> {
        let mut inserted = 0;
        for chunk in posts.chunks(rows_per_statement(COLUMN_COUNT)) {
            let mut builder =
                QueryBuilder::<Postgres>::new(format!("INSERT INTO posts ({COLUMNS}) "));
            builder.push_values(chunk, |mut row, post| {
                row.push_bind(post.id)
                    .push_bind(post.user_id)
                    .push_bind(&post.title)
                    .push_bind(&post.body);
            });
            inserted += builder.build().execute(&mut *conn).await?.rows_affected();
        }
        Ok(inserted)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts WHERE id = $1");
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all posts written by one user, ordered by id.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts WHERE user_id = $1 ORDER BY id");
        sqlx::query_as::<_, Post>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM posts")
            .fetch_one(pool)
            .await
    }
}
