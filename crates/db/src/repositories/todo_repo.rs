//! Repository for the `todos` table.

use jph_core::types::DbId;
use sqlx::{PgConnection, PgPool, Postgres, QueryBuilder};

use super::rows_per_statement;
use crate::models::todo::Todo;

const COLUMNS: &str = "id, user_id, title, completed";

const COLUMN_COUNT: usize = 4;

/// Bulk insert and lookup for todos.
pub struct TodoRepo;

impl TodoRepo {
    /// Insert every todo in `todos`, returning the number of rows written.
    pub async fn insert_batch(conn: &mut PgConnection, todos: &[Todo]) -> Result<u64, sqlx::Error> {
        let mut inserted = 0;
        for chunk in todos.chunks(rows_per_statement(COLUMN_COUNT)) {
            let mut builder =
                QueryBuilder::<Postgres>::new(format!("INSERT INTO todos ({COLUMNS}) "));
            builder.push_values(chunk, |mut row, todo| {
                row.push_bind(todo.id)
                    .push_bind(todo.user_id)
                    .push_bind(&todo.title)
                    .push_bind(todo.completed);
            });
            inserted += builder.build().execute(&mut *conn).await?.rows_affected();
        }
        Ok(inserted)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE id = $1");
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// A user's todos, ordered by id.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE user_id = $1 ORDER BY id");
        sqlx::query_as::<_, Todo>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM todos")
            .fetch_one(pool)
            .await
    }
}
