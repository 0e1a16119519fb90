//! Repository for the `users` table.

use jph_core::types::DbId;
use sqlx::{PgConnection, PgPool, Postgres, QueryBuilder};

use super::rows_per_statement;
use crate::models::user::User;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, username, email, address, phone, website, company";

const COLUMN_COUNT: usize = 8;

/// Bulk insert and lookup for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert every user in `users`, returning the number of rows written.
    ///
    /// Rows are split across as many statements as the bind-parameter limit
    /// requires; all of them run on `conn`, so they share its transaction.
    pub async fn insert_batch(conn: &mut PgConnection, users: &[User]) -> Result<u64, sqlx::Error> {
        let mut inserted = 0;
        for chunk in users.chunks(rows_per_statement(COLUMN_COUNT)) {
            let mut builder =
                QueryBuilder::<Postgres>::new(format!("INSERT INTO users ({COLUMNS}) "));
            builder.push_values(chunk, |mut row, user| {
                row.push_bind(user.id)
                    .push_bind(&user.name)
                    .push_bind(&user.username)
                    .push_bind(&user.email)
                    .push_bind(&user.address)
                    .push_bind(&user.phone)
                    .push_bind(&user.website)
                    .push_bind(&user.company);
            });
            inserted += builder.build().execute(&mut *conn).await?.rows_affected();
        }
        Ok(inserted)
    }

    /// Find a user by source id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by username (case-sensitive).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await
    }
}
