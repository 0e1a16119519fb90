use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// The load runs one statement at a time; a second connection only serves
/// ad-hoc reads such as row counts.
const MAX_CONNECTIONS: u32 = 2;

/// Upper bound on a single connection attempt inside [`create_pool`].
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

const SCHEMA_SQL: &str = include_str!("../sql/schema.sql");

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to prove the server is accepting work.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Create the six tables and their indexes if they do not exist yet.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA_SQL).execute(pool).await?;
    Ok(())
}

/// How long [`wait_until_ready`] keeps trying before giving up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadinessPolicy {
    /// Total connection attempts, including the first. Zero behaves as one.
    pub attempts: u32,
    /// Pause between a failed attempt and the next one.
    pub delay: Duration,
}

impl Default for ReadinessPolicy {
    fn default() -> Self {
        Self {
            attempts: 10,
            delay: Duration::from_secs(1),
        }
    }
}

/// Connect and health-check the database, retrying on failure.
///
/// Returns the ready pool, or the error of the final attempt once
/// `policy.attempts` is exhausted.
pub async fn wait_until_ready(
    database_url: &str,
    policy: ReadinessPolicy,
) -> Result<DbPool, sqlx::Error> {
    let attempts = policy.attempts.max(1);
    let mut attempt = 1;

    loop {
        match connect_and_check(database_url).await {
            Ok(pool) => {
                tracing::info!(attempt, "Database is ready");
                return Ok(pool);
            }
            Err(e) if attempt < attempts => {
                tracing::warn!(
                    attempt,
                    max_attempts = attempts,
                    error = %e,
                    "Database not ready, retrying"
                );
                tokio::time::sleep(policy.delay).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

async fn connect_and_check(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let pool = create_pool(database_url).await?;
    health_check(&pool).await?;
    Ok(pool)
}
