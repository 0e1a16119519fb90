//! `jph-loader` library crate.
//!
//! Loads the six source API collections into PostgreSQL. The binary
//! entrypoint lives in `main.rs`; everything it does is reachable from
//! [`run`] so integration tests can drive the same path.

pub mod batch;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod session;
pub mod state;

use tracing::Instrument;
use uuid::Uuid;

use jph_fetcher::JsonApiClient;

use crate::config::LoaderConfig;
use crate::error::AppError;
use crate::pipeline::Loader;
use crate::report::LoadReport;
use crate::session::LoadSession;

/// Wait for the database, ensure the schema, then load every resource.
///
/// Once the database is ready its pool is closed before returning, whether
/// the run succeeded or not.
pub async fn run(config: &LoaderConfig) -> Result<LoadReport, AppError> {
    let client = match config.http_timeout {
        Some(timeout) => JsonApiClient::with_timeout(&config.api_base_url, timeout)?,
        None => JsonApiClient::new(&config.api_base_url)?,
    };

    let pool = jph_db::wait_until_ready(&config.database_url, config.readiness).await?;
    let session = LoadSession::new(pool, config.transaction_mode);

    let result = load(&session, client).await;
    session.close().await;
    tracing::debug!("Database pool closed");

    result
}

async fn load(session: &LoadSession, client: JsonApiClient) -> Result<LoadReport, AppError> {
    jph_db::ensure_schema(session.pool())
        .await
        .map_err(AppError::Schema)?;
    tracing::info!("Database schema ensured");

    let span = tracing::info_span!("load", run_id = %Uuid::now_v7());
    Ok(Loader::new(client).run(session).instrument(span).await?)
}
