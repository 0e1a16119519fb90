//! The whole entry point: readiness, schema, client, load and pool close,
//! driven from a [`LoaderConfig`] the way the binary does.

mod common;

use std::time::Duration;

use assert_matches::assert_matches;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};

use common::{row_counts, spawn_api};
use jph_core::resource::Resource;
use jph_db::ReadinessPolicy;
use jph_fetcher::FetchError;
use jph_loader::config::LoaderConfig;
use jph_loader::error::{AppError, LoadError};
use jph_loader::session::TransactionMode;

fn config(database_url: String, api_base_url: String, mode: TransactionMode) -> LoaderConfig {
    LoaderConfig {
        database_url,
        api_base_url,
        http_timeout: Some(Duration::from_secs(5)),
        transaction_mode: mode,
        readiness: ReadinessPolicy {
            attempts: 1,
            delay: Duration::ZERO,
        },
    }
}

#[sqlx::test]
async fn run_loads_every_resource_into_a_fresh_database(
    _pool_options: PgPoolOptions,
    connect_options: PgConnectOptions,
) {
    let base = spawn_api(None).await;
    let config = config(
        connect_options.to_url_lossy().to_string(),
        base,
        TransactionMode::PerResource,
    );

    let report = jph_loader::run(&config).await.unwrap();

    assert_eq!(report.mode, TransactionMode::PerResource);
    assert_eq!(report.total_inserted(), 17);
    assert!(report.finished_at.is_some());
    for resource in Resource::LOAD_ORDER {
        let count = report.count(resource).unwrap();
        assert_eq!(count.inserted as usize, count.fetched, "{resource}");
    }

    let pool = PgPool::connect_with(connect_options).await.unwrap();
    assert_eq!(row_counts(&pool).await, [2, 3, 4, 2, 3, 3]);
}

#[sqlx::test]
async fn run_reports_failed_resource_as_load_error(
    _pool_options: PgPoolOptions,
    connect_options: PgConnectOptions,
) {
    let base = spawn_api(Some(Resource::Comments)).await;
    let config = config(
        connect_options.to_url_lossy().to_string(),
        base,
        TransactionMode::PerResource,
    );

    let err = jph_loader::run(&config).await.unwrap_err();

    assert_matches!(
        err,
        AppError::Load(LoadError::Fetch {
            resource: Resource::Comments,
            ..
        })
    );
    let pool = PgPool::connect_with(connect_options).await.unwrap();
    assert_eq!(row_counts(&pool).await, [2, 3, 0, 0, 0, 0]);
}

#[sqlx::test]
async fn run_in_single_mode_leaves_nothing_after_failure(
    _pool_options: PgPoolOptions,
    connect_options: PgConnectOptions,
) {
    let base = spawn_api(Some(Resource::Comments)).await;
    let config = config(
        connect_options.to_url_lossy().to_string(),
        base,
        TransactionMode::Single,
    );

    let err = jph_loader::run(&config).await.unwrap_err();

    assert_matches!(err, AppError::Load(ref e) if e.resource() == Some(Resource::Comments));
    let pool = PgPool::connect_with(connect_options).await.unwrap();
    assert_eq!(row_counts(&pool).await, [0; 6]);
}

#[tokio::test]
async fn unreachable_database_is_reported_as_unavailable() {
    let config = config(
        "postgres://loader@127.0.0.1:1/jph".to_string(),
        "http://127.0.0.1:1".to_string(),
        TransactionMode::PerResource,
    );

    let err = jph_loader::run(&config).await.unwrap_err();

    assert_matches!(err, AppError::Database(_));
    assert!(err.to_string().starts_with("Database unavailable"));
}

#[tokio::test]
async fn bad_api_base_url_fails_before_touching_the_database() {
    // The database URL is never dialled: the client is built first.
    let config = config(
        "postgres://loader@127.0.0.1:1/jph".to_string(),
        "ftp://jsonplaceholder.typicode.com".to_string(),
        TransactionMode::PerResource,
    );

    let err = jph_loader::run(&config).await.unwrap_err();

    assert_matches!(err, AppError::Client(FetchError::InvalidBaseUrl { .. }));
}
