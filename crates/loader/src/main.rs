//! `jph-loader` -- one-shot loader for the placeholder API collections.
//!
//! Fetches users, posts, comments, albums, photos and todos, in that
//! order, and bulk-inserts them into PostgreSQL. Takes no arguments;
//! exits with status 1 on any failure.
//!
//! # Environment variables
//!
//! See [`LoaderConfig::from_env`] for the full list. Logging honours
//! `RUST_LOG`; set `LOG_FORMAT=json` for JSON lines.

use jph_loader::config::LoaderConfig;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jph_loader=info,jph_db=info,jph_fetcher=info".into()),
        )
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(|| tracing_subscriber::fmt::layer()))
        .init();

    let config = LoaderConfig::from_env().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        std::process::exit(1);
    });

    tracing::info!(
        api_base_url = %config.api_base_url,
        mode = %config.transaction_mode,
        "Starting jph-loader",
    );

    match jph_loader::run(&config).await {
        Ok(report) => {
            for count in &report.resources {
                tracing::info!(
                    resource = %count.resource,
                    fetched = count.fetched,
                    inserted = count.inserted,
                    "Loaded"
                );
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "Error processing data");
            std::process::exit(1);
        }
    }
}
