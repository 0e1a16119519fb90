use jph_core::error::RecordError;
use jph_core::resource::Resource;
use jph_fetcher::FetchError;

use crate::config::ConfigError;

/// A failed load run. Whatever was in flight has been rolled back by the
/// time this is returned.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Fetching {resource} failed: {source}")]
    Fetch {
        resource: Resource,
        #[source]
        source: FetchError,
    },

    #[error(transparent)]
    Map(#[from] RecordError),

    #[error("Writing {resource} failed: {source}")]
    Database {
        resource: Resource,
        #[source]
        source: sqlx::Error,
    },

    /// Opening or committing the run-wide transaction in single mode.
    #[error("Run transaction failed: {0}")]
    Transaction(#[source] sqlx::Error),
}

impl LoadError {
    /// The resource whose step failed, if the failure belongs to one.
    pub fn resource(&self) -> Option<Resource> {
        match self {
            LoadError::Fetch { resource, .. } | LoadError::Database { resource, .. } => {
                Some(*resource)
            }
            LoadError::Map(e) => Some(e.resource),
            LoadError::Transaction(_) => None,
        }
    }

    /// The underlying database error, if any.
    pub fn database_error(&self) -> Option<&sqlx::Error> {
        match self {
            LoadError::Database { source, .. } | LoadError::Transaction(source) => Some(source),
            _ => None,
        }
    }
}

/// Anything that stops the process before or during a run.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database unavailable: {0}")]
    Database(#[from] sqlx::Error),

    /// The server was reachable but the tables could not be created.
    #[error("Creating the database schema failed: {0}")]
    Schema(#[source] sqlx::Error),

    #[error("HTTP client setup failed: {0}")]
    Client(#[from] FetchError),

    #[error(transparent)]
    Load(#[from] LoadError),
}
