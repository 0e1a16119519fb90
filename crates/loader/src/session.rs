//! The persistence context shared by every load step.

use std::fmt;
use std::str::FromStr;

use jph_db::DbPool;
use serde::Serialize;

/// How commits are scoped across the six resource steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionMode {
    /// One transaction per resource. A failure rolls back only the resource
    /// in flight; resources committed before it stay persisted.
    #[default]
    PerResource,
    /// One transaction around the whole run. A failure leaves nothing behind.
    Single,
}

impl TransactionMode {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionMode::PerResource => "per_resource",
            TransactionMode::Single => "single",
        }
    }
}

impl fmt::Display for TransactionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown transaction mode `{0}` (expected `per_resource` or `single`)")]
pub struct UnknownTransactionMode(pub String);

impl FromStr for TransactionMode {
    type Err = UnknownTransactionMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "per_resource" | "per-resource" => Ok(TransactionMode::PerResource),
            "single" => Ok(TransactionMode::Single),
            other => Err(UnknownTransactionMode(other.to_string())),
        }
    }
}

/// Database handle plus the commit policy for one load run.
#[derive(Debug, Clone)]
pub struct LoadSession {
    pool: DbPool,
    mode: TransactionMode,
}

impl LoadSession {
    pub fn new(pool: DbPool, mode: TransactionMode) -> Self {
        Self { pool, mode }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn mode(&self) -> TransactionMode {
        self.mode
    }

    /// Release every pooled connection.
    pub async fn close(self) {
        self.pool.close().await;
    }
}
