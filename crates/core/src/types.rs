/// Primary keys are taken verbatim from the source API and stored as BIGINT.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// A single loosely-typed object as returned by the source API.
pub type Record = serde_json::Map<String, serde_json::Value>;
