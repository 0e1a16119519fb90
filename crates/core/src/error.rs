use crate::resource::Resource;

/// Failure to map one raw record onto an entity.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("missing field `{field}`")]
    MissingField { field: &'static str },

    #[error("field `{field}` is not {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// A [`MapError`] located within a fetched collection.
#[derive(Debug, thiserror::Error)]
#[error("{resource} record #{index} could not be mapped: {source}")]
pub struct RecordError {
    pub resource: Resource,
    pub index: usize,
    #[source]
    pub source: MapError,
}
