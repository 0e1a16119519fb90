use async_trait::async_trait;
use jph_core::resource::Resource;
use jph_core::types::Record;

use crate::client::{FetchError, JsonApiClient};

/// Anything that can produce the raw records of a resource collection.
///
/// The loader depends on this rather than on [`JsonApiClient`] directly.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch(&self, resource: Resource) -> Result<Vec<Record>, FetchError>;
}

#[async_trait]
impl RecordSource for JsonApiClient {
    async fn fetch(&self, resource: Resource) -> Result<Vec<Record>, FetchError> {
        self.fetch_records(resource).await
    }
}
