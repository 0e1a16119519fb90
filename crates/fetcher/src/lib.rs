//! HTTP fetcher for the source API's resource collections.

pub mod client;
pub mod source;

pub use client::{FetchError, JsonApiClient};
pub use source::RecordSource;
