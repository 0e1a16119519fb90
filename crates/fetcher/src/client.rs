//! REST client for the source API's collection endpoints.
//!
//! Issues one `GET` per collection using [`reqwest`] and hands back the
//! JSON array body as raw records. There is no retry and no status-code
//! branching: anything other than a 2xx response carrying an array of
//! objects is an error.

use std::time::Duration;

use jph_core::resource::Resource;
use jph_core::types::Record;
use serde_json::Value;

/// HTTP client bound to one source API base URL.
#[derive(Debug, Clone)]
pub struct JsonApiClient {
    client: reqwest::Client,
    base_url: String,
}

/// Errors from the fetch layer.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The configured base URL is not an absolute http(s) URL.
    #[error("Invalid API base URL `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("GET {url} returned HTTP {status}: {body}")]
    Status {
        url: String,
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The body is not valid JSON.
    #[error("Malformed JSON from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The body is valid JSON but not an array.
    #[error("Expected a JSON array from {url}, got {found}")]
    NotAnArray { url: String, found: &'static str },

    /// An element of the array is not an object.
    #[error("Element {index} from {url} is not a JSON object")]
    NotAnObject { url: String, index: usize },
}

impl JsonApiClient {
    /// Create a client for `base_url`, e.g. `https://jsonplaceholder.typicode.com`.
    ///
    /// No request timeout is applied.
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client whose requests give up after `timeout`.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Self::with_client(client, base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self, FetchError> {
        let parsed = reqwest::Url::parse(base_url).map_err(|e| FetchError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(FetchError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: format!("unsupported scheme `{}`", parsed.scheme()),
            });
        }

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full URL of a collection endpoint.
    pub fn resource_url(&self, resource: Resource) -> String {
        format!("{}/{}", self.base_url, resource.path())
    }

    /// Fetch every record of one collection.
    ///
    /// Sends `GET {base_url}/{resource}` and returns the array elements
    /// unchanged, in response order.
    pub async fn fetch_records(&self, resource: Resource) -> Result<Vec<Record>, FetchError> {
        let url = self.resource_url(resource);
        tracing::info!(%resource, url = %url, "Fetching data");

        let response = self.client.get(&url).send().await?;
        let response = Self::ensure_success(&url, response).await?;
        let bytes = response.bytes().await?;

        let records = parse_records(&url, &bytes)?;
        tracing::debug!(%resource, count = records.len(), "Fetched records");
        Ok(records)
    }

    // ---- private helpers ----

    /// Return the response unchanged on success, or a
    /// [`FetchError::Status`] carrying the status and body text.
    async fn ensure_success(
        url: &str,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, FetchError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

/// Decode a response body into a sequence of objects.
fn parse_records(url: &str, body: &[u8]) -> Result<Vec<Record>, FetchError> {
    let value: Value = serde_json::from_slice(body).map_err(|source| FetchError::Decode {
        url: url.to_string(),
        source,
    })?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(FetchError::NotAnArray {
                url: url.to_string(),
                found: json_kind(&other),
            })
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(record) => Ok(record),
            _ => Err(FetchError::NotAnObject {
                url: url.to_string(),
                index,
            }),
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
