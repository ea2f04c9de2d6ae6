use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::domain::entities::query::PageRequest;

/// Every way a fetch can fail. The UI only ever shows `to_string()`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("{0}")]
    Request(String),
    #[error("Request failed with status code {0}")]
    Status(u16),
    #[error("Invalid response body: {0}")]
    Decode(String),
    #[error("Response transform failed: {0}")]
    Transform(String),
    #[error("Unexpected response shape: {0}")]
    Mapping(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return FetchError::Status(status.as_u16());
        }
        if err.is_decode() {
            return FetchError::Decode(err.to_string());
        }
        FetchError::Request(err.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

/// Anything that can answer a page request with a raw JSON body.
#[async_trait]
pub trait ListSource: Send + Sync {
    async fn fetch(&self, request: &PageRequest) -> Result<Value, FetchError>;

    /// Short description used in log lines.
    fn describe(&self) -> String;
}
