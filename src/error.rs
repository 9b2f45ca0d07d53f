//! Error taxonomy for a collection run

use thiserror::Error;

/// Errors that abort a collection run
///
/// None of these are recovered locally. The first one raised ends the run.
#[derive(Debug, Error)]
pub enum CollectError {
    /// Symbol list or request URL could not be encoded
    #[error("Encoding error: {0}")]
    Encoding(String),
    /// Transport failure, timeout, or non-success HTTP status
    #[error("Network error: {0}")]
    Network(String),
    /// Response body is not the expected list of symbol/price objects
    #[error("Decode error: {0}")]
    Decode(String),
    /// Schema creation, insert, or query failure
    #[error("Storage error: {0}")]
    Storage(String),
}

impl CollectError {
    /// Short name of the error kind, used as a log/metric label
    pub fn kind(&self) -> &'static str {
        match self {
            CollectError::Encoding(_) => "encoding",
            CollectError::Network(_) => "network",
            CollectError::Decode(_) => "decode",
            CollectError::Storage(_) => "storage",
        }
    }
}

impl From<reqwest::Error> for CollectError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CollectError::Network(format!("request timed out: {}", err))
        } else {
            CollectError::Network(err.to_string())
        }
    }
}

impl From<duckdb::Error> for CollectError {
    fn from(err: duckdb::Error) -> Self {
        CollectError::Storage(err.to_string())
    }
}
