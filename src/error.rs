//! Error types for each stage of a scrape
//!
//! Row-level shape mismatches are not errors: a row missing a required cell
//! is filtered out by the template's post-processing.

use std::time::Duration;

/// A template's selectors could not be compiled.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error("invalid selector `{selector}` for {context}: {reason}")]
    InvalidSelector {
        selector: String,
        context: String,
        reason: String,
    },
    #[error("invalid source url `{url}`: {source}")]
    InvalidSourceUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Fetched HTML could not be turned into a document.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("document is empty")]
    EmptyDocument,
}

/// The outbound request to the data source failed.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to {url} timed out after {}s", .timeout.as_secs())]
    Timeout { url: String, timeout: Duration },
    #[error("{url} responded with HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("failed to serialize records: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("extraction task failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid listen address {host}:{port}: {reason}")]
    InvalidAddress {
        host: String,
        port: u16,
        reason: String,
    },
    #[error("failed to build http client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
