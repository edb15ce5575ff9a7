//! Error types for webhook delivery

use reqwest::StatusCode;
use std::time::Duration;

/// Errors that can occur while posting to the webhook
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("could not connect to {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("no response from {url} within {after:?}")]
    Timeout { url: String, after: Duration },

    #[error("webhook returned HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Result type alias for transport operations
pub type Result<T> = std::result::Result<T, TransportError>;
