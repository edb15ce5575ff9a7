use crate::error::{Result, TransportError};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Something that can deliver an encoded body to a webhook
#[async_trait]
pub trait WebhookTransport: Send + Sync {
    /// Post `body` to `url` once and hand back the raw response body
    async fn post(&self, url: &str, body: String) -> Result<Vec<u8>>;
}

pub struct HttpTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self { client, timeout })
    }

    fn classify(&self, url: &str, err: reqwest::Error) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout {
                url: url.to_string(),
                after: self.timeout,
            }
        } else if err.is_connect() {
            TransportError::Connect {
                url: url.to_string(),
                source: err,
            }
        } else {
            TransportError::Request(err)
        }
    }
}

#[async_trait]
impl WebhookTransport for HttpTransport {
    async fn post(&self, url: &str, body: String) -> Result<Vec<u8>> {
        tracing::debug!("POST {} ({} bytes)", url, body.len());

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .map_err(|e| self.classify(url, e))?;

        let status = response.status();
        if !status.is_success() {
            // the status is the error; a body that fails to arrive is left empty
            let body = match response.bytes().await {
                Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
                Err(e) => {
                    tracing::debug!("Failed to read error body from {}: {}", url, e);
                    String::new()
                }
            };
            return Err(TransportError::Status { status, body });
        }

        let bytes = response.bytes().await.map_err(|e| self.classify(url, e))?;

        tracing::info!("Webhook accepted notification with HTTP {}", status);
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
#[path = "transport_tests.rs"]
mod tests;
