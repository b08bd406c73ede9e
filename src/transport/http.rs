//! reqwest-backed transport.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use tracing::trace;

use crate::error::{CacheError, Result};
use crate::models::WriteForm;
use crate::transport::{Transport, TransportResponse};

/// Transport over a shared `reqwest::Client`.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport with reqwest's defaults (no request timeout).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transport that aborts any exchange running longer than `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CacheError::Transport(format!("failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// Wraps an already configured client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    async fn send(&self, request: RequestBuilder) -> Result<TransportResponse> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        trace!(status, bytes = body.len(), "store responded");
        Ok(TransportResponse { status, body })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse> {
        self.send(self.client.get(url)).await
    }

    async fn head(&self, url: &str) -> Result<TransportResponse> {
        self.send(self.client.head(url)).await
    }

    async fn put_form(&self, url: &str, form: &WriteForm) -> Result<TransportResponse> {
        self.send(self.client.put(url).form(form)).await
    }

    async fn delete(&self, url: &str) -> Result<TransportResponse> {
        self.send(self.client.delete(url)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_timeout_builds() {
        assert!(ReqwestTransport::with_timeout(Duration::from_secs(5)).is_ok());
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_failure() {
        let transport = ReqwestTransport::new();
        // Port 1 on loopback has no listener
        let result = transport.head("http://127.0.0.1:1/v2/keys/x/v").await;
        assert!(matches!(result, Err(CacheError::Transport(_))));
    }
}
