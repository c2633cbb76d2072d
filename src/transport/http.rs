//! reqwest-backed transport

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, header};
use tracing::debug;

use super::{HttpRequest, HttpResponse, HttpTransport};
use crate::Result;

/// HTTP transport backed by a pooled [`reqwest::Client`]
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport with the reqwest defaults
    pub fn new() -> Result<Self> {
        Self::with_timeout(None)
    }

    /// Create a transport with an optional per-request timeout
    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_nodelay(true)
            .user_agent(concat!("tikkie-client/", env!("CARGO_PKG_VERSION")));

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Wrap an existing client
    #[must_use]
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let HttpRequest {
            method,
            url,
            headers,
            content,
        } = request;

        debug!(method = %method, url = %url, "Sending request");

        let mut builder = self.client.request(method, &url).headers(headers);
        if let Some(content) = content {
            builder = builder
                .header(header::CONTENT_TYPE, content.content_type)
                .body(content.body);
        }

        let response = builder.send().await?;
        let status = response.status();
        // Reading the body to the end hands the connection back to the pool.
        let body = response.bytes().await?;

        debug!(url = %url, status = %status, bytes = body.len(), "Received response");

        Ok(HttpResponse { status, body })
    }
}
