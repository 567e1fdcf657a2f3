//! HTTP transport implementation
//!
//! Encapsulates HTTP communication with the API host

use super::{RawResponse, Transport};
use crate::config::Environment;
use crate::utils::error::{MomoError, MomoResult};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Transport backed by a reqwest client
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport against an explicit base URL
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT_SECS)
    }

    /// Create a transport with a custom request timeout
    pub fn with_timeout(base_url: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(concat!("momoapi/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Create a transport for the sandbox or production host
    pub fn for_environment(environment: Environment) -> Result<Self> {
        Self::new(environment.base_url())
    }

    /// Build the request URL
    fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn apply_headers(mut builder: RequestBuilder, headers: &[(String, String)]) -> RequestBuilder {
        for (name, value) in headers {
            builder = builder.header(name, value);
        }
        builder
    }

    async fn dispatch(&self, builder: RequestBuilder) -> MomoResult<RawResponse> {
        let response = builder
            .send()
            .await
            .map_err(|e| MomoError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| MomoError::Transport(e.to_string()))?;

        debug!(status, "received API response");
        Ok((status, body))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(
        &self,
        path: &str,
        body: &Value,
        headers: &[(String, String)],
    ) -> MomoResult<RawResponse> {
        let url = self.build_url(path);
        debug!(%url, "sending POST request");

        let builder = Self::apply_headers(self.client.post(&url), headers)
            .header("Content-Type", "application/json")
            .json(body);

        self.dispatch(builder).await
    }

    async fn get(&self, path: &str, headers: &[(String, String)]) -> MomoResult<RawResponse> {
        let url = self.build_url(path);
        debug!(%url, "sending GET request");

        let builder = Self::apply_headers(self.client.get(&url), headers);

        self.dispatch(builder).await
    }
}
