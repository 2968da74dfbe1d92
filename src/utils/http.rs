// src/utils/http.rs
use std::time::Duration;
use anyhow::{Result, Context};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// Status and body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// Parse the body as JSON
    pub fn json(&self) -> Result<serde_json::Value> {
        serde_json::from_str(&self.body).context("Response body is not valid JSON")
    }
}

/// Minimal GET transport used by the lookup providers
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issue a single GET; any status code is a successful exchange
    async fn get(&self, url: &str, headers: &[(String, String)]) -> Result<HttpReply>;
}

/// HTTP client for making requests
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    /// Create a new HTTP client
    pub fn new(user_agent: Option<String>, timeout_secs: Option<u64>) -> Result<Self> {
        let user_agent = user_agent.unwrap_or_else(|| format!("phonerecon/{}", env!("CARGO_PKG_VERSION")));
        let timeout = Duration::from_secs(timeout_secs.unwrap_or(10));

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(&user_agent)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, user_agent })
    }

    /// Get the user agent
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[async_trait]
impl HttpTransport for HttpClient {
    async fn get(&self, url: &str, headers: &[(String, String)]) -> Result<HttpReply> {
        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }

        // reqwest errors carry the full URL, query credentials included
        let response = request
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Request failed")?;

        let status = response.status().as_u16();
        debug!("GET returned status {}", status);

        let body = response
            .text()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to read response body")?;

        Ok(HttpReply { status, body })
    }
}
