use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::instrument;

use super::Transport;
use crate::error::{OsuApiError, Result};

/// reqwest-backed transport. Connections are pooled by the inner client.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        Self::build(reqwest::Client::builder())
    }

    /// Bounds every request, connect included, by `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        Self::build(reqwest::Client::builder().timeout(timeout))
    }

    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn build(builder: reqwest::ClientBuilder) -> Result<Self> {
        let client = builder
            .user_agent(concat!("osu-api/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| OsuApiError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip_all)]
    async fn fetch_json(&self, url: &str) -> Result<Value> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| OsuApiError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(OsuApiError::Transport(format!(
                "request failed with status {status}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| OsuApiError::Transport(e.without_url().to_string()))?;
        serde_json::from_str(&body).map_err(|e| OsuApiError::Decode(e.to_string()))
    }
}
