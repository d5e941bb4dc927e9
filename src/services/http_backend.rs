//! HTTP implementation of the monitor backend

use crate::error::FetchError;
use crate::models::{Signal, Snapshot};
use crate::services::backend::MonitorBackend;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

pub const SNAPSHOT_PATH: &str = "api/snapshot";
pub const SIGNALS_PATH: &str = "api/signals";

pub struct HttpMonitorBackend {
    base_url: Url,
    client: reqwest::Client,
}

impl HttpMonitorBackend {
    /// Create a backend with its own client and a per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| FetchError::Transport {
                endpoint: base_url.to_string(),
                source,
            })?;
        Self::with_client(base_url, client)
    }

    /// Create a backend around an existing client
    pub fn with_client(base_url: &str, client: reqwest::Client) -> Result<Self, FetchError> {
        // A base without a trailing slash would lose its last path
        // segment on join.
        let mut base = base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        Ok(Self {
            base_url: Url::parse(&base)?,
            client,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn snapshot_url(&self) -> Result<Url, FetchError> {
        Ok(self.base_url.join(SNAPSHOT_PATH)?)
    }

    pub fn signals_url(&self, limit: usize) -> Result<Url, FetchError> {
        let mut url = self.base_url.join(SIGNALS_PATH)?;
        url.query_pairs_mut().append_pair("limit", &limit.to_string());
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        let endpoint = url.path().to_string();
        debug!(url = %url, "GET {}", endpoint);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                endpoint: endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { endpoint, status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Transport {
                endpoint: endpoint.clone(),
                source,
            })?;

        serde_json::from_slice(&body).map_err(|source| FetchError::Decode { endpoint, source })
    }
}

#[async_trait]
impl MonitorBackend for HttpMonitorBackend {
    async fn fetch_snapshot(&self) -> Result<Snapshot, FetchError> {
        let url = self.snapshot_url()?;
        self.get_json(url).await
    }

    async fn fetch_signals(&self, limit: usize) -> Result<Vec<Signal>, FetchError> {
        let url = self.signals_url(limit)?;
        self.get_json(url).await
    }
}
