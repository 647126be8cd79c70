//! Remote retrieval of the latest published version

#[cfg(test)]
use mockall::automock;

use serde::Deserialize;
use tracing::debug;

use crate::check::error::FetchError;
use crate::config::{FETCH_TIMEOUT, VERSION_INFO_URL};

/// Document served at the version info endpoint
#[derive(Debug, Deserialize)]
struct VersionInfo {
    version: String,
}

/// Trait for fetching the latest published version of the tool
///
/// One request, no retries: a failed fetch makes the current check
/// inconclusive rather than fatal, and the next invocation tries again.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReleaseFetcher: Send + Sync {
    /// Fetches the latest published version string
    async fn fetch_latest(&self) -> Result<String, FetchError>;
}

/// Fetcher backed by a plain unauthenticated HTTP request
pub struct HttpReleaseFetcher {
    client: reqwest::Client,
    url: String,
}

impl HttpReleaseFetcher {
    /// Creates a new HttpReleaseFetcher against a custom endpoint
    pub fn new(url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("update-check")
                .timeout(FETCH_TIMEOUT)
                .build()
                .expect("Failed to create HTTP client"),
            url: url.to_string(),
        }
    }
}

impl Default for HttpReleaseFetcher {
    fn default() -> Self {
        Self::new(VERSION_INFO_URL)
    }
}

#[async_trait::async_trait]
impl ReleaseFetcher for HttpReleaseFetcher {
    async fn fetch_latest(&self) -> Result<String, FetchError> {
        let response = self
            .client
            .get(&self.url)
            // intermediate caches must not serve us an old version document
            .header("Cache-Control", "no-cache")
            .send()
            .await?;

        let status = response.status();
        debug!("Version check response status: {}", status);

        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        debug!("Version check payload: {}", body);

        let info: VersionInfo =
            serde_json::from_str(&body).map_err(|e| FetchError::InvalidResponse(e.to_string()))?;

        Ok(info.version)
    }
}
