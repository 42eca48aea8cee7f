//! Liveness probes for icon URLs.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Default timeout for a single icon check.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(3);

const USER_AGENT: &str = concat!("presence/", env!("CARGO_PKG_VERSION"));

/// Checks whether an icon URL is currently served.
#[async_trait]
pub trait ImageProbe: Send + Sync {
    /// `true` only for a success status; errors and timeouts are `false`.
    async fn is_reachable(&self, url: &str) -> bool;
}

#[async_trait]
impl<P: ImageProbe + ?Sized> ImageProbe for Arc<P> {
    async fn is_reachable(&self, url: &str) -> bool {
        (**self).is_reachable(url).await
    }
}

/// HTTP GET probe.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: reqwest::Client,
}

impl Default for HttpProbe {
    fn default() -> Self {
        Self::with_timeout(DEFAULT_PROBE_TIMEOUT)
    }
}

impl HttpProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Probe with a custom per-request timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(
                    error = %e,
                    "Failed to build icon probe client, using defaults"
                );
                reqwest::Client::new()
            });
        Self { client }
    }
}

#[async_trait]
impl ImageProbe for HttpProbe {
    async fn is_reachable(&self, url: &str) -> bool {
        match self.client.get(url).send().await {
            Ok(resp) => {
                let status = resp.status();
                if !status.is_success() {
                    tracing::debug!(%url, %status, "icon check returned non-success status");
                }
                status.is_success()
            }
            Err(e) => {
                tracing::debug!(
                    %url,
                    error = %e,
                    timeout = e.is_timeout(),
                    "icon check failed"
                );
                false
            }
        }
    }
}
