use crate::cache::ProbeCache;
use crate::probe::{HttpProbe, ImageProbe};
use std::time::Duration;

/// Resolves a candidate icon URL to itself or a default.
pub struct ImageResolver<P = HttpProbe> {
    probe: P,
    cache: Option<ProbeCache>,
}

impl Default for ImageResolver<HttpProbe> {
    fn default() -> Self {
        Self::new(HttpProbe::default())
    }
}

impl<P: ImageProbe> ImageResolver<P> {
    pub fn new(probe: P) -> Self {
        Self { probe, cache: None }
    }

    /// Memoize probe results for `ttl`. A zero TTL disables caching.
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache = (!ttl.is_zero()).then(|| ProbeCache::new(ttl));
        self
    }

    /// Return `candidate` if it is served with a success status, else `default`.
    ///
    /// Empty and non-http(s) candidates fall back without a request.
    pub async fn resolve(&self, candidate: &str, default: &str) -> String {
        if is_probeable(candidate) && self.is_reachable(candidate).await {
            return candidate.to_string();
        }
        tracing::debug!(%candidate, %default, "icon unavailable, using default");
        default.to_string()
    }

    async fn is_reachable(&self, url: &str) -> bool {
        if let Some(hit) = self.cache.as_ref().and_then(|c| c.get(url)) {
            return hit;
        }

        let reachable = self.probe.is_reachable(url).await;
        if let Some(cache) = &self.cache {
            cache.insert(url, reachable);
        }
        reachable
    }
}

fn is_probeable(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}
