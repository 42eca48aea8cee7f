//! Short-lived memo of probe results.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;

pub(crate) struct ProbeCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, (bool, Instant)>>,
}

impl ProbeCache {
    pub(crate) fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Cached result for `url`, if still fresh.
    pub(crate) fn get(&self, url: &str) -> Option<bool> {
        let mut entries = self.entries.lock().ok()?;
        match entries.get(url) {
            Some((reachable, checked_at)) if checked_at.elapsed() < self.ttl => Some(*reachable),
            Some(_) => {
                entries.remove(url);
                None
            }
            None => None,
        }
    }

    /// Store a result. Expired entries are dropped on the way in so the map
    /// only ever holds URLs checked within the last `ttl`.
    pub(crate) fn insert(&self, url: &str, reachable: bool) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.retain(|_, (_, checked_at)| checked_at.elapsed() < self.ttl);
            entries.insert(url.to_string(), (reachable, Instant::now()));
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }
}
