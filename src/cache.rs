use std::sync::{Mutex, MutexGuard};

use cached::{Cached, UnboundCache};

use crate::types::SeasonsResponse;

/// In-memory store of seasons responses keyed by league id
///
/// Owned by whoever builds the `BadgeClient`, so tests get isolated
/// instances. Entries live as long as the store; nothing is evicted. The lock
/// is only ever held for a single get or set, never across an await.
pub struct BadgeCache {
    inner: Mutex<UnboundCache<String, SeasonsResponse>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

impl Default for BadgeCache {
    fn default() -> Self {
        Self::new()
    }
}

impl BadgeCache {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(UnboundCache::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, UnboundCache<String, SeasonsResponse>> {
        // A panic while holding the lock cannot leave a half-written entry
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn get(&self, league_id: &str) -> Option<SeasonsResponse> {
        self.lock().cache_get(league_id).cloned()
    }

    /// Look up an entry without counting it as a hit or miss
    pub fn peek(&self, league_id: &str) -> Option<SeasonsResponse> {
        self.lock().get_store().get(league_id).cloned()
    }

    /// Store a response; a later store for the same id replaces the earlier one
    pub fn insert(&self, league_id: &str, response: SeasonsResponse) {
        self.lock().cache_set(league_id.to_string(), response);
    }

    pub fn len(&self) -> usize {
        self.lock().cache_size()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        let cache = self.lock();
        CacheStats {
            entries: cache.cache_size(),
            hits: cache.cache_hits().unwrap_or(0),
            misses: cache.cache_misses().unwrap_or(0),
        }
    }
}
