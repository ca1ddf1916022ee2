//! Cache Store Module
//!
//! The TTL response cache: one map guarded by one read/write lock, shared by
//! cloning the handle. Read-heavy endpoints store query results here keyed by
//! endpoint name plus normalized parameters (e.g. `"exercise_list_3"`), and
//! write endpoints invalidate the same keys after a mutation.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::cache::{CacheEntry, CacheStats};

// == Ttl Cache ==
/// In-memory TTL cache keyed by opaque strings.
///
/// The cache is advisory and best-effort: every operation returns a definite
/// result, and a caller must fall back to the source of truth on a miss. TTL
/// is chosen per `set` call, not per instance, because different endpoints
/// cache payloads with different volatility.
///
/// Expiry is lazy: `get` re-checks `expires_at` on every read, so an entry the
/// background sweep has not yet collected is still treated as absent once its
/// TTL lapses.
///
/// Accepted staleness window: a `set` from a concurrent read populating the
/// cache can interleave with a `delete` from a concurrent write invalidating
/// it. If the `delete` lands first, the cache may serve one stale read until
/// the next invalidation or TTL expiry. The lock covers single operations
/// only; serializing unrelated keys to close this window is not worth it for
/// a read-mostly workload.
#[derive(Debug)]
pub struct TtlCache<V> {
    inner: Arc<RwLock<CacheInner<V>>>,
}

#[derive(Debug)]
struct CacheInner<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Hit/miss/expiry counters
    stats: CacheStats,
}

impl<V> Clone for TtlCache<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> TtlCache<V> {
    // == Constructor ==
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(CacheInner {
                entries: HashMap::new(),
                stats: CacheStats::new(),
            })),
        }
    }

    // == Set ==
    /// Stores `value` under `key`, expiring `ttl` from now.
    ///
    /// Unconditionally overwrites any existing entry, including one that has
    /// not yet expired. The cache owns the value once stored; callers must
    /// re-`set` rather than mutate in place, since reads hand out clones.
    pub async fn set(&self, key: impl Into<String>, value: V, ttl: Duration) {
        let mut inner = self.inner.write().await;
        inner.entries.insert(key.into(), CacheEntry::new(value, ttl));
        let count = inner.entries.len();
        inner.stats.set_total_entries(count);
    }

    // == Get ==
    /// Retrieves a clone of the value under `key`, if present and live.
    ///
    /// A logically expired entry is treated as absent even if the sweep has
    /// not collected it yet; `get` drops such an entry when it encounters one.
    pub async fn get(&self, key: &str) -> Option<V>
    where
        V: Clone,
    {
        let mut inner = self.inner.write().await;

        match inner.entries.get(key) {
            Some(entry) if !entry.is_expired() => {
                let value = entry.value.clone();
                inner.stats.record_hit();
                Some(value)
            }
            Some(_) => {
                // Lapsed but not yet swept
                inner.entries.remove(key);
                let count = inner.entries.len();
                inner.stats.record_expired(1);
                inner.stats.set_total_entries(count);
                inner.stats.record_miss();
                None
            }
            None => {
                inner.stats.record_miss();
                None
            }
        }
    }

    // == Delete ==
    /// Removes the entry under `key` if present; a no-op otherwise.
    ///
    /// Used for invalidation after a write changes the data a cached read
    /// reflects.
    pub async fn delete(&self, key: &str) {
        let mut inner = self.inner.write().await;
        inner.entries.remove(key);
        let count = inner.entries.len();
        inner.stats.set_total_entries(count);
    }

    // == Purge Expired ==
    /// Removes all entries whose TTL has lapsed.
    ///
    /// Memory reclamation only; `get` enforces expiry on its own. Returns the
    /// number of entries removed.
    pub async fn purge_expired(&self) -> usize {
        let mut inner = self.inner.write().await;

        let before = inner.entries.len();
        inner.entries.retain(|_, entry| !entry.is_expired());
        let removed = before - inner.entries.len();

        let count = inner.entries.len();
        inner.stats.record_expired(removed as u64);
        inner.stats.set_total_entries(count);
        removed
    }

    // == Length ==
    /// Returns the number of physically present entries, expired or not.
    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.entries.is_empty()
    }

    // == Stats ==
    /// Returns a snapshot of the current counters.
    pub async fn stats(&self) -> CacheStats {
        let inner = self.inner.read().await;
        let mut stats = inner.stats.clone();
        stats.set_total_entries(inner.entries.len());
        stats
    }
}
