//! Cache Entry Module
//!
//! Per-entry state for the TTL cache: the stored payload plus its expiry instant.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cached payload with its expiry instant.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored payload
    pub value: V,
    /// Instant past which the entry is logically absent
    pub expires_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates an entry that expires `ttl` from now.
    pub fn new(value: V, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now() + ttl,
        }
    }

    // == Is Expired ==
    /// Checks whether the entry's TTL has lapsed.
    ///
    /// Liveness is a pure function of `(now, expires_at)` and is evaluated on
    /// every read; the background sweep only reclaims memory. An entry is live
    /// while `now <= expires_at` and expired strictly after that instant.
    pub fn is_expired(&self) -> bool {
        Instant::now() > self.expires_at
    }

    // == Time To Live ==
    /// Returns the remaining TTL, saturating at zero once expired.
    pub fn ttl_remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }
}
