//! Fixed-Window Rate Limiter Module
//!
//! Per-identity request counters with reset-on-expiry windows. The ceiling
//! and window duration are fixed per deployment, not per identity.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::limiter::RateWindow;

// == Rate Limiter ==
/// Per-client fixed-window rate limiter.
///
/// Identities (parsed client addresses) map to a request count within the
/// current window. The window resets when a request arrives after it has
/// elapsed, so bursts straddling a boundary can admit up to twice the limit
/// across the two windows; the approximation is intentional and kept from the
/// original middleware rather than upgraded to a sliding log.
///
/// `allow` never fails; translating a `false` into an HTTP 429 belongs to the
/// caller (see [`crate::middleware::rate_limit`]).
#[derive(Debug, Clone)]
pub struct RateLimiter {
    windows: Arc<RwLock<HashMap<String, RateWindow>>>,
    limit: u32,
    window: Duration,
}

impl RateLimiter {
    // == Constructor ==
    /// Creates a limiter admitting at most `limit` requests per identity
    /// within each `window`.
    pub fn new(limit: u32, window: Duration) -> Self {
        Self {
            windows: Arc::new(RwLock::new(HashMap::new())),
            limit,
            window,
        }
    }

    /// Creates a limiter from deployment configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.rate_limit_max_requests, config.rate_limit_window())
    }

    // == Allow ==
    /// Records a request from `identity` and decides whether to admit it.
    ///
    /// A stale window is reset before the count is evaluated. The attempt is
    /// counted even when rejected, matching the original middleware.
    pub async fn allow(&self, identity: &str) -> bool {
        let mut windows = self.windows.write().await;

        let entry = windows.entry(identity.to_string()).or_default();
        if entry.is_stale(self.window) {
            entry.reset();
        }
        entry.count += 1;
        entry.count <= self.limit
    }

    // == Sweep Idle ==
    /// Removes identities whose window has elapsed without further traffic.
    ///
    /// Memory reclamation only: `allow` resets stale windows itself, so a
    /// swept identity's next request behaves exactly like a first-ever
    /// request. Returns the number of identities removed.
    pub async fn sweep_idle(&self) -> usize {
        let mut windows = self.windows.write().await;

        let before = windows.len();
        let window = self.window;
        windows.retain(|_, entry| !entry.is_stale(window));
        before - windows.len()
    }

    // == Length ==
    /// Returns the number of tracked identities.
    pub async fn len(&self) -> usize {
        self.windows.read().await.len()
    }

    /// Returns true if no identities are tracked.
    pub async fn is_empty(&self) -> bool {
        self.windows.read().await.is_empty()
    }

    // == Limit ==
    /// The per-window request ceiling.
    pub fn limit(&self) -> u32 {
        self.limit
    }
}
