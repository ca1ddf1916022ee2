//! Background Sweep Tasks
//!
//! Periodic tasks that reclaim memory held by expired cache entries and idle
//! rate-limiter identities. Sweeps are never load-bearing for correctness:
//! `get` and `allow` re-validate liveness on every call.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::TtlCache;
use crate::limiter::RateLimiter;

/// Spawns a task that periodically purges expired cache entries.
///
/// The task loops forever, sleeping `interval_secs` between passes and taking
/// the cache's own lock only for the duration of the purge. Abort the
/// returned handle on shutdown; leaving it running costs a leaked periodic
/// task, nothing more.
pub fn spawn_cache_sweep<V>(cache: TtlCache<V>, interval_secs: u64) -> JoinHandle<()>
where
    V: Send + Sync + 'static,
{
    let interval = Duration::from_secs(interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting cache sweep task with interval of {} seconds",
            interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.purge_expired().await;

            if removed > 0 {
                info!("Cache sweep: removed {} expired entries", removed);
            } else {
                debug!("Cache sweep: no expired entries found");
            }
        }
    })
}

/// Spawns a task that periodically removes idle rate-limiter identities.
///
/// Bounds limiter memory to recently active clients rather than every client
/// ever seen. Same lifecycle as the cache sweep.
pub fn spawn_limiter_sweep(limiter: RateLimiter, interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting rate-limiter sweep task with interval of {} seconds",
            interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = limiter.sweep_idle().await;

            if removed > 0 {
                info!("Rate-limiter sweep: removed {} idle identities", removed);
            } else {
                debug!("Rate-limiter sweep: no idle identities found");
            }
        }
    })
}
