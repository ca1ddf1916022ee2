//! Configuration Module
//!
//! Deployment-wide constants for the state layer, loaded from environment
//! variables with sensible defaults. Cache TTLs are not configured here; they
//! are chosen per call site.

use std::env;
use std::time::Duration;

/// State-layer configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum requests per identity within one rate-limit window
    pub rate_limit_max_requests: u32,
    /// Rate-limit window duration in seconds
    pub rate_limit_window_secs: u64,
    /// Cache sweep interval in seconds
    pub cache_sweep_interval_secs: u64,
    /// Rate-limiter sweep interval in seconds
    pub limiter_sweep_interval_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `RATE_LIMIT_MAX_REQUESTS` - Requests admitted per window (default: 10)
    /// - `RATE_LIMIT_WINDOW_SECS` - Window duration in seconds (default: 1)
    /// - `CACHE_SWEEP_INTERVAL_SECS` - Cache sweep frequency (default: 60)
    /// - `LIMITER_SWEEP_INTERVAL_SECS` - Limiter sweep frequency (default: 60)
    pub fn from_env() -> Self {
        Self {
            rate_limit_max_requests: env::var("RATE_LIMIT_MAX_REQUESTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            rate_limit_window_secs: env::var("RATE_LIMIT_WINDOW_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1),
            cache_sweep_interval_secs: env::var("CACHE_SWEEP_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            limiter_sweep_interval_secs: env::var("LIMITER_SWEEP_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        }
    }

    /// The rate-limit window as a `Duration`.
    pub fn rate_limit_window(&self) -> Duration {
        Duration::from_secs(self.rate_limit_window_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rate_limit_max_requests: 10,
            rate_limit_window_secs: 1,
            cache_sweep_interval_secs: 60,
            limiter_sweep_interval_secs: 60,
        }
    }
}
