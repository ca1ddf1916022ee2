//! Workout State - shared in-process state for a workout-tracking backend
//!
//! Provides the TTL response cache and per-client rate limiter that request
//! handlers share, plus the background sweeps that bound their memory.

pub mod cache;
pub mod config;
pub mod error;
pub mod limiter;
pub mod middleware;
pub mod tasks;

pub use cache::TtlCache;
pub use config::Config;
pub use limiter::RateLimiter;
pub use tasks::{spawn_cache_sweep, spawn_limiter_sweep};
