//! Background Tasks Module
//!
//! Periodic sweeps that bound memory held by the cache and the rate limiter.
//!
//! # Tasks
//! - Cache sweep: removes expired cache entries at configured intervals
//! - Limiter sweep: removes rate-limiter identities idle past their window

mod sweep;

pub use sweep::{spawn_cache_sweep, spawn_limiter_sweep};
