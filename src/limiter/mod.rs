//! Rate Limiter Module
//!
//! Per-client request throttling with fixed reset-on-expiry windows and a
//! background sweep for idle identities.

mod fixed;
mod window;

// Re-export public types
pub use fixed::RateLimiter;
pub use window::RateWindow;
