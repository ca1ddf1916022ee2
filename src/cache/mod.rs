//! Cache Module
//!
//! In-memory TTL caching for database query results, with lazy expiry on read
//! and a background sweep for memory reclamation.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::TtlCache;
