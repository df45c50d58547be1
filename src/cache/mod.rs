//! Cache Module
//!
//! Provides a process-wide in-memory cache with explicit invalidation.

mod stats;
mod store;


// Re-export public types
pub use stats::{CacheCounters, CacheStats};
pub use store::KeyValueCache;
