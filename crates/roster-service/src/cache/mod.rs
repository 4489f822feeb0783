//! Caching infrastructure for the service layer.
//!
//! The user cache maps identifiers to record snapshots. Entries are removed
//! only by explicit invalidation; misses are never cached.

mod cache_interface;
pub mod cache_keys;
mod memory_cache;
mod redis_cache;

pub use cache_interface::UserCache;
pub use memory_cache::{InMemoryUserCache, NoopUserCache};
pub use redis_cache::RedisUserCache;
