//! Cache utilities
//!
//! - `TokenCache`: LRU cache with TTL expiry and hit/miss statistics
//! - `stable_key`: order-independent keys for structured parameters

mod hash;
mod lru;

pub use hash::{canonical_json, stable_key};
pub use lru::{CacheEntry, TokenCache, TokenCacheStats};
