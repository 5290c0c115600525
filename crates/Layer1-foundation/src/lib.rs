//! # websmith-foundation
//!
//! Foundation layer for websmith:
//! - Error: shared error type for the edges (config, format dispatch, I/O)
//! - Config: `websmith.toml`, generation options
//! - Cache: `TokenCache` (LRU + TTL), stable keys, named caches, memoize
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  websmith-cli        (file I/O, format dispatch)        │
//! │                     │                                   │
//! │                     ▼                                   │
//! │  websmith-tokens     (flatten → dedup → render)         │
//! │                     │                                   │
//! │                     ▼                                   │
//! │  websmith-foundation (TokenCache, config, errors)       │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod cache;
pub mod config;
pub mod error;

// ============================================================================
// Error
// ============================================================================
pub use error::{Error, Result};

// ============================================================================
// Config
// ============================================================================
pub use config::{
    FormatOptions, GenerateOptions, IndentChar, LineEnding, WebsmithConfig,
    WEBSMITH_CONFIG_FILE,
};

// ============================================================================
// Cache
// ============================================================================
pub use cache::{
    memoize, shared_cache, stable_key, CacheConfig, CacheOptions, CachedTokens, NamedCacheStats,
    NamedCaches, SharedCache, TokenCache, TokenCacheStats, DISABLE_CACHE_ENV,
};
