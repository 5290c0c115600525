//! # Token caches
//!
//! Memoization for expensive token generation.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 NamedCaches                   │
//! │  ┌──────────┐ ┌────────────┐ ┌───────────┐   │
//! │  │  color   │ │ typography │ │  spacing  │   │
//! │  └──────────┘ └────────────┘ └───────────┘   │
//! │        each a SharedCache<Arc<Value>>        │
//! ├──────────────────────────────────────────────┤
//! │  TokenCache<T>: LRU order + TTL + stats      │
//! │  stable_key: sorted-key JSON serialization   │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use websmith_foundation::cache::{memoize, NamedCaches};
//!
//! let caches = NamedCaches::default();
//! let palette = memoize(caches.color.clone(), |base: &String| build_palette(base));
//!
//! let a = palette(&"#0ea5e9".to_string());
//! let b = palette(&"#0ea5e9".to_string()); // same Arc as `a`
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Cache policies
//! - [`named`] - Category caches
//! - [`util`] - `TokenCache` and key derivation

pub mod config;
mod memo;
pub mod named;
pub mod util;

pub use config::{CacheConfig, CacheOptions, DISABLE_CACHE_ENV};
pub use memo::memoize;
pub use named::{shared_cache, CachedTokens, NamedCacheStats, NamedCaches, SharedCache};
pub use util::{canonical_json, stable_key, CacheEntry, TokenCache, TokenCacheStats};
