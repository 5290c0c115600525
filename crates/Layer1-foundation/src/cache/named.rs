//! Named token caches
//!
//! One cache per generator category. Each is shared behind a mutex so the
//! memoized generator closures and diagnostics can reach the same instance.

use parking_lot::Mutex;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use super::config::{CacheConfig, CacheOptions};
use super::util::{TokenCache, TokenCacheStats};

/// A cache reachable from several owners
pub type SharedCache<T> = Arc<Mutex<TokenCache<T>>>;

/// Cached generator output: a token subtree behind a shared reference
pub type CachedTokens = Arc<Value>;

/// Build a shared cache from a policy
pub fn shared_cache<T: Clone>(options: CacheOptions) -> SharedCache<T> {
    Arc::new(Mutex::new(TokenCache::new(options)))
}

/// Color, typography and spacing caches
#[derive(Debug, Clone)]
pub struct NamedCaches {
    pub color: SharedCache<CachedTokens>,
    pub typography: SharedCache<CachedTokens>,
    pub spacing: SharedCache<CachedTokens>,
}

/// Per-category statistics
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NamedCacheStats {
    pub color: TokenCacheStats,
    pub typography: TokenCacheStats,
    pub spacing: TokenCacheStats,
}

impl NamedCaches {
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            color: shared_cache(config.color),
            typography: shared_cache(config.typography),
            spacing: shared_cache(config.spacing),
        }
    }

    pub fn clear_all(&self) {
        self.color.lock().clear();
        self.typography.lock().clear();
        self.spacing.lock().clear();
    }

    /// Prune expired entries from every category, returning the total removed
    pub fn prune_all(&self) -> usize {
        self.color.lock().prune() + self.typography.lock().prune() + self.spacing.lock().prune()
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.color.lock().set_enabled(enabled);
        self.typography.lock().set_enabled(enabled);
        self.spacing.lock().set_enabled(enabled);
    }

    pub fn stats(&self) -> NamedCacheStats {
        NamedCacheStats {
            color: self.color.lock().stats(),
            typography: self.typography.lock().stats(),
            spacing: self.spacing.lock().stats(),
        }
    }
}

impl Default for NamedCaches {
    fn default() -> Self {
        Self::new(&CacheConfig::default())
    }
}
