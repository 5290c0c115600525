//! LRU + TTL token cache
//!
//! Entries live in an insertion-ordered map kept in recency order: the front
//! is the least recently inserted-or-read entry and is the eviction victim.

use indexmap::IndexMap;
use serde::Serialize;
use std::time::{Duration, Instant};

use super::hash::stable_key;
use crate::cache::config::CacheOptions;

/// A single cached value
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    pub value: T,
    pub inserted_at: Instant,
    pub hit_count: u64,
}

impl<T> CacheEntry<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            inserted_at: Instant::now(),
            hit_count: 0,
        }
    }

    fn is_expired(&self, ttl: Duration) -> bool {
        self.inserted_at.elapsed() >= ttl
    }
}

/// Cache statistics
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TokenCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
    pub max_size: usize,
    /// hits / (hits + misses), 0 before any lookup
    pub hit_rate: f64,
    pub evictions: u64,
}

/// Bounded, expiring memoization store keyed by structured parameters
///
/// Lookups never fail: a disabled cache, an expired entry or a parameter
/// value that cannot be serialized all behave as a miss.
///
/// # Example
/// ```
/// use websmith_foundation::cache::{CacheOptions, TokenCache};
/// use serde_json::json;
///
/// let mut cache = TokenCache::new(CacheOptions::default());
/// cache.set(&json!({"a": 1, "b": 2}), "palette");
/// assert_eq!(cache.get(&json!({"b": 2, "a": 1})), Some("palette"));
/// ```
#[derive(Debug)]
pub struct TokenCache<T> {
    entries: IndexMap<String, CacheEntry<T>>,
    max_size: usize,
    ttl: Duration,
    enabled: bool,
    hits: u64,
    misses: u64,
    evictions: u64,
}

impl<T: Clone> TokenCache<T> {
    pub fn new(options: CacheOptions) -> Self {
        Self {
            entries: IndexMap::with_capacity(options.max_size.min(1024)),
            max_size: options.max_size,
            ttl: options.ttl(),
            enabled: options.enabled,
            hits: 0,
            misses: 0,
            evictions: 0,
        }
    }

    /// Look up a value, refreshing its recency on a hit
    pub fn get<P: Serialize + ?Sized>(&mut self, params: &P) -> Option<T> {
        if !self.enabled {
            return None;
        }
        match stable_key(params) {
            Some(key) => self.get_by_key(&key),
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Insert or overwrite a value at the most recently used position
    pub fn set<P: Serialize + ?Sized>(&mut self, params: &P, value: T) {
        if !self.enabled {
            return;
        }
        if let Some(key) = stable_key(params) {
            self.set_by_key(key, value);
        }
    }

    /// Existence check with expiry, without touching recency or counters
    pub fn has<P: Serialize + ?Sized>(&mut self, params: &P) -> bool {
        if !self.enabled {
            return false;
        }
        let Some(key) = stable_key(params) else {
            return false;
        };
        match self.entries.get(&key) {
            Some(entry) if entry.is_expired(self.ttl) => {
                self.entries.shift_remove(&key);
                false
            }
            Some(_) => true,
            None => false,
        }
    }

    /// Lookup by an already-derived key
    pub fn get_by_key(&mut self, key: &str) -> Option<T> {
        if !self.enabled {
            return None;
        }
        let Some(mut entry) = self.entries.shift_remove(key) else {
            self.misses += 1;
            tracing::trace!(key, "token cache miss");
            return None;
        };

        if entry.is_expired(self.ttl) {
            self.misses += 1;
            tracing::trace!(key, "token cache entry expired");
            return None;
        }

        entry.hit_count += 1;
        self.hits += 1;
        let value = entry.value.clone();
        // Re-inserting moves the entry to the back (most recent)
        self.entries.insert(key.to_string(), entry);
        Some(value)
    }

    /// Insert by an already-derived key
    pub fn set_by_key(&mut self, key: String, value: T) {
        if !self.enabled {
            return;
        }
        // Overwrites also count as a touch
        if self.entries.shift_remove(&key).is_none() {
            while !self.entries.is_empty() && self.entries.len() >= self.max_size {
                self.evict_lru();
            }
        }
        if self.max_size == 0 {
            return;
        }
        self.entries.insert(key, CacheEntry::new(value));
    }

    /// Remove all entries and reset statistics
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
        self.evictions = 0;
    }

    /// Enable or disable the cache; disabling drops every entry
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.clear();
        }
    }

    /// Remove expired entries regardless of recency
    ///
    /// Returns the number of entries removed. Statistics are unchanged.
    pub fn prune(&mut self) -> usize {
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(ttl));
        let removed = before - self.entries.len();
        if removed > 0 {
            tracing::debug!(removed, "pruned expired token cache entries");
        }
        removed
    }

    pub fn stats(&self) -> TokenCacheStats {
        let lookups = self.hits + self.misses;
        let hit_rate = if lookups == 0 {
            0.0
        } else {
            self.hits as f64 / lookups as f64
        };

        TokenCacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.entries.len(),
            max_size: self.max_size,
            hit_rate,
            evictions: self.evictions,
        }
    }

    /// Iterate over cached values, least recently used first
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.values().map(|entry| &entry.value)
    }

    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn evict_lru(&mut self) {
        if let Some((key, _)) = self.entries.shift_remove_index(0) {
            self.evictions += 1;
            tracing::debug!(key = %key, "evicted least recently used token cache entry");
        }
    }
}

impl<T: Clone> Default for TokenCache<T> {
    fn default() -> Self {
        Self::new(CacheOptions::default())
    }
}
