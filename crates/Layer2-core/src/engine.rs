//! Token engine
//!
//! Owns every cache used during generation: the named generator caches and
//! the whole-stylesheet cache behind `generate_cached_css`. A process-wide
//! instance is created on first use; `reset` rebuilds it from its config.

use parking_lot::Mutex;
use serde::Serialize;
use serde_json::Value;
use std::sync::OnceLock;
use websmith_foundation::{
    stable_key, GenerateOptions, NamedCaches, TokenCache, TokenCacheStats, WebsmithConfig,
};

use crate::generate::{generate_optimized_css, GenerationResult};

/// Size of the stylesheet cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CssCacheStats {
    pub size: usize,
    /// Sum of cached stylesheet lengths in characters
    pub memory_usage: usize,
}

#[derive(Debug)]
pub struct TokenEngine {
    config: WebsmithConfig,
    caches: NamedCaches,
    css_cache: TokenCache<GenerationResult>,
}

impl TokenEngine {
    pub fn new(config: WebsmithConfig) -> Self {
        let caches = NamedCaches::new(&config.caches);
        let css_cache = TokenCache::new(config.caches.css);
        Self {
            config,
            caches,
            css_cache,
        }
    }

    pub fn config(&self) -> &WebsmithConfig {
        &self.config
    }

    /// Color, typography and spacing caches
    pub fn caches(&self) -> &NamedCaches {
        &self.caches
    }

    /// Default options from `[generate]`
    pub fn default_options(&self) -> &GenerateOptions {
        &self.config.generate
    }

    /// Uncached generation
    pub fn generate(&self, tokens: &Value, options: &GenerateOptions) -> GenerationResult {
        let result = generate_optimized_css(tokens, options);
        tracing::debug!(
            variables = result.stats.variable_count,
            duplicates = result.stats.duplicates_removed,
            bytes = result.stats.output_size,
            time_ms = result.stats.generation_time,
            "generated css"
        );
        result
    }

    /// Generation memoized on the `(tokens, options)` pair
    ///
    /// A hit returns the stored stylesheet with `generation_time` set to 0.
    pub fn generate_cached_css(
        &mut self,
        tokens: &Value,
        options: &GenerateOptions,
    ) -> GenerationResult {
        let Some(key) = stable_key(&(tokens, options)) else {
            return self.generate(tokens, options);
        };

        if let Some(mut cached) = self.css_cache.get_by_key(&key) {
            tracing::trace!("css cache hit");
            cached.stats.generation_time = 0.0;
            return cached;
        }

        let result = self.generate(tokens, options);
        self.css_cache.set_by_key(key, result.clone());
        result
    }

    pub fn clear_css_cache(&mut self) {
        self.css_cache.clear();
    }

    pub fn css_cache_stats(&self) -> CssCacheStats {
        CssCacheStats {
            size: self.css_cache.size(),
            memory_usage: self
                .css_cache
                .values()
                .map(|result| result.css.chars().count())
                .sum(),
        }
    }

    /// Hit/miss statistics of the stylesheet cache
    pub fn css_cache_lookup_stats(&self) -> TokenCacheStats {
        self.css_cache.stats()
    }

    /// Drop expired entries from every cache
    pub fn prune(&mut self) -> usize {
        self.caches.prune_all() + self.css_cache.prune()
    }

    /// Enable or disable every cache; disabling clears them
    pub fn set_caches_enabled(&mut self, enabled: bool) {
        self.caches.set_enabled(enabled);
        self.css_cache.set_enabled(enabled);
    }

    /// Rebuild all caches from the current configuration
    pub fn reset(&mut self) {
        self.caches = NamedCaches::new(&self.config.caches);
        self.css_cache = TokenCache::new(self.config.caches.css);
    }
}

impl Default for TokenEngine {
    fn default() -> Self {
        Self::new(WebsmithConfig::default().with_env_overrides())
    }
}

// ============================================================================
// Global engine
// ============================================================================

static GLOBAL_ENGINE: OnceLock<Mutex<TokenEngine>> = OnceLock::new();

/// Initialize the global engine with a configuration
///
/// Has no effect on the configuration if the engine already exists.
pub fn init_global_engine(config: WebsmithConfig) -> &'static Mutex<TokenEngine> {
    GLOBAL_ENGINE.get_or_init(|| Mutex::new(TokenEngine::new(config)))
}

/// Global engine, created with defaults on first use
pub fn global_engine() -> &'static Mutex<TokenEngine> {
    GLOBAL_ENGINE.get_or_init(|| Mutex::new(TokenEngine::default()))
}

/// `generate_cached_css` on the global engine
pub fn generate_cached_css(tokens: &Value, options: &GenerateOptions) -> GenerationResult {
    global_engine().lock().generate_cached_css(tokens, options)
}

/// Empty the global stylesheet cache
pub fn clear_css_cache() {
    global_engine().lock().clear_css_cache();
}

/// Stylesheet cache statistics of the global engine
pub fn css_cache_stats() -> CssCacheStats {
    global_engine().lock().css_cache_stats()
}
