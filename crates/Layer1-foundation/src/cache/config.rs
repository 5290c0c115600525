//! Cache configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Policy for a single `TokenCache`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheOptions {
    /// Maximum number of entries before LRU eviction
    #[serde(default = "default_max_size")]
    pub max_size: usize,

    /// Entry lifetime in milliseconds
    #[serde(default = "default_ttl_ms")]
    pub ttl_ms: u64,

    /// Disabled caches always miss
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

/// Policies for every cache the engine owns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Color palette generation
    #[serde(default = "CacheOptions::color")]
    pub color: CacheOptions,

    /// Typography scale generation
    #[serde(default = "CacheOptions::typography")]
    pub typography: CacheOptions,

    /// Spacing scale generation
    #[serde(default = "CacheOptions::spacing")]
    pub spacing: CacheOptions,

    /// Whole-stylesheet generation (`generate_cached_css`)
    #[serde(default = "CacheOptions::css")]
    pub css: CacheOptions,
}

// Default value functions
fn default_max_size() -> usize {
    100
}
fn default_ttl_ms() -> u64 {
    300_000
} // 5 minutes
fn default_enabled() -> bool {
    true
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self {
            max_size: default_max_size(),
            ttl_ms: default_ttl_ms(),
            enabled: default_enabled(),
        }
    }
}

impl CacheOptions {
    pub fn new(max_size: usize, ttl: Duration) -> Self {
        Self {
            max_size,
            ttl_ms: ttl.as_millis() as u64,
            enabled: true,
        }
    }

    /// Entry lifetime as Duration
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Palettes are numerous and cheap to hold
    pub fn color() -> Self {
        Self::new(200, Duration::from_secs(600))
    }

    pub fn typography() -> Self {
        Self::new(50, Duration::from_secs(900))
    }

    /// Spacing scales vary more per component than type scales
    pub fn spacing() -> Self {
        Self::new(100, Duration::from_secs(900))
    }

    /// Whole stylesheets are large, keep fewer of them
    pub fn css() -> Self {
        Self::new(50, Duration::from_secs(600))
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            color: CacheOptions::color(),
            typography: CacheOptions::typography(),
            spacing: CacheOptions::spacing(),
            css: CacheOptions::css(),
        }
    }
}

impl CacheConfig {
    /// Every cache disabled (tests, `WEBSMITH_DISABLE_CACHE`)
    pub fn disabled() -> Self {
        let defaults = Self::default();
        Self {
            color: defaults.color.disabled(),
            typography: defaults.typography.disabled(),
            spacing: defaults.spacing.disabled(),
            css: defaults.css.disabled(),
        }
    }

    /// Apply `WEBSMITH_DISABLE_CACHE` on top of the configured policies
    pub fn with_env_overrides(self) -> Self {
        match std::env::var(DISABLE_CACHE_ENV) {
            Ok(value) if is_truthy(&value) => Self::disabled(),
            _ => self,
        }
    }
}

/// Environment variable that turns every cache off
pub const DISABLE_CACHE_ENV: &str = "WEBSMITH_DISABLE_CACHE";

fn is_truthy(value: &str) -> bool {
    !matches!(value.trim().to_ascii_lowercase().as_str(), "" | "0" | "false" | "no")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = CacheOptions::default();
        assert_eq!(options.max_size, 100);
        assert_eq!(options.ttl(), Duration::from_secs(300));
        assert!(options.enabled);
    }

    #[test]
    fn test_presets_are_distinct() {
        let config = CacheConfig::default();
        assert_ne!(config.color, config.typography);
        assert_ne!(config.color, config.spacing);
        assert_ne!(config.typography, config.spacing);
        assert!(config.color.max_size > config.spacing.max_size);
        assert!(config.spacing.max_size > config.typography.max_size);
    }

    #[test]
    fn test_partial_toml() {
        let config: CacheConfig = toml::from_str(
            r#"
            [color]
            max_size = 10

            [css]
            enabled = false
            "#,
        )
        .unwrap();

        assert_eq!(config.color.max_size, 10);
        assert_eq!(config.color.ttl_ms, 300_000);
        assert!(!config.css.enabled);
        assert_eq!(config.spacing, CacheOptions::spacing());
    }

    // The only test in this crate that touches the variable
    #[test]
    fn test_disable_cache_env() {
        std::env::set_var(DISABLE_CACHE_ENV, "1");
        assert_eq!(CacheConfig::default().with_env_overrides(), CacheConfig::disabled());
        let config = crate::WebsmithConfig::default().with_env_overrides();
        assert!(!config.caches.color.enabled);
        assert!(!config.caches.css.enabled);

        std::env::set_var(DISABLE_CACHE_ENV, "0");
        assert_eq!(CacheConfig::default().with_env_overrides(), CacheConfig::default());

        std::env::remove_var(DISABLE_CACHE_ENV);
        let config = CacheConfig::default().with_env_overrides();
        assert!(config.color.enabled && config.typography.enabled);
        assert!(config.spacing.enabled && config.css.enabled);
    }

    #[test]
    fn test_truthy_values() {
        assert!(is_truthy("1"));
        assert!(is_truthy("TRUE"));
        assert!(!is_truthy("0"));
        assert!(!is_truthy("false"));
        assert!(!is_truthy(""));
    }
}
