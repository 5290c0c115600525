//! websmith.toml - engine configuration
//!
//! ```toml
//! [caches.color]
//! max_size = 200
//! ttl_ms = 600000
//!
//! [caches.css]
//! enabled = false
//!
//! [generate]
//! prefix = "ds"
//! includeTheme = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::generate::GenerateOptions;
use crate::cache::CacheConfig;
use crate::{Error, Result};

/// Config file name
pub const WEBSMITH_CONFIG_FILE: &str = "websmith.toml";

/// Engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebsmithConfig {
    /// Cache policies
    #[serde(default)]
    pub caches: CacheConfig,

    /// Default generation options
    #[serde(default)]
    pub generate: GenerateOptions,
}

impl WebsmithConfig {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Load
    // ========================================================================

    /// Resolve and load the configuration
    ///
    /// An explicit path must exist. Otherwise `./websmith.toml`, then the user
    /// config directory, then defaults. Environment overrides apply last.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match Self::discover() {
                Some(path) => {
                    tracing::debug!(path = %path.display(), "loading websmith config");
                    Self::from_file(&path)?
                }
                None => Self::default(),
            },
        };
        Ok(config.with_env_overrides())
    }

    /// Parse a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// First existing config file among the project and user locations
    pub fn discover() -> Option<PathBuf> {
        let project = std::env::current_dir().ok().map(|cwd| cwd.join(WEBSMITH_CONFIG_FILE));
        let global = Self::global_path();

        [project, global].into_iter().flatten().find(|path| path.is_file())
    }

    /// `~/.config/websmith/websmith.toml` (platform config dir)
    pub fn global_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("websmith").join(WEBSMITH_CONFIG_FILE))
    }

    pub fn with_env_overrides(mut self) -> Self {
        self.caches = self.caches.with_env_overrides();
        self
    }
}
