//! Configuration: API location and default search filters.
//!
//! Read from an optional TOML file, then overridden by environment
//! variables:
//!
//! ```toml
//! base_url = "http://127.0.0.1:8000"
//!
//! [defaults]
//! origins = ["DUB"]
//! durations = [7]
//! horizon_days = 90
//! max_price = 150.0
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use wanderly_api::SearchFilters;

use crate::error::WanderlyError;

pub const CONFIG_PATH_ENV: &str = "WANDERLY_CONFIG";
pub const API_URL_ENV: &str = "WANDERLY_API_URL";
pub const DEFAULT_CONFIG_FILE: &str = "wanderly.toml";
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Base URL of the deals API, without the `/api/v1/deals` path.
    pub base_url: String,
    pub defaults: SearchDefaults,
}

/// Filters used when the user does not pick any.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchDefaults {
    pub origins: Vec<String>,
    pub durations: Vec<u32>,
    pub horizon_days: u32,
    pub max_price: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            defaults: SearchDefaults::default(),
        }
    }
}

impl Default for SearchDefaults {
    fn default() -> Self {
        Self {
            origins: vec!["DUB".to_string()],
            durations: vec![7],
            horizon_days: 90,
            max_price: 150.0,
        }
    }
}

impl SearchDefaults {
    pub fn to_filters(&self) -> SearchFilters {
        SearchFilters::default()
            .with_origins(&self.origins)
            .with_durations(&self.durations)
            .with_horizon_days(self.horizon_days)
            .with_max_price(self.max_price)
    }
}

impl Config {
    /// Loads configuration using the process environment.
    ///
    /// The file named by `WANDERLY_CONFIG` must exist; the fallback
    /// `wanderly.toml` in the working directory is optional.
    pub fn load() -> Result<Self, WanderlyError> {
        let explicit = std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from);
        let api_url = std::env::var(API_URL_ENV).ok().filter(|s| !s.is_empty());
        Self::load_from(explicit.as_deref(), api_url)
    }

    /// Loads configuration from `path` (or the default file, if present)
    /// and applies an optional base URL override.
    pub fn load_from(path: Option<&Path>, api_url: Option<String>) -> Result<Self, WanderlyError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::from_file(fallback)?
                } else {
                    Self::default()
                }
            }
        };
        if let Some(url) = api_url {
            tracing::debug!("Using API URL from {}: {}", API_URL_ENV, url);
            config.base_url = url;
        }
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, WanderlyError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            WanderlyError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
            .map_err(|e| WanderlyError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_toml_str(content: &str) -> Result<Self, WanderlyError> {
        toml::from_str(content).map_err(|e| WanderlyError::Config(e.to_string()))
    }
}
