//! Demo binary configuration parsed from environment variables.

use std::path::PathBuf;

use crate::storefront::api::site::{SiteSettings, DEFAULT_SITE_TITLE};

pub const DEFAULT_LOG_LEVEL: &str = "info";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// JSON catalog to load instead of the built-in sample set
    pub catalog_path: Option<PathBuf>,
    pub site_title: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            site_title: DEFAULT_SITE_TITLE.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `CATALOG_PATH`: JSON product file; sample set when absent
    /// - `SITE_TITLE`: document title override
    /// - `CATALOG_LOG`: `trace`, `debug`, `info` (default), `warn` or `error`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading values through `lookup`
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let catalog_path = non_empty("CATALOG_PATH").map(PathBuf::from);
        let site_title = non_empty("SITE_TITLE").unwrap_or_else(|| DEFAULT_SITE_TITLE.to_string());
        let log_level = non_empty("CATALOG_LOG")
            .map(|v| v.to_ascii_lowercase())
            .filter(|v| LOG_LEVELS.contains(&v.as_str()))
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Self { catalog_path, site_title, log_level }
    }

    pub fn site_settings(&self) -> SiteSettings {
        SiteSettings {
            title: self.site_title.clone(),
            ..SiteSettings::default()
        }
    }
}
