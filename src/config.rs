//! Bot configuration persistence
//!
//! Stored in ~/.config/cinepulse/config.json. Every field is optional; a
//! missing file means defaults throughout.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::caption::DEFAULT_HELP_URL;
use crate::catalog::Category;
use crate::navigation::NavStyle;

const DEFAULT_DATA_DIR: &str = "data";

/// Persistent bot configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Directory holding the `*_data.json` catalog files
    pub data_dir: PathBuf,
    /// "How to open links" page referenced in every caption footer
    pub help_url: String,
    /// Per-category overrides of the Back/Next row style
    pub nav_styles: HashMap<Category, NavStyle>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            help_url: DEFAULT_HELP_URL.to_string(),
            nav_styles: HashMap::new(),
        }
    }
}

impl BotConfig {
    /// Load configuration from `path`, or from the default location
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::config_path()?,
        };

        if !path.exists() {
            debug!("No config found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config {:?}", path))?;

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, contents)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        debug!("Saved config to {}", path.display());
        Ok(path)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(config_dir.join("cinepulse").join("config.json"))
    }

    /// Effective Back/Next style for a category
    pub fn nav_style(&self, category: Category) -> NavStyle {
        self.nav_styles
            .get(&category)
            .copied()
            .unwrap_or_else(|| NavStyle::default_for(category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BotConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.help_url, DEFAULT_HELP_URL);
        assert_eq!(config.nav_style(Category::Adult), NavStyle::Adaptive);
        assert_eq!(config.nav_style(Category::Latest), NavStyle::Full);
    }

    #[test]
    fn test_partial_config_and_overrides() {
        let config: BotConfig = serde_json::from_str(
            r#"{"nav_styles": {"latest": "adaptive", "adult": "full"}}"#,
        )
        .unwrap();

        assert_eq!(config.help_url, DEFAULT_HELP_URL);
        assert_eq!(config.nav_style(Category::Latest), NavStyle::Adaptive);
        assert_eq!(config.nav_style(Category::Adult), NavStyle::Full);
        assert_eq!(config.nav_style(Category::Anime), NavStyle::Full);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = BotConfig::load(Some(dir.path().join("nope.json").as_path())).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("data"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"data_dir": "/srv/catalog", "help_url": "https://h"}"#).unwrap();

        let config = BotConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/catalog"));
        assert_eq!(config.help_url, "https://h");
    }
}
