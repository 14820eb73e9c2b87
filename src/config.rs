use crate::wallpaper::{SortMode, DEFAULT_RELATED_LIMIT};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Overrides the config file location
pub const CONFIG_ENV: &str = "WALLYPAPER_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub gallery: GalleryConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Seed JSON to load instead of the built-in one
    #[serde(default)]
    pub seed: Option<PathBuf>,
    #[serde(default = "default_related_limit")]
    pub related_limit: usize,
    /// Size of the home page "Popular" section
    #[serde(default = "default_popular_count")]
    pub popular_count: usize,
    /// Size of the home page "Recently Added" section
    #[serde(default = "default_recent_count")]
    pub recent_count: usize,
    #[serde(default = "default_popular_tags_shown")]
    pub popular_tags_shown: usize,
}

/// Object storage used by `upload`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// e.g. "https://xyz.supabase.co"; uploads are disabled when unset
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_bucket")]
    pub bucket: String,
    /// Name of the environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DisplayConfig {
    #[serde(default)]
    pub default_sort: SortMode,
}

fn default_related_limit() -> usize {
    DEFAULT_RELATED_LIMIT
}

fn default_popular_count() -> usize {
    8
}

fn default_recent_count() -> usize {
    4
}

fn default_popular_tags_shown() -> usize {
    15
}

fn default_bucket() -> String {
    "wallpapers".to_string()
}

fn default_api_key_env() -> String {
    "WALLYPAPER_STORAGE_KEY".to_string()
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            seed: None,
            related_limit: default_related_limit(),
            popular_count: default_popular_count(),
            recent_count: default_recent_count(),
            popular_tags_shown: default_popular_tags_shown(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            bucket: default_bucket(),
            api_key_env: default_api_key_env(),
        }
    }
}

impl StorageConfig {
    /// API key read from the configured environment variable.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env).ok().filter(|k| !k.is_empty())
    }
}

impl Config {
    /// Return the path to the configuration file.
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return crate::utils::expand_tilde(&path);
        }
        directories::ProjectDirs::from("com", "wallypaper", "wallypaper")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
            .join("config.toml")
    }

    /// Load config from file, creating default if missing or corrupt.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            let data = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            match toml::from_str::<Config>(&data) {
                Ok(config) => {
                    debug!(path = %path.display(), "loaded config");
                    Ok(config)
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to parse config, using defaults");
                    Ok(Config::default())
                }
            }
        } else {
            // Create default config.
            let config = Config::default();
            if let Err(e) = config.save() {
                warn!(path = %path.display(), error = %e, "could not write default config");
            }
            Ok(config)
        }
    }

    /// Save config to file.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let data = toml::to_string_pretty(self)?;
        fs::write(&path, data)?;

        Ok(())
    }

    /// Seed path with `~` expanded.
    pub fn seed_path(&self) -> Option<PathBuf> {
        self.gallery
            .seed
            .as_ref()
            .map(|p| crate::utils::expand_tilde(&p.to_string_lossy()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.gallery.related_limit, 4);
        assert_eq!(config.gallery.popular_count, 8);
        assert_eq!(config.gallery.recent_count, 4);
        assert_eq!(config.storage.bucket, "wallpapers");
        assert_eq!(config.display.default_sort, SortMode::Newest);
        assert!(config.storage.base_url.is_none());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [gallery]
            related_limit = 6

            [display]
            default_sort = "downloads"
            "#,
        )
        .unwrap();
        assert_eq!(config.gallery.related_limit, 6);
        assert_eq!(config.gallery.popular_count, 8);
        assert_eq!(config.display.default_sort, SortMode::Downloads);
        assert_eq!(config.storage.api_key_env, "WALLYPAPER_STORAGE_KEY");
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut config = Config::default();
        config.storage.base_url = Some("https://example.supabase.co".into());
        let text = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back.storage.base_url, config.storage.base_url);
    }
}
