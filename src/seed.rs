//! Initial gallery content.
//!
//! The built-in seed is embedded at compile time; a replacement JSON file
//! with the same shape can be supplied through config or `--seed`.

use crate::catalog::Category;
use crate::users::User;
use crate::wallpaper::Wallpaper;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

const DEFAULT_SEED: &str = include_str!("../seed/default.json");

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seed {
    #[serde(default)]
    pub wallpapers: Vec<Wallpaper>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub popular_tags: Vec<String>,
}

impl Seed {
    /// The seed shipped with the binary.
    pub fn builtin() -> Result<Self> {
        Self::parse(DEFAULT_SEED).context("Built-in seed is invalid")
    }

    /// Load a seed file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file {}", path.display()))?;
        let seed = Self::parse(&data)
            .with_context(|| format!("Failed to parse seed file {}", path.display()))?;
        debug!(
            path = %path.display(),
            wallpapers = seed.wallpapers.len(),
            users = seed.users.len(),
            "loaded seed"
        );
        Ok(seed)
    }

    /// Load `path` if given, the built-in seed otherwise.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Self::builtin(),
        }
    }

    fn parse(data: &str) -> Result<Self> {
        let seed: Seed = serde_json::from_str(data)?;
        seed.check_unique_ids()?;
        Ok(seed)
    }

    fn check_unique_ids(&self) -> Result<()> {
        let mut seen = std::collections::HashSet::new();
        for wp in &self.wallpapers {
            if !seen.insert(wp.id.as_str()) {
                anyhow::bail!("Duplicate wallpaper id '{}' in seed", wp.id);
            }
        }
        let mut seen = std::collections::HashSet::new();
        for user in &self.users {
            if !seen.insert(user.id.as_str()) {
                anyhow::bail!("Duplicate user id '{}' in seed", user.id);
            }
        }
        let mut seen = std::collections::HashSet::new();
        for collection in self.users.iter().flat_map(|u| &u.collections) {
            if !seen.insert(collection.id.as_str()) {
                anyhow::bail!("Duplicate collection id '{}' in seed", collection.id);
            }
        }
        Ok(())
    }
}
