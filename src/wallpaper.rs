mod filter;
mod store;

pub use filter::{filter, related, FilterSpec, DEFAULT_RELATED_LIMIT};
pub use store::WallpaperStore;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sort order for gallery listings
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Most recently uploaded first
    #[default]
    Newest,
    /// Most liked first
    Popular,
    /// Most downloaded first
    Downloads,
}

impl SortMode {
    /// Return human-readable display name for this sort mode.
    pub fn display_name(&self) -> &'static str {
        match self {
            SortMode::Newest => "Newest",
            SortMode::Popular => "Popular",
            SortMode::Downloads => "Downloads",
        }
    }

    /// Cycle to the next sort mode.
    pub fn next(&self) -> Self {
        match self {
            SortMode::Newest => SortMode::Popular,
            SortMode::Popular => SortMode::Downloads,
            SortMode::Downloads => SortMode::Newest,
        }
    }

    /// Descending comparator for this mode. Equal keys compare `Equal` so a
    /// stable sort keeps input order.
    pub fn compare(&self, a: &Wallpaper, b: &Wallpaper) -> std::cmp::Ordering {
        match self {
            SortMode::Newest => b.upload_date.cmp(&a.upload_date),
            SortMode::Popular => b.likes.cmp(&a.likes),
            SortMode::Downloads => b.downloads.cmp(&a.downloads),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallpaper {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub image_url: String,
    pub thumbnail_url: String,
    /// Category slugs, no duplicates
    #[serde(default)]
    pub categories: Vec<String>,
    /// Free-form tags, no duplicates
    #[serde(default)]
    pub tags: Vec<String>,
    /// e.g. "3840x2160"
    pub resolution: String,
    /// Human readable, e.g. "4.2 MB"
    pub file_size: String,
    #[serde(default)]
    pub downloads: u64,
    #[serde(default)]
    pub likes: u64,
    pub upload_date: NaiveDate,
    /// Uploader user id (not checked against the user directory)
    pub uploader: String,
}

impl Wallpaper {
    /// Lowercase and trim categories and tags, then drop empties and
    /// duplicates, keeping the first occurrence.
    pub fn normalize(&mut self) {
        for slug in std::mem::take(&mut self.categories) {
            self.add_category(&slug);
        }
        for tag in std::mem::take(&mut self.tags) {
            self.add_tag(&tag);
        }
    }

    /// Add a tag to this wallpaper
    pub fn add_tag(&mut self, tag: &str) {
        let tag = tag.to_lowercase().trim().to_string();
        if !tag.is_empty() && !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    /// Add a category slug to this wallpaper
    pub fn add_category(&mut self, slug: &str) {
        let slug = slug.to_lowercase().trim().to_string();
        if !slug.is_empty() && !self.categories.contains(&slug) {
            self.categories.push(slug);
        }
    }

    /// Case-insensitive substring match on title, description or any tag.
    /// An empty query matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&query))
    }

    /// Check if wallpaper is in any of the given categories
    pub fn in_any_category(&self, categories: &[String]) -> bool {
        categories.iter().any(|c| self.categories.contains(c))
    }

    /// Check if wallpaper has any of the given tags
    pub fn has_any_tag(&self, tags: &[String]) -> bool {
        tags.iter().any(|t| self.tags.contains(t))
    }

    /// True when the two wallpapers share at least one category or tag.
    pub fn shares_classification_with(&self, other: &Wallpaper) -> bool {
        self.in_any_category(&other.categories) || self.has_any_tag(&other.tags)
    }

    /// File name offered when downloading, e.g. "mountain-sunset.jpg"
    pub fn download_file_name(&self) -> String {
        let stem = self
            .title
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
            .to_lowercase();
        format!("{}.jpg", stem)
    }
}
