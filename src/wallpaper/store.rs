use super::{filter, related, FilterSpec, SortMode, Wallpaper};
use crate::error::{GalleryError, GalleryResult};
use tracing::debug;

/// In-memory repository owning every wallpaper record.
///
/// The filtered view is derived from `wallpapers` and `filters`; it is
/// recomputed after every filter change or mutation and never edited directly.
#[derive(Debug, Clone, Default)]
pub struct WallpaperStore {
    wallpapers: Vec<Wallpaper>,
    filters: FilterSpec,
    filtered: Vec<Wallpaper>,
}

impl WallpaperStore {
    pub fn from_seed(mut wallpapers: Vec<Wallpaper>) -> Self {
        wallpapers.iter_mut().for_each(Wallpaper::normalize);
        let mut store = Self {
            wallpapers,
            filters: FilterSpec::default(),
            filtered: Vec::new(),
        };
        store.refresh();
        store
    }

    pub fn all(&self) -> &[Wallpaper] {
        &self.wallpapers
    }

    pub fn len(&self) -> usize {
        self.wallpapers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wallpapers.is_empty()
    }

    pub fn filters(&self) -> &FilterSpec {
        &self.filters
    }

    /// Replace the current filter and recompute the view.
    pub fn set_filters(&mut self, filters: FilterSpec) {
        self.filters = filters;
        self.refresh();
    }

    /// Current filtered and sorted view.
    pub fn filtered(&self) -> &[Wallpaper] {
        &self.filtered
    }

    /// Ad-hoc view for `spec`; leaves the current filter untouched.
    pub fn get_filtered(&self, spec: &FilterSpec) -> Vec<Wallpaper> {
        filter(&self.wallpapers, spec)
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Wallpaper> {
        self.wallpapers.iter().find(|wp| wp.id == id)
    }

    /// Related wallpapers for `id`; empty when the id is unknown.
    pub fn get_related(&self, id: &str, limit: usize) -> Vec<Wallpaper> {
        match self.get_by_id(id) {
            Some(target) => related(&self.wallpapers, target, limit),
            None => Vec::new(),
        }
    }

    /// First `n` wallpapers of the whole gallery under `sort`.
    pub fn top_by(&self, sort: SortMode, n: usize) -> Vec<Wallpaper> {
        let mut list = self.wallpapers.clone();
        list.sort_by(|a, b| sort.compare(a, b));
        list.truncate(n);
        list
    }

    /// Every tag in use, sorted and deduplicated.
    pub fn all_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self
            .wallpapers
            .iter()
            .flat_map(|wp| wp.tags.iter().cloned())
            .collect();
        tags.sort();
        tags.dedup();
        tags
    }

    /// Number of wallpapers carrying `tag`.
    pub fn tag_count(&self, tag: &str) -> usize {
        self.wallpapers
            .iter()
            .filter(|wp| wp.tags.iter().any(|t| t == tag))
            .count()
    }

    /// Number of wallpapers in category `slug`.
    pub fn category_count(&self, slug: &str) -> usize {
        self.wallpapers
            .iter()
            .filter(|wp| wp.categories.iter().any(|c| c == slug))
            .count()
    }

    /// Add a new wallpaper. Ids must be unique.
    pub fn insert(&mut self, mut wallpaper: Wallpaper) -> GalleryResult<()> {
        if self.get_by_id(&wallpaper.id).is_some() {
            return Err(GalleryError::DuplicateWallpaper(wallpaper.id));
        }
        wallpaper.normalize();
        debug!(id = %wallpaper.id, title = %wallpaper.title, "wallpaper added");
        self.wallpapers.push(wallpaper);
        self.refresh();
        Ok(())
    }

    /// Next free numeric id, one past the largest numeric id in use.
    pub fn next_id(&self) -> String {
        let max = self
            .wallpapers
            .iter()
            .filter_map(|wp| wp.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        (max + 1).to_string()
    }

    /// Bump the download counter. Returns the new count.
    pub fn increment_downloads(&mut self, id: &str) -> GalleryResult<u64> {
        let count = self.update(id, |wp| {
            wp.downloads = wp.downloads.saturating_add(1);
            wp.downloads
        })?;
        debug!(id, downloads = count, "download counted");
        Ok(count)
    }

    /// Bump the like counter. Increment only; there is no unlike.
    /// Returns the new count.
    pub fn increment_likes(&mut self, id: &str) -> GalleryResult<u64> {
        let count = self.update(id, |wp| {
            wp.likes = wp.likes.saturating_add(1);
            wp.likes
        })?;
        debug!(id, likes = count, "like counted");
        Ok(count)
    }

    fn update<T>(&mut self, id: &str, apply: impl FnOnce(&mut Wallpaper) -> T) -> GalleryResult<T> {
        let wp = self
            .wallpapers
            .iter_mut()
            .find(|wp| wp.id == id)
            .ok_or_else(|| GalleryError::WallpaperNotFound(id.to_string()))?;
        let out = apply(wp);
        self.refresh();
        Ok(out)
    }

    fn refresh(&mut self) {
        self.filtered = filter(&self.wallpapers, &self.filters);
    }
}
