use super::{SortMode, Wallpaper};
use serde::{Deserialize, Serialize};

/// Number of related wallpapers shown on a detail page
pub const DEFAULT_RELATED_LIMIT: usize = 4;

/// Search filters applied to the gallery.
///
/// Within `categories` and `tags` any single match is enough; a wallpaper
/// must pass the query, category and tag groups together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub sort_by: SortMode,
}

impl FilterSpec {
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_sort(mut self, sort_by: SortMode) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// Add the category if absent, remove it otherwise.
    pub fn toggle_category(&mut self, slug: &str) {
        toggle_entry(&mut self.categories, slug);
    }

    /// Add the tag if absent, remove it otherwise.
    pub fn toggle_tag(&mut self, tag: &str) {
        toggle_entry(&mut self.tags, tag);
    }

    /// Drop category and tag filters and reset the sort. The query is kept.
    pub fn clear(&mut self) {
        self.categories.clear();
        self.tags.clear();
        self.sort_by = SortMode::Newest;
    }

    /// No predicate restricts the result.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.categories.is_empty() && self.tags.is_empty()
    }

    pub fn active_filter_count(&self) -> usize {
        self.categories.len() + self.tags.len()
    }

    /// Check whether a single wallpaper passes every predicate group.
    pub fn matches(&self, wp: &Wallpaper) -> bool {
        let matches_categories =
            self.categories.is_empty() || wp.in_any_category(&self.categories);
        let matches_tags = self.tags.is_empty() || wp.has_any_tag(&self.tags);
        wp.matches_query(&self.query) && matches_categories && matches_tags
    }
}

fn toggle_entry(entries: &mut Vec<String>, value: &str) {
    if let Some(pos) = entries.iter().position(|e| e == value) {
        entries.remove(pos);
    } else {
        entries.push(value.to_string());
    }
}

/// Select the wallpapers matching `spec`, ordered by `spec.sort_by`.
pub fn filter(all: &[Wallpaper], spec: &FilterSpec) -> Vec<Wallpaper> {
    let mut matched: Vec<Wallpaper> = all.iter().filter(|wp| spec.matches(wp)).cloned().collect();
    // sort_by is stable, ties keep input order.
    matched.sort_by(|a, b| spec.sort_by.compare(a, b));
    matched
}

/// Up to `limit` other wallpapers sharing a category or tag with `target`,
/// in input order.
pub fn related(all: &[Wallpaper], target: &Wallpaper, limit: usize) -> Vec<Wallpaper> {
    all.iter()
        .filter(|wp| wp.id != target.id && wp.shares_classification_with(target))
        .take(limit)
        .cloned()
        .collect()
}
