//! Browsable categories and the popular tag list.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Value stored in `Wallpaper::categories`
    pub slug: String,
    /// Advertised wallpaper count (display only)
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    categories: Vec<Category>,
    popular_tags: Vec<String>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>, popular_tags: Vec<String>) -> Self {
        Self {
            categories,
            popular_tags,
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Categories shown on the home page
    pub fn featured(&self) -> Vec<&Category> {
        self.categories.iter().filter(|c| c.featured).collect()
    }

    pub fn by_slug(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug == slug)
    }

    /// First `n` popular tags, in curated order
    pub fn popular_tags(&self, n: usize) -> &[String] {
        &self.popular_tags[..n.min(self.popular_tags.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(slug: &str, featured: bool) -> Category {
        Category {
            id: slug.into(),
            name: slug.to_uppercase(),
            slug: slug.into(),
            count: 1,
            featured,
        }
    }

    #[test]
    fn test_featured_keeps_order() {
        let catalog = Catalog::new(
            vec![
                category("nature", true),
                category("urban", false),
                category("space", true),
            ],
            Vec::new(),
        );
        let featured = catalog.featured();
        let featured: Vec<&str> = featured.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(featured, vec!["nature", "space"]);
        assert_eq!(catalog.by_slug("urban").map(|c| c.featured), Some(false));
        assert!(catalog.by_slug("animals").is_none());
    }

    #[test]
    fn test_popular_tags_clamps() {
        let catalog = Catalog::new(Vec::new(), vec!["a".into(), "b".into()]);
        assert_eq!(catalog.popular_tags(1), &["a".to_string()]);
        assert_eq!(catalog.popular_tags(15).len(), 2);
    }
}
