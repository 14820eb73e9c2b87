//! Gallery service: the read/mutate surface handed to the front end.

use crate::catalog::{Catalog, Category};
use crate::config::GalleryConfig;
use crate::error::{GalleryError, GalleryResult};
use crate::seed::Seed;
use crate::session::Session;
use crate::users::{User, UserDirectory};
use crate::wallpaper::{FilterSpec, SortMode, Wallpaper, WallpaperStore};

/// Home page content
#[derive(Debug, Clone)]
pub struct HomeSections<'a> {
    /// Most downloaded
    pub popular: Vec<Wallpaper>,
    /// Most recently uploaded
    pub recent: Vec<Wallpaper>,
    pub featured_categories: Vec<&'a Category>,
    pub popular_tags: &'a [String],
}

/// A counted download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub url: String,
    pub file_name: String,
    pub downloads: u64,
}

pub struct Gallery {
    pub store: WallpaperStore,
    pub catalog: Catalog,
    pub users: UserDirectory,
    pub session: Session,
    settings: GalleryConfig,
}

impl Gallery {
    pub fn new(
        store: WallpaperStore,
        catalog: Catalog,
        users: UserDirectory,
        settings: GalleryConfig,
    ) -> Self {
        Self {
            store,
            catalog,
            users,
            session: Session::default(),
            settings,
        }
    }

    pub fn from_seed(seed: Seed, settings: GalleryConfig) -> Self {
        Self::new(
            WallpaperStore::from_seed(seed.wallpapers),
            Catalog::new(seed.categories, seed.popular_tags),
            UserDirectory::from_seed(seed.users),
            settings,
        )
    }

    pub fn settings(&self) -> &GalleryConfig {
        &self.settings
    }

    pub fn home(&self) -> HomeSections<'_> {
        HomeSections {
            popular: self
                .store
                .top_by(SortMode::Downloads, self.settings.popular_count),
            recent: self.store.top_by(SortMode::Newest, self.settings.recent_count),
            featured_categories: self.catalog.featured(),
            popular_tags: self.catalog.popular_tags(self.settings.popular_tags_shown),
        }
    }

    pub fn search(&mut self, spec: FilterSpec) -> &[Wallpaper] {
        self.store.set_filters(spec);
        self.store.filtered()
    }

    /// Related wallpapers using the configured limit.
    pub fn related(&self, id: &str) -> Vec<Wallpaper> {
        self.store.get_related(id, self.settings.related_limit)
    }

    /// Count a download and return what the client should fetch.
    pub fn download(&mut self, id: &str) -> GalleryResult<Download> {
        let downloads = self.store.increment_downloads(id)?;
        let wp = self
            .store
            .get_by_id(id)
            .ok_or_else(|| GalleryError::WallpaperNotFound(id.to_string()))?;
        Ok(Download {
            url: wp.image_url.clone(),
            file_name: wp.download_file_name(),
            downloads,
        })
    }

    pub fn like(&mut self, id: &str) -> GalleryResult<u64> {
        self.store.increment_likes(id)
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.current_user(&self.users)
    }

    /// Current user if they are an admin.
    pub fn require_admin(&self) -> GalleryResult<&User> {
        let user_id = self.session.require()?;
        let user = self
            .users
            .get(user_id)
            .ok_or_else(|| GalleryError::UserNotFound(user_id.to_string()))?;
        if !user.is_admin {
            return Err(GalleryError::NotPermitted(user.email.clone()));
        }
        Ok(user)
    }

    pub fn login(&mut self, email: &str) -> GalleryResult<String> {
        self.session.login(&self.users, email)
    }

    pub fn register(&mut self, name: &str, email: &str) -> GalleryResult<String> {
        self.session.register(&mut self.users, name, email)
    }

    pub fn is_favorite(&self, wallpaper_id: &str) -> bool {
        self.current_user()
            .map(|u| u.is_favorite(wallpaper_id))
            .unwrap_or(false)
    }

    pub fn add_favorite(&mut self, wallpaper_id: &str) -> GalleryResult<bool> {
        let user_id = self.session.require()?.to_string();
        self.users.add_favorite(&user_id, wallpaper_id)
    }

    pub fn remove_favorite(&mut self, wallpaper_id: &str) -> GalleryResult<bool> {
        let user_id = self.session.require()?.to_string();
        self.users.remove_favorite(&user_id, wallpaper_id)
    }

    /// Flip favorite state for the current user. Returns the new state.
    pub fn toggle_favorite(&mut self, wallpaper_id: &str) -> GalleryResult<bool> {
        if self.is_favorite(wallpaper_id) {
            self.remove_favorite(wallpaper_id)?;
            Ok(false)
        } else {
            self.add_favorite(wallpaper_id)?;
            Ok(true)
        }
    }

    /// Current user's favorites that still exist in the store.
    pub fn favorites(&self) -> GalleryResult<Vec<&Wallpaper>> {
        let user_id = self.session.require()?;
        let user = self
            .users
            .get(user_id)
            .ok_or_else(|| GalleryError::UserNotFound(user_id.to_string()))?;
        Ok(user
            .favorites
            .iter()
            .filter_map(|id| self.store.get_by_id(id))
            .collect())
    }

    pub fn create_collection(&mut self, name: &str, is_public: bool) -> GalleryResult<String> {
        let user_id = self.session.require()?.to_string();
        self.users.create_collection(&user_id, name, is_public)
    }

    pub fn add_to_collection(
        &mut self,
        collection_id: &str,
        wallpaper_id: &str,
    ) -> GalleryResult<bool> {
        let user_id = self.session.require()?.to_string();
        self.users
            .add_to_collection(&user_id, collection_id, wallpaper_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery() -> Gallery {
        Gallery::from_seed(Seed::builtin().unwrap(), GalleryConfig::default())
    }

    #[test]
    fn test_home_sections() {
        let gallery = gallery();
        let home = gallery.home();
        assert_eq!(home.popular.len(), 8);
        assert!(home.popular.windows(2).all(|w| w[0].downloads >= w[1].downloads));
        assert_eq!(home.popular[0].title, "Galaxy");
        assert_eq!(home.recent.len(), 4);
        assert_eq!(home.recent[0].title, "Minimalist Workspace");
        assert!(home.featured_categories.iter().all(|c| c.featured));
        assert_eq!(home.featured_categories.len(), 5);
        assert_eq!(home.popular_tags.len(), 14);
    }

    #[test]
    fn test_download_counts_and_names() {
        let mut gallery = gallery();
        let download = gallery.download("1").unwrap();
        assert_eq!(download.file_name, "mountain-sunset.jpg");
        assert_eq!(download.downloads, 1251);
        assert!(download.url.starts_with("https://"));
        assert_eq!(
            gallery.download("missing"),
            Err(GalleryError::WallpaperNotFound("missing".into()))
        );
    }

    #[test]
    fn test_favorites_require_login() {
        let mut gallery = gallery();
        assert_eq!(gallery.toggle_favorite("2"), Err(GalleryError::NotAuthenticated));
        assert!(gallery.favorites().is_err());
    }

    #[test]
    fn test_toggle_favorite() {
        let mut gallery = gallery();
        gallery.login("alex@example.com").unwrap();
        assert!(gallery.is_favorite("1"));
        assert!(!gallery.toggle_favorite("1").unwrap());
        assert!(!gallery.is_favorite("1"));
        assert!(gallery.toggle_favorite("1").unwrap());
        let favorites = gallery.favorites().unwrap();
        let ids: Vec<&str> = favorites.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "6", "1"]);
    }

    #[test]
    fn test_favorites_skip_missing_wallpapers() {
        let mut gallery = gallery();
        gallery.login("sam@example.com").unwrap();
        gallery.add_favorite("gone").unwrap();
        assert_eq!(gallery.favorites().unwrap().len(), 3);
    }

    #[test]
    fn test_require_admin() {
        let mut gallery = gallery();
        assert_eq!(gallery.require_admin().err(), Some(GalleryError::NotAuthenticated));
        gallery.login("sam@example.com").unwrap();
        assert_eq!(
            gallery.require_admin().err(),
            Some(GalleryError::NotPermitted("sam@example.com".into()))
        );
        gallery.login("alex@example.com").unwrap();
        assert_eq!(gallery.require_admin().unwrap().id, "user1");
    }

    #[test]
    fn test_register_then_collect() {
        let mut gallery = gallery();
        let id = gallery.register("Jo", "jo@example.com").unwrap();
        assert_eq!(id, "user3");
        let col = gallery.create_collection("Cities", false).unwrap();
        assert_eq!(col, "col3");
        assert!(gallery.add_to_collection(&col, "4").unwrap());
        let user = gallery.current_user().unwrap();
        assert_eq!(user.collections[0].wallpapers, vec!["4".to_string()]);
        assert!(!user.collections[0].is_public);
    }

    #[test]
    fn test_search_sets_current_filter() {
        let mut gallery = gallery();
        let spec = FilterSpec {
            categories: vec!["nature".into()],
            sort_by: SortMode::Popular,
            ..Default::default()
        };
        let titles: Vec<String> = gallery.search(spec.clone()).iter().map(|w| w.title.clone()).collect();
        assert_eq!(titles, vec!["Serene Beach", "Mountain Sunset", "Pink Flowers"]);
        assert_eq!(gallery.store.filters(), &spec);
    }

    #[test]
    fn test_related_uses_configured_limit() {
        let settings = GalleryConfig {
            related_limit: 1,
            ..GalleryConfig::default()
        };
        let gallery = Gallery::from_seed(Seed::builtin().unwrap(), settings);
        let related = gallery.related("1");
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].id, "3");
    }
}
