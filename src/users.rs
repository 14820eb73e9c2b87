//! User accounts, favorites and collections.
//!
//! Accounts are mock data: there is no password check anywhere.

use crate::error::{GalleryError, GalleryResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// A named, ordered list of wallpaper ids owned by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub wallpapers: Vec<String>,
    #[serde(default)]
    pub is_public: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub profile_pic: Option<String>,
    /// Wallpaper ids; may reference wallpapers that no longer exist
    #[serde(default)]
    pub favorites: Vec<String>,
    #[serde(default)]
    pub collections: Vec<Collection>,
    #[serde(default)]
    pub is_admin: bool,
}

impl User {
    pub fn is_favorite(&self, wallpaper_id: &str) -> bool {
        self.favorites.iter().any(|f| f == wallpaper_id)
    }

    pub fn collection(&self, collection_id: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.id == collection_id)
    }
}

/// In-memory user repository
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn from_seed(mut users: Vec<User>) -> Self {
        for user in &mut users {
            crate::utils::dedup_preserving_order(&mut user.favorites);
        }
        Self { users }
    }

    pub fn all(&self) -> &[User] {
        &self.users
    }

    pub fn get(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Case-insensitive email lookup
    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        let email = email.trim();
        self.users.iter().find(|u| u.email.eq_ignore_ascii_case(email))
    }

    /// Create a regular account. Returns the new user id.
    pub fn register(&mut self, name: &str, email: &str) -> GalleryResult<String> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() {
            return Err(GalleryError::InvalidInput("name must not be empty".into()));
        }
        if email.is_empty() || !email.contains('@') {
            return Err(GalleryError::InvalidInput(format!(
                "'{}' is not an email address",
                email
            )));
        }
        if self.find_by_email(email).is_some() {
            return Err(GalleryError::EmailTaken(email.to_string()));
        }

        let id = crate::utils::next_prefixed_id("user", self.users.iter().map(|u| u.id.as_str()));
        self.users.push(User {
            id: id.clone(),
            name: name.to_string(),
            email: email.to_string(),
            profile_pic: None,
            favorites: Vec::new(),
            collections: Vec::new(),
            is_admin: false,
        });
        info!(%id, "registered user");
        Ok(id)
    }

    /// Add a favorite. Returns false if it was already there.
    pub fn add_favorite(&mut self, user_id: &str, wallpaper_id: &str) -> GalleryResult<bool> {
        let user = self.user_mut(user_id)?;
        if user.is_favorite(wallpaper_id) {
            return Ok(false);
        }
        user.favorites.push(wallpaper_id.to_string());
        debug!(user_id, wallpaper_id, "favorite added");
        Ok(true)
    }

    /// Remove a favorite. Returns false if it was not there.
    pub fn remove_favorite(&mut self, user_id: &str, wallpaper_id: &str) -> GalleryResult<bool> {
        let user = self.user_mut(user_id)?;
        let before = user.favorites.len();
        user.favorites.retain(|f| f != wallpaper_id);
        let removed = user.favorites.len() < before;
        if removed {
            debug!(user_id, wallpaper_id, "favorite removed");
        }
        Ok(removed)
    }

    /// Create a collection for `user_id`. Returns the new collection id.
    pub fn create_collection(
        &mut self,
        user_id: &str,
        name: &str,
        is_public: bool,
    ) -> GalleryResult<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GalleryError::InvalidInput(
                "collection name must not be empty".into(),
            ));
        }
        // Ids are global across users.
        let id = crate::utils::next_prefixed_id(
            "col",
            self.users
                .iter()
                .flat_map(|u| u.collections.iter().map(|c| c.id.as_str())),
        );

        let user = self.user_mut(user_id)?;
        if user.collections.iter().any(|c| c.name == name) {
            return Err(GalleryError::DuplicateCollection(name.to_string()));
        }
        user.collections.push(Collection {
            id: id.clone(),
            name: name.to_string(),
            wallpapers: Vec::new(),
            is_public,
        });
        debug!(user_id, %id, "collection created");
        Ok(id)
    }

    /// Append a wallpaper to a collection. Returns false if it was already there.
    pub fn add_to_collection(
        &mut self,
        user_id: &str,
        collection_id: &str,
        wallpaper_id: &str,
    ) -> GalleryResult<bool> {
        let user = self.user_mut(user_id)?;
        let collection = user
            .collections
            .iter_mut()
            .find(|c| c.id == collection_id)
            .ok_or_else(|| GalleryError::CollectionNotFound(collection_id.to_string()))?;
        if collection.wallpapers.iter().any(|w| w == wallpaper_id) {
            return Ok(false);
        }
        collection.wallpapers.push(wallpaper_id.to_string());
        Ok(true)
    }

    fn user_mut(&mut self, user_id: &str) -> GalleryResult<&mut User> {
        self.users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or_else(|| GalleryError::UserNotFound(user_id.to_string()))
    }
}
