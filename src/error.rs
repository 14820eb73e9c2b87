use thiserror::Error;

/// Errors raised by gallery repositories and the session.
///
/// Lookups never produce these; they return `Option` instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GalleryError {
    #[error("wallpaper not found: {0}")]
    WallpaperNotFound(String),

    #[error("wallpaper '{0}' already exists")]
    DuplicateWallpaper(String),

    #[error("user not found: {0}")]
    UserNotFound(String),

    #[error("an account with email '{0}' already exists")]
    EmailTaken(String),

    #[error("no account matches '{0}'")]
    InvalidCredentials(String),

    #[error("not logged in")]
    NotAuthenticated,

    #[error("{0} is not allowed to do that")]
    NotPermitted(String),

    #[error("collection not found: {0}")]
    CollectionNotFound(String),

    #[error("collection '{0}' already exists")]
    DuplicateCollection(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type GalleryResult<T> = std::result::Result<T, GalleryError>;
