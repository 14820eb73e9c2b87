//! Image upload to object storage.
//!
//! `HttpStorage` talks to a Supabase-style storage REST API. Objects get a
//! random name that keeps the original extension.

use crate::utils;
use crate::wallpaper::Wallpaper;
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("storage is not configured (set storage.base_url in config)")]
    NotConfigured,

    #[error("missing API key: set the {0} environment variable")]
    MissingKey(String),

    #[error("unsupported file type: {0}")]
    Unsupported(String),

    #[error("storage rejected the request ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

/// Capability to store raw image bytes and hand back a public URL.
#[allow(async_fn_in_trait)]
pub trait ObjectStorage {
    /// Store `bytes`, returning the object's public URL.
    async fn upload(&self, bytes: Vec<u8>, extension: &str) -> Result<String, UploadError>;

    /// Remove a previously uploaded object by its name within the bucket.
    async fn delete(&self, object: &str) -> Result<(), UploadError>;
}

/// Random object name like "k3J9...q.png"
fn object_name(extension: &str) -> String {
    let stem: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(20)
        .map(char::from)
        .collect();
    format!("{}.{}", stem, extension.to_lowercase())
}

fn content_type(extension: &str) -> &'static str {
    match extension.to_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}

pub struct HttpStorage {
    client: reqwest::Client,
    base_url: String,
    bucket: String,
    api_key: String,
}

impl HttpStorage {
    pub fn new(base_url: &str, bucket: &str, api_key: String) -> Result<Self, UploadError> {
        let client = reqwest::Client::builder()
            .user_agent(format!("wallypaper/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            bucket: bucket.to_string(),
            api_key,
        })
    }

    /// Build from the `[storage]` config section.
    pub fn from_config(config: &crate::config::StorageConfig) -> Result<Self, UploadError> {
        let base_url = config.base_url.as_deref().ok_or(UploadError::NotConfigured)?;
        let api_key = config
            .api_key()
            .ok_or_else(|| UploadError::MissingKey(config.api_key_env.clone()))?;
        Self::new(base_url, &config.bucket, api_key)
    }

    fn object_url(&self, object: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.base_url, self.bucket, object)
    }

    pub fn public_url(&self, object: &str) -> String {
        format!("{}/storage/v1/object/public/{}/{}", self.base_url, self.bucket, object)
    }

    async fn check(response: reqwest::Response) -> Result<(), UploadError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(UploadError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

impl ObjectStorage for HttpStorage {
    async fn upload(&self, bytes: Vec<u8>, extension: &str) -> Result<String, UploadError> {
        let object = object_name(extension);
        let size = bytes.len();
        let response = self
            .client
            .post(self.object_url(&object))
            .bearer_auth(&self.api_key)
            .header("Content-Type", content_type(extension))
            .body(bytes)
            .send()
            .await?;
        Self::check(response).await?;
        info!(%object, bytes = size, "uploaded");
        Ok(self.public_url(&object))
    }

    async fn delete(&self, object: &str) -> Result<(), UploadError> {
        let response = self
            .client
            .delete(self.object_url(object))
            .bearer_auth(&self.api_key)
            .send()
            .await?;
        Self::check(response).await?;
        debug!(object, "deleted");
        Ok(())
    }
}

/// Keeps objects in memory; URLs use the `memory://` scheme.
pub struct MemoryStorage {
    bucket: String,
    objects: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new(bucket: &str) -> Self {
        Self {
            bucket: bucket.to_string(),
            objects: Mutex::new(HashMap::new()),
        }
    }

    fn objects(&self) -> Result<MutexGuard<'_, HashMap<String, Vec<u8>>>, UploadError> {
        self.objects
            .lock()
            .map_err(|e| UploadError::Unavailable(e.to_string()))
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.objects.lock().map(|o| o.len()).unwrap_or(0)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ObjectStorage for MemoryStorage {
    async fn upload(&self, bytes: Vec<u8>, extension: &str) -> Result<String, UploadError> {
        let object = object_name(extension);
        self.objects()?.insert(object.clone(), bytes);
        Ok(format!("memory://{}/{}", self.bucket, object))
    }

    async fn delete(&self, object: &str) -> Result<(), UploadError> {
        self.objects()?.remove(object);
        Ok(())
    }
}

/// An image read from disk, ready to upload.
#[derive(Debug, Clone)]
pub struct PreparedUpload {
    pub bytes: Vec<u8>,
    pub extension: String,
    /// e.g. "3840x2160"
    pub resolution: String,
    /// e.g. "4.2 MB"
    pub file_size: String,
}

/// Read an image file and collect the metadata a wallpaper record needs.
pub fn prepare_upload(path: &Path) -> Result<PreparedUpload, UploadError> {
    if !utils::is_image_file(path) {
        return Err(UploadError::Unsupported(path.display().to_string()));
    }
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    let bytes = std::fs::read(path)?;
    let (width, height) = image::image_dimensions(path)?;

    Ok(PreparedUpload {
        file_size: utils::format_file_size(bytes.len() as u64),
        resolution: format!("{}x{}", width, height),
        bytes,
        extension,
    })
}

/// Metadata supplied by the uploader
#[derive(Debug, Clone, Default)]
pub struct UploadDetails {
    pub title: String,
    pub description: String,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
}

/// Upload `prepared` and build the wallpaper record for it.
pub async fn upload_wallpaper<S: ObjectStorage>(
    storage: &S,
    prepared: PreparedUpload,
    details: UploadDetails,
    id: String,
    uploader: &str,
) -> Result<Wallpaper, UploadError> {
    let url = storage.upload(prepared.bytes, &prepared.extension).await?;

    let mut wallpaper = Wallpaper {
        id,
        title: details.title,
        description: details.description,
        image_url: url.clone(),
        thumbnail_url: url,
        categories: Vec::new(),
        tags: Vec::new(),
        resolution: prepared.resolution,
        file_size: prepared.file_size,
        downloads: 0,
        likes: 0,
        upload_date: chrono::Local::now().date_naive(),
        uploader: uploader.to_string(),
    };
    for slug in &details.categories {
        wallpaper.add_category(slug);
    }
    for tag in &details.tags {
        wallpaper.add_tag(tag);
    }
    Ok(wallpaper)
}
