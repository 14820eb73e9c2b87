use anyhow::{Context, Result};
use std::path::Path;
use tracing::warn;

use crate::config::StorageConfig;
use crate::gallery::Gallery;
use crate::upload::{self, HttpStorage, MemoryStorage, ObjectStorage, UploadDetails};

/// `base_url` value that keeps uploads in process memory
const MEMORY_BACKEND: &str = "memory";

pub async fn cmd_upload(
    gallery: &mut Gallery,
    storage: &StorageConfig,
    path: &Path,
    details: UploadDetails,
) -> Result<()> {
    let uploader = gallery.require_admin()?.id.clone();

    if storage.base_url.as_deref() == Some(MEMORY_BACKEND) {
        let backend = MemoryStorage::new(&storage.bucket);
        upload_with(gallery, &backend, path, details, &uploader).await
    } else {
        let backend = HttpStorage::from_config(storage)?;
        upload_with(gallery, &backend, path, details, &uploader).await
    }
}

async fn upload_with<S: ObjectStorage>(
    gallery: &mut Gallery,
    backend: &S,
    path: &Path,
    details: UploadDetails,
    uploader: &str,
) -> Result<()> {
    if details.title.trim().is_empty() {
        anyhow::bail!("A title is required");
    }

    println!("Uploading {}...", path.display());
    let prepared = upload::prepare_upload(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let id = gallery.store.next_id();
    let wallpaper = upload::upload_wallpaper(backend, prepared, details, id, uploader)
        .await
        .context("Upload failed")?;

    let summary = format!(
        "✓ Added #{} '{}' ({}, {})",
        wallpaper.id, wallpaper.title, wallpaper.resolution, wallpaper.file_size
    );
    let url = wallpaper.image_url.clone();
    if let Err(e) = gallery.store.insert(wallpaper) {
        // Drop the orphaned object.
        if let Some(object) = url.rsplit('/').next() {
            if let Err(cleanup) = backend.delete(object).await {
                warn!(%url, error = %cleanup, "failed to delete orphaned upload");
            }
        }
        return Err(e.into());
    }

    println!("{}", summary);
    println!("  {}", url);
    Ok(())
}
