use anyhow::Result;

use crate::error::GalleryError;
use crate::gallery::Gallery;

pub fn cmd_download(gallery: &mut Gallery, id: &str) -> Result<()> {
    match gallery.download(id) {
        Ok(download) => {
            println!("✓ {} -> {}", download.url, download.file_name);
            println!("  {} downloads", download.downloads);
            Ok(())
        }
        Err(GalleryError::WallpaperNotFound(id)) => {
            println!("Wallpaper not found: {}", id);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

pub fn cmd_like(gallery: &mut Gallery, id: &str) -> Result<()> {
    match gallery.like(id) {
        Ok(likes) => {
            println!("✓ Liked #{} ({} likes)", id, likes);
            Ok(())
        }
        Err(GalleryError::WallpaperNotFound(id)) => {
            println!("Wallpaper not found: {}", id);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
