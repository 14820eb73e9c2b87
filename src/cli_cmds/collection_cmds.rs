use anyhow::Result;

use crate::cli::CollectionAction;
use crate::gallery::Gallery;

pub fn cmd_collection(gallery: &mut Gallery, action: CollectionAction) -> Result<()> {
    match action {
        CollectionAction::List => {
            let user = gallery
                .current_user()
                .ok_or(crate::error::GalleryError::NotAuthenticated)?;

            if user.collections.is_empty() {
                println!("No collections saved.");
                println!("Create one with: wallypaper collection create <name>");
            } else {
                println!("Collections:");
                for collection in &user.collections {
                    let visibility = if collection.is_public { "public" } else { "private" };
                    println!(
                        "  {} {} ({} wallpapers, {})",
                        collection.id,
                        collection.name,
                        collection.wallpapers.len(),
                        visibility
                    );
                    for id in &collection.wallpapers {
                        let title = gallery
                            .store
                            .get_by_id(id)
                            .map(|wp| wp.title.as_str())
                            .unwrap_or("(missing)");
                        println!("      #{} {}", id, title);
                    }
                }
            }
        }
        CollectionAction::Create { name, private } => {
            let id = gallery.create_collection(&name, !private)?;
            println!("✓ Created collection '{}' ({})", name, id);
        }
        CollectionAction::Add {
            collection_id,
            wallpaper_id,
        } => {
            if gallery.store.get_by_id(&wallpaper_id).is_none() {
                println!("Wallpaper not found: {}", wallpaper_id);
                return Ok(());
            }
            if gallery.add_to_collection(&collection_id, &wallpaper_id)? {
                println!("✓ Added #{} to {}", wallpaper_id, collection_id);
            } else {
                println!("#{} is already in {}", wallpaper_id, collection_id);
            }
        }
    }

    Ok(())
}
