use anyhow::Result;

use super::browse::print_wallpaper_rows;
use crate::cli::{FavoriteAction, UserAction};
use crate::gallery::Gallery;

pub fn cmd_user(gallery: &mut Gallery, action: UserAction) -> Result<()> {
    match action {
        UserAction::Register { name, email } => {
            let id = gallery.register(&name, &email)?;
            println!("✓ Registered {} as {}", email, id);
        }
        UserAction::Login { email } => {
            let id = gallery.login(&email)?;
            println!("✓ Logged in as {}", id);
        }
        UserAction::Logout => {
            gallery.session.logout();
            println!("Logged out.");
        }
        UserAction::Whoami => match gallery.current_user() {
            Some(user) => {
                let role = if user.is_admin { " (admin)" } else { "" };
                println!("{} <{}> {}{}", user.name, user.email, user.id, role);
                println!(
                    "  {} favorites, {} collections",
                    user.favorites.len(),
                    user.collections.len()
                );
            }
            None => println!("Not logged in."),
        },
    }

    Ok(())
}

pub fn cmd_favorite(gallery: &mut Gallery, action: FavoriteAction) -> Result<()> {
    match action {
        FavoriteAction::Add { id } => {
            if gallery.add_favorite(&id)? {
                println!("✓ Added #{} to favorites", id);
            } else {
                println!("#{} is already a favorite", id);
            }
        }
        FavoriteAction::Remove { id } => {
            if gallery.remove_favorite(&id)? {
                println!("✓ Removed #{} from favorites", id);
            } else {
                println!("#{} is not a favorite", id);
            }
        }
        FavoriteAction::Toggle { id } => {
            if gallery.toggle_favorite(&id)? {
                println!("✓ Added #{} to favorites", id);
            } else {
                println!("✓ Removed #{} from favorites", id);
            }
        }
        FavoriteAction::List => {
            let favorites = gallery.favorites()?;
            if favorites.is_empty() {
                println!("No favorites yet.");
            } else {
                println!("Favorites:");
                print_wallpaper_rows(favorites);
            }
        }
    }

    Ok(())
}
