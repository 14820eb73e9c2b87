use anyhow::{Context, Result};
use clap::Parser;

use super::{Cli, Commands};
use crate::cli_cmds::*;
use crate::config::Config;
use crate::gallery::Gallery;
use crate::seed::Seed;
use crate::wallpaper::FilterSpec;

pub(crate) async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load()?;
    let seed_path = cli.seed.clone().or_else(|| config.seed_path());
    let seed = Seed::load_or_builtin(seed_path.as_deref())?;

    let mut gallery = Gallery::from_seed(seed, config.gallery.clone());
    gallery
        .store
        .set_filters(FilterSpec::default().with_sort(config.display.default_sort));

    if let Some(email) = &cli.user {
        gallery
            .login(email)
            .with_context(|| format!("Could not log in as {}", email))?;
    }

    match cli.command {
        Some(Commands::Shell) => run_shell(&mut gallery, &config).await?,
        Some(command) => dispatch(&mut gallery, &config, command).await?,
        None => cmd_home(&gallery),
    }

    Ok(())
}

/// Run one command against `gallery`. Shared by one-shot mode and the shell.
pub(crate) async fn dispatch(gallery: &mut Gallery, config: &Config, command: Commands) -> Result<()> {
    match command {
        Commands::List { sort, json } => cmd_list(gallery, sort, json)?,
        Commands::Search {
            query,
            categories,
            tags,
            sort,
            json,
        } => {
            let mut spec = gallery.store.filters().clone();
            spec.query = query.unwrap_or_default();
            spec.categories = categories;
            spec.tags = tags;
            if let Some(sort) = sort {
                spec.sort_by = sort;
            }
            cmd_search(gallery, spec, json)?;
        }
        Commands::Show { id, json } => cmd_show(gallery, &id, json)?,
        Commands::Related { id, limit } => cmd_related(gallery, &id, limit),
        Commands::Download { id } => cmd_download(gallery, &id)?,
        Commands::Like { id } => cmd_like(gallery, &id)?,
        Commands::Categories { featured } => cmd_categories(gallery, featured),
        Commands::Tags => cmd_tags(gallery),
        Commands::Home => cmd_home(gallery),
        Commands::Filter { action } => cmd_filter(gallery, action)?,
        Commands::User { action } => cmd_user(gallery, action)?,
        Commands::Favorite { action } => cmd_favorite(gallery, action)?,
        Commands::Collection { action } => cmd_collection(gallery, action)?,
        Commands::Upload {
            path,
            title,
            description,
            categories,
            tags,
        } => {
            let details = crate::upload::UploadDetails {
                title,
                description,
                categories,
                tags,
            };
            cmd_upload(gallery, &config.storage, &path, details).await?;
        }
        Commands::Shell => {
            anyhow::bail!("Already in a shell");
        }
    }

    Ok(())
}
