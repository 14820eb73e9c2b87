use anyhow::Result;
use tracing::warn;

use crate::cli::FilterAction;
use crate::gallery::Gallery;
use crate::wallpaper::{FilterSpec, SortMode, Wallpaper};

/// One table row per wallpaper
pub(crate) fn print_wallpaper_rows<'a>(wallpapers: impl IntoIterator<Item = &'a Wallpaper>) {
    for wp in wallpapers {
        println!(
            "  {:>4}  {:<24} {:>6} downloads {:>5} likes  {}",
            wp.id, wp.title, wp.downloads, wp.likes, wp.upload_date
        );
    }
}

fn print_list(wallpapers: &[Wallpaper], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(wallpapers)?);
    } else if wallpapers.is_empty() {
        println!("No wallpapers match.");
    } else {
        print_wallpaper_rows(wallpapers);
    }
    Ok(())
}

pub fn cmd_list(gallery: &Gallery, sort: Option<SortMode>, json: bool) -> Result<()> {
    let sort = sort.unwrap_or(gallery.store.filters().sort_by);
    let all = gallery.store.get_filtered(&FilterSpec::default().with_sort(sort));
    if !json {
        println!("{} wallpapers ({}):", all.len(), sort.display_name());
    }
    print_list(&all, json)
}

pub fn cmd_search(gallery: &mut Gallery, spec: FilterSpec, json: bool) -> Result<()> {
    let summary = describe_filters(&spec);
    let results = gallery.search(spec).to_vec();
    if !json {
        println!("{} results for {}:", results.len(), summary);
    }
    print_list(&results, json)
}

/// Edit the filters kept on the store between shell lines.
pub fn cmd_filter(gallery: &mut Gallery, action: FilterAction) -> Result<()> {
    let mut spec = gallery.store.filters().clone();
    match action {
        FilterAction::Show => {}
        FilterAction::Query { text } => spec = spec.with_query(text.unwrap_or_default()),
        FilterAction::Category { slug } => {
            if gallery.catalog.by_slug(&slug).is_none() && !spec.categories.contains(&slug) {
                warn!(%slug, "no such category in the catalog");
            }
            spec.toggle_category(&slug);
        }
        FilterAction::Tag { tag } => spec.toggle_tag(&tag),
        FilterAction::Sort { mode } => {
            let current = spec.sort_by;
            spec.sort_by = mode.unwrap_or_else(|| current.next());
        }
        FilterAction::Clear => spec.clear(),
    }

    let results = gallery.search(spec).to_vec();
    let filters = gallery.store.filters();
    println!(
        "{} results for {} ({} active filters):",
        results.len(),
        describe_filters(filters),
        filters.active_filter_count()
    );
    print_list(&results, false)
}

fn describe_filters(spec: &FilterSpec) -> String {
    let mut parts = Vec::new();
    if !spec.query.is_empty() {
        parts.push(format!("\"{}\"", spec.query));
    }
    if !spec.categories.is_empty() {
        parts.push(format!("categories [{}]", spec.categories.join(", ")));
    }
    if !spec.tags.is_empty() {
        parts.push(format!("tags [{}]", spec.tags.join(", ")));
    }
    if parts.is_empty() {
        parts.push("everything".to_string());
    }
    format!("{} by {}", parts.join(", "), spec.sort_by.display_name())
}

pub fn cmd_show(gallery: &Gallery, id: &str, json: bool) -> Result<()> {
    let wp = match gallery.store.get_by_id(id) {
        Some(wp) => wp,
        None => {
            println!("Wallpaper not found: {}", id);
            return Ok(());
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(wp)?);
        return Ok(());
    }

    println!("{} (#{})", wp.title, wp.id);
    if !wp.description.is_empty() {
        println!("{}", wp.description);
    }
    println!("Resolution: {}  Size: {}", wp.resolution, wp.file_size);
    println!("Categories: {}", wp.categories.join(", "));
    println!("Tags:       {}", wp.tags.iter().map(|t| format!("#{}", t)).collect::<Vec<_>>().join(" "));
    println!("Downloads:  {}  Likes: {}", wp.downloads, wp.likes);
    println!("Uploaded:   {} by {}", wp.upload_date, wp.uploader);
    println!("Image:      {}", wp.image_url);
    if gallery.session.is_authenticated() {
        let marker = if gallery.is_favorite(&wp.id) { "yes" } else { "no" };
        println!("Favorite:   {}", marker);
    }
    Ok(())
}

pub fn cmd_related(gallery: &Gallery, id: &str, limit: Option<usize>) {
    if gallery.store.get_by_id(id).is_none() {
        println!("Wallpaper not found: {}", id);
        return;
    }
    let limit = limit.unwrap_or(gallery.settings().related_limit);
    let related = gallery.store.get_related(id, limit);
    if related.is_empty() {
        println!("No related wallpapers.");
    } else {
        println!("Related wallpapers:");
        print_wallpaper_rows(&related);
    }
}

pub fn cmd_categories(gallery: &Gallery, featured_only: bool) {
    let categories: Vec<_> = if featured_only {
        gallery.catalog.featured()
    } else {
        gallery.catalog.categories().iter().collect()
    };

    if categories.is_empty() {
        println!("No categories.");
        return;
    }
    println!("Categories:");
    for c in categories {
        let star = if c.featured { "*" } else { " " };
        println!(
            "  {} {:<14} {:<14} {} wallpapers ({} here)",
            star,
            c.slug,
            c.name,
            c.count,
            gallery.store.category_count(&c.slug)
        );
    }
}

pub fn cmd_tags(gallery: &Gallery) {
    let tags = gallery.store.all_tags();
    if tags.is_empty() {
        println!("No tags defined.");
        return;
    }
    println!("Tags:");
    for tag in tags {
        println!("  {} ({})", tag, gallery.store.tag_count(&tag));
    }
}

pub fn cmd_home(gallery: &Gallery) {
    let home = gallery.home();

    println!("Popular Wallpapers");
    print_wallpaper_rows(&home.popular);
    println!();
    println!("Recently Added");
    print_wallpaper_rows(&home.recent);
    println!();
    println!("Featured Categories");
    for c in &home.featured_categories {
        println!("  {} ({})", c.name, c.count);
    }
    println!();
    println!("Popular Tags");
    let tags: Vec<String> = home.popular_tags.iter().map(|t| format!("#{}", t)).collect();
    println!("  {}", tags.join(" "));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_filters() {
        assert_eq!(describe_filters(&FilterSpec::default()), "everything by Newest");
        let spec = FilterSpec {
            query: "sky".into(),
            categories: vec!["urban".into()],
            tags: vec!["night".into(), "city".into()],
            sort_by: SortMode::Downloads,
        };
        assert_eq!(
            describe_filters(&spec),
            "\"sky\", categories [urban], tags [night, city] by Downloads"
        );
    }
}
