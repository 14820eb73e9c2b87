use crate::wallpaper::SortMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wallypaper")]
#[command(version)]
#[command(about = "Wallpaper gallery: browse, search, download and collect wallpapers")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Seed JSON to load instead of the built-in gallery
    #[arg(long, global = true)]
    pub(crate) seed: Option<PathBuf>,

    /// Log in with this email before running the command
    #[arg(short, long, global = true)]
    pub(crate) user: Option<String>,
}

/// One line of input in `wallypaper shell`
#[derive(Parser)]
#[command(name = "wallypaper", no_binary_name = true)]
#[command(disable_version_flag = true)]
pub(crate) struct ShellLine {
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List every wallpaper
    List {
        #[arg(short, long, value_enum)]
        sort: Option<SortMode>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Search by text, categories and tags
    Search {
        /// Matched against title, description and tags
        query: Option<String>,
        /// Category slug (repeatable, any may match)
        #[arg(short, long = "category")]
        categories: Vec<String>,
        /// Tag (repeatable, any may match)
        #[arg(short, long = "tag")]
        tags: Vec<String>,
        #[arg(short, long, value_enum)]
        sort: Option<SortMode>,
        #[arg(long)]
        json: bool,
    },
    /// Show one wallpaper
    Show {
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// Wallpapers sharing a category or tag
    Related {
        id: String,
        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Download a wallpaper (counts the download)
    Download { id: String },
    /// Like a wallpaper
    Like { id: String },
    /// List categories
    Categories {
        /// Only featured categories
        #[arg(short, long)]
        featured: bool,
    },
    /// List tags in use
    Tags,
    /// Home page: popular, recent, featured categories and tags
    Home,
    /// Account commands
    User {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Manage favorites of the logged-in user
    Favorite {
        #[command(subcommand)]
        action: FavoriteAction,
    },
    /// Manage collections of the logged-in user
    Collection {
        #[command(subcommand)]
        action: CollectionAction,
    },
    /// Upload an image and add it to the gallery (admin only)
    Upload {
        path: PathBuf,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(short, long = "category")]
        categories: Vec<String>,
        #[arg(short, long = "tag")]
        tags: Vec<String>,
    },
    /// Adjust the persistent search filters and show the matches
    Filter {
        #[command(subcommand)]
        action: FilterAction,
    },
    /// Read commands from stdin, one per line, against a single session
    Shell,
}

#[derive(Subcommand)]
pub(crate) enum UserAction {
    /// Create an account and log in
    Register { name: String, email: String },
    /// Log in by email
    Login { email: String },
    /// Log out
    Logout,
    /// Show the logged-in user
    Whoami,
}

#[derive(Subcommand)]
pub(crate) enum FavoriteAction {
    /// Add a wallpaper to favorites
    Add { id: String },
    /// Remove a wallpaper from favorites
    Remove { id: String },
    /// Add if missing, remove otherwise
    Toggle { id: String },
    /// List favorites
    List,
}

#[derive(Subcommand)]
pub(crate) enum CollectionAction {
    /// List collections
    List,
    /// Create a collection
    Create {
        name: String,
        /// Hide the collection from other users
        #[arg(long)]
        private: bool,
    },
    /// Add a wallpaper to a collection
    Add {
        collection_id: String,
        wallpaper_id: String,
    },
}

#[derive(Subcommand)]
pub(crate) enum FilterAction {
    /// Show the active filters and their matches
    Show,
    /// Set the free-text query, or clear it when omitted
    Query { text: Option<String> },
    /// Toggle a category slug
    Category { slug: String },
    /// Toggle a tag
    Tag { tag: String },
    /// Set the sort mode, or cycle to the next one when omitted
    Sort {
        #[arg(value_enum)]
        mode: Option<SortMode>,
    },
    /// Drop category and tag filters and reset the sort
    Clear,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
        ShellLine::command().debug_assert();
    }

    #[test]
    fn test_search_args() {
        let cli = Cli::try_parse_from([
            "wallypaper", "search", "sun", "-c", "nature", "-c", "space", "-t", "night", "--sort",
            "popular",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Search {
                query,
                categories,
                tags,
                sort,
                json,
            }) => {
                assert_eq!(query.as_deref(), Some("sun"));
                assert_eq!(categories, vec!["nature", "space"]);
                assert_eq!(tags, vec!["night"]);
                assert_eq!(sort, Some(SortMode::Popular));
                assert!(!json);
            }
            _ => panic!("expected search"),
        }
    }

    #[test]
    fn test_shell_line_has_no_binary_name() {
        let line = ShellLine::try_parse_from(["like", "3"]).unwrap();
        assert!(matches!(line.command, Commands::Like { id } if id == "3"));
    }

    #[test]
    fn test_filter_sort_mode_is_optional() {
        let line = ShellLine::try_parse_from(["filter", "sort"]).unwrap();
        assert!(matches!(
            line.command,
            Commands::Filter {
                action: FilterAction::Sort { mode: None }
            }
        ));
        let line = ShellLine::try_parse_from(["filter", "sort", "downloads"]).unwrap();
        assert!(matches!(
            line.command,
            Commands::Filter {
                action: FilterAction::Sort {
                    mode: Some(SortMode::Downloads)
                }
            }
        ));
    }

    #[test]
    fn test_global_user_flag() {
        let cli = Cli::try_parse_from(["wallypaper", "favorite", "list", "-u", "alex@example.com"])
            .unwrap();
        assert_eq!(cli.user.as_deref(), Some("alex@example.com"));
    }
}
