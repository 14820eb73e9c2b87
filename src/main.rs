mod catalog;
mod cli;
mod cli_cmds;
mod config;
mod error;
mod gallery;
mod seed;
mod session;
mod upload;
mod users;
mod utils;
mod wallpaper;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Log filter, e.g. `WALLYPAPER_LOG=debug`
const LOG_ENV: &str = "WALLYPAPER_LOG";

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    cli::run().await
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
