mod app;
mod cli;
mod commands;
mod config;
mod deck;
mod input;
mod landing;
mod media;
mod nav;
mod pagination;
mod render;
mod reveal;
mod slides;
mod theme;

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    // RUST_LOG wins over the -v / -q derived level.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("caravana={}", cli.log_level())));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(!cli.no_color)
        .with_target(false)
        .init();

    cli.run()
}
