use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

mod client;
mod components;
mod config;
mod demo;
mod logging;
mod screens;
mod selection;
mod selector;
mod statusbar;
mod ui;

use client::{ArtworkSource, HttpArtworkSource};
use config::AppConfig;
use demo::DemoArtworkSource;
use selector::CollectionBrowser;
use ui::App;

/// Browse the Art Institute of Chicago collection in the terminal and
/// build a selection that spans pages.
#[derive(Parser)]
#[command(name = "artic-browser", version)]
struct Args {
    /// Path to a JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long)]
    api_url: Option<String>,

    /// Rows per page (12, 24 or 48)
    #[arg(long)]
    page_size: Option<u32>,

    /// Use a built-in demo collection instead of the remote API
    #[arg(long)]
    demo: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    logging::init(level);

    let mut config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(url) = args.api_url {
        config.api_base_url = url;
    }
    if let Some(size) = args.page_size {
        config.page_size = size.max(1);
    }

    let source: Arc<dyn ArtworkSource> = if args.demo {
        log::info!("Using the demo collection ({} records)", config.demo_record_count);
        Arc::new(DemoArtworkSource::new(config.demo_record_count))
    } else {
        log::info!("Using remote collection at {}", config.api_base_url);
        Arc::new(HttpArtworkSource::new(
            &config.api_base_url,
            Duration::from_secs(config.request_timeout_secs),
        )?)
    };

    let browser = CollectionBrowser::new(source, config.page_size);
    let mut app = App::new(browser);
    app.run().await
}
