//! blogmonk - A terminal client for the CA Monk blog
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

/// blogmonk - A terminal client for the CA Monk blog
#[derive(Parser, Debug)]
#[command(name = "blogmonk")]
#[command(about = "Browse, read, and publish CA Monk blog posts from the terminal", long_about = None)]
struct Args {
    /// Backend base URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Path to an alternate config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    blogmonk_core::logging::init()?;

    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => blogmonk_app::config::load_settings_from(path),
        None => blogmonk_app::config::load_settings(),
    };

    if let Some(url) = args.url {
        settings.backend.base_url = url;
    }

    info!("starting blogmonk against {}", settings.backend.base_url);

    blogmonk_tui::run(settings).await?;
    Ok(())
}
