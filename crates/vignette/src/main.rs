//! Vignette CLI binary.
//!
//! This binary provides command-line access to the webnovel-to-webtoon
//! pipeline: segment a novel, extract per-cut elements with character
//! continuity, generate panel images, and write artifacts.

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, run_novel};

    let cli = Cli::parse();

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Run {
            novel,
            results,
            no_images,
        } => {
            run_novel(&novel, results.as_deref(), no_images).await?;
        }
    }

    Ok(())
}
