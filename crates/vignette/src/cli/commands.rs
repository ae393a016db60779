//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Vignette - convert a webnovel into illustrated webtoon cuts
#[derive(Parser, Debug)]
#[command(name = "vignette")]
#[command(about = "Convert a webnovel into illustrated webtoon cuts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full pipeline over a novel text file
    Run {
        /// Path to the novel text file
        novel: PathBuf,

        /// Directory for per-cut artifacts (overrides VIGNETTE_RESULT_DIR)
        #[arg(long)]
        results: Option<PathBuf>,

        /// Skip image generation even when credentials are configured
        #[arg(long)]
        no_images: bool,
    },
}
