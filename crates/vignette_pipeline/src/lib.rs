//! Sequential webnovel-to-webtoon pipeline driver.
//!
//! Ties the pieces together: scene segmentation, per-cut element
//! extraction with character continuity, image prompt generation, image
//! generation, and dialogue compositing, strictly in cut order, with one
//! result entry per cut no matter which stages degrade.
//!
//! # Example
//!
//! ```rust,ignore
//! use vignette_pipeline::{PipelineConfig, WebtoonPipeline};
//! use vignette_storyboard::Oracle;
//! use vignette_models::{GeminiClient, OverlayCompositor, StabilityClient};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let oracle = match GeminiClient::new() {
//!     Ok(client) => Oracle::new(Arc::new(client)),
//!     Err(_) => Oracle::disabled(),
//! };
//!
//! let mut pipeline = WebtoonPipeline::new(oracle, PipelineConfig::from_env())
//!     .with_synthesizer(Arc::new(StabilityClient::new()))
//!     .with_compositor(Arc::new(OverlayCompositor::new()));
//!
//! let results = pipeline.run("... novel text ...").await;
//! println!("{} cuts produced", results.len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod artifacts;
mod config;
mod pipeline;
mod prompt;

pub use artifacts::ArtifactWriter;
pub use config::{PipelineConfig, StyleConfig};
pub use pipeline::{CutResult, WebtoonPipeline, scene_context};
pub use prompt::PromptComposer;
