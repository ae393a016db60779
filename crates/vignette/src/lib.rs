//! Vignette - webnovel-to-webtoon conversion pipeline.
//!
//! Vignette converts prose narrative into a sequence of illustrated comic
//! panels ("cuts"), each carrying extracted characters, composition,
//! background, dialogue, and speech-bubble placement metadata, followed by
//! a generated image and text overlay.
//!
//! The stateful heart of the pipeline is the character continuity
//! resolver: a running identity database maintained across the ordered cut
//! sequence, merging newly observed character mentions into existing
//! identities (or minting new ones) with oracle-assisted matching, and
//! feeding resolved identities into speaker attribution and bubble
//! guidance.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use vignette::{GeminiClient, Oracle, PipelineConfig, WebtoonPipeline};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let oracle = Oracle::new(Arc::new(GeminiClient::new()?));
//!     let mut pipeline = WebtoonPipeline::new(oracle, PipelineConfig::from_env());
//!
//!     let results = pipeline.run("... novel text ...").await;
//!     println!("{} cuts produced", results.len());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Vignette is organized as a workspace with focused crates:
//!
//! - `vignette_core` - Domain model and oracle conversation types
//! - `vignette_interface` - Trait seams for oracle, renderer, compositor
//! - `vignette_error` - Error types
//! - `vignette_models` - Gemini, Stability AI, and compositor clients
//! - `vignette_storyboard` - Character continuity and element extraction
//! - `vignette_pipeline` - The sequential pipeline driver
//!
//! This crate (`vignette`) re-exports everything for convenience.

// Re-export the full public surface
pub use vignette_core::*;
pub use vignette_error::*;
pub use vignette_interface::*;
pub use vignette_models::*;
pub use vignette_pipeline::*;
pub use vignette_storyboard::*;
