//! Trait definitions for the Vignette webtoon pipeline.
//!
//! This crate defines the seams between the pipeline core and its external
//! collaborators: the inference oracle, the image generation service, and
//! the compositor.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{Compositor, ImageSynthesizer, InferenceDriver};
pub use types::{LetteringStyle, RenderConfig, StylePreset};
