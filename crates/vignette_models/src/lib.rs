//! External service clients for the Vignette webtoon pipeline.
//!
//! This crate provides the concrete implementations of the seams defined
//! in `vignette_interface`:
//!
//! - [`GeminiClient`]: inference oracle backed by the Google Gemini API
//! - [`StabilityClient`]: image generation backed by Stability AI
//! - [`OverlayCompositor`]: dialogue compositing onto panel images

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod compositor;
mod gemini;
mod stability;

pub use compositor::OverlayCompositor;
pub use gemini::GeminiClient;
pub use stability::StabilityClient;
