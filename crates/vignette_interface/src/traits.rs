//! Trait definitions for external collaborators.

use crate::{LetteringStyle, RenderConfig};
use async_trait::async_trait;
use vignette_core::{BubbleGuidance, Dialogue, GenerateRequest, GenerateResponse};
use vignette_error::VignetteResult;

/// Core trait that all inference oracle backends must implement.
///
/// This provides the minimal interface for text generation. The
/// storyboard layer wraps it in an [`Oracle`] that owns prompt assembly,
/// JSON extraction, and degrade-to-fallback behavior.
///
/// [`Oracle`]: https://docs.rs/vignette_storyboard
#[async_trait]
pub trait InferenceDriver: Send + Sync {
    /// Generate model output given a multimodal request.
    async fn generate(&self, req: &GenerateRequest) -> VignetteResult<GenerateResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Default model identifier (e.g., "gemini-2.0-flash-lite").
    fn model_name(&self) -> &str;
}

/// Trait for text-to-image generation services.
#[async_trait]
pub trait ImageSynthesizer: Send + Sync {
    /// Generate one or more images from a text prompt.
    ///
    /// # Errors
    ///
    /// Returns an error when required configuration is missing, the
    /// request fails at the transport or HTTP level, or every returned
    /// artifact was rejected. Callers in the pipeline convert any error
    /// into "no image produced for this cut" and keep going.
    async fn synthesize(
        &self,
        prompt: &str,
        config: &RenderConfig,
    ) -> VignetteResult<Vec<Vec<u8>>>;

    /// Service name (e.g., "stability").
    fn service_name(&self) -> &'static str;
}

/// Trait for compositing dialogue onto a generated panel image.
#[async_trait]
pub trait Compositor: Send + Sync {
    /// Render dialogues and speech bubbles onto the base image.
    ///
    /// Must return the base image unchanged when `dialogues` is empty.
    /// Guidance entries whose `dialogue_id` matches no dialogue are
    /// skipped, never an error.
    async fn compose(
        &self,
        base: &[u8],
        dialogues: &[Dialogue],
        guidance: &[BubbleGuidance],
        style: Option<&LetteringStyle>,
    ) -> VignetteResult<Vec<u8>>;
}
