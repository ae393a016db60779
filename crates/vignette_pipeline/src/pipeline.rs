//! The sequential webnovel-to-webtoon pipeline.

use crate::{PipelineConfig, PromptComposer};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use vignette_core::{CutElements, CutId};
use vignette_interface::{Compositor, ImageSynthesizer};
use vignette_storyboard::{CharacterStore, ElementExtractor, Oracle, SceneSegmenter};

/// Everything produced for one cut.
///
/// Degraded stages leave their fields empty or `None`; a result entry
/// exists for every segmented cut regardless of what failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutResult {
    /// The cut this result belongs to
    pub cut_id: CutId,
    /// Extracted elements (characters, composition, dialogues, bubbles)
    pub elements: CutElements,
    /// The text-to-image prompt used (or that would have been used)
    pub image_prompt: String,
    /// Raw generated panel image, when generation succeeded
    #[serde(skip)]
    pub image: Option<Vec<u8>>,
    /// Panel with dialogues composited, when compositing succeeded
    #[serde(skip)]
    pub composed: Option<Vec<u8>>,
}

/// Sequences segmentation, per-cut extraction, prompt generation, image
/// generation, and compositing across one novel.
///
/// Cuts are processed strictly in segmentation order: each cut's scene
/// context embeds the previous cut's text, and the character store carries
/// identity state forward. The store lives exactly as long as one `run`
/// call; parallel runs must each build their own pipeline.
pub struct WebtoonPipeline {
    segmenter: SceneSegmenter,
    extractor: ElementExtractor,
    prompts: PromptComposer,
    synthesizer: Option<Arc<dyn ImageSynthesizer>>,
    compositor: Option<Arc<dyn Compositor>>,
    config: PipelineConfig,
}

impl WebtoonPipeline {
    /// Create a pipeline with no image generation or compositing.
    pub fn new(oracle: Oracle, config: PipelineConfig) -> Self {
        Self {
            segmenter: SceneSegmenter::new(oracle.clone()),
            extractor: ElementExtractor::new(oracle.clone()),
            prompts: PromptComposer::new(oracle),
            synthesizer: None,
            compositor: None,
            config,
        }
    }

    /// Attach an image generation service.
    pub fn with_synthesizer(mut self, synthesizer: Arc<dyn ImageSynthesizer>) -> Self {
        self.synthesizer = Some(synthesizer);
        self
    }

    /// Attach a compositing service.
    pub fn with_compositor(mut self, compositor: Arc<dyn Compositor>) -> Self {
        self.compositor = Some(compositor);
        self
    }

    /// Convert a novel into one [`CutResult`] per segmented cut.
    ///
    /// The run never aborts on a single cut: image and compose failures
    /// surface as `None` fields, extraction failures as empty fields, and
    /// processing continues with the next cut.
    #[tracing::instrument(skip_all, fields(novel_length = novel_text.len()))]
    pub async fn run(&mut self, novel_text: &str) -> Vec<CutResult> {
        let cuts = self.segmenter.segment(novel_text).await;
        let mut store = CharacterStore::new();
        let mut results = Vec::with_capacity(cuts.len());

        let leading_excerpt: String = novel_text
            .chars()
            .take(self.config.context_excerpt_chars)
            .collect();
        let mut previous_cut_text = String::new();

        for cut in &cuts {
            tracing::info!(cut = %cut.id, "processing cut");
            let context = scene_context(&previous_cut_text, &leading_excerpt);

            let elements = self.extractor.process_cut(cut, &context, &mut store).await;
            let image_prompt = self.prompts.generate(&elements, &self.config.style).await;

            let image = self.generate_image(&image_prompt, &cut.id).await;
            let composed = self.compose(&image, &elements).await;

            previous_cut_text = cut.text.clone();
            results.push(CutResult {
                cut_id: cut.id.clone(),
                elements,
                image_prompt,
                image,
                composed,
            });
            tracing::info!(cut = %cut.id, known_characters = store.len(), "cut completed");
        }

        results
    }

    /// Run image generation for one cut, degrading any failure to `None`.
    async fn generate_image(&self, prompt: &str, cut_id: &CutId) -> Option<Vec<u8>> {
        let synthesizer = self.synthesizer.as_ref()?;
        let render = match &self.config.render {
            Some(render) => render,
            None => {
                tracing::debug!(cut = %cut_id, "no render configuration, skipping image");
                return None;
            }
        };

        match synthesizer.synthesize(prompt, render).await {
            Ok(mut images) if !images.is_empty() => Some(images.swap_remove(0)),
            Ok(_) => {
                tracing::warn!(cut = %cut_id, "image service returned no images");
                None
            }
            Err(e) => {
                tracing::warn!(cut = %cut_id, error = %e, "image generation failed, continuing without an image");
                None
            }
        }
    }

    /// Composite dialogues onto the generated image, degrading to `None`.
    async fn compose(&self, image: &Option<Vec<u8>>, elements: &CutElements) -> Option<Vec<u8>> {
        let compositor = self.compositor.as_ref()?;
        let base = image.as_ref()?;

        match compositor
            .compose(base, &elements.dialogues, &elements.bubbles, None)
            .await
        {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                tracing::warn!(cut = %elements.cut_id, error = %e, "compositing failed, keeping raw image");
                None
            }
        }
    }
}

/// Build the scene context string for one cut.
///
/// The previous cut's text is included verbatim so continuity resolution
/// can follow references across the cut boundary; the leading excerpt
/// anchors the overall setting.
pub fn scene_context(previous_cut_text: &str, leading_excerpt: &str) -> String {
    format!(
        "Previous cut: {previous_cut_text}\n\nOverall context of the work: {leading_excerpt}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_embeds_previous_cut_verbatim() {
        let context = scene_context("She wept quietly.", "Once upon a time");
        assert!(context.contains("She wept quietly."));
        assert!(context.contains("Once upon a time"));
    }
}
