//! Dialogue compositing onto generated panels.

use async_trait::async_trait;
use vignette_core::{BubbleGuidance, Dialogue};
use vignette_error::VignetteResult;
use vignette_interface::{Compositor, LetteringStyle};

/// Compositor that appends a rendered text-overlay block to the image
/// bytes.
///
/// A stand-in for a real raster compositor: downstream tooling renders the
/// described bubbles onto the panel. The overlay pairs each dialogue with
/// its guidance entry by `dialogue_id`; guidance that matches no dialogue
/// is simply unusable and skipped.
#[derive(Debug, Clone, Default)]
pub struct OverlayCompositor;

impl OverlayCompositor {
    /// Create a new overlay compositor.
    pub fn new() -> Self {
        Self
    }

    fn render_overlay(
        dialogues: &[Dialogue],
        guidance: &[BubbleGuidance],
        style: Option<&LetteringStyle>,
    ) -> String {
        let mut lines = vec!["\n--- Applied Dialogues ---".to_string()];

        if let Some(style) = style {
            if let Some(font) = &style.font_family {
                lines.push(format!("  Font: {}", font));
            }
        }

        for dialogue in dialogues {
            let advice = guidance
                .iter()
                .find(|g| g.dialogue_id == dialogue.id.as_str());
            let speaker = dialogue
                .speaker_id
                .as_ref()
                .map(|id| id.to_string())
                .unwrap_or_else(|| dialogue.speaker_name_guess.clone());
            lines.push(format!(
                "  Dialogue ID: {}, Speaker: {}, Text: \"{}\" (Nuance: {}), Bubble: {} ({})",
                dialogue.id,
                speaker,
                dialogue.text,
                dialogue.nuance.as_deref().unwrap_or("neutral"),
                advice
                    .and_then(|g| g.suggested_area.as_deref())
                    .unwrap_or("unplaced"),
                advice
                    .and_then(|g| g.bubble_style_hint.as_deref())
                    .unwrap_or("plain"),
            ));
        }

        lines.join("\n")
    }
}

#[async_trait]
impl Compositor for OverlayCompositor {
    #[tracing::instrument(skip_all, fields(dialogues = dialogues.len(), base_len = base.len()))]
    async fn compose(
        &self,
        base: &[u8],
        dialogues: &[Dialogue],
        guidance: &[BubbleGuidance],
        style: Option<&LetteringStyle>,
    ) -> VignetteResult<Vec<u8>> {
        if dialogues.is_empty() {
            tracing::debug!("no dialogues to compose, returning base image");
            return Ok(base.to_vec());
        }

        let overlay = Self::render_overlay(dialogues, guidance, style);
        let mut composed = base.to_vec();
        composed.extend_from_slice(overlay.as_bytes());
        Ok(composed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vignette_core::{CutId, DialogueId};

    fn dialogue(text: &str) -> Dialogue {
        Dialogue {
            id: DialogueId::new(&CutId::from_index(1), 1),
            speaker_name_guess: "Yeonghee".to_string(),
            speaker_id: None,
            text: text.to_string(),
            nuance: Some("desperate".to_string()),
        }
    }

    fn guidance(dialogue_id: &str) -> BubbleGuidance {
        BubbleGuidance {
            dialogue_id: dialogue_id.to_string(),
            speaker_ref_id: None,
            suggested_area: Some("upper right".to_string()),
            bubble_style_hint: Some("wavering outline".to_string()),
            tail_direction: None,
        }
    }

    #[tokio::test]
    async fn empty_dialogues_return_base_unchanged() {
        let compositor = OverlayCompositor::new();
        let base = vec![1u8, 2, 3];
        let out = compositor.compose(&base, &[], &[], None).await.unwrap();
        assert_eq!(out, base);
    }

    #[tokio::test]
    async fn matched_guidance_appears_in_overlay() {
        let compositor = OverlayCompositor::new();
        let out = compositor
            .compose(b"IMG", &[dialogue("Please find my cat.")], &[guidance("dlg_001_001")], None)
            .await
            .unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("upper right"));
        assert!(text.contains("Please find my cat."));
    }

    #[tokio::test]
    async fn orphan_guidance_is_ignored() {
        let compositor = OverlayCompositor::new();
        let out = compositor
            .compose(
                b"IMG",
                &[dialogue("Please find my cat.")],
                &[guidance("dlg_999_001")],
                None,
            )
            .await
            .unwrap();
        let text = String::from_utf8_lossy(&out);
        // The orphan entry places nothing; the dialogue ships unplaced.
        assert!(text.contains("unplaced"));
        assert!(!text.contains("upper right"));
    }
}
