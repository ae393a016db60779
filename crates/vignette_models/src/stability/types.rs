//! Wire types for the Stability AI text-to-image endpoint.

use serde::{Deserialize, Serialize};
use vignette_interface::StylePreset;

/// One weighted text prompt.
///
/// Positive prompts carry weight 1.0, negative prompts -1.0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextPrompt {
    /// Prompt text
    pub text: String,
    /// Prompt weight
    pub weight: f32,
}

/// Request payload for `/v1/generation/{engine_id}/text-to-image`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextToImageRequest {
    /// Weighted prompts, positive and negative
    pub text_prompts: Vec<TextPrompt>,
    /// Classifier-free guidance scale
    pub cfg_scale: f32,
    /// Image height in pixels
    pub height: u32,
    /// Image width in pixels
    pub width: u32,
    /// Number of images to generate
    pub samples: u32,
    /// Diffusion steps
    pub steps: u32,
    /// Seed; omitted when 0 so the service picks one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
    /// Named style preset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_preset: Option<StylePreset>,
    /// Sampler name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sampler: Option<String>,
}

/// Response body: a list of generated artifacts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtifactsResponse {
    /// Generated artifacts in request order
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
}

/// One generated artifact.
#[derive(Debug, Clone, Deserialize)]
pub struct Artifact {
    /// Base64-encoded image data, present on success
    #[serde(default)]
    pub base64: Option<String>,
    /// Generation outcome, e.g. "SUCCESS" or "CONTENT_FILTERED"
    #[serde(default, rename = "finishReason")]
    pub finish_reason: Option<String>,
    /// Seed the service actually used
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Artifact {
    /// Whether this artifact completed successfully.
    pub fn is_success(&self) -> bool {
        self.finish_reason.as_deref() == Some("SUCCESS")
    }

    /// Whether this artifact was removed by the content policy.
    pub fn is_filtered(&self) -> bool {
        self.finish_reason.as_deref() == Some("CONTENT_FILTERED")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_seed_is_omitted_from_payload() {
        let request = TextToImageRequest {
            text_prompts: vec![TextPrompt {
                text: "a rainy office".to_string(),
                weight: 1.0,
            }],
            cfg_scale: 7.0,
            height: 1024,
            width: 1024,
            samples: 1,
            steps: 30,
            seed: None,
            style_preset: Some(StylePreset::ComicBook),
            sampler: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("seed"));
        assert!(json.contains("\"style_preset\":\"comic-book\""));
    }

    #[test]
    fn artifact_outcomes() {
        let success: Artifact =
            serde_json::from_str(r#"{"base64": "aGk=", "finishReason": "SUCCESS"}"#).unwrap();
        let filtered: Artifact =
            serde_json::from_str(r#"{"finishReason": "CONTENT_FILTERED"}"#).unwrap();
        assert!(success.is_success());
        assert!(filtered.is_filtered());
        assert!(!filtered.is_success());
    }
}
