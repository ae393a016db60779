//! Shared types for external service configuration.

use serde::{Deserialize, Serialize};

/// Named style presets recognized by the image generation service.
///
/// # Examples
///
/// ```
/// use vignette_interface::StylePreset;
///
/// assert_eq!(StylePreset::ComicBook.to_string(), "comic-book");
/// assert_eq!(StylePreset::ThreeDModel.to_string(), "3d-model");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
#[allow(missing_docs)]
pub enum StylePreset {
    #[serde(rename = "3d-model")]
    #[strum(serialize = "3d-model")]
    ThreeDModel,
    AnalogFilm,
    Anime,
    Cinematic,
    ComicBook,
    DigitalArt,
    Enhance,
    FantasyArt,
    Isometric,
    LineArt,
    LowPoly,
    ModelingCompound,
    NeonPunk,
    Origami,
    Photographic,
    PixelArt,
    TileTexture,
}

/// Configuration for one text-to-image request.
///
/// `api_key` and `engine_id` are hard preconditions; everything else has a
/// service-side default. A `seed` of 0 means random. Width and height
/// default per engine family when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_builder::Builder)]
pub struct RenderConfig {
    /// Service API key
    pub api_key: String,
    /// Engine/model id, e.g. "stable-diffusion-xl-1024-v1-0"
    pub engine_id: String,
    /// Number of images to generate
    #[builder(default = "1")]
    #[serde(default = "default_samples")]
    pub samples: u32,
    /// Image width in pixels
    #[builder(default)]
    #[serde(default)]
    pub width: Option<u32>,
    /// Image height in pixels
    #[builder(default)]
    #[serde(default)]
    pub height: Option<u32>,
    /// Diffusion steps
    #[builder(default = "30")]
    #[serde(default = "default_steps")]
    pub steps: u32,
    /// Classifier-free guidance scale
    #[builder(default = "7.0")]
    #[serde(default = "default_cfg_scale")]
    pub cfg_scale: f32,
    /// Seed for reproducibility; 0 is random
    #[builder(default)]
    #[serde(default)]
    pub seed: u32,
    /// Optional named style preset
    #[builder(default)]
    #[serde(default)]
    pub style_preset: Option<StylePreset>,
    /// Optional negative prompt (applied with weight -1.0)
    #[builder(default)]
    #[serde(default)]
    pub negative_prompt: Option<String>,
    /// Optional sampler name, e.g. "K_DPMPP_2M"
    #[builder(default)]
    #[serde(default)]
    pub sampler: Option<String>,
}

fn default_samples() -> u32 {
    1
}

fn default_steps() -> u32 {
    30
}

fn default_cfg_scale() -> f32 {
    7.0
}

impl RenderConfig {
    /// Start building a render configuration.
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::default()
    }
}

/// Font and bubble styling passed to the compositor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LetteringStyle {
    /// Font family for dialogue text
    #[serde(default)]
    pub font_family: Option<String>,
    /// Base bubble outline style
    #[serde(default)]
    pub outline: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_config_builder_defaults() {
        let config = RenderConfig::builder()
            .api_key("key".to_string())
            .engine_id("stable-diffusion-xl-1024-v1-0".to_string())
            .build()
            .unwrap();
        assert_eq!(config.samples, 1);
        assert_eq!(config.steps, 30);
        assert_eq!(config.seed, 0);
        assert!(config.style_preset.is_none());
    }

    #[test]
    fn style_preset_round_trips_through_serde() {
        let json = serde_json::to_string(&StylePreset::LineArt).unwrap();
        assert_eq!(json, "\"line-art\"");
    }
}
