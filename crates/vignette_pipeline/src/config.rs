//! Pipeline configuration from the environment.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use vignette_interface::{RenderConfig, StylePreset};

/// Default Gemini model for extraction tasks.
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash-lite";
/// Default Stability engine for panel rendering.
const DEFAULT_ENGINE_ID: &str = "stable-diffusion-xl-1024-v1-0";
/// Leading excerpt length used in scene context construction.
const DEFAULT_CONTEXT_EXCERPT_CHARS: usize = 500;

/// Global art direction applied to every panel of a run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleConfig {
    /// Overall art style, e.g. "modern clean webtoon style"
    pub art_style: Option<String>,
    /// Palette guidance, e.g. "bright vivid colors"
    pub color_palette: Option<String>,
}

impl StyleConfig {
    /// The default house style used when nothing is configured.
    pub fn house() -> Self {
        Self {
            art_style: Some("modern clean webtoon style".to_string()),
            color_palette: Some("bright vivid colors".to_string()),
        }
    }
}

/// Everything a pipeline run needs beyond its service clients.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Gemini model name for extraction and prompt enhancement
    pub gemini_model: String,
    /// Global webtoon style settings
    pub style: StyleConfig,
    /// Render configuration; `None` disables image generation entirely
    pub render: Option<RenderConfig>,
    /// How many leading characters of the novel feed each cut's context
    pub context_excerpt_chars: usize,
    /// Directory that receives per-cut artifacts
    pub result_dir: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            style: StyleConfig::house(),
            render: None,
            context_excerpt_chars: DEFAULT_CONTEXT_EXCERPT_CHARS,
            result_dir: PathBuf::from("results"),
        }
    }
}

impl PipelineConfig {
    /// Load configuration from the environment.
    ///
    /// Reads a `.env` file when present, then:
    /// - `GEMINI_MODEL`: extraction model (defaults to a flash-lite model)
    /// - `STABILITY_API_KEY`: enables image generation when set
    /// - `STABILITY_ENGINE_ID`: render engine (SDXL by default)
    /// - `STABILITY_STYLE_PRESET`: one of the named presets
    /// - `VIGNETTE_RESULT_DIR`: artifact directory
    ///
    /// A missing Stability key is not an error: the run proceeds without
    /// images, which is the designed degraded mode.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let render = match env::var("STABILITY_API_KEY") {
            Ok(api_key) if !api_key.trim().is_empty() => {
                let style_preset = env::var("STABILITY_STYLE_PRESET")
                    .ok()
                    .and_then(|raw| match StylePreset::from_str(&raw) {
                        Ok(preset) => Some(preset),
                        Err(_) => {
                            tracing::warn!(preset = %raw, "unknown style preset, ignoring");
                            None
                        }
                    })
                    .or(Some(StylePreset::ComicBook));

                match RenderConfig::builder()
                    .api_key(api_key)
                    .engine_id(
                        env::var("STABILITY_ENGINE_ID")
                            .unwrap_or_else(|_| DEFAULT_ENGINE_ID.to_string()),
                    )
                    .style_preset(style_preset)
                    .build()
                {
                    Ok(config) => Some(config),
                    Err(e) => {
                        tracing::warn!(error = %e, "invalid render configuration, disabling images");
                        None
                    }
                }
            }
            _ => {
                tracing::warn!("STABILITY_API_KEY not set, images will not be generated");
                None
            }
        };

        Self {
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            style: StyleConfig::house(),
            render,
            context_excerpt_chars: DEFAULT_CONTEXT_EXCERPT_CHARS,
            result_dir: env::var("VIGNETTE_RESULT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("results")),
        }
    }
}
