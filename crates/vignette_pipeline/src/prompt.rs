//! Image prompt generation.

use crate::StyleConfig;
use vignette_core::CutElements;
use vignette_storyboard::Oracle;

/// Builds the text-to-image prompt for one cut.
///
/// Assembly is rule-based from the cut's extracted elements and the global
/// style settings; an optional oracle pass then rewrites the result into
/// something better suited to a diffusion model. When that pass fails the
/// rule-based prompt ships as-is.
#[derive(Debug, Clone)]
pub struct PromptComposer {
    oracle: Oracle,
}

impl PromptComposer {
    /// Create a composer backed by the given oracle.
    pub fn new(oracle: Oracle) -> Self {
        Self { oracle }
    }

    /// Assemble and enhance the prompt for a cut.
    #[tracing::instrument(skip_all, fields(cut = %elements.cut_id))]
    pub async fn generate(&self, elements: &CutElements, style: &StyleConfig) -> String {
        let assembled = Self::assemble(elements, style);

        let instruction = format!(
            r#"Rewrite the draft prompt below into a prompt well suited to a text-to-image model.

[Draft prompt]
{assembled}

[Response format] Output ONLY the prompt text.
"#
        );

        match self.oracle.invoke_text(&instruction, "prompt enhancement").await {
            Some(enhanced) if !enhanced.is_empty() => enhanced,
            _ => assembled,
        }
    }

    /// Rule-based prompt assembly from extracted elements.
    pub fn assemble(elements: &CutElements, style: &StyleConfig) -> String {
        let mut parts = Vec::new();

        let character_descriptions: Vec<String> = elements
            .characters
            .iter()
            .map(|c| {
                format!(
                    "{} ({}, wearing {}) is {} with an expression of {}.",
                    c.name,
                    c.appearance.as_deref().unwrap_or("unremarkable"),
                    c.outfit.as_deref().unwrap_or("plain clothes"),
                    c.action.as_deref().unwrap_or("present"),
                    c.expression.as_deref().unwrap_or("neutral"),
                )
            })
            .collect();
        if !character_descriptions.is_empty() {
            parts.push(character_descriptions.join(" "));
        }

        let composition = &elements.composition;
        let mut composition_desc = format!(
            "Scene composition: {}, {}",
            composition.shot_type.as_deref().unwrap_or("medium shot"),
            composition.camera_angle.as_deref().unwrap_or("eye level"),
        );
        if let Some(focus) = &composition.focus_element {
            composition_desc.push_str(&format!(", focusing on {}", focus));
        }
        parts.push(format!("{}.", composition_desc));

        let background = &elements.background;
        let mut background_desc = format!(
            "Background: {} ({}) at {}",
            background.specific_place.as_deref().unwrap_or("a generic place"),
            background.location_type.as_deref().unwrap_or("outdoor"),
            background.time_of_day.as_deref().unwrap_or("daytime"),
        );
        if let Some(weather) = &background.weather {
            background_desc.push_str(&format!(", weather is {}", weather));
        }
        if !background.key_props.is_empty() {
            background_desc.push_str(&format!(". Key props: {}", background.key_props.join(", ")));
        }
        if let Some(atmosphere) = &background.atmosphere {
            background_desc.push_str(&format!(". Overall atmosphere: {}", atmosphere));
        }
        parts.push(format!("{}.", background_desc));

        if let Some(art_style) = &style.art_style {
            parts.push(format!("Art style: {}.", art_style));
        }
        if let Some(palette) = &style.color_palette {
            parts.push(format!("Color palette: {}.", palette));
        }

        parts.join(" ")
    }
}
