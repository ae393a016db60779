//! Speech bubble placement guidance.

use crate::Oracle;
use vignette_core::{BubbleGuidance, CharacterView, Composition, Dialogue};

/// Advises on speech bubble placement for one cut.
///
/// Stateless: a pure function of the cut's resolved dialogues, characters,
/// and composition. The oracle is instructed to reference only the given
/// dialogue ids, but that contract is not enforced here; consumers drop
/// guidance entries whose `dialogue_id` matches nothing.
#[derive(Debug, Clone)]
pub struct BubbleAdviser {
    oracle: Oracle,
}

impl BubbleAdviser {
    /// Create an adviser backed by the given oracle.
    pub fn new(oracle: Oracle) -> Self {
        Self { oracle }
    }

    /// Produce placement guidance for each dialogue in the cut.
    ///
    /// Returns an empty list without invoking the oracle when there are no
    /// dialogues: there is nothing to place, and an empty-input call
    /// could not be told apart from a failed one.
    #[tracing::instrument(skip_all, fields(dialogues = dialogues.len()))]
    pub async fn advise(
        &self,
        dialogues: &[Dialogue],
        characters: &[CharacterView],
        composition: &Composition,
    ) -> Vec<BubbleGuidance> {
        if dialogues.is_empty() {
            return Vec::new();
        }

        let character_summary = characters
            .iter()
            .map(|c| {
                format!(
                    "character id: {}, name: {}, action/position cue: {} ({} expression)",
                    c.id,
                    c.name,
                    c.action.as_deref().unwrap_or("unknown"),
                    c.expression.as_deref().unwrap_or("neutral"),
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let dialogue_summary = dialogues
            .iter()
            .map(|d| {
                format!(
                    "dialogue id: {}, speaker: {}, text: \"{}\", nuance: {}",
                    d.id,
                    d.speaker_id
                        .as_ref()
                        .map(|id| id.to_string())
                        .unwrap_or_else(|| d.speaker_name_guess.clone()),
                    d.text,
                    d.nuance.as_deref().unwrap_or("neutral"),
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let composition_json =
            serde_json::to_string(composition).unwrap_or_else(|_| "{}".to_string());

        let prompt = format!(
            r#"Produce speech bubble placement guidance for a webtoon panel, considering the "characters in this cut", "dialogues in this cut", and "composition" below together.
Respond with a JSON array, one object per dialogue, with these keys:
- "dialogue_id": the id of the dialogue this entry is for (use the ids given below).
- "speaker_ref_id": the speaking character's id (from the character list below).
- "suggested_area": rough area for the bubble (e.g. "upper right of character A", "bottom center of frame"), respecting character positions and the focal element.
- "bubble_style_hint": shape or style of the bubble (e.g. "plain", "thought cloud", "spiky shout", "wavering outline"), reflecting the dialogue's nuance.
- "tail_direction": where the bubble tail should point (e.g. "toward the speaker's mouth", "near the speaker's head").

[Characters in this cut]
{character_summary}

[Dialogues in this cut]
{dialogue_summary}

[Composition]
{composition_json}

[Response format] Output ONLY a JSON array of objects.
"#
        );

        self.oracle.invoke_list(&prompt, "bubble guidance").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn no_dialogues_means_no_oracle_call() {
        // A disabled oracle would log a fallback; an empty dialogue list
        // must short-circuit before even that.
        let adviser = BubbleAdviser::new(Oracle::disabled());
        let guidance = adviser.advise(&[], &[], &Composition::default()).await;
        assert!(guidance.is_empty());
    }
}
