//! Per-cut scene element extraction.

use crate::{BubbleAdviser, CharacterStore, ContinuityResolver, Oracle, RawDialogue};
use vignette_core::{
    Background, CharacterView, Composition, Cut, CutElements, Dialogue, DialogueId, IdGenerator,
};

/// Coordinates every extraction step for one cut.
///
/// Per cut, in order: character continuity resolution (the only step that
/// mutates shared state), composition and background inference, dialogue
/// separation, speaker attribution, and bubble guidance. Each oracle call
/// degrades to its empty fallback independently, so one failed step never
/// poisons the rest of the cut.
#[derive(Debug)]
pub struct ElementExtractor {
    oracle: Oracle,
    resolver: ContinuityResolver,
    adviser: BubbleAdviser,
    dialogue_ids: IdGenerator,
}

impl ElementExtractor {
    /// Create an extractor backed by the given oracle.
    pub fn new(oracle: Oracle) -> Self {
        Self {
            resolver: ContinuityResolver::new(oracle.clone()),
            adviser: BubbleAdviser::new(oracle.clone()),
            oracle,
            dialogue_ids: IdGenerator::default(),
        }
    }

    /// Process a single cut end to end.
    ///
    /// `store` accumulates character identities across cuts and must be
    /// the same instance for every cut of a run, passed in segmentation
    /// order.
    #[tracing::instrument(skip_all, fields(cut = %cut.id))]
    pub async fn process_cut(
        &mut self,
        cut: &Cut,
        scene_context: &str,
        store: &mut CharacterStore,
    ) -> CutElements {
        let characters = self.resolver.resolve(cut, scene_context, store).await;
        let composition = self.configure_composition(&cut.text, scene_context).await;
        let background = self.configure_background(&cut.text, scene_context).await;

        let mut dialogues = self.separate_dialogues(cut).await;
        for dialogue in &mut dialogues {
            dialogue.speaker_id = attribute_speaker(&dialogue.speaker_name_guess, &characters, store);
        }

        let bubbles = self.adviser.advise(&dialogues, &characters, &composition).await;

        CutElements {
            cut_id: cut.id.clone(),
            text: cut.text.clone(),
            characters,
            composition,
            background,
            dialogues,
            bubbles,
        }
    }

    /// Infer the visual composition for a cut.
    ///
    /// Stateless; returns the empty descriptor when the oracle fails.
    pub async fn configure_composition(&self, cut_text: &str, scene_context: &str) -> Composition {
        let prompt = format!(
            r#"Plan the visual composition of a webtoon panel from the "current cut text" and "scene context" below.
Respond with a JSON object with these keys: "camera_angle", "shot_type" (e.g. close-up, full shot, bust shot), "character_placement" (where the characters sit in the frame), "focus_element" (the visually dominant element of this panel).

[Scene context]
{scene_context}

[Current cut text]
{cut_text}

[Response format] Output ONLY a JSON object.
"#
        );
        self.oracle.invoke_map(&prompt, "composition").await
    }

    /// Infer the background for a cut.
    ///
    /// Stateless; returns the empty descriptor when the oracle fails.
    pub async fn configure_background(&self, cut_text: &str, scene_context: &str) -> Background {
        let prompt = format!(
            r#"Describe the background of a webtoon panel from the "current cut text" and "scene context" below.
Respond with a JSON object with these keys: "location_type" (indoor/outdoor), "specific_place" (concrete place name or description), "time_of_day", "weather" (when applicable), "key_props" (list of principal props in the background), "atmosphere" (overall mood).

[Scene context]
{scene_context}

[Current cut text]
{cut_text}

[Response format] Output ONLY a JSON object.
"#
        );
        self.oracle.invoke_map(&prompt, "background").await
    }

    /// Extract all quoted dialogue from a cut and mint dialogue ids.
    ///
    /// The per-cut counter resets here; global uniqueness comes from the
    /// cut-derived id prefix.
    pub async fn separate_dialogues(&mut self, cut: &Cut) -> Vec<Dialogue> {
        self.dialogue_ids.reset();
        let prompt = format!(
            r#"Extract every directly quoted line of dialogue ("...") from the "current cut text" below.
Respond with a JSON array, one object per line, with these keys:
- "speaker_name_guess": the likely speaker's name (use a label like "man 1" or "a voice" when no name is available).
- "text": the spoken words.
- "nuance": tone or implied emotion (e.g. shout, whisper, resolute, joy, sorrow).

[Current cut text]
{}

[Response format] Output ONLY a JSON array of objects.
"#,
            cut.text
        );
        let raw: Vec<RawDialogue> = self.oracle.invoke_list(&prompt, "dialogue separation").await;

        raw.into_iter()
            .map(|line| Dialogue {
                id: DialogueId::new(&cut.id, self.dialogue_ids.next()),
                speaker_name_guess: line.speaker_name_guess,
                speaker_id: None,
                text: line.text,
                nuance: line.nuance,
            })
            .collect()
    }
}

/// Resolve a speaker name guess to a character id.
///
/// Lookup order: (a) the current cut's resolved characters, through their
/// store records so fresh aliases count; (b) the entire store. Exact
/// name/alias equality only, first match wins. `None` when nothing
/// matches.
pub fn attribute_speaker(
    speaker_name_guess: &str,
    cut_characters: &[CharacterView],
    store: &CharacterStore,
) -> Option<vignette_core::CharacterId> {
    let guess = speaker_name_guess.trim();
    if guess.is_empty() {
        return None;
    }

    for view in cut_characters {
        if let Some(record) = store.get(&view.id) {
            if record.matches_name(guess) {
                return Some(view.id.clone());
            }
        }
    }

    store.find_by_name(guess).map(|record| record.id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CharacterMention;
    use vignette_core::{CharacterId, CutId};

    fn mention(name: &str, aliases: &[&str]) -> CharacterMention {
        CharacterMention {
            id: None,
            name: name.to_string(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            appearance: None,
            outfit: None,
            expression: None,
            emotion: None,
            action: None,
            is_new_character_suggestion: true,
            confidence_for_merge: 0.0,
            reasoning: None,
        }
    }

    fn view(id: &CharacterId, name: &str) -> CharacterView {
        CharacterView {
            id: id.clone(),
            name: name.to_string(),
            appearance: None,
            outfit: None,
            expression: None,
            emotion: None,
            action: None,
        }
    }

    #[test]
    fn attribution_prefers_cut_characters() {
        let mut store = CharacterStore::new();
        let cut = CutId::from_index(1);
        let offstage = store.create(&mention("Yeonghee", &["the client"]), &cut);
        let onstage = store.create(&mention("Cheolsu", &["the client"]), &cut);

        // Only Cheolsu is in this cut; the shared alias must resolve to him.
        let views = vec![view(&onstage, "Cheolsu")];
        assert_eq!(attribute_speaker("the client", &views, &store), Some(onstage));
        assert_ne!(attribute_speaker("the client", &views, &store), Some(offstage));
    }

    #[test]
    fn attribution_falls_back_to_full_store() {
        let mut store = CharacterStore::new();
        let cut = CutId::from_index(1);
        let absent = store.create(&mention("Yeonghee", &[]), &cut);

        let id = attribute_speaker("Yeonghee", &[], &store);
        assert_eq!(id, Some(absent));
    }

    #[test]
    fn attribution_returns_none_without_match() {
        let store = CharacterStore::new();
        assert_eq!(attribute_speaker("a voice", &[], &store), None);
        assert_eq!(attribute_speaker("", &[], &store), None);
    }
}
