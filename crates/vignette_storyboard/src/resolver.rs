//! Character continuity resolution across cuts.

use crate::{CharacterMention, CharacterStore, Oracle};
use vignette_core::{CharacterView, Cut};

/// Resolves character mentions in one cut against the identity store.
///
/// For each cut the resolver summarizes the store, asks the oracle which
/// characters are present and whether each matches an existing identity,
/// then applies the merge-or-create decision. The oracle's single proposed
/// match is taken as authoritative for ambiguous aliases; the resolver
/// performs no similarity scoring of its own.
#[derive(Debug, Clone)]
pub struct ContinuityResolver {
    oracle: Oracle,
}

impl ContinuityResolver {
    /// Create a resolver backed by the given oracle.
    pub fn new(oracle: Oracle) -> Self {
        Self { oracle }
    }

    /// Resolve all characters present in `cut`, mutating `store`.
    ///
    /// Returns one [`CharacterView`] per resolved mention: store-held
    /// `name`/`appearance`/`outfit` layered with this cut's point-in-time
    /// expression, emotion, and action.
    ///
    /// An oracle-proposed id that does not exist in the store is not an
    /// error: it silently degrades to a fresh identity so a hallucinated
    /// id cannot corrupt existing records, at the cost of possibly
    /// duplicating one. The discrepancy is logged as a warning.
    #[tracing::instrument(skip_all, fields(cut = %cut.id, known_characters = store.len()))]
    pub async fn resolve(
        &self,
        cut: &Cut,
        scene_context: &str,
        store: &mut CharacterStore,
    ) -> Vec<CharacterView> {
        let prompt = self.build_prompt(&cut.text, scene_context, store);
        let mentions: Vec<CharacterMention> = self
            .oracle
            .invoke_list(&prompt, "character continuity")
            .await;

        let mut views = Vec::with_capacity(mentions.len());
        for mention in &mentions {
            let id = match mention.proposed_id() {
                Some(id) if store.contains(&id) => {
                    store.merge(&id, mention, &cut.id);
                    id
                }
                Some(id) => {
                    tracing::warn!(
                        proposed = %id,
                        name = %mention.name,
                        "oracle referenced an id not in the store, treating as new"
                    );
                    store.create(mention, &cut.id)
                }
                None => store.create(mention, &cut.id),
            };

            // Read name/appearance/outfit back from the store so the view
            // reflects the merged record, not the raw mention.
            let record = store
                .get(&id)
                .expect("id was just created or merged into the store");
            views.push(CharacterView {
                id: id.clone(),
                name: record.name.clone(),
                appearance: record.appearance.clone(),
                outfit: record.outfit.clone(),
                expression: mention.expression.clone(),
                emotion: mention.emotion.clone(),
                action: mention.action.clone(),
            });
        }
        views
    }

    fn build_prompt(&self, cut_text: &str, scene_context: &str, store: &CharacterStore) -> String {
        format!(
            r#"You are an expert at tracking character continuity in fiction.

[Instructions]
1. Identify every character present in the "current cut text" below, using the "scene context" for disambiguation.
2. Consult the "known character database". Decide for each character whether it is the same person as an existing entry, judged by name, aliases, consistency of appearance and behavior, and narrative flow. A pronoun or generic phrase ("the mysterious woman", "she") that refers to a known character belongs to that character.
3. Respond with a JSON array, one object per character, with these keys:
   - "id": the existing character's id if this is a known character, or "NEW" if not.
   - "name": the character's primary name.
   - "aliases": list of other names or referring expressions used in the text.
   - "appearance": physical description (extend existing information).
   - "outfit": clothing description (extend existing information).
   - "expression": facial expression in this cut.
   - "emotion": emotional state in this cut.
   - "action": main action in this cut.
   - "is_new_character_suggestion": true for a new character, false for an update to a known one.
   - "confidence_for_merge": confidence in a proposed match, 0.0 to 1.0 (0.0 for new characters).
   - "reasoning": brief justification for the match-or-new decision.

[Known character database]
{}

[Scene context]
{}

[Current cut text]
{}

[Response format] Output ONLY a JSON array of objects.
"#,
            store.summary(),
            scene_context,
            cut_text,
        )
    }
}
