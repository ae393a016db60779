//! Deserialization shapes for oracle payloads.
//!
//! These types mirror what the oracle is instructed to emit, with every
//! field defaulted so a partially-formed object still deserializes. They
//! are claims, not facts: the resolver and extractor decide what to trust.

use serde::Deserialize;
use vignette_core::CharacterId;

/// Sentinel the oracle uses to propose a brand-new character.
pub const NEW_CHARACTER_SENTINEL: &str = "NEW";

/// One oracle-proposed observation of a character within a single cut,
/// prior to identity resolution.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CharacterMention {
    /// Proposed id: an existing store id, or the `NEW` sentinel
    #[serde(default)]
    pub id: Option<String>,
    /// Primary name for the character
    #[serde(default)]
    pub name: String,
    /// Referring expressions seen in the cut
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Appearance description
    #[serde(default)]
    pub appearance: Option<String>,
    /// Outfit description
    #[serde(default)]
    pub outfit: Option<String>,
    /// Facial expression in this cut
    #[serde(default)]
    pub expression: Option<String>,
    /// Emotional state in this cut
    #[serde(default)]
    pub emotion: Option<String>,
    /// Main action in this cut
    #[serde(default)]
    pub action: Option<String>,
    /// Oracle's own novelty judgment
    #[serde(default)]
    pub is_new_character_suggestion: bool,
    /// Oracle confidence for a proposed merge (0.0 for new characters)
    #[serde(default)]
    pub confidence_for_merge: f32,
    /// Free-text justification for the match-or-new decision
    #[serde(default)]
    pub reasoning: Option<String>,
}

impl CharacterMention {
    /// The existing id this mention claims to match, if the claim is even
    /// plausibly one of ours.
    ///
    /// The `NEW` sentinel, a missing id, and anything that does not look
    /// like a minted character id all yield `None`; every one of those
    /// cases is handled by creating a fresh identity.
    pub fn proposed_id(&self) -> Option<CharacterId> {
        let raw = self.id.as_deref()?;
        if raw == NEW_CHARACTER_SENTINEL || !CharacterId::is_plausible(raw) {
            return None;
        }
        Some(CharacterId::from(raw))
    }
}

/// One raw dialogue line as emitted by dialogue separation.
///
/// The oracle's `id_placeholder` is discarded; real dialogue ids are
/// minted locally.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawDialogue {
    /// Estimated speaker name (may be a generic label like "a voice")
    #[serde(default)]
    pub speaker_name_guess: String,
    /// The spoken text
    #[serde(default)]
    pub text: String,
    /// Tonal label
    #[serde(default)]
    pub nuance: Option<String>,
}

/// One raw segmented scene as emitted by scene segmentation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawCut {
    /// The cut's novel text
    #[serde(default)]
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sentinel_is_not_a_proposed_id() {
        let mention: CharacterMention =
            serde_json::from_str(r#"{"id": "NEW", "name": "Yeonghee"}"#).unwrap();
        assert!(mention.proposed_id().is_none());
    }

    #[test]
    fn foreign_looking_id_is_rejected() {
        let mention: CharacterMention =
            serde_json::from_str(r#"{"id": "person-7", "name": "Yeonghee"}"#).unwrap();
        assert!(mention.proposed_id().is_none());
    }

    #[test]
    fn plausible_id_is_kept() {
        let mention: CharacterMention =
            serde_json::from_str(r#"{"id": "char_002", "name": "Cheolsu"}"#).unwrap();
        assert_eq!(mention.proposed_id().unwrap().as_str(), "char_002");
    }

    #[test]
    fn sparse_mention_deserializes_with_defaults() {
        let mention: CharacterMention = serde_json::from_str(r#"{"name": "Ruby"}"#).unwrap();
        assert!(mention.id.is_none());
        assert!(mention.aliases.is_empty());
        assert_eq!(mention.confidence_for_merge, 0.0);
    }
}
