//! Persistent character identity records.

use crate::{CharacterId, CutId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A persistent character identity, accumulated across cuts.
///
/// Records are created exactly once when the continuity resolver judges a
/// mention as novel, mutated on every later cut the same identity appears
/// in, and never deleted for the lifetime of a pipeline run.
///
/// Field update discipline:
/// - `name` is overwritten by later non-empty mentions.
/// - `aliases` only grows.
/// - `appearance` and `outfit` keep the last non-empty value observed.
/// - `all_actions`/`all_emotions` gain at most one entry per cut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    /// Stable identifier, unique for the run
    pub id: CharacterId,
    /// Current best-known primary name
    pub name: String,
    /// Every alternate name or referring expression observed so far
    pub aliases: BTreeSet<String>,
    /// Last non-empty appearance description
    pub appearance: Option<String>,
    /// Last non-empty outfit description
    pub outfit: Option<String>,
    /// Earliest cut mentioning this character
    pub first_seen_cut: CutId,
    /// Most recent cut mentioning this character
    pub last_seen_cut: CutId,
    /// Action observed per cut
    pub all_actions: BTreeMap<CutId, String>,
    /// Emotion observed per cut
    pub all_emotions: BTreeMap<CutId, String>,
}

impl CharacterRecord {
    /// Whether the given name matches this record's primary name or any alias.
    ///
    /// Exact string comparison only; the continuity resolver owns anything
    /// smarter than that.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name == name || self.aliases.contains(name)
    }

    /// One-line summary used when describing the identity store to the oracle.
    pub fn summary_line(&self) -> String {
        let aliases = if self.aliases.is_empty() {
            String::new()
        } else {
            format!(
                " (aliases: {})",
                self.aliases.iter().cloned().collect::<Vec<_>>().join(", ")
            )
        };
        format!(
            "- id: {}, name: {}{}, appearance: {}, outfit: {}",
            self.id,
            self.name,
            aliases,
            self.appearance.as_deref().unwrap_or("unknown"),
            self.outfit.as_deref().unwrap_or("unknown"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> CharacterRecord {
        CharacterRecord {
            id: CharacterId::from_index(1),
            name: "Yeonghee".to_string(),
            aliases: ["the mysterious woman".to_string()].into(),
            appearance: Some("long trench coat".to_string()),
            outfit: None,
            first_seen_cut: CutId::from_index(1),
            last_seen_cut: CutId::from_index(1),
            all_actions: BTreeMap::new(),
            all_emotions: BTreeMap::new(),
        }
    }

    #[test]
    fn matches_primary_name_and_alias() {
        let rec = record();
        assert!(rec.matches_name("Yeonghee"));
        assert!(rec.matches_name("the mysterious woman"));
        assert!(!rec.matches_name("Cheolsu"));
    }

    #[test]
    fn summary_line_includes_aliases() {
        let line = record().summary_line();
        assert!(line.contains("char_001"));
        assert!(line.contains("the mysterious woman"));
    }
}
