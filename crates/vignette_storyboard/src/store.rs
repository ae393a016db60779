//! The character identity store.

use crate::CharacterMention;
use std::collections::BTreeMap;
use vignette_core::{CharacterId, CharacterRecord, CutId, IdGenerator};

/// Owned collection of every character identity observed during one
/// pipeline run.
///
/// The store is exclusively owned by its pipeline: it travels by `&mut`
/// through the strictly sequential per-cut loop and is only ever mutated
/// by the continuity resolver. It is never persisted across runs and never
/// shared between concurrent runs: merge/create decisions read-then-write
/// the whole map, so interleaved writers would corrupt identity
/// assignment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CharacterStore {
    records: BTreeMap<CharacterId, CharacterRecord>,
    ids: IdGenerator,
}

impl CharacterStore {
    /// Create an empty store with a fresh id generator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of identities tracked.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether any identities exist yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether the given id exists in the store.
    pub fn contains(&self, id: &CharacterId) -> bool {
        self.records.contains_key(id)
    }

    /// Look up a record by id.
    pub fn get(&self, id: &CharacterId) -> Option<&CharacterRecord> {
        self.records.get(id)
    }

    /// Iterate over records in id order.
    pub fn iter(&self) -> impl Iterator<Item = &CharacterRecord> {
        self.records.values()
    }

    /// Find the first record whose name or alias exactly matches.
    ///
    /// Iteration is in id order, so the earliest-created match wins.
    pub fn find_by_name(&self, name: &str) -> Option<&CharacterRecord> {
        self.records.values().find(|rec| rec.matches_name(name))
    }

    /// Compact textual summary of every record, for oracle prompts.
    ///
    /// Returns "none" when the store is empty.
    pub fn summary(&self) -> String {
        if self.records.is_empty() {
            return "none".to_string();
        }
        self.records
            .values()
            .map(CharacterRecord::summary_line)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Create a fresh record from a mention, minting a new id.
    ///
    /// The mention's own id claim (if any) is discarded.
    pub fn create(&mut self, mention: &CharacterMention, cut_id: &CutId) -> CharacterId {
        let id = CharacterId::from_index(self.ids.next());

        let mut record = CharacterRecord {
            id: id.clone(),
            name: mention.name.clone(),
            aliases: mention.aliases.iter().cloned().collect(),
            appearance: non_empty(&mention.appearance),
            outfit: non_empty(&mention.outfit),
            first_seen_cut: cut_id.clone(),
            last_seen_cut: cut_id.clone(),
            all_actions: BTreeMap::new(),
            all_emotions: BTreeMap::new(),
        };
        if let Some(action) = non_empty(&mention.action) {
            record.all_actions.insert(cut_id.clone(), action);
        }
        if let Some(emotion) = non_empty(&mention.emotion) {
            record.all_emotions.insert(cut_id.clone(), emotion);
        }

        tracing::info!(id = %id, name = %record.name, cut = %cut_id, "new character added");
        self.records.insert(id.clone(), record);
        id
    }

    /// Merge a mention into an existing record.
    ///
    /// Field discipline: name overwritten by a non-empty mention name,
    /// aliases only grow, appearance/outfit keep the last non-empty value,
    /// `last_seen_cut` always advances, and this cut's action/emotion are
    /// recorded once.
    ///
    /// Returns `false` (without mutating) when the id is unknown; the
    /// resolver treats that case as a creation instead.
    pub fn merge(&mut self, id: &CharacterId, mention: &CharacterMention, cut_id: &CutId) -> bool {
        let Some(record) = self.records.get_mut(id) else {
            return false;
        };

        if !mention.name.trim().is_empty() {
            record.name = mention.name.clone();
        }
        record.aliases.extend(mention.aliases.iter().cloned());
        if let Some(appearance) = non_empty(&mention.appearance) {
            record.appearance = Some(appearance);
        }
        if let Some(outfit) = non_empty(&mention.outfit) {
            record.outfit = Some(outfit);
        }
        record.last_seen_cut = cut_id.clone();
        if let Some(action) = non_empty(&mention.action) {
            record.all_actions.insert(cut_id.clone(), action);
        }
        if let Some(emotion) = non_empty(&mention.emotion) {
            record.all_emotions.insert(cut_id.clone(), emotion);
        }

        tracing::info!(id = %id, name = %record.name, cut = %cut_id, "character updated");
        true
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mention(name: &str) -> CharacterMention {
        CharacterMention {
            id: None,
            name: name.to_string(),
            aliases: Vec::new(),
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

    #[test]
    fn create_mints_sequential_ids() {
        let mut store = CharacterStore::new();
        let cut = CutId::from_index(1);
        let a = store.create(&mention("Yeonghee"), &cut);
        let b = store.create(&mention("Cheolsu"), &cut);
        assert_eq!(a.as_str(), "char_001");
        assert_eq!(b.as_str(), "char_002");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn merge_keeps_last_non_empty_appearance() {
        let mut store = CharacterStore::new();
        let cut1 = CutId::from_index(1);
        let cut2 = CutId::from_index(2);

        let mut first = mention("Yeonghee");
        first.appearance = Some("long trench coat".to_string());
        let id = store.create(&first, &cut1);

        let mut second = mention("Yeonghee");
        second.appearance = Some("   ".to_string());
        assert!(store.merge(&id, &second, &cut2));

        let record = store.get(&id).unwrap();
        assert_eq!(record.appearance.as_deref(), Some("long trench coat"));
        assert_eq!(record.last_seen_cut, cut2);
    }

    #[test]
    fn merge_grows_aliases_monotonically() {
        let mut store = CharacterStore::new();
        let cut1 = CutId::from_index(1);
        let cut2 = CutId::from_index(2);

        let mut first = mention("Yeonghee");
        first.aliases = vec!["the mysterious woman".to_string()];
        let id = store.create(&first, &cut1);
        let before: Vec<String> = store.get(&id).unwrap().aliases.iter().cloned().collect();

        let mut second = mention("Yeonghee");
        second.aliases = vec!["that woman".to_string()];
        store.merge(&id, &second, &cut2);

        let after = &store.get(&id).unwrap().aliases;
        for alias in &before {
            assert!(after.contains(alias));
        }
        assert!(after.contains("that woman"));
    }

    #[test]
    fn merge_unknown_id_is_a_no_op() {
        let mut store = CharacterStore::new();
        let cut = CutId::from_index(1);
        assert!(!store.merge(&CharacterId::from("char_999"), &mention("Ghost"), &cut));
        assert!(store.is_empty());
    }

    #[test]
    fn empty_store_summary_is_none() {
        assert_eq!(CharacterStore::new().summary(), "none");
    }

    #[test]
    fn find_by_name_prefers_earliest_record() {
        let mut store = CharacterStore::new();
        let cut = CutId::from_index(1);
        let mut shared = mention("the detective");
        let first = store.create(&shared, &cut);
        shared.aliases = vec!["the detective".to_string()];
        shared.name = "Kim Cheolsu".to_string();
        store.create(&shared, &cut);

        assert_eq!(store.find_by_name("the detective").unwrap().id, first);
    }
}
