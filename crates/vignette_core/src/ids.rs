//! Identifier newtypes and id minting.
//!
//! Ids are minted from explicit [`IdGenerator`] values rather than hidden
//! struct counters, keeping assignment a pure function of generator state.
//! Character and cut ids are never reused within a run; dialogue ids reset
//! per cut but stay globally unique through their cut-derived prefix.

use serde::{Deserialize, Serialize};

/// Stable identifier for a character, e.g. `char_001`.
///
/// Assigned once at record creation and never reused.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct CharacterId(String);

impl CharacterId {
    /// Format a character id from a 1-based index.
    pub fn from_index(index: u32) -> Self {
        Self(format!("char_{index:03}"))
    }

    /// View the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether a raw oracle-supplied id even looks like one of ours.
    ///
    /// Anything else (including the `NEW` sentinel) is treated as a
    /// request for a fresh identity.
    pub fn is_plausible(raw: &str) -> bool {
        raw.starts_with("char_")
    }
}

impl From<&str> for CharacterId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Identifier for one cut (panel), e.g. `cut_001`.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct CutId(String);

impl CutId {
    /// Format a cut id from a 1-based index.
    pub fn from_index(index: u32) -> Self {
        Self(format!("cut_{index:03}"))
    }

    /// View the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The dialogue-id prefix derived from this cut id (`cut_007` → `007`).
    pub fn dialogue_prefix(&self) -> &str {
        self.0.strip_prefix("cut_").unwrap_or(&self.0)
    }
}

impl From<&str> for CutId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Identifier for one dialogue line, e.g. `dlg_001_002`.
///
/// The middle segment is the owning cut's prefix; the final segment is the
/// per-cut counter. Two different cuts' first dialogues therefore never
/// collide even though the counter resets every cut.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct DialogueId(String);

impl DialogueId {
    /// Format a dialogue id from the owning cut and a 1-based index.
    pub fn new(cut: &CutId, index: u32) -> Self {
        Self(format!("dlg_{}_{index:03}", cut.dialogue_prefix()))
    }

    /// View the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Monotonic counter for minting ids.
///
/// # Examples
///
/// ```
/// use vignette_core::{CharacterId, IdGenerator};
///
/// let mut ids = IdGenerator::default();
/// assert_eq!(CharacterId::from_index(ids.next()).as_str(), "char_001");
/// assert_eq!(CharacterId::from_index(ids.next()).as_str(), "char_002");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdGenerator(u32);

impl IdGenerator {
    /// Advance the counter and return the next 1-based index.
    pub fn next(&mut self) -> u32 {
        self.0 += 1;
        self.0
    }

    /// Reset the counter to zero (used for per-cut dialogue numbering).
    pub fn reset(&mut self) {
        self.0 = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialogue_ids_from_different_cuts_never_collide() {
        let cut_a = CutId::from_index(1);
        let cut_b = CutId::from_index(2);
        assert_ne!(DialogueId::new(&cut_a, 1), DialogueId::new(&cut_b, 1));
    }

    #[test]
    fn cut_prefix_strips_namespace() {
        assert_eq!(CutId::from_index(12).dialogue_prefix(), "012");
    }

    #[test]
    fn generator_reset_restarts_numbering() {
        let mut ids = IdGenerator::default();
        ids.next();
        ids.next();
        ids.reset();
        assert_eq!(ids.next(), 1);
    }
}
