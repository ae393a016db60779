//! Per-cut element types.
//!
//! Everything here is transient: built fresh for each cut during
//! extraction and carried in the pipeline's output collection, never
//! persisted across runs.

use crate::{CharacterId, CutId, DialogueId};
use serde::{Deserialize, Serialize};

/// One segmented narrative unit, as returned by scene segmentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cut {
    /// Locally minted cut id
    pub id: CutId,
    /// The novel text belonging to this cut
    pub text: String,
}

/// A character as it appears in one specific cut.
///
/// `name`, `appearance`, and `outfit` mirror the identity store at
/// resolution time; `expression`, `emotion`, and `action` are valid for
/// this cut only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterView {
    /// Resolved identity in the store
    pub id: CharacterId,
    /// Primary name at resolution time
    pub name: String,
    /// Appearance at resolution time
    pub appearance: Option<String>,
    /// Outfit at resolution time
    pub outfit: Option<String>,
    /// Facial expression in this cut
    pub expression: Option<String>,
    /// Emotional state in this cut
    pub emotion: Option<String>,
    /// Main action in this cut
    pub action: Option<String>,
}

/// Visual composition descriptor for one cut.
///
/// All fields are free-text guesses from the oracle; the default value is
/// the documented empty fallback.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Composition {
    /// Camera angle, e.g. "low angle"
    #[serde(default)]
    pub camera_angle: Option<String>,
    /// Shot type, e.g. "close-up", "full shot"
    #[serde(default)]
    pub shot_type: Option<String>,
    /// Placement of characters within the frame
    #[serde(default)]
    pub character_placement: Option<String>,
    /// The visually dominant element of the cut
    #[serde(default)]
    pub focus_element: Option<String>,
}

impl Composition {
    /// Whether this is the empty fallback descriptor.
    pub fn is_empty(&self) -> bool {
        self.camera_angle.is_none()
            && self.shot_type.is_none()
            && self.character_placement.is_none()
            && self.focus_element.is_none()
    }
}

/// Background descriptor for one cut.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Background {
    /// Indoor or outdoor
    #[serde(default)]
    pub location_type: Option<String>,
    /// Concrete place name or description
    #[serde(default)]
    pub specific_place: Option<String>,
    /// Time of day
    #[serde(default)]
    pub time_of_day: Option<String>,
    /// Weather, when applicable
    #[serde(default)]
    pub weather: Option<String>,
    /// Principal props visible in the background
    #[serde(default)]
    pub key_props: Vec<String>,
    /// Overall mood of the scene
    #[serde(default)]
    pub atmosphere: Option<String>,
}

impl Background {
    /// Whether this is the empty fallback descriptor.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// One extracted dialogue line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dialogue {
    /// Locally minted id, unique across the run
    pub id: DialogueId,
    /// The speaker name as guessed by extraction (free text)
    pub speaker_name_guess: String,
    /// Resolved speaker identity; `None` when attribution found no match
    pub speaker_id: Option<CharacterId>,
    /// The spoken text
    pub text: String,
    /// Tonal label, e.g. "shout", "whisper"
    pub nuance: Option<String>,
}

/// Placement advice for one speech bubble.
///
/// `dialogue_id` is echoed back by the oracle and is not validated against
/// the cut's dialogue list; consumers must tolerate entries that match
/// nothing and simply skip them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BubbleGuidance {
    /// Claimed dialogue this advice belongs to
    pub dialogue_id: String,
    /// Claimed speaker character id
    #[serde(default)]
    pub speaker_ref_id: Option<String>,
    /// Rough screen area for the bubble
    #[serde(default)]
    pub suggested_area: Option<String>,
    /// Bubble shape/style hint reflecting the dialogue's nuance
    #[serde(default)]
    pub bubble_style_hint: Option<String>,
    /// Direction the bubble tail should point
    #[serde(default)]
    pub tail_direction: Option<String>,
}

/// The complete extraction result for one cut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutElements {
    /// The cut this was extracted from
    pub cut_id: CutId,
    /// Original cut text
    pub text: String,
    /// Characters present, with resolved identities
    pub characters: Vec<CharacterView>,
    /// Composition descriptor (empty on extraction failure)
    pub composition: Composition,
    /// Background descriptor (empty on extraction failure)
    pub background: Background,
    /// Dialogues with attributed speakers
    pub dialogues: Vec<Dialogue>,
    /// Speech bubble placement advice
    pub bubbles: Vec<BubbleGuidance>,
}
