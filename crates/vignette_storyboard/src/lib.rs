//! Character continuity and element extraction for Vignette.
//!
//! This crate owns the stateful heart of the webtoon pipeline: the
//! character identity store accumulated across cuts, the continuity
//! resolver that merges oracle-proposed character mentions into it, and
//! the per-cut element extraction (composition, background, dialogues,
//! speaker attribution, bubble guidance) built on top.
//!
//! Cuts must be processed strictly in segmentation order: each cut's
//! scene context and identity resolution depend on the fully-completed
//! state left by the previous cut. The [`CharacterStore`] is passed by
//! exclusive reference through that sequential loop and is never shared
//! between runs.
//!
//! Every oracle-backed operation here is total: when the oracle is
//! missing, fails, or returns something unparseable, the operation yields
//! its documented empty fallback and the pipeline moves on.
//!
//! # Example
//!
//! ```rust,ignore
//! use vignette_storyboard::{CharacterStore, ElementExtractor, Oracle, SceneSegmenter};
//! use vignette_models::GeminiClient;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let oracle = Oracle::new(Arc::new(GeminiClient::new()?));
//! let mut segmenter = SceneSegmenter::new(oracle.clone());
//! let mut extractor = ElementExtractor::new(oracle);
//! let mut store = CharacterStore::new();
//!
//! for cut in segmenter.segment("... novel text ...").await {
//!     let elements = extractor.process_cut(&cut, "", &mut store).await;
//!     println!("{}: {} characters", elements.cut_id, elements.characters.len());
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod bubbles;
mod extraction;
mod extractor;
mod mention;
mod oracle;
mod resolver;
mod segmenter;
mod store;

pub use bubbles::BubbleAdviser;
pub use extraction::{extract_json, parse_json};
pub use extractor::{ElementExtractor, attribute_speaker};
pub use mention::{CharacterMention, NEW_CHARACTER_SENTINEL, RawCut, RawDialogue};
pub use oracle::Oracle;
pub use resolver::ContinuityResolver;
pub use segmenter::SceneSegmenter;
pub use store::CharacterStore;
