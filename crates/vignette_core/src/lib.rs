//! Core data types for the Vignette webtoon pipeline.
//!
//! This crate provides the foundation data types used across all Vignette
//! interfaces: the webtoon domain model (cuts, characters, dialogues,
//! bubble guidance), conversation plumbing for the inference oracle, and
//! tracing initialization for binaries.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod character;
mod cut;
mod ids;
mod input;
mod media;
mod message;
mod output;
mod request;
mod role;
mod telemetry;

pub use character::CharacterRecord;
pub use cut::{
    Background, BubbleGuidance, CharacterView, Composition, Cut, CutElements, Dialogue,
};
pub use ids::{CharacterId, CutId, DialogueId, IdGenerator};
pub use input::Input;
pub use media::MediaSource;
pub use message::{Message, MessageBuilder};
pub use output::Output;
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
pub use role::Role;
pub use telemetry::init_tracing;
