//! Tests for degraded operation without an inference oracle.

mod common;

use common::scripted_oracle;
use vignette_core::{Cut, CutId};
use vignette_storyboard::{CharacterStore, ElementExtractor, Oracle, SceneSegmenter};

fn cut(index: u32, text: &str) -> Cut {
    Cut {
        id: CutId::from_index(index),
        text: text.to_string(),
    }
}

#[tokio::test]
async fn disabled_oracle_still_produces_elements_for_every_cut() {
    let mut segmenter = SceneSegmenter::new(Oracle::disabled());
    let mut extractor = ElementExtractor::new(Oracle::disabled());
    let mut store = CharacterStore::new();

    let cuts = segmenter.segment("Rain began to fall outside the office window.").await;
    assert!(!cuts.is_empty());

    let mut results = Vec::new();
    for cut in &cuts {
        results.push(extractor.process_cut(cut, "", &mut store).await);
    }

    // One result per cut, every field at its documented fallback.
    assert_eq!(results.len(), cuts.len());
    for elements in &results {
        assert!(elements.characters.is_empty());
        assert!(elements.composition.is_empty());
        assert!(elements.background.is_empty());
        assert!(elements.dialogues.is_empty());
        assert!(elements.bubbles.is_empty());
    }
    assert!(store.is_empty());
}

#[tokio::test]
async fn malformed_responses_degrade_to_fallbacks() {
    let (oracle, _) = scripted_oracle([
        "I could not identify any characters, sorry!",
        "camera: wherever feels right",
        "{\"location_type\": \"indoor\"",
        "no quoted dialogue here",
    ]);
    let mut extractor = ElementExtractor::new(oracle);
    let mut store = CharacterStore::new();

    let elements = extractor
        .process_cut(&cut(1, "The detective rose from his desk."), "", &mut store)
        .await;

    assert!(elements.characters.is_empty());
    assert!(elements.composition.is_empty());
    assert!(elements.background.is_empty());
    assert!(elements.dialogues.is_empty());
    assert!(elements.bubbles.is_empty());
}

#[tokio::test]
async fn exhausted_script_degrades_later_stages_only() {
    let characters = r#"[{"id": "NEW", "name": "Kim Cheolsu", "action": "standing up"}]"#;
    let (oracle, _) = scripted_oracle([characters]);
    let mut extractor = ElementExtractor::new(oracle);
    let mut store = CharacterStore::new();

    let elements = extractor
        .process_cut(&cut(1, "The detective rose."), "", &mut store)
        .await;

    // Character resolution succeeded before the driver started failing.
    assert_eq!(elements.characters.len(), 1);
    assert_eq!(store.len(), 1);
    assert!(elements.composition.is_empty());
    assert!(elements.dialogues.is_empty());
}

#[tokio::test]
async fn fenced_payloads_are_unwrapped() {
    let fenced = "Here you go:\n```json\n[{\"text\": \"The office door opened quietly.\"}]\n```";
    let (oracle, _) = scripted_oracle([fenced]);
    let mut segmenter = SceneSegmenter::new(oracle);

    let cuts = segmenter.segment("The office door opened quietly.").await;
    assert_eq!(cuts.len(), 1);
    assert_eq!(cuts[0].text, "The office door opened quietly.");
}
