//! End-to-end pipeline tests over scripted services.

mod common;

use common::{FailingSynthesizer, StaticSynthesizer, render_config, scripted_oracle};
use std::sync::Arc;
use vignette_models::OverlayCompositor;
use vignette_pipeline::{ArtifactWriter, PipelineConfig, WebtoonPipeline};
use vignette_storyboard::Oracle;

const CUT_TEXTS: [&str; 3] = [
    "At three in the afternoon, the office door opened quietly.",
    "Her name was Yeonghee. Her voice was desperate.",
    "Rain began to fall outside the window.",
];

fn segmentation_response() -> String {
    let scenes: Vec<String> = CUT_TEXTS
        .iter()
        .enumerate()
        .map(|(i, text)| format!(r#"{{"id_placeholder": "temp_id_{}", "text": "{}"}}"#, i + 1, text))
        .collect();
    format!("[{}]", scenes.join(","))
}

/// Responses for one cut with no characters and no dialogue:
/// characters, composition, background, dialogues, prompt enhancement.
const QUIET_CUT: [&str; 5] = ["[]", "{}", "{}", "[]", "an enhanced panel prompt"];

#[tokio::test]
async fn third_cut_context_contains_second_cut_verbatim() {
    let mut responses = vec![segmentation_response()];
    for _ in 0..3 {
        responses.extend(QUIET_CUT.iter().map(|s| s.to_string()));
    }
    let (oracle, driver) = scripted_oracle(responses);

    let mut pipeline = WebtoonPipeline::new(oracle, PipelineConfig::default());
    let results = pipeline.run(&CUT_TEXTS.join(" ")).await;
    assert_eq!(results.len(), 3);

    // Call order: segmentation, then five calls per cut. The third cut's
    // character-continuity prompt is call index 11.
    let prompts = driver.prompts();
    assert_eq!(prompts.len(), 16);
    let cut3_characters_prompt = &prompts[11];
    assert!(cut3_characters_prompt.contains(&format!("Previous cut: {}", CUT_TEXTS[1])));

    // The first cut has no predecessor.
    assert!(prompts[1].contains("Previous cut: \n"));
}

#[tokio::test]
async fn disabled_oracle_still_yields_one_result_per_cut() {
    let mut pipeline = WebtoonPipeline::new(Oracle::disabled(), PipelineConfig::default());
    let results = pipeline.run("A short scene with nobody in it.").await;

    // Segmentation degrades to a single cut holding the whole text.
    assert_eq!(results.len(), 1);
    let result = &results[0];
    assert!(result.elements.characters.is_empty());
    assert!(result.elements.dialogues.is_empty());
    assert!(!result.image_prompt.is_empty());
    assert!(result.image.is_none());
    assert!(result.composed.is_none());
}

#[tokio::test]
async fn failed_image_generation_does_not_abort_the_run() {
    let config = PipelineConfig {
        render: Some(render_config()),
        ..PipelineConfig::default()
    };
    let mut pipeline = WebtoonPipeline::new(Oracle::disabled(), config)
        .with_synthesizer(Arc::new(FailingSynthesizer))
        .with_compositor(Arc::new(OverlayCompositor::new()));

    let results = pipeline.run("A scene that will not render.").await;
    assert_eq!(results.len(), 1);
    assert!(results[0].image.is_none());
    assert!(results[0].composed.is_none());
}

#[tokio::test]
async fn generated_panels_are_composited() {
    let config = PipelineConfig {
        render: Some(render_config()),
        ..PipelineConfig::default()
    };
    let mut pipeline = WebtoonPipeline::new(Oracle::disabled(), config)
        .with_synthesizer(Arc::new(StaticSynthesizer(b"PNGDATA".to_vec())))
        .with_compositor(Arc::new(OverlayCompositor::new()));

    let results = pipeline.run("A quiet scene.").await;
    let result = &results[0];
    assert_eq!(result.image.as_deref(), Some(b"PNGDATA".as_slice()));
    // No dialogues, so the composited panel is the base image unchanged.
    assert_eq!(result.composed, result.image);
}

#[tokio::test]
async fn artifacts_are_named_by_cut_id() {
    let dir = tempfile::tempdir().unwrap();
    let config = PipelineConfig {
        render: Some(render_config()),
        result_dir: dir.path().to_path_buf(),
        ..PipelineConfig::default()
    };
    let mut pipeline = WebtoonPipeline::new(Oracle::disabled(), config)
        .with_synthesizer(Arc::new(StaticSynthesizer(b"PNGDATA".to_vec())))
        .with_compositor(Arc::new(OverlayCompositor::new()));

    let results = pipeline.run("A quiet scene.").await;
    let writer = ArtifactWriter::new(dir.path());
    assert_eq!(writer.write_all(&results), results.len());

    assert!(dir.path().join("cut_001.png").exists());
    assert!(dir.path().join("cut_001.json").exists());
}
