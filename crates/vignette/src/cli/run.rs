//! Pipeline execution command handler.

use std::path::Path;
use std::sync::Arc;
use vignette_models::{GeminiClient, OverlayCompositor, StabilityClient};
use vignette_pipeline::{ArtifactWriter, PipelineConfig, WebtoonPipeline};
use vignette_storyboard::Oracle;

/// Run the full pipeline over a novel text file and write artifacts.
///
/// Missing credentials never abort the run: without a Gemini key every
/// extraction degrades to its fallback, and without a Stability key (or
/// with `no_images`) the cuts ship without panels.
pub async fn run_novel(
    novel_path: &Path,
    results_dir: Option<&Path>,
    no_images: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let novel_text = std::fs::read_to_string(novel_path)?;
    tracing::info!(path = %novel_path.display(), chars = novel_text.chars().count(), "loaded novel");

    let mut config = PipelineConfig::from_env();
    if let Some(dir) = results_dir {
        config.result_dir = dir.to_path_buf();
    }
    if no_images {
        config.render = None;
    }

    let oracle = match GeminiClient::new_with_model(config.gemini_model.clone()) {
        Ok(client) => Oracle::new(Arc::new(client)),
        Err(e) => {
            tracing::warn!(error = %e, "no inference oracle available, running degraded");
            Oracle::disabled()
        }
    };

    let mut pipeline = WebtoonPipeline::new(oracle, config.clone());
    if config.render.is_some() {
        pipeline = pipeline
            .with_synthesizer(Arc::new(StabilityClient::new()))
            .with_compositor(Arc::new(OverlayCompositor::new()));
    }

    let results = pipeline.run(&novel_text).await;

    let writer = ArtifactWriter::new(&config.result_dir);
    let written = writer.write_all(&results);

    let with_images = results.iter().filter(|r| r.image.is_some()).count();
    println!(
        "Produced {} cuts ({} with images); wrote {} artifact sets to {}",
        results.len(),
        with_images,
        written,
        config.result_dir.display(),
    );

    for result in &results {
        println!(
            "  {}: {} characters, {} dialogues",
            result.cut_id,
            result.elements.characters.len(),
            result.elements.dialogues.len(),
        );
    }

    Ok(())
}
