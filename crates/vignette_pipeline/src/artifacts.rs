//! Artifact output for completed cuts.

use crate::CutResult;
use std::fs;
use std::path::{Path, PathBuf};
use vignette_error::{StoryboardError, StoryboardErrorKind};

/// Writes per-cut artifacts under a result directory.
///
/// File names derive deterministically from cut ids: `cut_001.png` for the
/// panel (composited when available, raw otherwise) and `cut_001.json` for
/// the extracted elements and prompt.
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    dir: PathBuf,
}

impl ArtifactWriter {
    /// Create a writer rooted at the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Write artifacts for every result, skipping nothing on error.
    ///
    /// Individual write failures are logged and counted, not propagated;
    /// one unwritable cut must not lose the rest of the run.
    pub fn write_all(&self, results: &[CutResult]) -> usize {
        let mut written = 0;
        for result in results {
            match self.write(result) {
                Ok(_) => written += 1,
                Err(e) => tracing::error!(cut = %result.cut_id, error = %e, "artifact write failed"),
            }
        }
        written
    }

    /// Write the artifacts for one cut, returning the metadata path.
    pub fn write(&self, result: &CutResult) -> Result<PathBuf, StoryboardError> {
        fs::create_dir_all(&self.dir).map_err(|e| self.write_error(&self.dir, e))?;

        if let Some(panel) = result.composed.as_ref().or(result.image.as_ref()) {
            let image_path = self.dir.join(format!("{}.png", result.cut_id));
            fs::write(&image_path, panel).map_err(|e| self.write_error(&image_path, e))?;
        }

        let meta_path = self.dir.join(format!("{}.json", result.cut_id));
        let payload = serde_json::to_string_pretty(result)
            .map_err(|e| self.write_error(&meta_path, e))?;
        fs::write(&meta_path, payload).map_err(|e| self.write_error(&meta_path, e))?;

        Ok(meta_path)
    }

    fn write_error(&self, path: &Path, error: impl std::fmt::Display) -> StoryboardError {
        StoryboardError::new(StoryboardErrorKind::ArtifactWrite {
            path: path.display().to_string(),
            message: error.to_string(),
        })
    }
}
