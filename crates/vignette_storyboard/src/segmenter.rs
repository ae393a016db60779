//! Scene segmentation client.

use crate::{Oracle, RawCut};
use vignette_core::{Cut, CutId, IdGenerator};

/// Splits raw novel text into an ordered list of cuts.
///
/// The oracle proposes the split points; cut ids are minted locally so
/// downstream stages never depend on oracle-invented identifiers.
#[derive(Debug)]
pub struct SceneSegmenter {
    oracle: Oracle,
    cut_ids: IdGenerator,
}

impl SceneSegmenter {
    /// Create a segmenter backed by the given oracle.
    pub fn new(oracle: Oracle) -> Self {
        Self {
            oracle,
            cut_ids: IdGenerator::default(),
        }
    }

    /// Segment the novel into ordered cuts.
    ///
    /// When the oracle is unavailable or returns nothing usable, the whole
    /// text becomes a single cut: the pipeline always has at least one cut
    /// to process.
    #[tracing::instrument(skip_all, fields(text_length = novel_text.len()))]
    pub async fn segment(&mut self, novel_text: &str) -> Vec<Cut> {
        self.cut_ids.reset();
        let prompt = format!(
            r#"Split the "novel text" below into individual webtoon cuts (panels).
Divide at changes of time, place, major event, or narrative turn.
Respond with a JSON array, one object per cut, with these keys:
- "id_placeholder": a temporary id such as "temp_id_1" (real ids are assigned later).
- "text": the novel text belonging to that cut.

[Novel text]
---
{novel_text}
---

[Response format] Output ONLY a JSON array of objects, for example:
[
{{"id_placeholder": "temp_id_1", "text": "contents of the first cut..."}},
{{"id_placeholder": "temp_id_2", "text": "contents of the second cut..."}}
]
"#
        );

        let raw: Vec<RawCut> = self.oracle.invoke_list(&prompt, "scene segmentation").await;

        let mut cuts: Vec<Cut> = raw
            .into_iter()
            .filter(|scene| !scene.text.trim().is_empty())
            .map(|scene| Cut {
                id: CutId::from_index(self.cut_ids.next()),
                text: scene.text,
            })
            .collect();

        if cuts.is_empty() {
            tracing::warn!("segmentation produced no cuts, falling back to a single cut");
            cuts.push(Cut {
                id: CutId::from_index(self.cut_ids.next()),
                text: novel_text.to_string(),
            });
        }

        tracing::info!(cut_count = cuts.len(), "segmented novel into cuts");
        cuts
    }
}
