//! Input types for oracle requests.

use crate::MediaSource;
use serde::{Deserialize, Serialize};

/// Supported input types to the inference oracle.
///
/// # Examples
///
/// ```
/// use vignette_core::{Input, MediaSource};
///
/// // Text input
/// let text = Input::Text("Describe this panel.".to_string());
///
/// // Image input with URL
/// let image = Input::Image {
///     mime: Some("image/png".to_string()),
///     source: MediaSource::Url("https://example.com/panel.png".to_string()),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Input {
    /// Plain text input.
    Text(String),

    /// Image input (PNG, JPEG, WebP, etc.).
    Image {
        /// MIME type, e.g., "image/png" or "image/jpeg"
        mime: Option<String>,
        /// Media source (URL, base64, or raw bytes)
        source: MediaSource,
    },
}
