//! Storyboard extraction error types.

/// Specific error conditions for storyboard operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StoryboardErrorKind {
    /// No JSON payload could be located in an oracle response
    #[display("No JSON found in oracle response (length: {})", _0)]
    NoJsonFound(usize),
    /// A located JSON payload failed to parse into the expected shape
    #[display("Failed to parse oracle JSON: {}", _0)]
    JsonParse(String),
    /// Artifact output failed
    #[display("Failed to write artifact '{}': {}", path, message)]
    ArtifactWrite {
        /// Destination path
        path: String,
        /// Error message
        message: String,
    },
}

/// Error type for storyboard operations.
///
/// # Examples
///
/// ```
/// use vignette_error::{StoryboardError, StoryboardErrorKind};
///
/// let err = StoryboardError::new(StoryboardErrorKind::NoJsonFound(42));
/// assert!(format!("{}", err).contains("No JSON"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storyboard Error: {} at line {} in {}", kind, line, file)]
pub struct StoryboardError {
    /// The specific error condition
    pub kind: StoryboardErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl StoryboardError {
    /// Create a new StoryboardError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoryboardErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
