//! Image generation service error types.

/// Specific error conditions for the Stability AI image service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StabilityErrorKind {
    /// API key missing from the render configuration
    #[display("Stability AI api_key missing from render configuration")]
    MissingApiKey,
    /// Engine id missing from the render configuration
    #[display("Stability AI engine_id missing from render configuration")]
    MissingEngineId,
    /// HTTP error with status code and response body
    #[display("HTTP {} error: {}", status_code, body)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Response body, retained for diagnostics
        body: String,
    },
    /// Transport-level request failure
    #[display("Request failed: {}", _0)]
    Transport(String),
    /// Every returned artifact was filtered or failed
    #[display("No successful artifacts in response")]
    NoArtifacts,
    /// Base64 decoding of an artifact failed
    #[display("Artifact decode failed: {}", _0)]
    Decode(String),
}

/// Stability AI error with source location tracking.
///
/// # Examples
///
/// ```
/// use vignette_error::{StabilityError, StabilityErrorKind};
///
/// let err = StabilityError::new(StabilityErrorKind::MissingEngineId);
/// assert!(format!("{}", err).contains("engine_id"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Stability Error: {} at line {} in {}", kind, line, file)]
pub struct StabilityError {
    /// The kind of error that occurred
    pub kind: StabilityErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StabilityError {
    /// Create a new StabilityError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StabilityErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
