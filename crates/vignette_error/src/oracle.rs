//! Inference oracle error types.

/// Specific error conditions for inference oracle calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum OracleErrorKind {
    /// API key not found in environment
    #[display("GEMINI_API_KEY environment variable not set")]
    MissingApiKey,
    /// Failed to create the underlying client
    #[display("Failed to create oracle client: {}", _0)]
    ClientCreation(String),
    /// API request failed
    #[display("Oracle API request failed: {}", _0)]
    ApiRequest(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// The response contained no usable output
    #[display("Oracle response was empty")]
    EmptyResponse,
    /// Multimodal inputs not supported by the configured backend
    #[display("Multimodal inputs not supported by this oracle backend")]
    MultimodalNotSupported,
}

/// Oracle error with source location tracking.
///
/// # Examples
///
/// ```
/// use vignette_error::{OracleError, OracleErrorKind};
///
/// let err = OracleError::new(OracleErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Oracle Error: {} at line {} in {}", kind, line, file)]
pub struct OracleError {
    /// The kind of error that occurred
    pub kind: OracleErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl OracleError {
    /// Create a new OracleError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: OracleErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for oracle client operations.
pub type OracleResult<T> = std::result::Result<T, OracleError>;
