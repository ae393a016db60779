//! Error types for the Vignette library.
//!
//! This crate provides the foundation error types used throughout the
//! Vignette workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use vignette_error::{VignetteResult, HttpError};
//!
//! fn fetch_data() -> VignetteResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod config;
mod error;
mod http;
mod json;
mod oracle;
mod stability;
mod storyboard;

pub use backend::BackendError;
pub use config::ConfigError;
pub use error::{VignetteError, VignetteErrorKind, VignetteResult};
pub use http::HttpError;
pub use json::JsonError;
pub use oracle::{OracleError, OracleErrorKind, OracleResult};
pub use stability::{StabilityError, StabilityErrorKind};
pub use storyboard::{StoryboardError, StoryboardErrorKind};
