//! Google Gemini API implementation.
//!
//! This module provides a client for the Google Gemini API with support
//! for per-request model selection backed by a pool of model-specific
//! clients created lazily on first use.
//!
//! Calls are single-flight and never retried: the extraction layer above
//! treats any failure as the invoking task's fallback and moves on, so a
//! transient error costs one degraded field rather than pipeline time.
//!
//! # Example
//!
//! ```no_run
//! use vignette_models::GeminiClient;
//! use vignette_core::{GenerateRequest, Message};
//! use vignette_interface::InferenceDriver;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new()?;
//!
//! // Use the default model
//! let request = GenerateRequest::builder()
//!     .messages(vec![Message::user("Summarize this scene.")])
//!     .build()?;
//! let response = client.generate(&request).await?;
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use std::collections::HashMap;
use std::env;
use std::sync::{Arc, Mutex};
use tracing::instrument;

use gemini_rust::{Gemini, client::Model};

use vignette_core::{GenerateRequest, GenerateResponse, Input, Output, Role};
use vignette_error::{OracleError, OracleErrorKind, OracleResult, VignetteResult};
use vignette_interface::InferenceDriver;

/// Default model used when a request does not specify one.
const DEFAULT_MODEL: &str = "gemini-2.0-flash-lite";

/// Client for the Google Gemini API with per-model client pooling.
///
/// The pool maps model names to `Gemini` clients; a client is created the
/// first time a request names its model, so different extraction tasks can
/// run against different models without reconstructing anything.
pub struct GeminiClient {
    /// Cache of model-specific clients
    clients: Arc<Mutex<HashMap<String, Gemini>>>,
    /// API key for creating new clients
    api_key: String,
    /// Default model name when `req.model` is None
    model_name: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let client_count = self.clients.lock().unwrap().len();
        f.debug_struct("GeminiClient")
            .field("model_name", &self.model_name)
            .field("cached_clients", &client_count)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a new Gemini client.
    ///
    /// Reads the API key from the `GEMINI_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error when the environment variable is unset. Callers
    /// that want the degraded no-oracle pipeline should construct a
    /// disabled oracle instead of propagating this.
    #[instrument(name = "gemini_client_new")]
    pub fn new() -> VignetteResult<Self> {
        Self::new_with_model(DEFAULT_MODEL).map_err(Into::into)
    }

    /// Create a new Gemini client with a specific default model.
    pub fn new_with_model(model: impl Into<String>) -> OracleResult<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| OracleError::new(OracleErrorKind::MissingApiKey))?;

        Ok(Self {
            clients: Arc::new(Mutex::new(HashMap::new())),
            api_key,
            model_name: model.into(),
        })
    }

    /// Convert a model name string to a gemini-rust Model enum variant.
    ///
    /// Recognized names map to their enum variants; everything else uses
    /// `Model::Custom` with the "models/" prefix the API requires.
    fn model_name_to_enum(name: &str) -> Model {
        match name {
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-flash-lite" => Model::Gemini25FlashLite,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            other => {
                if other.starts_with("models/") {
                    Model::Custom(other.to_string())
                } else {
                    Model::Custom(format!("models/{}", other))
                }
            }
        }
    }

    /// Extract text content from an input.
    fn extract_text(input: &Input) -> Option<String> {
        match input {
            Input::Text(text) => Some(text.clone()),
            _ => None,
        }
    }

    /// Check if input contains non-text media.
    fn has_media(inputs: &[Input]) -> bool {
        inputs.iter().any(|i| !matches!(i, Input::Text(_)))
    }

    /// Get or create the pooled client for a model.
    fn client_for(&self, model_name: &str) -> OracleResult<Gemini> {
        let mut clients = self.clients.lock().unwrap();
        if let Some(client) = clients.get(model_name) {
            return Ok(client.clone());
        }

        let model_enum = Self::model_name_to_enum(model_name);
        let client = Gemini::with_model(&self.api_key, model_enum)
            .map_err(|e| OracleError::new(OracleErrorKind::ClientCreation(e.to_string())))?;
        clients.insert(model_name.to_string(), client.clone());
        Ok(client)
    }

    /// Internal generate method that returns oracle-specific errors.
    async fn generate_internal(&self, req: &GenerateRequest) -> OracleResult<GenerateResponse> {
        let model_name = req.model.as_deref().unwrap_or(&self.model_name);
        let client = self.client_for(model_name)?;

        let mut builder = client.generate_content();
        let mut system_prompt = None;

        for msg in &req.messages {
            match msg.role {
                Role::System => {
                    // Gemini uses a separate system prompt
                    if let Some(text) = msg.content.iter().find_map(Self::extract_text) {
                        system_prompt = Some(text);
                    }
                }
                Role::User => {
                    for input in &msg.content {
                        if let Some(text) = Self::extract_text(input) {
                            builder = builder.with_user_message(&text);
                        }
                    }

                    if Self::has_media(&msg.content) {
                        return Err(OracleError::new(OracleErrorKind::MultimodalNotSupported));
                    }
                }
                Role::Assistant => {
                    if let Some(text) = msg.content.iter().find_map(Self::extract_text) {
                        builder = builder.with_model_message(&text);
                    }
                }
            }
        }

        if let Some(prompt) = system_prompt {
            builder = builder.with_system_prompt(&prompt);
        }

        if let Some(temp) = req.temperature {
            builder = builder.with_temperature(temp);
        }

        if let Some(max_tokens) = req.max_tokens {
            builder = builder.with_max_output_tokens(max_tokens as i32);
        }

        let response = builder.execute().await.map_err(Self::parse_gemini_error)?;
        let text = response.text();

        if text.trim().is_empty() {
            return Err(OracleError::new(OracleErrorKind::EmptyResponse));
        }

        Ok(GenerateResponse {
            outputs: vec![Output::Text(text)],
        })
    }

    /// Parse gemini-rust errors to extract HTTP status codes.
    ///
    /// Converts generic API error strings into a structured error with the
    /// status code when one is present.
    fn parse_gemini_error(err: impl std::fmt::Display) -> OracleError {
        let err_msg = err.to_string();

        if let Some(status_code) = Self::extract_status_code(&err_msg) {
            OracleError::new(OracleErrorKind::HttpError {
                status_code,
                message: err_msg,
            })
        } else {
            OracleError::new(OracleErrorKind::ApiRequest(err_msg))
        }
    }

    /// Extract an HTTP status code from an error message string.
    ///
    /// Parses strings like "bad response from server; code 503;
    /// description: ..." and extracts the numeric status code.
    fn extract_status_code(error_msg: &str) -> Option<u16> {
        if let Some(code_start) = error_msg.find("code ") {
            let code_str = &error_msg[code_start + 5..];
            if let Some(end) = code_str.find(|c: char| !c.is_numeric()) {
                return code_str[..end].parse().ok();
            }
        }
        None
    }
}

#[async_trait]
impl InferenceDriver for GeminiClient {
    async fn generate(&self, req: &GenerateRequest) -> VignetteResult<GenerateResponse> {
        self.generate_internal(req).await.map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    /// Returns the default model name used when `GenerateRequest.model` is
    /// None. Individual requests may name a different model.
    fn model_name(&self) -> &str {
        &self.model_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_code_extracted_from_error_string() {
        let msg = "bad response from server; code 503; description: overloaded";
        assert_eq!(GeminiClient::extract_status_code(msg), Some(503));
    }

    #[test]
    fn no_status_code_in_plain_error() {
        assert_eq!(GeminiClient::extract_status_code("connection reset"), None);
    }

    #[test]
    fn custom_model_names_get_prefixed() {
        match GeminiClient::model_name_to_enum("gemini-2.0-flash") {
            Model::Custom(name) => assert_eq!(name, "models/gemini-2.0-flash"),
            other => panic!("expected Custom variant, got {other:?}"),
        }
    }

    #[test]
    fn prefixed_model_names_are_preserved() {
        match GeminiClient::model_name_to_enum("models/gemini-2.0-flash") {
            Model::Custom(name) => assert_eq!(name, "models/gemini-2.0-flash"),
            other => panic!("expected Custom variant, got {other:?}"),
        }
    }
}
