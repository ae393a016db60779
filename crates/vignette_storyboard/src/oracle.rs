//! Degrade-to-fallback wrapper around an inference driver.

use crate::extraction::{extract_json, parse_json};
use std::sync::Arc;
use vignette_core::{GenerateRequest, Message};
use vignette_interface::InferenceDriver;

/// Task-level oracle client.
///
/// Wraps an optional [`InferenceDriver`] and turns every failure mode
/// (missing driver, transport error, empty response, unparseable payload)
/// into the calling task's documented fallback value. Nothing is retried
/// and nothing is raised; the raw offending response is retained in the
/// logs for diagnostics.
///
/// Construct with [`Oracle::disabled`] to run the whole pipeline without
/// credentials: every task then returns its fallback immediately.
#[derive(Clone)]
pub struct Oracle {
    driver: Option<Arc<dyn InferenceDriver>>,
}

impl std::fmt::Debug for Oracle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Oracle")
            .field("enabled", &self.driver.is_some())
            .finish()
    }
}

impl Oracle {
    /// Create an oracle backed by the given driver.
    pub fn new(driver: Arc<dyn InferenceDriver>) -> Self {
        Self {
            driver: Some(driver),
        }
    }

    /// Create an oracle with no backing driver.
    ///
    /// Every invocation returns its fallback value without an API call.
    pub fn disabled() -> Self {
        Self { driver: None }
    }

    /// Whether a driver is configured.
    pub fn is_enabled(&self) -> bool {
        self.driver.is_some()
    }

    /// Run one prompt through the driver, returning the raw response text.
    ///
    /// Returns `None` on any failure, after logging it.
    async fn call(&self, prompt: &str, task: &str) -> Option<String> {
        let driver = match &self.driver {
            Some(driver) => driver,
            None => {
                tracing::debug!(task, "oracle disabled, using fallback");
                return None;
            }
        };

        let request = GenerateRequest::builder()
            .messages(vec![Message::user(prompt)])
            .build()
            .ok()?;

        match driver.generate(&request).await {
            Ok(response) => match response.text() {
                Some(text) if !text.trim().is_empty() => Some(text),
                _ => {
                    tracing::warn!(task, "oracle returned no text output");
                    None
                }
            },
            Err(e) => {
                tracing::warn!(task, error = %e, "oracle call failed");
                None
            }
        }
    }

    /// Invoke a task whose fallback is an empty list.
    ///
    /// Used for scene segmentation, character mention enumeration,
    /// dialogue separation, and bubble guidance.
    #[tracing::instrument(skip(self, prompt))]
    pub async fn invoke_list<T>(&self, prompt: &str, task: &'static str) -> Vec<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let Some(raw) = self.call(prompt, task).await else {
            return Vec::new();
        };

        match extract_json(&raw).and_then(|json| parse_json::<Vec<T>>(&json)) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(
                    task,
                    error = %e,
                    raw_preview = %raw.chars().take(200).collect::<String>(),
                    "malformed oracle response, using empty list"
                );
                Vec::new()
            }
        }
    }

    /// Invoke a task whose fallback is an empty descriptor.
    ///
    /// Used for composition and background extraction.
    #[tracing::instrument(skip(self, prompt))]
    pub async fn invoke_map<T>(&self, prompt: &str, task: &'static str) -> T
    where
        T: serde::de::DeserializeOwned + Default,
    {
        let Some(raw) = self.call(prompt, task).await else {
            return T::default();
        };

        match extract_json(&raw).and_then(|json| parse_json::<T>(&json)) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(
                    task,
                    error = %e,
                    raw_preview = %raw.chars().take(200).collect::<String>(),
                    "malformed oracle response, using empty descriptor"
                );
                T::default()
            }
        }
    }

    /// Invoke a free-text task with no structured shape.
    ///
    /// Used for prompt enhancement; `None` means the caller keeps
    /// whatever text it already has.
    #[tracing::instrument(skip(self, prompt))]
    pub async fn invoke_text(&self, prompt: &str, task: &'static str) -> Option<String> {
        self.call(prompt, task)
            .await
            .map(|text| text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vignette_core::Composition;

    #[tokio::test]
    async fn disabled_oracle_returns_list_fallback() {
        let oracle = Oracle::disabled();
        let items: Vec<serde_json::Value> = oracle.invoke_list("prompt", "dialogue separation").await;
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn disabled_oracle_returns_map_fallback() {
        let oracle = Oracle::disabled();
        let composition: Composition = oracle.invoke_map("prompt", "composition").await;
        assert!(composition.is_empty());
    }

    #[tokio::test]
    async fn disabled_oracle_returns_no_text() {
        let oracle = Oracle::disabled();
        assert!(oracle.invoke_text("prompt", "prompt enhancement").await.is_none());
    }
}
