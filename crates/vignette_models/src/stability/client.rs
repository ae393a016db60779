//! Stability AI REST client.

use super::types::{ArtifactsResponse, TextPrompt, TextToImageRequest};
use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use tracing::instrument;
use vignette_error::{StabilityError, StabilityErrorKind, VignetteResult};
use vignette_interface::{ImageSynthesizer, RenderConfig};

/// Default API host.
const STABILITY_API_HOST: &str = "https://api.stability.ai";

/// Client for the Stability AI text-to-image API.
///
/// One request maps to one `POST /v1/generation/{engine_id}/text-to-image`
/// call. Failures never propagate past the pipeline: a cut whose render
/// fails simply ships without an image.
#[derive(Debug, Clone)]
pub struct StabilityClient {
    http: reqwest::Client,
    host: String,
}

impl Default for StabilityClient {
    fn default() -> Self {
        Self::new()
    }
}

impl StabilityClient {
    /// Create a client against the production API host.
    pub fn new() -> Self {
        Self::with_host(STABILITY_API_HOST)
    }

    /// Create a client against a custom host (used by tests).
    pub fn with_host(host: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            host: host.into(),
        }
    }

    /// Default dimensions for an engine family.
    ///
    /// SDXL and SD3 engines generate 1024x1024 by default; earlier models
    /// use 512x512.
    fn default_dimensions(engine_id: &str) -> (u32, u32) {
        if engine_id.contains("stable-diffusion-3") || engine_id.contains("xl") {
            (1024, 1024)
        } else {
            (512, 512)
        }
    }

    fn build_payload(prompt: &str, config: &RenderConfig) -> TextToImageRequest {
        let (default_width, default_height) = Self::default_dimensions(&config.engine_id);

        let mut text_prompts = vec![TextPrompt {
            text: prompt.to_string(),
            weight: 1.0,
        }];
        if let Some(negative) = &config.negative_prompt {
            text_prompts.push(TextPrompt {
                text: negative.clone(),
                weight: -1.0,
            });
        }

        TextToImageRequest {
            text_prompts,
            cfg_scale: config.cfg_scale,
            height: config.height.unwrap_or(default_height),
            width: config.width.unwrap_or(default_width),
            samples: config.samples,
            steps: config.steps,
            seed: (config.seed != 0).then_some(config.seed),
            style_preset: config.style_preset,
            sampler: config.sampler.clone(),
        }
    }

    async fn synthesize_internal(
        &self,
        prompt: &str,
        config: &RenderConfig,
    ) -> Result<Vec<Vec<u8>>, StabilityError> {
        if config.api_key.trim().is_empty() {
            return Err(StabilityError::new(StabilityErrorKind::MissingApiKey));
        }
        if config.engine_id.trim().is_empty() {
            return Err(StabilityError::new(StabilityErrorKind::MissingEngineId));
        }

        let payload = Self::build_payload(prompt, config);
        let url = format!(
            "{}/v1/generation/{}/text-to-image",
            self.host, config.engine_id
        );

        tracing::info!(
            engine = %config.engine_id,
            samples = payload.samples,
            width = payload.width,
            height = payload.height,
            steps = payload.steps,
            "requesting image generation"
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(&config.api_key)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| StabilityError::new(StabilityErrorKind::Transport(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StabilityError::new(StabilityErrorKind::HttpError {
                status_code: status.as_u16(),
                body,
            }));
        }

        let artifacts: ArtifactsResponse = response
            .json()
            .await
            .map_err(|e| StabilityError::new(StabilityErrorKind::Transport(e.to_string())))?;

        let mut images = Vec::new();
        for artifact in &artifacts.artifacts {
            if artifact.is_success() {
                if let Some(encoded) = &artifact.base64 {
                    let bytes = BASE64.decode(encoded).map_err(|e| {
                        StabilityError::new(StabilityErrorKind::Decode(e.to_string()))
                    })?;
                    images.push(bytes);
                }
            } else if artifact.is_filtered() {
                tracing::warn!("an artifact was removed by the content policy");
            } else {
                tracing::warn!(
                    finish_reason = ?artifact.finish_reason,
                    "artifact did not complete"
                );
            }
        }

        if images.is_empty() {
            return Err(StabilityError::new(StabilityErrorKind::NoArtifacts));
        }

        tracing::info!(count = images.len(), "decoded generated images");
        Ok(images)
    }
}

#[async_trait]
impl ImageSynthesizer for StabilityClient {
    #[instrument(skip_all, fields(engine = %config.engine_id))]
    async fn synthesize(
        &self,
        prompt: &str,
        config: &RenderConfig,
    ) -> VignetteResult<Vec<Vec<u8>>> {
        self.synthesize_internal(prompt, config)
            .await
            .map_err(Into::into)
    }

    fn service_name(&self) -> &'static str {
        "stability"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vignette_error::VignetteErrorKind;

    fn config(api_key: &str, engine_id: &str) -> RenderConfig {
        RenderConfig::builder()
            .api_key(api_key.to_string())
            .engine_id(engine_id.to_string())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn missing_api_key_is_a_precondition_failure() {
        let client = StabilityClient::new();
        let err = client
            .synthesize("a rainy office", &config("", "stable-diffusion-xl-1024-v1-0"))
            .await
            .unwrap_err();
        assert!(matches!(err.kind(), VignetteErrorKind::Stability(_)));
    }

    #[tokio::test]
    async fn missing_engine_id_is_a_precondition_failure() {
        let client = StabilityClient::new();
        assert!(client.synthesize("a rainy office", &config("key", "")).await.is_err());
    }

    #[test]
    fn sdxl_defaults_to_1024() {
        assert_eq!(
            StabilityClient::default_dimensions("stable-diffusion-xl-1024-v1-0"),
            (1024, 1024)
        );
        assert_eq!(
            StabilityClient::default_dimensions("stable-diffusion-3-medium"),
            (1024, 1024)
        );
        assert_eq!(
            StabilityClient::default_dimensions("stable-diffusion-v1-6"),
            (512, 512)
        );
    }

    #[test]
    fn negative_prompt_gets_negative_weight() {
        let mut cfg = config("key", "stable-diffusion-v1-6");
        cfg.negative_prompt = Some("blurry, low quality".to_string());
        let payload = StabilityClient::build_payload("a rainy office", &cfg);
        assert_eq!(payload.text_prompts.len(), 2);
        assert_eq!(payload.text_prompts[1].weight, -1.0);
        assert_eq!(payload.width, 512);
    }
}
