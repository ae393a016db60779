//! Shared test support: a scripted inference driver.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use vignette_core::{GenerateRequest, GenerateResponse, Output};
use vignette_error::{BackendError, VignetteResult};
use vignette_interface::InferenceDriver;
use vignette_storyboard::Oracle;

/// Driver that replays a fixed queue of canned responses in order.
///
/// Once the queue runs dry, further calls fail, which the oracle layer
/// downgrades to the task fallback.
pub struct ScriptedDriver {
    responses: Mutex<VecDeque<String>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedDriver {
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: Mutex::new(responses.into_iter().map(Into::into).collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// The prompts received so far, for call-order assertions.
    #[allow(dead_code)]
    pub fn prompts(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceDriver for ScriptedDriver {
    async fn generate(&self, req: &GenerateRequest) -> VignetteResult<GenerateResponse> {
        let prompt = req
            .messages
            .iter()
            .flat_map(|m| &m.content)
            .filter_map(|input| match input {
                vignette_core::Input::Text(text) => Some(text.clone()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n");
        self.calls.lock().unwrap().push(prompt);

        match self.responses.lock().unwrap().pop_front() {
            Some(text) => Ok(GenerateResponse {
                outputs: vec![Output::Text(text)],
            }),
            None => Err(BackendError::new("scripted responses exhausted").into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-test-model"
    }
}

/// Oracle over a scripted driver, plus a handle to the driver.
#[allow(dead_code)]
pub fn scripted_oracle<I, S>(responses: I) -> (Oracle, Arc<ScriptedDriver>)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let driver = Arc::new(ScriptedDriver::new(responses));
    (Oracle::new(driver.clone()), driver)
}
