//! Hosted completion endpoint over HTTP
//!
//! Invokes a hosted text-generation model with a prompt and decoding
//! parameters and returns the generated text. The wire shape matches the
//! instruct-model invoke API: a JSON body with `prompt`, `max_gen_len` and
//! `temperature`, answered by a JSON envelope carrying `generation`.
//!
//! Invocation failures (network, throttling, auth) surface as errors and
//! are not retried here; the pipeline treats them as fatal for the record
//! being processed.

use crate::LlmError;
use detective_domain::traits::{Completion, GenerationOptions};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default timeout for completion requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP client for a hosted completion endpoint
pub struct CompletionEndpoint {
    endpoint: String,
    model_id: String,
    client: reqwest::blocking::Client,
}

/// Request body for the invoke API
#[derive(Serialize)]
struct InvokeRequest<'a> {
    prompt: &'a str,
    max_gen_len: u32,
    temperature: f32,
}

/// Response envelope from the invoke API
#[derive(Deserialize)]
struct InvokeResponse {
    generation: String,
}

impl CompletionEndpoint {
    /// Create a new endpoint client
    ///
    /// # Parameters
    ///
    /// - `endpoint`: base URL of the model service
    /// - `model_id`: model to invoke (e.g., "meta.llama3-8b-instruct-v1:0")
    pub fn new(endpoint: impl Into<String>, model_id: impl Into<String>) -> Result<Self, LlmError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| LlmError::Communication(format!("Failed to build client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into(),
            model_id: model_id.into(),
            client,
        })
    }

    /// Invoke the model and return the generated text
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is unreachable, the model is not
    /// available, the request is throttled, or the response envelope does
    /// not parse.
    pub fn invoke(&self, prompt: &str, options: &GenerationOptions) -> Result<String, LlmError> {
        let url = format!("{}/model/{}/invoke", self.endpoint, self.model_id);

        let body = InvokeRequest {
            prompt,
            max_gen_len: options.max_gen_len,
            temperature: options.temperature,
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            let envelope: InvokeResponse = response
                .json()
                .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;
            Ok(envelope.generation)
        } else if status == reqwest::StatusCode::NOT_FOUND {
            Err(LlmError::ModelNotAvailable(self.model_id.clone()))
        } else if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            Err(LlmError::Throttled)
        } else {
            let error_text = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(LlmError::Communication(format!(
                "HTTP {}: {}",
                status, error_text
            )))
        }
    }
}

impl Completion for CompletionEndpoint {
    type Error = LlmError;

    fn complete(&self, prompt: &str, options: &GenerationOptions) -> Result<String, Self::Error> {
        self.invoke(prompt, options)
    }
}
