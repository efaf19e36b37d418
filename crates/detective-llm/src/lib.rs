//! Sentiment Detective Completion Layer
//!
//! Implementations of the `Completion` trait from `detective-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: deterministic mock for testing
//! - `CompletionEndpoint`: hosted model endpoint over HTTP
//!
//! # Examples
//!
//! ```
//! use detective_llm::MockProvider;
//! use detective_domain::traits::Completion;
//! use detective_domain::GenerationOptions;
//!
//! let provider = MockProvider::new("Hello from the model!");
//! let result = provider.complete("test prompt", &GenerationOptions::default()).unwrap();
//! assert_eq!(result, "Hello from the model!");
//! ```

#![warn(missing_docs)]

pub mod endpoint;

use detective_domain::traits::{Completion, GenerationOptions};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use endpoint::CompletionEndpoint;

/// Errors that can occur during completion operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Malformed response envelope from the endpoint
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Request throttled by the endpoint
    #[error("Throttled by model endpoint")]
    Throttled,

    /// Model not available at the endpoint
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("Completion error: {0}")]
    Other(String),
}

/// Mock completion provider for deterministic testing
///
/// Returns pre-configured responses without making any network calls.
///
/// # Examples
///
/// ```
/// use detective_llm::MockProvider;
/// use detective_domain::traits::Completion;
/// use detective_domain::GenerationOptions;
///
/// let mut provider = MockProvider::new("default");
/// provider.add_response("prompt1", "response1");
///
/// let options = GenerationOptions::default();
/// assert_eq!(provider.complete("prompt1", &options).unwrap(), "response1");
/// assert_eq!(provider.complete("anything else", &options).unwrap(), "default");
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Add a specific response for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), response.into());
    }

    /// Configure the provider to fail for a specific prompt
    pub fn add_error(&mut self, prompt: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), "ERROR".to_string());
    }

    /// Get the number of times complete was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl Completion for MockProvider {
    type Error = LlmError;

    fn complete(&self, prompt: &str, _options: &GenerationOptions) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        let responses = self.responses.lock().unwrap();
        if let Some(response) = responses.get(prompt) {
            if response == "ERROR" {
                return Err(LlmError::Other("Mock error".to_string()));
            }
            return Ok(response.clone());
        }

        Ok(self.default_response.clone())
    }
}
