//! Trait definitions for external capabilities
//!
//! These traits define the boundaries between the pipeline logic and the
//! managed services it consumes. Infrastructure implementations live in
//! other crates; each trait is trivially substitutable by a test double.

use crate::analysis::{AnalysisResult, StoredItem};

/// Decoding parameters passed to the completion capability
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationOptions {
    /// Generation-length cap, in tokens
    pub max_gen_len: u32,
    /// Sampling temperature; `0.0` for deterministic decoding
    pub temperature: f32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            max_gen_len: 512,
            temperature: 0.0,
        }
    }
}

/// Trait for fetching raw blob bytes by container and key
///
/// Implemented by the infrastructure layer (detective-pipeline)
pub trait BlobStore {
    /// Error type for fetch operations
    type Error;

    /// Fetch the raw bytes of the named blob
    fn fetch(&self, container: &str, key: &str) -> Result<Vec<u8>, Self::Error>;
}

/// Trait for the opaque text-completion capability
///
/// Implemented by the infrastructure layer (detective-llm)
pub trait Completion {
    /// Error type for completion operations
    type Error;

    /// Generate a text completion for the prompt
    fn complete(&self, prompt: &str, options: &GenerationOptions) -> Result<String, Self::Error>;
}

/// Trait for the upsert-by-key record store
///
/// Implemented by the infrastructure layer (detective-store)
pub trait ResultStore {
    /// Error type for store operations
    type Error;

    /// Upsert the persisted projection of `result` under `id`
    ///
    /// Fully overwrites any prior item with the same identifier. Returns
    /// the item as persisted.
    fn put_result(&mut self, id: &str, result: &AnalysisResult) -> Result<StoredItem, Self::Error>;

    /// Retrieve an item by identifier
    fn get_result(&self, id: &str) -> Result<Option<StoredItem>, Self::Error>;
}

/// Trait for publishing alerts to a fixed notification destination
///
/// Implemented by the infrastructure layer (detective-notify)
pub trait AlertChannel {
    /// Error type for publish operations
    type Error;

    /// Publish a message with a subject line, fire-and-forget
    fn publish(&self, subject: &str, message: &str) -> Result<(), Self::Error>;
}

/// Trait for incrementing named counter metrics
///
/// Implemented by the infrastructure layer (detective-notify)
pub trait MetricsSink {
    /// Error type for metric operations
    type Error;

    /// Increment the named counter within a namespace
    fn incr(&self, namespace: &str, metric: &str, value: u64) -> Result<(), Self::Error>;
}
