//! Error types for the analyzer

use thiserror::Error;

/// Errors that can occur during feedback analysis
///
/// A model response that fails to parse is not an error - it degrades to
/// the fallback record. Only the completion invocation itself can fail.
#[derive(Error, Debug)]
pub enum AnalyzeError {
    /// Completion capability failure (network, throttling, auth)
    #[error("Completion error: {0}")]
    Completion(String),
}
