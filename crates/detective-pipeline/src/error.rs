//! Error types for record processing

use crate::intake::IntakeError;
use detective_extractor::AnalyzeError;
use detective_notify::NotifyError;
use thiserror::Error;

/// Errors that abort processing of a single record
///
/// Only extraction-parse failures have a recovery path, and that recovery
/// happens inside the analyzer (the fallback record). Everything here is
/// fatal for the record it occurred on; the handler logs it and moves on
/// to the next record.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Trigger payload decoding failure
    #[error(transparent)]
    Intake(#[from] IntakeError),

    /// Blob fetch failure
    #[error("Blob fetch error: {0}")]
    Blob(String),

    /// Completion invocation failure
    #[error(transparent)]
    Analyze(#[from] AnalyzeError),

    /// Record store failure
    #[error("Store error: {0}")]
    Store(String),

    /// Metric or alert failure
    #[error(transparent)]
    Notify(#[from] NotifyError),
}
