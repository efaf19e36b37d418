//! Sentiment Detective Pipeline
//!
//! The event-triggered orchestration layer: decodes a batch of blob
//! notifications, and for each record fetches the blob, decodes it to
//! text, analyzes it, persists the result, and raises alerts and metrics.
//!
//! # Flow
//!
//! ```text
//! Event → fetch blob → decode text → analyze → store → dispatch
//! ```
//!
//! Records run strictly one after another; each fully completes before the
//! next begins. A failing record is logged and counted, and the remaining
//! records still run - the batch as a whole always answers with status 200
//! and a processed/failed summary.

#![warn(missing_docs)]

pub mod blob;
pub mod config;
pub mod error;
pub mod handler;
pub mod intake;

pub use blob::FsBlobStore;
pub use config::{ConfigError, PipelineConfig};
pub use error::PipelineError;
pub use handler::{Pipeline, PipelineResponse};
pub use intake::{decode_text, Event, EventRecord, IntakeError};
