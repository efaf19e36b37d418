//! Sentiment Detective Domain Layer
//!
//! This crate contains the core data model for the feedback analysis
//! pipeline. It has zero external dependencies and defines the value types
//! and trait interfaces that all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **AnalysisResult**: the canonical record extracted from one piece of
//!   feedback - sentiment, score, topics, urgency
//! - **StoredItem**: the persisted projection of an analysis, keyed by the
//!   source object identifier (last-write-wins)
//! - **IncomingRecord**: one notification unit naming a stored blob
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure data types and classification logic only
//! - Infrastructure implementations (blob fetch, model endpoint, record
//!   store, alerting, metrics) live in other crates behind the traits in
//!   [`traits`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod record;
pub mod traits;

// Re-exports for convenience
pub use analysis::{AnalysisResult, Sentiment, StoredItem, Urgency, PARSE_FAILURE_DIAGNOSTIC};
pub use record::IncomingRecord;
pub use traits::GenerationOptions;
