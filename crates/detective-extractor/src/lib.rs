//! Sentiment Detective Extractor
//!
//! Converts free-form customer feedback into a structured
//! [`AnalysisResult`](detective_domain::AnalysisResult) using a hosted
//! language model.
//!
//! # Architecture
//!
//! ```text
//! Text → prompt → Completion → depth-balanced object scan → AnalysisResult
//! ```
//!
//! The model is asked to respond with a single JSON object carrying exactly
//! four keys (sentiment, sentiment_score, topics, urgency). Because models
//! routinely wrap that object in commentary or markdown fencing anyway, the
//! parser locates the first brace-delimited object by tracking brace depth
//! rather than trusting the response shape. A response with no parsable
//! object degrades to a well-defined fallback record carrying a diagnostic
//! and the raw model output; it is never an error.
//!
//! Completion-capability failures (network, throttling, auth) are the only
//! error path and propagate to the caller.

#![warn(missing_docs)]

mod analyzer;
mod config;
mod error;
mod parser;
mod prompt;


pub use analyzer::FeedbackAnalyzer;
pub use config::AnalyzerConfig;
pub use error::AnalyzeError;
pub use parser::parse_analysis;
pub use prompt::feedback_prompt;
