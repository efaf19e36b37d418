//! Core analyzer implementation

use crate::config::AnalyzerConfig;
use crate::error::AnalyzeError;
use crate::parser::parse_analysis;
use crate::prompt::feedback_prompt;
use detective_domain::traits::Completion;
use detective_domain::AnalysisResult;
use tracing::{debug, info, warn};

/// Analyzes feedback text into a structured [`AnalysisResult`]
///
/// Generic over the completion capability so tests can substitute a mock
/// provider for the hosted endpoint.
pub struct FeedbackAnalyzer<C>
where
    C: Completion,
{
    llm: C,
    config: AnalyzerConfig,
}

impl<C> FeedbackAnalyzer<C>
where
    C: Completion,
    C::Error: std::fmt::Display,
{
    /// Create a new analyzer
    pub fn new(llm: C, config: AnalyzerConfig) -> Self {
        Self { llm, config }
    }

    /// Analyze one piece of feedback text
    ///
    /// Builds the fixed analysis prompt, invokes the completion capability
    /// with deterministic decoding, and parses the response. A completion
    /// failure is fatal and propagates; a response that cannot be parsed
    /// degrades to the fallback record and is still `Ok`.
    pub fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalyzeError> {
        info!("analyzing feedback, text length {}", text.len());

        let prompt = feedback_prompt(text);
        debug!("prompt length: {} chars", prompt.len());

        let output = self
            .llm
            .complete(&prompt, &self.config.generation_options())
            .map_err(|e| AnalyzeError::Completion(e.to_string()))?;

        debug!("model output length: {} chars", output.len());

        let result = parse_analysis(&output);
        if result.error.is_some() {
            warn!("extraction fell back to the failure record");
        } else {
            info!(
                "extracted sentiment '{}' (score {:.2}), urgency '{}', {} topic(s)",
                result.sentiment,
                result.sentiment_score,
                result.urgency,
                result.topics.len()
            );
        }

        Ok(result)
    }
}
