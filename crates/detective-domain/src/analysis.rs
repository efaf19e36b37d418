//! The canonical analysis record and its classification enums
//!
//! An [`AnalysisResult`] is constructed fresh per processed blob, either
//! from a successfully parsed model response or from the parse-failure
//! fallback path. It is persisted and inspected immediately and never
//! retained between invocations.

use std::fmt;

/// Diagnostic string carried by the fallback record when the model output
/// could not be parsed into a structured object.
pub const PARSE_FAILURE_DIAGNOSTIC: &str = "Failed to parse model output";

/// Sentiment classification of a piece of feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    /// Positive feedback
    Positive,
    /// Negative feedback - triggers the negative-sentiment counter
    Negative,
    /// Neither clearly positive nor negative
    Neutral,
    /// The model gave no usable classification
    Unknown,
}

impl Sentiment {
    /// Parse a sentiment label, case-insensitively
    ///
    /// Anything outside the enumerated labels collapses to `Unknown`.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "positive" => Sentiment::Positive,
            "negative" => Sentiment::Negative,
            "neutral" => Sentiment::Neutral,
            _ => Sentiment::Unknown,
        }
    }

    /// The lowercase wire/storage label
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
            Sentiment::Unknown => "unknown",
        }
    }

    /// Capitalized label for human-facing alert text
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
            Sentiment::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Urgency classification of a piece of feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Urgency {
    /// No action needed
    Low,
    /// Worth a look
    Medium,
    /// Triggers an alert to the notification channel
    High,
}

impl Urgency {
    /// Parse an urgency label, case-insensitively
    ///
    /// Anything outside the enumerated labels collapses to `Low`.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "high" => Urgency::High,
            "medium" => Urgency::Medium,
            _ => Urgency::Low,
        }
    }

    /// The lowercase wire/storage label
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
        }
    }

    /// Capitalized label for human-facing alert text
    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Low => "Low",
            Urgency::Medium => "Medium",
            Urgency::High => "High",
        }
    }
}

impl Default for Urgency {
    fn default() -> Self {
        Urgency::Low
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical structured record produced by the extractor
///
/// Invariants: `sentiment` and `urgency` are always one of the enumerated
/// values, and `sentiment_score` is finite and within `[0.0, 1.0]` when the
/// record is built through [`AnalysisResult::normalized`] or
/// [`AnalysisResult::parse_failure`]. `raw_output` is present only
/// alongside `error`.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    /// Sentiment classification
    pub sentiment: Sentiment,
    /// Model confidence in the sentiment, in `[0.0, 1.0]`
    pub sentiment_score: f64,
    /// Topics mentioned in the feedback, possibly empty
    pub topics: Vec<String>,
    /// Urgency classification
    pub urgency: Urgency,
    /// Set when extraction fell back after a parse failure
    pub error: Option<String>,
    /// The unparsed model output, kept only alongside `error`
    pub raw_output: Option<String>,
}

impl AnalysisResult {
    /// Build a result from parsed model fields, normalizing the score
    ///
    /// Non-finite scores coerce to `0.0`; finite scores clamp to
    /// `[0.0, 1.0]`.
    pub fn normalized(
        sentiment: Sentiment,
        sentiment_score: f64,
        topics: Vec<String>,
        urgency: Urgency,
    ) -> Self {
        let score = if sentiment_score.is_finite() {
            sentiment_score.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            sentiment,
            sentiment_score: score,
            topics,
            urgency,
            error: None,
            raw_output: None,
        }
    }

    /// The fallback record for a model response with no parsable object
    ///
    /// Carries the full untrimmed model output in `raw_output` so the
    /// failure can be diagnosed after the fact.
    pub fn parse_failure(raw_output: impl Into<String>) -> Self {
        Self {
            sentiment: Sentiment::Unknown,
            sentiment_score: 0.0,
            topics: Vec::new(),
            urgency: Urgency::Low,
            error: Some(PARSE_FAILURE_DIAGNOSTIC.to_string()),
            raw_output: Some(raw_output.into()),
        }
    }

    /// Score as persisted: a second defensive coercion at the storage seam
    ///
    /// A record built through the normalizing constructors already holds a
    /// finite score; this guards records assembled by hand.
    pub fn storage_score(&self) -> f64 {
        if self.sentiment_score.is_finite() {
            self.sentiment_score
        } else {
            0.0
        }
    }
}

/// Persisted projection of an [`AnalysisResult`], keyed by the source
/// object identifier
///
/// Reprocessing the same identifier overwrites the prior item wholesale -
/// last write wins, no versioning.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredItem {
    /// Primary identifier: the source object key
    pub id: String,
    /// Sentiment classification
    pub sentiment: Sentiment,
    /// Normalized sentiment score
    pub sentiment_score: f64,
    /// Topics mentioned in the feedback
    pub topics: Vec<String>,
    /// Urgency classification
    pub urgency: Urgency,
}

impl StoredItem {
    /// Project an analysis onto its persisted shape
    pub fn project(id: impl Into<String>, result: &AnalysisResult) -> Self {
        Self {
            id: id.into(),
            sentiment: result.sentiment,
            sentiment_score: result.storage_score(),
            topics: result.topics.clone(),
            urgency: result.urgency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sentiment_parse_case_insensitive() {
        assert_eq!(Sentiment::parse("Negative"), Sentiment::Negative);
        assert_eq!(Sentiment::parse("POSITIVE"), Sentiment::Positive);
        assert_eq!(Sentiment::parse(" neutral "), Sentiment::Neutral);
        assert_eq!(Sentiment::parse("ambivalent"), Sentiment::Unknown);
        assert_eq!(Sentiment::parse(""), Sentiment::Unknown);
    }

    #[test]
    fn test_urgency_parse_defaults_low() {
        assert_eq!(Urgency::parse("HIGH"), Urgency::High);
        assert_eq!(Urgency::parse("Medium"), Urgency::Medium);
        assert_eq!(Urgency::parse("low"), Urgency::Low);
        assert_eq!(Urgency::parse("critical"), Urgency::Low);
        assert_eq!(Urgency::default(), Urgency::Low);
    }

    #[test]
    fn test_normalized_clamps_score() {
        let result = AnalysisResult::normalized(Sentiment::Positive, 1.7, vec![], Urgency::Low);
        assert_eq!(result.sentiment_score, 1.0);

        let result = AnalysisResult::normalized(Sentiment::Positive, -0.3, vec![], Urgency::Low);
        assert_eq!(result.sentiment_score, 0.0);

        let result =
            AnalysisResult::normalized(Sentiment::Positive, f64::NAN, vec![], Urgency::Low);
        assert_eq!(result.sentiment_score, 0.0);
    }

    #[test]
    fn test_parse_failure_shape() {
        let result = AnalysisResult::parse_failure("garbled output");
        assert_eq!(result.sentiment, Sentiment::Unknown);
        assert_eq!(result.sentiment_score, 0.0);
        assert!(result.topics.is_empty());
        assert_eq!(result.urgency, Urgency::Low);
        assert_eq!(result.error.as_deref(), Some(PARSE_FAILURE_DIAGNOSTIC));
        assert_eq!(result.raw_output.as_deref(), Some("garbled output"));
    }

    #[test]
    fn test_storage_score_coerces_non_finite() {
        let mut result = AnalysisResult::parse_failure("x");
        result.sentiment_score = f64::INFINITY;
        assert_eq!(result.storage_score(), 0.0);
        result.sentiment_score = 0.42;
        assert_eq!(result.storage_score(), 0.42);
    }

    #[test]
    fn test_projection_copies_fields() {
        let result = AnalysisResult::normalized(
            Sentiment::Negative,
            0.2,
            vec!["Billing".to_string()],
            Urgency::Medium,
        );
        let item = StoredItem::project("feedback/42.txt", &result);
        assert_eq!(item.id, "feedback/42.txt");
        assert_eq!(item.sentiment, Sentiment::Negative);
        assert_eq!(item.sentiment_score, 0.2);
        assert_eq!(item.topics, vec!["Billing".to_string()]);
        assert_eq!(item.urgency, Urgency::Medium);
    }

    proptest! {
        #[test]
        fn prop_any_label_parses_to_enumerated_value(label in ".*") {
            let sentiment = Sentiment::parse(&label);
            prop_assert!(matches!(
                sentiment,
                Sentiment::Positive | Sentiment::Negative | Sentiment::Neutral | Sentiment::Unknown
            ));
            let urgency = Urgency::parse(&label);
            prop_assert!(matches!(urgency, Urgency::Low | Urgency::Medium | Urgency::High));
        }

        #[test]
        fn prop_normalized_score_in_range(score in proptest::num::f64::ANY) {
            let result = AnalysisResult::normalized(Sentiment::Neutral, score, vec![], Urgency::Low);
            prop_assert!(result.sentiment_score >= 0.0 && result.sentiment_score <= 1.0);
        }
    }
}
