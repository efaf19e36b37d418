//! Sentiment Detective Notification Layer
//!
//! Inspects a finished analysis and raises the configured side effects:
//!
//! - negative sentiment increments the `NegativeSentimentCount` counter in
//!   the `SentimentDetective` namespace
//! - high urgency publishes a formatted alert to the notification channel
//!
//! The two checks are independent; both, either, or neither may fire for a
//! record. Both are fire-and-forget single calls with no retry.

#![warn(missing_docs)]

pub mod channel;
pub mod metrics;
pub mod webhook;

use detective_domain::traits::{AlertChannel, MetricsSink};
use detective_domain::{AnalysisResult, Sentiment, Urgency};
use thiserror::Error;
use tracing::info;

pub use channel::MemoryChannel;
pub use metrics::CounterSink;
pub use webhook::WebhookChannel;

/// Metric namespace for pipeline counters
pub const METRIC_NAMESPACE: &str = "SentimentDetective";

/// Counter incremented for each negative-sentiment record
pub const NEGATIVE_SENTIMENT_METRIC: &str = "NegativeSentimentCount";

/// Fixed subject line for high-urgency alerts
pub const ALERT_SUBJECT: &str = "High Urgency Customer Feedback Detected";

/// Errors that can occur while raising notifications
#[derive(Error, Debug)]
pub enum NotifyError {
    /// Metrics sink failure
    #[error("Metrics error: {0}")]
    Metrics(String),

    /// Alert channel failure
    #[error("Alert error: {0}")]
    Alert(String),
}

/// What a dispatch actually raised
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dispatch {
    /// The negative-sentiment counter was incremented
    pub metric_emitted: bool,
    /// An alert was published
    pub alert_sent: bool,
}

/// Inspect an analysis and raise metrics and alerts per thresholds
///
/// Classification is pure; the enums guarantee label validity, so a record
/// that came through the fallback path (unknown/low) fires nothing.
pub fn dispatch<M, A>(
    result: &AnalysisResult,
    metrics: &M,
    alerts: &A,
) -> Result<Dispatch, NotifyError>
where
    M: MetricsSink,
    A: AlertChannel,
    M::Error: std::fmt::Display,
    A::Error: std::fmt::Display,
{
    let mut outcome = Dispatch::default();

    if result.sentiment == Sentiment::Negative {
        metrics
            .incr(METRIC_NAMESPACE, NEGATIVE_SENTIMENT_METRIC, 1)
            .map_err(|e| NotifyError::Metrics(e.to_string()))?;
        outcome.metric_emitted = true;
        info!("negative sentiment counter incremented");
    }

    if result.urgency == Urgency::High {
        alerts
            .publish(ALERT_SUBJECT, &alert_message(result))
            .map_err(|e| NotifyError::Alert(e.to_string()))?;
        outcome.alert_sent = true;
        info!("high-urgency alert published");
    }

    Ok(outcome)
}

/// Format the high-urgency alert body
fn alert_message(result: &AnalysisResult) -> String {
    let topics = if result.topics.is_empty() {
        "n/a".to_string()
    } else {
        result.topics.join(", ")
    };

    format!(
        "High urgency issue detected!\n\nSentiment: {}\nTopics: {}\nUrgency: {}",
        result.sentiment.label(),
        topics,
        result.urgency.label()
    )
}
