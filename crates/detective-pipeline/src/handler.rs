//! The per-record processing loop

use crate::error::PipelineError;
use crate::intake::{decode_text, Event, EventRecord};
use detective_domain::traits::{AlertChannel, BlobStore, Completion, MetricsSink, ResultStore};
use detective_extractor::FeedbackAnalyzer;
use detective_notify::dispatch;
use tracing::{error, info};

/// Outcome of processing one event batch
///
/// The triggering system only sees overall success; there is no structured
/// per-record report beyond the counts in the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineResponse {
    /// HTTP-style status code; always 200 once the batch loop completes
    pub status_code: u16,
    /// Informational summary of the batch
    pub message: String,
}

/// The assembled pipeline: one handle per external capability
///
/// Handles are constructed once at process start and passed in, so every
/// capability is substitutable by a test double. Records are processed
/// strictly sequentially, each fully completing before the next begins.
pub struct Pipeline<B, C, S, A, M>
where
    B: BlobStore,
    C: Completion,
    S: ResultStore,
    A: AlertChannel,
    M: MetricsSink,
{
    blobs: B,
    analyzer: FeedbackAnalyzer<C>,
    store: S,
    alerts: A,
    metrics: M,
}

impl<B, C, S, A, M> Pipeline<B, C, S, A, M>
where
    B: BlobStore,
    C: Completion,
    S: ResultStore,
    A: AlertChannel,
    M: MetricsSink,
    B::Error: std::fmt::Display,
    C::Error: std::fmt::Display,
    S::Error: std::fmt::Display,
    A::Error: std::fmt::Display,
    M::Error: std::fmt::Display,
{
    /// Assemble a pipeline from its capability handles
    pub fn new(blobs: B, analyzer: FeedbackAnalyzer<C>, store: S, alerts: A, metrics: M) -> Self {
        Self {
            blobs,
            analyzer,
            store,
            alerts,
            metrics,
        }
    }

    /// Process one event batch
    ///
    /// Each record runs in its own failure boundary: a failing record is
    /// logged at error level and counted, and the remaining records still
    /// run.
    pub fn handle(&mut self, event: &Event) -> PipelineResponse {
        let mut processed = 0usize;
        let mut failed = 0usize;

        for record in &event.records {
            match self.process_record(record) {
                Ok(()) => processed += 1,
                Err(e) => {
                    error!("record '{}' failed: {}", record.key, e);
                    failed += 1;
                }
            }
        }

        info!("batch complete: {} processed, {} failed", processed, failed);

        PipelineResponse {
            status_code: 200,
            message: format!("Processing complete: {} processed, {} failed.", processed, failed),
        }
    }

    /// Run one record through fetch → decode → analyze → store → dispatch
    fn process_record(&mut self, record: &EventRecord) -> Result<(), PipelineError> {
        let incoming = record.incoming()?;
        info!(
            "processing '{}' from container '{}'",
            incoming.object_key, incoming.source_container
        );

        let bytes = self
            .blobs
            .fetch(&incoming.source_container, &incoming.object_key)
            .map_err(|e| PipelineError::Blob(e.to_string()))?;
        let text = decode_text(&bytes);

        let analysis = self.analyzer.analyze(&text)?;

        self.store
            .put_result(&incoming.object_key, &analysis)
            .map_err(|e| PipelineError::Store(e.to_string()))?;

        let outcome = dispatch(&analysis, &self.metrics, &self.alerts)?;
        info!(
            "stored '{}' (metric: {}, alert: {})",
            incoming.object_key, outcome.metric_emitted, outcome.alert_sent
        );

        Ok(())
    }
}
