//! Sentiment Detective CLI
//!
//! Processes one event batch: reads the trigger payload from a JSON file,
//! assembles the pipeline from environment configuration, and prints the
//! batch summary.

use anyhow::Context;
use clap::Parser;
use detective_extractor::{AnalyzerConfig, FeedbackAnalyzer};
use detective_llm::CompletionEndpoint;
use detective_notify::{CounterSink, WebhookChannel, METRIC_NAMESPACE, NEGATIVE_SENTIMENT_METRIC};
use detective_pipeline::{Event, FsBlobStore, Pipeline, PipelineConfig};
use detective_store::SqliteStore;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "detective", about = "Analyze uploaded feedback blobs with a hosted model")]
struct Cli {
    /// Path to the event payload JSON
    #[arg(long)]
    event: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = PipelineConfig::from_env()?;

    let payload = std::fs::read_to_string(&cli.event)
        .with_context(|| format!("Failed to read event file {}", cli.event.display()))?;
    let event: Event = serde_json::from_str(&payload).context("Failed to parse event payload")?;

    let llm = CompletionEndpoint::new(&config.model_endpoint, &config.model_id)?;
    let analyzer = FeedbackAnalyzer::new(llm, AnalyzerConfig::default());
    let store = SqliteStore::new(&config.db_path)?;
    let alerts = WebhookChannel::new(&config.alert_url)?;
    let metrics = CounterSink::new();
    let blobs = FsBlobStore::new(&config.blob_root);

    let mut pipeline = Pipeline::new(blobs, analyzer, store, alerts, metrics.clone());
    let response = pipeline.handle(&event);

    info!(
        "negative sentiment events this run: {}",
        metrics.count(METRIC_NAMESPACE, NEGATIVE_SENTIMENT_METRIC)
    );
    println!("{}", response.message);

    Ok(())
}
