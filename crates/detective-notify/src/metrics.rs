//! In-process counter sink
//!
//! Counters accumulate in memory and are inspectable, which makes this the
//! sink of choice for tests and for single-invocation runs where the
//! binary reports totals on exit. Clones share state through the `Arc`.

use detective_domain::traits::MetricsSink;
use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::{Arc, Mutex};

/// In-memory implementation of `MetricsSink`
#[derive(Debug, Clone, Default)]
pub struct CounterSink {
    counters: Arc<Mutex<HashMap<String, u64>>>,
}

impl CounterSink {
    /// Create a new empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a counter, zero if never incremented
    pub fn count(&self, namespace: &str, metric: &str) -> u64 {
        let counters = self.counters.lock().unwrap();
        counters.get(&Self::key(namespace, metric)).copied().unwrap_or(0)
    }

    /// Sum of all counters across namespaces
    pub fn total(&self) -> u64 {
        self.counters.lock().unwrap().values().sum()
    }

    fn key(namespace: &str, metric: &str) -> String {
        format!("{}:{}", namespace, metric)
    }
}

impl MetricsSink for CounterSink {
    type Error = Infallible;

    fn incr(&self, namespace: &str, metric: &str, value: u64) -> Result<(), Self::Error> {
        let mut counters = self.counters.lock().unwrap();
        *counters.entry(Self::key(namespace, metric)).or_insert(0) += value;
        Ok(())
    }
}
