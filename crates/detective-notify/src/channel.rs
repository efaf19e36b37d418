//! Recording alert channel for tests and dry runs

use detective_domain::traits::AlertChannel;
use std::convert::Infallible;
use std::sync::{Arc, Mutex};

/// Alert channel that records published messages in memory
///
/// Clones share the recorded list through the `Arc`.
#[derive(Debug, Clone, Default)]
pub struct MemoryChannel {
    published: Arc<Mutex<Vec<(String, String)>>>,
}

impl MemoryChannel {
    /// Create a new empty channel
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything published so far, as `(subject, message)` pairs
    pub fn published(&self) -> Vec<(String, String)> {
        self.published.lock().unwrap().clone()
    }
}

impl AlertChannel for MemoryChannel {
    type Error = Infallible;

    fn publish(&self, subject: &str, message: &str) -> Result<(), Self::Error> {
        self.published
            .lock()
            .unwrap()
            .push((subject.to_string(), message.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_publishes_in_order() {
        let channel = MemoryChannel::new();
        channel.publish("first", "a").unwrap();
        channel.publish("second", "b").unwrap();

        let published = channel.published();
        assert_eq!(published.len(), 2);
        assert_eq!(published[0], ("first".to_string(), "a".to_string()));
        assert_eq!(published[1], ("second".to_string(), "b".to_string()));
    }
}
