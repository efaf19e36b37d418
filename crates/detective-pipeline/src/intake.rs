//! Trigger payload decoding and blob text decoding

use detective_domain::IncomingRecord;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

/// Errors that can occur while decoding the trigger payload
#[derive(Error, Debug)]
pub enum IntakeError {
    /// The URL-encoded object key did not decode to valid UTF-8
    #[error("Invalid object key '{0}': {1}")]
    InvalidKey(String, String),
}

/// The trigger payload: a batch of zero or more notification records
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    /// Notification records, processed in order
    #[serde(default)]
    pub records: Vec<EventRecord>,
}

/// One notification record as it arrives on the wire
///
/// The key is URL-encoded (`+` for space, percent sequences) and decoded
/// by [`EventRecord::incoming`].
#[derive(Debug, Clone, Deserialize)]
pub struct EventRecord {
    /// Container (bucket) holding the blob
    pub container: String,
    /// URL-encoded key of the blob
    pub key: String,
}

impl EventRecord {
    /// Decode the wire record into an [`IncomingRecord`]
    pub fn incoming(&self) -> Result<IncomingRecord, IntakeError> {
        let spaced = self.key.replace('+', " ");
        let decoded = urlencoding::decode(&spaced)
            .map_err(|e| IntakeError::InvalidKey(self.key.clone(), e.to_string()))?;
        Ok(IncomingRecord::new(self.container.clone(), decoded.into_owned()))
    }
}

/// Decode blob bytes to text: UTF-8 first, Latin-1 as the fallback
///
/// Latin-1 maps every byte to its code point, so the fallback itself
/// cannot fail; arbitrary binary input decodes to mojibake rather than
/// aborting the record.
pub fn decode_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            warn!("UTF-8 decode failed, falling back to Latin-1");
            bytes.iter().map(|&b| b as char).collect()
        }
    }
}
