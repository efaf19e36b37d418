//! The notification unit consumed by the pipeline

/// One notification record naming a stored blob
///
/// Ephemeral: constructed per processing unit from the trigger payload and
/// never persisted. The `object_key` is already URL-decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingRecord {
    /// Container (bucket) holding the blob
    pub source_container: String,
    /// Decoded key of the blob within the container
    pub object_key: String,
}

impl IncomingRecord {
    /// Create a record from a container name and a decoded key
    pub fn new(source_container: impl Into<String>, object_key: impl Into<String>) -> Self {
        Self {
            source_container: source_container.into(),
            object_key: object_key.into(),
        }
    }
}
