//! Filesystem-backed blob store
//!
//! Containers map to directories under a fixed root; keys map to paths
//! within the container directory.

use detective_domain::traits::BlobStore;
use std::path::{Path, PathBuf};

/// Filesystem implementation of `BlobStore`
#[derive(Debug, Clone)]
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    /// Create a store rooted at the given directory
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl BlobStore for FsBlobStore {
    type Error = std::io::Error;

    fn fetch(&self, container: &str, key: &str) -> Result<Vec<u8>, Self::Error> {
        std::fs::read(self.root.join(container).join(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_reads_bytes() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("feedback")).unwrap();
        std::fs::write(dir.path().join("feedback").join("a.txt"), b"hello").unwrap();

        let store = FsBlobStore::new(dir.path());
        assert_eq!(store.fetch("feedback", "a.txt").unwrap(), b"hello");
    }

    #[test]
    fn test_missing_blob_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsBlobStore::new(dir.path());
        assert!(store.fetch("feedback", "missing.txt").is_err());
    }
}
