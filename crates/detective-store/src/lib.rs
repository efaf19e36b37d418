//! Sentiment Detective Storage Layer
//!
//! Implements the `ResultStore` trait on SQLite.
//!
//! # Semantics
//!
//! - Upsert by primary key: `INSERT OR REPLACE`, last write wins
//! - No conditional writes, no versioning
//! - Topics persist as a JSON array column
//! - The score is coerced a second time at the storage seam: a non-finite
//!   value lands as `0.0`
//!
//! # Examples
//!
//! ```no_run
//! use detective_store::SqliteStore;
//!
//! let store = SqliteStore::new("detective.db").unwrap();
//! // Store is ready for result operations
//! ```

#![warn(missing_docs)]

use detective_domain::traits::ResultStore;
use detective_domain::{AnalysisResult, Sentiment, StoredItem, Urgency};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Invalid data encountered while reading a row
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// SQLite-based implementation of `ResultStore`
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should use its own
/// `SqliteStore` instance. The pipeline processes records strictly
/// sequentially, so a single instance suffices per invocation.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a new store at the given database path
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Create an in-memory store (useful for testing)
    pub fn in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<(), StoreError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }

    fn topics_to_json(topics: &[String]) -> Result<String, StoreError> {
        serde_json::to_string(topics)
            .map_err(|e| StoreError::InvalidData(format!("Failed to encode topics: {}", e)))
    }

    fn topics_from_json(raw: &str) -> Result<Vec<String>, StoreError> {
        serde_json::from_str(raw)
            .map_err(|e| StoreError::InvalidData(format!("Failed to decode topics: {}", e)))
    }
}

impl ResultStore for SqliteStore {
    type Error = StoreError;

    fn put_result(&mut self, id: &str, result: &AnalysisResult) -> Result<StoredItem, Self::Error> {
        let item = StoredItem::project(id, result);
        let topics = Self::topics_to_json(&item.topics)?;

        self.conn.execute(
            "INSERT OR REPLACE INTO results (id, sentiment, sentiment_score, topics, urgency)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                item.id,
                item.sentiment.as_str(),
                item.sentiment_score,
                topics,
                item.urgency.as_str(),
            ],
        )?;

        Ok(item)
    }

    fn get_result(&self, id: &str) -> Result<Option<StoredItem>, Self::Error> {
        let row = self
            .conn
            .query_row(
                "SELECT id, sentiment, sentiment_score, topics, urgency
                 FROM results WHERE id = ?1",
                params![id],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, f64>(2)?,
                        row.get::<_, String>(3)?,
                        row.get::<_, String>(4)?,
                    ))
                },
            )
            .optional()?;

        let Some((id, sentiment, score, topics, urgency)) = row else {
            return Ok(None);
        };

        Ok(Some(StoredItem {
            id,
            sentiment: Sentiment::parse(&sentiment),
            sentiment_score: score,
            topics: Self::topics_from_json(&topics)?,
            urgency: Urgency::parse(&urgency),
        }))
    }
}
