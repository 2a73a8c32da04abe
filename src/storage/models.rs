//! Storage record models for persistence layer.
//!
//! This module defines the raw storage record types used for persistence operations.
//! These types are separate from domain models to maintain a clear boundary between
//! storage representation and business logic.

use serde::{Deserialize, Serialize};

/// Represents a submitted query in storage.
///
/// This is the storage-layer representation of a history entry. It currently
/// mirrors the domain `HistoryEntry` field for field, but keeping the types
/// separate lets the file format evolve without touching business logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRecord {
    /// Query text exactly as searched.
    pub query: String,

    /// Unix timestamp of the submission.
    pub searched_at: i64,
}

impl QueryRecord {
    /// Creates a new query record stamped with the current time.
    ///
    /// # Examples
    ///
    /// ```
    /// use zflick::storage::QueryRecord;
    ///
    /// let record = QueryRecord::new("red fox");
    /// assert_eq!(record.query, "red fox");
    /// assert!(record.searched_at > 0);
    /// ```
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            searched_at: chrono::Utc::now().timestamp(),
        }
    }
}
