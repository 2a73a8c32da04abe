//! Storage backend abstraction.
//!
//! This module defines the [`HistoryStore`] trait that abstracts over different
//! persistence backends. This allows seamless switching between storage
//! implementations without changing business logic.
//!
//! # Design Philosophy
//!
//! The trait is designed to be minimal and focused on the actual operations needed
//! by the application, not a generic ORM. Each method maps directly to a use case
//! in the worker thread.

use crate::domain::error::Result;
use crate::storage::models::QueryRecord;

/// Abstraction over persistent search history backends.
///
/// Implementations persist submitted queries in submission order and return
/// them newest first for hydration into the in-memory history.
///
/// # Implementations
///
/// - [`JsonHistoryStore`](crate::storage::JsonHistoryStore): JSON file with
///   atomic writes (default)
///
/// # Examples
///
/// ```no_run
/// use zflick::storage::{HistoryStore, JsonHistoryStore};
/// use std::path::PathBuf;
///
/// let storage = JsonHistoryStore::new(PathBuf::from("/tmp/history.json"))?;
/// let entries = storage.load_history()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait HistoryStore: Send {
    /// Appends a submitted query to the history.
    ///
    /// Repeated queries are stored again; the history is a log, not a set.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn record_query(&mut self, record: &QueryRecord) -> Result<()>;

    /// Retrieves the full history, newest entries first.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn load_history(&self) -> Result<Vec<QueryRecord>>;
}
