//! JSON file-based storage backend.
//!
//! This module provides a simple, human-readable storage implementation using
//! JSON serialization. It uses atomic file writes (write-to-temp + rename) to
//! prevent corruption on crashes.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(1) - loads entire file into memory once
//! - **Write**: O(n) - serializes and writes entire history
//! - **Best for**: a few thousand entries, one write per recorded search

use crate::domain::error::{Result, ZflickError};
use crate::storage::backend::HistoryStore;
use crate::storage::models::QueryRecord;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// JSON storage container format.
///
/// This is the top-level structure serialized to disk. Wraps the entry list in
/// a versioned object for future format migrations.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HistoryData {
    /// Version of the storage format for future migrations.
    version: u32,

    /// Submitted queries in submission order, oldest first.
    #[serde(default)]
    entries: Vec<QueryRecord>,
}

impl Default for HistoryData {
    fn default() -> Self {
        Self {
            version: 1,
            entries: Vec::new(),
        }
    }
}

/// JSON file storage backend.
///
/// Stores submitted queries in a human-readable JSON file with atomic writes.
/// The entire history is kept in memory and persisted on modifications.
///
/// # Thread Safety
///
/// This type is `Send` but not `Sync`. It's designed to be used from a single
/// worker thread, matching the Zellij plugin architecture.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "entries": [
///     {
///       "query": "red fox",
///       "searched_at": 1234567890
///     }
///   ]
/// }
/// ```
pub struct JsonHistoryStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory data cache, loaded on creation.
    data: HistoryData,

    /// Tracks if data has been modified since last save.
    dirty: bool,
}

impl JsonHistoryStore {
    /// Creates or opens a JSON storage backend.
    ///
    /// If the file exists, loads existing data. Otherwise creates a new empty storage.
    /// Parent directories are created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - File exists but contains invalid JSON
    /// - File permissions prevent reading
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use zflick::storage::JsonHistoryStore;
    /// use std::path::PathBuf;
    ///
    /// let storage = JsonHistoryStore::new(PathBuf::from("/tmp/history.json"))?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON history storage");

        if let Some(parent) = file_path.parent() {
            tracing::debug!(parent = ?parent, "creating parent directory");
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            tracing::debug!("loading existing data");
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("initializing new empty storage");
            HistoryData::default()
        };

        tracing::debug!(entry_count = data.entries.len(), "storage initialized");

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    /// Loads storage data from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid JSON.
    fn load_from_file(path: &PathBuf) -> Result<HistoryData> {
        let contents = std::fs::read_to_string(path)?;
        let data: HistoryData = serde_json::from_str(&contents)
            .map_err(|e| ZflickError::Storage(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(
            version = data.version,
            entries = data.entries.len(),
            "loaded storage data"
        );

        Ok(data)
    }

    /// Saves storage data to disk using atomic write.
    ///
    /// Writes to a temporary file first, then atomically renames it to the target path.
    /// This ensures the file is never left in a corrupt state, even if the process crashes.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - JSON serialization fails (should never happen with valid data)
    /// - Temporary file cannot be written
    /// - Rename operation fails (rare on POSIX systems)
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        tracing::debug!(path = ?self.file_path, "saving storage data");

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| ZflickError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)?;

        tracing::trace!("renaming temporary file to final location");
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!("storage saved successfully");
        Ok(())
    }
}

impl HistoryStore for JsonHistoryStore {
    fn record_query(&mut self, record: &QueryRecord) -> Result<()> {
        let _span = tracing::debug_span!("json_record_query",
            query = %record.query,
            searched_at = record.searched_at
        )
        .entered();

        self.data.entries.push(record.clone());

        self.dirty = true;
        self.save_to_file()?;

        tracing::debug!(total = self.data.entries.len(), "query recorded");
        Ok(())
    }

    fn load_history(&self) -> Result<Vec<QueryRecord>> {
        let _span = tracing::debug_span!("json_load_history").entered();

        // On disk the log is oldest first; callers want newest first.
        let entries: Vec<QueryRecord> = self.data.entries.iter().rev().cloned().collect();

        tracing::debug!(count = entries.len(), "retrieved history");
        Ok(entries)
    }
}

impl Drop for JsonHistoryStore {
    /// Ensures data is saved on drop, even if the user forgot to call save explicitly.
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("saving dirty data on drop");
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save on drop");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn opens_empty_storage_and_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("history.json");

        let storage = JsonHistoryStore::new(path).unwrap();
        assert!(storage.load_history().unwrap().is_empty());
    }

    #[test]
    fn recorded_queries_survive_a_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");

        {
            let mut storage = JsonHistoryStore::new(path.clone()).unwrap();
            storage
                .record_query(&QueryRecord {
                    query: "foxes".to_string(),
                    searched_at: 100,
                })
                .unwrap();
            storage
                .record_query(&QueryRecord {
                    query: "owls".to_string(),
                    searched_at: 200,
                })
                .unwrap();
        }

        let storage = JsonHistoryStore::new(path).unwrap();
        let entries = storage.load_history().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].query, "owls");
        assert_eq!(entries[1].query, "foxes");
    }

    #[test]
    fn repeated_queries_are_all_kept() {
        let dir = TempDir::new().unwrap();
        let mut storage = JsonHistoryStore::new(dir.path().join("history.json")).unwrap();

        for ts in [1, 2, 3] {
            storage
                .record_query(&QueryRecord {
                    query: "sea".to_string(),
                    searched_at: ts,
                })
                .unwrap();
        }

        assert_eq!(storage.load_history().unwrap().len(), 3);
    }

    #[test]
    fn corrupt_file_is_a_storage_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = JsonHistoryStore::new(path);
        assert!(matches!(result, Err(ZflickError::Storage(_))));
    }

    #[test]
    fn no_temp_file_left_behind_after_save() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");

        let mut storage = JsonHistoryStore::new(path.clone()).unwrap();
        storage.record_query(&QueryRecord::new("sea")).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
    }
}
