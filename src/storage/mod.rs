//! Storage layer for persistent search history.
//!
//! This module provides the storage abstraction for persisting submitted
//! queries across plugin restarts. It uses JSON file storage with atomic
//! writes, accessed only from the background worker thread.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction for backend implementations
//! - `json`: JSON file-based storage implementation
//! - `models`: Storage record types separate from domain models

pub mod backend;
pub mod json;
pub mod models;

pub use backend::HistoryStore;
pub use json::JsonHistoryStore;
pub use models::QueryRecord;
