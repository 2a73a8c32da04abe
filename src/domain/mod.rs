//! Domain layer for the Zflick plugin.
//!
//! This module contains the core domain types and business logic for the plugin,
//! independent of Zellij-specific APIs or infrastructure concerns: photo records,
//! the search history with its suggestion filter, and the error taxonomy.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`photo`]: Photo record and image URL construction
//! - [`history`]: Append-only search history and suggestion derivation
//!
//! # Examples
//!
//! ```
//! use zflick::domain::{Photo, SearchHistory};
//!
//! let mut history = SearchHistory::default();
//! history.record("red fox");
//!
//! let photo = Photo::new("53602", "65535", "9c1b", "Red fox");
//! assert!(photo.image_url().ends_with("53602_9c1b.jpg"));
//! ```

pub mod error;
pub mod history;
pub mod photo;

pub use error::{Result, ZflickError};
pub use history::{HistoryEntry, SearchHistory};
pub use photo::Photo;
