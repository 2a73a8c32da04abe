//! Error types for the Zflick plugin.
//!
//! This module defines the centralized error type [`ZflickError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for Zflick plugin operations.
///
/// This enum consolidates all error conditions that can occur during plugin execution,
/// from failed photo fetches to storage and configuration issues. Most variants carry
/// a description string; I/O errors convert automatically via `#[from]`.
///
/// # Examples
///
/// ```
/// use zflick::domain::ZflickError;
///
/// fn validate_config() -> Result<(), ZflickError> {
///     Err(ZflickError::Config("missing api_key".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum ZflickError {
    /// The photo service could not be reached or answered with a non-success status.
    ///
    /// Covers transport-level failures and HTTP statuses outside the 2xx range.
    /// The string contains the status or a description of the failure.
    #[error("Network error: {0}")]
    Network(String),

    /// The photo service answered with an application-level failure.
    ///
    /// Flickr reports these as `stat: "fail"` bodies carrying a numeric code
    /// and a human-readable message (for example code 100, "Invalid API Key").
    #[error("API error {code}: {message}")]
    Api {
        /// Failure code as reported by the service.
        code: i64,
        /// Failure message as reported by the service.
        message: String,
    },

    /// A response body could not be decoded into the expected shape.
    ///
    /// Occurs when the fetch completes but the payload is not the JSON
    /// structure the search endpoint documents.
    #[error("Malformed response: {0}")]
    Parse(String),

    /// Storage operation failed.
    ///
    /// Occurs when reading from or writing to the history store fails.
    /// The string contains a description of what went wrong.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    ///
    /// Occurs when a worker message cannot be serialized or a worker response
    /// cannot be decoded. The string contains details about the failure.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Zflick operations.
///
/// This is a type alias for `std::result::Result<T, ZflickError>` that simplifies
/// function signatures throughout the codebase.
///
/// # Examples
///
/// ```
/// use zflick::domain::Result;
///
/// fn record_query() -> Result<()> {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, ZflickError>;
