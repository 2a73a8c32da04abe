//! Zflick: A Zellij plugin for searching Flickr photos from the terminal.
//!
//! Zflick is a terminal multiplexer plugin that provides:
//! - Incremental photo search against the Flickr REST API
//! - Infinite scrolling that fetches the next page as the selection nears the
//!   end of the loaded results
//! - A search history with an age-annotated suggestion dropdown
//! - Persistent history backed by JSON file storage
//! - Asynchronous history I/O via a Zellij worker thread

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Flickr Layer  │   │ Worker Layer  │
//! │ (ui/)         │   │ (flickr/)     │   │ (worker/)     │
//! │ - Rendering   │   │ - Request URL │   │ - History I/O │
//! │ - Theming     │   │ - Response    │   │ - JSON store  │
//! │ - Components  │   │   parsing     │   │ - IPC bridge  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Photo and history models (domain/)               │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (Photo, search history, errors)
//! - [`flickr`]: Flickr API request construction and response parsing
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`storage`]: JSON file persistence for the search history
//! - [`worker`]: Background worker for async history I/O
//! - [`ui`]: Terminal rendering with theme support
//! - `observability`: OpenTelemetry tracing (internal)
//!
//! # Configuration
//!
//! The plugin is configured via Zellij's plugin configuration:
//!
//! ```kdl
//! // ~/.config/zellij/layouts/default.kdl
//! pane {
//!     plugin location="file:/path/to/zflick.wasm" {
//!         api_key "0123456789abcdef0123456789abcdef"
//!         initial_query "sunset"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! Or loaded on-demand with `Ctrl+o` → `Ctrl+w` and entering the configuration.
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load** (`main.rs`):
//!    - Parse configuration from Zellij
//!    - Initialize tracing (optional)
//!    - Create `AppState` with theme
//!    - Subscribe to Zellij events and request web/command permissions
//!
//! 2. **Permission Grant**:
//!    - Post `LoadHistory` message to the worker
//!    - Start the configured `initial_query` search, if any
//!
//! 3. **Search**:
//!    - `web_request` fetches one result page from the Flickr REST API
//!    - The response is matched against the issuing fetch by generation, so
//!      late pages from a superseded search are discarded
//!    - Walking the selection to the end of the list triggers the next page
//!
//! 4. **UI Rendering**:
//!    - Compute view model from state
//!    - Render components (header, results, footer)
//!    - Handle user input (j/k//, Enter, q)
//!
//! # Examples
//!
//! ## Basic Usage (Library)
//!
//! ```rust
//! use zflick::{handle_event, initialize, Config, Event};
//!
//! let config = Config {
//!     api_key: Some("0123456789abcdef".to_string()),
//!     ..Default::default()
//! };
//!
//! let mut state = initialize(&config);
//!
//! // Open the search bar and type a query.
//! handle_event(&mut state, &Event::SearchMode)?;
//! handle_event(&mut state, &Event::Char('f'))?;
//! let (_should_render, actions) = handle_event(&mut state, &Event::SubmitSearch)?;
//! assert_eq!(actions.len(), 1); // fetch page one; history records on arrival
//! # Ok::<(), zflick::ZflickError>(())
//! ```
//!
//! ## Worker Usage
//!
//! ```rust,no_run
//! use zflick::worker::{WorkerMessage, ZflickWorker};
//! use zellij_tile::prelude::*;
//!
//! // In worker thread
//! let mut worker = ZflickWorker::new().unwrap();
//! let message = WorkerMessage::load_history();
//! worker.on_message(
//!     "load_history".to_string(),
//!     serde_json::to_string(&message).unwrap(),
//! );
//! ```
//!
//! # Key Design Decisions
//!
//! ## Generation-Tagged Fetches
//!
//! Every fetch carries the generation of the search that issued it. Responses
//! for an older generation are dropped on arrival, so a fast re-search never
//! has its results overwritten by a slow page from the previous query.
//!
//! ## Single In-Flight Fetch
//!
//! At most one page request is outstanding per search. The selection sentinel
//! that drives infinite scrolling disarms while a fetch is in flight and
//! re-arms when it completes, which keeps scroll-triggered fetches from
//! stacking up.
//!
//! ## Worker-Based History I/O
//!
//! History reads and writes run in a separate Zellij worker thread:
//! - Keeps file I/O off the render path
//! - Uses IPC messaging for result communication
//!
//! ## Immutable View Models
//!
//! UI rendering uses computed view models:
//! - Clear separation between state and display
//! - Enables easier testing and validation
//! - Pre-computes truncation and highlight ranges
//!
//! # Platform Support
//!
//! - **Target**: `wasm32-wasip1` (Zellij WASM runtime)
//! - **Terminal**: Any ANSI-capable terminal emulator

pub mod app;
pub mod domain;
pub mod flickr;
pub mod infrastructure;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, SearchFocus};
pub use domain::{Photo, Result, ZflickError};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// Configuration values are provided via Zellij's KDL layout configuration
/// and passed to the plugin during initialization.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/zflick.wasm" {
///     api_key "0123456789abcdef0123456789abcdef"
///     initial_query "sunset"
///     theme "catppuccin-mocha"
///     theme_file "/path/to/theme.toml"
///     open_command "open"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Flickr REST API key.
    ///
    /// Required for searching. Without it the plugin renders a configuration
    /// hint instead of results. Keys are issued at
    /// <https://www.flickr.com/services/api/>.
    pub api_key: Option<String>,

    /// Query submitted automatically once permissions are granted.
    ///
    /// Defaults to the empty query, which lists fresh uploads. The startup
    /// search is skipped entirely when no API key is configured.
    pub initial_query: Option<String>,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Command used to open a photo URL in the browser.
    ///
    /// Default: `xdg-open`. macOS users typically set `open`.
    pub open_command: String,

    /// Tracing level for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            initial_query: None,
            theme_name: None,
            theme_file: None,
            open_command: "xdg-open".to_string(),
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Zellij provides configuration as a `BTreeMap<String, String>` during
    /// plugin initialization. This function extracts values with fallback
    /// defaults; blank values count as unset.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zflick::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("api_key".to_string(), "0123456789abcdef".to_string());
    /// map.insert("initial_query".to_string(), "sunset".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.api_key.as_deref(), Some("0123456789abcdef"));
    /// assert_eq!(config.initial_query.as_deref(), Some("sunset"));
    /// assert_eq!(config.open_command, "xdg-open");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let non_blank = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        let open_command = non_blank("open_command").unwrap_or_else(|| "xdg-open".to_string());

        Self {
            api_key: non_blank("api_key"),
            initial_query: non_blank("initial_query"),
            theme_name: non_blank("theme"),
            theme_file: non_blank("theme_file"),
            open_command,
            trace_level: non_blank("trace_level"),
        }
    }
}

/// Initializes the plugin with configuration.
///
/// Creates a new `AppState` with:
/// - Loaded theme (from file, name, or default)
/// - Empty search session (populated by the first search)
/// - The missing-API-key flag when no key is configured
///
/// # Example
///
/// ```rust
/// use zflick::{initialize, Config};
///
/// let config = Config {
///     api_key: Some("0123456789abcdef".to_string()),
///     ..Default::default()
/// };
///
/// let state = initialize(&config);
/// // State is ready for event processing
/// ```
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing zflick plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(
                Theme::default,
                |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::debug!(theme_name = %theme_name, "failed to load theme, using default");
                        Theme::default()
                    })
                },
            )
        },
        |theme_file| {
            let path = infrastructure::expand_tilde(theme_file);
            Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    let mut state = AppState::new(theme);
    state.api_key_missing = config.api_key.is_none();
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_config_values_fall_back_to_defaults() {
        let mut map = BTreeMap::new();
        map.insert("api_key".to_string(), "   ".to_string());
        map.insert("open_command".to_string(), String::new());

        let config = Config::from_zellij(&map);

        assert_eq!(config.api_key, None);
        assert_eq!(config.open_command, "xdg-open");
        assert_eq!(config.initial_query, None);
    }

    #[test]
    fn configured_values_are_trimmed() {
        let mut map = BTreeMap::new();
        map.insert("api_key".to_string(), " abc123 ".to_string());
        map.insert("open_command".to_string(), "open".to_string());
        map.insert("theme".to_string(), "catppuccin-latte".to_string());

        let config = Config::from_zellij(&map);

        assert_eq!(config.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.open_command, "open");
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    }

    #[test]
    fn missing_api_key_flags_the_state() {
        let state = initialize(&Config::default());
        assert!(state.api_key_missing);

        let with_key = initialize(&Config {
            api_key: Some("abc".to_string()),
            ..Default::default()
        });
        assert!(!with_key.api_key_missing);
    }
}
