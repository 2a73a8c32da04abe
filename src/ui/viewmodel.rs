//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state,
//! following the MVVM pattern. View models are optimized for rendering and
//! contain pre-computed display information like truncated URLs and selection
//! state.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data.
//!
//! # Example
//!
//! ```rust
//! use zflick::ui::viewmodel::{DisplayPhoto, FooterInfo, HeaderInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     display_photos: vec![DisplayPhoto {
//!         title: "A red fox".to_string(),
//!         url: "https://live.staticflickr.com/65535/1_aa.jpg".to_string(),
//!         is_selected: true,
//!     }],
//!     selected_index: 0,
//!     header: HeaderInfo { title: " \"fox\" (1 loaded) ".to_string() },
//!     footer: FooterInfo { keybindings: "q: quit".to_string() },
//!     empty_state: None,
//!     search_bar: None,
//!     preview: None,
//!     list_tail: None,
//! };
//! ```

/// Complete UI view model for rendering.
///
/// Contains all display information needed to render the plugin UI. The view
/// model is computed from `AppState` and includes pre-processed display rows,
/// selection state, and optional UI elements like the search bar, the preview
/// pane, and empty states.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Visible window of photo rows.
    pub display_photos: Vec<DisplayPhoto>,

    /// Index of the selected row within `display_photos`.
    pub selected_index: usize,

    /// Header information (active query, loaded count).
    pub header: HeaderInfo,

    /// Footer information (keybindings, help text).
    pub footer: FooterInfo,

    /// Optional empty state message (when no photos are available).
    pub empty_state: Option<EmptyState>,

    /// Optional search bar information (when in search mode).
    pub search_bar: Option<SearchBarInfo>,

    /// Optional preview pane (when in preview mode).
    pub preview: Option<PreviewInfo>,

    /// Optional status row under the result list ("Loading more photos...",
    /// "End of results.").
    pub list_tail: Option<String>,
}

/// Display information for a single photo row.
#[derive(Debug, Clone)]
pub struct DisplayPhoto {
    /// Photo title, truncated for the fixed title column.
    pub title: String,

    /// Image URL, truncated from the front to fit the remaining width.
    pub url: String,

    /// Whether this row is currently selected.
    pub is_selected: bool,
}

/// Header display information.
///
/// Contains title and branding information for the top of the UI.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
///
/// Contains help text and keybinding hints for the bottom of the UI.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "j/k: navigate  /: search  q: quit").
    pub keybindings: String,
}

/// Empty state message display information.
///
/// Shown when no photos are available (before the first search, while it is
/// in flight, or when it matched nothing).
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "No photos found for \"qwzx\"").
    pub message: String,

    /// Secondary explanatory text (e.g., "Try a different query").
    pub subtitle: String,
}

/// Search bar display information.
///
/// Contains the current input text and the history suggestion dropdown.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search bar text.
    pub query: String,

    /// Whether keystrokes currently edit the input (as opposed to navigating
    /// the dropdown). Drives the input cursor.
    pub focus_typing: bool,

    /// Dropdown rows matching the current input, newest first.
    pub suggestions: Vec<SuggestionRow>,
}

/// One row of the history suggestion dropdown.
#[derive(Debug, Clone)]
pub struct SuggestionRow {
    /// Suggested query text.
    pub query: String,

    /// Coarse age of the original submission (e.g., "2h ago").
    pub age: String,

    /// Whether this row is currently highlighted.
    pub is_selected: bool,

    /// Character range of the matched input inside `query`, if any.
    pub highlight_range: Option<(usize, usize)>,
}

/// Preview pane display information.
#[derive(Debug, Clone)]
pub struct PreviewInfo {
    /// Photo title (placeholder text when the API returned none).
    pub title: String,

    /// Flickr photo identifier.
    pub photo_id: String,

    /// Full-size image URL, also the open-in-browser target.
    pub image_url: String,
}
