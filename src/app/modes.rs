//! Input mode state types for the application.
//!
//! This module defines the state machine enums that control user interaction
//! modes. These types determine which keybindings are active, how typed input
//! is processed, and which panel owns the screen.
//!
//! # State Machine
//!
//! The application operates in one of three input modes:
//! - **Normal**: Default result-list navigation mode
//! - **Search**: Active query editing with typing or suggestion focus
//! - **Preview**: Full-pane detail view of the selected photo
//!
//! # Example
//!
//! ```rust
//! use zflick::app::modes::{InputMode, SearchFocus};
//!
//! let input_mode = InputMode::Search(SearchFocus::Typing);
//! assert_ne!(input_mode, InputMode::Normal);
//! ```

/// Focus state within search mode.
///
/// Determines whether keystrokes edit the query text or navigate the history
/// suggestion dropdown. Controls which keybindings are active during search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the query input field.
    ///
    /// Accepts character input, backspace, enter (to submit the query), and
    /// down/tab (to move into the suggestion dropdown when it has rows).
    Typing,

    /// User is navigating the history suggestion dropdown.
    ///
    /// Accepts j/k and arrow keys for movement, enter to submit the
    /// highlighted suggestion, and esc to return to Typing. Any printable
    /// character also returns to Typing and appends to the query.
    Suggestions,
}

/// Current input handling mode.
///
/// Controls which keybindings are active and how user input is processed.
/// Determines the displayed footer text and available commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default result-list navigation mode.
    ///
    /// Available keybindings: j/k (navigate), / or s (search), enter
    /// (preview), q (quit).
    Normal,

    /// Active search mode with focus state.
    ///
    /// Contains a [`SearchFocus`] variant indicating whether the user is
    /// typing or picking a suggestion. Footer displays search-specific
    /// keybindings.
    Search(SearchFocus),

    /// Full-pane detail view of the selected photo.
    ///
    /// Available keybindings: o or enter (open in browser), esc or q (back
    /// to the result list).
    Preview,
}
