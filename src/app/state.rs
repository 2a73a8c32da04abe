//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the plugin,
//! along with methods for selection management, query editing, suggestion
//! lookup, and UI view model generation. It serves as the single source of
//! truth for all transient UI state.
//!
//! # Architecture
//!
//! `AppState` separates core data (the search session, the query history) from
//! derived state (suggestion rows, selected index) to maintain consistency and
//! simplify state transitions. View models are computed on-demand from state
//! snapshots.
//!
//! # State Components
//!
//! - **Session**: Result list, page cursor, and in-flight fetch slot
//! - **History**: Previously submitted queries, newest first
//! - **Suggestions**: History subset matching the text in the search bar
//! - **Selection**: Current cursor position within the loaded results
//! - **Input Mode**: Controls keybinding interpretation and UI layout
//! - **Scroll Trigger**: Armed sentinel that requests the next page
//!
//! # View Model Computation
//!
//! The `compute_viewmodel` method transforms state into a renderable UI
//! representation, handling windowing, empty states, the pagination tail row,
//! and responsive layout adjustments based on terminal dimensions.
//!
//! # Example
//!
//! ```rust
//! use zflick::app::AppState;
//! use zflick::ui::theme::Theme;
//!
//! let state = AppState::new(Theme::default());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.display_photos.is_empty());
//! ```

use super::modes::{InputMode, SearchFocus};
use super::scroll::ScrollTrigger;
use super::session::SearchSession;
use crate::domain::{HistoryEntry, Photo, SearchHistory};
use crate::ui::theme::Theme;

/// Maximum number of rows shown in the suggestion dropdown.
const MAX_SUGGESTION_ROWS: usize = 5;

/// Central application state container.
///
/// Holds all transient UI state including the search session, query history,
/// selection, and mode information. Mutated by the event handler in response
/// to user input and system events. View models are computed on-demand from
/// state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Pagination state for the active query.
    ///
    /// Owns the result list, the page cursor, and the single in-flight fetch
    /// slot. Mutated by search and fetch-completion events.
    pub session: SearchSession,

    /// Previously searched queries, newest first.
    ///
    /// Hydrated from storage by the worker on startup; extended by every
    /// search whose first page arrives. Source of the suggestion dropdown.
    pub history: SearchHistory,

    /// Armed sentinel that fires next-page requests.
    ///
    /// Re-armed after every event that can change the more-available or
    /// loading flags.
    pub scroll: ScrollTrigger,

    /// Zero-based index of the selected photo within the loaded results.
    ///
    /// Clamped to valid bounds whenever the result list changes. Moves via
    /// `move_selection_up/down()` without wrapping, so walking down a long
    /// list keeps the selection inside the sentinel zone while pages load.
    pub selected_index: usize,

    /// Current input handling mode.
    ///
    /// Determines active keybindings and UI layout (search bar visibility,
    /// footer text, preview pane). Changed by mode switching events.
    pub input_mode: InputMode,

    /// Text currently in the search bar.
    ///
    /// Accumulated by `Char` events, reduced by `Backspace` events. Distinct
    /// from the session query, which only changes when a search starts.
    pub search_input: String,

    /// History entries matching the current search bar text.
    ///
    /// Recomputed by `refresh_suggestions()` after every edit. Capped at
    /// [`MAX_SUGGESTION_ROWS`].
    pub suggestions: Vec<HistoryEntry>,

    /// Zero-based index of the highlighted suggestion row.
    pub suggestion_index: usize,

    /// Color scheme for UI rendering.
    ///
    /// Loaded from Zellij configuration on plugin initialization. Stored in
    /// state for access by the renderer.
    pub theme: Theme,

    /// True when the user denied the plugin's permission request.
    ///
    /// Drives a dedicated empty state since nothing can be fetched.
    pub permissions_denied: bool,

    /// True when the plugin configuration carries no API key.
    ///
    /// Set once at initialization. Searches are pointless without a key, so
    /// this also drives a dedicated empty state.
    pub api_key_missing: bool,
}

impl AppState {
    /// Creates a new application state with the given theme.
    ///
    /// Initializes an idle session, empty history, and default modes. The
    /// history is filled in later by the worker once storage has been read.
    ///
    /// # Example
    ///
    /// ```rust
    /// use zflick::app::AppState;
    /// use zflick::ui::theme::Theme;
    ///
    /// let state = AppState::new(Theme::default());
    /// assert_eq!(state.selected_index, 0);
    /// ```
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            session: SearchSession::new(),
            history: SearchHistory::default(),
            scroll: ScrollTrigger::new(),
            selected_index: 0,
            input_mode: InputMode::Normal,
            search_input: String::new(),
            suggestions: Vec::new(),
            suggestion_index: 0,
            theme,
            permissions_denied: false,
            api_key_missing: false,
        }
    }

    /// Moves the selection cursor down by one position.
    ///
    /// Stops at the last loaded photo instead of wrapping; the sentinel near
    /// the list end loads further pages, so the end moves while the user
    /// holds the key. No-op if no photos are loaded.
    pub fn move_selection_down(&mut self) {
        if self.session.photos().is_empty() {
            return;
        }
        let last = self.session.photos().len() - 1;
        self.selected_index = (self.selected_index + 1).min(last);
    }

    /// Moves the selection cursor up by one position, stopping at the top.
    pub fn move_selection_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Moves the highlighted suggestion row down, stopping at the last row.
    pub fn move_suggestion_down(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        let last = self.suggestions.len() - 1;
        self.suggestion_index = (self.suggestion_index + 1).min(last);
    }

    /// Moves the highlighted suggestion row up, stopping at the top.
    pub fn move_suggestion_up(&mut self) {
        self.suggestion_index = self.suggestion_index.saturating_sub(1);
    }

    /// Returns a reference to the currently selected photo, if any.
    ///
    /// Returns `None` if no photos are loaded.
    #[must_use]
    pub fn selected_photo(&self) -> Option<&Photo> {
        self.session.photos().get(self.selected_index)
    }

    /// Returns the currently highlighted suggestion, if any.
    #[must_use]
    pub fn selected_suggestion(&self) -> Option<&HistoryEntry> {
        self.suggestions.get(self.suggestion_index)
    }

    /// Recomputes the suggestion dropdown from the search bar text.
    ///
    /// Case-insensitive substring match over the query history, preserving
    /// history order (newest first) and capped at [`MAX_SUGGESTION_ROWS`].
    /// Clamps the highlighted row to the new bounds.
    pub fn refresh_suggestions(&mut self) {
        let mut matches = self.history.suggest(&self.search_input);
        matches.truncate(MAX_SUGGESTION_ROWS);
        self.suggestions = matches;

        if self.suggestions.is_empty() {
            self.suggestion_index = 0;
        } else {
            self.suggestion_index = self.suggestion_index.min(self.suggestions.len() - 1);
        }
    }

    /// Clamps the selection to the loaded result list.
    ///
    /// Called after the list is replaced; an appended page never shrinks the
    /// list, so the index stays valid there.
    pub fn clamp_selection(&mut self) {
        if self.session.photos().is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.session.photos().len() - 1);
        }
    }

    /// Re-arms or disarms the pagination sentinel from the session state.
    pub fn sync_scroll_trigger(&mut self) {
        self.scroll.sync(
            self.session.started() && self.session.has_more(),
            self.session.loading(),
        );
    }

    /// Whether the sentinel should fire a next-page request right now.
    ///
    /// True when the trigger is armed, the session guards still hold, and the
    /// selection sits within the sentinel zone of the loaded list.
    #[must_use]
    pub fn pagination_due(&self) -> bool {
        self.scroll.should_fire(
            self.selected_index,
            self.session.photos().len(),
            self.session.started() && self.session.has_more(),
            self.session.loading(),
        )
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// Transforms application state into a structured representation optimized
    /// for rendering. Handles windowing (showing a subset of results), empty
    /// state selection, the pagination tail row, and the preview pane.
    ///
    /// # Parameters
    ///
    /// * `rows` - Terminal height in character cells
    /// * `cols` - Terminal width in character cells
    ///
    /// # Returns
    ///
    /// A [`UIViewModel`](crate::ui::viewmodel::UIViewModel) containing display
    /// rows, header/footer info, search bar state, and optional empty state,
    /// tail, and preview.
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Calculate available rows after subtracting UI chrome (header, footer, search)
    /// 2. Center window around selected index (selected index at midpoint)
    /// 3. Adjust window if near start/end to maximize visible items
    /// 4. Compute relative selection index within visible window
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> crate::ui::viewmodel::UIViewModel {
        if self.input_mode == InputMode::Preview {
            return crate::ui::viewmodel::UIViewModel {
                display_photos: vec![],
                selected_index: 0,
                header: self.compute_header(),
                footer: self.compute_footer(),
                empty_state: None,
                search_bar: None,
                preview: self.compute_preview(),
                list_tail: None,
            };
        }

        if self.session.photos().is_empty() {
            return crate::ui::viewmodel::UIViewModel {
                display_photos: vec![],
                selected_index: 0,
                header: self.compute_header(),
                footer: self.compute_footer(),
                empty_state: self.compute_empty_state(),
                search_bar: self.compute_search_bar(),
                preview: None,
                list_tail: None,
            };
        }

        let available_rows = self.calculate_available_rows(rows);
        let photos = self.session.photos();

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(photos.len());

        let actual_count = visible_end - visible_start;
        if actual_count < available_rows && photos.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let display_photos: Vec<crate::ui::viewmodel::DisplayPhoto> = photos
            [visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, photo)| {
                let absolute_idx = visible_start + relative_idx;
                self.compute_display_photo(photo, absolute_idx, cols)
            })
            .collect();

        let selected_display_index = self.selected_index.saturating_sub(visible_start);

        crate::ui::viewmodel::UIViewModel {
            display_photos,
            selected_index: selected_display_index,
            header: self.compute_header(),
            footer: self.compute_footer(),
            empty_state: None,
            search_bar: self.compute_search_bar(),
            preview: None,
            list_tail: self.compute_list_tail(),
        }
    }

    /// Computes a display row for a single photo within the visible window.
    ///
    /// Handles title truncation, responsive image URL truncation, and
    /// selection state marking.
    fn compute_display_photo(
        &self,
        photo: &Photo,
        absolute_idx: usize,
        cols: usize,
    ) -> crate::ui::viewmodel::DisplayPhoto {
        const TITLE_COLUMN_WIDTH: usize = 37;
        const SAFETY_MARGIN: usize = 2;

        let is_selected = absolute_idx == self.selected_index;
        let max_url_width = cols.saturating_sub(TITLE_COLUMN_WIDTH + SAFETY_MARGIN);

        // Titles come from the API and can be any UTF-8, so truncation counts
        // characters rather than bytes.
        let full_title = photo.display_title();
        let title = if full_title.chars().count() > 35 {
            let kept: String = full_title.chars().take(32).collect();
            format!("{kept}...")
        } else {
            full_title.to_string()
        };

        let url = Self::format_display_url(&photo.image_url(), max_url_width);

        crate::ui::viewmodel::DisplayPhoto {
            title,
            url,
            is_selected,
        }
    }

    /// Computes header information from the session state.
    fn compute_header(&self) -> crate::ui::viewmodel::HeaderInfo {
        let title = if self.session.started() {
            format!(
                " \"{}\" ({} loaded) ",
                self.session.query(),
                self.session.photos().len()
            )
        } else {
            " zflick ".to_string()
        };
        crate::ui::viewmodel::HeaderInfo { title }
    }

    /// Computes footer keybindings text based on the current input mode.
    fn compute_footer(&self) -> crate::ui::viewmodel::FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Search(SearchFocus::Typing) => {
                "ESC: cancel  Enter: search  Down/Tab: suggestions  Type to edit query".to_string()
            }
            InputMode::Search(SearchFocus::Suggestions) => {
                "ESC: back to typing  j/k: navigate  Enter: search suggestion".to_string()
            }
            InputMode::Normal => {
                "j/k: navigate  /: search  Enter: preview  q: quit".to_string()
            }
            InputMode::Preview => "o/Enter: open in browser  ESC/q: back".to_string(),
        };

        crate::ui::viewmodel::FooterInfo { keybindings }
    }

    /// Computes search bar state if in search mode.
    ///
    /// Returns `Some` with the current input, focus, and suggestion rows if
    /// search mode is active, `None` otherwise.
    fn compute_search_bar(&self) -> Option<crate::ui::viewmodel::SearchBarInfo> {
        let InputMode::Search(focus) = self.input_mode else {
            return None;
        };

        let suggestions = self
            .suggestions
            .iter()
            .enumerate()
            .map(|(idx, entry)| crate::ui::viewmodel::SuggestionRow {
                query: entry.query.clone(),
                age: entry.time_ago(),
                is_selected: focus == SearchFocus::Suggestions && idx == self.suggestion_index,
                highlight_range: crate::ui::helpers::match_range(&entry.query, &self.search_input),
            })
            .collect();

        Some(crate::ui::viewmodel::SearchBarInfo {
            query: self.search_input.clone(),
            focus_typing: focus == SearchFocus::Typing,
            suggestions,
        })
    }

    /// Computes the preview pane contents for the selected photo.
    fn compute_preview(&self) -> Option<crate::ui::viewmodel::PreviewInfo> {
        self.selected_photo()
            .map(|photo| crate::ui::viewmodel::PreviewInfo {
                title: photo.display_title().to_string(),
                photo_id: photo.id.clone(),
                image_url: photo.image_url(),
            })
    }

    /// Picks the message shown in place of an empty result list.
    ///
    /// Permission and configuration problems outrank the ordinary prompts
    /// since no search can succeed until they are fixed.
    fn compute_empty_state(&self) -> Option<crate::ui::viewmodel::EmptyState> {
        use crate::ui::viewmodel::EmptyState;

        if self.permissions_denied {
            return Some(EmptyState {
                message: "Web access was denied".to_string(),
                subtitle: "Re-open the plugin and grant the permission to search photos"
                    .to_string(),
            });
        }
        if self.api_key_missing {
            return Some(EmptyState {
                message: "No API key configured".to_string(),
                subtitle: "Set api_key in the plugin configuration".to_string(),
            });
        }
        if !self.session.started() {
            return Some(EmptyState {
                message: "Search for photos".to_string(),
                subtitle: "Press / and type a query to begin".to_string(),
            });
        }
        if self.session.loading() {
            return Some(EmptyState {
                message: format!("Searching \"{}\"...", self.session.query()),
                subtitle: "Fetching the first page".to_string(),
            });
        }
        Some(EmptyState {
            message: format!("No photos found for \"{}\"", self.session.query()),
            subtitle: "Try a different query".to_string(),
        })
    }

    /// Computes the status row under the result list.
    ///
    /// Shows a loading notice while a pagination fetch is outstanding and an
    /// end-of-results notice once the session is exhausted.
    fn compute_list_tail(&self) -> Option<String> {
        if self.session.loading() {
            Some("Loading more photos...".to_string())
        } else if !self.session.has_more() {
            Some("End of results.".to_string())
        } else {
            None
        }
    }

    /// Calculates available rows for the photo list after subtracting UI chrome.
    ///
    /// Accounts for the header block (blank line, title, border), column
    /// headers, the reserved tail row, and the footer block (border, footer).
    /// Search mode additionally reserves the search box (3 rows) and one row
    /// per dropdown suggestion.
    fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Normal | InputMode::Preview => total_rows.saturating_sub(8),
            InputMode::Search(_) => total_rows.saturating_sub(11 + self.suggestions.len()),
        }
    }

    /// Formats an image URL for display, truncating from the start if needed.
    ///
    /// The tail of the URL carries the photo identity, so truncation keeps
    /// the end and prefixes "...".
    fn format_display_url(url: &str, max_width: usize) -> String {
        let len = url.chars().count();
        if len > max_width {
            let keep_chars = max_width.saturating_sub(3);
            let kept: String = url.chars().skip(len - keep_chars).collect();
            format!("...{kept}")
        } else {
            url.to_string()
        }
    }
}
