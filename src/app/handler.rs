//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input,
//! fetch completions, and worker responses, translating them into state
//! changes and action sequences. It serves as the primary control flow
//! coordinator for the application.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime or worker thread
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! Events fall into several categories:
//! - **Navigation**: `KeyDown`, `KeyUp`, `OpenPreview`, `ClosePreview`
//! - **Input**: `Char`, `Backspace`, `SubmitSearch`
//! - **Mode Switching**: `SearchMode`, `FocusSuggestions`, `ExitSearch`
//! - **System**: `SearchRequested`, `FetchCompleted`, `PermissionsResult`
//! - **Worker**: `WorkerResponse` with typed message variants
//!
//! # Example
//!
//! ```rust
//! use zflick::app::{AppState, handler::{Event, handle_event}};
//! use zflick::ui::theme::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::KeyDown)?;
//! assert!(actions.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use super::modes::{InputMode, SearchFocus};
use super::session::FetchOutcome;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::Photo;
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user input, system changes, or worker responses.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the selection (or suggestion) cursor down by one position.
    KeyDown,
    /// Moves the selection (or suggestion) cursor up by one position.
    KeyUp,
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,
    /// Opens the preview pane for the selected photo.
    OpenPreview,
    /// Closes the preview pane and returns to the result list.
    ClosePreview,
    /// Opens the selected photo with the configured opener command.
    OpenInBrowser,
    /// Enters search mode with typing focus and an empty search bar.
    SearchMode,
    /// Moves focus from the search input into the suggestion dropdown.
    FocusSuggestions,
    /// Moves focus from the suggestion dropdown back to the search input.
    FocusSearchBar,
    /// Exits search mode without submitting.
    ExitSearch,
    /// Submits the search bar text (or the highlighted suggestion) as a new
    /// top-level search.
    SubmitSearch,
    /// Re-runs the active query as a fresh top-level search.
    RefreshSearch,
    /// Appends a character to the search bar.
    Char(char),
    /// Removes the last character from the search bar.
    Backspace,

    /// Starts a top-level search programmatically.
    ///
    /// Used for the startup search from the configured initial query. Like
    /// [`Event::SubmitSearch`], the query lands in history once its first
    /// page arrives.
    SearchRequested {
        /// Query text to search for.
        query: String,
    },

    /// Reports a settled photo fetch.
    ///
    /// Carries the generation stamp the request was issued with; responses
    /// from superseded fetches are recognized by it and discarded. The error
    /// arm is a display string since the failure already happened elsewhere.
    FetchCompleted {
        /// Generation stamp echoed back from the web request context.
        generation: u64,
        /// Parsed photo page, or a description of what went wrong.
        result: std::result::Result<Vec<Photo>, String>,
    },

    /// Reports the outcome of the startup permission request.
    ///
    /// A denial is terminal for this plugin since nothing can be fetched
    /// without web access; the UI switches to an explanatory empty state.
    PermissionsResult {
        /// Whether the user granted the requested permissions.
        granted: bool,
    },

    /// Wraps a response from the background worker thread.
    ///
    /// Processed by matching on the inner [`WorkerResponse`] variant. May
    /// hydrate the query history or report storage errors.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// This is the primary event handler that coordinates all state transitions and
/// side effects. It pattern-matches on event types, calls state mutation methods,
/// and collects actions to be executed by the plugin runtime.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
///
/// # Returns
///
/// A tuple of (should render, actions to execute in sequence). The action
/// vector may be empty if the event requires no side effects.
///
/// # Errors
///
/// Returns errors from state mutation methods. The current transitions are
/// infallible but the signature leaves room for fallible ones.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type for debugging.
///
/// # Example
///
/// ```rust
/// use zflick::app::{AppState, handler::{Event, handle_event}};
/// use zflick::ui::theme::Theme;
///
/// let mut state = AppState::new(Theme::default());
/// let (should_render, _actions) = handle_event(&mut state, &Event::SearchMode)?;
/// assert!(should_render);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[allow(clippy::cognitive_complexity, clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            if state.input_mode == InputMode::Search(SearchFocus::Suggestions) {
                state.move_suggestion_down();
                return Ok((true, vec![]));
            }
            state.move_selection_down();
            let actions = maybe_fetch_next_page(state);
            Ok((true, actions))
        }
        Event::KeyUp => {
            if state.input_mode == InputMode::Search(SearchFocus::Suggestions) {
                state.move_suggestion_up();
            } else {
                state.move_selection_up();
            }
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::OpenPreview => {
            if state.selected_photo().is_none() {
                tracing::debug!("no photo selected");
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Preview;
            Ok((true, vec![]))
        }
        Event::ClosePreview => {
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::OpenInBrowser => state.selected_photo().map_or_else(
            || Ok((false, vec![])),
            |photo| {
                let url = photo.image_url();
                tracing::debug!(photo_id = %photo.id, url = %url, "opening photo in browser");
                Ok((false, vec![Action::OpenUrl { url }]))
            },
        ),
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.search_input = String::new();
            state.suggestion_index = 0;
            state.refresh_suggestions();
            Ok((true, vec![]))
        }
        Event::FocusSuggestions => {
            if state.input_mode != InputMode::Search(SearchFocus::Typing)
                || state.suggestions.is_empty()
            {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Search(SearchFocus::Suggestions);
            state.suggestion_index = 0;
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(input = %state.search_input, "exiting search mode");
            state.input_mode = InputMode::Normal;
            state.search_input = String::new();
            state.suggestions = Vec::new();
            state.suggestion_index = 0;
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            let InputMode::Search(focus) = state.input_mode else {
                return Ok((false, vec![]));
            };

            // Typing from the dropdown returns focus to the input field.
            if focus == SearchFocus::Suggestions {
                state.input_mode = InputMode::Search(SearchFocus::Typing);
            }

            state.search_input.push(*c);
            tracing::trace!(input = %state.search_input, char = %c, "search input updated");
            state.refresh_suggestions();

            Ok((true, vec![]))
        }
        Event::Backspace => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }

            state.search_input.pop();
            state.refresh_suggestions();

            Ok((true, vec![]))
        }
        Event::SubmitSearch => {
            let InputMode::Search(focus) = state.input_mode else {
                return Ok((false, vec![]));
            };

            let query = match focus {
                SearchFocus::Suggestions => state
                    .selected_suggestion()
                    .map_or_else(|| state.search_input.clone(), |entry| entry.query.clone()),
                SearchFocus::Typing => state.search_input.clone(),
            };

            tracing::debug!(query = %query, "search submitted");

            let request = state.session.start_search(query);

            state.input_mode = InputMode::Normal;
            state.search_input = String::new();
            state.suggestions = Vec::new();
            state.suggestion_index = 0;
            state.selected_index = 0;
            state.sync_scroll_trigger();

            Ok((true, vec![Action::Fetch(request)]))
        }
        Event::RefreshSearch => {
            if !state.session.started() {
                return Ok((false, vec![]));
            }
            let query = state.session.query().to_string();
            tracing::debug!(query = %query, "re-running current search");
            let request = state.session.start_search(query);
            state.selected_index = 0;
            state.sync_scroll_trigger();
            Ok((true, vec![Action::Fetch(request)]))
        }
        Event::SearchRequested { query } => {
            tracing::debug!(query = %query, "programmatic search requested");
            let request = state.session.start_search(query.clone());
            state.selected_index = 0;
            state.sync_scroll_trigger();
            Ok((true, vec![Action::Fetch(request)]))
        }
        Event::FetchCompleted { generation, result } => {
            let outcome = state.session.complete(*generation, result.clone());
            state.sync_scroll_trigger();

            match outcome {
                FetchOutcome::Replaced { query, .. } => {
                    state.clamp_selection();

                    // Every search that lands its first page is recorded,
                    // repeats and empty queries included. Failed and
                    // superseded searches never reach this arm.
                    let entry = state.history.record(query);
                    let mut actions = vec![Action::PostToWorker(WorkerMessage::record_query(
                        entry.query,
                        entry.searched_at,
                    ))];
                    if matches!(state.input_mode, InputMode::Search(_)) {
                        state.refresh_suggestions();
                    }

                    // A short or empty first page can leave the sentinel in
                    // view, so the next page is probed right away.
                    actions.extend(maybe_fetch_next_page(state));
                    Ok((true, actions))
                }
                FetchOutcome::Appended { .. } => {
                    let actions = maybe_fetch_next_page(state);
                    Ok((true, actions))
                }
                FetchOutcome::Exhausted | FetchOutcome::Failed { .. } => Ok((true, vec![])),
                FetchOutcome::Stale => Ok((false, vec![])),
            }
        }
        Event::PermissionsResult { granted } => {
            if *granted {
                Ok((false, vec![]))
            } else {
                tracing::warn!("permission request denied");
                state.permissions_denied = true;
                Ok((true, vec![]))
            }
        }
        Event::WorkerResponse(response) => match response {
            WorkerResponse::HistoryLoaded { entries } => {
                tracing::debug!(count = entries.len(), "history loaded from storage");
                state.history.hydrate(entries.clone());

                // Only the open dropdown shows history, so skip the render
                // otherwise.
                if matches!(state.input_mode, InputMode::Search(_)) {
                    state.refresh_suggestions();
                    Ok((true, vec![]))
                } else {
                    Ok((false, vec![]))
                }
            }
            WorkerResponse::QueryRecorded { query } => {
                tracing::debug!(query = %query, "query persisted");
                Ok((false, vec![]))
            }
            WorkerResponse::Error { message } => {
                tracing::error!("Worker error: {}", message);
                Ok((false, vec![]))
            }
        },
    }
}

/// Issues a next-page fetch when the pagination sentinel is due.
///
/// Re-syncs the scroll trigger after occupying the fetch slot so the sentinel
/// stays disarmed until the page settles.
fn maybe_fetch_next_page(state: &mut AppState) -> Vec<Action> {
    if !state.pagination_due() {
        return vec![];
    }

    match state.session.request_next_page() {
        Some(request) => {
            state.sync_scroll_trigger();
            vec![Action::Fetch(request)]
        }
        None => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::session::FetchRequest;
    use crate::ui::theme::Theme;

    fn new_state() -> AppState {
        AppState::new(Theme::default())
    }

    fn photos(count: usize) -> Vec<Photo> {
        (0..count)
            .map(|i| Photo::new(format!("{i}"), "65535", "sec", format!("photo {i}")))
            .collect()
    }

    fn dispatch(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
        handle_event(state, event).unwrap()
    }

    fn type_query(state: &mut AppState, query: &str) {
        dispatch(state, &Event::SearchMode);
        for c in query.chars() {
            dispatch(state, &Event::Char(c));
        }
    }

    fn fetch_request(actions: &[Action]) -> FetchRequest {
        actions
            .iter()
            .find_map(|action| match action {
                Action::Fetch(request) => Some(request.clone()),
                _ => None,
            })
            .expect("expected a fetch action")
    }

    fn loaded_state(count: usize) -> AppState {
        let mut state = new_state();
        let (_, actions) = dispatch(
            &mut state,
            &Event::SearchRequested {
                query: "sea".to_string(),
            },
        );
        let request = fetch_request(&actions);
        dispatch(
            &mut state,
            &Event::FetchCompleted {
                generation: request.generation,
                result: Ok(photos(count)),
            },
        );
        state
    }

    #[test]
    fn submitted_search_fetches_page_one() {
        let mut state = new_state();
        type_query(&mut state, "red fox");

        let (should_render, actions) = dispatch(&mut state, &Event::SubmitSearch);
        assert!(should_render);

        let request = fetch_request(&actions);
        assert_eq!(request.query, "red fox");
        assert_eq!(request.page, 1);

        // History waits for the page to arrive.
        assert!(state.history.is_empty());
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.session.loading());
    }

    #[test]
    fn arrived_first_page_records_and_persists_the_query() {
        let mut state = new_state();
        type_query(&mut state, "red fox");
        let (_, actions) = dispatch(&mut state, &Event::SubmitSearch);
        let request = fetch_request(&actions);

        let (_, actions) = dispatch(
            &mut state,
            &Event::FetchCompleted {
                generation: request.generation,
                result: Ok(photos(3)),
            },
        );

        assert_eq!(state.history.len(), 1);
        assert!(matches!(
            actions[0],
            Action::PostToWorker(WorkerMessage::RecordQuery { ref query, .. }) if query == "red fox"
        ));
    }

    #[test]
    fn repeated_search_records_again() {
        let mut state = new_state();
        for _ in 0..2 {
            type_query(&mut state, "sea");
            let (_, actions) = dispatch(&mut state, &Event::SubmitSearch);
            let request = fetch_request(&actions);
            dispatch(
                &mut state,
                &Event::FetchCompleted {
                    generation: request.generation,
                    result: Ok(photos(1)),
                },
            );
        }

        assert_eq!(state.history.len(), 2);
    }

    #[test]
    fn failed_search_is_never_recorded() {
        let mut state = new_state();
        type_query(&mut state, "red fox");
        let (_, actions) = dispatch(&mut state, &Event::SubmitSearch);
        let request = fetch_request(&actions);

        dispatch(
            &mut state,
            &Event::FetchCompleted {
                generation: request.generation,
                result: Err("timeout".to_string()),
            },
        );

        assert!(state.history.is_empty());
    }

    #[test]
    fn startup_search_records_once_its_page_arrives() {
        let mut state = new_state();
        let (_, actions) = dispatch(
            &mut state,
            &Event::SearchRequested {
                query: "mountains".to_string(),
            },
        );

        let request = fetch_request(&actions);
        assert_eq!(request.query, "mountains");
        assert!(state.history.is_empty());

        dispatch(
            &mut state,
            &Event::FetchCompleted {
                generation: request.generation,
                result: Ok(photos(5)),
            },
        );
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn dropdown_submission_uses_highlighted_suggestion() {
        let mut state = new_state();
        state.history.record("blue sky");
        state.history.record("red fox");

        dispatch(&mut state, &Event::SearchMode);
        dispatch(&mut state, &Event::FocusSuggestions);
        // Newest first: row 0 is "red fox", row 1 is "blue sky".
        dispatch(&mut state, &Event::KeyDown);
        let (_, actions) = dispatch(&mut state, &Event::SubmitSearch);

        assert_eq!(fetch_request(&actions).query, "blue sky");
    }

    #[test]
    fn typing_from_dropdown_returns_focus_to_input() {
        let mut state = new_state();
        state.history.record("sea");

        dispatch(&mut state, &Event::SearchMode);
        dispatch(&mut state, &Event::FocusSuggestions);
        assert_eq!(
            state.input_mode,
            InputMode::Search(SearchFocus::Suggestions)
        );

        dispatch(&mut state, &Event::Char('x'));
        assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Typing));
        assert_eq!(state.search_input, "x");
    }

    #[test]
    fn dropdown_focus_refused_without_suggestions() {
        let mut state = new_state();
        dispatch(&mut state, &Event::SearchMode);
        dispatch(&mut state, &Event::Char('z'));

        let (should_render, _) = dispatch(&mut state, &Event::FocusSuggestions);
        assert!(!should_render);
        assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Typing));
    }

    #[test]
    fn selection_near_list_end_requests_next_page_once() {
        let mut state = loaded_state(10);

        // Rows 0..=4 are outside the sentinel zone of a 10-row list.
        for _ in 0..4 {
            let (_, actions) = dispatch(&mut state, &Event::KeyDown);
            assert!(actions.is_empty());
        }

        // Row 5 is within SENTINEL_ROWS of the end.
        let (_, actions) = dispatch(&mut state, &Event::KeyDown);
        let request = fetch_request(&actions);
        assert_eq!(request.page, 2);

        // The slot is occupied, so further movement does not re-fire.
        let (_, actions) = dispatch(&mut state, &Event::KeyDown);
        assert!(actions.is_empty());
    }

    #[test]
    fn appended_page_extends_list_and_advances_cursor() {
        let mut state = loaded_state(10);
        for _ in 0..4 {
            dispatch(&mut state, &Event::KeyDown);
        }
        let (_, actions) = dispatch(&mut state, &Event::KeyDown);
        let pending = fetch_request(&actions);

        let (should_render, actions) = dispatch(
            &mut state,
            &Event::FetchCompleted {
                generation: pending.generation,
                result: Ok(photos(10)),
            },
        );
        assert!(should_render);
        assert!(actions.is_empty());
        assert_eq!(state.session.photos().len(), 20);
        assert_eq!(state.session.page(), 2);
    }

    #[test]
    fn empty_first_page_probes_the_next_page() {
        let mut state = new_state();
        let (_, actions) = dispatch(
            &mut state,
            &Event::SearchRequested {
                query: "qwzx".to_string(),
            },
        );
        let first = fetch_request(&actions);

        let (_, actions) = dispatch(
            &mut state,
            &Event::FetchCompleted {
                generation: first.generation,
                result: Ok(vec![]),
            },
        );

        // More-available stays true after an empty first page, and the
        // sentinel is trivially in view, so page 2 is probed immediately.
        assert!(state.session.has_more());
        let probe = fetch_request(&actions);
        assert_eq!(probe.page, 2);

        let (_, actions) = dispatch(
            &mut state,
            &Event::FetchCompleted {
                generation: probe.generation,
                result: Ok(vec![]),
            },
        );
        assert!(actions.is_empty());
        assert!(!state.session.has_more());
    }

    #[test]
    fn fetch_failure_renders_and_leaves_state_retryable() {
        let mut state = loaded_state(10);
        for _ in 0..4 {
            dispatch(&mut state, &Event::KeyDown);
        }
        let (_, actions) = dispatch(&mut state, &Event::KeyDown);
        let pending = fetch_request(&actions);

        let (should_render, actions) = dispatch(
            &mut state,
            &Event::FetchCompleted {
                generation: pending.generation,
                result: Err("502 Bad Gateway".to_string()),
            },
        );
        assert!(should_render);
        assert!(actions.is_empty());
        assert_eq!(state.session.photos().len(), 10);
        assert!(state.session.has_more());

        // Moving again retries the same page.
        let (_, actions) = dispatch(&mut state, &Event::KeyDown);
        assert_eq!(fetch_request(&actions).page, 2);
    }

    #[test]
    fn stale_completion_is_dropped_without_render() {
        let mut state = new_state();
        let (_, actions) = dispatch(
            &mut state,
            &Event::SearchRequested {
                query: "old".to_string(),
            },
        );
        let superseded = fetch_request(&actions);

        let (_, actions) = dispatch(
            &mut state,
            &Event::SearchRequested {
                query: "new".to_string(),
            },
        );
        let current = fetch_request(&actions);

        let (should_render, actions) = dispatch(
            &mut state,
            &Event::FetchCompleted {
                generation: superseded.generation,
                result: Ok(photos(8)),
            },
        );
        assert!(!should_render);
        assert!(actions.is_empty());
        assert!(state.session.photos().is_empty());

        dispatch(
            &mut state,
            &Event::FetchCompleted {
                generation: current.generation,
                result: Ok(photos(2)),
            },
        );
        assert_eq!(state.session.photos().len(), 2);
    }

    #[test]
    fn new_search_resets_selection_and_keeps_old_results_until_success() {
        let mut state = loaded_state(10);
        for _ in 0..3 {
            dispatch(&mut state, &Event::KeyDown);
        }

        type_query(&mut state, "land");
        let (_, actions) = dispatch(&mut state, &Event::SubmitSearch);
        let request = fetch_request(&actions);

        assert_eq!(state.selected_index, 0);
        assert_eq!(state.session.photos().len(), 10);

        dispatch(
            &mut state,
            &Event::FetchCompleted {
                generation: request.generation,
                result: Ok(photos(4)),
            },
        );
        assert_eq!(state.session.photos().len(), 4);
    }

    #[test]
    fn preview_round_trip_emits_open_url() {
        let mut state = loaded_state(3);

        let (should_render, _) = dispatch(&mut state, &Event::OpenPreview);
        assert!(should_render);
        assert_eq!(state.input_mode, InputMode::Preview);

        let (_, actions) = dispatch(&mut state, &Event::OpenInBrowser);
        assert!(matches!(
            &actions[0],
            Action::OpenUrl { url } if url == "https://live.staticflickr.com/65535/0_sec.jpg"
        ));

        dispatch(&mut state, &Event::ClosePreview);
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn preview_refused_with_no_photos() {
        let mut state = new_state();
        let (should_render, actions) = dispatch(&mut state, &Event::OpenPreview);
        assert!(!should_render);
        assert!(actions.is_empty());
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn open_in_browser_works_from_the_list() {
        let mut state = loaded_state(3);
        dispatch(&mut state, &Event::KeyDown);

        let (_, actions) = dispatch(&mut state, &Event::OpenInBrowser);
        assert!(matches!(
            &actions[0],
            Action::OpenUrl { url } if url == "https://live.staticflickr.com/65535/1_sec.jpg"
        ));
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn refresh_reruns_the_active_query() {
        let mut state = loaded_state(3);
        dispatch(&mut state, &Event::KeyDown);

        let (should_render, actions) = dispatch(&mut state, &Event::RefreshSearch);
        assert!(should_render);
        let request = fetch_request(&actions);
        assert_eq!(request.query, "sea");
        assert_eq!(request.page, 1);
        assert_eq!(state.selected_index, 0);
        assert!(state.session.loading());
    }

    #[test]
    fn refresh_before_any_search_is_ignored() {
        let mut state = new_state();
        let (should_render, actions) = dispatch(&mut state, &Event::RefreshSearch);
        assert!(!should_render);
        assert!(actions.is_empty());
    }

    #[test]
    fn permission_denial_flags_state() {
        let mut state = new_state();
        let (should_render, _) =
            dispatch(&mut state, &Event::PermissionsResult { granted: false });
        assert!(should_render);
        assert!(state.permissions_denied);
    }

    #[test]
    fn loaded_history_fills_an_open_dropdown() {
        let mut state = new_state();
        dispatch(&mut state, &Event::SearchMode);

        let entries = vec![
            crate::domain::HistoryEntry::new("foxes"),
            crate::domain::HistoryEntry::new("owls"),
        ];
        let (should_render, _) = dispatch(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::HistoryLoaded { entries }),
        );

        assert!(should_render);
        assert_eq!(state.suggestions.len(), 2);
    }

    #[test]
    fn quit_emits_close_focus() {
        let mut state = new_state();
        let (_, actions) = dispatch(&mut state, &Event::CloseFocus);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
