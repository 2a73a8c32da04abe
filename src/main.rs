//! Zellij plugin wrapper and entry point.
//!
//! This module provides the thin integration layer between the Zflick library
//! and the Zellij plugin system. It implements the `ZellijPlugin` and
//! `ZellijWorker` traits to handle Zellij events and lifecycle.
//!
//! # Architecture
//!
//! The plugin uses Zellij's worker thread support for background history I/O:
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij Main Thread    │
//! │  ┌──────────────────┐   │
//! │  │  State (plugin)  │   │  ← UI state, event handling
//! │  └──────────────────┘   │
//! │          │              │
//! │          │ IPC          │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │   ZflickWorker   │   │  ← Background processing
//! │  │ (worker thread)  │   │  ← History storage operations
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for Key, `CustomMessage`, `WebRequestResult`,
//!    `RunCommandResult`, `PermissionRequestResult` events
//! 3. **Permission Grant**: Load persisted history, submit the startup
//!    search (the configured `initial_query`, defaulting to the empty query)
//! 4. **Update**: Handle events, delegate to library layer
//! 5. **Render**: Call library render function
//!
//! # Worker Communication
//!
//! Messages between plugin and worker use JSON serialization:
//!
//! - Plugin → Worker: [`WorkerMessage`] (`LoadHistory`, `RecordQuery`)
//! - Worker → Plugin: [`WorkerResponse`] (`HistoryLoaded`, error details)
//!
//! # Event Mapping
//!
//! Zellij events are translated to library events:
//!
//! - `Key(Down)` → `Event::KeyDown`
//! - `Key(Enter)` → `Event::OpenPreview` / `Event::SubmitSearch` by mode
//! - `WebRequestResult` → `Event::FetchCompleted { generation, result }`
//! - `CustomMessage` → `Event::WorkerResponse`
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+n`: Move down
//! - `Ctrl+p`: Move up
//! - `Ctrl+c`: Close plugin
//!
//! In normal mode:
//! - `j`/`Down`: Move down
//! - `k`/`Up`: Move up
//! - `Enter`: Open preview
//! - `o`: Open the selected image in the browser
//! - `r`: Re-run the current query
//! - `/` or `s`: Enter search mode
//! - `q`/`Esc`: Close plugin
//!
//! In search mode:
//! - printable keys: Type the query
//! - `Enter`: Submit search
//! - `Down`/`Tab`: Focus the suggestion dropdown
//! - `Esc`: Exit search (or return to typing, from the dropdown)
//!
//! In preview mode:
//! - `o`/`Enter`: Open the image in the browser
//! - `Esc`/`q`: Back to the result list

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use zflick::app::SearchFocus;
use zflick::worker::{WorkerMessage, WorkerResponse, ZflickWorker};
use zflick::{handle_event, Action, Config, Event, InputMode};

// Register plugin and worker with Zellij
register_plugin!(State);
register_worker!(ZflickWorker, zflick_worker, ZFLICK_WORKER);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with Zellij-specific concerns like worker
/// communication and the fetch credentials.
struct State {
    /// Core application state from library layer.
    app: zflick::app::AppState,

    /// Worker thread identifier for IPC messaging.
    worker_name: String,

    /// Configured Flickr API key, if any.
    api_key: Option<String>,

    /// Query to search once permissions are granted.
    initial_query: Option<String>,

    /// Command used to open image URLs.
    open_command: String,

    /// Whether the startup search has already been issued.
    searched_on_start: bool,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: zflick::initialize(&default_config),
            worker_name: "zflick".to_string(),
            api_key: None,
            initial_query: None,
            open_command: default_config.open_command,
            searched_on_start: false,
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Called once during plugin startup. Parses configuration, initializes
    /// application state, requests permissions, and subscribes to events.
    ///
    /// # Permissions
    ///
    /// Requests:
    /// - `WebAccess`: Fetch photo pages from the Flickr REST API
    /// - `RunCommands`: Execute the configured opener for image URLs
    ///
    /// # Subscriptions
    ///
    /// - `Key`: Keyboard input
    /// - `CustomMessage`: Worker responses
    /// - `WebRequestResult`: Fetched photo pages
    /// - `RunCommandResult`: Opener command outcome
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zflick::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!("plugin loading started");
        tracing::debug!(
            has_api_key = config.api_key.is_some(),
            initial_query = ?config.initial_query,
            "parsed configuration"
        );
        self.app = zflick::initialize(&config);
        tracing::debug!("app state initialized");

        tracing::debug!("requesting permissions");
        request_permission(&[PermissionType::WebAccess, PermissionType::RunCommands]);

        tracing::debug!("subscribing to events");
        subscribe(&[
            EventType::Key,
            EventType::CustomMessage,
            EventType::WebRequestResult,
            EventType::RunCommandResult,
            EventType::PermissionRequestResult,
        ]);

        self.api_key.clone_from(&config.api_key);
        self.initial_query.clone_from(&config.initial_query);
        self.open_command.clone_from(&config.open_command);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// Translates Zellij events to library events, delegates to `handle_event`,
    /// and executes resulting actions. Returns `true` if the UI should re-render.
    ///
    /// # Tracing
    ///
    /// Each event is traced with its type for observability.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
        let _guard = span.entered();

        tracing::debug!(event = %event_name, "processing event");

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match self.map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_request_event(status, &body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::RunCommandResult(exit_code, _stdout, stderr, _context) => {
                if exit_code != Some(0) {
                    let error = String::from_utf8(stderr).unwrap_or_default();
                    tracing::warn!(exit_code = ?exit_code, error = %error, "opener command failed");
                }
                return false;
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                match self.handle_permission_result(permissions) {
                    Some(event) => event,
                    None => return false,
                }
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Renders the plugin UI.
    ///
    /// Delegates to the library's rendering layer.
    fn render(&mut self, rows: usize, cols: usize) {
        zflick::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::RunCommandResult(..) => "RunCommandResult".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    ///
    /// The mapping depends on the current input mode: plain letters navigate
    /// in normal mode but type into the search bar in search mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyUp);
        }
        if key.bare_key == BareKey::Char('c') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::CloseFocus);
        }

        Some(match self.app.input_mode {
            InputMode::Normal => match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                BareKey::Enter => Event::OpenPreview,
                BareKey::Char('o') => Event::OpenInBrowser,
                BareKey::Char('r') => Event::RefreshSearch,
                BareKey::Char('/' | 's') => Event::SearchMode,
                BareKey::Char('q') | BareKey::Esc => Event::CloseFocus,
                _ => return None,
            },
            InputMode::Search(SearchFocus::Typing) => match key.bare_key {
                BareKey::Enter => Event::SubmitSearch,
                BareKey::Esc => Event::ExitSearch,
                BareKey::Down | BareKey::Tab => Event::FocusSuggestions,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            },
            InputMode::Search(SearchFocus::Suggestions) => match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                BareKey::Enter => Event::SubmitSearch,
                BareKey::Esc => Event::FocusSearchBar,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            },
            InputMode::Preview => match key.bare_key {
                BareKey::Enter | BareKey::Char('o') => Event::OpenInBrowser,
                BareKey::Esc | BareKey::Char('q') => Event::ClosePreview,
                _ => return None,
            },
        })
    }

    /// Handles permission request results.
    ///
    /// On grant, kicks off the deferred startup work: loading persisted
    /// history and issuing the configured initial search.
    fn handle_permission_result(&mut self, permissions: PermissionStatus) -> Option<Event> {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted - initializing plugin");
                self.post_worker_message(&WorkerMessage::load_history());

                if self.searched_on_start || self.api_key.is_none() {
                    return None;
                }
                // An unconfigured initial query still searches: the empty
                // query is valid and fills the list with fresh uploads.
                let query = self.initial_query.clone().unwrap_or_default();
                self.searched_on_start = true;
                tracing::debug!(query = %query, "starting initial search");
                Some(Event::SearchRequested { query })
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - plugin cannot fetch photos");
                Some(Event::PermissionsResult { granted: false })
            }
        }
    }

    /// Maps custom message events to application events.
    fn map_custom_message_event(&self, message: &str, payload: &str) -> Option<Event> {
        tracing::debug!(message_name = %message, payload_len = payload.len(), "custom message event");

        if message == self.worker_name {
            match serde_json::from_str::<WorkerResponse>(payload) {
                Ok(response) => {
                    tracing::debug!(response = ?response, "worker response received");
                    Some(Event::WorkerResponse(response))
                }
                Err(e) => {
                    tracing::debug!(error = %e, "failed to deserialize worker response");
                    None
                }
            }
        } else {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            None
        }
    }

    /// Maps web request results to fetch completion events.
    ///
    /// The context map echoes what the fetch was issued with; a result
    /// without a generation stamp is not one of ours and is ignored.
    fn map_web_request_event(
        status: u16,
        body: &[u8],
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        let generation = context.get("generation")?.parse::<u64>().ok()?;

        tracing::debug!(status = status, generation = generation, "web request result");

        let result = if status == 200 {
            zflick::flickr::parse_search_page(body).map_err(|e| e.to_string())
        } else {
            Err(format!("HTTP status {status}"))
        };

        Some(Event::FetchCompleted { generation, result })
    }

    /// Posts a message to the worker thread.
    ///
    /// Serializes the message as JSON and sends via Zellij's IPC system.
    /// Serialization errors are logged but not propagated.
    fn post_worker_message(&self, message: &WorkerMessage) {
        match serde_json::to_string(&message) {
            Ok(payload) => {
                tracing::debug!(payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(self.worker_name.clone()),
                    name: self.worker_name.clone(),
                    payload,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker message");
            }
        }
    }

    /// Executes an action returned from event handling.
    ///
    /// Translates library actions to Zellij API calls.
    ///
    /// # Actions
    ///
    /// - `CloseFocus`: Close plugin pane
    /// - `PostToWorker`: Send IPC message to worker thread
    /// - `Fetch`: Issue a `web_request` for one result page
    /// - `OpenUrl`: Run the configured opener command with the URL
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::PostToWorker(ref message) => {
                tracing::debug!(message = ?message, "posting message to worker");
                self.post_worker_message(message);
            }
            Action::Fetch(ref request) => {
                let Some(api_key) = self.api_key.as_deref() else {
                    tracing::warn!("fetch requested without a configured api key");
                    return;
                };

                let url = zflick::flickr::search_url(api_key, &request.query, request.page);

                // The context round-trips through the host and identifies
                // which fetch a WebRequestResult settles.
                let mut context = BTreeMap::new();
                context.insert("generation".to_string(), request.generation.to_string());
                context.insert("query".to_string(), request.query.clone());
                context.insert("page".to_string(), request.page.to_string());

                tracing::debug!(
                    generation = request.generation,
                    page = request.page,
                    "issuing page fetch"
                );
                web_request(url, HttpVerb::Get, BTreeMap::new(), vec![], context);
            }
            Action::OpenUrl { ref url } => {
                tracing::debug!(url = %url, command = %self.open_command, "opening url");
                run_command(&[self.open_command.as_str(), url.as_str()], BTreeMap::new());
            }
        }
    }
}
