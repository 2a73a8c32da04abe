//! Actions representing side effects to be executed by the plugin runtime.
//!
//! This module defines the [`Action`] type, which represents imperative commands
//! produced by the event handler after processing user input or system events.
//! Actions bridge pure state transformations and effectful operations like
//! issuing HTTP requests, opening a browser, or communicating with the
//! background worker.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event, allowing
//! multiple side effects to be queued atomically. The plugin runtime executes
//! these actions in sequence via the action processor.
//!
//! # Example
//!
//! ```rust
//! use zflick::app::Action;
//! use zflick::worker::WorkerMessage;
//!
//! let actions = vec![
//!     Action::PostToWorker(WorkerMessage::load_history()),
//! ];
//! ```

use crate::app::session::FetchRequest;
use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the plugin runtime.
///
/// Actions are produced by the event handler and executed by the action processor.
/// They represent the boundary between pure state transformations and effectful
/// operations like network fetches and worker communication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    ///
    /// Sent when the user explicitly requests to exit the plugin (e.g., pressing 'q').
    CloseFocus,

    /// Posts a message to the background worker thread.
    ///
    /// Enables asynchronous operations like loading or persisting search
    /// history without blocking the main event loop.
    PostToWorker(WorkerMessage),

    /// Issues a photo search request against the Flickr REST API.
    ///
    /// The runtime turns this into a non-blocking web request; the response
    /// comes back as a fetch-completed event carrying the same generation
    /// stamp so stale pages can be told apart from current ones.
    Fetch(FetchRequest),

    /// Opens a URL with the user's configured opener command.
    ///
    /// Used from the preview to hand the photo page to a real browser.
    OpenUrl {
        /// Fully qualified URL to open.
        url: String,
    },
}
