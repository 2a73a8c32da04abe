//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! plugin runtime (main.rs) and the domain/storage/worker layers. It implements
//! the event-driven architecture that powers the interactive UI.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └── Fetch / Worker Completions ────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Input mode state machine types
//! - [`scroll`]: Selection-proximity sentinel that drives pagination
//! - [`session`]: Pagination state machine for the active query
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use zflick::app::{AppState, Event, handle_event};
//! use zflick::ui::theme::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! let (_should_render, _actions) = handle_event(&mut state, &Event::KeyDown)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod scroll;
pub mod session;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, SearchFocus};
pub use scroll::{ScrollTrigger, SENTINEL_ROWS};
pub use session::{FetchOutcome, FetchRequest, SearchSession};
pub use state::AppState;
