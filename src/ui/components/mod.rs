//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for different UI
//! elements, following a component-based architecture. Each component is
//! responsible for rendering a specific part of the interface.
//!
//! # Components
//!
//! - [`header`]: Title bar with the active query and loaded count
//! - [`footer`]: Help text and keybinding hints
//! - [`search`]: Search input box with the history suggestion dropdown
//! - [`results`]: Photo result list with columns (TITLE, URL)
//! - [`preview`]: Detail view for a single opened photo
//! - [`empty`]: Empty state message for no results
//!
//! # Layout Modes
//!
//! The module provides three high-level layout functions:
//!
//! - [`render_normal_mode`]: Header + Results + Footer
//! - [`render_search_mode`]: Header + `SearchBar` + Results + Footer
//! - [`render_preview_mode`]: Header + Preview + Footer
//!
//! The bare [`render_empty_state`] message is used directly when nothing else
//! is on screen.
//!
//! # Example
//!
//! ```rust,no_run
//! use zflick::ui::components::render_empty_state;
//! use zflick::ui::viewmodel::EmptyState;
//! use zflick::ui::Theme;
//!
//! let empty = EmptyState {
//!     message: "Search for photos".to_string(),
//!     subtitle: "Press / and type a query to begin".to_string(),
//! };
//! let theme = Theme::default();
//! render_empty_state(6, &empty, &theme, 80);
//! ```

mod empty;
mod footer;
mod header;
mod preview;
mod results;
mod search;

pub use empty::render_empty_state;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{PreviewInfo, SearchBarInfo, UIViewModel};

use footer::render_footer;
use header::render_header;
use preview::render_preview;
use results::{render_list_tail, render_result_headers, render_result_rows};
use search::render_search_bar;

/// Renders a horizontal border line at the specified row.
///
/// Used to separate UI sections (header/list, list/footer).
///
/// # Parameters
///
/// * `row` - Row position to render the border (1-indexed)
/// * `color` - Hex color for the border
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the top chrome shared by every layout (blank line, header, border).
///
/// # Returns
///
/// The first row available for mode-specific content.
fn render_top_chrome(vm: &UIViewModel, theme: &Theme, cols: usize) -> usize {
    let current_row = render_header(2, &vm.header, theme, cols);
    render_border(current_row, &theme.colors.border, cols)
}

/// Renders the bottom chrome shared by every layout (border, footer).
fn render_bottom_chrome(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_row = rows.saturating_sub(1);
    let border_row = footer_row.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}

/// Renders the result list section (column headers, rows, optional tail).
fn render_result_section(row: usize, vm: &UIViewModel, theme: &Theme, cols: usize) {
    let mut current_row = render_result_headers(row, theme);
    current_row = render_result_rows(current_row, &vm.display_photos, theme, cols);
    if let Some(tail) = &vm.list_tail {
        render_list_tail(current_row, tail, theme, cols);
    }
}

/// Renders the normal mode layout (no search bar).
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Result Headers]
/// [Result Rows]
/// [Tail row, when loading or exhausted]
/// [Blank padding to fill screen]
/// [Border]
/// [Footer]
/// ```
///
/// # Line Accounting
///
/// Reserves 8 lines for chrome (blank, header, 2 borders, column headers,
/// tail, footer and the trailing blank). The visible window computed into the
/// view model already fits the remaining space.
pub fn render_normal_mode(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let current_row = render_top_chrome(vm, theme, cols);
    render_result_section(current_row, vm, theme, cols);
    render_bottom_chrome(vm, theme, cols, rows);
}

/// Renders the search mode layout (with search bar and dropdown).
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search Bar - 3 lines]
/// [Suggestion dropdown - one row each]
/// [Result Headers]
/// [Result Rows]
/// [Blank padding to fill screen]
/// [Border]
/// [Footer]
/// ```
///
/// When no photo rows exist yet, the list section is replaced by the empty
/// state message so the user still sees why the list is blank while typing.
pub fn render_search_mode(
    vm: &UIViewModel,
    search: &SearchBarInfo,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = render_top_chrome(vm, theme, cols);
    current_row = render_search_bar(current_row, search, theme, cols);

    if vm.display_photos.is_empty() {
        if let Some(empty) = &vm.empty_state {
            render_empty_state(current_row + 1, empty, theme, cols);
        }
    } else {
        render_result_section(current_row, vm, theme, cols);
    }

    render_bottom_chrome(vm, theme, cols, rows);
}

/// Renders the preview mode layout (single photo detail).
pub fn render_preview_mode(
    vm: &UIViewModel,
    preview: &PreviewInfo,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    render_top_chrome(vm, theme, cols);
    render_preview(preview, theme, cols);
    render_bottom_chrome(vm, theme, cols, rows);
}
