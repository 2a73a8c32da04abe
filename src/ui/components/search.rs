//! Search bar component renderer.
//!
//! This module renders the search input box with a bordered frame, the typed
//! query, and the history suggestion dropdown underneath.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{SearchBarInfo, SuggestionRow};

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the search input box and its suggestion dropdown.
///
/// Displays a 3-line bordered box containing the search query text, followed
/// by one row per history suggestion. The box is horizontally centered with
/// margins on both sides.
///
/// # Parameters
///
/// * `row` - Starting row position for the search box (1-indexed)
/// * `search` - Search bar information (query text, focus, suggestions)
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The next available row position (row + 3 + number of suggestion rows)
///
/// # Layout
///
/// ```text
/// [margin] ┌───────────────────────┐ [margin]
/// [margin] │ Search: fox█          │ [margin]
/// [margin] └───────────────────────┘ [margin]
/// [margin]   red foxes      2h ago
/// [margin]   fox cubs       3d ago
/// ```
///
/// The box width is calculated as `cols - (2 * SEARCH_BOX_MARGIN)`. The inner
/// content width is `box_width - 2` (accounting for left and right borders).
/// A block cursor is appended to the query while keystrokes edit the input.
///
/// # Rendering Details
///
/// - Borders use theme `search_bar_border` color
/// - Query text uses theme `text_normal` color
/// - Suggestion rows highlight the matched input and dim the age column
/// - The highlighted suggestion uses selection colors across the row
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let cursor = if search.focus_typing { "█" } else { "" };
    let search_text = format!(" Search: {}{}", search.query, cursor);
    let padding = inner_width.saturating_sub(search_text.chars().count());

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{search_text}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let mut current_row = row + 3;
    for suggestion in &search.suggestions {
        current_row = render_suggestion_row(current_row, suggestion, theme, inner_width);
    }
    current_row
}

/// Renders one suggestion dropdown row.
///
/// The query sits left-aligned with its matched input highlighted; the age
/// sits right-aligned against the box edge.
fn render_suggestion_row(
    row: usize,
    suggestion: &SuggestionRow,
    theme: &Theme,
    inner_width: usize,
) -> usize {
    let query_len = suggestion.query.chars().count();
    let age_len = suggestion.age.chars().count();
    let gap = inner_width.saturating_sub(query_len + age_len + 2);

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN + 1));

    if suggestion.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
        print!(" {}", suggestion.query);
        print!("{}", " ".repeat(gap));
        print!("{} ", suggestion.age);
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!(" ");
        helpers::render_highlighted_text(
            &suggestion.query,
            suggestion.highlight_range,
            theme,
            false,
        );
        print!("{}", " ".repeat(gap));
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{} ", suggestion.age);
    }

    print!("{}", Theme::reset());
    row + 1
}
