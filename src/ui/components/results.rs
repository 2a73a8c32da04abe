//! Result list component renderer.
//!
//! This module renders the photo results as a two-column list with TITLE and
//! URL columns, plus the status row that follows the list while more pages
//! load or once the feed is exhausted.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayPhoto;

/// Renders the result column headers at the specified row.
///
/// Displays "TITLE" and "URL" column headers with bold styling and theme
/// colors. Uses fixed column width (37 characters for TITLE).
///
/// # Parameters
///
/// * `row` - Row position to render the headers (1-indexed)
/// * `theme` - Active color theme
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_result_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{:<37} {:<}", "TITLE", "URL");
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all result rows starting at the specified row.
///
/// Iterates through the visible photo window and renders each photo as a row
/// with selection styling.
///
/// # Parameters
///
/// * `row` - Starting row position for the list (1-indexed)
/// * `photos` - Visible photo rows to render
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns (for padding)
///
/// # Returns
///
/// The next available row position (row + number of photos)
pub fn render_result_rows(
    row: usize,
    photos: &[DisplayPhoto],
    theme: &Theme,
    cols: usize,
) -> usize {
    let mut current_row = row;
    for photo in photos {
        current_row = render_result_row(current_row, photo, theme, cols);
    }
    current_row
}

/// Renders a single result row at the specified row position.
///
/// Displays one photo with:
/// - TITLE column (37 chars fixed width, left-aligned)
/// - URL column (remaining width, left-aligned)
/// - Selection highlighting (full row background)
///
/// # Layout
///
/// ```text
/// TITLE (up to 35 chars) [2 spaces] URL (variable) [padding to fill line]
/// ```
///
/// The row is padded to fill the entire terminal width to ensure consistent
/// selection background rendering. Titles and URLs can contain multibyte
/// characters, so all width math counts characters.
fn render_result_row(row: usize, photo: &DisplayPhoto, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if photo.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    print!("{}", photo.title);
    let title_len = photo.title.chars().count();
    print!("{}", " ".repeat(37_usize.saturating_sub(title_len)));

    if !photo.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}", photo.url);

    let line_len = 37 + photo.url.chars().count();
    let padding = cols.saturating_sub(line_len);
    print!("{}", " ".repeat(padding));

    print!("{}", Theme::reset());
    row + 1
}

/// Renders the status row that trails the result list.
///
/// Shows "Loading more photos..." while a pagination fetch is outstanding, or
/// "End of results." once no further pages exist. The text is centered and
/// uses the theme accent color.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_list_tail(row: usize, text: &str, theme: &Theme, cols: usize) -> usize {
    let text_len = text.chars().count();
    let col = cols.saturating_sub(text_len) / 2 + 1;

    position_cursor(row, col);
    print!("{}", Theme::fg(&theme.colors.accent_fg));
    print!("{text}");
    print!("{}", Theme::reset());
    row + 1
}
