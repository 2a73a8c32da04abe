//! Preview component renderer.
//!
//! This module renders the detail view for a single photo, shown when the
//! user opens a result from the list.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PreviewInfo;

/// Renders the photo preview as a centered block of detail lines.
///
/// Displays the photo title, its identifier, and the full-size image URL,
/// followed by a hint for opening the image in a browser. A terminal cell
/// cannot show the image itself, so the preview surfaces everything needed
/// to open it externally.
///
/// # Parameters
///
/// * `preview` - Preview information for the opened photo
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Layout
///
/// ```text
/// [blank lines]
///            Red Fox in Snow
///
///            Photo ID:  53214
///            Image URL: https://live.staticflickr.com/65535/53214_ab.jpg
///
///            o: open in browser
/// ```
///
/// The block is left-aligned at a shared column so the labels line up; the
/// column is chosen from the widest line so the block as a whole sits
/// centered. Titles can be any UTF-8, so width math counts characters.
pub fn render_preview(preview: &PreviewInfo, theme: &Theme, cols: usize) {
    let id_line = format!("Photo ID:  {}", preview.photo_id);
    let url_line = format!("Image URL: {}", preview.image_url);
    let hint = "o: open in browser";

    let block_width = preview
        .title
        .chars()
        .count()
        .max(url_line.chars().count())
        .max(id_line.chars().count());
    let col = cols.saturating_sub(block_width) / 2 + 1;

    position_cursor(6, col);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.accent_fg));
    print!("{}", preview.title);
    print!("{}", Theme::reset());

    position_cursor(8, col);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{id_line}");
    print!("{}", Theme::reset());

    position_cursor(9, col);
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{url_line}");
    print!("{}", Theme::reset());

    position_cursor(11, col);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{hint}");
    print!("{}", Theme::reset());
}
