//! Shared rendering utilities and helpers.
//!
//! This module provides low-level rendering utilities used across multiple UI
//! components. It handles cursor positioning and substring-match highlighting
//! with proper ANSI escape sequence management.
//!
//! # Features
//!
//! - **Match Highlighting**: Renders text with a highlighted character range
//! - **Selection Awareness**: Adjusts highlighting based on selection state
//! - **UTF-8 Safe**: Operates on character indices, not byte indices

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
///
/// # Parameters
///
/// * `row` - Target row (1-indexed)
/// * `col` - Target column (1-indexed, typically 1 for start of line)
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Finds the first case-insensitive occurrence of `needle` in `haystack`.
///
/// Returns the match as a `(start, end)` character index range (inclusive
/// start, exclusive end), suitable for [`render_highlighted_text`]. Comparison
/// lowercases both sides character by character, so the returned indices are
/// positions in `haystack`'s character sequence, not byte offsets.
///
/// Returns `None` for an empty needle; highlighting everything is the same as
/// highlighting nothing.
///
/// # Example
///
/// ```rust
/// use zflick::ui::helpers::match_range;
///
/// assert_eq!(match_range("Red Foxes", "fox"), Some((4, 7)));
/// assert_eq!(match_range("Red Foxes", "owl"), None);
/// assert_eq!(match_range("Red Foxes", ""), None);
/// ```
#[must_use]
pub fn match_range(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    if needle.is_empty() {
        return None;
    }

    let hay: Vec<String> = haystack
        .chars()
        .map(|c| c.to_lowercase().collect())
        .collect();
    let ned: Vec<String> = needle.chars().map(|c| c.to_lowercase().collect()).collect();

    if ned.len() > hay.len() {
        return None;
    }

    (0..=hay.len() - ned.len())
        .find(|&start| hay[start..start + ned.len()] == ned[..])
        .map(|start| (start, start + ned.len()))
}

/// Renders text with an optional highlighted character range.
///
/// Splits the text into normal and highlighted sections based on the provided
/// character range. The highlighted section uses match highlight colors unless
/// the row is selected, in which case selection colors take precedence.
///
/// # Parameters
///
/// * `text` - The text to render
/// * `range` - Character index range to highlight `(start, end)` (inclusive start, exclusive end)
/// * `theme` - Active color theme for highlight colors
/// * `is_selected` - Whether the row is currently selected (disables match highlighting)
///
/// # Character Indices
///
/// The range uses UTF-8 character indices (not byte indices). The function
/// converts the text to a character vector for proper indexing.
///
/// # Selection Behavior
///
/// When `is_selected` is `true`, match highlighting is disabled to avoid
/// conflicting with selection background colors.
pub fn render_highlighted_text(
    text: &str,
    range: Option<(usize, usize)>,
    theme: &Theme,
    is_selected: bool,
) {
    let Some((start, end)) = range.filter(|_| !is_selected) else {
        print!("{text}");
        return;
    };

    let chars: Vec<char> = text.chars().collect();
    let start = start.min(chars.len());
    let end = end.min(chars.len());

    let before: String = chars[..start].iter().collect();
    let matched: String = chars[start..end].iter().collect();
    let after: String = chars[end..].iter().collect();

    print!("{before}");
    print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
    print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
    print!("{matched}");
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{after}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_case_insensitive_matches() {
        assert_eq!(match_range("Golden Gate Bridge", "gate"), Some((7, 11)));
        assert_eq!(match_range("FOX", "fox"), Some((0, 3)));
        assert_eq!(match_range("fox", "FOX"), Some((0, 3)));
    }

    #[test]
    fn returns_character_indices_for_multibyte_text() {
        assert_eq!(match_range("Tokyo 東京 towers", "東京"), Some((6, 8)));
    }

    #[test]
    fn misses_and_empty_needles_yield_none() {
        assert_eq!(match_range("red fox", "owl"), None);
        assert_eq!(match_range("red fox", ""), None);
        assert_eq!(match_range("ox", "red fox"), None);
    }
}
