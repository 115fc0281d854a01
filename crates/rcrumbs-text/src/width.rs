#![forbid(unsafe_code)]

//! Cell-width helpers.
//!
//! All truncation respects grapheme boundaries: an emoji, ZWJ sequence, or
//! combining sequence is never split.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Marker drawn at the end of an ellipsized crumb.
pub const ELLIPSIS: &str = "…";

/// Display width of text in cells.
#[inline]
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Longest grapheme prefix of `text` at most `max_width` cells wide.
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut used = 0;
    text.graphemes(true)
        .take_while(|grapheme| {
            used += grapheme.width();
            used <= max_width
        })
        .collect()
}

/// Like [`truncate_to_width`], with `marker` in the last cells when the text
/// is cut. A marker wider than `max_width` is dropped.
#[must_use]
pub fn truncate_with_ellipsis(text: &str, max_width: usize, marker: &str) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    match max_width.checked_sub(marker.width()) {
        Some(room) => truncate_to_width(text, room) + marker,
        None => truncate_to_width(text, max_width),
    }
}
