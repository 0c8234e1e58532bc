//! Line breaking (word wrapping)
//!
//! Greedy word-based breaking against measured widths. A word wider than the
//! available width gets a line of its own rather than triggering an endless
//! break loop; it will visually overflow, which is the lesser evil compared
//! to failing the whole document.

use crate::metrics::{line_height, text_width};
use crate::types::TextStyle;

/// Break text into lines that fit within `max_width` at the given style.
///
/// Always returns at least one line so that empty content still occupies
/// one line height.
pub fn wrap_text(text: &str, max_width: f64, style: TextStyle) -> Vec<String> {
    let space_width = text_width(" ", style);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0;

    for word in text.split_whitespace() {
        let word_width = text_width(word, style);
        let needed = if current.is_empty() {
            word_width
        } else {
            current_width + space_width + word_width
        };

        if needed <= max_width || current.is_empty() {
            if !current.is_empty() {
                current.push(' ');
                current_width += space_width;
            }
            current.push_str(word);
            current_width += word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}

/// Total height of `text` wrapped to `max_width`, in points
pub fn wrapped_height(text: &str, max_width: f64, style: TextStyle) -> f64 {
    wrap_text(text, max_width, style).len() as f64 * line_height(style)
}
