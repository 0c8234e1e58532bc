//! Text measurement for the two standard font weights
//!
//! Widths come from the Adobe AFM files for Helvetica and Helvetica-Bold
//! (glyph widths per 1000 units) so that wrapping decisions match what the
//! viewer will actually draw with the standard-14 fonts. Characters outside
//! the printable ASCII range fall back to an approximation.

use crate::geometry::LINE_SPACING;
use crate::types::TextStyle;

/// Helvetica advance widths for characters 0x20..=0x7E, in 1/1000 em
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    // space ! " # $ % & ' ( ) * + , - . /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    278, 278, 584, 584, 584, 556, 1015,
    // A-Z
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    278, 278, 278, 469, 556, 333,
    // a-z
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // { | } ~
    334, 260, 334, 584,
];

/// Helvetica-Bold advance widths for characters 0x20..=0x7E, in 1/1000 em
#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

/// Width of a single character at the given style, in points
pub fn char_width(ch: char, style: TextStyle) -> f64 {
    let table = if style.bold { &HELVETICA_BOLD_WIDTHS } else { &HELVETICA_WIDTHS };
    let cp = ch as u32;
    if (0x20..=0x7E).contains(&cp) {
        f64::from(table[(cp - 0x20) as usize]) / 1000.0 * style.size
    } else {
        // No AFM data for this character; approximate like the WinAnsi
        // fallback path does.
        style.size * 0.6
    }
}

/// Width of a text run at the given style, in points
pub fn text_width(text: &str, style: TextStyle) -> f64 {
    text.chars().map(|ch| char_width(ch, style)).sum()
}

/// Line height for the given style, in points
pub fn line_height(style: TextStyle) -> f64 {
    style.size * LINE_SPACING
}
