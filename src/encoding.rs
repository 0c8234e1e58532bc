//! Unicode to WinAnsiEncoding conversion for PDF text rendering
//!
//! The standard Type1 fonts are shown with single-byte strings. WinAnsi
//! agrees with Latin-1 over 0x00..=0x7F and 0xA0..=0xFF; the 0x80..=0x9F
//! range holds the Windows-1252 extensions (euro, smart quotes, dashes).
//! Characters with no WinAnsi slot are replaced with '?'.

/// Convert a Unicode string to WinAnsiEncoding bytes
pub fn to_winansi(text: &str) -> Vec<u8> {
    text.chars().map(winansi_byte).collect()
}

fn winansi_byte(ch: char) -> u8 {
    let cp = ch as u32;
    match cp {
        0x00..=0x7F | 0xA0..=0xFF => cp as u8,
        _ => match ch {
            '\u{20AC}' => 0x80, // euro sign
            '\u{201A}' => 0x82,
            '\u{0192}' => 0x83,
            '\u{201E}' => 0x84,
            '\u{2026}' => 0x85, // horizontal ellipsis
            '\u{2020}' => 0x86,
            '\u{2021}' => 0x87,
            '\u{02C6}' => 0x88,
            '\u{2030}' => 0x89,
            '\u{0160}' => 0x8A,
            '\u{2039}' => 0x8B,
            '\u{0152}' => 0x8C,
            '\u{017D}' => 0x8E,
            '\u{2018}' => 0x91, // left single quotation mark
            '\u{2019}' => 0x92, // right single quotation mark
            '\u{201C}' => 0x93, // left double quotation mark
            '\u{201D}' => 0x94, // right double quotation mark
            '\u{2022}' => 0x95, // bullet
            '\u{2013}' => 0x96, // en dash
            '\u{2014}' => 0x97, // em dash
            '\u{02DC}' => 0x98,
            '\u{2122}' => 0x99, // trade mark sign
            '\u{0161}' => 0x9A,
            '\u{203A}' => 0x9B,
            '\u{0153}' => 0x9C,
            '\u{017E}' => 0x9E,
            '\u{0178}' => 0x9F,
            _ => b'?',
        },
    }
}
