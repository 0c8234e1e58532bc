//! Type definitions for document rendering

use serde::{Deserialize, Serialize};

use crate::geometry::{BODY_FONT_SIZE, HEADING_FONT_SIZES};

/// Size with width and height
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Margins
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Margins {
    pub fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self { top, bottom, left, right }
    }
}

/// Heading level (`#`, `##` or `###` in the input text)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    pub fn font_size(self) -> f64 {
        match self {
            HeadingLevel::H1 => HEADING_FONT_SIZES[0],
            HeadingLevel::H2 => HEADING_FONT_SIZES[1],
            HeadingLevel::H3 => HEADING_FONT_SIZES[2],
        }
    }

    /// Level-1 headings are centered; lower levels are left-aligned.
    pub fn centered(self) -> bool {
        matches!(self, HeadingLevel::H1)
    }
}

/// A single renderable item produced by classification.
///
/// Units are immutable once created and consumed in order by the
/// flow layout engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ContentUnit {
    Heading { level: HeadingLevel, text: String },
    Paragraph { text: String },
    ListItem { text: String },
    Table { rows: Vec<Vec<String>> },
}

/// Kind of the most recently placed element, used for inter-element spacing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    None,
    Heading,
    Paragraph,
    List,
    Table,
}

/// Document metadata written once into the PDF information dictionary
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub title: String,
    pub author: String,
}

/// Text style for drawing and measurement (two weights, one family)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub size: f64,
    pub bold: bool,
}

impl TextStyle {
    pub fn body() -> Self {
        Self { size: BODY_FONT_SIZE, bold: false }
    }

    pub fn heading(level: HeadingLevel) -> Self {
        Self { size: level.font_size(), bold: true }
    }

    /// Table data cell style
    pub fn cell() -> Self {
        Self::body()
    }

    /// Table header cell style
    pub fn cell_header() -> Self {
        Self { size: BODY_FONT_SIZE, bold: true }
    }
}
