//! Page geometry constants for document rendering

use serde::{Deserialize, Serialize};

use crate::error::{RendererError, RendererResult};
use crate::types::{Margins, Size};

/// A4 page size in PDF points
pub const A4_WIDTH: f64 = 595.28;
pub const A4_HEIGHT: f64 = 841.89;

/// Default body font size in points
pub const BODY_FONT_SIZE: f64 = 12.0;

/// Heading font sizes for levels 1 to 3
pub const HEADING_FONT_SIZES: [f64; 3] = [18.0, 16.0, 14.0];

/// Line height as a multiple of the font size
pub const LINE_SPACING: f64 = 1.2;

/// Baseline offset from the top of a line, as a fraction of the font size
pub const ASCENT_FACTOR: f64 = 0.8;

/// Left indent for bullet list items
pub const LIST_INDENT: f64 = 15.0;

/// Bullet glyph prefix for list items
pub const BULLET: &str = "\u{2022} ";

/// Padding inside table cells, applied on every side
pub const CELL_PADDING: f64 = 4.0;

/// Smallest width a table column may be drawn at
pub const MIN_COLUMN_WIDTH: f64 = 2.0 * CELL_PADDING + 1.0;

/// Page size and margins, read-only for the whole document
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageGeometry {
    pub size: Size,
    pub margins: Margins,
}

impl PageGeometry {
    /// A4 with the standard document margins (top/bottom 50, left/right 72)
    pub fn a4() -> Self {
        Self {
            size: Size::new(A4_WIDTH, A4_HEIGHT),
            margins: Margins::new(50.0, 50.0, 72.0, 72.0),
        }
    }

    /// Horizontal space available for content
    pub fn usable_width(&self) -> f64 {
        self.size.width - self.margins.left - self.margins.right
    }

    /// Vertical space available for content
    pub fn usable_height(&self) -> f64 {
        self.size.height - self.margins.top - self.margins.bottom
    }

    /// Distance from the top of the page to the bottom content edge
    pub fn content_bottom(&self) -> f64 {
        self.size.height - self.margins.bottom
    }

    pub fn validate(&self) -> RendererResult<()> {
        if self.usable_width() <= 0.0 || self.usable_height() <= 0.0 {
            return Err(RendererError::InvalidGeometry(format!(
                "margins leave no usable area on a {}x{} page",
                self.size.width, self.size.height
            )));
        }
        Ok(())
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}
