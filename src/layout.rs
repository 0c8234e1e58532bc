//! Flow layout engine
//!
//! Consumes the ordered content units and turns them into positioned draw
//! calls against a [`DocumentSink`], maintaining pagination. The cursor
//! tracks the vertical offset from the top of the current page; conversion
//! to PDF coordinates (origin bottom-left) happens at the draw call.

use log::debug;

use crate::error::{RendererError, RendererResult};
use crate::geometry::{ASCENT_FACTOR, BULLET, LIST_INDENT};
use crate::metrics::{line_height, text_width};
use crate::table::render_table;
use crate::types::{ContentUnit, ElementKind, TextStyle};
use crate::sink::DocumentSink;
use crate::wrap::wrap_text;

/// Mutable per-document layout state, constructed fresh for every rendering
/// invocation and owned by the engine.
#[derive(Debug, Clone)]
pub struct LayoutCursor {
    /// Vertical offset from the top edge of the current page
    pub y: f64,
    /// Kind of the most recently placed element
    pub last_kind: ElementKind,
    /// Zero-based index of the current page
    pub page_index: usize,
}

impl LayoutCursor {
    pub fn new(top_margin: f64) -> Self {
        Self { y: top_margin, last_kind: ElementKind::None, page_index: 0 }
    }
}

/// Flow layout engine over a document sink
pub struct FlowLayout<'a, S: DocumentSink> {
    sink: &'a mut S,
    cursor: LayoutCursor,
}

impl<'a, S: DocumentSink> FlowLayout<'a, S> {
    pub fn new(sink: &'a mut S) -> Self {
        let top_margin = sink.geometry().margins.top;
        Self { sink, cursor: LayoutCursor::new(top_margin) }
    }

    /// Lay out the whole unit sequence
    pub fn render(&mut self, units: &[ContentUnit]) -> RendererResult<()> {
        for unit in units {
            match unit {
                ContentUnit::Heading { level, text } => {
                    self.place_text_block(
                        text,
                        TextStyle::heading(*level),
                        0.0,
                        level.centered(),
                        ElementKind::Heading,
                    )?;
                }
                ContentUnit::Paragraph { text } => {
                    self.place_text_block(
                        text,
                        TextStyle::body(),
                        0.0,
                        false,
                        ElementKind::Paragraph,
                    )?;
                }
                ContentUnit::ListItem { text } => {
                    let bulleted = format!("{BULLET}{text}");
                    self.place_text_block(
                        &bulleted,
                        TextStyle::body(),
                        LIST_INDENT,
                        false,
                        ElementKind::List,
                    )?;
                }
                ContentUnit::Table { rows } => {
                    render_table(self.sink, &mut self.cursor, rows)?;
                    self.cursor.last_kind = ElementKind::Table;
                }
            }
        }
        Ok(())
    }

    /// Pages produced so far (one-based count)
    pub fn page_count(&self) -> usize {
        self.cursor.page_index + 1
    }

    /// Gap to insert above the next unit, encoding the document's visual
    /// rhythm: headings bind tightly to what follows, tables get generous
    /// breathing room.
    fn spacing_before(&self) -> f64 {
        let lh = line_height(TextStyle::body());
        match self.cursor.last_kind {
            ElementKind::None => 0.0,
            ElementKind::Heading => lh,
            ElementKind::Paragraph | ElementKind::List => lh * 1.5,
            ElementKind::Table => lh * 2.0,
        }
    }

    fn place_text_block(
        &mut self,
        text: &str,
        style: TextStyle,
        indent: f64,
        centered: bool,
        kind: ElementKind,
    ) -> RendererResult<()> {
        let geometry = self.sink.geometry();

        // No leading gap at the very top of a page
        if self.cursor.y > geometry.margins.top {
            self.cursor.y += self.spacing_before();
        }

        let available = geometry.usable_width() - indent;
        if available <= 0.0 {
            return Err(RendererError::UnrenderableContent(format!(
                "indent {indent} leaves no width for text"
            )));
        }
        let lines = wrap_text(text, available, style);
        let lh = line_height(style);
        let height = lines.len() as f64 * lh;

        // Break the page unless the cursor sits at the top margin already;
        // an unavoidably too-tall unit overflows instead of looping on
        // empty pages.
        if self.cursor.y + height > geometry.content_bottom() && self.cursor.y > geometry.margins.top
        {
            debug!(
                "page {} full ({:.1}pt block pending), starting new page",
                self.cursor.page_index + 1,
                height
            );
            self.sink.add_page()?;
            self.cursor.y = geometry.margins.top;
            self.cursor.page_index += 1;
        }

        let mut line_top = self.cursor.y;
        for line in &lines {
            let x = if centered {
                geometry.margins.left + (geometry.usable_width() - text_width(line, style)) / 2.0
            } else {
                geometry.margins.left + indent
            };
            let baseline = geometry.size.height - line_top - style.size * ASCENT_FACTOR;
            self.sink.draw_text(line, x, baseline, style)?;
            line_top += lh;
        }

        self.cursor.y += height;
        self.cursor.last_kind = kind;
        Ok(())
    }
}
