//! Document stream sink
//!
//! The layout engine is written against the [`DocumentSink`] trait so the
//! drawing primitive stays swappable (and mockable in tests). [`PdfSink`] is
//! the production implementation backed by pdf-writer: it owns the catalog,
//! page tree and per-page content streams, registers the two standard font
//! weights, and finalizes into the PDF byte stream.
//!
//! Finalization consumes the sink, so every draw call necessarily precedes
//! it and it cannot run twice.

use log::info;
use pdf_writer::{Content, Finish, Name, Pdf, Rect as PdfRect, Ref, Str, TextStr};

use crate::encoding::to_winansi;
use crate::error::{RendererError, RendererResult};
use crate::geometry::PageGeometry;
use crate::types::{DocumentMetadata, TextStyle};

/// Resource names of the two registered font weights
const FONT_REGULAR: Name<'static> = Name(b"F1");
const FONT_BOLD: Name<'static> = Name(b"F2");

/// Drawing primitive the layout engine renders against.
///
/// Coordinates are PDF page coordinates (origin bottom-left, y up);
/// `draw_text` positions the baseline of the run.
pub trait DocumentSink {
    fn geometry(&self) -> PageGeometry;

    /// Close the current page and start a new one
    fn add_page(&mut self) -> RendererResult<()>;

    fn draw_text(&mut self, text: &str, x: f64, y: f64, style: TextStyle) -> RendererResult<()>;

    /// Stroke a rectangle outline with bottom-left corner at (x, y)
    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> RendererResult<()>;
}

/// PDF-backed document sink
pub struct PdfSink {
    pdf: Pdf,
    geometry: PageGeometry,
    page_tree_id: Ref,
    font_regular_id: Ref,
    font_bold_id: Ref,
    next_ref_id: i32,
    pages: Vec<Ref>,
    current_page: Option<(Ref, Ref, Content)>, // (page_id, content_id, content)
}

impl PdfSink {
    /// Create a sink with the first page already open and metadata written
    /// into the document information dictionary.
    pub fn new(geometry: PageGeometry, metadata: &DocumentMetadata) -> RendererResult<Self> {
        geometry.validate()?;

        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let page_tree_id = Ref::new(2);
        let font_regular_id = Ref::new(3);
        let font_bold_id = Ref::new(4);
        let info_id = Ref::new(5);

        pdf.catalog(catalog_id).pages(page_tree_id);

        // Standard-14 fonts need no embedding; text goes through the WinAnsi
        // conversion in the encoding module.
        pdf.type1_font(font_regular_id).base_font(Name(b"Helvetica"));
        pdf.type1_font(font_bold_id).base_font(Name(b"Helvetica-Bold"));

        pdf.document_info(info_id)
            .title(TextStr(&metadata.title))
            .author(TextStr(&metadata.author));

        let mut sink = Self {
            pdf,
            geometry,
            page_tree_id,
            font_regular_id,
            font_bold_id,
            next_ref_id: 6,
            pages: Vec::new(),
            current_page: None,
        };
        sink.start_page();
        Ok(sink)
    }

    fn next_ref(&mut self) -> Ref {
        let id = Ref::new(self.next_ref_id);
        self.next_ref_id += 1;
        id
    }

    fn start_page(&mut self) {
        let page_id = self.next_ref();
        let content_id = self.next_ref();
        self.pages.push(page_id);
        self.current_page = Some((page_id, content_id, Content::new()));
    }

    /// Write out the current page object with its content stream and font
    /// resources.
    fn end_page(&mut self) {
        if let Some((page_id, content_id, content)) = self.current_page.take() {
            let content_bytes = content.finish();
            self.pdf.stream(content_id, &content_bytes);

            let mut page = self.pdf.page(page_id);
            page.media_box(PdfRect::new(
                0.0,
                0.0,
                self.geometry.size.width as f32,
                self.geometry.size.height as f32,
            ));
            page.parent(self.page_tree_id);
            page.contents(content_id);
            {
                let mut resources = page.resources();
                let mut fonts = resources.fonts();
                fonts.pair(FONT_REGULAR, self.font_regular_id);
                fonts.pair(FONT_BOLD, self.font_bold_id);
            }
            page.finish();
        }
    }

    fn content_mut(&mut self) -> RendererResult<&mut Content> {
        match self.current_page {
            Some((_, _, ref mut content)) => Ok(content),
            None => Err(RendererError::PdfError("no open page".to_string())),
        }
    }

    /// Number of pages produced so far, the open one included
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Finalize the document and return the PDF byte stream.
    pub fn finish(mut self) -> RendererResult<Vec<u8>> {
        self.end_page();

        let page_count = self.pages.len() as i32;
        self.pdf
            .pages(self.page_tree_id)
            .kids(self.pages.iter().copied())
            .count(page_count);

        let bytes = self.pdf.finish();
        info!("PDF generated: {} pages, {} bytes", page_count, bytes.len());
        Ok(bytes)
    }
}

impl DocumentSink for PdfSink {
    fn geometry(&self) -> PageGeometry {
        self.geometry
    }

    fn add_page(&mut self) -> RendererResult<()> {
        self.end_page();
        self.start_page();
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, style: TextStyle) -> RendererResult<()> {
        let font = if style.bold { FONT_BOLD } else { FONT_REGULAR };
        let encoded = to_winansi(text);
        let content = self.content_mut()?;
        content.begin_text();
        content.set_font(font, style.size as f32);
        content.next_line(x as f32, y as f32);
        content.show(Str(&encoded));
        content.end_text();
        Ok(())
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> RendererResult<()> {
        let content = self.content_mut()?;
        content.rect(x as f32, y as f32, width as f32, height as f32);
        content.stroke();
        Ok(())
    }
}
