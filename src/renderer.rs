//! Top-level renderer
//!
//! Ties the pipeline together: classify the generated text, lay it out
//! against a PDF sink, finalize into bytes. Each call builds its own cursor
//! and sink, so concurrent generation requests never share layout state.

use log::info;

use crate::classifier::classify;
use crate::error::RendererResult;
use crate::geometry::PageGeometry;
use crate::layout::FlowLayout;
use crate::sink::PdfSink;
use crate::types::DocumentMetadata;

/// Renders markdown-subset document text into PDF bytes
#[derive(Debug, Clone, Default)]
pub struct PdfRenderer {
    geometry: PageGeometry,
}

impl PdfRenderer {
    /// Renderer with the standard A4 geometry
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_geometry(geometry: PageGeometry) -> Self {
        Self { geometry }
    }

    /// Render the full document. Returns the finalized PDF byte stream or
    /// fails as a whole; no partial output is ever produced.
    pub fn render(&self, text: &str, metadata: &DocumentMetadata) -> RendererResult<Vec<u8>> {
        let units = classify(text);
        info!("rendering document '{}': {} content units", metadata.title, units.len());

        let mut sink = PdfSink::new(self.geometry, metadata)?;
        FlowLayout::new(&mut sink).render(&units)?;
        sink.finish()
    }
}

/// Render `text` with the default A4 geometry
pub fn render_document(text: &str, metadata: &DocumentMetadata) -> RendererResult<Vec<u8>> {
    PdfRenderer::new().render(text, metadata)
}
