//! PDF rendering core for the document generation service
//!
//! Takes the markdown-subset text an upstream generator produces (headings,
//! bullet lists, pipe tables) and renders it into a paginated A4 PDF using
//! the pdf-writer library: flowed text with dynamic page breaks, measured
//! column widths and tables that repeat their header row across pages.

mod classifier;
mod encoding;
mod error;
pub mod geometry;
mod layout;
mod metrics;
mod renderer;
mod sink;
mod table;
mod types;
mod wrap;

pub use classifier::classify;
pub use error::{RendererError, RendererResult};
pub use geometry::PageGeometry;
pub use layout::{FlowLayout, LayoutCursor};
pub use metrics::{line_height, text_width};
pub use renderer::{render_document, PdfRenderer};
pub use sink::{DocumentSink, PdfSink};
pub use types::{
    ContentUnit, DocumentMetadata, ElementKind, HeadingLevel, Margins, Size, TextStyle,
};
