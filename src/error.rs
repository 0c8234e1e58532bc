//! Error types for the document renderer
//!
//! This module defines custom error types for the rendering pipeline,
//! providing clear error messages and proper error propagation.

use thiserror::Error;

/// Custom error type for renderer operations
#[derive(Error, Debug)]
pub enum RendererError {
    #[error("Unrenderable content: {0}")]
    UnrenderableContent(String),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("PDF generation error: {0}")]
    PdfError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for renderer operations
pub type RendererResult<T> = Result<T, RendererError>;

/// Helper to convert serde_json errors
impl From<serde_json::Error> for RendererError {
    fn from(err: serde_json::Error) -> Self {
        RendererError::PdfError(err.to_string())
    }
}
