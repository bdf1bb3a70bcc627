//! Text extraction backends
//!
//! Defines the interface every document-to-text backend implements. Backends
//! are black boxes: bytes in, one raw text blob out.

#[cfg(not(feature = "pdf-backend"))]
use anyhow::anyhow;
use anyhow::Result;
use std::path::Path;

/// Backend trait for document text extraction
pub trait TextBackend: Send + Sync {
    /// Extract the full text of a document
    fn extract_text(&self, document_bytes: &[u8]) -> Result<String>;

    /// Backend identifier for logging/debugging
    fn name(&self) -> &str;

    /// Check if backend is healthy/ready
    fn is_healthy(&self) -> bool;
}

pub mod plain;
pub use plain::PlainTextBackend;

#[cfg(feature = "pdf-backend")]
pub mod pdf;

#[cfg(feature = "pdf-backend")]
pub use pdf::PdfTextBackend;

/// Backend enum for runtime backend selection
pub enum BackendImpl {
    #[cfg(feature = "pdf-backend")]
    Pdf(PdfTextBackend),
    PlainText(PlainTextBackend),
}

impl BackendImpl {
    /// Pick a backend from the document's file extension.
    ///
    /// Text-like extensions decode as text; everything else is treated as PDF.
    pub fn for_path(path: &Path) -> Result<Self> {
        if PlainTextBackend::supports_file_type(path) {
            return Ok(BackendImpl::PlainText(PlainTextBackend::new()));
        }
        Self::pdf()
    }

    #[cfg(feature = "pdf-backend")]
    pub fn pdf() -> Result<Self> {
        Ok(BackendImpl::Pdf(PdfTextBackend::new()))
    }

    /// Fallback when no PDF backend is compiled in
    #[cfg(not(feature = "pdf-backend"))]
    pub fn pdf() -> Result<Self> {
        Err(anyhow!(
            "No PDF backend compiled in!\n\
             Compile with: --features pdf-backend"
        ))
    }
}

impl TextBackend for BackendImpl {
    fn extract_text(&self, document_bytes: &[u8]) -> Result<String> {
        match self {
            #[cfg(feature = "pdf-backend")]
            BackendImpl::Pdf(backend) => backend.extract_text(document_bytes),
            BackendImpl::PlainText(backend) => backend.extract_text(document_bytes),
        }
    }

    fn name(&self) -> &str {
        match self {
            #[cfg(feature = "pdf-backend")]
            BackendImpl::Pdf(backend) => backend.name(),
            BackendImpl::PlainText(backend) => backend.name(),
        }
    }

    fn is_healthy(&self) -> bool {
        match self {
            #[cfg(feature = "pdf-backend")]
            BackendImpl::Pdf(backend) => backend.is_healthy(),
            BackendImpl::PlainText(backend) => backend.is_healthy(),
        }
    }
}
