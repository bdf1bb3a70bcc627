//! PDF backend built on the `pdf-extract` crate.
//!
//! Pure Rust, no external runtime. Encrypted and corrupted PDFs surface as
//! errors; scanned (image-only) PDFs yield whatever text layer they carry,
//! usually none.

use super::TextBackend;
use anyhow::{anyhow, Result};
use std::panic;

#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextBackend;

impl PdfTextBackend {
    pub fn new() -> Self {
        Self
    }
}

impl TextBackend for PdfTextBackend {
    fn extract_text(&self, document_bytes: &[u8]) -> Result<String> {
        // pdf-extract panics on some malformed inputs; treat that as a failed extraction
        panic::catch_unwind(|| pdf_extract::extract_text_from_mem(document_bytes))
            .map_err(|_| anyhow!("pdf-extract panicked while reading the document"))?
            .map_err(|e| anyhow!("pdf-extract failed: {e}"))
    }

    fn name(&self) -> &str {
        "PdfTextBackend"
    }

    fn is_healthy(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_are_an_error() {
        let result = PdfTextBackend::new().extract_text(b"definitely not a pdf");
        assert!(result.is_err());
    }
}
