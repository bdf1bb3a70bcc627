// Preprocessor abstraction for résumé processing
//
// This module defines the boundary between document preprocessing
// (document -> lines) and heuristic segmentation (lines -> record). Everything
// after this point works with normalized lines and is format-agnostic.

use crate::error::{CvError, Result};
use std::path::Path;

/// Preprocessor trait - converts documents to normalized lines
///
/// The preprocessing happens in two clear steps:
/// 1. Document -> raw text (backend call, may fail)
/// 2. Raw text -> normalized lines (pure, never fails)
pub trait Preprocessor {
    /// Step 1: Extract the document's raw text
    fn extract_text(&self, document_bytes: &[u8]) -> Result<String>;

    /// Step 2: Normalize raw text into ordered, non-empty lines
    fn normalize(&self, text: &str) -> Vec<String>;

    /// Convenience method: Full document processing (combines both steps)
    fn process(&self, document_bytes: &[u8]) -> Result<Vec<String>> {
        let text = self.extract_text(document_bytes)?;
        Ok(self.normalize(&text))
    }

    /// Convenience method: Read a document from disk and extract its text
    ///
    /// A missing path is reported before any read is attempted.
    fn read_text(&self, input: &Path) -> Result<String> {
        if !input.is_file() {
            return Err(CvError::MissingInput(input.to_path_buf()));
        }
        let document_bytes = std::fs::read(input)?;
        self.extract_text(&document_bytes)
    }

    /// Convenience method: Process from file path
    fn process_file(&self, input: &Path) -> Result<Vec<String>> {
        let text = self.read_text(input)?;
        Ok(self.normalize(&text))
    }

    /// Get preprocessor name for debugging/logging
    fn name(&self) -> &str;
}
