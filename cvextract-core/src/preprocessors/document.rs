//! Document Preprocessor
//!
//! Extracts text through a pluggable backend, then normalizes it into lines.

use super::backends::{BackendImpl, TextBackend};
use super::normalizer::normalize_text;
use super::traits::Preprocessor;
use crate::error::{CvError, Result};
use std::path::Path;
use tracing::info;

pub struct DocumentPreprocessor {
    backend: BackendImpl,
}

impl DocumentPreprocessor {
    pub fn new(backend: BackendImpl) -> Self {
        Self { backend }
    }

    /// Create a preprocessor whose backend suits the document's file type
    pub fn for_path(path: &Path) -> Result<Self> {
        let backend = BackendImpl::for_path(path)
            .map_err(|e| CvError::backend("none", format!("{e:#}")))?;
        Ok(Self::new(backend))
    }

    /// Get the backend name for logging
    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Check if the backend is healthy
    pub fn is_healthy(&self) -> bool {
        self.backend.is_healthy()
    }
}

impl Preprocessor for DocumentPreprocessor {
    fn extract_text(&self, document_bytes: &[u8]) -> Result<String> {
        if !self.is_healthy() {
            return Err(CvError::backend(self.backend_name(), "backend is not available"));
        }
        info!(
            "📄 Extracting text with {} ({} bytes)",
            self.backend_name(),
            document_bytes.len()
        );
        self.backend
            .extract_text(document_bytes)
            .map_err(|e| CvError::backend(self.backend_name(), format!("{e:#}")))
    }

    fn normalize(&self, text: &str) -> Vec<String> {
        normalize_text(text)
    }

    fn name(&self) -> &str {
        "DocumentPreprocessor"
    }
}
