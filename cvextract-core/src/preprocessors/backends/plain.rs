//! Plain-text backend for documents that are already text (.txt, .md).

use super::TextBackend;
use anyhow::Result;
use std::path::Path;

const TEXT_EXTENSIONS: [&str; 4] = ["txt", "text", "md", "markdown"];

#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextBackend;

impl PlainTextBackend {
    pub fn new() -> Self {
        Self
    }

    pub fn supports_file_type(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| TEXT_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
            .unwrap_or(false)
    }
}

impl TextBackend for PlainTextBackend {
    fn extract_text(&self, document_bytes: &[u8]) -> Result<String> {
        // Strip a UTF-8 BOM; invalid sequences become U+FFFD
        let bytes = document_bytes
            .strip_prefix(b"\xEF\xBB\xBF")
            .unwrap_or(document_bytes);
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }

    fn name(&self) -> &str {
        "PlainTextBackend"
    }

    fn is_healthy(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_utf8_and_strips_bom() {
        let text = PlainTextBackend::new()
            .extract_text("\u{FEFF}José Núñez\nMadrid, Spain".as_bytes())
            .unwrap();
        assert_eq!(text, "José Núñez\nMadrid, Spain");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let text = PlainTextBackend::new().extract_text(b"ok \xFF done").unwrap();
        assert_eq!(text, "ok \u{FFFD} done");
    }

    #[test]
    fn test_blank_document_is_not_an_error() {
        let text = PlainTextBackend::new().extract_text(b"   \n\n").unwrap();
        assert_eq!(text, "   \n\n");
        assert_eq!(PlainTextBackend::new().extract_text(b"").unwrap(), "");
    }
}
