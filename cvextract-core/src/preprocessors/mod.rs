//! Document Preprocessors
//!
//! This module provides the preprocessing layer for converting a CV document
//! into normalized lines that feed the résumé rules.
//!
//! ## Architecture
//!
//! ```text
//! Document (PDF, TXT, MD)
//!     ↓
//! [TextBackend] (pdf-extract, plain text)
//!     ↓
//! Raw text
//!     ↓
//! [Line Normalizer]
//!     ↓
//! Vec<String> (ordered, trimmed, non-empty lines)
//! ```

pub mod backends;
pub mod document;
pub mod normalizer;
pub mod traits;

// Re-export main types
pub use backends::{BackendImpl, PlainTextBackend, TextBackend};
pub use document::DocumentPreprocessor;
pub use normalizer::normalize_text;
pub use traits::Preprocessor;

#[cfg(feature = "pdf-backend")]
pub use backends::PdfTextBackend;
