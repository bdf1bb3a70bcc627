// cvextract Core Library
//
// Converts unstructured CV text into a structured résumé record.
// Main interface: ResumeProcessor (document + config → ResumeRecord).

pub mod config;
pub mod error;
pub mod output;
pub mod preprocessors;
pub mod processor;
pub mod rules;
pub mod types;

// Re-export main types and functions for easy use
pub use config::{ConfigSource, ParsingConfig, SectionRule};
pub use error::{CvError, Result};
pub use output::{calculate_document_hash, save_stages};
pub use preprocessors::{
    normalize_text, BackendImpl, DocumentPreprocessor, PlainTextBackend, Preprocessor,
    TextBackend,
};
pub use processor::{ResumeProcessor, StepProfiler};
pub use rules::PatternSet;
pub use types::*;

#[cfg(feature = "pdf-backend")]
pub use preprocessors::PdfTextBackend;
