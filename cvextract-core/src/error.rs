use std::path::PathBuf;
use thiserror::Error;

/// Fatal pipeline errors.
///
/// Heuristic misses (no section, no date, no degree) are never errors; they
/// degrade to empty fields.
#[derive(Debug, Error)]
pub enum CvError {
    #[error("CV document not found at: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("text extraction failed ({backend}): {message}")]
    Backend { backend: String, message: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CvError {
    pub fn backend(backend: impl Into<String>, message: impl Into<String>) -> Self {
        CvError::Backend {
            backend: backend.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CvError>;
