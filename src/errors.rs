// src/errors.rs
use thiserror::Error;

/// Rejection reasons for a submitted resume file. Each variant maps to a
/// distinct user-facing notification.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("unsupported file type: {0}")]
    UnsupportedType(String),

    #[error("file too large: {size_bytes} bytes (limit {limit_bytes})")]
    TooLarge { size_bytes: u64, limit_bytes: u64 },
}

impl ValidationError {
    pub fn user_message(&self) -> (&'static str, String) {
        match self {
            ValidationError::UnsupportedType(_) => (
                "Invalid file type",
                "Please upload a PDF, DOCX, or TXT file.".to_string(),
            ),
            ValidationError::TooLarge { .. } => (
                "File too large",
                "Please upload a file smaller than 10MB.".to_string(),
            ),
        }
    }
}

/// Failure of the simulated transfer after validation has passed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransferError {
    #[error("transfer interrupted: {0}")]
    Interrupted(String),
}

impl TransferError {
    pub fn user_message(&self) -> (&'static str, String) {
        (
            "Upload failed",
            "There was an error uploading your file. Please try again.".to_string(),
        )
    }
}

/// Failure reported by a resume analyzer backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("analysis backend failed: {0}")]
    Backend(String),
}

impl AnalysisError {
    pub fn user_message(&self) -> (&'static str, String) {
        (
            "Analysis failed",
            "We could not analyze your resume. Please try uploading it again.".to_string(),
        )
    }
}
