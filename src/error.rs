// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unsupported file type: {extension}. Supported: .txt, .pdf, .docx")]
    UnsupportedFormat { extension: String },

    #[error("Failed to parse {format} document {path}: {message}")]
    ParseFailure {
        path: PathBuf,
        format: &'static str,
        message: String,
    },

    #[error("Backend unreachable at {url}: {message}")]
    BackendUnreachable { url: String, message: String },

    #[error("Backend error from {url}: {message}")]
    BackendError { url: String, message: String },

    #[error("Invalid JSON response from model: {message}")]
    InvalidJson { message: String, preview: String },

    #[error("Schema violation{}: {message}", location(.index, .field))]
    SchemaViolation {
        index: Option<usize>,
        field: Option<String>,
        message: String,
    },

    #[error("File operation failed for {path}: {source}")]
    FileOperation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl PipelineError {
    /// Transport, HTTP and malformed-model-output failures may succeed on a
    /// second attempt; everything else is a data or setup problem.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            PipelineError::BackendUnreachable { .. }
                | PipelineError::BackendError { .. }
                | PipelineError::InvalidJson { .. }
        )
    }

    pub fn schema(index: usize, field: &str, message: impl Into<String>) -> Self {
        PipelineError::SchemaViolation {
            index: Some(index),
            field: Some(field.to_string()),
            message: message.into(),
        }
    }

    pub fn file_operation(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PipelineError::FileOperation {
            path: path.into(),
            source,
        }
    }
}

fn location(index: &Option<usize>, field: &Option<String>) -> String {
    match (index, field) {
        (Some(index), Some(field)) => format!(" in item {} (field '{}')", index, field),
        (Some(index), None) => format!(" in item {}", index),
        (None, Some(field)) => format!(" (field '{}')", field),
        (None, None) => String::new(),
    }
}

impl From<serde_json::Error> for PipelineError {
    fn from(err: serde_json::Error) -> Self {
        PipelineError::Serialization(err.to_string())
    }
}
