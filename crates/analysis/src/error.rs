use thiserror::Error;

/// Errors that can occur during transcript analysis.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// IO operation error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Unsupported transcript format.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
    /// General parse error.
    #[error("Parse error: {0}")]
    Parse(String),
    /// Invalid format specification.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Malformed enumeration pattern.
    #[error("Invalid enumeration: {0}")]
    InvalidEnumeration(String),
}

/// Result type alias for analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;
