use thiserror::Error;

/// Errors at the edges of the analyzer (file reading, registry loading,
/// detector construction). The analysis pass itself never fails.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid detector pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
