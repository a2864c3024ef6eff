use std::path::Path;

use async_trait::async_trait;

/// Native text extraction for one container format.
///
/// Returns one string per unit (page, paragraph or whole file) in document
/// order. A unit without extractable text yields an empty string, not an error.
#[async_trait]
pub trait ContainerParser: Send + Sync {
    async fn extract_units(&self, path: &Path) -> Result<Vec<String>, ParserError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed container: {0}")]
    Malformed(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("extraction timed out")]
    TimedOut,
}
