use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{ContainerParser, ParserError};
use crate::infrastructure::observability::text_preview;

use super::text_sanitizer::fold_compatibility_chars;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(120);

/// Reads the embedded text layer of a PDF, one string per page.
pub struct PdfOxideParser {
    timeout: Duration,
}

impl Default for PdfOxideParser {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfOxideParser {
    pub fn new() -> Self {
        Self {
            timeout: EXTRACTION_TIMEOUT,
        }
    }

    fn extract_pages(path: &Path) -> Result<Vec<String>, ParserError> {
        let mut doc = PdfDocument::open(path)
            .map_err(|e| ParserError::Malformed(format!("failed to parse PDF: {e}")))?;

        let page_count = doc.page_count().map_err(|e| {
            ParserError::ExtractionFailed(format!("failed to read page count: {e}"))
        })?;

        let mut pages = Vec::with_capacity(page_count);

        for page_index in 0..page_count {
            let text = match doc.extract_text(page_index) {
                Ok(text) => fold_compatibility_chars(&text),
                Err(e) => {
                    tracing::debug!(page = page_index + 1, error = %e, "Page has no extractable text");
                    String::new()
                }
            };
            pages.push(text);
        }

        Ok(pages)
    }
}

#[async_trait]
impl ContainerParser for PdfOxideParser {
    #[tracing::instrument(skip(self), fields(path = %path.display()))]
    async fn extract_units(&self, path: &Path) -> Result<Vec<String>, ParserError> {
        let owned: PathBuf = path.to_path_buf();

        let pages = tokio::time::timeout(
            self.timeout,
            tokio::task::spawn_blocking(move || Self::extract_pages(&owned)),
        )
        .await
        .map_err(|_| ParserError::TimedOut)?
        .map_err(|e| ParserError::ExtractionFailed(format!("task join error: {e}")))??;

        let empty_pages = pages.iter().filter(|p| p.trim().is_empty()).count();
        tracing::debug!(
            page_count = pages.len(),
            empty_pages,
            preview = %text_preview(pages.first().map(String::as_str).unwrap_or_default()),
            "PDF text layer read"
        );

        Ok(pages)
    }
}
