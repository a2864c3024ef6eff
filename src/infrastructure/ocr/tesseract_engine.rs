use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{OcrEngine, OcrError};
use crate::domain::RasterPage;
use crate::infrastructure::observability::text_preview;

pub const DEFAULT_TESSERACT_LANGUAGE: &str = "por+eng";
const PAGE_TIMEOUT: Duration = Duration::from_secs(120);

/// Recognizes page images with the `tesseract` command line tool.
pub struct TesseractEngine {
    binary: PathBuf,
    default_language: String,
    page_timeout: Duration,
}

impl TesseractEngine {
    pub fn new(binary: impl Into<PathBuf>, default_language: &str) -> Self {
        Self {
            binary: binary.into(),
            default_language: default_language.to_string(),
            page_timeout: PAGE_TIMEOUT,
        }
    }

    pub async fn is_available(&self) -> bool {
        Command::new(&self.binary)
            .arg("--version")
            .output()
            .await
            .map(|output| output.status.success())
            .unwrap_or(false)
    }
}

impl Default for TesseractEngine {
    fn default() -> Self {
        Self::new("tesseract", DEFAULT_TESSERACT_LANGUAGE)
    }
}

#[async_trait]
impl OcrEngine for TesseractEngine {
    #[tracing::instrument(skip(self, page), fields(page = page.index))]
    async fn recognize(
        &self,
        page: &RasterPage,
        language_hint: Option<&str>,
    ) -> Result<String, OcrError> {
        let language = language_hint.unwrap_or(&self.default_language);
        let failed = |message: String| OcrError::RecognitionFailed {
            page: page.index,
            message,
        };

        let mut input = tempfile::Builder::new()
            .prefix("narrador-ocr-")
            .suffix(".png")
            .tempfile()
            .map_err(|e| failed(format!("failed to create temp file: {e}")))?;
        input
            .write_all(&page.png)
            .map_err(|e| failed(format!("failed to write temp file: {e}")))?;

        let output = tokio::time::timeout(
            self.page_timeout,
            Command::new(&self.binary)
                .arg(input.path())
                .arg("stdout")
                .arg("-l")
                .arg(language)
                .arg("--psm")
                .arg("3")
                .kill_on_drop(true)
                .output(),
        )
        .await
        .map_err(|_| OcrError::TimedOut)?
        .map_err(|e| OcrError::Unavailable(format!("failed to run tesseract: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(failed(format!("tesseract exited with {}: {}", output.status, stderr.trim())));
        }

        let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
        tracing::debug!(language, chars = text.len(), preview = %text_preview(&text), "Tesseract finished");

        Ok(text)
    }
}
