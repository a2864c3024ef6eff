use std::path::Path;

use async_trait::async_trait;

use crate::domain::RasterPage;

#[async_trait]
pub trait PageRasterizer: Send + Sync {
    async fn rasterize(&self, path: &Path, dpi: u32) -> Result<Vec<RasterPage>, OcrError>;
}

#[async_trait]
pub trait OcrEngine: Send + Sync {
    async fn recognize(
        &self,
        page: &RasterPage,
        language_hint: Option<&str>,
    ) -> Result<String, OcrError>;
}

#[derive(Debug, thiserror::Error)]
pub enum OcrError {
    #[error("rasterization failed: {0}")]
    RasterizationFailed(String),
    #[error("recognition failed on page {page}: {message}")]
    RecognitionFailed { page: usize, message: String },
    #[error("ocr engine unavailable: {0}")]
    Unavailable(String),
    #[error("ocr timed out")]
    TimedOut,
}
