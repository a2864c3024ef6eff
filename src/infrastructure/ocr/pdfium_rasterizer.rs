use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use image::ImageFormat;
use pdfium_render::prelude::*;

use crate::application::ports::{OcrError, PageRasterizer};
use crate::domain::RasterPage;

pub const MAX_PAGES_DUE_TO_RAM_USAGE: usize = 200;
const RASTERIZE_TIMEOUT: Duration = Duration::from_secs(300);
const POINTS_PER_INCH: f32 = 72.0;

/// Renders PDF pages to PNG through the system pdfium library.
pub struct PdfiumRasterizer {
    max_pages: usize,
    timeout: Duration,
}

impl Default for PdfiumRasterizer {
    fn default() -> Self {
        Self::new(MAX_PAGES_DUE_TO_RAM_USAGE)
    }
}

impl PdfiumRasterizer {
    pub fn new(max_pages: usize) -> Self {
        Self {
            max_pages,
            timeout: RASTERIZE_TIMEOUT,
        }
    }

    fn render_pages(path: &Path, dpi: u32, max_pages: usize) -> Result<Vec<RasterPage>, OcrError> {
        let pdfium = Pdfium::new(
            Pdfium::bind_to_system_library()
                .map_err(|e| OcrError::Unavailable(format!("pdfium bind failed: {e}")))?,
        );

        let doc = pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| OcrError::RasterizationFailed(format!("pdfium open failed: {e}")))?;

        let page_count = doc.pages().len() as usize;
        let pages_to_render = page_count.min(max_pages);
        if pages_to_render < page_count {
            tracing::warn!(page_count, pages_to_render, "Page cap reached, OCR skips trailing pages");
        }

        let scale = dpi as f32 / POINTS_PER_INCH;
        let mut rendered: Vec<RasterPage> = Vec::with_capacity(pages_to_render);

        for index in 0..pages_to_render {
            let page = doc.pages().get(index as u16).map_err(|e| {
                OcrError::RasterizationFailed(format!("page {index} access failed: {e}"))
            })?;

            let width = (page.width().value * scale) as i32;
            let height = (page.height().value * scale) as i32;

            let bitmap = page
                .render_with_config(
                    &PdfRenderConfig::new()
                        .set_target_width(width)
                        .set_target_height(height),
                )
                .map_err(|e| {
                    OcrError::RasterizationFailed(format!("render page {index} failed: {e}"))
                })?;

            let mut png_bytes: Vec<u8> = Vec::new();
            bitmap
                .as_image()
                .write_to(&mut std::io::Cursor::new(&mut png_bytes), ImageFormat::Png)
                .map_err(|e| {
                    OcrError::RasterizationFailed(format!("PNG encode page {index} failed: {e}"))
                })?;

            rendered.push(RasterPage::new(index, png_bytes));
        }

        Ok(rendered)
    }
}

#[async_trait]
impl PageRasterizer for PdfiumRasterizer {
    #[tracing::instrument(skip(self), fields(path = %path.display()))]
    async fn rasterize(&self, path: &Path, dpi: u32) -> Result<Vec<RasterPage>, OcrError> {
        let owned: PathBuf = path.to_path_buf();
        let max_pages = self.max_pages;

        tokio::time::timeout(
            self.timeout,
            tokio::task::spawn_blocking(move || {
                std::panic::catch_unwind(|| Self::render_pages(&owned, dpi, max_pages))
                    .unwrap_or_else(|_| {
                        Err(OcrError::RasterizationFailed(
                            "OOM or panic during PDF rasterization".to_string(),
                        ))
                    })
            }),
        )
        .await
        .map_err(|_| OcrError::TimedOut)?
        .map_err(|e| OcrError::RasterizationFailed(format!("task join error: {e}")))?
    }
}
