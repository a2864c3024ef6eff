use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{ContainerParser, OcrEngine, OcrError, PageRasterizer, ParserError};
use crate::domain::{Document, DocumentFormat, ExtractedText};

use super::conversion_config::ConversionConfig;
use super::scan_heuristic::ScanHeuristic;

/// Rasterizer and recognizer used when a PDF has no usable text layer.
struct OcrFallback {
    rasterizer: Arc<dyn PageRasterizer>,
    engine: Arc<dyn OcrEngine>,
}

/// Chooses between the native text layer and OCR for each document.
pub struct TextExtractor {
    parsers: HashMap<DocumentFormat, Arc<dyn ContainerParser>>,
    ocr: Option<OcrFallback>,
    heuristic: ScanHeuristic,
    ocr_dpi: u32,
    ocr_language_hint: Option<String>,
}

impl TextExtractor {
    pub fn new(
        parsers: Vec<(DocumentFormat, Arc<dyn ContainerParser>)>,
        config: &ConversionConfig,
    ) -> Self {
        Self {
            parsers: parsers.into_iter().collect(),
            ocr: None,
            heuristic: ScanHeuristic::new(config.scan_threshold),
            ocr_dpi: config.ocr_dpi,
            ocr_language_hint: config.ocr_language_hint.clone(),
        }
    }

    pub fn with_ocr(
        mut self,
        rasterizer: Arc<dyn PageRasterizer>,
        engine: Arc<dyn OcrEngine>,
    ) -> Self {
        self.ocr = Some(OcrFallback { rasterizer, engine });
        self
    }

    #[tracing::instrument(
        skip(self, document),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
            format = %document.format,
            size_bytes = document.size_bytes,
        )
    )]
    pub async fn extract(&self, document: &Document) -> Result<ExtractedText, ExtractionError> {
        let parser = self
            .parsers
            .get(&document.format)
            .ok_or_else(|| ExtractionError::UnsupportedFormat(document.format.to_string()))?;

        match document.format {
            DocumentFormat::Pdf => self.extract_pdf(parser.as_ref(), document.path()).await,
            DocumentFormat::Docx | DocumentFormat::Txt => {
                let units = parser.extract_units(document.path()).await?;
                Ok(ExtractedText::native(units.join("\n")))
            }
        }
    }

    async fn extract_pdf(
        &self,
        parser: &dyn ContainerParser,
        path: &Path,
    ) -> Result<ExtractedText, ExtractionError> {
        let native = parser.extract_units(path).await.map(|pages| {
            tracing::info!(pages = pages.len(), "Native PDF extraction complete");
            pages.join("\n")
        });

        let native_text = match &native {
            Ok(text) => text.as_str(),
            Err(e) => {
                tracing::warn!(error = %e, "Native PDF extraction failed, treating text layer as empty");
                ""
            }
        };

        if !self.heuristic.is_likely_scanned(native_text) {
            return Ok(ExtractedText::native(native_text.to_string()));
        }

        tracing::info!(
            min_chars = self.heuristic.min_chars(),
            "Text layer missing or too short, falling back to OCR"
        );

        match self.recognize_pages(path).await {
            Ok(text) if visible_chars(&text) < visible_chars(native_text) => {
                tracing::warn!(
                    ocr_chars = visible_chars(&text),
                    native_chars = visible_chars(native_text),
                    "OCR recovered less text than the native layer, keeping native text"
                );
                Ok(ExtractedText::native(native_text.to_string()))
            }
            Ok(text) => Ok(ExtractedText::ocr(text)),
            Err(ocr) => {
                tracing::warn!(error = %ocr, "OCR fallback failed, keeping native text");
                match native {
                    Ok(text) => Ok(ExtractedText::native(text)),
                    Err(native) => Err(ExtractionError::NoTextObtainable { native, ocr }),
                }
            }
        }
    }

    async fn recognize_pages(&self, path: &Path) -> Result<String, OcrError> {
        let ocr = self
            .ocr
            .as_ref()
            .ok_or_else(|| OcrError::Unavailable("OCR fallback is disabled".to_string()))?;

        let pages = ocr.rasterizer.rasterize(path, self.ocr_dpi).await?;
        tracing::info!(pages = pages.len(), dpi = self.ocr_dpi, "Pages rasterized for OCR");

        let mut page_texts = Vec::with_capacity(pages.len());
        for page in &pages {
            let text = ocr
                .engine
                .recognize(page, self.ocr_language_hint.as_deref())
                .await?;
            tracing::debug!(page = page.index, chars = text.len(), "Page recognized");
            page_texts.push(text);
        }

        Ok(page_texts.join("\n"))
    }
}

fn visible_chars(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("parser: {0}")]
    Parser(#[from] ParserError),
    #[error("no text obtainable (native: {native}; ocr: {ocr})")]
    NoTextObtainable { native: ParserError, ocr: OcrError },
    #[error("extraction timed out after {0:?}")]
    TimedOut(Duration),
}
