use std::io::Read;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use quick_xml::Reader;
use quick_xml::events::Event;

use crate::application::ports::{ContainerParser, ParserError};

use super::text_sanitizer::fold_compatibility_chars;

const DOCUMENT_PART: &str = "word/document.xml";

/// Paragraph text of a Word document, in document order.
pub struct DocxParser;

impl DocxParser {
    fn read_paragraphs(path: &Path) -> Result<Vec<String>, ParserError> {
        let file = std::fs::File::open(path)?;
        let mut archive = zip::ZipArchive::new(file)
            .map_err(|e| ParserError::Malformed(format!("not a docx container: {e}")))?;

        let mut xml = String::new();
        archive
            .by_name(DOCUMENT_PART)
            .map_err(|e| ParserError::Malformed(format!("missing {DOCUMENT_PART}: {e}")))?
            .read_to_string(&mut xml)?;

        paragraphs_from_document_xml(&xml)
    }
}

#[async_trait]
impl ContainerParser for DocxParser {
    #[tracing::instrument(skip(self), fields(path = %path.display()))]
    async fn extract_units(&self, path: &Path) -> Result<Vec<String>, ParserError> {
        let owned: PathBuf = path.to_path_buf();

        let paragraphs = tokio::task::spawn_blocking(move || Self::read_paragraphs(&owned))
            .await
            .map_err(|e| ParserError::ExtractionFailed(format!("task join error: {e}")))??;

        tracing::debug!(paragraphs = paragraphs.len(), "DOCX paragraphs read");
        Ok(paragraphs)
    }
}

/// Collects `w:p` paragraphs from the WordprocessingML body.
///
/// Run text (`w:t`) is concatenated, `w:tab` becomes a tab and `w:br`/`w:cr`
/// a newline. Paragraphs nested in text boxes are emitted before their parent.
pub fn paragraphs_from_document_xml(xml: &str) -> Result<Vec<String>, ParserError> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut open: Vec<String> = Vec::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:p" => open.push(String::new()),
                b"w:t" => in_text_run = true,
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:p" => paragraphs.push(String::new()),
                b"w:tab" => push_to_current(&mut open, "\t"),
                b"w:br" | b"w:cr" => push_to_current(&mut open, "\n"),
                _ => {}
            },
            Ok(Event::Text(t)) if in_text_run => {
                let text = t.unescape().map_err(|e| {
                    ParserError::Malformed(format!("bad text at {}: {e}", reader.buffer_position()))
                })?;
                push_to_current(&mut open, &text);
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => {
                    if let Some(paragraph) = open.pop() {
                        paragraphs.push(fold_compatibility_chars(&paragraph));
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ParserError::Malformed(format!(
                    "{DOCUMENT_PART} at {}: {e}",
                    reader.buffer_position()
                )));
            }
            _ => {}
        }
    }

    Ok(paragraphs)
}

fn push_to_current(open: &mut [String], text: &str) {
    if let Some(current) = open.last_mut() {
        current.push_str(text);
    }
}
