use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{ContainerParser, ParserError};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Reads a text file as UTF-8, dropping bytes that do not decode.
pub struct PlainTextParser;

#[async_trait]
impl ContainerParser for PlainTextParser {
    async fn extract_units(&self, path: &Path) -> Result<Vec<String>, ParserError> {
        let bytes = tokio::fs::read(path).await?;
        Ok(vec![decode_ignoring_errors(&bytes)])
    }
}

pub fn decode_ignoring_errors(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .trim_start_matches(BYTE_ORDER_MARK)
        .replace(char::REPLACEMENT_CHARACTER, "")
}
