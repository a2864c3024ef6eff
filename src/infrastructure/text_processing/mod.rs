mod docx_parser;
mod pdf_oxide_parser;
mod plain_text_parser;
mod text_sanitizer;

pub use docx_parser::{DocxParser, paragraphs_from_document_xml};
pub use pdf_oxide_parser::PdfOxideParser;
pub use plain_text_parser::{PlainTextParser, decode_ignoring_errors};
pub use text_sanitizer::fold_compatibility_chars;
