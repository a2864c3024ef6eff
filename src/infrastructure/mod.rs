pub mod language;
pub mod observability;
pub mod ocr;
pub mod speech;
pub mod storage;
pub mod text_processing;
pub mod voice;
